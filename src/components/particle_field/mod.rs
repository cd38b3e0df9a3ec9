//! Animated particle background.
//!
//! A fixed pool of softly glowing particles drifts across a full-viewport
//! canvas, with:
//! - Linear fade-in and fade-out over each particle's randomized lifetime
//! - In-place rebirth, so the pool never grows or shrinks
//! - Faint connecting lines between particles closer than a threshold
//! - Attraction toward the mouse pointer
//!
//! # Example
//!
//! ```ignore
//! use folio_field::components::particle_field::ParticleBackground;
//!
//! view! {
//!     <section class="hero">
//!         <ParticleBackground />
//!     </section>
//! }
//! ```

mod component;
pub mod config;
mod particles;
mod render;
pub mod theme;

pub use component::ParticleBackground;
pub use config::FieldConfig;
pub use particles::{FieldSurface, Link, Particle, ParticleField, Sprite};
pub use theme::FieldTheme;
