//! Page components, top to bottom.

pub mod contact;
pub mod hero;
pub mod navbar;
pub mod particle_field;
pub mod sections;
pub mod splash;
pub mod typewriter;
