//! Simulation tunables for the particle field.
//!
//! Every constant that shapes the field's behavior lives here so the physics
//! and lifecycle code never hard-codes a number.
//!
//! # Units
//!
//! - **Distances** are in CSS pixels of the drawing surface.
//! - **Times** are in milliseconds, measured against the same clock that is
//!   passed to [`ParticleField::frame`](super::particles::ParticleField::frame).
//! - **Velocities** are per-frame deltas, not per-second rates. The field
//!   advances once per display refresh, so motion speed follows the refresh rate.

use std::ops::RangeInclusive;

/// Configuration for particle lifetime and fading.
#[derive(Clone, Debug)]
pub struct LifeConfig {
	/// Range a freshly (re)born particle draws its lifetime from.
	pub life_ms: RangeInclusive<f64>,
	/// Length of the linear fade-in window at the start of life.
	pub fade_in_ms: f64,
	/// Length of the linear fade-out window at the end of life.
	pub fade_out_ms: f64,
}

/// Configuration for initial kinematics.
#[derive(Clone, Debug)]
pub struct MotionConfig {
	/// Symmetric bound for the planar velocity components (`vx`, `vy`).
	pub planar_speed: f64,
	/// Range of the depth velocity `vz`.
	pub depth_speed: RangeInclusive<f64>,
	/// Range of the pseudo-depth `z`. Smaller is nearer and drawn larger.
	pub depth: RangeInclusive<f64>,
	/// Core radius of a particle sitting at depth zero.
	pub near_size: f64,
}

/// Configuration for proximity links between particles.
#[derive(Clone, Debug)]
pub struct LinkConfig {
	/// Links are drawn only for pairs strictly closer than this.
	pub max_distance: f64,
	/// Alpha of a zero-length link between two fully visible particles.
	pub max_alpha: f64,
}

/// Configuration for the pointer attraction impulse.
#[derive(Clone, Debug)]
pub struct PointerConfig {
	/// Particles strictly within this distance of the pointer are attracted.
	pub radius: f64,
	/// Impulse multiplier applied at zero distance.
	pub strength: f64,
}

/// Complete configuration for a particle field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// One particle per this many pixels of viewport width.
	pub pixels_per_particle: f64,
	/// Upper bound on the pool size.
	pub max_particles: usize,
	/// Lifetime and fading.
	pub life: LifeConfig,
	/// Initial kinematics.
	pub motion: MotionConfig,
	/// Proximity links.
	pub link: LinkConfig,
	/// Pointer attraction.
	pub pointer: PointerConfig,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			pixels_per_particle: 15.0,
			max_particles: 80,
			life: LifeConfig {
				life_ms: 2000.0..=5000.0,
				fade_in_ms: 1000.0,
				fade_out_ms: 1000.0,
			},
			motion: MotionConfig {
				planar_speed: 0.15,
				depth_speed: 0.1..=0.6,
				depth: 1.0..=1000.0,
				near_size: 2.0,
			},
			link: LinkConfig {
				max_distance: 150.0,
				max_alpha: 0.3,
			},
			pointer: PointerConfig {
				radius: 100.0,
				strength: 0.01,
			},
		}
	}
}

impl FieldConfig {
	/// Number of particles for a viewport of the given width.
	///
	/// The result is fixed for the lifetime of a field; later resizes do not
	/// change it.
	pub fn particle_count(&self, viewport_width: f64) -> usize {
		if !(viewport_width > 0.0) || self.pixels_per_particle <= 0.0 {
			return 0;
		}
		let count = (viewport_width / self.pixels_per_particle).floor() as usize;
		count.min(self.max_particles)
	}

	/// Depth at which a particle shrinks to nothing.
	pub fn far_plane(&self) -> f64 {
		*self.motion.depth.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_follows_viewport_width() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(800.0), 53);
		assert_eq!(config.particle_count(150.0), 10);
		assert_eq!(config.particle_count(14.0), 0);
	}

	#[test]
	fn count_is_capped() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(1200.0), 80);
		assert_eq!(config.particle_count(3840.0), 80);
	}

	#[test]
	fn degenerate_widths_yield_empty_pool() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(0.0), 0);
		assert_eq!(config.particle_count(-20.0), 0);
		assert_eq!(config.particle_count(f64::NAN), 0);
	}
}
