//! Particle pool simulation: kinematics, lifecycle, links, and pointer attraction.
//!
//! The field owns a fixed-size pool that is allocated once and never grows or
//! shrinks. Particles that reach the end of their life are reborn in place with
//! fresh random state, so the pool is recycled indefinitely.
//!
//! Drawing goes through the [`FieldSurface`] trait. The simulation decides
//! *what* is drawn (positions, sizes, opacities, links); the surface decides
//! *how*. This keeps the physics free of any browser dependency.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{FieldConfig, LifeConfig, LinkConfig, PointerConfig};

/// A single point-light particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Position before the most recent advance. Kept for trail effects.
	pub prev_x: f64,
	#[allow(missing_docs)]
	pub prev_y: f64,
	/// Pseudo-depth. Nearer particles (smaller `z`) are drawn larger.
	pub z: f64,
	/// Per-frame horizontal drift.
	pub vx: f64,
	/// Per-frame vertical drift.
	pub vy: f64,
	/// Per-frame depth drift, always away from the viewer.
	pub vz: f64,
	/// Timestamp of the most recent (re)birth, in milliseconds.
	pub birth: f64,
	/// Total lifetime in milliseconds.
	pub life: f64,
	/// Opacity computed during the most recent frame.
	pub opacity: f64,
}

impl Particle {
	fn spawn(rng: &mut impl Rng, config: &FieldConfig, width: f64, height: f64, now: f64) -> Self {
		let x = random_coordinate(rng, width);
		let y = random_coordinate(rng, height);
		let speed = config.motion.planar_speed.abs();
		Self {
			x,
			y,
			prev_x: x,
			prev_y: y,
			z: rng.gen_range(config.motion.depth.clone()),
			vx: rng.gen_range(-speed..=speed),
			vy: rng.gen_range(-speed..=speed),
			vz: rng.gen_range(config.motion.depth_speed.clone()),
			birth: now,
			life: rng.gen_range(config.life.life_ms.clone()),
			opacity: 0.0,
		}
	}

	/// Milliseconds since the particle was last (re)born.
	pub fn age(&self, now: f64) -> f64 {
		now - self.birth
	}

	/// Whether the particle has entered its fade-out window.
	pub fn is_fading_out(&self, now: f64, life: &LifeConfig) -> bool {
		self.age(now) > self.life - life.fade_out_ms
	}

	/// Core radius in pixels; the glow is drawn at a multiple of this.
	pub fn size(&self, config: &FieldConfig) -> f64 {
		let far = config.far_plane();
		((far - self.z) / far * config.motion.near_size).max(0.0)
	}

	/// Moves the particle one frame and wraps it into the surface bounds.
	fn advance(&mut self, width: f64, height: f64, far_plane: f64) {
		self.prev_x = self.x;
		self.prev_y = self.y;

		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
		self.z = (self.z + self.vz).min(far_plane);
	}
}

fn random_coordinate(rng: &mut impl Rng, extent: f64) -> f64 {
	if extent > 0.0 {
		rng.gen_range(0.0..extent)
	} else {
		0.0
	}
}

/// Wraps a coordinate into `[0, extent)`, teleporting across the opposite edge.
fn wrap(value: f64, extent: f64) -> f64 {
	if !(extent > 0.0) {
		return 0.0;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// Opacity for a particle of the given age: linear fade in, plateau, linear fade out.
pub fn lifecycle_opacity(age: f64, life: f64, config: &LifeConfig) -> f64 {
	let opacity = if age < config.fade_in_ms {
		age / config.fade_in_ms
	} else if age > life - config.fade_out_ms {
		(life - age) / config.fade_out_ms
	} else {
		1.0
	};
	opacity.clamp(0.0, 1.0)
}

/// Alpha of the link between two particles, or `None` if they are too far apart.
pub fn link_alpha(distance: f64, opacity_a: f64, opacity_b: f64, config: &LinkConfig) -> Option<f64> {
	if distance >= config.max_distance {
		return None;
	}
	Some((1.0 - distance / config.max_distance) * config.max_alpha * opacity_a * opacity_b)
}

/// Per-axis attraction factor for a particle at `distance` from the pointer.
///
/// The impulse added to the velocity is the pointer offset scaled by this factor.
pub fn pointer_factor(distance: f64, config: &PointerConfig) -> Option<f64> {
	if distance >= config.radius {
		return None;
	}
	Some((config.radius - distance) / config.radius * config.strength)
}

/// Everything a surface needs to draw one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
	/// Center, horizontal.
	pub x: f64,
	/// Center, vertical.
	pub y: f64,
	/// Core radius.
	pub size: f64,
	/// Overall opacity in `[0, 1]`.
	pub opacity: f64,
}

/// A connection line between two nearby particles.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	/// Position of the earlier particle in pool order.
	pub from: (f64, f64),
	/// Position of the later particle.
	pub to: (f64, f64),
	/// Line alpha in `[0, max_alpha]`.
	pub alpha: f64,
}

/// Drawing target for the particle field.
pub trait FieldSurface {
	/// Clears the whole surface. Called once at the start of every frame.
	fn clear(&mut self, width: f64, height: f64);
	/// Draws one particle as a glow with a solid core.
	fn draw_particle(&mut self, sprite: &Sprite);
	/// Draws a straight line between two particles.
	fn draw_link(&mut self, link: &Link);
}

/// The fixed-size particle pool and the bounds it wraps within.
///
/// Created when the background mounts and dropped when it unmounts. All
/// mutation happens from the frame callback and the pointer handler, which
/// share one thread.
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	config: FieldConfig,
	rng: StdRng,
}

impl ParticleField {
	/// Builds a field seeded from system entropy.
	pub fn new(config: FieldConfig, width: f64, height: f64, now: f64) -> Self {
		Self::with_rng(config, width, height, now, StdRng::from_entropy())
	}

	/// Builds a field with an explicit random source.
	pub fn with_rng(config: FieldConfig, width: f64, height: f64, now: f64, mut rng: StdRng) -> Self {
		let count = config.particle_count(width);
		let particles = (0..count)
			.map(|_| Particle::spawn(&mut rng, &config, width, height, now))
			.collect();

		Self {
			particles,
			width,
			height,
			config,
			rng,
		}
	}

	/// The pool, in update order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Pool size, fixed at construction.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the pool has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Current wrap bounds as `(width, height)`.
	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Tunables the field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Updates the wrap bounds. Positions are left alone and the pool size is
	/// unchanged; out-of-bounds particles wrap on the next frame.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Advances every particle one step and draws the result.
	///
	/// Particles are updated and drawn in pool order. Each particle links to
	/// the particles after it, which have not yet moved this frame.
	pub fn frame(&mut self, now: f64, surface: &mut impl FieldSurface) {
		surface.clear(self.width, self.height);

		for i in 0..self.particles.len() {
			self.update_particle(i, now);

			let p = &self.particles[i];
			surface.draw_particle(&Sprite {
				x: p.x,
				y: p.y,
				size: p.size(&self.config),
				opacity: p.opacity,
			});

			for q in &self.particles[i + 1..] {
				let (dx, dy) = (p.x - q.x, p.y - q.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = link_alpha(distance, p.opacity, q.opacity, &self.config.link) {
					surface.draw_link(&Link {
						from: (p.x, p.y),
						to: (q.x, q.y),
						alpha,
					});
				}
			}
		}
	}

	fn update_particle(&mut self, i: usize, now: f64) {
		let far_plane = self.config.far_plane();
		let p = &mut self.particles[i];
		p.advance(self.width, self.height, far_plane);

		let age = p.age(now);
		p.opacity = lifecycle_opacity(age, p.life, &self.config.life);

		if age >= p.life {
			*p = Particle::spawn(&mut self.rng, &self.config, self.width, self.height, now);
		}
	}

	/// Pulls particles near the pointer toward it.
	///
	/// The impulse accumulates onto the existing velocity and is not capped.
	pub fn attract(&mut self, px: f64, py: f64) {
		for p in &mut self.particles {
			let (dx, dy) = (px - p.x, py - p.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if let Some(factor) = pointer_factor(distance, &self.config.pointer) {
				p.vx += dx * factor;
				p.vy += dy * factor;
			}
		}
	}
}
