//! Visual styling for the particle field.
//!
//! Particle color is derived from screen position, so the theme only holds
//! the hue mapping and the fixed saturation/lightness pairs. Links use a single
//! flat color.

/// RGBA color representation.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color from components.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// HSLA color, hue in degrees and saturation/lightness in percent.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub h: f64,
	pub s: f64,
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	/// CSS `hsla()` notation.
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Maps a particle's normalized position to a hue.
#[derive(Clone, Debug)]
pub struct HueMapping {
	/// Hue at the top-left corner.
	pub base: f64,
	/// Hue added across the full width.
	pub span_x: f64,
	/// Hue added across the full height.
	pub span_y: f64,
}

impl HueMapping {
	/// Hue in `[0, 360)` for a point on a `width × height` surface.
	pub fn hue_at(&self, x: f64, y: f64, width: f64, height: f64) -> f64 {
		let nx = if width > 0.0 { x / width } else { 0.0 };
		let ny = if height > 0.0 { y / height } else { 0.0 };
		(nx * self.span_x + ny * self.span_y + self.base).rem_euclid(360.0)
	}
}

/// Particle and link styling.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Position to hue mapping.
	pub hue: HueMapping,
	/// Saturation shared by glow and core, in percent.
	pub saturation: f64,
	/// Lightness of the soft glow, in percent.
	pub glow_lightness: f64,
	/// Lightness of the solid core, in percent.
	pub core_lightness: f64,
	/// Glow alpha relative to the particle's opacity.
	pub glow_alpha: f64,
	/// Glow radius relative to the core radius.
	pub glow_radius: f64,
	/// Stroke color of links.
	pub link_color: Color,
	/// Stroke width of links, in pixels.
	pub link_width: f64,
}

impl FieldTheme {
	/// Color at the center of the glow.
	pub fn glow_color(&self, hue: f64, opacity: f64) -> Hsla {
		Hsla {
			h: hue,
			s: self.saturation,
			l: self.glow_lightness,
			a: opacity * self.glow_alpha,
		}
	}

	/// Color of the solid core.
	pub fn core_color(&self, hue: f64, opacity: f64) -> Hsla {
		Hsla {
			h: hue,
			s: self.saturation,
			l: self.core_lightness,
			a: opacity,
		}
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			hue: HueMapping {
				base: 180.0,
				span_x: 60.0,
				span_y: 60.0,
			},
			saturation: 70.0,
			glow_lightness: 60.0,
			core_lightness: 80.0,
			glow_alpha: 0.8,
			glow_radius: 2.0,
			link_color: Color::rgb(0, 212, 255),
			link_width: 0.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hue_sweeps_from_cyan_toward_violet() {
		let theme = FieldTheme::default();
		assert_eq!(theme.hue.hue_at(0.0, 0.0, 800.0, 600.0), 180.0);
		assert_eq!(theme.hue.hue_at(400.0, 300.0, 800.0, 600.0), 240.0);
		let corner = theme.hue.hue_at(799.0, 599.0, 800.0, 600.0);
		assert!(corner < 300.0 && corner > 299.0);
	}

	#[test]
	fn hue_wraps_past_full_circle() {
		let mapping = HueMapping {
			base: 350.0,
			span_x: 60.0,
			span_y: 0.0,
		};
		assert!((mapping.hue_at(50.0, 0.0, 100.0, 100.0) - 20.0).abs() < 1e-9);
	}

	#[test]
	fn glow_is_dimmer_than_core() {
		let theme = FieldTheme::default();
		assert_eq!(theme.glow_color(200.0, 0.5).a, 0.4);
		assert_eq!(theme.core_color(200.0, 0.5).a, 0.5);
		assert_eq!(
			theme.core_color(200.0, 1.0).to_css(),
			"hsla(200, 70%, 80%, 1)"
		);
	}

	#[test]
	fn link_color_is_opaque_hex() {
		assert_eq!(FieldTheme::default().link_color.to_css(), "#00d4ff");
		assert_eq!(
			Color::rgb(0, 212, 255).with_alpha(0.5).to_css(),
			"rgba(0, 212, 255, 0.5)"
		);
	}
}
