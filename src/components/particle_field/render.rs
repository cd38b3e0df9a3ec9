//! Canvas rendering for the particle field.
//!
//! Implements [`FieldSurface`] on top of a 2-D canvas context. Each particle is
//! a soft radial glow with a solid core on top; links are thin flat lines.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{FieldSurface, Link, Sprite};
use super::theme::FieldTheme;

/// A 2-D canvas context paired with the theme used to paint on it.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
	theme: &'a FieldTheme,
	width: f64,
	height: f64,
}

impl<'a> CanvasSurface<'a> {
	/// Wraps `ctx`; bounds are taken from each frame's clear.
	pub fn new(ctx: &'a CanvasRenderingContext2d, theme: &'a FieldTheme) -> Self {
		Self {
			ctx,
			theme,
			width: 0.0,
			height: 0.0,
		}
	}
}

impl FieldSurface for CanvasSurface<'_> {
	fn clear(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn draw_particle(&mut self, sprite: &Sprite) {
		// canvas rejects negative radii, and zero-size sprites are invisible anyway
		if sprite.size <= 0.0 || sprite.opacity <= 0.0 {
			return;
		}
		let hue = self
			.theme
			.hue
			.hue_at(sprite.x, sprite.y, self.width, self.height);

		draw_glow(self.ctx, self.theme, sprite, hue);
		draw_core(self.ctx, self.theme, sprite, hue);
	}

	fn draw_link(&mut self, link: &Link) {
		if link.alpha <= 0.0 {
			return;
		}
		let ctx = self.ctx;
		ctx.save();
		ctx.set_global_alpha(link.alpha);
		ctx.set_stroke_style_str(&self.theme.link_color.to_css());
		ctx.set_line_width(self.theme.link_width);
		ctx.begin_path();
		ctx.move_to(link.from.0, link.from.1);
		ctx.line_to(link.to.0, link.to.1);
		ctx.stroke();
		ctx.restore();
	}
}

fn draw_glow(ctx: &CanvasRenderingContext2d, theme: &FieldTheme, sprite: &Sprite, hue: f64) {
	let radius = sprite.size * theme.glow_radius;
	let Ok(gradient) = ctx.create_radial_gradient(sprite.x, sprite.y, 0.0, sprite.x, sprite.y, radius)
	else {
		return;
	};

	let inner = theme.glow_color(hue, sprite.opacity);
	let mid = theme.glow_color(hue, sprite.opacity * 0.3);
	let _ = gradient.add_color_stop(0.0, &inner.to_css());
	let _ = gradient.add_color_stop(0.5, &mid.to_css());
	let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");

	ctx.begin_path();
	let _ = ctx.arc(sprite.x, sprite.y, radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_core(ctx: &CanvasRenderingContext2d, theme: &FieldTheme, sprite: &Sprite, hue: f64) {
	ctx.set_fill_style_str(&theme.core_color(hue, sprite.opacity).to_css());
	ctx.begin_path();
	let _ = ctx.arc(sprite.x, sprite.y, sprite.size, 0.0, PI * 2.0);
	ctx.fill();
}
