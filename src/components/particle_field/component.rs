//! Leptos component hosting the particle field canvas.
//!
//! On mount the component sizes its canvas to its laid-out box, builds a
//! [`ParticleField`], registers window `resize` and `mousemove` listeners, and
//! starts a `requestAnimationFrame` loop. Everything is released when the
//! component's owner is cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::render::CanvasSurface;
use super::theme::FieldTheme;

/// Simulation state shared between the frame loop and the event listeners.
struct FieldContext {
	field: ParticleField,
	theme: FieldTheme,
	ctx: CanvasRenderingContext2d,
}

/// Source of display-refresh callbacks for a [`FrameLoop`].
trait FrameScheduler {
	/// Requests one more frame, returning its handle.
	fn request(&self) -> Option<i32>;
	/// Withdraws a frame requested earlier.
	fn cancel(&self, id: i32);
}

/// A repeating per-frame task that can be cancelled between frames.
struct FrameLoop<S> {
	scheduler: S,
	tick: RefCell<Box<dyn FnMut()>>,
	pending: Cell<Option<i32>>,
	cancelled: Cell<bool>,
}

impl<S: FrameScheduler> FrameLoop<S> {
	fn new(scheduler: S, tick: impl FnMut() + 'static) -> Self {
		Self {
			scheduler,
			tick: RefCell::new(Box::new(tick)),
			pending: Cell::new(None),
			cancelled: Cell::new(false),
		}
	}

	/// Runs one frame and requests the next, unless cancelled.
	fn run_frame(&self) {
		self.pending.set(None);
		if self.cancelled.get() {
			return;
		}
		{
			let mut tick = self.tick.borrow_mut();
			(*tick)();
		}
		self.schedule();
	}

	fn schedule(&self) {
		if self.cancelled.get() {
			return;
		}
		if let Some(id) = self.scheduler.request() {
			self.pending.set(Some(id));
		}
	}

	/// Stops the loop. A frame already running completes; no further frame runs.
	fn cancel(&self) {
		self.cancelled.set(true);
		if let Some(id) = self.pending.take() {
			self.scheduler.cancel(id);
		}
	}
}

/// `requestAnimationFrame` on the window, re-entering one shared closure.
struct AnimationFrames {
	window: Window,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameScheduler for AnimationFrames {
	fn request(&self) -> Option<i32> {
		let callback = self.callback.borrow();
		self.window
			.request_animation_frame(callback.as_ref()?.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel(&self, id: i32) {
		let _ = self.window.cancel_animation_frame(id);
	}
}

/// Starts a loop calling `tick` once per display refresh.
fn start_frames(window: Window, tick: impl FnMut() + 'static) -> Rc<FrameLoop<AnimationFrames>> {
	let frames = Rc::new(FrameLoop::new(
		AnimationFrames {
			window,
			callback: RefCell::new(None),
		},
		tick,
	));

	let handle: Weak<FrameLoop<AnimationFrames>> = Rc::downgrade(&frames);
	*frames.scheduler.callback.borrow_mut() = Some(Closure::new(move || {
		if let Some(frames) = handle.upgrade() {
			frames.run_frame();
		}
	}));

	frames.schedule();
	frames
}

/// Maps a viewport pointer position onto the drawing surface.
///
/// `rect` is the canvas box as `(left, top, width, height)` in CSS pixels and
/// `surface` its pixel size. Positions outside the box yield `None`.
fn pointer_on_surface(
	client: (f64, f64),
	rect: (f64, f64, f64, f64),
	surface: (f64, f64),
) -> Option<(f64, f64)> {
	let (left, top, width, height) = rect;
	let (x, y) = (client.0 - left, client.1 - top);
	if !(width > 0.0 && height > 0.0) || x < 0.0 || y < 0.0 || x > width || y > height {
		return None;
	}
	Some((x * surface.0 / width, y * surface.1 / height))
}

/// Everything registered with the browser while the field is mounted.
///
/// Dropping it cancels the frame loop and removes both listeners.
struct MountedField {
	window: Window,
	frames: Rc<FrameLoop<AnimationFrames>>,
	on_resize: Closure<dyn FnMut()>,
	on_pointer: Closure<dyn FnMut(MouseEvent)>,
}

impl MountedField {
	fn mount(canvas: HtmlCanvasElement, config: FieldConfig) -> Option<Self> {
		let Some(window) = web_sys::window() else {
			warn!("folio: no window, particle field not mounted");
			return None;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("folio: 2d canvas context unavailable, particle field not mounted");
			return None;
		};

		let (w, h) = surface_size(&canvas, &window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let field = ParticleField::new(config, w, h, js_sys::Date::now());
		info!(
			"folio: particle field mounted with {} particles ({}x{})",
			field.len(),
			w,
			h
		);
		let state = Rc::new(RefCell::new(FieldContext {
			field,
			theme: FieldTheme::default(),
			ctx,
		}));

		let (state_resize, canvas_resize, window_resize) =
			(state.clone(), canvas.clone(), window.clone());
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			let (nw, nh) = surface_size(&canvas_resize, &window_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			state_resize.borrow_mut().field.resize(nw, nh);
		});
		let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

		let state_pointer = state.clone();
		let on_pointer: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let rect = canvas.get_bounding_client_rect();
			let Some((x, y)) = pointer_on_surface(
				(f64::from(ev.client_x()), f64::from(ev.client_y())),
				(rect.left(), rect.top(), rect.width(), rect.height()),
				(f64::from(canvas.width()), f64::from(canvas.height())),
			) else {
				return;
			};
			state_pointer.borrow_mut().field.attract(x, y);
		});
		let _ =
			window.add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref());

		let frames = start_frames(window.clone(), move || {
			let c = &mut *state.borrow_mut();
			let mut surface = CanvasSurface::new(&c.ctx, &c.theme);
			c.field.frame(js_sys::Date::now(), &mut surface);
		});

		Some(Self {
			window,
			frames,
			on_resize,
			on_pointer,
		})
	}
}

impl Drop for MountedField {
	fn drop(&mut self) {
		self.frames.cancel();
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		let _ = self
			.window
			.remove_event_listener_with_callback("mousemove", self.on_pointer.as_ref().unchecked_ref());
		debug!("folio: particle field unmounted");
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Pixel size for the canvas: its own laid-out box, or the viewport before layout.
fn surface_size(canvas: &HtmlCanvasElement, window: &Window) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	if rect.width() > 0.0 && rect.height() > 0.0 {
		(rect.width().floor(), rect.height().floor())
	} else {
		viewport_size(window)
	}
}

/// Full-viewport animated particle background.
///
/// Place it inside a positioned container; the canvas stretches over the
/// container and ignores pointer events so content above stays interactive.
/// The canvas resolution follows its own box, so it matches containers taller
/// than the viewport. Pointer attraction is driven by window-level mouse
/// movement over the canvas area.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<MountedField>);
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let field = MountedField::mount(canvas, config.clone());
		mounted.update_value(|slot| *slot = field);
	});

	on_cleanup(move || {
		let _ = mounted.try_update_value(|slot| slot.take());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 1;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct ManualFrames {
		next: Cell<i32>,
		requested: RefCell<Vec<i32>>,
		withdrawn: RefCell<Vec<i32>>,
	}

	impl FrameScheduler for Rc<ManualFrames> {
		fn request(&self) -> Option<i32> {
			let id = self.next.get() + 1;
			self.next.set(id);
			self.requested.borrow_mut().push(id);
			Some(id)
		}

		fn cancel(&self, id: i32) {
			self.withdrawn.borrow_mut().push(id);
		}
	}

	#[test]
	fn cancel_inside_a_frame_lets_it_finish() {
		let frames = Rc::new(ManualFrames::default());
		let ticks = Rc::new(Cell::new(0));
		let counter = ticks.clone();
		let looped = Rc::new_cyclic(|me: &Weak<FrameLoop<Rc<ManualFrames>>>| {
			let me = me.clone();
			FrameLoop::new(frames.clone(), move || {
				counter.set(counter.get() + 1);
				if let Some(me) = me.upgrade() {
					me.cancel();
				}
			})
		});

		looped.schedule();
		looped.run_frame();
		assert_eq!(ticks.get(), 1);
		assert_eq!(*frames.requested.borrow(), [1]);

		// a frame delivered after cancellation does nothing
		looped.run_frame();
		assert_eq!(ticks.get(), 1);
		assert!(frames.withdrawn.borrow().is_empty());
	}

	#[test]
	fn cancel_between_frames_withdraws_the_pending_one() {
		let frames = Rc::new(ManualFrames::default());
		let ticks = Rc::new(Cell::new(0));
		let counter = ticks.clone();
		let looped = FrameLoop::new(frames.clone(), move || counter.set(counter.get() + 1));

		looped.schedule();
		looped.run_frame();
		looped.run_frame();
		assert_eq!(ticks.get(), 2);
		assert_eq!(*frames.requested.borrow(), [1, 2, 3]);

		looped.cancel();
		assert_eq!(*frames.withdrawn.borrow(), [3]);
		looped.run_frame();
		looped.schedule();
		assert_eq!(ticks.get(), 2);
		assert_eq!(frames.requested.borrow().len(), 3);
	}

	#[test]
	fn pointer_maps_through_stretched_canvas() {
		// 800x600 surface shown in an 800x1200 box
		let rect = (0.0, -200.0, 800.0, 1200.0);
		assert_eq!(
			pointer_on_surface((400.0, 400.0), rect, (800.0, 600.0)),
			Some((400.0, 300.0))
		);
		assert_eq!(pointer_on_surface((400.0, -250.0), rect, (800.0, 600.0)), None);
		assert_eq!(pointer_on_surface((900.0, 10.0), rect, (800.0, 600.0)), None);
	}

	#[test]
	fn pointer_ignored_for_collapsed_canvas() {
		assert_eq!(
			pointer_on_surface((0.0, 0.0), (0.0, 0.0, 0.0, 0.0), (800.0, 600.0)),
			None
		);
	}
}
