//! Intro splash screen with a timed progress bar.
//!
//! The splash completes on its own after the configured duration, or early
//! when the user clicks it or presses Escape. Completion plays a short exit
//! transition before notifying the parent.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::debug;

use crate::data::SiteConfig;

/// How often the progress bar advances.
pub const PROGRESS_TICK_MS: u32 = 100;
/// Length of the exit transition before the parent is notified.
pub const EXIT_MS: u32 = 500;

/// Chooses the splash duration, honoring the reduced-motion preference.
pub fn splash_duration(site: &SiteConfig, prefers_reduced_motion: bool) -> u32 {
	if prefers_reduced_motion {
		site.reduced_motion_duration_ms
	} else {
		site.splash_duration_ms
	}
}

/// Progress bar state, advanced once per [`PROGRESS_TICK_MS`].
#[derive(Clone, Debug, PartialEq)]
pub struct SplashProgress {
	/// Ticks needed to reach 100%.
	total_ticks: f64,
	ticks: u32,
}

impl SplashProgress {
	/// Empty progress for a splash lasting `duration_ms`.
	pub fn new(duration_ms: u32) -> Self {
		Self {
			total_ticks: f64::from(duration_ms) / f64::from(PROGRESS_TICK_MS),
			ticks: 0,
		}
	}

	/// Advances one tick and returns the new percentage.
	pub fn tick(&mut self) -> f64 {
		if !self.is_full() {
			self.ticks += 1;
		}
		self.percent()
	}

	/// Completion in percent, saturating at 100.
	pub fn percent(&self) -> f64 {
		if self.total_ticks <= 0.0 {
			return if self.ticks > 0 { 100.0 } else { 0.0 };
		}
		(f64::from(self.ticks) * 100.0 / self.total_ticks).min(100.0)
	}

	/// Percentage shown as text, rounded to a whole number.
	pub fn label(&self) -> String {
		format!("{}%", self.percent().round() as u32)
	}

	/// Whether the bar has reached 100%.
	pub fn is_full(&self) -> bool {
		self.percent() >= 100.0
	}
}

fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
		.is_some_and(|mq| mq.matches())
}

/// Full-screen intro overlay.
#[component]
pub fn SplashScreen(
	site: SiteConfig,
	#[prop(into)] title: String,
	#[prop(into)] subtitle: String,
	#[prop(into)] on_complete: Callback<()>,
) -> impl IntoView {
	let duration = splash_duration(&site, prefers_reduced_motion());
	let progress = RwSignal::new(SplashProgress::new(duration));
	let visible = RwSignal::new(true);
	let completed = Arc::new(AtomicBool::new(false));

	let complete = {
		let completed = completed.clone();
		move || {
			if completed.swap(true, Ordering::Relaxed) {
				return;
			}
			debug!("folio: splash complete");
			let _ = visible.try_set(false);
			set_timeout(
				move || on_complete.run(()),
				Duration::from_millis(EXIT_MS.into()),
			);
		}
	};

	let interval = set_interval_with_handle(
		move || {
			let _ = progress.try_update(|p| p.tick());
		},
		Duration::from_millis(PROGRESS_TICK_MS.into()),
	)
	.ok();

	let timeout = {
		let complete = complete.clone();
		set_timeout_with_handle(complete, Duration::from_millis(duration.into())).ok()
	};

	let keydown = {
		let complete = complete.clone();
		window_event_listener(ev::keydown, move |ev| {
			if ev.key() == "Escape" {
				complete();
			}
		})
	};

	on_cleanup(move || {
		if let Some(handle) = interval {
			handle.clear();
		}
		if let Some(handle) = timeout {
			handle.clear();
		}
		keydown.remove();
	});

	let on_skip = move |_| complete();

	view! {
		<div
			class="splash-screen"
			class:leaving=move || !visible.get()
			on:click=on_skip
		>
			<div class="splash-screen__content">
				<div class="splash-screen__logo" aria-hidden="true">
					<svg width="120" height="120" viewBox="0 0 120 120" class="logo-svg">
						<circle cx="60" cy="60" r="55" fill="none" stroke="#00d4ff" stroke-width="3" />
						<circle cx="60" cy="60" r="3" fill="#8338ec" />
					</svg>
				</div>
				<div class="splash-screen__text">
					<h1 class="splash-screen__title">{title}</h1>
					<p class="splash-screen__subtitle">{subtitle}</p>
				</div>
				<div class="splash-screen__progress">
					<div class="progress-bar">
						<div
							class="progress-bar__fill"
							style:width=move || format!("{}%", progress.with(|p| p.percent()))
						/>
					</div>
					<span class="progress-text">{move || progress.with(SplashProgress::label)}</span>
				</div>
				<button class="splash-screen__skip" aria-label="Skip animation">
					"Skip Animation (ESC)"
				</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_duration_fills_in_thirty_ticks() {
		let mut progress = SplashProgress::new(3000);
		for _ in 0..29 {
			progress.tick();
		}
		assert!(!progress.is_full());
		progress.tick();
		assert!(progress.is_full());
		assert_eq!(progress.label(), "100%");
	}

	#[test]
	fn progress_saturates() {
		let mut progress = SplashProgress::new(1200);
		for _ in 0..50 {
			progress.tick();
		}
		assert_eq!(progress.percent(), 100.0);
	}

	#[test]
	fn label_rounds_percent() {
		let mut progress = SplashProgress::new(1200);
		progress.tick();
		assert_eq!(progress.label(), "8%");
	}

	#[test]
	fn zero_duration_completes_immediately() {
		let mut progress = SplashProgress::new(0);
		assert_eq!(progress.tick(), 100.0);
	}

	#[test]
	fn reduced_motion_shortens_splash() {
		let site = SiteConfig::default();
		assert_eq!(splash_duration(&site, false), 3000);
		assert_eq!(splash_duration(&site, true), 1200);
	}
}
