//! Typewriter effect cycling through a list of titles.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

/// Delay between typed characters.
pub const TYPE_DELAY_MS: u32 = 150;
/// Delay between deleted characters.
pub const DELETE_DELAY_MS: u32 = 30;
/// Pause on a fully typed title before deleting it.
pub const HOLD_MS: u32 = 2000;

/// Types each title one character at a time, holds it, deletes it, then moves
/// on to the next title, wrapping around forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
	titles: Vec<String>,
	index: usize,
	/// Visible prefix length, in chars.
	shown: usize,
	deleting: bool,
}

impl Typewriter {
	/// Starts before the first character of the first title.
	pub fn new(titles: Vec<String>) -> Self {
		Self {
			titles,
			index: 0,
			shown: 0,
			deleting: false,
		}
	}

	/// The currently visible text.
	pub fn text(&self) -> String {
		self.titles
			.get(self.index)
			.map(|t| t.chars().take(self.shown).collect())
			.unwrap_or_default()
	}

	/// Whether the current title is being erased.
	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Advances one step and returns the delay before the next step, in ms.
	pub fn tick(&mut self) -> u32 {
		let Some(full) = self.titles.get(self.index) else {
			return TYPE_DELAY_MS;
		};
		let full_len = full.chars().count();

		if self.deleting {
			self.shown = self.shown.saturating_sub(1);
			if self.shown == 0 {
				self.deleting = false;
				self.index = (self.index + 1) % self.titles.len();
				return TYPE_DELAY_MS;
			}
			return DELETE_DELAY_MS;
		}

		if full_len == 0 {
			self.index = (self.index + 1) % self.titles.len();
			return TYPE_DELAY_MS;
		}

		self.shown = (self.shown + 1).min(full_len);
		if self.shown == full_len {
			self.deleting = true;
			return HOLD_MS;
		}
		TYPE_DELAY_MS
	}
}

/// Renders the typewriter text followed by a blinking cursor.
#[component]
pub fn TypewriterText(titles: Vec<String>) -> impl IntoView {
	let (text, set_text) = signal(String::new());
	let alive = Arc::new(AtomicBool::new(true));

	schedule(Typewriter::new(titles), set_text, alive.clone(), TYPE_DELAY_MS);
	on_cleanup(move || alive.store(false, Ordering::Relaxed));

	view! {
		<span class="typewriter">
			{move || text.get()}
			<span class="typewriter__cursor">"|"</span>
		</span>
	}
}

fn schedule(mut typewriter: Typewriter, set_text: WriteSignal<String>, alive: Arc<AtomicBool>, delay: u32) {
	set_timeout(
		move || {
			if !alive.load(Ordering::Relaxed) {
				return;
			}
			let next = typewriter.tick();
			set_text.set(typewriter.text());
			schedule(typewriter, set_text, alive, next);
		},
		Duration::from_millis(delay.into()),
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn titles(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn types_holds_deletes_and_advances() {
		let mut tw = Typewriter::new(titles(&["ab", "c"]));
		assert_eq!(tw.text(), "");

		assert_eq!(tw.tick(), TYPE_DELAY_MS);
		assert_eq!(tw.text(), "a");
		assert_eq!(tw.tick(), HOLD_MS);
		assert_eq!(tw.text(), "ab");
		assert!(tw.is_deleting());

		assert_eq!(tw.tick(), DELETE_DELAY_MS);
		assert_eq!(tw.text(), "a");
		assert_eq!(tw.tick(), TYPE_DELAY_MS);
		assert_eq!(tw.text(), "");
		assert!(!tw.is_deleting());

		assert_eq!(tw.tick(), HOLD_MS);
		assert_eq!(tw.text(), "c");
		assert_eq!(tw.tick(), TYPE_DELAY_MS);
		assert_eq!(tw.tick(), TYPE_DELAY_MS);
		assert_eq!(tw.text(), "a");
	}

	#[test]
	fn counts_characters_not_bytes() {
		let mut tw = Typewriter::new(titles(&["héllo"]));
		tw.tick();
		tw.tick();
		assert_eq!(tw.text(), "hé");
	}

	#[test]
	fn empty_titles_are_skipped() {
		let mut tw = Typewriter::new(titles(&["", "x"]));
		assert_eq!(tw.tick(), TYPE_DELAY_MS);
		assert_eq!(tw.tick(), HOLD_MS);
		assert_eq!(tw.text(), "x");
	}

	#[test]
	fn no_titles_stays_blank() {
		let mut tw = Typewriter::new(Vec::new());
		for _ in 0..5 {
			assert_eq!(tw.tick(), TYPE_DELAY_MS);
			assert_eq!(tw.text(), "");
		}
	}
}
