//! Fixed navigation bar with scroll tracking and a mobile menu.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::data::{NavItem, PortfolioData};
use crate::icons::nav_icon;

/// Page offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Viewport y-coordinate that decides which section is active.
pub const ACTIVE_LINE: f64 = 100.0;

/// Vertical extent of a section relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds<'a> {
	/// Element id of the section.
	pub id: &'a str,
	/// Top edge, viewport-relative.
	pub top: f64,
	/// Bottom edge, viewport-relative.
	pub bottom: f64,
}

/// First section straddling the activation line, if any.
pub fn active_section<'a>(sections: &[SectionBounds<'a>]) -> Option<&'a str> {
	sections
		.iter()
		.find(|s| s.top <= ACTIVE_LINE && s.bottom >= ACTIVE_LINE)
		.map(|s| s.id)
}

/// Whether the page has scrolled past [`SCROLLED_THRESHOLD`].
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD
}

/// Smoothly scrolls the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn measure_sections(items: &[NavItem]) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let rects: Vec<(String, f64, f64)> = items
		.iter()
		.filter_map(|item| {
			let rect = document
				.get_element_by_id(item.section_id())?
				.get_bounding_client_rect();
			Some((item.section_id().to_string(), rect.top(), rect.bottom()))
		})
		.collect();
	let bounds: Vec<SectionBounds> = rects
		.iter()
		.map(|(id, top, bottom)| SectionBounds {
			id,
			top: *top,
			bottom: *bottom,
		})
		.collect();
	active_section(&bounds).map(str::to_string)
}

/// Fixed top navigation with a slide-in mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let open = RwSignal::new(false);
	let scrolled = RwSignal::new(false);
	let active = RwSignal::new(String::from("home"));

	let items = data.navigation.clone();
	let scroll_items = items.clone();
	let scroll = window_event_listener(ev::scroll, move |_| {
		let y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		scrolled.set(is_scrolled(y));
		if let Some(id) = measure_sections(&scroll_items) {
			active.set(id);
		}
	});
	on_cleanup(move || scroll.remove());

	let links = move |mobile: bool| {
		items
			.iter()
			.map(|item| {
				let id = item.section_id().to_string();
				let target = id.clone();
				let icon = nav_icon(&item.icon);
				let class = if mobile { "navbar__mobile-link" } else { "navbar__link" };
				view! {
					<a
						href=item.href.clone()
						class=class
						class:active=move || active.get() == id
						on:click=move |ev| {
							ev.prevent_default();
							scroll_to_section(&target);
							open.set(false);
						}
					>
						<span class=icon.class()>{icon.glyph()}</span>
						<span class="navbar__text">{item.name.clone()}</span>
					</a>
				}
			})
			.collect_view()
	};
	let desktop = links(false);
	let mobile = links(true);

	view! {
		<nav class="navbar" class:scrolled=move || scrolled.get()>
			<div class="navbar__container">
				<div class="navbar__logo">
					<a
						href="#home"
						on:click=move |ev| {
							ev.prevent_default();
							scroll_to_section("home");
							open.set(false);
						}
					>
						<span class="logo-text">{data.personal.initials.clone()}</span>
					</a>
				</div>
				<div class="navbar__nav navbar__nav--desktop">{desktop}</div>
				<button
					class="navbar__toggle"
					aria-label="Toggle mobile menu"
					on:click=move |_| open.update(|o| *o = !*o)
				>
					{move || if open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>
			</div>
		</nav>
		<div class="navbar__mobile-layer" class:open=move || open.get()>
			<div class="navbar__overlay" on:click=move |_| open.set(false) />
			<div class="navbar__mobile">
				<div class="navbar__mobile-header">
					<span class="navbar__mobile-title">"Navigation"</span>
					<button
						class="navbar__close"
						aria-label="Close mobile menu"
						on:click=move |_| open.set(false)
					>
						"\u{2715}"
					</button>
				</div>
				<nav class="navbar__mobile-nav">{mobile}</nav>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bounds(id: &str, top: f64, bottom: f64) -> SectionBounds<'_> {
		SectionBounds { id, top, bottom }
	}

	#[test]
	fn first_straddling_section_wins() {
		let sections = [
			bounds("home", -900.0, -100.0),
			bounds("about", -100.0, 400.0),
			bounds("skills", 400.0, 1200.0),
		];
		assert_eq!(active_section(&sections), Some("about"));
	}

	#[test]
	fn line_is_inclusive_on_both_edges() {
		assert_eq!(active_section(&[bounds("a", 100.0, 300.0)]), Some("a"));
		assert_eq!(active_section(&[bounds("a", -50.0, 100.0)]), Some("a"));
	}

	#[test]
	fn gap_between_sections_keeps_previous() {
		let sections = [bounds("home", -500.0, 80.0), bounds("about", 120.0, 800.0)];
		assert_eq!(active_section(&sections), None);
	}

	#[test]
	fn scrolled_after_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
	}
}
