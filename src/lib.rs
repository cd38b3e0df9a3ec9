//! folio-field: single-page portfolio with an animated particle background.
//!
//! The page is a Leptos CSR app. Content comes from JSON ([`data`]), and the
//! hero section sits on top of a canvas particle field
//! ([`components::particle_field`]).

use std::sync::Arc;
use std::time::Duration;

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
pub mod data;
pub mod icons;

use components::contact::Contact;
use components::hero::Hero;
use components::navbar::Navbar;
use components::sections::{About, ExperienceSection, Footer, Projects, ResumeDownload, Skills};
use components::splash::SplashScreen;
pub use components::particle_field::{FieldConfig, FieldTheme, ParticleBackground};
pub use data::{DataError, PortfolioData};

/// How long the loading spinner shows before the splash or the site.
pub const LOADING_MS: u64 = 500;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Text of the `<script id="portfolio-data">` element, if the page has one.
fn page_data_script() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load site content from the page, falling back to the compiled-in default.
pub fn load_portfolio_data() -> Result<PortfolioData, DataError> {
	let data = match page_data_script().map(|json| PortfolioData::from_json(&json)) {
		Some(Ok(data)) => data,
		Some(Err(e)) => {
			warn!("folio: ignoring page portfolio data: {e}");
			PortfolioData::embedded()?
		}
		None => PortfolioData::embedded()?,
	};
	info!(
		"folio: loaded content for {} ({} projects, {} sections)",
		data.personal.name,
		data.projects.len(),
		data.navigation.len()
	);
	Ok(data)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Loading,
	Splash,
	Site,
}

/// Every section of the page, in scroll order.
#[component]
fn Site() -> impl IntoView {
	view! {
		<div class="app">
			<Navbar />
			<main>
				<Hero />
				<About />
				<Skills />
				<Projects />
				<ExperienceSection />
				<ResumeDownload />
				<Contact />
			</main>
			<Footer />
		</div>
	}
}

/// Main application component.
/// Loads content, then runs the loading spinner and splash before the site.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = match load_portfolio_data() {
		Ok(data) => Arc::new(data),
		Err(e) => {
			error!("folio: no usable portfolio data: {e}");
			return view! {
				<Title text="Portfolio" />
				<p class="load-error">"This page could not be loaded."</p>
			}
			.into_any();
		}
	};
	provide_context(data.clone());

	let phase = RwSignal::new(Phase::Loading);
	let enable_splash = data.site.enable_splash;
	set_timeout(
		move || {
			let next = if enable_splash { Phase::Splash } else { Phase::Site };
			let _ = phase.try_set(next);
		},
		Duration::from_millis(LOADING_MS),
	);
	let on_splash_complete = Callback::new(move |()| phase.set(Phase::Site));

	let title = format!("{} | {}", data.personal.name, data.personal.title);
	let theme = data.site.preferred_theme.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{move || match phase.get() {
			Phase::Loading => view! {
				<div class="loading">
					<div class="loading__spinner" />
				</div>
			}
			.into_any(),
			Phase::Splash => view! {
				<SplashScreen
					site=data.site.clone()
					title=data.personal.name.clone()
					subtitle=data.personal.title.clone()
					on_complete=on_splash_complete
				/>
			}
			.into_any(),
			Phase::Site => view! { <Site /> }.into_any(),
		}}
	}
	.into_any()
}
