//! Landing section: name, cycling title, socials, and primary actions.

use std::sync::Arc;

use leptos::prelude::*;

use super::navbar::scroll_to_section;
use super::particle_field::ParticleBackground;
use super::sections::social_links;
use super::typewriter::TypewriterText;
use crate::data::PortfolioData;
use crate::icons::Icon;

/// Number of social links shown under the hero text.
const HERO_SOCIALS: usize = 3;

/// Full-height landing section over the particle background.
#[component]
pub fn Hero() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let personal = &data.personal;

	let shown = data.socials.len().min(HERO_SOCIALS);

	view! {
		<section id="home" class="hero">
			<ParticleBackground />
			<div class="hero__container">
				<div class="hero__content">
					<p class="hero__greeting">"Hello, I'm"</p>
					<h1 class="hero__name">{personal.name.clone()}</h1>
					<div class="hero__title-container">
						<span class="hero__title-prefix">"I'm a "</span>
						<TypewriterText titles=personal.roles.clone() />
					</div>
					<p class="hero__description">{personal.description.clone()}</p>
					<div class="hero__social">
						{social_links(&data.socials[..shown], "hero__social-link")}
					</div>
					<div class="hero__actions">
						<a
							class="hero__btn hero__btn--primary"
							href=personal.resume_url.clone()
							download=personal.resume_file_name.clone()
						>
							<span class=Icon::Download.class()>{Icon::Download.glyph()}</span>
							"Download Resume"
						</a>
						<button
							class="hero__btn hero__btn--secondary"
							on:click=move |_| scroll_to_section("contact")
						>
							<span class=Icon::Envelope.class()>{Icon::Envelope.glyph()}</span>
							"Get in Touch"
						</button>
					</div>
				</div>
				<div class="hero__image">
					<div class="hero__image-placeholder">
						<span class="hero__image-text">{personal.initials.clone()}</span>
					</div>
				</div>
			</div>
			<div class="hero__scroll" on:click=move |_| scroll_to_section("about")>
				<span aria-hidden="true">"\u{2304}"</span>
				<span>"Scroll to explore"</span>
			</div>
		</section>
	}
}
