//! Content sections rendered straight from [`PortfolioData`].

use std::sync::Arc;

use leptos::prelude::*;

use super::navbar::scroll_to_section;
use crate::data::{PortfolioData, Project, ProjectFilter, Social};
use crate::icons::{Icon, skill_icon, skill_level, social_icon, timeline_icon};

/// Section heading with the decorative underline.
#[component]
fn SectionHeader(
	#[prop(into)] block: String,
	#[prop(into)] title: String,
	#[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
	view! {
		<div class=format!("{block}__header section-header")>
			<h2 class=format!("{block}__title")>{title}</h2>
			<div class=format!("{block}__title-line") />
			{subtitle.map(|s| view! { <p class=format!("{block}__subtitle")>{s}</p> })}
		</div>
	}
}

fn technology_tags(technologies: &[String]) -> impl IntoView + use<> {
	technologies
		.iter()
		.map(|t| view! { <span class="tech-tag">{t.clone()}</span> })
		.collect_view()
}

/// Renders a list of social links.
pub fn social_links(socials: &[Social], class: &'static str) -> impl IntoView + use<> {
	socials
		.iter()
		.map(|social| {
			let icon = social_icon(&social.icon);
			let (target, rel) = if social.is_external() {
				("_blank", "noopener noreferrer")
			} else {
				("_self", "")
			};
			view! {
				<a
					href=social.url.clone()
					class=class
					target=target
					rel=rel
					aria-label=social.name.clone()
				>
					<span class=icon.class()>{icon.glyph()}</span>
				</a>
			}
		})
		.collect_view()
}

/// Profile, headline stats and achievements.
#[component]
pub fn About() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let stats = [
		(Icon::Code, data.skills.iter().map(|c| c.items.len()).sum::<usize>(), "Skills"),
		(Icon::Server, data.projects.len(), "Projects Built"),
		(Icon::Briefcase, data.experience.len(), "Roles"),
		(Icon::Check, data.achievements.len(), "Achievements"),
	];

	let stat_cards = stats
		.into_iter()
		.map(|(icon, number, label)| {
			view! {
				<div class="about__stat">
					<span class=icon.class()>{icon.glyph()}</span>
					<strong class="about__stat-number">{number}</strong>
					<span class="about__stat-label">{label}</span>
				</div>
			}
		})
		.collect_view();

	let achievements = data
		.achievements
		.iter()
		.map(|a| {
			view! {
				<li class="about__achievement">
					<h4>{a.title.clone()}</h4>
					<span class="about__achievement-meta">
						{format!("{} \u{00B7} {}", a.category, a.date)}
					</span>
					<p>{a.description.clone()}</p>
				</li>
			}
		})
		.collect_view();

	view! {
		<section id="about" class="about">
			<div class="about__container">
				<SectionHeader block="about" title="About Me" />
				<div class="about__content">
					<div class="about__profile">
						<div class="about__image">
							<span>{data.personal.initials.clone()}</span>
						</div>
						<div class="about__text">
							<h3>{data.personal.title.clone()}</h3>
							<p class="about__tagline">{data.personal.tagline.clone()}</p>
							<p>{data.personal.description.clone()}</p>
							<p class="about__location">
								<span class=Icon::Location.class()>{Icon::Location.glyph()}</span>
								{data.personal.location.clone()}
							</p>
						</div>
					</div>
					<div class="about__stats">{stat_cards}</div>
					<div class="about__details">
						<div class="about__achievements">
							<h3>"Achievements"</h3>
							<ul>{achievements}</ul>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Skill categories with proficiency bars.
#[component]
pub fn Skills() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();

	let categories = data
		.skills
		.iter()
		.map(|category| {
			let items = category
				.items
				.iter()
				.map(|skill| {
					let icon = skill_icon(skill);
					let level = skill_level(skill);
					view! {
						<li class="skills__item">
							<span class=icon.class()>{icon.glyph()}</span>
							<span class="skills__item-name">{skill.clone()}</span>
							<div class="skills__level-bar" title=format!("{level}%")>
								<div class="skills__level-fill" style:width=format!("{level}%") />
							</div>
						</li>
					}
				})
				.collect_view();
			view! {
				<div class="skills__category">
					<h3 class="skills__category-title">{category.category.clone()}</h3>
					<ul class="skills__list">{items}</ul>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="skills" class="skills">
			<div class="skills__container">
				<SectionHeader
					block="skills"
					title="Skills & Technologies"
					subtitle="Here are the technologies and tools I work with"
				/>
				<div class="skills__content">{categories}</div>
			</div>
		</section>
	}
}

/// Characters of a project description shown on its card.
const CARD_DESCRIPTION_CHARS: usize = 120;
/// Technology tags shown on a card before collapsing into "+N more".
const CARD_TECHNOLOGIES: usize = 4;

/// Card description, cut to [`CARD_DESCRIPTION_CHARS`] with an ellipsis.
pub fn card_summary(description: &str) -> String {
	if description.chars().count() > CARD_DESCRIPTION_CHARS {
		let cut: String = description.chars().take(CARD_DESCRIPTION_CHARS).collect();
		format!("{cut}...")
	} else {
		description.to_string()
	}
}

fn project_links(project: &Project, class: &'static str) -> impl IntoView + use<> {
	let github = (!project.github_url.is_empty()).then(|| project.github_url.clone());
	let demo = (!project.demo_url.is_empty()).then(|| project.demo_url.clone());
	view! {
		{github.map(|url| view! {
			<a
				href=url
				target="_blank"
				rel="noopener noreferrer"
				class=class
				on:click=|ev| ev.stop_propagation()
			>
				<span class=Icon::Github.class()>{Icon::Github.glyph()}</span>
				"Code"
			</a>
		})}
		{demo.map(|url| view! {
			<a
				href=url
				target="_blank"
				rel="noopener noreferrer"
				class=format!("{class} {class}--primary")
				on:click=|ev| ev.stop_propagation()
			>
				<span class=Icon::ExternalLink.class()>{Icon::ExternalLink.glyph()}</span>
				"Live Demo"
			</a>
		})}
	}
}

fn project_card(
	index: usize,
	project: &Project,
	selected: RwSignal<Option<usize>>,
) -> impl IntoView + use<> {
	let hidden = project.technologies.len().saturating_sub(CARD_TECHNOLOGIES);
	view! {
		<article
			class="projects__card"
			class:featured=project.featured
			on:click=move |_| selected.set(Some(index))
		>
			{project.featured.then(|| view! {
				<span class="projects__badge">
					<span class=Icon::Star.class()>{Icon::Star.glyph()}</span>
					"Featured"
				</span>
			})}
			<h3 class="projects__card-title">{project.title.clone()}</h3>
			<p class="projects__card-description">{card_summary(&project.description)}</p>
			<div class="projects__tech">
				{technology_tags(&project.technologies[..project.technologies.len() - hidden])}
				{(hidden > 0).then(|| view! {
					<span class="tech-tag tech-tag--more">{format!("+{hidden} more")}</span>
				})}
			</div>
			<div class="projects__links">{project_links(project, "projects__link")}</div>
		</article>
	}
}

#[component]
fn ProjectModal(project: Project, selected: RwSignal<Option<usize>>) -> impl IntoView {
	view! {
		<div class="projects__modal-overlay" on:click=move |_| selected.set(None)>
			<div class="projects__modal" on:click=|ev| ev.stop_propagation()>
				<button
					class="projects__modal-close"
					aria-label="Close project details"
					on:click=move |_| selected.set(None)
				>
					"\u{00D7}"
				</button>
				<h3>{project.title.clone()}</h3>
				<p>{project.description.clone()}</p>
				<div class="projects__modal-tech">
					<h4>"Technologies Used:"</h4>
					<div class="tech-list">{technology_tags(&project.technologies)}</div>
				</div>
				<div class="projects__modal-actions">
					{project_links(&project, "projects__modal-link")}
				</div>
			</div>
		</div>
	}
}

/// Filterable project grid with a details pop-up.
#[component]
pub fn Projects() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let filter = RwSignal::new(ProjectFilter::All);
	let selected = RwSignal::new(None::<usize>);

	let buttons = ProjectFilter::ALL
		.into_iter()
		.map(|choice| {
			view! {
				<button
					class="projects__filter"
					class=("projects__filter--active", move || filter.get() == choice)
					on:click=move |_| filter.set(choice)
				>
					{choice.label()}
					{(choice == ProjectFilter::Featured)
						.then(|| view! { <span class=Icon::Star.class()>{Icon::Star.glyph()}</span> })}
				</button>
			}
		})
		.collect_view();

	let grid_data = data.clone();
	let grid = move || {
		let choice = filter.get();
		grid_data
			.projects
			.iter()
			.enumerate()
			.filter(|(_, p)| choice.matches(p))
			.map(|(i, p)| project_card(i, p, selected))
			.collect_view()
	};

	let empty_data = data.clone();
	let empty = move || {
		empty_data.filtered_projects(filter.get()).is_empty().then(|| {
			view! {
				<div class="projects__empty">
					<span class=Icon::Code.class()>{Icon::Code.glyph()}</span>
					<h3>"No projects found"</h3>
					<p>"Try selecting a different filter category."</p>
				</div>
			}
		})
	};

	let modal_data = data.clone();
	let modal = move || {
		selected
			.get()
			.and_then(|i| modal_data.projects.get(i).cloned())
			.map(|project| view! { <ProjectModal project=project selected=selected /> })
	};

	let github = data
		.socials
		.iter()
		.find(|s| social_icon(&s.icon) == Icon::Github)
		.map(|s| s.url.clone());

	view! {
		<section id="projects" class="projects">
			<div class="projects__container">
				<SectionHeader
					block="projects"
					title="Featured Projects"
					subtitle="A showcase of my technical skills and problem-solving abilities"
				/>
				<div class="projects__filters">{buttons}</div>
				<div class="projects__grid">{grid}</div>
				{empty}
				{github.map(|url| view! {
					<div class="projects__cta">
						<h3>"Interested in my work?"</h3>
						<p>"Check out my GitHub for more repositories and contributions."</p>
						<a href=url target="_blank" rel="noopener noreferrer" class="projects__cta-button">
							<span class=Icon::Github.class()>{Icon::Github.glyph()}</span>
							"View All Projects"
						</a>
					</div>
				})}
			</div>
			{modal}
		</section>
	}
}

/// One row of the experience timeline.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
	/// `work`, `education`, `achievement` or `certification`.
	pub kind: &'static str,
	pub title: String,
	/// Employer, institution, category or issuer.
	pub subtitle: String,
	/// Dates, location, grade.
	pub details: Vec<String>,
	pub bullets: Vec<String>,
	pub technologies: Vec<String>,
	/// Certificate link, if any.
	pub url: Option<String>,
}

/// A titled run of timeline entries of the same kind.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineGroup {
	pub kind: &'static str,
	pub heading: &'static str,
	pub entries: Vec<TimelineEntry>,
}

/// Builds the experience timeline: work, education, achievements, then
/// certifications. Kinds with no entries are left out.
pub fn timeline_groups(data: &PortfolioData) -> Vec<TimelineGroup> {
	let work = data.experience.iter().map(|job| TimelineEntry {
		kind: "work",
		title: job.title.clone(),
		subtitle: job.company.clone(),
		details: [job.duration.clone(), job.location.clone()]
			.into_iter()
			.filter(|d| !d.is_empty())
			.collect(),
		bullets: job.description.clone(),
		technologies: job.technologies.clone(),
		url: None,
	});
	let education = data.education.iter().map(|e| TimelineEntry {
		kind: "education",
		title: e.degree.clone(),
		subtitle: e.institution.clone(),
		details: std::iter::once(e.duration.clone())
			.chain((!e.grade.is_empty()).then(|| format!("Grade: {}", e.grade)))
			.collect(),
		bullets: vec![e.description.clone()],
		technologies: Vec::new(),
		url: None,
	});
	let achievements = data.achievements.iter().map(|a| TimelineEntry {
		kind: "achievement",
		title: a.title.clone(),
		subtitle: a.category.clone(),
		details: vec![a.date.clone()],
		bullets: vec![a.description.clone()],
		technologies: Vec::new(),
		url: None,
	});
	let certifications = data.certifications.iter().map(|c| TimelineEntry {
		kind: "certification",
		title: c.title.clone(),
		subtitle: c.issuer.clone(),
		details: vec![c.date.clone()],
		bullets: vec![c.description.clone()],
		technologies: Vec::new(),
		url: (!c.url.is_empty()).then(|| c.url.clone()),
	});

	[
		("work", "Professional Experience", work.collect::<Vec<_>>()),
		("education", "Education & Learning", education.collect()),
		("achievement", "Key Achievements", achievements.collect()),
		("certification", "Certifications", certifications.collect()),
	]
	.into_iter()
	.filter(|(_, _, entries)| !entries.is_empty())
	.map(|(kind, heading, entries)| TimelineGroup {
		kind,
		heading,
		entries,
	})
	.collect()
}

fn timeline_item(entry: TimelineEntry) -> impl IntoView {
	let icon = timeline_icon(entry.kind);
	let details = entry
		.details
		.into_iter()
		.map(|d| view! { <span class="timeline-item__detail">{d}</span> })
		.collect_view();
	let bullets = entry
		.bullets
		.into_iter()
		.map(|line| view! { <li>{line}</li> })
		.collect_view();
	let technologies = (!entry.technologies.is_empty()).then(|| {
		view! {
			<div class="timeline-item__technologies">
				<h4>"Technologies:"</h4>
				<div class="tech-tags">{technology_tags(&entry.technologies)}</div>
			</div>
		}
	});
	view! {
		<div class=format!("timeline-item timeline-item--{}", entry.kind)>
			<div class="timeline-item__marker">
				<span class=icon.class()>{icon.glyph()}</span>
			</div>
			<div class="timeline-item__content">
				<h3 class="timeline-item__title">{entry.title}</h3>
				<p class="timeline-item__subtitle">{entry.subtitle}</p>
				<div class="timeline-item__details">{details}</div>
				<ul class="timeline-item__list">{bullets}</ul>
				{technologies}
				{entry.url.map(|url| view! {
					<a href=url target="_blank" rel="noopener noreferrer" class="timeline-item__link">
						"View Certificate"
					</a>
				})}
			</div>
		</div>
	}
}

/// Timeline of work, education, achievements and certifications.
#[component]
pub fn ExperienceSection() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();

	let groups = timeline_groups(&data)
		.into_iter()
		.map(|group| {
			let icon = timeline_icon(group.kind);
			let items = group.entries.into_iter().map(timeline_item).collect_view();
			view! {
				<div class="experience__section">
					<h3 class="experience__section-title">
						<span class=icon.class()>{icon.glyph()}</span>
						{group.heading}
					</h3>
					<div class="timeline">{items}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="experience" class="experience">
			<div class="experience__container">
				<SectionHeader
					block="experience"
					title="Experience & Journey"
					subtitle="My professional journey, education, and achievements in software development"
				/>
				<div class="experience__content">{groups}</div>
			</div>
		</section>
	}
}

/// Links to view or download the resume.
#[component]
pub fn ResumeDownload() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let personal = &data.personal;

	view! {
		<section id="resume" class="resume">
			<div class="resume__container">
				<SectionHeader
					block="resume"
					title="Resume"
					subtitle="Grab a copy of my resume for the full picture"
				/>
				<div class="resume__actions">
					<a
						class="resume__btn resume__btn--primary"
						href=personal.resume_url.clone()
						download=personal.resume_file_name.clone()
					>
						<span class=Icon::Download.class()>{Icon::Download.glyph()}</span>
						"Download PDF"
					</a>
					<a
						class="resume__btn"
						href=personal.resume_url.clone()
						target="_blank"
						rel="noopener noreferrer"
					>
						"View Online"
					</a>
				</div>
			</div>
		</section>
	}
}

/// Page footer with navigation, socials and copyright.
#[component]
pub fn Footer() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let year = js_sys::Date::new_0().get_full_year();

	let links = data
		.navigation
		.iter()
		.map(|item| {
			let target = item.section_id().to_string();
			view! {
				<a
					href=item.href.clone()
					class="footer__link"
					on:click=move |ev| {
						ev.prevent_default();
						scroll_to_section(&target);
					}
				>
					{item.name.clone()}
				</a>
			}
		})
		.collect_view();

	view! {
		<footer class="footer">
			<div class="footer__container">
				<div class="footer__brand">
					<span class="footer__logo">{data.personal.initials.clone()}</span>
					<p>{data.personal.tagline.clone()}</p>
				</div>
				<nav class="footer__nav">{links}</nav>
				<div class="footer__social">{social_links(&data.socials, "footer__social-link")}</div>
				<p class="footer__copyright">
					{format!("\u{00A9} {year} {}. All rights reserved.", data.personal.name)}
				</p>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn long_descriptions_are_cut_on_cards() {
		let short = "A small project.";
		assert_eq!(card_summary(short), short);

		let long = "é".repeat(130);
		let summary = card_summary(&long);
		assert!(summary.ends_with("..."));
		assert_eq!(summary.chars().count(), CARD_DESCRIPTION_CHARS + 3);
		assert_eq!(card_summary(&"x".repeat(120)), "x".repeat(120));
	}

	#[test]
	fn timeline_groups_follow_fixed_order() {
		let data = PortfolioData::embedded().unwrap();
		let groups = timeline_groups(&data);
		let kinds: Vec<&str> = groups.iter().map(|g| g.kind).collect();
		assert_eq!(kinds, ["work", "education", "achievement", "certification"]);
		assert!(groups.iter().all(|g| g.entries.iter().all(|e| e.kind == g.kind)));

		let cert = &groups[3].entries[0];
		assert_eq!(cert.subtitle, "PW Skills");
		assert_eq!(cert.details, ["March 2022"]);
		assert_eq!(cert.url, None);
	}

	#[test]
	fn empty_kinds_are_left_out() {
		let mut data = PortfolioData::embedded().unwrap();
		data.achievements.clear();
		data.certifications.clear();
		let kinds: Vec<&str> = timeline_groups(&data).iter().map(|g| g.kind).collect();
		assert_eq!(kinds, ["work", "education"]);
	}

	#[test]
	fn education_shows_grade_only_when_present() {
		let mut data = PortfolioData::embedded().unwrap();
		data.education.truncate(1);
		data.education[0].grade = String::new();
		let entry = timeline_groups(&data)
			.into_iter()
			.find(|g| g.kind == "education")
			.map(|g| g.entries[0].clone())
			.unwrap();
		assert_eq!(entry.details, [data.education[0].duration.clone()]);

		data.education[0].grade = "8.1 CGPA".into();
		let entry = timeline_groups(&data)
			.into_iter()
			.find(|g| g.kind == "education")
			.map(|g| g.entries[0].clone())
			.unwrap();
		assert_eq!(entry.details.last().map(String::as_str), Some("Grade: 8.1 CGPA"));
	}
}
