//! Site content: personal details, skills, projects, and navigation.
//!
//! Content is plain JSON. A page can override the compiled-in default by
//! embedding a `<script id="portfolio-data" type="application/json">` element.

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../data/portfolio.json");

/// Errors raised while loading site content.
#[derive(Debug, Error)]
pub enum DataError {
	/// The JSON did not match the expected shape.
	#[error("malformed portfolio data: {0}")]
	Parse(#[from] serde_json::Error),
	/// A navigation entry does not point at an in-page anchor.
	#[error("navigation entry `{0}` must link to an in-page anchor")]
	BadAnchor(String),
}

/// Owner details shown in the hero, about, and contact sections.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
	pub name: String,
	pub title: String,
	pub tagline: String,
	pub description: String,
	pub location: String,
	pub email: String,
	pub phone: String,
	/// URL of the resume document, served as a static asset.
	pub resume_url: String,
	/// File name suggested when the resume is downloaded.
	pub resume_file_name: String,
	/// Shown in place of a profile photo and as the navbar logo.
	pub initials: String,
	/// Titles cycled by the hero typewriter.
	#[serde(default)]
	pub roles: Vec<String>,
}

/// Site-wide behavior switches.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
	pub enable_splash: bool,
	pub splash_duration_ms: u32,
	/// Used instead of `splash_duration_ms` when the user prefers reduced motion.
	pub reduced_motion_duration_ms: u32,
	/// Value written to the root element's `data-theme` attribute.
	pub preferred_theme: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			enable_splash: true,
			splash_duration_ms: 3000,
			reduced_motion_duration_ms: 1200,
			preferred_theme: "dark".into(),
		}
	}
}

/// A link to an external profile or contact channel.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct Social {
	pub name: String,
	pub url: String,
	/// Icon key, resolved through [`crate::icons::social_icon`].
	pub icon: String,
}

impl Social {
	/// External links open in a new tab; `mailto:` and `tel:` links do not.
	pub fn is_external(&self) -> bool {
		self.url.starts_with("http")
	}
}

/// A named group of skills.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct SkillCategory {
	pub category: String,
	pub items: Vec<String>,
}

/// A portfolio project card.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub title: String,
	pub description: String,
	pub technologies: Vec<String>,
	#[serde(default)]
	pub github_url: String,
	/// Empty when the project has no live demo.
	#[serde(default)]
	pub demo_url: String,
	#[serde(default)]
	pub featured: bool,
}

/// Project categories offered by the filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
	/// Every project.
	All,
	/// Projects flagged `featured`.
	Featured,
	/// Projects using a server-side technology.
	Backend,
	/// Projects using a browser-side technology.
	Fullstack,
}

impl ProjectFilter {
	/// Filter choices in display order.
	pub const ALL: [ProjectFilter; 4] = [
		ProjectFilter::All,
		ProjectFilter::Featured,
		ProjectFilter::Backend,
		ProjectFilter::Fullstack,
	];

	/// Button label.
	pub fn label(self) -> &'static str {
		match self {
			ProjectFilter::All => "All",
			ProjectFilter::Featured => "Featured",
			ProjectFilter::Backend => "Backend",
			ProjectFilter::Fullstack => "Fullstack",
		}
	}

	/// Technologies that place a project in this category.
	fn technologies(self) -> &'static [&'static str] {
		match self {
			ProjectFilter::Backend => &["Spring Boot", "Java", "REST API", "MySQL", "PostgreSQL"],
			ProjectFilter::Fullstack => &["JavaScript", "React", "Node.js"],
			ProjectFilter::All | ProjectFilter::Featured => &[],
		}
	}

	/// Whether `project` belongs under this filter.
	pub fn matches(self, project: &Project) -> bool {
		match self {
			ProjectFilter::All => true,
			ProjectFilter::Featured => project.featured,
			ProjectFilter::Backend | ProjectFilter::Fullstack => project
				.technologies
				.iter()
				.any(|t| self.technologies().contains(&t.as_str())),
		}
	}
}

/// A degree or course.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct Education {
	pub degree: String,
	pub institution: String,
	pub duration: String,
	pub description: String,
	#[serde(default)]
	pub grade: String,
}

/// A job on the timeline.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
	pub title: String,
	pub company: String,
	pub duration: String,
	pub location: String,
	/// One bullet per responsibility.
	pub description: Vec<String>,
	pub technologies: Vec<String>,
}

/// An award or competition result.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct Achievement {
	pub title: String,
	pub description: String,
	pub date: String,
	pub category: String,
}

/// A completed certification.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct Certification {
	pub title: String,
	pub issuer: String,
	pub date: String,
	/// Empty when there is no public certificate page.
	#[serde(default)]
	pub url: String,
	pub description: String,
}

/// An entry in the navigation bar.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct NavItem {
	pub name: String,
	/// In-page anchor, e.g. `#about`.
	pub href: String,
	pub icon: String,
}

impl NavItem {
	/// Element id targeted by this entry.
	pub fn section_id(&self) -> &str {
		self.href.trim_start_matches('#')
	}
}

/// All content rendered by the site.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize)]
pub struct PortfolioData {
	pub personal: Personal,
	#[serde(default)]
	pub site: SiteConfig,
	#[serde(default)]
	pub socials: Vec<Social>,
	#[serde(default)]
	pub skills: Vec<SkillCategory>,
	#[serde(default)]
	pub projects: Vec<Project>,
	#[serde(default)]
	pub education: Vec<Education>,
	#[serde(default)]
	pub experience: Vec<Experience>,
	#[serde(default)]
	pub achievements: Vec<Achievement>,
	#[serde(default)]
	pub certifications: Vec<Certification>,
	#[serde(default)]
	pub navigation: Vec<NavItem>,
}

impl PortfolioData {
	/// Parses and checks content from JSON text.
	pub fn from_json(json: &str) -> Result<Self, DataError> {
		let data: Self = serde_json::from_str(json)?;
		if let Some(item) = data.navigation.iter().find(|n| !n.href.starts_with('#')) {
			return Err(DataError::BadAnchor(item.name.clone()));
		}
		Ok(data)
	}

	/// The content compiled into the binary.
	pub fn embedded() -> Result<Self, DataError> {
		Self::from_json(EMBEDDED)
	}

	/// Projects passing `filter`, in declaration order.
	pub fn filtered_projects(&self, filter: ProjectFilter) -> Vec<&Project> {
		self.projects.iter().filter(|p| filter.matches(p)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embedded_content_parses() {
		let data = PortfolioData::embedded().unwrap();
		assert_eq!(data.personal.name, "Kartik Gupta");
		assert_eq!(data.personal.roles.len(), 4);
		assert_eq!(data.navigation.len(), 6);
		assert_eq!(data.site.splash_duration_ms, 3000);
		assert_eq!(data.site.reduced_motion_duration_ms, 1200);
	}

	#[test]
	fn nav_items_resolve_section_ids() {
		let data = PortfolioData::embedded().unwrap();
		let ids: Vec<&str> = data.navigation.iter().map(NavItem::section_id).collect();
		assert_eq!(
			ids,
			["home", "about", "skills", "projects", "experience", "contact"]
		);
	}

	#[test]
	fn socials_distinguish_external_links() {
		let data = PortfolioData::embedded().unwrap();
		let external: Vec<bool> = data.socials.iter().map(Social::is_external).collect();
		assert_eq!(external, [true, true, false, false]);
	}

	fn project(technologies: &[&str], featured: bool) -> Project {
		Project {
			title: "p".into(),
			description: String::new(),
			technologies: technologies.iter().map(|t| t.to_string()).collect(),
			github_url: String::new(),
			demo_url: String::new(),
			featured,
		}
	}

	#[test]
	fn filters_match_by_flag_and_technology() {
		let api = project(&["Spring Boot", "Thymeleaf"], false);
		let web = project(&["React", "Node.js"], true);
		let other = project(&["Rust"], false);

		assert!([&api, &web, &other].iter().all(|p| ProjectFilter::All.matches(p)));

		assert!(!ProjectFilter::Featured.matches(&api));
		assert!(ProjectFilter::Featured.matches(&web));

		assert!(ProjectFilter::Backend.matches(&api));
		assert!(!ProjectFilter::Backend.matches(&web));
		assert!(!ProjectFilter::Backend.matches(&other));

		assert!(ProjectFilter::Fullstack.matches(&web));
		assert!(!ProjectFilter::Fullstack.matches(&api));
		assert!(!ProjectFilter::Fullstack.matches(&other));
	}

	#[test]
	fn technology_names_match_exactly() {
		// "REST APIs" is not the backend keyword "REST API"
		assert!(!ProjectFilter::Backend.matches(&project(&["REST APIs"], false)));
		assert!(ProjectFilter::Backend.matches(&project(&["REST API"], false)));
	}

	#[test]
	fn filtered_projects_keep_declaration_order() {
		let json = r##"{
			"personal": {
				"name": "A", "title": "B", "tagline": "", "description": "",
				"location": "", "email": "a@b.c", "phone": "", "resumeUrl": "/r.pdf",
				"resumeFileName": "r.pdf", "initials": "A"
			},
			"projects": [
				{ "title": "one", "description": "", "technologies": ["Java"] },
				{ "title": "two", "description": "", "technologies": ["React"], "featured": true },
				{ "title": "three", "description": "", "technologies": ["MySQL"], "featured": true }
			]
		}"##;
		let data = PortfolioData::from_json(json).unwrap();
		let titles = |filter| -> Vec<String> {
			data.filtered_projects(filter)
				.iter()
				.map(|p| p.title.clone())
				.collect()
		};
		assert_eq!(titles(ProjectFilter::All), ["one", "two", "three"]);
		assert_eq!(titles(ProjectFilter::Featured), ["two", "three"]);
		assert_eq!(titles(ProjectFilter::Backend), ["one", "three"]);
		assert_eq!(titles(ProjectFilter::Fullstack), ["two"]);
		assert!(data.site.enable_splash);
		assert!(data.personal.roles.is_empty());
		assert!(data.certifications.is_empty());
	}

	#[test]
	fn embedded_projects_have_no_fullstack_match() {
		let data = PortfolioData::embedded().unwrap();
		assert_eq!(data.filtered_projects(ProjectFilter::Backend).len(), 3);
		assert!(data.filtered_projects(ProjectFilter::Fullstack).is_empty());
	}

	#[test]
	fn certifications_parse() {
		let data = PortfolioData::embedded().unwrap();
		assert_eq!(data.certifications.len(), 1);
		let cert = &data.certifications[0];
		assert_eq!(cert.issuer, "PW Skills");
		assert_eq!(cert.date, "March 2022");
		assert!(cert.url.is_empty());
	}

	#[test]
	fn malformed_json_is_rejected() {
		let err = PortfolioData::from_json("{ \"personal\": 4 }").unwrap_err();
		assert!(matches!(err, DataError::Parse(_)));
	}

	#[test]
	fn navigation_must_use_anchors() {
		let json = r##"{
			"personal": {
				"name": "A", "title": "B", "tagline": "", "description": "",
				"location": "", "email": "a@b.c", "phone": "", "resumeUrl": "/r.pdf",
				"resumeFileName": "r.pdf", "initials": "A"
			},
			"navigation": [{ "name": "Blog", "href": "/blog", "icon": "FaCode" }]
		}"##;
		let err = PortfolioData::from_json(json).unwrap_err();
		assert!(matches!(err, DataError::BadAnchor(ref name) if name == "Blog"));
		assert_eq!(
			err.to_string(),
			"navigation entry `Blog` must link to an in-page anchor"
		);
	}
}
