//! Icon lookup by name.
//!
//! Content refers to icons by string key (`"FaGithub"`, `"Spring Boot"`, ...).
//! Each lookup is a static match with an explicit fallback, so unknown keys
//! still render something sensible.

/// Glyphs used across the site.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	Github,
	Linkedin,
	Envelope,
	Phone,
	Home,
	User,
	Code,
	Diagram,
	Briefcase,
	Server,
	Database,
	Cloud,
	Tool,
	Download,
	Location,
	Check,
	Warning,
	Send,
	GraduationCap,
	Trophy,
	Certificate,
	Calendar,
	Star,
	ExternalLink,
}

impl Icon {
	/// Text glyph for the icon.
	pub fn glyph(self) -> &'static str {
		match self {
			Icon::Github => "\u{1F419}",
			Icon::Linkedin => "in",
			Icon::Envelope => "\u{2709}",
			Icon::Phone => "\u{260E}",
			Icon::Home => "\u{2302}",
			Icon::User => "\u{1F464}",
			Icon::Code => "</>",
			Icon::Diagram => "\u{25A6}",
			Icon::Briefcase => "\u{1F4BC}",
			Icon::Server => "\u{1F5A5}",
			Icon::Database => "\u{1F5C4}",
			Icon::Cloud => "\u{2601}",
			Icon::Tool => "\u{1F527}",
			Icon::Download => "\u{2B07}",
			Icon::Location => "\u{1F4CD}",
			Icon::Check => "\u{2714}",
			Icon::Warning => "\u{26A0}",
			Icon::Send => "\u{27A4}",
			Icon::GraduationCap => "\u{1F393}",
			Icon::Trophy => "\u{1F3C6}",
			Icon::Certificate => "\u{1F4DC}",
			Icon::Calendar => "\u{1F4C5}",
			Icon::Star => "\u{2605}",
			Icon::ExternalLink => "\u{2197}",
		}
	}

	/// CSS class hook, e.g. `icon icon--github`.
	pub fn class(self) -> String {
		format!("icon icon--{}", format!("{self:?}").to_lowercase())
	}
}

/// Icon for a social link; unknown keys fall back to an envelope.
pub fn social_icon(key: &str) -> Icon {
	match key {
		"FaGithub" => Icon::Github,
		"FaLinkedin" => Icon::Linkedin,
		"FaEnvelope" => Icon::Envelope,
		"FaPhone" => Icon::Phone,
		_ => Icon::Envelope,
	}
}

/// Icon for a navigation entry; unknown keys fall back to the home icon.
pub fn nav_icon(key: &str) -> Icon {
	match key {
		"FaHome" => Icon::Home,
		"FaUser" => Icon::User,
		"FaCode" => Icon::Code,
		"FaProjectDiagram" => Icon::Diagram,
		"FaBriefcase" => Icon::Briefcase,
		"FaEnvelope" => Icon::Envelope,
		_ => Icon::Home,
	}
}

/// Icon for a named skill; unknown skills fall back to the code icon.
pub fn skill_icon(skill: &str) -> Icon {
	match skill {
		"SQL" | "MySQL" | "PostgreSQL" | "MongoDB" | "Redis" => Icon::Database,
		"REST APIs" | "System Design" | "Spring Boot" | "Spring Security" => Icon::Server,
		"AWS" | "Linux" => Icon::Cloud,
		"Git" | "Docker" | "Postman" | "IntelliJ IDEA" | "Maven" => Icon::Tool,
		_ => Icon::Code,
	}
}

/// Icon for a timeline entry kind; unknown kinds fall back to the briefcase.
pub fn timeline_icon(kind: &str) -> Icon {
	match kind {
		"work" => Icon::Briefcase,
		"education" => Icon::GraduationCap,
		"achievement" => Icon::Trophy,
		"certification" => Icon::Certificate,
		_ => Icon::Briefcase,
	}
}

/// Self-assessed proficiency in percent; unlisted skills default to 60.
pub fn skill_level(skill: &str) -> u8 {
	match skill {
		"Java" | "REST APIs" | "Problem Solving" => 90,
		"Spring Boot" | "Git" | "Data Structures & Algorithms" => 85,
		"MySQL" => 80,
		"Spring Security" | "JavaScript" => 75,
		"Microservices" | "PostgreSQL" | "System Design" => 70,
		"Python" | "MongoDB" => 65,
		"Docker" => 60,
		"AWS" => 55,
		_ => 60,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_social_keys_resolve() {
		assert_eq!(social_icon("FaGithub"), Icon::Github);
		assert_eq!(social_icon("FaPhone"), Icon::Phone);
	}

	#[test]
	fn unknown_keys_use_fallbacks() {
		assert_eq!(social_icon("FaMastodon"), Icon::Envelope);
		assert_eq!(nav_icon(""), Icon::Home);
		assert_eq!(skill_icon("Haskell"), Icon::Code);
		assert_eq!(skill_level("Haskell"), 60);
	}

	#[test]
	fn skills_map_to_categories() {
		assert_eq!(skill_icon("PostgreSQL"), Icon::Database);
		assert_eq!(skill_icon("Docker"), Icon::Tool);
		assert_eq!(skill_level("Java"), 90);
		assert_eq!(skill_level("AWS"), 55);
	}

	#[test]
	fn timeline_kinds_have_distinct_icons() {
		let icons: Vec<Icon> = ["work", "education", "achievement", "certification"]
			.into_iter()
			.map(timeline_icon)
			.collect();
		assert_eq!(
			icons,
			[Icon::Briefcase, Icon::GraduationCap, Icon::Trophy, Icon::Certificate]
		);
		assert_eq!(timeline_icon("volunteering"), Icon::Briefcase);
	}

	#[test]
	fn class_names_are_lowercase() {
		assert_eq!(Icon::Linkedin.class(), "icon icon--linkedin");
		assert_eq!(Icon::GraduationCap.class(), "icon icon--graduationcap");
		assert_eq!(nav_icon("FaProjectDiagram").class(), "icon icon--diagram");
	}
}
