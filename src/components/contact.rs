//! Contact details and message form.
//!
//! There is no backend: a submission is validated, held in a sending state for
//! [`SUBMIT_DELAY_MS`], then reported as sent or failed. The status banner
//! clears itself after [`STATUS_TTL_MS`].

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};
use thiserror::Error;

use super::sections::social_links;
use crate::data::PortfolioData;
use crate::icons::Icon;

/// Simulated round trip of a submission.
pub const SUBMIT_DELAY_MS: u64 = 2000;
/// How long a sent or failed status stays visible.
pub const STATUS_TTL_MS: u64 = 5000;

/// Why a form was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
	/// A required field is empty or whitespace.
	#[error("please fill in the {0} field")]
	MissingField(&'static str),
	/// The email address has no `@`.
	#[error("please enter a valid email address")]
	InvalidEmail,
}

/// Values entered into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactForm {
	/// Checks required fields in display order, then the email shape.
	pub fn validate(&self) -> Result<(), ContactError> {
		let fields = [
			("name", &self.name),
			("email", &self.email),
			("subject", &self.subject),
			("message", &self.message),
		];
		if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
			return Err(ContactError::MissingField(*field));
		}
		if !self.email.contains('@') {
			return Err(ContactError::InvalidEmail);
		}
		Ok(())
	}
}

/// Lifecycle of a submission as shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
	/// No banner.
	#[default]
	Idle,
	/// Waiting for the round trip.
	Sending,
	/// Delivered.
	Sent,
	/// Rejected, with the reason shown to the user.
	Failed(String),
}

impl FormStatus {
	/// Whether a submission is in flight.
	pub fn is_sending(&self) -> bool {
		matches!(self, FormStatus::Sending)
	}

	/// Banner text, if any.
	pub fn message(&self) -> Option<String> {
		match self {
			FormStatus::Idle | FormStatus::Sending => None,
			FormStatus::Sent => {
				Some("Thank you! Your message has been sent successfully.".to_string())
			}
			FormStatus::Failed(reason) => Some(format!("Sorry, something went wrong: {reason}")),
		}
	}

	/// Modifier class for the banner.
	pub fn class(&self) -> &'static str {
		match self {
			FormStatus::Failed(_) => "contact__status contact__status--error",
			_ => "contact__status contact__status--success",
		}
	}
}

/// Numbers submissions so delayed callbacks can tell whether they are stale.
#[derive(Clone, Copy, Debug, Default)]
pub struct Submissions {
	latest: u64,
}

impl Submissions {
	/// Starts a new submission and returns its ticket.
	pub fn begin(&mut self) -> u64 {
		self.latest += 1;
		self.latest
	}

	/// Whether no submission has started since `ticket`.
	pub fn is_current(&self, ticket: u64) -> bool {
		self.latest == ticket
	}
}

/// Outcome of a submission once the round trip completes.
fn settle(form: &ContactForm) -> FormStatus {
	match form.validate() {
		Ok(()) => FormStatus::Sent,
		Err(e) => FormStatus::Failed(e.to_string()),
	}
}

/// Contact details beside the message form.
#[component]
pub fn Contact() -> impl IntoView {
	let data = expect_context::<Arc<PortfolioData>>();
	let form = RwSignal::new(ContactForm::default());
	let status = RwSignal::new(FormStatus::Idle);

	let submissions = StoredValue::new(Submissions::default());

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked().is_sending() {
			return;
		}
		let Some(ticket) = submissions.try_update_value(Submissions::begin) else {
			return;
		};
		status.set(FormStatus::Sending);
		let submitted = form.get_untracked();
		set_timeout(
			move || {
				let outcome = settle(&submitted);
				match &outcome {
					FormStatus::Sent => {
						info!("folio: contact message from {} sent", submitted.email);
						let _ = form.try_set(ContactForm::default());
					}
					FormStatus::Failed(reason) => warn!("folio: contact message rejected: {reason}"),
					_ => {}
				}
				let _ = status.try_set(outcome);
				set_timeout(
					move || {
						// a newer submission owns the status now
						if submissions.try_with_value(|s| s.is_current(ticket)) == Some(true) {
							let _ = status.try_set(FormStatus::Idle);
						}
					},
					Duration::from_millis(STATUS_TTL_MS),
				);
			},
			Duration::from_millis(SUBMIT_DELAY_MS),
		);
	};

	let details = [
		(Icon::Envelope, "Email", data.personal.email.clone(), format!("mailto:{}", data.personal.email)),
		(Icon::Phone, "Phone", data.personal.phone.clone(), format!("tel:{}", data.personal.phone)),
		(Icon::Location, "Location", data.personal.location.clone(), String::new()),
	]
	.into_iter()
	.map(|(icon, label, value, href)| {
		let body = if href.is_empty() {
			view! { <span>{value}</span> }.into_any()
		} else {
			view! { <a href=href>{value}</a> }.into_any()
		};
		view! {
			<div class="contact__info-item">
				<span class=icon.class()>{icon.glyph()}</span>
				<div>
					<h4>{label}</h4>
					{body}
				</div>
			</div>
		}
	})
	.collect_view();

	view! {
		<section id="contact" class="contact">
			<div class="contact__container">
				<div class="contact__header section-header">
					<h2 class="contact__title">"Get In Touch"</h2>
					<div class="contact__title-line" />
					<p class="contact__subtitle">
						"Have a project in mind or just want to say hello? My inbox is open."
					</p>
				</div>
				<div class="contact__content">
					<div class="contact__info">
						{details}
						<div class="contact__social">{social_links(&data.socials, "contact__social-link")}</div>
					</div>
					<form class="contact__form" on:submit=on_submit novalidate=true>
						<div class="contact__row">
							<input
								type="text"
								name="name"
								placeholder="Your Name"
								prop:value=move || form.with(|f| f.name.clone())
								on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
							/>
							<input
								type="email"
								name="email"
								placeholder="Your Email"
								prop:value=move || form.with(|f| f.email.clone())
								on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
							/>
						</div>
						<input
							type="text"
							name="subject"
							placeholder="Subject"
							prop:value=move || form.with(|f| f.subject.clone())
							on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
						/>
						<textarea
							name="message"
							rows="6"
							placeholder="Your Message"
							prop:value=move || form.with(|f| f.message.clone())
							on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
						/>
						{move || {
							status
								.with(|s| s.message().map(|m| (s.class(), m)))
								.map(|(class, m)| view! { <div class=class>{m}</div> })
						}}
						<button
							type="submit"
							class="contact__submit"
							disabled=move || status.with(FormStatus::is_sending)
						>
							<span class=Icon::Send.class()>{Icon::Send.glyph()}</span>
							{move || if status.with(FormStatus::is_sending) { "Sending..." } else { "Send Message" }}
						</button>
					</form>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> ContactForm {
		ContactForm {
			name: "Ada".into(),
			email: "ada@example.com".into(),
			subject: "Hello".into(),
			message: "Nice site".into(),
		}
	}

	#[test]
	fn complete_form_validates() {
		assert_eq!(filled().validate(), Ok(()));
		assert_eq!(settle(&filled()), FormStatus::Sent);
	}

	#[test]
	fn first_missing_field_is_reported() {
		let form = ContactForm {
			email: String::new(),
			message: "  ".into(),
			..filled()
		};
		assert_eq!(form.validate(), Err(ContactError::MissingField("email")));

		let form = ContactForm {
			message: "\n".into(),
			..filled()
		};
		assert_eq!(form.validate(), Err(ContactError::MissingField("message")));
	}

	#[test]
	fn email_needs_an_at_sign() {
		let form = ContactForm {
			email: "ada.example.com".into(),
			..filled()
		};
		assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
	}

	#[test]
	fn failure_carries_the_reason() {
		let status = settle(&ContactForm::default());
		assert_eq!(status, FormStatus::Failed("please fill in the name field".into()));
		assert_eq!(
			status.message().as_deref(),
			Some("Sorry, something went wrong: please fill in the name field")
		);
		assert!(status.class().ends_with("--error"));
	}

	#[test]
	fn only_latest_submission_clears_status() {
		let mut submissions = Submissions::default();
		let first = submissions.begin();
		assert!(submissions.is_current(first));

		// a second message goes out before the first banner expires
		let second = submissions.begin();
		assert!(!submissions.is_current(first));
		assert!(submissions.is_current(second));
		assert_ne!(first, second);
	}

	#[test]
	fn idle_and_sending_show_no_banner() {
		assert_eq!(FormStatus::Idle.message(), None);
		assert!(FormStatus::Sending.is_sending());
		assert_eq!(FormStatus::Sending.message(), None);
		assert!(FormStatus::Sent.class().ends_with("--success"));
	}
}
