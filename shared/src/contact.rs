use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// local@domain.tld, deliberately loose
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r".+@.+\..+").unwrap());

/// Values accepted for the "primary challenge" field, in display order.
pub const CHALLENGE_OPTIONS: &[(&str, &str)] = &[
    ("ai", "Deploy enterprise AI"),
    ("platform", "Scale our core platform"),
    ("data", "Modernize data pipelines"),
    ("other", "Something else"),
];

/// Body of `POST /api/contact` as sent by the browser.
///
/// Every field is optional on the wire so a partially filled form still
/// deserializes and can be rejected with a precise message.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// A submission that passed validation. Text is trimmed, the email is
/// lowercased and blank optional fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub full_name: String,
    pub work_email: String,
    pub company: String,
    pub challenge: String,
    pub project: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactRejection {
    #[error("All required fields must be provided.")]
    MissingFields,
    #[error("Please provide a valid work email.")]
    InvalidEmail,
}

/// Every response of the contact endpoint carries a single message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<ValidatedContact, ContactRejection> {
        let full_name = required(&self.full_name);
        let work_email = required(&self.work_email).map(|email| email.to_lowercase());
        let company = required(&self.company);
        let challenge = required(&self.challenge);

        let (Some(full_name), Some(work_email), Some(company), Some(challenge)) =
            (full_name, work_email, company, challenge)
        else {
            return Err(ContactRejection::MissingFields);
        };

        if !is_valid_email(&work_email) {
            return Err(ContactRejection::InvalidEmail);
        }

        Ok(ValidatedContact {
            full_name,
            work_email,
            company,
            challenge,
            project: required(&self.project),
            locale: required(&self.locale),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            full_name: Some("  Ada Lovelace ".into()),
            work_email: Some(" Ada@Example.COM ".into()),
            company: Some("Analytical Engines".into()),
            challenge: Some("ai".into()),
            project: Some("   ".into()),
            locale: Some("pt".into()),
        }
    }

    #[test]
    fn normalises_accepted_submission() {
        let validated = complete().validate().unwrap();
        assert_eq!(validated.full_name, "Ada Lovelace");
        assert_eq!(validated.work_email, "ada@example.com");
        assert_eq!(validated.project, None);
        assert_eq!(validated.locale.as_deref(), Some("pt"));
    }

    #[test]
    fn missing_company_is_rejected() {
        let mut submission = complete();
        submission.company = None;
        assert_eq!(submission.validate(), Err(ContactRejection::MissingFields));
    }

    #[test]
    fn blank_required_field_counts_as_missing() {
        let mut submission = complete();
        submission.challenge = Some("  ".into());
        assert_eq!(submission.validate(), Err(ContactRejection::MissingFields));
    }

    #[test]
    fn email_shape_is_checked_after_presence() {
        let mut submission = complete();
        submission.work_email = Some("not-an-email".into());
        assert_eq!(submission.validate(), Err(ContactRejection::InvalidEmail));

        submission.work_email = Some("a@b.co".into());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn rejection_messages_match_the_endpoint() {
        assert_eq!(
            ContactRejection::MissingFields.to_string(),
            "All required fields must be provided."
        );
        assert_eq!(
            ContactRejection::InvalidEmail.to_string(),
            "Please provide a valid work email."
        );
    }

    #[test]
    fn wire_format_is_camel_case() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"fullName":"A","workEmail":"a@b.co","company":"C","challenge":"data"}"#,
        )
        .unwrap();
        assert_eq!(submission.work_email.as_deref(), Some("a@b.co"));
        assert_eq!(submission.project, None);

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("project").is_none());
    }
}
