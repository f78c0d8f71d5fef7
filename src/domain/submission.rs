use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{BudgetRange, EmailAddress, ProjectLocation, ServiceInterest};

/// Raw contact form fields, as posted by the client
///
/// Fields accept any JSON value: `null`, `false` and `0` count as absent, other
/// non-string values are kept in their JSON text form.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ContactForm {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

/// Validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: EmailAddress,
    pub company: Option<String>,
    pub service: ServiceInterest,
    pub budget: BudgetRange,
    pub location: Option<ProjectLocation>,
    pub message: String,
}

/// Submission rejection reason
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingField(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
}

impl TryFrom<ContactForm> for Submission {
    type Error = SubmissionError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        // Presence is checked for every required field before the email format
        let name = required("name", value.name)?;
        let email = required("email", value.email)?;
        let service = required("service", value.service)?;
        let budget = required("budget", value.budget)?;
        let message = required("message", value.message)?;

        let email = EmailAddress::parse(email).map_err(|_| SubmissionError::InvalidEmail)?;

        Ok(Self {
            name,
            email,
            company: optional(value.company),
            service: ServiceInterest::from_code(service),
            budget: BudgetRange::from_code(budget),
            location: optional(value.location).map(ProjectLocation::from_code),
            message,
        })
    }
}

/// Reject absent or empty required fields
fn required(field: &'static str, value: Option<String>) -> Result<String, SubmissionError> {
    optional(value).ok_or(SubmissionError::MissingField(field))
}

/// Treat empty optional fields as absent
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
