use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use anyhow::Context;
use tracing::field::display;
use tracing::Span;

use crate::dispatcher::Dispatcher;
use crate::domain::{ContactForm, Submission, SubmissionError};
use crate::utils::error_chain_fmt;

/// Successful submission response
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactResponse {
    success: bool,
    message_id: String,
}

/// Error response, only carries a message that is safe to show to the client
#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

/// Contact form submission error
#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] SubmissionError),
    #[error("Failed to send email")]
    DispatchFailed(#[source] anyhow::Error),
    #[error("Internal server error")]
    UnexpectedError(#[source] anyhow::Error),
}

impl fmt::Debug for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DispatchFailed(_) | Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Map a body that cannot be read as a contact form to an opaque Error 500
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ContactError::UnexpectedError(anyhow::anyhow!("Failed to read contact form body: {err}")).into()
}

/// Contact form handler
#[tracing::instrument(
    name = "Submitting a contact form",
    skip(form, dispatcher),
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn contact(
    form: web::Json<ContactForm>,
    dispatcher: web::Data<Dispatcher>,
) -> Result<HttpResponse, ContactError> {
    // Validate the submission before anything leaves the process
    let submission: Submission = form.into_inner().try_into()?;
    Span::current().record("submitter_email", display(&submission.email));

    // Render and send the notification
    let message_id = dispatcher
        .dispatch(&submission)
        .await
        .context("Failed to send the contact notification")
        .map_err(ContactError::DispatchFailed)?;

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        message_id,
    }))
}
