use crate::domain::{EmailAddress, Submission};
use crate::email_client::EmailClient;
use crate::notification::Notification;

/// Render contact submissions and deliver them to the studio inbox
#[derive(Debug)]
pub struct Dispatcher {
    email_client: EmailClient,
    recipient: EmailAddress,
    brand_name: String,
}

impl Dispatcher {
    pub const fn new(
        email_client: EmailClient,
        recipient: EmailAddress,
        brand_name: String,
    ) -> Self {
        Self {
            email_client,
            recipient,
            brand_name,
        }
    }

    /// Send a submission to the configured recipient, with reply-to set to the submitter,
    /// and return the provider's message id
    #[tracing::instrument(
        name = "Dispatching contact notification",
        skip(self, submission),
        fields(submitter_email = %submission.email)
    )]
    pub async fn dispatch(&self, submission: &Submission) -> Result<String, reqwest::Error> {
        let notification = Notification::render(submission, &self.brand_name);

        self.email_client
            .send_email(
                &self.recipient,
                &submission.email,
                &notification.subject,
                &notification.html_body,
                &notification.text_body,
            )
            .await
            .map_err(|e| {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver contact notification"
                );
                e
            })
    }
}
