use std::time;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::domain::EmailAddress;

/// Email client data
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: String,
    api_key: SecretString,
}

/// Body of Resend's send email request
#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// Body of Resend's send email response
#[derive(serde::Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl EmailClient {
    /// Build a new email client, `sender_name` is shown as the display name of `sender`
    pub fn new(
        mut base_url: Url,
        sender: &EmailAddress,
        sender_name: &str,
        api_key: SecretString,
        timeout: time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        // `Url::join` replaces the last path segment unless the path ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http_client,
            base_url,
            sender: format!("{sender_name} <{sender}>"),
            api_key,
        }
    }

    /// Send an email using Resend's REST API and return the id Resend assigned to it
    /// <https://resend.com/docs/api-reference/emails/send-email>
    pub async fn send_email(
        &self,
        recipient: &EmailAddress,
        reply_to: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<String, reqwest::Error> {
        let url = self.base_url.join("emails").expect("Cannot parse URL");
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: [recipient.as_ref()],
            reply_to: reply_to.as_ref(),
            subject,
            html: html_content,
            text: text_content,
        };

        let response: SendEmailResponse = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.id)
    }
}
