use htmlescape::encode_minimal;

use crate::domain::Submission;

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; padding: 20px; }
.header { background: #f0b913; color: #000; padding: 20px; border-radius: 8px 8px 0 0; }
.content { background: #f9fafb; padding: 30px; border-radius: 0 0 8px 8px; }
.field { margin-bottom: 20px; }
.label { font-weight: 600; color: #666; font-size: 12px; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 5px; }
.value { font-size: 16px; color: #000; }
.message-box { background: white; padding: 20px; border-radius: 6px; border-left: 4px solid #f0b913; margin-top: 10px; }
.footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb; font-size: 12px; color: #666; text-align: center; }";

/// Contact notification, ready to be sent to the studio inbox
#[derive(Debug)]
pub struct Notification {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl Notification {
    /// Render a submission as an HTML and plain-text email, `brand_name` goes in the footer
    pub fn render(submission: &Submission, brand_name: &str) -> Self {
        Self {
            subject: format!(
                "New Contact Form: {} - {}",
                submission.name,
                submission.service.label()
            ),
            html_body: render_html(submission, brand_name),
            text_body: render_text(submission, brand_name),
        }
    }
}

fn render_html(submission: &Submission, brand_name: &str) -> String {
    let name = encode_minimal(&submission.name);
    let email = encode_minimal(submission.email.as_ref());

    let mut fields = String::new();
    push_html_field(&mut fields, "Name", &name);
    push_html_field(
        &mut fields,
        "Email",
        &format!("<a href=\"mailto:{email}\">{email}</a>"),
    );
    if let Some(company) = &submission.company {
        push_html_field(&mut fields, "Company", &encode_minimal(company));
    }
    push_html_field(
        &mut fields,
        "Service Interest",
        &encode_minimal(submission.service.label()),
    );
    push_html_field(
        &mut fields,
        "Budget Range",
        &encode_minimal(submission.budget.label()),
    );
    if let Some(location) = &submission.location {
        push_html_field(&mut fields, "Location", &encode_minimal(location.label()));
    }

    let message = encode_minimal(&submission.message);
    let brand_name = encode_minimal(brand_name);

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <style>
{STYLE}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1 style="margin: 0; font-size: 24px;">New Contact Form Submission</h1>
      </div>
      <div class="content">
{fields}        <div class="field">
          <div class="label">Message</div>
          <div class="message-box">
            <div class="value" style="white-space: pre-wrap;">{message}</div>
          </div>
        </div>
        <div class="footer">
          <p>This email was sent from the {brand_name} contact form.</p>
          <p>You can reply directly to this email to respond to {name}.</p>
        </div>
      </div>
    </div>
  </body>
</html>
"#
    )
}

/// Append a labelled field block, `value` must already be HTML-escaped
fn push_html_field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        r#"        <div class="field">
          <div class="label">{label}</div>
          <div class="value">{value}</div>
        </div>
"#
    ));
}

fn render_text(submission: &Submission, brand_name: &str) -> String {
    let mut lines = vec![
        "New Contact Form Submission".to_string(),
        String::new(),
        format!("Name: {}", submission.name),
        format!("Email: {}", submission.email),
    ];
    if let Some(company) = &submission.company {
        lines.push(format!("Company: {company}"));
    }
    lines.push(format!("Service Interest: {}", submission.service.label()));
    lines.push(format!("Budget Range: {}", submission.budget.label()));
    if let Some(location) = &submission.location {
        lines.push(format!("Location: {}", location.label()));
    }
    lines.extend([
        String::new(),
        "Message:".to_string(),
        submission.message.clone(),
        String::new(),
        "---".to_string(),
        format!("This email was sent from the {brand_name} contact form."),
        format!(
            "You can reply directly to this email to respond to {}.",
            submission.name
        ),
    ]);
    lines.join("\n")
}
