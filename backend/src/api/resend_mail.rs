use async_trait::async_trait;
use maud::{html, Markup};
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

use crate::api::notifier::{ContactNotifier, ContactSubmission, NotifyError};

pub struct ResendNotifier {
    client: Resend,
    from: String,
    to: String,
}

impl ResendNotifier {
    pub fn new(api_key: &str, from: &str, to: &str) -> Self {
        Self {
            client: Resend::new(api_key),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[async_trait]
impl ContactNotifier for ResendNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let subject = submission.subject();
        let html = render_submission_html(submission).into_string();
        let email = CreateEmailBaseOptions::new(&self.from, [self.to.as_str()], &subject)
            .with_html(&html);

        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| NotifyError::Email(e.to_string()))?;

        tracing::info!(id = %submission.id, "Contact submission emailed");
        Ok(())
    }
}

pub fn render_submission_html(submission: &ContactSubmission) -> Markup {
    html! {
        h2 { (submission.subject()) }
        table {
            @for (label, value) in submission.rows() {
                tr {
                    th align="left" style="padding:4px 12px 4px 0" { (label) }
                    td style="white-space:pre-wrap" { (value) }
                }
            }
        }
        p style="color:#888" {
            "Reference " (submission.id.to_string()) " · received "
            (submission.received_at.format("%Y-%m-%d %H:%M UTC").to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaycore_common::ContactRequest;

    #[test]
    fn html_escapes_user_input() {
        let submission = ContactSubmission::new(ContactRequest {
            name: "<script>alert(1)</script>".into(),
            email: "x@y.z".into(),
            message: "Tom & Jerry".into(),
            ..Default::default()
        });
        let html = render_submission_html(&submission).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains(&submission.id.to_string()));
    }

    #[test]
    fn every_filled_field_gets_a_row() {
        let submission = ContactSubmission::new(ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            timeline: "1-3 months".into(),
            ..Default::default()
        });
        let html = render_submission_html(&submission).into_string();
        assert!(html.starts_with("<h2>New enquiry from Ada</h2>"));
        assert!(html.contains(">Email</th><td style=\"white-space:pre-wrap\">ada@example.com</td>"));
        assert!(html.contains(">Timeline</th>"));
        assert!(!html.contains(">Company</th>"));
    }
}
