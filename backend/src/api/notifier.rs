use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kaycore_common::ContactRequest;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email delivery failed: {0}")]
    Email(String),
}

/// A validated contact form submission, stamped on arrival.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub request: ContactRequest,
}

impl ContactSubmission {
    pub fn new(request: ContactRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            request,
        }
    }

    pub fn subject(&self) -> String {
        let req = &self.request;
        if req.company.is_empty() {
            format!("New enquiry from {}", req.name)
        } else {
            format!("New enquiry from {} ({})", req.name, req.company)
        }
    }

    /// `(label, value)` rows for every non-empty field, in form order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let req = &self.request;
        [
            ("Name", req.name.as_str()),
            ("Email", req.email.as_str()),
            ("Company", req.company.as_str()),
            ("Use case", req.use_case.as_str()),
            ("Situation", req.situation.as_str()),
            ("Timeline", req.timeline.as_str()),
            ("Message", req.message.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

/// Development stand-in used when no mail provider is configured.
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        tracing::info!(
            id = %submission.id,
            email = %submission.request.email,
            subject = %submission.subject(),
            "Contact submission received (not emailed)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_skip_blank_fields() {
        let submission = ContactSubmission::new(ContactRequest {
            name: "Lin".into(),
            email: "lin@example.com".into(),
            timeline: "ASAP".into(),
            ..Default::default()
        });
        let labels: Vec<_> = submission.rows().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Name", "Email", "Timeline"]);
    }

    #[test]
    fn subject_mentions_company_when_given() {
        let mut request = ContactRequest {
            name: "Lin".into(),
            ..Default::default()
        };
        assert_eq!(ContactSubmission::new(request.clone()).subject(), "New enquiry from Lin");
        request.company = "Acme".into();
        assert_eq!(ContactSubmission::new(request).subject(), "New enquiry from Lin (Acme)");
    }

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let submission = ContactSubmission::new(ContactRequest::default());
        assert!(LogNotifier.deliver(&submission).await.is_ok());
    }
}
