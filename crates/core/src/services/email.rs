//! Email notification service.
//!
//! Sends admin notifications through the Resend HTTP API. When no API key or
//! notification address is configured the service degrades to a logged no-op
//! so local development works without mail credentials.

use folio_common::{AppError, AppResult, config::MailConfig};
use tracing::{debug, info};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Email notification service.
#[derive(Clone)]
pub struct EmailService {
    config: MailConfig,
    /// Base URL of the site, used for admin links in notification bodies.
    site_url: String,
    http_client: reqwest::Client,
}

impl EmailService {
    /// Create a new email service.
    #[must_use]
    pub fn new(config: MailConfig, site_url: String) -> Self {
        Self {
            config,
            site_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Whether outbound mail is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.api_key.is_some() && self.config.notification_email.is_some()
    }

    /// Notify the admin about a new contact submission.
    pub async fn send_contact_notification(
        &self,
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> AppResult<()> {
        let subject_line = subject.unwrap_or("No subject");
        let html = format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>From:</strong> {name} ({email})</p>\
             <p><strong>Subject:</strong> {subject_line}</p>\
             <hr />\
             <p><strong>Message:</strong></p>\
             <p>{body}</p>\
             <hr />\
             <p><a href=\"mailto:{email}?subject=Re: {subject_line}\">Reply to {name}</a></p>",
            body = message.replace('\n', "<br />"),
        );

        self.send(&format!("New Contact: {subject_line}"), &html)
            .await
    }

    /// Notify the admin about a new guest message on the travel map.
    pub async fn send_guest_message_notification(
        &self,
        name: &str,
        message: &str,
        state_id: Option<&str>,
    ) -> AppResult<()> {
        let subject = match state_id {
            Some(state) => format!("New Guest Message from {state}"),
            None => "New Guest Message".to_string(),
        };

        let state_row = state_id
            .map(|state| format!("<p><strong>State:</strong> {state}</p>"))
            .unwrap_or_default();

        let html = format!(
            "<h2>New Guest Message on Travel Map</h2>\
             <p><strong>From:</strong> {name}</p>\
             {state_row}\
             <hr />\
             <p><strong>Message:</strong></p>\
             <p>{message}</p>\
             <hr />\
             <p><a href=\"{}/admin/messages\">View in Admin</a></p>",
            self.site_url,
        );

        self.send(&subject, &html).await
    }

    async fn send(&self, subject: &str, html: &str) -> AppResult<()> {
        let (Some(api_key), Some(to)) = (
            self.config.api_key.as_deref(),
            self.config.notification_email.as_deref(),
        ) else {
            info!("Email not configured, skipping notification");
            return Ok(());
        };

        let body = serde_json::json!({
            "from": self.config.from_address,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        let response = self
            .http_client
            .post(RESEND_API_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Resend request failed: {e}")))?;

        if response.status().is_success() {
            debug!(subject, "Sent notification email");
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(AppError::ExternalService(format!(
                "Resend returned {status}: {error_text}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> EmailService {
        EmailService::new(
            MailConfig {
                api_key: None,
                notification_email: None,
                from_address: "Folio <onboarding@resend.dev>".to_string(),
            },
            "https://example.com".to_string(),
        )
    }

    #[test]
    fn test_is_enabled_requires_both_fields() {
        let service = unconfigured();
        assert!(!service.is_enabled());

        let service = EmailService::new(
            MailConfig {
                api_key: Some("re_test".to_string()),
                notification_email: None,
                from_address: "Folio <onboarding@resend.dev>".to_string(),
            },
            "https://example.com".to_string(),
        );
        assert!(!service.is_enabled());
    }

    #[tokio::test]
    async fn test_unconfigured_send_is_noop_success() {
        let service = unconfigured();
        let result = service
            .send_contact_notification("Alice", "alice@example.com", None, "Hello")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unconfigured_guest_notification_is_noop_success() {
        let service = unconfigured();
        let result = service
            .send_guest_message_notification("Bob", "Greetings", Some("CO"))
            .await;
        assert!(result.is_ok());
    }
}
