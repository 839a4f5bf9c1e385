use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use thiserror::Error;

use crate::config::app_config::Config;
use crate::handlers::contact_dtos::ContactRequest;

pub const CONTACT_SUBJECT: &str = "New Portfolio Contact";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("{0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl OutboundEmail {
    /// Formats a contact form submission for the site operator's inbox.
    pub fn from_contact(req: &ContactRequest, config: &Config) -> Self {
        Self {
            from: config.from_email.clone(),
            to: config.operator_email.clone(),
            subject: CONTACT_SUBJECT.to_string(),
            text: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                req.name.trim(),
                req.email.trim(),
                req.message.trim()
            ),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Resend::new(api_key),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let options = CreateEmailBaseOptions::new(email.from, [email.to], email.subject)
            .with_text(&email.text);

        self.client
            .emails
            .send(options)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Provider(e.to_string()))
    }
}
