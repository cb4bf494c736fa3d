use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use crate::config;
use crate::inquiry::validation::is_email_shaped;

#[derive(Debug, Error, PartialEq)]
pub enum NewsletterError {
    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please agree to receive emails from PentaArch.")]
    AgreementRequired,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionOutcome {
    Subscribed { message: String },
    AlreadySubscribed { message: String },
}

/// Form-level checks run before anything is sent.
pub fn check_request(email: &str, agreed: bool) -> Result<String, NewsletterError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(NewsletterError::MissingEmail);
    }
    if !is_email_shaped(email) {
        return Err(NewsletterError::InvalidEmail);
    }
    if !agreed {
        return Err(NewsletterError::AgreementRequired);
    }
    Ok(email.to_string())
}

/// What the mock service answers for `email`.
pub fn mock_response(email: &str) -> SubscriptionOutcome {
    let email = email.to_lowercase();
    if config::NEWSLETTER_EXISTING_EMAILS.contains(&email.as_str()) {
        SubscriptionOutcome::AlreadySubscribed {
            message: config::NEWSLETTER_ALREADY_SUBSCRIBED_MESSAGE.to_string(),
        }
    } else {
        info!("Newsletter subscription: {}", email);
        SubscriptionOutcome::Subscribed {
            message: config::NEWSLETTER_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Mock subscription: waits like a real request would, never touches the
/// network.
pub async fn subscribe(email: &str, agreed: bool) -> Result<SubscriptionOutcome, NewsletterError> {
    let email = check_request(email, agreed)?;
    TimeoutFuture::new(config::NEWSLETTER_DELAY_MS).await;
    Ok(mock_response(&email))
}
