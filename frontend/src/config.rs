use log::Level;

/// localStorage key the contact form draft lives under.
pub const DRAFT_STORAGE_KEY: &str = "pentaarch_form_draft";

/// Prefix of every generated inquiry reference, e.g. `PA-LZ3K9Q1C`.
pub const INQUIRY_ID_PREFIX: &str = "PA";

pub const CONTACT_EMAIL: &str = "hello@pentaarch.com";

// Mock newsletter service
pub const NEWSLETTER_DELAY_MS: u32 = 1_000;
pub const NEWSLETTER_SUCCESS_MESSAGE: &str =
    "Thank you for subscribing! You'll receive design insights every month.";
pub const NEWSLETTER_ALREADY_SUBSCRIBED_MESSAGE: &str =
    "This email is already subscribed to our newsletter.";
pub const NEWSLETTER_EXISTING_EMAILS: &[&str] = &[
    "test@example.com",
    "existing@test.com",
    "demo@pentaarch.com",
];

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
