use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use log::info;
use serde::Serialize;
use thiserror::Error;

use super::form_data::{FormData, Language};
use crate::config;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Please agree to the terms and conditions before submitting")]
    TermsNotAccepted,

    #[error("Could not generate an inquiry reference: clock reads {0}")]
    Clock(DateTime<Utc>),

    #[error("Failed to deliver inquiry: {0}")]
    Delivery(String),
}

/// Finished inquiry handed to the delivery sink. Never stored locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    pub inquiry_id: String,
    #[serde(flatten)]
    pub form_data: FormData,
    pub preferred_visit_date: Option<NaiveDate>,
    pub attachment: Option<String>,
    pub language: Language,
    pub submission_time: String,
}

/// Receiver of finished inquiries. Delivery guarantees belong to the sink.
pub trait InquirySink {
    fn deliver(&self, record: &InquiryRecord) -> Result<(), SubmissionError>;
}

/// Writes the record to the browser console, which is all the site does
/// with inquiries today.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl InquirySink for LogSink {
    fn deliver(&self, record: &InquiryRecord) -> Result<(), SubmissionError> {
        let json = serde_json::to_string(record)
            .map_err(|e| SubmissionError::Delivery(e.to_string()))?;
        info!("Form Submission: {}", json);
        Ok(())
    }
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase base-36 rendering of `value`.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// `PA-` plus the epoch milliseconds in base 36. Unique only to the
/// millisecond, which is fine for a human-facing reference.
pub fn generate_inquiry_id(now: DateTime<Utc>) -> Result<String, SubmissionError> {
    let millis = u64::try_from(now.timestamp_millis()).map_err(|_| SubmissionError::Clock(now))?;
    Ok(format!("{}-{}", config::INQUIRY_ID_PREFIX, to_base36(millis)))
}

pub struct RecordParts<'a> {
    pub form_data: &'a FormData,
    pub preferred_visit_date: Option<NaiveDate>,
    pub attachment: Option<&'a str>,
    pub language: Language,
}

pub fn build_record(parts: RecordParts<'_>, now: DateTime<Utc>) -> Result<InquiryRecord, SubmissionError> {
    Ok(InquiryRecord {
        inquiry_id: generate_inquiry_id(now)?,
        form_data: parts.form_data.clone(),
        preferred_visit_date: parts.preferred_visit_date,
        attachment: parts.attachment.map(str::to_string),
        language: parts.language,
        submission_time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
