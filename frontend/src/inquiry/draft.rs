use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form_data::{FormData, Service};
use super::storage::{KeyValueStore, StorageError};
use crate::config;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Could not access saved drafts: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not prepare the draft for saving: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("The saved draft is unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Locally saved snapshot of an in-progress inquiry. Step position is not
/// part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub form_data: FormData,
    pub selected_services: BTreeSet<Service>,
    #[serde(default)]
    pub chosen_date: Option<NaiveDate>,
    pub saved_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(form_data: &FormData, chosen_date: Option<NaiveDate>, saved_at: DateTime<Utc>) -> Self {
        Self {
            form_data: form_data.clone(),
            selected_services: form_data.selected_services.clone(),
            chosen_date,
            saved_at,
        }
    }

    /// Form data with the standalone service list applied on top.
    pub fn restored_form_data(&self) -> FormData {
        let mut data = self.form_data.clone();
        data.selected_services = self.selected_services.clone();
        data
    }
}

/// Overwrites whatever draft is stored.
pub fn save_draft(store: &impl KeyValueStore, draft: &Draft) -> Result<(), DraftError> {
    let payload = serde_json::to_string(draft).map_err(DraftError::Encode)?;
    store.set(config::DRAFT_STORAGE_KEY, &payload)?;
    info!("Draft saved at {}", draft.saved_at.to_rfc3339());
    Ok(())
}

/// `Ok(None)` when nothing has been saved.
pub fn load_draft(store: &impl KeyValueStore) -> Result<Option<Draft>, DraftError> {
    let Some(payload) = store.get(config::DRAFT_STORAGE_KEY)? else {
        debug!("No draft stored under {}", config::DRAFT_STORAGE_KEY);
        return Ok(None);
    };

    match serde_json::from_str::<Draft>(&payload) {
        Ok(draft) => {
            info!("Draft from {} loaded", draft.saved_at.to_rfc3339());
            Ok(Some(draft))
        }
        Err(e) => {
            warn!("Ignoring incompatible draft: {}", e);
            Err(DraftError::Corrupt(e))
        }
    }
}

pub fn clear_draft(store: &impl KeyValueStore) -> Result<(), DraftError> {
    store.remove(config::DRAFT_STORAGE_KEY)?;
    Ok(())
}
