use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::form_data::{Field, FormData, BUDGET_RANGES, TIMELINES};

/// Field name to human readable message. Empty means the step is valid.
pub type ValidationErrors = BTreeMap<Field, String>;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(errors: &mut ValidationErrors, field: Field, value: &str, message: &str) {
    if is_blank(value) {
        errors.insert(field, message.to_string());
    }
}

/// Checks the fields owned by `step`. Pure; safe to call repeatedly.
pub fn validate(step: usize, data: &FormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        0 => {
            require(&mut errors, Field::Name, &data.name, "Name is required");
            if is_blank(&data.email) {
                errors.insert(Field::Email, "Email is required".to_string());
            } else if !is_email_shaped(&data.email) {
                errors.insert(Field::Email, "Please enter a valid email address".to_string());
            }
            require(&mut errors, Field::Phone, &data.phone, "Phone is required");
        }
        1 => {
            require(&mut errors, Field::ProjectType, &data.project_type, "Project type is required");
            require(&mut errors, Field::Description, &data.description, "Project description is required");
        }
        2 => {
            // The set is typed, so anything in it is a recognized service.
            if data.selected_services.is_empty() {
                errors.insert(Field::SelectedServices, "Select at least one service".to_string());
            }
        }
        3 => {
            if !BUDGET_RANGES.contains(&data.budget.as_str()) {
                errors.insert(Field::Budget, "Budget range is required".to_string());
            }
            if !TIMELINES.contains(&data.timeline.as_str()) {
                errors.insert(Field::Timeline, "Timeline is required".to_string());
            }
        }
        _ => {}
    }

    errors
}

/// Every step up to and including `last_step`, merged.
pub fn validate_through(last_step: usize, data: &FormData) -> ValidationErrors {
    (0..=last_step).flat_map(|step| validate(step, data)).collect()
}

/// Cheap shape check run on every edit. A field that passes loses its stale
/// error immediately; authoritative validation still happens on "Next".
pub fn passes_shape_check(field: Field, value: &str) -> bool {
    match field {
        Field::Email => is_email_shaped(value),
        Field::Name | Field::Phone | Field::ProjectType | Field::Description => !is_blank(value),
        Field::Budget => BUDGET_RANGES.contains(&value),
        Field::Timeline => TIMELINES.contains(&value),
        _ => true,
    }
}
