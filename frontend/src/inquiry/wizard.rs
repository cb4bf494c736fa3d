use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};
use thiserror::Error;

use super::draft::{self, Draft, DraftError};
use super::form_data::{
    relevant_groups, Field, FieldGroup, FormData, Language, Service, StepDefinition, LAST_STEP, STEPS,
};
use super::storage::KeyValueStore;
use super::submission::{build_record, InquiryRecord, InquirySink, RecordParts, SubmissionError};
use super::validation::{passes_shape_check, validate, validate_through, ValidationErrors};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("This inquiry has already been submitted. Start a new inquiry to make changes.")]
    AlreadySubmitted,

    #[error("{} is not a text field", .0.key())]
    NotATextField(Field),

    #[error("Inquiries can only be submitted from the final step")]
    NotAtFinalStep,

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Result of a forward transition. Blocked steps are an expected outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Advanced { from: usize, to: usize },
    Blocked(ValidationErrors),
    Submitted(InquiryRecord),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub current_step: usize,
    pub form_data: FormData,
    pub errors: ValidationErrors,
    pub is_submitted: bool,
    pub terms_accepted: bool,
    pub visit_date: Option<NaiveDate>,
    /// Name of the chosen file. The file itself is never read.
    pub attachment: Option<String>,
    pub language: Language,
    pub inquiry_id: Option<String>,
    pub submission_error: Option<String>,
}

/// Owns one in-progress inquiry. Every mutation goes through these methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InquiryWizard {
    state: WizardState,
}

impl InquiryWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn step(&self) -> &'static StepDefinition {
        &STEPS[self.state.current_step]
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step == LAST_STEP
    }

    pub fn progress_percent(&self) -> u32 {
        ((self.state.current_step + 1) * 100 / STEPS.len()) as u32
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.errors.get(&field).map(String::as_str)
    }

    /// Errors on fields rendered by steps before the current one, in step
    /// order. Only non-empty after a submit re-validates earlier steps.
    pub fn earlier_step_errors(&self) -> Vec<(Field, &str)> {
        let mut errors: Vec<(Field, &str)> = self
            .state
            .errors
            .iter()
            .filter(|(field, _)| field.step() < self.state.current_step)
            .map(|(field, message)| (*field, message.as_str()))
            .collect();
        errors.sort_by_key(|(field, _)| field.step());
        errors
    }

    pub fn relevant_groups(&self) -> Vec<FieldGroup> {
        relevant_groups(&self.state.form_data)
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.state.is_submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        Ok(())
    }

    /// Overwrites a text field. A stale error on it is dropped as soon as the
    /// new value passes the cheap shape check.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        let value = value.into();
        let passes = passes_shape_check(field, &value);
        let slot = self
            .state
            .form_data
            .text_mut(field)
            .ok_or(WizardError::NotATextField(field))?;
        *slot = value;
        if passes {
            self.state.errors.remove(&field);
        }
        Ok(())
    }

    pub fn toggle_service(&mut self, service: Service) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        let selected = self.state.form_data.toggle_service(service);
        if !self.state.form_data.selected_services.is_empty() {
            self.state.errors.remove(&Field::SelectedServices);
        }
        debug!("{} {}", service, if selected { "selected" } else { "deselected" });
        Ok(selected)
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.state.terms_accepted = accepted;
        if accepted {
            self.state.errors.remove(&Field::Terms);
        }
        Ok(())
    }

    pub fn set_visit_date(&mut self, date: Option<NaiveDate>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.state.visit_date = date;
        Ok(())
    }

    pub fn set_attachment(&mut self, file_name: Option<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.state.attachment = file_name;
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
    }

    /// Validates the current step and moves forward, or submits from the
    /// final step.
    pub fn next(
        &mut self,
        drafts: &impl KeyValueStore,
        sink: &impl InquirySink,
        now: DateTime<Utc>,
    ) -> Result<StepOutcome, WizardError> {
        self.ensure_editable()?;
        let from = self.state.current_step;

        let errors = validate(from, &self.state.form_data);
        if !errors.is_empty() {
            debug!("Step {} blocked by {} field(s)", from, errors.len());
            self.state.errors = errors.clone();
            return Ok(StepOutcome::Blocked(errors));
        }

        if from < LAST_STEP {
            self.state.current_step = from + 1;
            self.state.errors.clear();
            info!("Step {} complete, moving to {}", from + 1, STEPS[from + 1].title);
            Ok(StepOutcome::Advanced { from, to: from + 1 })
        } else {
            self.submit(drafts, sink, now)
        }
    }

    /// Going back never validates.
    pub fn previous(&mut self) -> Result<usize, WizardError> {
        self.ensure_editable()?;
        if self.state.current_step > 0 {
            self.state.current_step -= 1;
        }
        Ok(self.state.current_step)
    }

    /// Either fully submits or leaves the wizard exactly as it was apart from
    /// the surfaced error.
    pub fn submit(
        &mut self,
        drafts: &impl KeyValueStore,
        sink: &impl InquirySink,
        now: DateTime<Utc>,
    ) -> Result<StepOutcome, WizardError> {
        self.ensure_editable()?;
        if !self.is_last_step() {
            return Err(WizardError::NotAtFinalStep);
        }

        let mut errors = validate_through(LAST_STEP, &self.state.form_data);
        if !self.state.terms_accepted {
            errors.insert(Field::Terms, SubmissionError::TermsNotAccepted.to_string());
        }
        if !errors.is_empty() {
            warn!("Submission blocked by {} field(s)", errors.len());
            self.state.errors = errors.clone();
            return Ok(StepOutcome::Blocked(errors));
        }

        let delivered = build_record(
            RecordParts {
                form_data: &self.state.form_data,
                preferred_visit_date: self.state.visit_date,
                attachment: self.state.attachment.as_deref(),
                language: self.state.language,
            },
            now,
        )
        .and_then(|record| sink.deliver(&record).map(|_| record));

        let record = match delivered {
            Ok(record) => record,
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.state.submission_error = Some(e.to_string());
                return Err(e.into());
            }
        };

        // The inquiry is out; a leftover draft must not block that.
        if let Err(e) = draft::clear_draft(drafts) {
            warn!("Submitted but could not clear draft: {}", e);
        }

        self.state.errors.clear();
        self.state.submission_error = None;
        self.state.inquiry_id = Some(record.inquiry_id.clone());
        self.state.is_submitted = true;
        info!("Inquiry {} submitted", record.inquiry_id);
        Ok(StepOutcome::Submitted(record))
    }

    /// Snapshot of the current data. Leaves step and submitted flag alone.
    pub fn save_draft(&self, store: &impl KeyValueStore, now: DateTime<Utc>) -> Result<Draft, WizardError> {
        let snapshot = Draft::new(&self.state.form_data, self.state.visit_date, now);
        draft::save_draft(store, &snapshot)?;
        Ok(snapshot)
    }

    /// Restores data from the saved draft, keeping the current step. Returns
    /// `false` when there was nothing to restore.
    ///
    /// Refused once submitted: a submitted inquiry is immutable until
    /// [`reset`](Self::reset), after which any saved draft loads again.
    pub fn load_draft(&mut self, store: &impl KeyValueStore) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        let Some(saved) = draft::load_draft(store)? else {
            return Ok(false);
        };
        self.state.form_data = saved.restored_form_data();
        self.state.visit_date = saved.chosen_date;
        self.state.errors.clear();
        Ok(true)
    }

    /// "Submit another inquiry": back to a blank first step. The display
    /// language survives.
    pub fn reset(&mut self) {
        let language = self.state.language;
        self.state = WizardState {
            language,
            ..WizardState::default()
        };
        info!("Wizard reset for a new inquiry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::inquiry::form_data::{BUDGET_RANGES, TIMELINES};
    use crate::inquiry::storage::memory::MemoryStore;
    use chrono::TimeZone;
    use regex::Regex;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        records: RefCell<Vec<InquiryRecord>>,
    }

    impl InquirySink for RecordingSink {
        fn deliver(&self, record: &InquiryRecord) -> Result<(), SubmissionError> {
            self.records.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl InquirySink for FailingSink {
        fn deliver(&self, _record: &InquiryRecord) -> Result<(), SubmissionError> {
            Err(SubmissionError::Delivery("relay offline".to_string()))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 20, 9, 30, 0).unwrap()
    }

    fn fill_step(wizard: &mut InquiryWizard, step: usize) {
        match step {
            0 => {
                wizard.set_field(Field::Name, "Asha Rao").unwrap();
                wizard.set_field(Field::Email, "asha@example.com").unwrap();
                wizard.set_field(Field::Phone, "9000000000").unwrap();
            }
            1 => {
                wizard.set_field(Field::ProjectType, "Apartment").unwrap();
                wizard.set_field(Field::Description, "Full interior for a 3BHK").unwrap();
            }
            2 => {
                wizard.toggle_service(Service::InteriorDesign).unwrap();
            }
            3 => {
                wizard.set_field(Field::Budget, BUDGET_RANGES[1]).unwrap();
                wizard.set_field(Field::Timeline, TIMELINES[2]).unwrap();
            }
            _ => {
                wizard.set_terms_accepted(true).unwrap();
            }
        }
    }

    fn advance_to(wizard: &mut InquiryWizard, target: usize) {
        let store = MemoryStore::default();
        while wizard.current_step() < target {
            let step = wizard.current_step();
            fill_step(wizard, step);
            assert!(matches!(
                wizard.next(&store, &RecordingSink::default(), now()).unwrap(),
                StepOutcome::Advanced { .. }
            ));
        }
    }

    #[test]
    fn test_blank_required_fields_block_every_step() {
        let required: [&[Field]; 4] = [
            &[Field::Name, Field::Email, Field::Phone],
            &[Field::ProjectType, Field::Description],
            &[],
            &[Field::Budget, Field::Timeline],
        ];
        let store = MemoryStore::default();
        let sink = RecordingSink::default();

        for (step, fields) in required.iter().enumerate() {
            for field in fields.iter() {
                let mut wizard = InquiryWizard::new();
                advance_to(&mut wizard, step);
                fill_step(&mut wizard, step);
                wizard.set_field(*field, "   ").unwrap();

                let outcome = wizard.next(&store, &sink, now()).unwrap();
                assert!(matches!(outcome, StepOutcome::Blocked(_)));
                assert_eq!(wizard.current_step(), step);
                assert!(wizard.error(*field).is_some(), "{:?} at step {}", field, step);
            }
        }
    }

    #[test]
    fn test_valid_steps_advance_by_one() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();

        for step in 0..LAST_STEP {
            fill_step(&mut wizard, step);
            let outcome = wizard.next(&store, &sink, now()).unwrap();
            assert_eq!(outcome, StepOutcome::Advanced { from: step, to: step + 1 });
            assert_eq!(wizard.current_step(), step + 1);
        }
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn test_previous_never_validates() {
        let mut wizard = InquiryWizard::new();
        assert_eq!(wizard.previous().unwrap(), 0);

        advance_to(&mut wizard, 3);
        wizard.set_field(Field::Budget, "").unwrap();
        assert_eq!(wizard.previous().unwrap(), 2);
        assert_eq!(wizard.previous().unwrap(), 1);
    }

    #[test]
    fn test_asha_scenario_and_bad_email() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        fill_step(&mut wizard, 0);
        wizard.set_field(Field::Email, "not-an-email").unwrap();

        assert!(matches!(
            wizard.next(&store, &sink, now()).unwrap(),
            StepOutcome::Blocked(_)
        ));
        assert!(wizard.error(Field::Email).unwrap().contains("valid email"));

        wizard.set_field(Field::Email, "asha@example.com").unwrap();
        assert!(wizard.error(Field::Email).is_none());
        assert!(matches!(
            wizard.next(&store, &sink, now()).unwrap(),
            StepOutcome::Advanced { from: 0, to: 1 }
        ));
    }

    #[test]
    fn test_error_clears_only_when_shape_check_passes() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        wizard.next(&store, &RecordingSink::default(), now()).unwrap();
        assert!(wizard.error(Field::Email).is_some());

        wizard.set_field(Field::Email, "asha@").unwrap();
        assert!(wizard.error(Field::Email).is_some());
        wizard.set_field(Field::Name, "Asha").unwrap();
        assert!(wizard.error(Field::Name).is_none());
        assert!(wizard.error(Field::Phone).is_some());
    }

    #[test]
    fn test_empty_services_block_step_two() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, 2);

        let outcome = wizard.next(&store, &sink, now()).unwrap();
        assert!(matches!(outcome, StepOutcome::Blocked(_)));
        assert_eq!(
            wizard.error(Field::SelectedServices),
            Some("Select at least one service")
        );

        wizard.toggle_service(Service::InteriorDesign).unwrap();
        assert!(wizard.error(Field::SelectedServices).is_none());
        assert_eq!(wizard.relevant_groups(), vec![FieldGroup::InteriorStyle]);
        assert!(matches!(
            wizard.next(&store, &sink, now()).unwrap(),
            StepOutcome::Advanced { from: 2, to: 3 }
        ));
    }

    #[test]
    fn test_full_flow_submits_once() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);

        let record = match wizard.next(&store, &sink, now()).unwrap() {
            StepOutcome::Submitted(record) => record,
            other => panic!("expected submission, got {:?}", other),
        };

        let pattern = Regex::new(r"^PA-[0-9A-Z]+$").unwrap();
        assert!(pattern.is_match(&record.inquiry_id));
        assert!(wizard.state().is_submitted);
        assert_eq!(wizard.state().inquiry_id.as_deref(), Some(record.inquiry_id.as_str()));
        assert_eq!(sink.records.borrow().len(), 1);
        assert_eq!(record.form_data.name, "Asha Rao");

        assert!(matches!(wizard.set_field(Field::Name, "x"), Err(WizardError::AlreadySubmitted)));
        assert!(matches!(wizard.previous(), Err(WizardError::AlreadySubmitted)));
        assert!(matches!(
            wizard.next(&store, &sink, now()),
            Err(WizardError::AlreadySubmitted)
        ));
        assert_eq!(sink.records.borrow().len(), 1);
        assert_eq!(wizard.current_step(), LAST_STEP);
    }

    #[test]
    fn test_terms_gate_blocks_submission() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);

        let outcome = wizard.next(&store, &sink, now()).unwrap();
        assert!(matches!(outcome, StepOutcome::Blocked(_)));
        assert!(wizard.error(Field::Terms).is_some());
        assert!(!wizard.state().is_submitted);
        assert!(sink.records.borrow().is_empty());

        wizard.set_terms_accepted(true).unwrap();
        assert!(wizard.error(Field::Terms).is_none());
    }

    #[test]
    fn test_submission_revalidates_earlier_steps() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        wizard.set_field(Field::Phone, "").unwrap();

        let outcome = wizard.submit(&store, &sink, now()).unwrap();
        assert!(matches!(outcome, StepOutcome::Blocked(_)));
        assert!(wizard.error(Field::Phone).is_some());
        assert_eq!(wizard.current_step(), LAST_STEP);
    }

    #[test]
    fn test_partial_draft_on_review_step_reports_earlier_errors() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();

        let mut partial = InquiryWizard::new();
        partial.set_field(Field::Name, "Asha Rao").unwrap();
        partial.save_draft(&store, now()).unwrap();

        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        assert!(wizard.earlier_step_errors().is_empty());
        assert!(wizard.load_draft(&store).unwrap());

        let errors = match wizard.next(&store, &sink, now()).unwrap() {
            StepOutcome::Blocked(errors) => errors,
            other => panic!("expected a blocked submission, got {:?}", other),
        };
        assert_eq!(wizard.current_step(), LAST_STEP);
        assert!(sink.records.borrow().is_empty());
        assert!(errors.keys().all(|field| field.step() < LAST_STEP));

        let earlier = wizard.earlier_step_errors();
        assert_eq!(earlier.len(), errors.len());
        assert_eq!(earlier[0].0.step(), 0);
        assert!(earlier.iter().any(|(field, _)| *field == Field::Email));
        assert!(earlier.iter().any(|(field, _)| *field == Field::Budget));
        assert!(earlier.windows(2).all(|pair| pair[0].0.step() <= pair[1].0.step()));
    }

    #[test]
    fn test_terms_error_is_not_an_earlier_step_error() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);

        wizard.next(&store, &RecordingSink::default(), now()).unwrap();
        assert!(wizard.error(Field::Terms).is_some());
        assert!(wizard.earlier_step_errors().is_empty());
    }

    #[test]
    fn test_load_draft_refused_after_submission() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        wizard.next(&store, &sink, now()).unwrap();

        wizard.save_draft(&store, now()).unwrap();
        assert!(matches!(
            wizard.load_draft(&store),
            Err(WizardError::AlreadySubmitted)
        ));

        wizard.reset();
        assert!(wizard.load_draft(&store).unwrap());
        assert_eq!(wizard.state().form_data.name, "Asha Rao");
    }

    #[test]
    fn test_failed_delivery_leaves_wizard_on_final_step() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        wizard.save_draft(&store, now()).unwrap();

        let result = wizard.next(&store, &FailingSink, now());
        assert!(matches!(result, Err(WizardError::Submission(SubmissionError::Delivery(_)))));
        assert!(!wizard.state().is_submitted);
        assert!(wizard.state().inquiry_id.is_none());
        assert!(wizard.state().submission_error.is_some());
        assert_eq!(wizard.current_step(), LAST_STEP);
        assert!(store.raw(config::DRAFT_STORAGE_KEY).is_some());

        let sink = RecordingSink::default();
        assert!(matches!(
            wizard.next(&store, &sink, now()).unwrap(),
            StepOutcome::Submitted(_)
        ));
        assert!(wizard.state().submission_error.is_none());
    }

    #[test]
    fn test_submit_requires_final_step() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        assert!(matches!(
            wizard.submit(&store, &RecordingSink::default(), now()),
            Err(WizardError::NotAtFinalStep)
        ));
    }

    #[test]
    fn test_submission_clears_draft() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        wizard.save_draft(&store, now()).unwrap();

        wizard.next(&store, &sink, now()).unwrap();
        assert!(store.raw(config::DRAFT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_submission_survives_draft_clear_failure() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        store.fail_writes.set(true);

        assert!(matches!(
            wizard.next(&store, &sink, now()).unwrap(),
            StepOutcome::Submitted(_)
        ));
        assert!(wizard.state().is_submitted);
    }

    #[test]
    fn test_draft_round_trip_across_reset() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, 3);
        wizard.toggle_service(Service::PremiumFlooring).unwrap();
        wizard.set_field(Field::FlooringType, "Marble").unwrap();
        wizard.set_visit_date(NaiveDate::from_ymd_opt(2026, 6, 1)).unwrap();
        let before = wizard.state().form_data.clone();

        wizard.save_draft(&store, now()).unwrap();
        wizard.reset();
        assert_eq!(wizard.state().form_data, FormData::default());

        assert!(wizard.load_draft(&store).unwrap());
        assert_eq!(wizard.state().form_data, before);
        assert_eq!(wizard.state().visit_date, NaiveDate::from_ymd_opt(2026, 6, 1));
        assert_eq!(wizard.current_step(), 0);
    }

    #[test]
    fn test_load_draft_keeps_step_position() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        fill_step(&mut wizard, 0);
        wizard.save_draft(&store, now()).unwrap();

        advance_to(&mut wizard, 2);
        assert!(wizard.load_draft(&store).unwrap());
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_save_draft_is_idempotent_modulo_timestamp() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        fill_step(&mut wizard, 0);

        let first = wizard.save_draft(&store, now()).unwrap();
        let later = now() + chrono::Duration::seconds(5);
        let second = wizard.save_draft(&store, later).unwrap();

        assert_eq!(first.form_data, second.form_data);
        assert_eq!(first.selected_services, second.selected_services);
        assert_eq!(first.chosen_date, second.chosen_date);
        assert_eq!(draft::load_draft(&store).unwrap().unwrap(), second);
    }

    #[test]
    fn test_draft_save_does_not_touch_step_state() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        advance_to(&mut wizard, 2);
        let before = wizard.clone();
        wizard.save_draft(&store, now()).unwrap();
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_missing_or_corrupt_draft_leaves_state() {
        let store = MemoryStore::default();
        let mut wizard = InquiryWizard::new();
        fill_step(&mut wizard, 0);
        let before = wizard.clone();

        assert!(!wizard.load_draft(&store).unwrap());
        assert_eq!(wizard, before);

        store.put_raw(config::DRAFT_STORAGE_KEY, "not json");
        assert!(matches!(
            wizard.load_draft(&store),
            Err(WizardError::Draft(DraftError::Corrupt(_)))
        ));
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_failed_save_reports_error() {
        let store = MemoryStore::default();
        store.fail_writes.set(true);
        let wizard = InquiryWizard::new();
        assert!(matches!(
            wizard.save_draft(&store, now()),
            Err(WizardError::Draft(DraftError::Storage(_)))
        ));
    }

    #[test]
    fn test_reset_after_submission() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut wizard = InquiryWizard::new();
        wizard.set_language(Language::Hi);
        advance_to(&mut wizard, LAST_STEP);
        fill_step(&mut wizard, LAST_STEP);
        wizard.next(&store, &sink, now()).unwrap();

        wizard.reset();
        let state = wizard.state();
        assert_eq!(state.current_step, 0);
        assert!(!state.is_submitted);
        assert!(state.errors.is_empty());
        assert_eq!(state.form_data, FormData::default());
        assert_eq!(state.language, Language::Hi);
        assert!(state.inquiry_id.is_none());
        assert!(wizard.set_field(Field::Name, "Ravi").is_ok());
    }

    #[test]
    fn test_service_set_is_not_a_text_field() {
        let mut wizard = InquiryWizard::new();
        assert!(matches!(
            wizard.set_field(Field::SelectedServices, "Interior Design"),
            Err(WizardError::NotATextField(Field::SelectedServices))
        ));
    }
}
