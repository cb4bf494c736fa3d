use chrono::{NaiveDate, Utc};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastKind, ToastSlot};
use crate::inquiry::form_data::{
    Field, FieldGroup, Language, Service, BUDGET_RANGES, FLOORING_TYPES, INTERIOR_STYLES, STEPS,
    TIMELINES,
};
use crate::inquiry::storage::BrowserStorage;
use crate::inquiry::submission::LogSink;
use crate::inquiry::wizard::{InquiryWizard, StepOutcome, WizardError};

#[derive(Properties, PartialEq)]
pub struct ContactWizardProps {
    #[prop_or_default]
    pub language: Language,
}

pub enum WizardMsg {
    SetField(Field, String),
    ToggleService(Service),
    SetTerms(bool),
    SetVisitDate(String),
    SetAttachment(Option<String>),
    Next,
    Previous,
    SaveDraft,
    LoadDraft,
    NewInquiry,
    CopyInquiryId,
    Copied(Result<(), String>),
    DismissToast,
}

pub struct ContactWizard {
    wizard: InquiryWizard,
    toasts: ToastSlot,
}

impl Component for ContactWizard {
    type Message = WizardMsg;
    type Properties = ContactWizardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut wizard = InquiryWizard::new();
        wizard.set_language(ctx.props().language);

        Self {
            wizard,
            toasts: ToastSlot::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.wizard.set_language(ctx.props().language);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WizardMsg::SetField(field, value) => {
                let result = self.wizard.set_field(field, value);
                self.report(result);
                true
            }
            WizardMsg::ToggleService(service) => {
                let result = self.wizard.toggle_service(service);
                self.report(result);
                true
            }
            WizardMsg::SetTerms(accepted) => {
                let result = self.wizard.set_terms_accepted(accepted);
                self.report(result);
                true
            }
            WizardMsg::SetVisitDate(raw) => {
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
                let result = self.wizard.set_visit_date(date);
                self.report(result);
                true
            }
            WizardMsg::SetAttachment(file_name) => {
                let result = self.wizard.set_attachment(file_name);
                self.report(result);
                true
            }
            WizardMsg::Next => {
                match self.wizard.next(&BrowserStorage, &LogSink, Utc::now()) {
                    Ok(StepOutcome::Advanced { to, .. }) => {
                        self.toasts.show(
                            ToastKind::Success,
                            "✅ Step Completed!",
                            format!("Great job! Moving to {}", STEPS[to].title),
                        );
                        scroll_to_top();
                    }
                    Ok(StepOutcome::Blocked(errors)) => {
                        gloo_console::log!(format!("Step blocked by {} field(s)", errors.len()));
                        let earlier = self.wizard.earlier_step_errors();
                        if earlier.is_empty() {
                            self.toasts.dismiss();
                        } else {
                            let details = earlier
                                .iter()
                                .map(|(field, message)| format!("{}: {}", STEPS[field.step()].title, message))
                                .collect::<Vec<_>>()
                                .join("; ");
                            self.toasts.show(ToastKind::Error, "Please Review Earlier Steps", details);
                        }
                    }
                    Ok(StepOutcome::Submitted(record)) => {
                        self.toasts.show(
                            ToastKind::Success,
                            "Success!",
                            format!(
                                "Your inquiry {} has been submitted successfully. We'll contact you within 24 hours.",
                                record.inquiry_id
                            ),
                        );
                        scroll_to_top();
                    }
                    Err(e) => self.report_error(e),
                }
                true
            }
            WizardMsg::Previous => {
                let result = self.wizard.previous();
                self.report(result);
                true
            }
            WizardMsg::SaveDraft => {
                match self.wizard.save_draft(&BrowserStorage, Utc::now()) {
                    Ok(_) => {
                        self.toasts.show(
                            ToastKind::Success,
                            "Draft Saved!",
                            "Your form data has been saved locally.",
                        );
                    }
                    Err(e) => self.report_error(e),
                }
                true
            }
            WizardMsg::LoadDraft => {
                match self.wizard.load_draft(&BrowserStorage) {
                    Ok(true) => {
                        self.toasts.show(
                            ToastKind::Success,
                            "Draft Loaded!",
                            "Your previously saved form data has been restored.",
                        );
                    }
                    Ok(false) => {
                        self.toasts.show(
                            ToastKind::Info,
                            "No Draft Found",
                            "There is no saved draft on this device yet.",
                        );
                    }
                    Err(e) => self.report_error(e),
                }
                true
            }
            WizardMsg::NewInquiry => {
                self.wizard.reset();
                self.toasts.dismiss();
                true
            }
            WizardMsg::CopyInquiryId => {
                if let Some(id) = self.wizard.state().inquiry_id.clone() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = copy_to_clipboard(&id).await;
                        link.send_message(WizardMsg::Copied(result));
                    });
                }
                false
            }
            WizardMsg::Copied(Ok(())) => {
                self.toasts.show(ToastKind::Success, "Copied!", "Inquiry ID copied to clipboard.");
                true
            }
            WizardMsg::Copied(Err(e)) => {
                log::warn!("Clipboard write failed: {}", e);
                self.toasts.show(ToastKind::Error, "Copy Failed", "Please copy the inquiry ID manually.");
                true
            }
            WizardMsg::DismissToast => {
                self.toasts.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toast = match self.toasts.current() {
            Some(toast) => html! {
                <Toast
                    kind={toast.kind}
                    title={toast.title.clone()}
                    message={toast.message.clone()}
                    sequence={toast.sequence}
                    on_dismiss={ctx.link().callback(|_| WizardMsg::DismissToast)}
                />
            },
            None => html! {},
        };

        if self.wizard.state().is_submitted {
            return html! {
                <div class="wizard-card">
                    { self.render_success(ctx) }
                    { toast }
                    { wizard_styles() }
                </div>
            };
        }

        let step = self.wizard.step();
        let current = self.wizard.current_step();
        let progress = self.wizard.progress_percent();

        html! {
            <div class="wizard-card">
                <div class="wizard-header">
                    <div>
                        <h2>{step.title}</h2>
                        <p class="wizard-subtitle">{step.description}</p>
                    </div>
                    <span class="step-badge">{format!("Step {} of {}", current + 1, STEPS.len())}</span>
                </div>

                <div class="wizard-progress">
                    <div class="progress-label">
                        <span>{"Progress"}</span>
                        <span>{format!("{}%", progress)}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {}%;", progress)}></div>
                    </div>
                    if progress == 100 {
                        <p class="progress-done">{"🏆 Ready to submit!"}</p>
                    }
                </div>

                <ol class="step-indicators">
                    { for STEPS.iter().enumerate().map(|(index, s)| {
                        let state = if index < current {
                            "done"
                        } else if index == current {
                            "active"
                        } else {
                            "upcoming"
                        };
                        html! {
                            <li class={classes!("step-indicator", state)}>
                                <span class="step-dot">
                                    { if index < current { "✓".to_string() } else { (index + 1).to_string() } }
                                </span>
                                <span class="step-name">{s.title}</span>
                            </li>
                        }
                    }) }
                </ol>

                <div class="wizard-body">
                    {
                        match current {
                            0 => self.render_contact_step(ctx),
                            1 => self.render_project_step(ctx),
                            2 => self.render_services_step(ctx),
                            3 => self.render_budget_step(ctx),
                            _ => self.render_review_step(ctx),
                        }
                    }
                </div>

                if let Some(error) = &self.wizard.state().submission_error {
                    <p class="field-error submission-error">{error}</p>
                }

                <div class="wizard-nav">
                    <button
                        type="button"
                        class="btn-outline"
                        disabled={current == 0}
                        onclick={ctx.link().callback(|_| WizardMsg::Previous)}
                    >
                        {"‹ Previous"}
                    </button>
                    <div class="draft-actions">
                        <button type="button" class="btn-ghost" onclick={ctx.link().callback(|_| WizardMsg::SaveDraft)}>
                            {"Save Draft"}
                        </button>
                        <button type="button" class="btn-ghost" onclick={ctx.link().callback(|_| WizardMsg::LoadDraft)}>
                            {"Load Draft"}
                        </button>
                    </div>
                    <button
                        type="button"
                        class="btn-primary"
                        onclick={ctx.link().callback(|_| WizardMsg::Next)}
                    >
                        { if self.wizard.is_last_step() { "Submit Inquiry" } else { "Next ›" } }
                    </button>
                </div>
                { toast }
                { wizard_styles() }
            </div>
        }
    }
}

impl ContactWizard {
    fn report<T>(&mut self, result: Result<T, WizardError>) {
        if let Err(e) = result {
            self.report_error(e);
        }
    }

    fn report_error(&mut self, error: WizardError) {
        log::warn!("Wizard action failed: {}", error);
        let title = match &error {
            WizardError::Draft(_) => "Draft Not Available",
            WizardError::Submission(_) => "Submission Failed",
            _ => "Action Not Possible",
        };
        self.toasts.show(ToastKind::Error, title, error.to_string());
    }

    fn field_value(&self, field: Field) -> String {
        self.wizard
            .state()
            .form_data
            .text(field)
            .unwrap_or_default()
            .to_string()
    }

    fn field_error(&self, field: Field) -> Html {
        match self.wizard.error(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, label: &'static str, input_type: &'static str, placeholder: &'static str) -> Html {
        let has_error = self.wizard.error(field).is_some();
        html! {
            <div class="form-field">
                <label for={field.key()}>{label}</label>
                <input
                    id={field.key()}
                    type={input_type}
                    value={self.field_value(field)}
                    placeholder={placeholder}
                    class={classes!(has_error.then_some("input-error"))}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        WizardMsg::SetField(field, input.value())
                    })}
                />
                { self.field_error(field) }
            </div>
        }
    }

    fn text_area(&self, ctx: &Context<Self>, field: Field, label: &'static str, placeholder: &'static str, rows: u32) -> Html {
        let has_error = self.wizard.error(field).is_some();
        html! {
            <div class="form-field">
                <label for={field.key()}>{label}</label>
                <textarea
                    id={field.key()}
                    rows={rows.to_string()}
                    value={self.field_value(field)}
                    placeholder={placeholder}
                    class={classes!(has_error.then_some("input-error"))}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        WizardMsg::SetField(field, input.value())
                    })}
                />
                { self.field_error(field) }
            </div>
        }
    }

    fn select_input(&self, ctx: &Context<Self>, field: Field, label: &'static str, options: &'static [&'static str], placeholder: &'static str) -> Html {
        let current = self.field_value(field);
        let has_error = self.wizard.error(field).is_some();
        html! {
            <div class="form-field">
                <label for={field.key()}>{label}</label>
                <select
                    id={field.key()}
                    class={classes!(has_error.then_some("input-error"))}
                    onchange={ctx.link().callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        WizardMsg::SetField(field, select.value())
                    })}
                >
                    <option value="" selected={current.is_empty()}>{placeholder}</option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={current == *option}>{*option}</option>
                    }) }
                </select>
                { self.field_error(field) }
            </div>
        }
    }

    fn render_contact_step(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="step-fields">
                <div class="field-grid">
                    { self.text_input(ctx, Field::Name, "Full Name *", "text", "Enter your full name") }
                    { self.text_input(ctx, Field::Phone, "Phone Number *", "tel", "Enter your phone number") }
                </div>
                { self.text_input(ctx, Field::Email, "Email Address *", "email", "Enter your email address") }
            </div>
        }
    }

    fn render_project_step(&self, ctx: &Context<Self>) -> Html {
        let attachment = self.wizard.state().attachment.clone();
        html! {
            <div class="step-fields">
                <div class="field-grid">
                    { self.text_input(ctx, Field::ProjectType, "Project Type *", "text", "e.g., Apartment, Villa, Office") }
                    { self.text_input(ctx, Field::PropertySize, "Property Size", "text", "e.g., 1000 sq ft, 2BHK") }
                </div>
                <div class="form-field">
                    <label for="fileUpload">{"Upload Files (Optional)"}</label>
                    <input
                        id="fileUpload"
                        type="file"
                        accept="image/*, .pdf"
                        onchange={ctx.link().callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
                            WizardMsg::SetAttachment(name)
                        })}
                    />
                    if let Some(name) = attachment {
                        <p class="field-note">{format!("✓ Selected: {}", name)}</p>
                    }
                </div>
                { self.text_area(ctx, Field::Description, "Project Description *", "Describe your project requirements, vision, and any specific needs...", 4) }
            </div>
        }
    }

    fn render_services_step(&self, ctx: &Context<Self>) -> Html {
        let data = &self.wizard.state().form_data;
        html! {
            <div class="step-fields">
                <p class="field-label">{"Select Required Services *"}</p>
                <p class="field-note">{"Choose all services that apply to your project"}</p>
                { self.field_error(Field::SelectedServices) }
                <div class="service-grid">
                    { for Service::ALL.iter().map(|service| {
                        let service = *service;
                        html! {
                            <label class="service-option">
                                <input
                                    type="checkbox"
                                    checked={data.selected_services.contains(&service)}
                                    onchange={ctx.link().callback(move |_| WizardMsg::ToggleService(service))}
                                />
                                {service.label()}
                            </label>
                        }
                    }) }
                </div>
                if !data.selected_services.is_empty() {
                    <p class="field-note">{format!("Selected Services: {}", data.services_summary())}</p>
                }
                { for self.wizard.relevant_groups().into_iter().map(|group| match group {
                    FieldGroup::InteriorStyle => self.select_input(ctx, Field::InteriorStyle, "Preferred Interior Style", &INTERIOR_STYLES, "Select a style"),
                    FieldGroup::Flooring => self.select_input(ctx, Field::FlooringType, "Flooring Type", &FLOORING_TYPES, "Select flooring"),
                }) }
            </div>
        }
    }

    fn render_budget_step(&self, ctx: &Context<Self>) -> Html {
        let visit_date = self
            .wizard
            .state()
            .visit_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        html! {
            <div class="step-fields">
                <div class="field-grid">
                    { self.select_input(ctx, Field::Budget, "Budget Range *", &BUDGET_RANGES, "Select budget range") }
                    { self.select_input(ctx, Field::Timeline, "Project Timeline *", &TIMELINES, "Select timeline") }
                </div>
                <div class="form-field">
                    <label for="visitDate">{"Preferred Site Visit Date"}</label>
                    <input
                        id="visitDate"
                        type="date"
                        value={visit_date}
                        onchange={ctx.link().callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            WizardMsg::SetVisitDate(input.value())
                        })}
                    />
                </div>
            </div>
        }
    }

    fn render_review_step(&self, ctx: &Context<Self>) -> Html {
        let state = self.wizard.state();
        let data = &state.form_data;
        let project = if data.property_size.trim().is_empty() {
            data.project_type.clone()
        } else {
            format!("{} ({})", data.project_type, data.property_size)
        };

        let earlier_errors = self.wizard.earlier_step_errors();

        html! {
            <div class="step-fields">
                if !earlier_errors.is_empty() {
                    <div class="earlier-errors" role="alert">
                        <p><strong>{"Some earlier answers need attention:"}</strong></p>
                        <ul>
                            { for earlier_errors.iter().map(|(field, message)| html! {
                                <li>{format!("{}: {}", STEPS[field.step()].title, message)}</li>
                            }) }
                        </ul>
                    </div>
                }
                { self.text_area(ctx, Field::SpecialRequirements, "Special Requirements (Optional)", "Any special considerations, accessibility needs, or additional requirements...", 3) }
                <div class="review-summary">
                    <h3>{"Review Your Information"}</h3>
                    <p><strong>{"Contact: "}</strong>{format!("{} | {} | {}", data.name, data.email, data.phone)}</p>
                    <p><strong>{"Project: "}</strong>{project}</p>
                    <p><strong>{"Services: "}</strong>{data.services_summary()}</p>
                    <p><strong>{"Budget & Timeline: "}</strong>{format!("{} | {}", data.budget, data.timeline)}</p>
                    if let Some(date) = state.visit_date {
                        <p><strong>{"Site Visit: "}</strong>{date.format("%d %b %Y").to_string()}</p>
                    }
                    if !data.description.trim().is_empty() {
                        <p><strong>{"Description: "}</strong>{&data.description}</p>
                    }
                </div>
                <label class="terms-option">
                    <input
                        type="checkbox"
                        checked={state.terms_accepted}
                        onchange={ctx.link().callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            WizardMsg::SetTerms(input.checked())
                        })}
                    />
                    {"I agree to the terms and conditions and privacy policy"}
                </label>
                { self.field_error(Field::Terms) }
            </div>
        }
    }

    fn render_success(&self, ctx: &Context<Self>) -> Html {
        let inquiry_id = self.wizard.state().inquiry_id.clone().unwrap_or_default();
        html! {
            <div class="wizard-success">
                <div class="success-icon">{"✓"}</div>
                <h2>{"Inquiry Submitted Successfully!"}</h2>
                <p>{"Thank you for your interest in our services. We'll review your inquiry and contact you within 24 hours."}</p>
                <p class="inquiry-id">
                    {"Your inquiry ID: "}<code>{inquiry_id}</code>
                    <button type="button" class="btn-ghost copy-id" onclick={ctx.link().callback(|_| WizardMsg::CopyInquiryId)}>
                        {"Copy"}
                    </button>
                </p>
                <button class="btn-primary" onclick={ctx.link().callback(|_| WizardMsg::NewInquiry)}>
                    {"Submit Another Inquiry"}
                </button>
            </div>
        }
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn wizard_styles() -> Html {
    html! {
        <style>
            {r#"
                .wizard-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem;
                    background: #ffffff;
                    border-radius: 16px;
                    box-shadow: 0 8px 32px rgba(62, 39, 35, 0.08);
                    color: #3e2723;
                }
                .wizard-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }
                .wizard-header h2 { margin: 0; color: #5d4037; }
                .wizard-subtitle { margin: 0.25rem 0 0; color: #8d6e63; }
                .step-badge {
                    background: #efebe9;
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.85rem;
                }
                .progress-label {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.85rem;
                    color: #8d6e63;
                }
                .progress-track {
                    height: 8px;
                    background: #efebe9;
                    border-radius: 4px;
                    overflow: hidden;
                    margin-top: 0.35rem;
                }
                .progress-fill {
                    height: 100%;
                    background: linear-gradient(90deg, #8d6e63, #c8a165);
                    transition: width 0.3s ease;
                }
                .progress-done { text-align: center; color: #2e7d32; font-size: 0.9rem; }
                .step-indicators {
                    display: flex;
                    justify-content: space-between;
                    list-style: none;
                    padding: 0;
                    margin: 1.5rem 0;
                }
                .step-indicator {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 0.75rem;
                    color: #a1887f;
                }
                .step-dot {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid #d7ccc8;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-indicator.active { color: #5d4037; }
                .step-indicator.active .step-dot { border-color: #5d4037; }
                .step-indicator.done .step-dot { background: #5d4037; border-color: #5d4037; color: #fff; }
                .step-fields { display: flex; flex-direction: column; gap: 1rem; }
                .field-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1rem;
                }
                .form-field { display: flex; flex-direction: column; gap: 0.35rem; }
                .form-field input, .form-field textarea, .form-field select {
                    padding: 0.6rem 0.75rem;
                    border: 1px solid #d7ccc8;
                    border-radius: 8px;
                    font: inherit;
                }
                .input-error { border-color: #c62828 !important; }
                .field-error { color: #c62828; font-size: 0.85rem; margin: 0; }
                .earlier-errors { background: #ffebee; border-left: 4px solid #c62828; border-radius: 8px; padding: 0.75rem 1rem; }
                .earlier-errors ul { margin: 0.25rem 0 0; padding-left: 1.25rem; }
                .copy-id { margin-left: 0.5rem; }
                .field-note { color: #8d6e63; font-size: 0.85rem; margin: 0; }
                .field-label { font-weight: 600; margin: 0; }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 0.75rem;
                }
                .service-option, .terms-option {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }
                .review-summary {
                    background: #faf6f2;
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                }
                .review-summary h3 { margin-top: 0; }
                .wizard-nav {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    border-top: 1px solid #efebe9;
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                }
                .draft-actions { display: flex; gap: 0.5rem; }
                .btn-primary, .btn-outline, .btn-ghost {
                    padding: 0.6rem 1.25rem;
                    border-radius: 8px;
                    cursor: pointer;
                    font: inherit;
                }
                .btn-primary { background: #5d4037; color: #fff; border: none; }
                .btn-outline { background: none; border: 1px solid #5d4037; color: #5d4037; }
                .btn-outline:disabled { opacity: 0.4; cursor: default; }
                .btn-ghost { background: none; border: none; color: #8d6e63; }
                .wizard-success { text-align: center; padding: 2rem 0; }
                .success-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: #2e7d32;
                    color: #fff;
                    font-size: 2rem;
                    line-height: 4rem;
                }
                .inquiry-id code {
                    background: #efebe9;
                    padding: 0.2rem 0.5rem;
                    border-radius: 6px;
                    letter-spacing: 0.05em;
                }
                @media (max-width: 768px) {
                    .wizard-card { padding: 1.25rem; }
                    .step-name { display: none; }
                    .wizard-nav { flex-wrap: wrap; }
                }
            "#}
        </style>
    }
}
