use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One screen of the inquiry wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [StepDefinition; 5] = [
    StepDefinition { title: "Your Info", description: "Basic contact information" },
    StepDefinition { title: "Project Details", description: "Tell us about your project" },
    StepDefinition { title: "Service Selection", description: "Choose required services" },
    StepDefinition { title: "Budget & Timeline", description: "Project scope and timing" },
    StepDefinition { title: "Review & Submit", description: "Review and send inquiry" },
];

pub const LAST_STEP: usize = STEPS.len() - 1;

/// Services offered on the contact form. Serialized by their display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "Interior Design")]
    InteriorDesign,
    #[serde(rename = "Decorative Finishes")]
    DecorativeFinishes,
    #[serde(rename = "Premium Flooring")]
    PremiumFlooring,
    #[serde(rename = "Civil Contracting")]
    CivilContracting,
    #[serde(rename = "Vastu Consultancy")]
    VastuConsultancy,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::InteriorDesign,
        Service::DecorativeFinishes,
        Service::PremiumFlooring,
        Service::CivilContracting,
        Service::VastuConsultancy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::InteriorDesign => "Interior Design",
            Service::DecorativeFinishes => "Decorative Finishes",
            Service::PremiumFlooring => "Premium Flooring",
            Service::CivilContracting => "Civil Contracting",
            Service::VastuConsultancy => "Vastu Consultancy",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const BUDGET_RANGES: [&str; 4] = ["₹50K – ₹1L", "₹1L – ₹5L", "₹5L – ₹10L", "₹10L+"];

pub const TIMELINES: [&str; 4] = ["Immediately", "1–2 Weeks", "1–2 Months", "Not sure yet"];

pub const INTERIOR_STYLES: [&str; 6] =
    ["Minimal", "Classic", "Modern", "Traditional", "Contemporary", "Industrial"];

pub const FLOORING_TYPES: [&str; 6] = ["Hardwood", "Tiles", "Marble", "Laminate", "Vinyl", "Carpet"];

/// Names every input the wizard owns. `Terms` is the acknowledgement checkbox
/// on the last step; it has no slot in [`FormData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ProjectType,
    PropertySize,
    Description,
    SelectedServices,
    InteriorStyle,
    FlooringType,
    Budget,
    Timeline,
    SpecialRequirements,
    Terms,
}

impl Field {
    /// Key used for DOM ids and log output.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProjectType => "projectType",
            Field::PropertySize => "propertySize",
            Field::Description => "description",
            Field::SelectedServices => "selectedServices",
            Field::InteriorStyle => "interiorStyle",
            Field::FlooringType => "flooringType",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::SpecialRequirements => "specialRequirements",
            Field::Terms => "terms",
        }
    }

    /// Index of the step that renders this field.
    pub fn step(&self) -> usize {
        match self {
            Field::Name | Field::Email | Field::Phone => 0,
            Field::ProjectType | Field::PropertySize | Field::Description => 1,
            Field::SelectedServices | Field::InteriorStyle | Field::FlooringType => 2,
            Field::Budget | Field::Timeline => 3,
            Field::SpecialRequirements | Field::Terms => LAST_STEP,
        }
    }
}

/// Optional field groups that only matter for some service selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    InteriorStyle,
    Flooring,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub property_size: String,
    pub description: String,
    pub selected_services: BTreeSet<Service>,
    #[serde(default)]
    pub interior_style: String,
    #[serde(default)]
    pub flooring_type: String,
    pub budget: String,
    pub timeline: String,
    pub special_requirements: String,
}

impl FormData {
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ProjectType => &self.project_type,
            Field::PropertySize => &self.property_size,
            Field::Description => &self.description,
            Field::InteriorStyle => &self.interior_style,
            Field::FlooringType => &self.flooring_type,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
            Field::SpecialRequirements => &self.special_requirements,
            Field::SelectedServices | Field::Terms => return None,
        };
        Some(value.as_str())
    }

    /// Mutable slot for a text-valued field. `None` for the service set and
    /// the terms checkbox, which have their own operations.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::ProjectType => Some(&mut self.project_type),
            Field::PropertySize => Some(&mut self.property_size),
            Field::Description => Some(&mut self.description),
            Field::InteriorStyle => Some(&mut self.interior_style),
            Field::FlooringType => Some(&mut self.flooring_type),
            Field::Budget => Some(&mut self.budget),
            Field::Timeline => Some(&mut self.timeline),
            Field::SpecialRequirements => Some(&mut self.special_requirements),
            Field::SelectedServices | Field::Terms => None,
        }
    }

    /// Adds the service if missing, removes it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_service(&mut self, service: Service) -> bool {
        if self.selected_services.remove(&service) {
            false
        } else {
            self.selected_services.insert(service);
            true
        }
    }

    pub fn services_summary(&self) -> String {
        self.selected_services
            .iter()
            .map(Service::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which optional groups the current selection makes relevant, in render order.
pub fn relevant_groups(data: &FormData) -> Vec<FieldGroup> {
    let mut groups = Vec::new();
    if data.selected_services.contains(&Service::InteriorDesign) {
        groups.push(FieldGroup::InteriorStyle);
    }
    if data.selected_services.contains(&Service::PremiumFlooring) {
        groups.push(FieldGroup::Flooring);
    }
    groups
}

/// Display language of the contact page. Only labels change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }

    pub fn contact_heading(&self) -> &'static str {
        match self {
            Language::En => "Get In Touch",
            Language::Hi => "संपर्क करें",
            Language::Mr => "संपर्क साधा",
        }
    }
}
