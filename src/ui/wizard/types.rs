//! Type definitions for the wizard screens

use crate::simulate::SimulatedOperation;

/// What the app should do after the screen handled a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Nothing beyond what the screen already did
    None,
    /// Continue to the next step
    Advance,
    /// Return to the previous step
    Back,
    /// Reset the session and return to the first step
    StartOver,
    /// Jump straight to the completion step
    Skip,
    /// Leave the wizard and hand off the session summary
    Finish,
    /// Leave the wizard without a summary
    Quit,
    /// Start a simulated operation in the current screen scope
    Launch(SimulatedOperation),
}

/// Focused field on the authentication step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthField {
    #[default]
    Email,
    ApiToken,
}

impl AuthField {
    pub fn toggle(self) -> Self {
        match self {
            AuthField::Email => AuthField::ApiToken,
            AuthField::ApiToken => AuthField::Email,
        }
    }
}

/// Focused area on the AI context step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContextFocus {
    #[default]
    Website,
    List,
}

/// Focused section on the apply step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplySection {
    #[default]
    Context,
    Imports,
    Themes,
}

impl ApplySection {
    pub fn next(self) -> Self {
        match self {
            ApplySection::Context => ApplySection::Imports,
            ApplySection::Imports => ApplySection::Themes,
            ApplySection::Themes => ApplySection::Context,
        }
    }
}

/// Focused section on the cleanup step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanupSection {
    #[default]
    Cadence,
    Configs,
}

impl CleanupSection {
    pub fn toggle(self) -> Self {
        match self {
            CleanupSection::Cadence => CleanupSection::Configs,
            CleanupSection::Configs => CleanupSection::Cadence,
        }
    }
}

/// Roadmap shown on the welcome step
pub const ROADMAP: &[(&str, &str)] = &[
    (
        "Global Authentication Setup",
        "Connect your Zendesk account",
    ),
    (
        "AI Business Context Configuration",
        "Define business scenarios for AI",
    ),
    (
        "Apply Configurations",
        "Import AI-generated macros, fields, and content",
    ),
    (
        "Activate Common Ticket Schedules",
        "Select recurring demo schedules",
    ),
    (
        "Cleanup & Random Configs",
        "Configure maintenance and extras",
    ),
    ("Launch Your Demo", "Review and complete setup"),
];
