//! Step sequencing for the wizard

use serde::{Serialize, Serializer};

/// Screens of the wizard, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Welcome,
    Authentication,
    AiContext,
    ApplyConfigs,
    TicketSchedules,
    CleanupConfigs,
    Complete,
}

impl WizardStep {
    /// Number of steps in the wizard
    pub const COUNT: usize = 7;

    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Welcome,
            WizardStep::Authentication,
            WizardStep::AiContext,
            WizardStep::ApplyConfigs,
            WizardStep::TicketSchedules,
            WizardStep::CleanupConfigs,
            WizardStep::Complete,
        ]
    }

    /// Zero-based ordinal of this step
    pub fn index(self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::Authentication => 1,
            WizardStep::AiContext => 2,
            WizardStep::ApplyConfigs => 3,
            WizardStep::TicketSchedules => 4,
            WizardStep::CleanupConfigs => 5,
            WizardStep::Complete => 6,
        }
    }

    /// Step at `index`, saturating to the terminal step for larger values
    pub fn from_index(index: usize) -> Self {
        let all = Self::all();
        all[index.min(all.len() - 1)]
    }

    /// Following step; the terminal step maps to itself
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step; the first step maps to itself
    pub fn prev(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Complete
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Welcome",
            WizardStep::Authentication => "Global Authentication Setup",
            WizardStep::AiContext => "AI Business Context Configuration",
            WizardStep::ApplyConfigs => "Apply Configurations",
            WizardStep::TicketSchedules => "Activate Common Ticket Schedules",
            WizardStep::CleanupConfigs => "Activate Cleanup & Random Configs",
            WizardStep::Complete => "Configuration Complete",
        }
    }

    /// Fraction of the wizard reached once this step is shown, in (0, 1]
    pub fn progress(self) -> f64 {
        (self.index() + 1) as f64 / Self::COUNT as f64
    }
}

impl Serialize for WizardStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_for_every_step() {
        for (i, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), *step);
        }
        assert_eq!(WizardStep::all().len(), WizardStep::COUNT);
    }

    #[test]
    fn test_from_index_saturates() {
        assert_eq!(WizardStep::from_index(7), WizardStep::Complete);
        assert_eq!(WizardStep::from_index(usize::MAX), WizardStep::Complete);
    }

    #[test]
    fn test_next_stops_at_terminal() {
        assert_eq!(WizardStep::CleanupConfigs.next(), WizardStep::Complete);
        assert_eq!(WizardStep::Complete.next(), WizardStep::Complete);
    }

    #[test]
    fn test_prev_floors_at_welcome() {
        assert_eq!(WizardStep::Authentication.prev(), WizardStep::Welcome);
        assert_eq!(WizardStep::Welcome.prev(), WizardStep::Welcome);
    }

    #[test]
    fn test_progress() {
        assert!((WizardStep::Welcome.progress() - 1.0 / 7.0).abs() < f64::EPSILON);
        assert!((WizardStep::Complete.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_as_ordinal() {
        let json = serde_json::to_string(&WizardStep::ApplyConfigs).unwrap();
        assert_eq!(json, "3");
    }
}
