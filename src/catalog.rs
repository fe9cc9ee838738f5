//! Fixed option tables offered by the wizard screens

/// A recurring ticket schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const SCHEDULES: &[ScheduleOption] = &[
    ScheduleOption {
        id: "similar-tickets",
        title: "Similar Tickets",
        description: "Generate similar ticket suggestions",
        category: "Standard Tickets",
    },
    ScheduleOption {
        id: "merge-suggestions",
        title: "Merge Suggestions",
        description: "Suggest tickets that can be merged",
        category: "Standard Tickets",
    },
    ScheduleOption {
        id: "macro-suggestions-agents",
        title: "Macro Suggestions for Agents",
        description: "AI-powered macro recommendations for agents",
        category: "Standard Tickets",
    },
    ScheduleOption {
        id: "macro-suggestions-admins",
        title: "Macro Suggestions for Admins",
        description: "Macro insights for administrators",
        category: "Standard Tickets",
    },
    ScheduleOption {
        id: "automation-potential",
        title: "Automation Potential",
        description: "Identify opportunities for automation",
        category: "Admin",
    },
    ScheduleOption {
        id: "overview-copilot",
        title: "Overview: Copilot",
        description: "AI copilot overview dashboard",
        category: "Admin",
    },
    ScheduleOption {
        id: "intelligent-triage",
        title: "Intelligent Triage - Intent Suggestions",
        description: "Automated ticket intent classification",
        category: "Admin",
    },
    ScheduleOption {
        id: "general-dashboard",
        title: "General (conversations, CSAT, etc)",
        description: "Comprehensive metrics dashboard",
        category: "Ultimate Dashboards",
    },
    ScheduleOption {
        id: "email-bot",
        title: "Email Bot",
        description: "Email bot performance metrics",
        category: "Ultimate Dashboards",
    },
    ScheduleOption {
        id: "voice-bot",
        title: "Voice Bot (coming soon)",
        description: "Voice bot analytics",
        category: "Ultimate Dashboards",
    },
    ScheduleOption {
        id: "bot-tickets-escalation",
        title: "Bot Tickets w/ escalation",
        description: "Bot ticket escalation tracking",
        category: "Ultimate Dashboards",
    },
    ScheduleOption {
        id: "qa-dashboard",
        title: "QA Dashboard",
        description: "Quality assurance metrics",
        category: "QA Dashboards",
    },
    ScheduleOption {
        id: "tymeshift-dashboard",
        title: "Tymeshift Dashboard",
        description: "Workforce management insights",
        category: "Tymeshift Dashboards",
    },
    ScheduleOption {
        id: "advanced-security",
        title: "Advanced Security",
        description: "Security monitoring and alerts",
        category: "Advanced Security",
    },
];

/// Distinct schedule categories in first-appearance order
pub fn schedule_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for schedule in SCHEDULES {
        if !categories.contains(&schedule.category) {
            categories.push(schedule.category);
        }
    }
    categories
}

/// A cleanup cadence for generated configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CLEANUP_SCHEDULES: &[CleanupOption] = &[
    CleanupOption {
        id: "cleanup-7-days",
        label: "Clean up new Configuration every 7 Days",
    },
    CleanupOption {
        id: "cleanup-14-days",
        label: "Clean up new Configuration every 14 Days",
    },
    CleanupOption {
        id: "cleanup-30-days",
        label: "Clean up new Configuration every 30 Days",
    },
    CleanupOption {
        id: "cleanup-never",
        label: "Never clean up (manual only)",
    },
];

/// An optional one-off configuration change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomConfigOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const RANDOM_CONFIGS: &[RandomConfigOption] = &[
    RandomConfigOption {
        id: "auto-assist-field",
        title: "Create \"Enable Auto Assist\" Ticket Field",
        description: "Adds a custom field to enable Auto Assist on tickets",
    },
    RandomConfigOption {
        id: "deactivate-email-triggers",
        title: "Deactivate default Email Notification Triggers",
        description: "Disables default email notifications",
    },
    RandomConfigOption {
        id: "deactivate-views",
        title: "Deactivate default Views",
        description: "Hides default Zendesk views",
    },
    RandomConfigOption {
        id: "create-all-tickets-view",
        title: "Create \"All Tickets\" View",
        description: "Creates a comprehensive all tickets view",
    },
];

/// Help center theme offered on the apply step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Accent color as (r, g, b)
    pub color: (u8, u8, u8),
}

pub const THEMES: &[ThemeOption] = &[
    ThemeOption {
        id: "copenhagen",
        label: "Copenhagen",
        description: "Clean and modern design with focus on readability",
        color: (0x03, 0x36, 0x3D),
    },
    ThemeOption {
        id: "gather",
        label: "Gather",
        description: "Warm and inviting community-focused theme",
        color: (0x5B, 0x3A, 0x29),
    },
    ThemeOption {
        id: "minimal",
        label: "Minimal",
        description: "Simple and distraction-free interface",
        color: (0x2C, 0x2C, 0x2C),
    },
    ThemeOption {
        id: "studio",
        label: "Studio",
        description: "Bold and creative design for visual brands",
        color: (0x6B, 0x46, 0xC1),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_categories_in_order() {
        assert_eq!(
            schedule_categories(),
            [
                "Standard Tickets",
                "Admin",
                "Ultimate Dashboards",
                "QA Dashboards",
                "Tymeshift Dashboards",
                "Advanced Security",
            ]
        );
    }

    #[test]
    fn test_schedules_are_grouped_by_category() {
        // Categories must be contiguous so the list renders as groups
        let categories = schedule_categories();
        let mut last = 0;
        for schedule in SCHEDULES {
            let pos = categories.iter().position(|c| *c == schedule.category).unwrap();
            assert!(pos >= last);
            last = pos;
        }
        assert_eq!(SCHEDULES.len(), 14);
    }

    #[test]
    fn test_option_ids_are_unique() {
        let mut ids: Vec<&str> = SCHEDULES.iter().map(|s| s.id).collect();
        ids.extend(CLEANUP_SCHEDULES.iter().map(|c| c.id));
        ids.extend(RANDOM_CONFIGS.iter().map(|r| r.id));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
