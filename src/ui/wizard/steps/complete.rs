//! Completion step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::chrome::render_step_frame;
use crate::session::{Session, WizardStep};
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_complete_step(&self, frame: &mut Frame, session: &Session) {
        let body = render_step_frame(
            frame,
            WizardStep::Complete,
            &[("Enter", "go to dashboard"), ("q", "quit")],
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(2), // Account
                Constraint::Min(3),    // Counts
            ])
            .split(body);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Your demo account is ready!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let account = match &session.auth_config {
            Some(auth) => Line::from(vec![
                Span::styled("Connected to ", Style::default().fg(Color::Gray)),
                Span::styled(auth.host(), Style::default().fg(Color::Cyan)),
            ]),
            None => Line::from(Span::styled(
                "No account connected",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(
            Paragraph::new(account).alignment(Alignment::Center),
            chunks[1],
        );

        let counts = [
            (session.ai_contexts.len(), "Business Contexts"),
            (session.active_schedule_count(), "Active Schedules"),
            (session.enabled_config_count(), "Configurations"),
        ];
        let lines: Vec<Line> = counts
            .iter()
            .map(|(count, label)| {
                Line::from(vec![
                    Span::styled(
                        format!("{count:>3}  "),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*label),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[2],
        );
    }
}
