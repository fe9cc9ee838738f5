//! Welcome step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::chrome::render_step_frame;
use crate::session::WizardStep;
use crate::ui::wizard::{WizardScreen, ROADMAP};

impl WizardScreen {
    pub(crate) fn render_welcome_step(&self, frame: &mut Frame) {
        let body = render_step_frame(
            frame,
            WizardStep::Welcome,
            &[("Enter", "get started"), ("Esc", "quit")],
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Description
                Constraint::Length(1), // Spacer
                Constraint::Min(6),    // Roadmap
            ])
            .split(body);

        let title = Paragraph::new(Line::from(Span::styled(
            "Welcome to Demo Studio Kickstart",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let desc = Paragraph::new(
            "Set up a fully configured demo account in a few minutes. We'll connect \
             your account, build AI business contexts, and switch on the schedules \
             and extras that make a demo feel real.",
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(desc, chunks[1]);

        let mut roadmap = vec![Line::from(Span::styled(
            "What we'll do:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];
        for (i, (title, description)) in ROADMAP.iter().enumerate() {
            roadmap.push(Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" - {description}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(roadmap), chunks[3]);
    }
}
