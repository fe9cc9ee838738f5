//! Authentication step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::chrome::{render_step_frame, section_block};
use crate::session::WizardStep;
use crate::ui::wizard::{AuthField, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_authentication_step(&self, frame: &mut Frame) {
        let body = render_step_frame(
            frame,
            WizardStep::Authentication,
            &[
                ("Tab", "switch field"),
                ("Enter", "save & continue"),
                ("Esc", "back"),
            ],
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Intro
                Constraint::Length(3), // Subdomain
                Constraint::Length(3), // Email
                Constraint::Length(3), // Token
                Constraint::Min(2),    // Docs
            ])
            .split(body);

        frame.render_widget(
            Paragraph::new(
                "Connect your Zendesk account. The token is only kept in memory for this session.",
            )
            .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let subdomain = Paragraph::new(Line::from(vec![
            Span::raw(self.subdomain.clone()),
            Span::styled(".zendesk.com", Style::default().fg(Color::DarkGray)),
        ]))
        .block(section_block("Subdomain", false));
        frame.render_widget(subdomain, chunks[1]);

        self.email
            .render(frame, chunks[2], self.auth_focus == AuthField::Email);
        self.api_token
            .render(frame, chunks[3], self.auth_focus == AuthField::ApiToken);

        let docs = Paragraph::new(vec![
            Line::from(Span::styled(
                "Need an API token? See:",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.docs_url.clone(),
                Style::default().fg(Color::Cyan),
            )),
        ]);
        frame.render_widget(docs, chunks[4]);
    }
}
