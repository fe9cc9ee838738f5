//! AI context step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::chrome::{render_step_frame, section_block};
use crate::session::{ContextSource, Session, WizardStep};
use crate::ui::wizard::{ContextFocus, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_ai_context_step(&mut self, frame: &mut Frame, session: &Session) {
        let hints: &[(&str, &str)] = match self.context_focus {
            ContextFocus::Website => &[
                ("Enter", "generate"),
                ("Tab", "contexts"),
                ("Esc", "back"),
            ],
            ContextFocus::List => &[
                ("↑/↓", "navigate"),
                ("d", "remove"),
                ("Tab", "website"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
        };
        let body = render_step_frame(frame, WizardStep::AiContext, hints);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Intro
                Constraint::Length(3), // Website field
                Constraint::Length(1), // Status
                Constraint::Min(4),    // Context list
            ])
            .split(body);

        frame.render_widget(
            Paragraph::new(
                "Enter a company website and we'll generate a business context for your demo.",
            ),
            chunks[0],
        );

        self.website.render(
            frame,
            chunks[1],
            self.context_focus == ContextFocus::Website,
        );

        let status = if self.generating {
            Line::from(Span::styled(
                "Generating context...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(
                format!("{} business contexts", session.ai_contexts.len()),
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(status), chunks[2]);

        let items: Vec<ListItem> = session
            .ai_contexts
            .iter()
            .map(|context| {
                let logo = context.logo_url().unwrap_or_else(|| "[#]".to_string());
                let source = match (context.source, context.domain()) {
                    (ContextSource::Website, Some(domain)) => domain,
                    (ContextSource::Website, None) => "website".to_string(),
                    (ContextSource::Manual, _) => "manual".to_string(),
                };
                let selected = session.selected_context_id.as_deref() == Some(context.id.as_str());
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            context.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  ({source})"),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            if selected { "  selected" } else { "" },
                            Style::default().fg(Color::Green),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", context.summary_line()),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(Span::styled(
                        format!("  {logo}"),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let focused = self.context_focus == ContextFocus::List;
        let list = List::new(items)
            .block(section_block("Business Contexts", focused))
            .highlight_style(if focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            })
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[3], &mut self.context_list);
    }
}
