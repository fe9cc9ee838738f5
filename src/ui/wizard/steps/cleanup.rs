//! Cleanup and random configs step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::chrome::{marker, render_step_frame, section_block};
use super::schedules::render_context_banner;
use crate::catalog::{CLEANUP_SCHEDULES, RANDOM_CONFIGS};
use crate::session::{Session, WizardStep};
use crate::ui::wizard::{CleanupSection, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_cleanup_configs_step(&mut self, frame: &mut Frame, session: &Session) {
        let body = render_step_frame(
            frame,
            WizardStep::CleanupConfigs,
            &[
                ("Tab", "section"),
                ("Space", "select"),
                ("c", "context"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(CLEANUP_SCHEDULES.len() as u16 + 2),
                Constraint::Min(4),
            ])
            .split(body);

        render_context_banner(frame, chunks[0], session);

        let cadence_focused = self.cleanup_section == CleanupSection::Cadence;
        let cadence: Vec<ListItem> = CLEANUP_SCHEDULES
            .iter()
            .map(|option| {
                let chosen = session.cleanup_schedule.as_deref() == Some(option.id);
                ListItem::new(Line::from(vec![
                    Span::raw(marker(chosen, true)),
                    Span::raw(option.label),
                ]))
            })
            .collect();
        let cadence = List::new(cadence)
            .block(section_block("Ticket Cleanup", cadence_focused))
            .highlight_style(if cadence_focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            });
        frame.render_stateful_widget(cadence, chunks[1], &mut self.cleanup_list);

        let configs_focused = self.cleanup_section == CleanupSection::Configs;
        let configs: Vec<ListItem> = RANDOM_CONFIGS
            .iter()
            .map(|option| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(marker(session.is_config_enabled(option.id), false)),
                        Span::styled(option.title, Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", option.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();
        let title = format!("Random Configs ({} enabled)", session.enabled_config_count());
        let configs = List::new(configs)
            .block(section_block(&title, configs_focused))
            .highlight_style(if configs_focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            });
        frame.render_stateful_widget(configs, chunks[2], &mut self.config_list);
    }
}
