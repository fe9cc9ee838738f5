//! Ticket schedules step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::chrome::{marker, render_step_frame, section_block};
use crate::catalog::{schedule_categories, SCHEDULES};
use crate::session::{Session, WizardStep};
use crate::ui::wizard::WizardScreen;

/// Line naming the context the selections apply to
pub(super) fn render_context_banner(frame: &mut Frame, area: Rect, session: &Session) {
    let name = session
        .selected_context()
        .map_or("none selected", |context| context.name.as_str());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Business context: ", Style::default().fg(Color::Gray)),
            Span::styled(
                name.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (c to change)", Style::default().fg(Color::DarkGray)),
        ])),
        area,
    );
}

impl WizardScreen {
    pub(crate) fn render_ticket_schedules_step(&mut self, frame: &mut Frame, session: &Session) {
        let body = render_step_frame(
            frame,
            WizardStep::TicketSchedules,
            &[
                ("↑/↓", "navigate"),
                ("Space", "select"),
                ("c", "context"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(body);

        render_context_banner(frame, chunks[0], session);

        let mut previous_category = "";
        let items: Vec<ListItem> = SCHEDULES
            .iter()
            .map(|schedule| {
                let chosen = session
                    .selected_schedules
                    .get(schedule.category)
                    .is_some_and(|id| id == schedule.id);
                let category = if schedule.category == previous_category {
                    String::new()
                } else {
                    schedule.category.to_string()
                };
                previous_category = schedule.category;

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{category:<22}"),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(marker(chosen, true)),
                    Span::styled(
                        schedule.title,
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", schedule.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let title = format!(
            "Schedules ({} of {} categories active)",
            session.active_schedule_count(),
            schedule_categories().len()
        );
        let list = List::new(items)
            .block(section_block(&title, true))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_stateful_widget(list, chunks[1], &mut self.schedule_list);
    }
}
