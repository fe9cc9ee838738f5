//! Apply configurations step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
    Frame,
};

use super::chrome::{marker, render_step_frame, section_block, BRAND};
use crate::catalog::THEMES;
use crate::session::{Session, WizardStep};
use crate::simulate::ImportKind;
use crate::ui::wizard::{ApplySection, WizardScreen};

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    }
}

impl WizardScreen {
    pub(crate) fn render_apply_configs_step(&mut self, frame: &mut Frame, session: &Session) {
        let body = render_step_frame(
            frame,
            WizardStep::ApplyConfigs,
            &[
                ("Tab", "section"),
                ("Space", "run/select"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(session.ai_contexts.len().clamp(1, 5) as u16 + 2),
                Constraint::Min(6),
                Constraint::Length(THEMES.len() as u16 + 2),
            ])
            .split(body);

        self.render_context_picker(frame, chunks[0], session);
        self.render_imports(frame, chunks[1]);
        self.render_themes(frame, chunks[2]);
    }

    fn render_context_picker(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        let focused = self.apply_section == ApplySection::Context;
        let block = section_block("Business Context", focused);

        if session.ai_contexts.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No business contexts yet. Go back to create one.",
                    Style::default().fg(Color::DarkGray),
                ))
                .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = session
            .ai_contexts
            .iter()
            .map(|context| {
                let selected = session.selected_context_id.as_deref() == Some(context.id.as_str());
                ListItem::new(Line::from(vec![
                    Span::raw(marker(selected, true)),
                    Span::styled(
                        context.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", context.summary_line()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight(focused));
        frame.render_stateful_widget(list, area, &mut self.context_picker);
    }

    fn render_imports(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.apply_section == ApplySection::Imports;
        let block = section_block("Import Configurations", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                ImportKind::all()
                    .iter()
                    .map(|_| Constraint::Length(1))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (i, kind) in ImportKind::all().iter().enumerate() {
            let Some(row) = rows.get(i).copied() else {
                break;
            };
            let highlighted = focused && self.import_list.selected() == Some(i);
            let busy = self.importing.contains(kind);

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(row);

            let label = Paragraph::new(Line::from(vec![
                Span::raw(if highlighted { "> " } else { "  " }),
                Span::styled(
                    kind.label(),
                    if highlighted {
                        highlight(true)
                    } else {
                        Style::default().add_modifier(Modifier::BOLD)
                    },
                ),
                Span::styled(
                    format!("  {}", kind.description()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            frame.render_widget(label, cols[0]);

            if busy {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(BRAND).bg(Color::DarkGray))
                    .ratio(kind.activity_ratio())
                    .label("Importing...");
                frame.render_widget(gauge, cols[1]);
            } else {
                frame.render_widget(
                    Paragraph::new(Span::styled("ready", Style::default().fg(Color::Green))),
                    cols[1],
                );
            }
        }
    }

    fn render_themes(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.apply_section == ApplySection::Themes;
        let items: Vec<ListItem> = THEMES
            .iter()
            .map(|theme| {
                let (r, g, b) = theme.color;
                ListItem::new(Line::from(vec![
                    Span::raw(marker(self.selected_theme == Some(theme.id), true)),
                    Span::styled("■ ", Style::default().fg(Color::Rgb(r, g, b))),
                    Span::styled(theme.label, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", theme.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(section_block("Help Center Theme", focused))
            .highlight_style(highlight(focused));
        frame.render_stateful_widget(list, area, &mut self.theme_list);
    }
}
