//! Header, progress gauge and key-hint footer shared by all steps

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::session::WizardStep;
use crate::ui::centered_rect;

/// Brand accent color
pub(crate) const BRAND: Color = Color::Rgb(0x17, 0x4A, 0x5B);

/// Hints shown on every non-terminal step after the step's own hints
const GLOBAL_HINTS: &[(&str, &str)] = &[("Ctrl-R", "start over"), ("Ctrl-C", "quit")];

/// Draw the frame around a step and return the body area.
///
/// Non-terminal steps get the product header and the progress gauge. The
/// terminal step only gets the body and its own hints.
pub(super) fn render_step_frame(
    frame: &mut Frame,
    step: WizardStep,
    hints: &[(&str, &str)],
) -> Rect {
    let area = centered_rect(80, 90, frame.area());
    frame.render_widget(Clear, area);

    let with_chrome = !step.is_terminal();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if with_chrome { 1 } else { 0 }), // Header
            Constraint::Min(5),                                  // Body
            Constraint::Length(if with_chrome { 1 } else { 0 }), // Progress
            Constraint::Length(1),                               // Footer
        ])
        .split(area);

    if with_chrome {
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Demo Studio Kickstart",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))),
            header[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Ctrl-S", Style::default().fg(Color::Yellow)),
                Span::styled(" skip tour", Style::default().fg(Color::DarkGray)),
            ]))
            .alignment(Alignment::Right),
            header[1],
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(BRAND).bg(Color::DarkGray))
            .ratio(step.progress())
            .label(format!(
                "Step {} of {}",
                step.index() + 1,
                WizardStep::COUNT
            ));
        frame.render_widget(gauge, chunks[2]);
    }

    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let body = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let mut spans = Vec::new();
    let global: &[(&str, &str)] = if with_chrome { GLOBAL_HINTS } else { &[] };
    for (i, (key, action)) in hints.iter().chain(global.iter()).enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {action}")));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[3],
    );

    body
}

/// Bordered section block, highlighted when focused
pub(super) fn section_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }))
}

/// Radio or checkbox marker
pub(super) fn marker(checked: bool, radio: bool) -> &'static str {
    match (radio, checked) {
        (true, true) => "(•) ",
        (true, false) => "( ) ",
        (false, true) => "[x] ",
        (false, false) => "[ ] ",
    }
}
