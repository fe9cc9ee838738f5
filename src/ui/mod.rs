pub mod terminal_guard;
pub mod text_input;
pub mod wizard;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use text_input::TextInput;
pub use wizard::{WizardAction, WizardScreen};

/// Rect of `percent_x` by `percent_y` centered in `r`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
