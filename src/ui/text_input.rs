//! Single-line text input for wizard forms

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Editable single-line field. The cursor is a char index, so multi-byte
/// input edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    label: String,
    placeholder: String,
    masked: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Render the value as bullets (for secrets)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.len_chars() {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len_chars());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.len_chars();
                true
            }
            _ => false,
        }
    }

    fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.len_chars())
        } else {
            self.value.clone()
        }
    }

    /// Render as a bordered field titled with the label
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut text = self.display_value();
            if focused {
                let at = text
                    .char_indices()
                    .nth(self.cursor)
                    .map_or(text.len(), |(i, _)| i);
                text.insert(at, '|');
            }
            Line::from(Span::raw(text))
        };

        let para = Paragraph::new(content)
            .block(block)
            .style(Style::default().fg(if focused { Color::White } else { Color::Gray }));
        frame.render_widget(para, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new("Website", "");
        type_str(&mut input, "uber.comx");
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "uber.com");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new("Website", "");
        type_str(&mut input, "ubr");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Right);
        type_str(&mut input, "e");
        assert_eq!(input.value(), "uber");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Name", "");
        type_str(&mut input, "café");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.value(), "caf");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.value(), "af");
    }

    #[test]
    fn test_control_chords_are_not_consumed() {
        let mut input = TextInput::new("Email", "");
        let consumed =
            input.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!consumed);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new("API Token", "").masked();
        input.set_value("abc");
        assert_eq!(input.display_value(), "•••");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_blank_and_clear() {
        let mut input = TextInput::new("Website", "");
        input.set_value("   ");
        assert!(input.is_blank());
        input.set_value("x");
        assert!(!input.is_blank());
        input.clear();
        assert_eq!(input.value(), "");
    }
}
