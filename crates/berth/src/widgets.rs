//! Input widgets for the form rows.
//!
//! Two widgets cover the whole screen: a single-line [`TextInput`] with
//! cursor editing and password masking, and an inline [`Picker`] cycling a
//! closed set of options.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Stylize;

/// Echo mode for a text input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Display text as-is.
    #[default]
    Normal,
    /// Display mask characters (for passwords).
    Password,
}

/// Single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    chars: Vec<char>,
    cursor: usize,
    placeholder: String,
    echo_mode: EchoMode,
    char_limit: usize,
}

impl TextInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder shown while the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the echo mode.
    #[must_use]
    pub fn echo_mode(mut self, mode: EchoMode) -> Self {
        self.echo_mode = mode;
        self
    }

    /// Sets password masking (shorthand for echo mode).
    #[must_use]
    pub fn password(self, password: bool) -> Self {
        self.echo_mode(if password {
            EchoMode::Password
        } else {
            EchoMode::Normal
        })
    }

    /// Caps the number of characters accepted; 0 means unlimited.
    #[must_use]
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    /// The current text.
    #[must_use]
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.chars = value.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Applies one key press; returns true when the text changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.char_limit == 0 || self.chars.len() < self.char_limit {
                    self.chars.insert(self.cursor, c);
                    self.cursor += 1;
                    return true;
                }
                false
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                    return true;
                }
                false
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                    return true;
                }
                false
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.chars.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.chars.len();
                false
            }
            _ => false,
        }
    }

    fn display_value(&self) -> String {
        match self.echo_mode {
            EchoMode::Normal => self.value(),
            EchoMode::Password => "•".repeat(self.chars.len()),
        }
    }

    /// Renders the input, placeholder included.
    #[must_use]
    pub fn view(&self, focused: bool) -> String {
        let prompt = if focused {
            "> ".magenta().to_string()
        } else {
            "  ".to_string()
        };
        let display = self.display_value();
        if display.is_empty() && !self.placeholder.is_empty() {
            format!("{prompt}{}", self.placeholder.as_str().dark_grey())
        } else {
            format!("{prompt}{display}")
        }
    }
}

/// Inline one-of-N selector, cycled with the arrow keys or space.
#[derive(Debug, Clone)]
pub struct Picker {
    options: Vec<&'static str>,
    selected: usize,
}

impl Picker {
    /// Creates a picker over a fixed option set.
    #[must_use]
    pub fn new(options: Vec<&'static str>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    /// Sets the initially selected index (clamped to the option count).
    #[must_use]
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = index.min(self.options.len().saturating_sub(1));
        self
    }

    /// Index of the selected option.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.selected
    }

    /// Label of the selected option.
    #[must_use]
    pub fn selected_label(&self) -> &'static str {
        self.options.get(self.selected).copied().unwrap_or("")
    }

    /// Applies one key press; returns true when the selection changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        match key.code {
            KeyCode::Left => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.options.len() - 1);
                true
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                self.selected = (self.selected + 1) % self.options.len();
                true
            }
            _ => false,
        }
    }

    /// Renders the option row with the selection highlighted.
    #[must_use]
    pub fn view(&self, focused: bool) -> String {
        let mut out = String::new();
        if focused {
            out.push_str(&"← ".magenta().to_string());
        } else {
            out.push_str("  ");
        }
        for (i, option) in self.options.iter().enumerate() {
            if i == self.selected {
                out.push_str(&option.green().to_string());
            } else {
                out.push_str(&option.dark_grey().to_string());
            }
            if i + 1 < self.options.len() {
                out.push_str("  ");
            }
        }
        if focused {
            out.push_str(&" →".magenta().to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_inserts_at_the_cursor() {
        let mut input = TextInput::new();
        type_text(&mut input, "ac");
        input.handle_key(&key(KeyCode::Left));
        type_text(&mut input, "b");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn backspace_and_delete_remove_around_the_cursor() {
        let mut input = TextInput::new();
        type_text(&mut input, "abc");
        assert!(input.handle_key(&key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
        input.handle_key(&key(KeyCode::Home));
        assert!(input.handle_key(&key(KeyCode::Delete)));
        assert_eq!(input.value(), "b");
        // Nothing left of the cursor at the start of the line.
        assert!(!input.handle_key(&key(KeyCode::Backspace)));
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut input = TextInput::new();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!input.handle_key(&chord));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn char_limit_caps_the_text() {
        let mut input = TextInput::new().char_limit(3);
        type_text(&mut input, "12345");
        assert_eq!(input.value(), "123");
    }

    #[test]
    fn password_mode_masks_the_view() {
        let mut input = TextInput::new().password(true);
        type_text(&mut input, "secret");
        let view = input.view(true);
        assert!(!view.contains("secret"));
        assert!(view.contains("••••••"));
        // The raw value is untouched by masking.
        assert_eq!(input.value(), "secret");
    }

    #[test]
    fn placeholder_shows_only_while_empty() {
        let mut input = TextInput::new().placeholder("example.com");
        assert!(input.view(false).contains("example.com"));
        type_text(&mut input, "x");
        assert!(!input.view(false).contains("example.com"));
    }

    #[test]
    fn picker_cycles_in_both_directions() {
        let mut picker = Picker::new(vec!["Manual", "Advanced"]).with_selected(1);
        assert_eq!(picker.selected_label(), "Advanced");
        assert!(picker.handle_key(&key(KeyCode::Left)));
        assert_eq!(picker.selected_label(), "Manual");
        assert!(picker.handle_key(&key(KeyCode::Left)));
        assert_eq!(picker.selected_label(), "Advanced");
        assert!(picker.handle_key(&key(KeyCode::Right)));
        assert_eq!(picker.selected_label(), "Manual");
    }

    #[test]
    fn picker_ignores_unrelated_keys() {
        let mut picker = Picker::new(vec!["Manual", "Advanced"]);
        assert!(!picker.handle_key(&key(KeyCode::Char('x'))));
        assert_eq!(picker.index(), 0);
    }
}
