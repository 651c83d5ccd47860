//! The connection form screen.
//!
//! One vertical stack of rows: the account-type picker, the credential
//! inputs, the server rows (advanced mode only), and a submit button.
//! Every edit is pushed straight into the [`FormController`]; validation
//! errors come back out of it and render inline under their rows. A clean
//! submit opens a blocking alert with the serialized record.

use std::collections::BTreeMap;

use berth_form::{AccountType, FieldName, FormController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Stylize;

use crate::event::{Flow, Msg, Screen};
use crate::widgets::{Picker, TextInput};

/// Width of the label column ("Server Address" is the widest label).
const LABEL_WIDTH: usize = 14;

/// A focus stop: one of the visible rows or the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// A form row.
    Field(FieldName),
    /// The submit button under the rows.
    Submit,
}

/// The form screen model.
pub struct FormScreen {
    controller: FormController,
    picker: Picker,
    inputs: BTreeMap<FieldName, TextInput>,
    focus: usize,
    alert: Option<String>,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    /// Creates the screen with an empty form.
    #[must_use]
    pub fn new() -> Self {
        let controller = FormController::new();
        let mut inputs = BTreeMap::new();
        inputs.insert(
            FieldName::Username,
            TextInput::new().placeholder("name@example.com"),
        );
        inputs.insert(
            FieldName::Password,
            TextInput::new().password(true).placeholder("Required"),
        );
        inputs.insert(
            FieldName::ServerAddress,
            TextInput::new().placeholder("example.com"),
        );
        inputs.insert(
            FieldName::ServerPath,
            TextInput::new().placeholder("/calendars/user/"),
        );
        inputs.insert(FieldName::Port, TextInput::new().char_limit(5));

        let options = AccountType::ALL.iter().map(|mode| mode.name()).collect();
        let selected = AccountType::ALL
            .iter()
            .position(|&mode| mode == controller.account_type())
            .unwrap_or(0);

        Self {
            controller,
            picker: Picker::new(options).with_selected(selected),
            inputs,
            focus: 0,
            alert: None,
        }
    }

    /// The form state behind the screen.
    #[must_use]
    pub const fn controller(&self) -> &FormController {
        &self.controller
    }

    /// The alert body, while the submit alert is open.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// The focus stop the next key press lands on.
    #[must_use]
    pub fn focused_stop(&self) -> Stop {
        self.stops()
            .get(self.focus)
            .copied()
            .unwrap_or(Stop::Submit)
    }

    fn stops(&self) -> Vec<Stop> {
        let mut stops: Vec<Stop> = self
            .controller
            .visible_fields()
            .into_iter()
            .map(Stop::Field)
            .collect();
        stops.push(Stop::Submit);
        stops
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1).min(self.stops().len() - 1);
    }

    fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.stops().len() - 1);
    }

    fn edit(&mut self, key: &KeyEvent) {
        match self.focused_stop() {
            Stop::Field(FieldName::AccountType) => {
                if self.picker.handle_key(key) {
                    let mode = AccountType::ALL[self.picker.index()];
                    self.controller.set_account_type(mode);
                    self.clamp_focus();
                }
            }
            Stop::Field(name) => {
                if let Some(input) = self.inputs.get_mut(&name)
                    && input.handle_key(key)
                {
                    let value = input.value();
                    self.controller.set(name, &value);
                }
            }
            Stop::Submit => {}
        }
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            Ok(record) => {
                let body = serde_json::to_string_pretty(&record)
                    .unwrap_or_else(|_| format!("{record:?}"));
                self.alert = Some(body);
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "keeping the form open for corrections");
            }
        }
    }

    fn update_alert(&mut self, key: &KeyEvent) -> Flow {
        if is_quit_chord(key) {
            return Flow::Quit;
        }
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.alert = None;
        }
        Flow::Continue
    }

    fn form_view(&self) -> String {
        let stops = self.stops();
        let focused = stops.get(self.focus);
        let mut out = String::new();

        out.push_str(&format!("  {}\n\n", "Connect Account".bold()));

        for name in self.controller.visible_fields() {
            let row_focused = focused == Some(&Stop::Field(name));
            let widget = if name == FieldName::AccountType {
                self.picker.view(row_focused)
            } else {
                self.inputs[&name].view(row_focused)
            };
            out.push_str(&format!(
                "  {label:>width$}: {widget}\n",
                label = name.label(),
                width = LABEL_WIDTH
            ));
            if let Some(err) = self.controller.error(name) {
                out.push_str(&format!(
                    "  {pad:>width$}  {msg}\n",
                    pad = "",
                    width = LABEL_WIDTH,
                    msg = err.to_string().red()
                ));
            }
        }

        let button = if focused == Some(&Stop::Submit) {
            "[ Submit ]".reverse().to_string()
        } else {
            "[ Submit ]".dark_grey().to_string()
        };
        out.push_str(&format!(
            "\n  {pad:>width$}  {button}\n",
            pad = "",
            width = LABEL_WIDTH
        ));
        out.push_str(&format!(
            "\n  {}\n",
            "tab/↓ next · shift+tab/↑ back · enter submit · esc quit".dark_grey()
        ));
        out
    }

    fn alert_view(body: &str) -> String {
        let title = "Form Data";
        let lines: Vec<&str> = body.lines().collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(title.len());

        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!(
            "  ┌─ {} {}┐\n",
            title.bold(),
            "─".repeat((width + 2).saturating_sub(title.len() + 3))
        ));
        for line in lines {
            out.push_str(&format!("  │ {line:<width$} │\n"));
        }
        out.push_str(&format!("  └{}┘\n", "─".repeat(width + 2)));
        out.push_str(&format!("\n  {}\n", "press enter to continue".dark_grey()));
        out
    }
}

fn is_quit_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl Screen for FormScreen {
    fn update(&mut self, msg: Msg) -> Flow {
        let Msg::Key(key) = msg else {
            return Flow::Continue;
        };

        if self.alert.is_some() {
            return self.update_alert(&key);
        }
        if is_quit_chord(&key) || key.code == KeyCode::Esc {
            return Flow::Quit;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => {
                if self.focused_stop() == Stop::Submit {
                    self.submit();
                } else {
                    self.focus_next();
                }
            }
            _ => self.edit(&key),
        }
        Flow::Continue
    }

    fn view(&self) -> String {
        self.alert
            .as_ref()
            .map_or_else(|| self.form_view(), |body| Self::alert_view(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_stops_follow_visibility() {
        let mut screen = FormScreen::new();
        assert_eq!(screen.stops().len(), 7);
        screen.controller.set_account_type(AccountType::Manual);
        let stops = screen.stops();
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], Stop::Field(FieldName::AccountType));
        assert_eq!(stops[4], Stop::Submit);
    }

    #[test]
    fn focus_clamps_at_both_ends() {
        let mut screen = FormScreen::new();
        screen.focus_prev();
        assert_eq!(screen.focused_stop(), Stop::Field(FieldName::AccountType));
        for _ in 0..20 {
            screen.focus_next();
        }
        assert_eq!(screen.focused_stop(), Stop::Submit);
    }

    #[test]
    fn view_lists_every_visible_label() {
        let screen = FormScreen::new();
        let view = screen.view();
        for name in FieldName::ALL {
            assert!(view.contains(name.label()), "missing {}", name.label());
        }
        assert!(view.contains("Submit"));
    }
}
