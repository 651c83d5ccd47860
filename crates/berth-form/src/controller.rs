//! The form controller: a field registry plus the submit flow.
//!
//! Each field is registered with its validation rule and a visibility
//! predicate over the selected account type. Visibility is re-derived from
//! the current mode on every query; nothing is cached. Validation runs at
//! submit time, over visible fields only.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FieldError;
use crate::field::{AccountType, FieldName};
use crate::rules;

/// How a field is validated when visible.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// No rule; the field cannot fail.
    None,
    /// Must be non-empty; the label names the field in the message.
    Required(&'static str),
    /// Required plus the `local@domain` shape.
    Username,
    /// The `[a-zA-Z0-9/]+` path shape.
    ServerPath,
    /// An integer in `0..=65535`.
    Port,
}

impl Rule {
    fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::None => Ok(()),
            Self::Required(field) => rules::required(field, value),
            Self::Username => rules::username(value),
            Self::ServerPath => rules::server_path(value),
            Self::Port => rules::port(value),
        }
    }
}

/// One entry in the field registry.
struct FieldDef {
    name: FieldName,
    rule: Rule,
    visible: fn(AccountType) -> bool,
}

fn always(_: AccountType) -> bool {
    true
}

fn server_details(account_type: AccountType) -> bool {
    account_type.requires_server_details()
}

/// The registry, in render order.
static REGISTRY: [FieldDef; 6] = [
    FieldDef {
        name: FieldName::AccountType,
        rule: Rule::None,
        visible: always,
    },
    FieldDef {
        name: FieldName::Username,
        rule: Rule::Username,
        visible: always,
    },
    FieldDef {
        name: FieldName::Password,
        rule: Rule::Required("Password"),
        visible: always,
    },
    FieldDef {
        name: FieldName::ServerAddress,
        rule: Rule::Required("Server Address"),
        visible: always,
    },
    FieldDef {
        name: FieldName::ServerPath,
        rule: Rule::ServerPath,
        visible: server_details,
    },
    FieldDef {
        name: FieldName::Port,
        rule: Rule::Port,
        visible: server_details,
    },
];

/// Failures from a validation pass, keyed by field.
pub type FieldErrors = BTreeMap<FieldName, FieldError>;

/// The assembled form values handed to the output collaborator on submit.
///
/// All six fields are present regardless of visibility; hidden fields keep
/// whatever was typed before they were hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub account_type: String,
    pub username: String,
    pub password: String,
    pub server_address: String,
    pub server_path: String,
    pub port: String,
}

/// Field values and derived error state for the connection form.
///
/// The controller is created empty (account type defaulted to
/// [`AccountType::Advanced`]), mutated field by field as the user types,
/// and consumed once per submit. A successful submit emits a snapshot; the
/// controller itself stays editable with its values intact.
#[derive(Debug)]
pub struct FormController {
    account_type: AccountType,
    values: BTreeMap<FieldName, String>,
    errors: FieldErrors,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Creates an empty controller with the default account type.
    #[must_use]
    pub fn new() -> Self {
        let values = FieldName::ALL
            .into_iter()
            .filter(|&name| name != FieldName::AccountType)
            .map(|name| (name, String::new()))
            .collect();
        Self {
            account_type: AccountType::default(),
            values,
            errors: FieldErrors::new(),
        }
    }

    /// Stores a new value for a field. Validation is deferred to submit;
    /// only the field's stale error is cleared so the screen stops showing
    /// it while the user edits.
    ///
    /// Setting the account type changes the visible-field set for
    /// subsequent rendering and validation. Names outside the closed set
    /// of modes leave the mode unchanged.
    pub fn set(&mut self, name: FieldName, value: &str) {
        if name == FieldName::AccountType {
            match value.parse() {
                Ok(mode) => self.account_type = mode,
                Err(err) => tracing::warn!(%err, "ignoring account type update"),
            }
        } else {
            self.values.insert(name, value.to_string());
        }
        self.errors.remove(&name);
    }

    /// Switches the connection mode directly.
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account_type = account_type;
        self.errors.remove(&FieldName::AccountType);
    }

    /// The currently selected connection mode.
    #[must_use]
    pub const fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// The raw value stored for a field. The account type reads back as
    /// its display name.
    #[must_use]
    pub fn get(&self, name: FieldName) -> &str {
        if name == FieldName::AccountType {
            self.account_type.name()
        } else {
            self.values.get(&name).map_or("", String::as_str)
        }
    }

    /// The ordered fields the screen should render under the current mode.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<FieldName> {
        REGISTRY
            .iter()
            .filter(|def| (def.visible)(self.account_type))
            .map(|def| def.name)
            .collect()
    }

    /// Whether a field is rendered and validated under the current mode.
    #[must_use]
    pub fn is_visible(&self, name: FieldName) -> bool {
        REGISTRY
            .iter()
            .any(|def| def.name == name && (def.visible)(self.account_type))
    }

    /// Runs every visible field's rule. An empty map means the form is
    /// clean. The result is also retained for [`Self::error`] queries.
    pub fn validate(&mut self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for def in &REGISTRY {
            if (def.visible)(self.account_type)
                && let Err(err) = def.rule.check(self.get(def.name))
            {
                errors.insert(def.name, err);
            }
        }
        self.errors = errors.clone();
        errors
    }

    /// The error recorded for a field by the last validation pass, if any.
    #[must_use]
    pub fn error(&self, name: FieldName) -> Option<&FieldError> {
        self.errors.get(&name)
    }

    /// Errors retained from the last validation pass.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validates and, if clean, emits the full record.
    ///
    /// On failure nothing is emitted; the per-field errors are returned and
    /// retained for display. A single synchronous attempt per call, and no
    /// state is reset on success.
    pub fn submit(&mut self) -> Result<Record, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "submit rejected by validation");
            return Err(errors);
        }
        let record = self.record();
        tracing::info!(
            account_type = %record.account_type,
            username = %record.username,
            server_address = %record.server_address,
            server_path = %record.server_path,
            port = %record.port,
            "form submitted"
        );
        Ok(record)
    }

    /// A snapshot of all six fields at this moment, visible or not.
    #[must_use]
    pub fn record(&self) -> Record {
        Record {
            account_type: self.account_type.name().to_string(),
            username: self.get(FieldName::Username).to_string(),
            password: self.get(FieldName::Password).to_string(),
            server_address: self.get(FieldName::ServerAddress).to_string(),
            server_path: self.get(FieldName::ServerPath).to_string(),
            port: self.get(FieldName::Port).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(controller: &mut FormController) {
        controller.set(FieldName::Username, "user@example.com");
        controller.set(FieldName::Password, "hunter2");
        controller.set(FieldName::ServerAddress, "cal.example.com");
        controller.set(FieldName::ServerPath, "/calendars/user1");
        controller.set(FieldName::Port, "8443");
    }

    #[test]
    fn advanced_mode_shows_all_six_fields() {
        let controller = FormController::new();
        assert_eq!(controller.visible_fields(), FieldName::ALL.to_vec());
    }

    #[test]
    fn manual_mode_hides_server_details() {
        let mut controller = FormController::new();
        controller.set_account_type(AccountType::Manual);
        let visible = controller.visible_fields();
        assert_eq!(
            visible,
            vec![
                FieldName::AccountType,
                FieldName::Username,
                FieldName::Password,
                FieldName::ServerAddress,
            ]
        );
        assert!(!controller.is_visible(FieldName::ServerPath));
        assert!(!controller.is_visible(FieldName::Port));
    }

    #[test]
    fn empty_form_fails_every_visible_rule() {
        let mut controller = FormController::new();
        let errors = controller.validate();
        assert_eq!(errors.len(), 5);
        assert!(errors[&FieldName::Username].is_missing());
        assert!(errors[&FieldName::Password].is_missing());
        assert!(errors[&FieldName::ServerAddress].is_missing());
        assert!(errors[&FieldName::ServerPath].is_format());
        assert!(errors[&FieldName::Port].is_range());
    }

    #[test]
    fn account_type_accepts_known_names_only() {
        let mut controller = FormController::new();
        controller.set(FieldName::AccountType, "Manual");
        assert_eq!(controller.account_type(), AccountType::Manual);
        controller.set(FieldName::AccountType, "Bogus");
        assert_eq!(controller.account_type(), AccountType::Manual);
    }

    #[test]
    fn editing_a_field_clears_its_stale_error() {
        let mut controller = FormController::new();
        controller.validate();
        assert!(controller.error(FieldName::Username).is_some());
        controller.set(FieldName::Username, "u");
        assert!(controller.error(FieldName::Username).is_none());
        // Other errors stay until the next validation pass.
        assert!(controller.error(FieldName::Password).is_some());
    }

    #[test]
    fn submit_emits_hidden_values_too() {
        let mut controller = FormController::new();
        filled(&mut controller);
        controller.set(FieldName::Port, "not a port");
        controller.set_account_type(AccountType::Manual);

        let record = controller.submit().expect("manual mode skips the port rule");
        assert_eq!(record.account_type, "Manual");
        assert_eq!(record.port, "not a port");
        assert_eq!(record.server_path, "/calendars/user1");
    }

    #[test]
    fn switching_back_retriggers_the_port_failure() {
        let mut controller = FormController::new();
        filled(&mut controller);
        controller.set(FieldName::Port, "70000");

        let errors = controller.submit().unwrap_err();
        assert!(errors[&FieldName::Port].is_range());

        controller.set_account_type(AccountType::Manual);
        assert!(controller.submit().is_ok());

        controller.set_account_type(AccountType::Advanced);
        let errors = controller.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[&FieldName::Port].is_range());
    }

    #[test]
    fn successful_submit_keeps_the_form_editable() {
        let mut controller = FormController::new();
        filled(&mut controller);

        let first = controller.submit().expect("form is clean");
        assert_eq!(controller.get(FieldName::Username), "user@example.com");
        assert!(controller.errors().is_empty());

        // No reset: a second submit sees the same values.
        let second = controller.submit().expect("still clean");
        assert_eq!(first, second);
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let mut controller = FormController::new();
        filled(&mut controller);
        let json = serde_json::to_value(controller.record()).expect("record serializes");
        assert_eq!(json["accountType"], "Advanced");
        assert_eq!(json["serverAddress"], "cal.example.com");
        assert_eq!(json["serverPath"], "/calendars/user1");
        assert_eq!(json["port"], "8443");
    }
}
