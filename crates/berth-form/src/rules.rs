//! Validation rules for the connection form.
//!
//! Usernames must look like `local@domain`, server paths are limited to
//! `[a-zA-Z0-9/]`, ports must parse into `0..=65535`. Presence checks fail
//! only on the empty string; whitespace counts as input and is left to the
//! shape rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("username pattern compiles"));

static SERVER_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9/]+$").expect("server path pattern compiles"));

/// Rejects the empty string.
pub fn required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Missing(field))
    } else {
        Ok(())
    }
}

/// Required, then the `local@domain` shape.
pub fn username(value: &str) -> Result<(), FieldError> {
    required("Username", value)?;
    if USERNAME_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::Format("invalid username"))
    }
}

/// Characters limited to `[a-zA-Z0-9/]`. The empty string fails the match,
/// so a visible-but-blank path reads as a format error.
pub fn server_path(value: &str) -> Result<(), FieldError> {
    if SERVER_PATH_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::Format("invalid server path"))
    }
}

/// An integer in `0..=65535`. Anything that does not parse, the empty
/// string included, is rejected by the same rule.
pub fn port(value: &str) -> Result<(), FieldError> {
    match value.trim().parse::<i64>() {
        Ok(n) if (0..=65535).contains(&n) => Ok(()),
        _ => Err(FieldError::Range("invalid port number")),
    }
}
