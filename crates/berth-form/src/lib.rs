#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # berth-form
//!
//! Form state and validation for the berth connection screen.
//!
//! The crate is the screen's controller: a registry mapping each field to
//! its current value, its validation rule, and a visibility predicate over
//! the selected account type. The front-end pushes raw strings in with
//! [`FormController::set`], asks [`FormController::visible_fields`] what to
//! render, and calls [`FormController::submit`] to validate and collect the
//! final [`Record`].
//!
//! ## Example
//!
//! ```rust
//! use berth_form::{AccountType, FieldName, FormController};
//!
//! let mut form = FormController::new();
//! form.set(FieldName::Username, "user@example.com");
//! form.set(FieldName::Password, "hunter2");
//! form.set(FieldName::ServerAddress, "cal.example.com");
//! form.set(FieldName::ServerPath, "/calendars/user");
//! form.set(FieldName::Port, "8443");
//!
//! let record = form.submit().expect("form is clean");
//! assert_eq!(record.server_path, "/calendars/user");
//!
//! // Manual mode drops the server detail rows entirely.
//! form.set_account_type(AccountType::Manual);
//! assert!(!form.visible_fields().contains(&FieldName::Port));
//! ```

mod controller;
mod error;
mod field;
pub mod rules;

pub use controller::{FieldErrors, FormController, Record};
pub use error::FieldError;
pub use field::{AccountType, FieldName, UnknownAccountType};
