//! Field-scoped validation errors.
//!
//! Every failure here is a user-correctable input defect: it is surfaced
//! inline next to the offending field and never propagates beyond the
//! controller. There is no fatal variant and no transient/permanent split;
//! the user corrects the value and submits again.

use thiserror::Error;

/// A validation failure for a single field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was left empty.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The value does not match the field's expected shape.
    #[error("{0}")]
    Format(&'static str),

    /// The value is not a number in the field's allowed range.
    #[error("{0}")]
    Range(&'static str),
}

impl FieldError {
    /// Returns true if the field was left empty.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// Returns true if the value failed a shape rule.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns true if the value failed the numeric range rule.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}
