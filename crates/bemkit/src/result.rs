//! Result and error types for Bemkit.
//!
//! Every failure in the crate is a validation failure. The variants only
//! differ in the structural rule that was broken, and each carries the
//! label of the part being checked plus the rejected input rendered as text.

use thiserror::Error;

/// Result type for Bemkit operations
pub type BemResult<T> = Result<T, BemError>;

/// Errors that can occur while validating, converting or mutating BEM names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BemError {
    /// A part that must be a string was something else
    #[error("{subject} must be a string -- {found}")]
    NotAString {
        /// Part being checked
        subject: &'static str,
        /// Rejected input
        found: String,
    },

    /// A part that must be an array was something else
    #[error("{subject} must be an array -- {found}")]
    NotAnArray {
        /// Part being checked
        subject: &'static str,
        /// Rejected input
        found: String,
    },

    /// A part that must be a plain key/value record was something else
    #[error("{subject} must be a plain object -- {found}")]
    NotAPlainObject {
        /// Part being checked
        subject: &'static str,
        /// Rejected input
        found: String,
    },

    /// A flag that must be a boolean was something else
    #[error("{subject} must be a boolean -- {found}")]
    NotABoolean {
        /// Part being checked
        subject: &'static str,
        /// Rejected input
        found: String,
    },

    /// Shape is right but the text breaks the name/value grammar
    #[error("{subject} must conform constraints {pattern} without double dashes -- {value}")]
    ConstraintViolation {
        /// Part being checked
        subject: &'static str,
        /// Grammar the part must match
        pattern: &'static str,
        /// Rejected input
        value: String,
    },

    /// More delimited segments or positions than the structure allows
    #[error("{subject} can have only {limit}, {count} of them found -- {found}")]
    TooManyParts {
        /// Structure being checked
        subject: &'static str,
        /// What the structure is limited to, e.g. "one modifier"
        limit: &'static str,
        /// Number of parts found
        count: usize,
        /// The offending parts, comma separated
        found: String,
    },

    /// Value is none of string, array or plain object
    #[error("value is not a recognized BEM structure (string, object or vector) -- {found}")]
    UnrecognizedStructure {
        /// Rejected input
        found: String,
    },

    /// A checked setter was called on a frozen `BemBase`
    #[error("cannot set BEM {part}: instance is frozen")]
    FrozenInstanceMutation {
        /// Part the caller tried to set
        part: &'static str,
    },
}

impl BemError {
    /// Label of the part or structure the error is about
    #[must_use]
    pub fn subject(&self) -> &'static str {
        match self {
            Self::NotAString { subject, .. }
            | Self::NotAnArray { subject, .. }
            | Self::NotAPlainObject { subject, .. }
            | Self::NotABoolean { subject, .. }
            | Self::ConstraintViolation { subject, .. }
            | Self::TooManyParts { subject, .. } => subject,
            Self::UnrecognizedStructure { .. } => "BEM structure",
            Self::FrozenInstanceMutation { .. } => "BEM base",
        }
    }
}

/// Outcome of a validator.
///
/// The checked value is always echoed back, even on failure, so callers can
/// report what was rejected. `error` is `Some` if and only if validation failed.
/// Validators never return `Err`; converting into a [`BemResult`] is the
/// caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<T> {
    /// The value that was validated
    pub value: T,
    /// Why validation failed, if it did
    pub error: Option<BemError>,
}

impl<T> Validation<T> {
    /// A passing validation
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A failing validation
    #[must_use]
    pub const fn fail(value: T, error: BemError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    /// Build from a check that produced `Ok(())` or the first error found
    #[must_use]
    pub fn from_check(value: T, check: BemResult<()>) -> Self {
        match check {
            Ok(()) => Self::ok(value),
            Err(error) => Self::fail(value, error),
        }
    }

    /// Whether the value passed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The failure, if any
    #[must_use]
    pub const fn error(&self) -> Option<&BemError> {
        self.error.as_ref()
    }

    /// Map the echoed value, keeping the error
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
        Validation {
            value: f(self.value),
            error: self.error,
        }
    }

    /// Turn the outcome into a `Result`, dropping the echoed value on failure
    pub fn into_result(self) -> BemResult<T> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }
}

impl<T> From<Validation<T>> for BemResult<T> {
    fn from(validation: Validation<T>) -> Self {
        validation.into_result()
    }
}
