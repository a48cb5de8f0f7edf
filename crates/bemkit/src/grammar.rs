//! Name/value grammar shared by every BEM part.
//!
//! Block, element and modifier name are all `Name`s: a letter, then letters,
//! digits or single dashes, ending in a letter or digit. Modifier values are
//! `Value`s, which follow the same shape but may also start with a digit.
//! Neither may contain `--` because that is the modifier delimiter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::{BemError, BemResult, Validation};

/// Grammar of block, element and modifier names
pub const NAME_PATTERN: &str = "^[A-Za-z](?:[A-Za-z0-9-]*[A-Za-z0-9])?$";

/// Grammar of modifier values
pub const VALUE_PATTERN: &str = "^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$";

/// Dash pair that separates the modifier and can never appear inside a part
pub(crate) const DOUBLE_DASH: &str = "--";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

static VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(VALUE_PATTERN).expect("VALUE_PATTERN is a valid regex"));

/// Whether `s` is a valid BEM name
#[must_use]
pub fn is_bem_name(s: &str) -> bool {
    NAME_RE.is_match(s) && !s.contains(DOUBLE_DASH)
}

/// Whether `s` is a valid BEM modifier value
#[must_use]
pub fn is_bem_value(s: &str) -> bool {
    VALUE_RE.is_match(s) && !s.contains(DOUBLE_DASH)
}

/// Check `name` against the name grammar, labelling a failure with `subject`
pub(crate) fn check_name(subject: &'static str, name: &str) -> BemResult<()> {
    if is_bem_name(name) {
        Ok(())
    } else {
        Err(BemError::ConstraintViolation {
            subject,
            pattern: NAME_PATTERN,
            value: name.to_string(),
        })
    }
}

/// Check `value` against the value grammar, labelling a failure with `subject`
pub(crate) fn check_value(subject: &'static str, value: &str) -> BemResult<()> {
    if is_bem_value(value) {
        Ok(())
    } else {
        Err(BemError::ConstraintViolation {
            subject,
            pattern: VALUE_PATTERN,
            value: value.to_string(),
        })
    }
}

/// Validate a string against the BEM name grammar
///
/// # Example
/// ```
/// use bemkit::validate_bem_name;
///
/// assert!(validate_bem_name("name-with-dashes").is_valid());
/// assert!(!validate_bem_name("some--thing").is_valid());
/// ```
#[must_use]
pub fn validate_bem_name(name: &str) -> Validation<&str> {
    Validation::from_check(name, check_name("BEM name", name))
}

/// Validate a string against the BEM value grammar
#[must_use]
pub fn validate_bem_value(value: &str) -> Validation<&str> {
    Validation::from_check(value, check_value("BEM value", value))
}
