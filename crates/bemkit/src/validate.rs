//! Structural validators.
//!
//! Each validator labels the name/value grammar with the part it checks and
//! stops at the first failure. Parts are always checked in the same order so
//! that a given input always reports the same error: block, element, then
//! modifier for objects and vectors; modifier, element, then block for
//! strings, which are split right to left.

use crate::grammar::{check_name, check_value};
use crate::model::{
    BemObject, BemStructure, BemVector, Modifier, ModifierRequirement, ELEMENT_DELIMITER,
    MODIFIER_DELIMITER, MODIFIER_VALUE_DELIMITER,
};
use crate::result::{BemError, BemResult, Validation};

const BLOCK: &str = "BEM block";
const ELEMENT: &str = "BEM element";
const MODIFIER_NAME: &str = "BEM modifier's name";
const MODIFIER_VALUE: &str = "BEM modifier's value";
const MODIFIER_OPTIONAL_VALUE: &str = "BEM modifier's optional value";

/// Borrowed pieces of a BEM string that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BemStringParts<'a> {
    pub blk: &'a str,
    pub elt: Option<&'a str>,
    pub modifier: Option<(&'a str, Option<&'a str>)>,
}

impl BemStringParts<'_> {
    pub(crate) fn to_object(self) -> BemObject {
        BemObject {
            blk: self.blk.to_string(),
            elt: self.elt.map(str::to_string),
            modifier: self
                .modifier
                .map(|(name, value)| Modifier::new(name, value.map(str::to_string))),
        }
    }
}

/// Split and check a BEM string: modifier first, then element, then block
pub(crate) fn parse_bem_string(s: &str) -> BemResult<BemStringParts<'_>> {
    let mut segments = s.split(MODIFIER_DELIMITER);
    let head = segments.next().unwrap_or_default();
    let modifiers: Vec<&str> = segments.collect();
    if modifiers.len() > 1 {
        return Err(BemError::TooManyParts {
            subject: "BEM string",
            limit: "one modifier",
            count: modifiers.len(),
            found: modifiers.join(", "),
        });
    }

    let modifier = match modifiers.first() {
        None => None,
        Some(segment) => {
            let mut tokens = segment.split(MODIFIER_VALUE_DELIMITER);
            let name = tokens.next().unwrap_or_default();
            let values: Vec<&str> = tokens.collect();
            if values.len() > 1 {
                return Err(BemError::TooManyParts {
                    subject: "BEM modifier",
                    limit: "one value",
                    count: values.len(),
                    found: values.join(", "),
                });
            }
            check_name(MODIFIER_NAME, name)?;
            let value = values.first().copied();
            if let Some(value) = value {
                check_value(MODIFIER_OPTIONAL_VALUE, value)?;
            }
            Some((name, value))
        }
    };

    let mut parts = head.split(ELEMENT_DELIMITER);
    let blk = parts.next().unwrap_or_default();
    let elements: Vec<&str> = parts.collect();
    if elements.len() > 1 {
        return Err(BemError::TooManyParts {
            subject: "BEM string",
            limit: "one element",
            count: elements.len(),
            found: elements.join(", "),
        });
    }
    let elt = elements.first().copied();
    if let Some(elt) = elt {
        check_name(ELEMENT, elt)?;
    }

    check_name(BLOCK, blk)?;

    Ok(BemStringParts { blk, elt, modifier })
}

pub(crate) fn check_modifier(modifier: &Modifier) -> BemResult<()> {
    check_name(MODIFIER_NAME, modifier.name())?;
    if let Some(value) = modifier.value() {
        check_value(MODIFIER_OPTIONAL_VALUE, value)?;
    }
    Ok(())
}

fn check_parts(blk: &str, elt: Option<&str>, modifier: Option<&Modifier>) -> BemResult<()> {
    check_name(BLOCK, blk)?;
    if let Some(elt) = elt {
        check_name(ELEMENT, elt)?;
    }
    if let Some(modifier) = modifier {
        check_modifier(modifier)?;
    }
    Ok(())
}

pub(crate) fn check_structure(structure: &BemStructure) -> BemResult<()> {
    match structure {
        BemStructure::String(s) => parse_bem_string(s).map(|_| ()),
        BemStructure::Object(o) => check_parts(&o.blk, o.elt.as_deref(), o.modifier.as_ref()),
        BemStructure::Vector(v) => check_parts(v.blk(), v.elt(), v.modifier()),
    }
}

/// Validate a block name
#[must_use]
pub fn validate_bem_block(blk: &str) -> Validation<&str> {
    Validation::from_check(blk, check_name(BLOCK, blk))
}

/// Validate an element name
#[must_use]
pub fn validate_bem_element(elt: &str) -> Validation<&str> {
    Validation::from_check(elt, check_name(ELEMENT, elt))
}

/// Validate a modifier name
#[must_use]
pub fn validate_bem_modifier_name(name: &str) -> Validation<&str> {
    Validation::from_check(name, check_name(MODIFIER_NAME, name))
}

/// Validate a modifier value
#[must_use]
pub fn validate_bem_modifier_value(value: &str) -> Validation<&str> {
    Validation::from_check(value, check_value(MODIFIER_VALUE, value))
}

/// Validate a modifier: its name, then its value if it has one
#[must_use]
pub fn validate_bem_modifier(modifier: &Modifier) -> Validation<&Modifier> {
    Validation::from_check(modifier, check_modifier(modifier))
}

/// Validate a modifier requirement; the negation flag needs no checking
#[must_use]
pub fn validate_bem_modifier_requirement(
    requirement: &ModifierRequirement,
) -> Validation<&ModifierRequirement> {
    Validation::from_check(requirement, check_modifier(requirement.modifier()))
}

/// Validate a BEM object: block, then element, then modifier
#[must_use]
pub fn validate_bem_object(object: &BemObject) -> Validation<&BemObject> {
    let check = check_parts(&object.blk, object.elt.as_deref(), object.modifier.as_ref());
    Validation::from_check(object, check)
}

/// Validate a BEM vector positionally, with the same rules as objects
#[must_use]
pub fn validate_bem_vector(vector: &BemVector) -> Validation<&BemVector> {
    let check = check_parts(vector.blk(), vector.elt(), vector.modifier());
    Validation::from_check(vector, check)
}

/// Validate a BEM string
///
/// # Example
/// ```
/// use bemkit::validate_bem_string;
///
/// assert!(validate_bem_string("foo__bar--fiz_buz").is_valid());
///
/// let err = validate_bem_string("blk--mod1--mod2_2").into_result().unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "BEM string can have only one modifier, 2 of them found -- mod1, mod2_2"
/// );
/// ```
#[must_use]
pub fn validate_bem_string(s: &str) -> Validation<&str> {
    Validation::from_check(s, parse_bem_string(s).map(|_| ()))
}

/// Validate any of the three representations
#[must_use]
pub fn validate_bem_structure(structure: &BemStructure) -> Validation<&BemStructure> {
    Validation::from_check(structure, check_structure(structure))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn message<T>(v: Validation<T>) -> String {
        v.error.unwrap().to_string()
    }

    mod part_tests {
        use super::*;

        #[test]
        fn test_labels() {
            assert!(message(validate_bem_block("1")).starts_with("BEM block "));
            assert!(message(validate_bem_element("-")).starts_with("BEM element "));
            assert!(message(validate_bem_modifier_name("")).starts_with("BEM modifier's name "));
            assert!(message(validate_bem_modifier_value("a--b")).starts_with("BEM modifier's value "));
        }

        #[test]
        fn test_modifier_value_may_start_with_digit() {
            assert!(validate_bem_modifier_value("1").is_valid());
            assert!(!validate_bem_modifier_name("1").is_valid());
        }

        #[test]
        fn test_modifier_reports_name_before_value() {
            let m = Modifier::full("1bad", "bad--value");
            assert!(message(validate_bem_modifier(&m)).starts_with("BEM modifier's name "));
        }

        #[test]
        fn test_modifier_optional_value_message() {
            let m = Modifier::full("size", "x--l");
            let msg = message(validate_bem_modifier(&m));
            assert!(msg.starts_with("BEM modifier's optional value "));
            assert!(msg.ends_with("-- x--l"));
        }

        #[test]
        fn test_modifier_echoes_input() {
            let m = Modifier::simple("on");
            let v = validate_bem_modifier(&m);
            assert!(v.is_valid());
            assert!(std::ptr::eq(v.value, &m));
        }

        #[test]
        fn test_requirement() {
            let ok = ModifierRequirement::new("on").negated();
            assert!(validate_bem_modifier_requirement(&ok).is_valid());
            let bad = ModifierRequirement::new("on").with_value("-");
            assert!(!validate_bem_modifier_requirement(&bad).is_valid());
        }
    }

    mod object_tests {
        use super::*;

        #[test]
        fn test_valid_shapes() {
            let objects = [
                BemObject::new("foo"),
                BemObject::new("foo").with_element("bar"),
                BemObject::new("foo").with_modifier(Modifier::simple("on")),
                BemObject::new("foo")
                    .with_element("bar")
                    .with_modifier(Modifier::full("fiz", "buz")),
            ];
            for object in &objects {
                assert!(validate_bem_object(object).is_valid(), "{object:?}");
            }
        }

        #[test]
        fn test_block_checked_first() {
            let object = BemObject::new("")
                .with_element("")
                .with_modifier(Modifier::simple(""));
            assert!(message(validate_bem_object(&object)).starts_with("BEM block "));
        }

        #[test]
        fn test_element_checked_before_modifier() {
            let object = BemObject::new("foo")
                .with_element("b--r")
                .with_modifier(Modifier::simple(""));
            assert!(message(validate_bem_object(&object)).starts_with("BEM element "));
        }

        #[test]
        fn test_vector_uses_same_rules() {
            let vector = BemVector("foo".into(), Some("bar".into()), Some(Modifier::simple("-x")));
            assert!(message(validate_bem_vector(&vector)).starts_with("BEM modifier's name "));
            let vector = BemVector("foo".into(), None, None);
            assert!(validate_bem_vector(&vector).is_valid());
        }
    }

    mod string_tests {
        use super::*;

        #[test]
        fn test_valid_strings() {
            for s in [
                "foo",
                "foo__bar",
                "foo--on",
                "foo--size_1",
                "foo__bar--fiz_buz",
                "foo-x__bar-y--fiz-z_1-2",
            ] {
                assert!(validate_bem_string(s).is_valid(), "{s}");
            }
        }

        #[test]
        fn test_too_many_modifiers() {
            assert_eq!(
                message(validate_bem_string("blk--mod1--mod2_2")),
                "BEM string can have only one modifier, 2 of them found -- mod1, mod2_2"
            );
        }

        #[test]
        fn test_too_many_modifier_values() {
            assert_eq!(
                message(validate_bem_string("blk--size_1_2")),
                "BEM modifier can have only one value, 2 of them found -- 1, 2"
            );
        }

        #[test]
        fn test_too_many_elements() {
            assert_eq!(
                message(validate_bem_string("blk__a__b")),
                "BEM string can have only one element, 2 of them found -- a, b"
            );
        }

        #[test]
        fn test_modifier_checked_before_element_and_block() {
            let msg = message(validate_bem_string("1__2--3"));
            assert!(msg.starts_with("BEM modifier's name "), "{msg}");
            let msg = message(validate_bem_string("1__2--on"));
            assert!(msg.starts_with("BEM element "), "{msg}");
            let msg = message(validate_bem_string("1__two--on"));
            assert!(msg.starts_with("BEM block "), "{msg}");
        }

        #[test]
        fn test_empty_modifier_value_rejected() {
            let msg = message(validate_bem_string("foo--size_"));
            assert!(msg.starts_with("BEM modifier's optional value "), "{msg}");
        }

        #[test]
        fn test_dangling_delimiters() {
            assert!(!validate_bem_string("foo--").is_valid());
            assert!(!validate_bem_string("foo__").is_valid());
            assert!(!validate_bem_string("__bar").is_valid());
            assert!(!validate_bem_string("foo___bar").is_valid());
        }

        #[test]
        fn test_blank_fails_at_block() {
            for s in ["", "   "] {
                let msg = message(validate_bem_string(s));
                assert!(msg.starts_with("BEM block "), "{msg}");
            }
        }

        #[test]
        fn test_parse_parts() {
            let parts = parse_bem_string("foo__bar--fiz_buz").unwrap();
            assert_eq!(parts.blk, "foo");
            assert_eq!(parts.elt, Some("bar"));
            assert_eq!(parts.modifier, Some(("fiz", Some("buz"))));
        }
    }

    mod structure_tests {
        use super::*;

        #[test]
        fn test_dispatches_on_representation() {
            assert!(validate_bem_structure(&BemStructure::from("foo__bar")).is_valid());
            assert!(!validate_bem_structure(&BemStructure::from("foo__bar__baz")).is_valid());
            assert!(validate_bem_structure(&BemObject::new("foo").into()).is_valid());
            assert!(!validate_bem_structure(&BemObject::new("f--o").into()).is_valid());
            let vector = BemVector("foo".into(), Some("x".into()), None);
            assert!(validate_bem_structure(&vector.into()).is_valid());
        }
    }
}
