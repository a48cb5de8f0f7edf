//! Converters between the three BEM representations.
//!
//! Each converter validates its input and returns the failure as an `Err`.
//! Input that is already in the requested representation is moved straight
//! through, so nothing is reallocated.

use crate::model::{format_bem_string, BemObject, BemStructure, BemVector};
use crate::result::{BemError, BemResult};
use crate::validate::{check_structure, parse_bem_string, validate_bem_object, validate_bem_vector};

fn rejected(kind: &'static str, error: BemError) -> BemError {
    tracing::debug!(kind, %error, "rejected BEM structure");
    error
}

/// Convert any representation into a [`BemObject`]
///
/// # Example
/// ```
/// use bemkit::{to_bem_object, BemObject, Modifier};
///
/// let object = to_bem_object("foo__bar--fiz_buz").unwrap();
/// assert_eq!(
///     object,
///     BemObject::new("foo").with_element("bar").with_modifier(Modifier::full("fiz", "buz"))
/// );
/// ```
pub fn to_bem_object(structure: impl Into<BemStructure>) -> BemResult<BemObject> {
    match structure.into() {
        BemStructure::String(s) => parse_bem_string(&s)
            .map(|parts| parts.to_object())
            .map_err(|e| rejected("string", e)),
        BemStructure::Object(object) => {
            validate_bem_object(&object)
                .into_result()
                .map_err(|e| rejected("object", e))?;
            Ok(object)
        }
        BemStructure::Vector(vector) => {
            validate_bem_vector(&vector)
                .into_result()
                .map_err(|e| rejected("vector", e))?;
            Ok(vector.into())
        }
    }
}

/// Convert any representation into its canonical BEM string
///
/// # Example
/// ```
/// use bemkit::{to_bem_string, BemObject, Modifier};
///
/// let object = BemObject::new("foo").with_element("bar").with_modifier(Modifier::full("fiz", "buz"));
/// assert_eq!(to_bem_string(object).unwrap(), "foo__bar--fiz_buz");
/// ```
pub fn to_bem_string(structure: impl Into<BemStructure>) -> BemResult<String> {
    let structure = structure.into();
    check_structure(&structure).map_err(|e| rejected(structure.kind(), e))?;
    Ok(match structure {
        BemStructure::String(s) => s,
        BemStructure::Object(o) => format_bem_string(&o.blk, o.elt.as_deref(), o.modifier.as_ref()),
        BemStructure::Vector(v) => format_bem_string(v.blk(), v.elt(), v.modifier()),
    })
}

/// Convert any representation into a [`BemVector`]
pub fn to_bem_vector(structure: impl Into<BemStructure>) -> BemResult<BemVector> {
    match structure.into() {
        BemStructure::Vector(vector) => {
            validate_bem_vector(&vector)
                .into_result()
                .map_err(|e| rejected("vector", e))?;
            Ok(vector)
        }
        other => to_bem_object(other).map(BemVector::from),
    }
}
