//! Runtime shape dispatch for untyped input.
//!
//! Class names often arrive as loosely typed data: a JSON fixture, a page
//! description, a test table. [`BemStructure::from_json`] inspects the shape
//! of such a value (string, array or plain object) and builds the matching
//! representation, reporting a wrong shape before any grammar check runs.

use serde_json::Value;

use crate::model::{BemObject, BemStructure, BemVector, Modifier, ModifierRequirement};
use crate::result::{BemError, BemResult, Validation};
use crate::validate::check_structure;

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), Value::to_string)
}

/// `null` and a missing entry both mean "absent"
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn string_part(subject: &'static str, value: Option<&Value>) -> BemResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(BemError::NotAString {
            subject,
            found: render(other),
        }),
    }
}

fn optional_string_part(subject: &'static str, value: Option<&Value>) -> BemResult<Option<String>> {
    present(value)
        .map(|v| string_part(subject, Some(v)))
        .transpose()
}

fn optional_modifier_part(value: Option<&Value>) -> BemResult<Option<Modifier>> {
    present(value).map(Modifier::from_json).transpose()
}

fn joined(items: &[Value]) -> String {
    items
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Modifier {
    /// Read a modifier from `[name]`, `[name, value]` or `[name, null]`
    pub fn from_json(value: &Value) -> BemResult<Self> {
        let Value::Array(items) = value else {
            return Err(BemError::NotAnArray {
                subject: "BEM modifier",
                found: value.to_string(),
            });
        };
        if items.len() > 2 {
            return Err(BemError::TooManyParts {
                subject: "BEM modifier",
                limit: "a name and one value",
                count: items.len(),
                found: joined(items),
            });
        }
        let name = string_part("BEM modifier's name", items.first())?;
        let value = optional_string_part("BEM modifier's optional value", items.get(1))?;
        Ok(Self::new(name, value))
    }
}

impl ModifierRequirement {
    /// Read a requirement from `[name, value?, negate?]`; `negate` defaults to `false`
    pub fn from_json(value: &Value) -> BemResult<Self> {
        let Value::Array(items) = value else {
            return Err(BemError::NotAnArray {
                subject: "BEM modifier requirement",
                found: value.to_string(),
            });
        };
        if items.len() > 3 {
            return Err(BemError::TooManyParts {
                subject: "BEM modifier requirement",
                limit: "a name, one value and a negation flag",
                count: items.len(),
                found: joined(items),
            });
        }
        let name = string_part("BEM modifier's name", items.first())?;
        let value = optional_string_part("BEM modifier's optional value", items.get(1))?;
        let negate = match present(items.get(2)) {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(BemError::NotABoolean {
                    subject: "BEM modifier requirement's negation flag",
                    found: other.to_string(),
                })
            }
        };
        Ok(Self::from_modifier(Modifier::new(name, value)).with_negate(negate))
    }
}

impl BemObject {
    /// Read an object from `{ "blk": ..., "elt"?: ..., "mod"?: [...] }`; other keys are ignored
    pub fn from_json(value: &Value) -> BemResult<Self> {
        let Value::Object(map) = value else {
            return Err(BemError::NotAPlainObject {
                subject: "BEM object",
                found: value.to_string(),
            });
        };
        Ok(Self {
            blk: string_part("BEM block", map.get("blk"))?,
            elt: optional_string_part("BEM element", map.get("elt"))?,
            modifier: optional_modifier_part(map.get("mod"))?,
        })
    }
}

impl BemVector {
    /// Read a vector from `[blk, elt?, mod?]`
    pub fn from_json(value: &Value) -> BemResult<Self> {
        let Value::Array(items) = value else {
            return Err(BemError::NotAnArray {
                subject: "BEM vector",
                found: value.to_string(),
            });
        };
        if items.len() > 3 {
            return Err(BemError::TooManyParts {
                subject: "BEM vector",
                limit: "a block, one element and one modifier",
                count: items.len(),
                found: joined(items),
            });
        }
        Ok(Self(
            string_part("BEM block", items.first())?,
            optional_string_part("BEM element", items.get(1))?,
            optional_modifier_part(items.get(2))?,
        ))
    }
}

impl BemStructure {
    /// Pick the representation from the shape of `value`
    ///
    /// # Example
    /// ```
    /// use bemkit::{BemStructure, BemObject};
    /// use serde_json::json;
    ///
    /// let s = BemStructure::from_json(&json!({ "blk": "foo" })).unwrap();
    /// assert_eq!(s, BemStructure::Object(BemObject::new("foo")));
    /// assert!(BemStructure::from_json(&json!(42)).is_err());
    /// ```
    pub fn from_json(value: &Value) -> BemResult<Self> {
        match value {
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Array(_) => BemVector::from_json(value).map(Self::Vector),
            Value::Object(_) => BemObject::from_json(value).map(Self::Object),
            other => Err(BemError::UnrecognizedStructure {
                found: other.to_string(),
            }),
        }
    }
}

/// Validate an untyped value: shape first, then the BEM rules for that shape
#[must_use]
pub fn validate_bem_json(value: &Value) -> Validation<&Value> {
    let check = BemStructure::from_json(value).and_then(|structure| check_structure(&structure));
    Validation::from_check(value, check)
}
