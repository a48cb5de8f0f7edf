//! BEM data model: modifiers and the three interchangeable representations.
//!
//! ```text
//! BEM string   foo__bar--fiz_buz
//! BEM object   { blk: "foo", elt: "bar", mod: ["fiz", "buz"] }
//! BEM vector   ["foo", "bar", ["fiz", "buz"]]
//! ```
//!
//! Types here are plain data. Nothing is validated on construction; the
//! validators and converters decide what is well formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::BemBase;
use crate::result::BemError;

/// Separates block from element
pub const ELEMENT_DELIMITER: &str = "__";

/// Separates block and element from the modifier
pub const MODIFIER_DELIMITER: &str = "--";

/// Separates modifier name from modifier value
pub const MODIFIER_VALUE_DELIMITER: &str = "_";

/// A modifier name with an optional value
///
/// Serializes as `[name]` or `[name, value]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Option<String>>", try_from = "Vec<Option<String>>")]
pub struct Modifier {
    name: String,
    value: Option<String>,
}

impl Modifier {
    /// Create a modifier from its parts
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Create a modifier without a value
    #[must_use]
    pub fn simple(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Create a modifier with a value
    #[must_use]
    pub fn full(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Some(value.into()))
    }

    /// Modifier name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Modifier value, if any
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the modifier has no value
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.value.is_none()
    }

    /// Split into `(name, value)`
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.value)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{MODIFIER_VALUE_DELIMITER}{value}")?;
        }
        Ok(())
    }
}

impl From<Modifier> for Vec<Option<String>> {
    fn from(modifier: Modifier) -> Self {
        match modifier.value {
            Some(value) => vec![Some(modifier.name), Some(value)],
            None => vec![Some(modifier.name)],
        }
    }
}

impl TryFrom<Vec<Option<String>>> for Modifier {
    type Error = BemError;

    fn try_from(parts: Vec<Option<String>>) -> Result<Self, Self::Error> {
        if parts.len() > 2 {
            return Err(BemError::TooManyParts {
                subject: "BEM modifier",
                limit: "a name and one value",
                count: parts.len(),
                found: parts
                    .iter()
                    .map(|p| p.as_deref().unwrap_or("null"))
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        let mut parts = parts.into_iter();
        let name = parts.next().flatten().ok_or_else(|| BemError::NotAString {
            subject: "BEM modifier's name",
            found: "null".to_string(),
        })?;
        Ok(Self::new(name, parts.next().flatten()))
    }
}

/// A modifier plus a negation flag: "must have" or "must not have"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModifierRequirement {
    modifier: Modifier,
    negate: bool,
}

impl ModifierRequirement {
    /// Require a simple modifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_modifier(Modifier::simple(name))
    }

    /// Require an existing modifier
    #[must_use]
    pub fn from_modifier(modifier: Modifier) -> Self {
        Self {
            modifier,
            negate: false,
        }
    }

    /// Require the modifier to carry `value`
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.modifier.value = Some(value.into());
        self
    }

    /// Set whether the requirement is negated
    #[must_use]
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Turn into a "must not have" requirement
    #[must_use]
    pub fn negated(self) -> Self {
        self.with_negate(true)
    }

    /// The required modifier
    #[must_use]
    pub const fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    /// Modifier name
    #[must_use]
    pub fn name(&self) -> &str {
        self.modifier.name()
    }

    /// Modifier value, if any
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.modifier.value()
    }

    /// Whether the modifier must be absent
    #[must_use]
    pub const fn negate(&self) -> bool {
        self.negate
    }
}

/// Structured form: `{ blk, elt?, mod? }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BemObject {
    /// Block name
    pub blk: String,
    /// Element name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elt: Option<String>,
    /// Modifier
    #[serde(rename = "mod", default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
}

impl BemObject {
    /// Object holding only a block
    #[must_use]
    pub fn new(blk: impl Into<String>) -> Self {
        Self {
            blk: blk.into(),
            elt: None,
            modifier: None,
        }
    }

    /// Set the element
    #[must_use]
    pub fn with_element(mut self, elt: impl Into<String>) -> Self {
        self.elt = Some(elt.into());
        self
    }

    /// Set the modifier
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

impl From<BemVector> for BemObject {
    fn from(BemVector(blk, elt, modifier): BemVector) -> Self {
        Self { blk, elt, modifier }
    }
}

/// Positional form: `[blk, elt?, mod?]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BemVector(pub String, pub Option<String>, pub Option<Modifier>);

impl BemVector {
    /// Block name
    #[must_use]
    pub fn blk(&self) -> &str {
        &self.0
    }

    /// Element name, if any
    #[must_use]
    pub fn elt(&self) -> Option<&str> {
        self.1.as_deref()
    }

    /// Modifier, if any
    #[must_use]
    pub const fn modifier(&self) -> Option<&Modifier> {
        self.2.as_ref()
    }
}

impl From<BemObject> for BemVector {
    fn from(object: BemObject) -> Self {
        Self(object.blk, object.elt, object.modifier)
    }
}

/// Any of the three representations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum BemStructure {
    /// `block__element--name_value`
    String(String),
    /// `{ blk, elt?, mod? }`
    Object(BemObject),
    /// `[blk, elt?, mod?]`
    Vector(BemVector),
}

impl BemStructure {
    /// Short name of the representation, for diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Vector(_) => "vector",
        }
    }
}

impl From<&str> for BemStructure {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for BemStructure {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<BemObject> for BemStructure {
    fn from(object: BemObject) -> Self {
        Self::Object(object)
    }
}

impl From<BemVector> for BemStructure {
    fn from(vector: BemVector) -> Self {
        Self::Vector(vector)
    }
}

impl From<&BemBase> for BemStructure {
    fn from(base: &BemBase) -> Self {
        Self::Object(base.as_object().clone())
    }
}

/// Join the parts with the canonical delimiters, without validating them
pub(crate) fn format_bem_string(blk: &str, elt: Option<&str>, modifier: Option<&Modifier>) -> String {
    let mut out = String::from(blk);
    if let Some(elt) = elt {
        out.push_str(ELEMENT_DELIMITER);
        out.push_str(elt);
    }
    if let Some(modifier) = modifier {
        out.push_str(MODIFIER_DELIMITER);
        out.push_str(&modifier.name);
        if let Some(value) = &modifier.value {
            out.push_str(MODIFIER_VALUE_DELIMITER);
            out.push_str(value);
        }
    }
    out
}
