//! BemBase: a mutable, validated block/element/modifier triple.
//!
//! A `BemBase` starts out mutable. Checked setters rebuild the whole object
//! with the one changed part and validate it before committing, so a rejected
//! change leaves the instance untouched. `freeze()` makes the instance
//! permanently read-only; `clone()` is the way back to a mutable copy.
//!
//! The `*_unchecked` setters skip validation entirely. They exist for callers
//! that already hold validated parts; state built through them is still
//! checked again by the `to_bem_*` export methods.
//!
//! A frozen instance is safe to share between threads behind an `Arc`.
//! Mutating a shared, unfrozen instance needs external synchronization.
//! Freezing guards the checked setters only: the `*_unchecked` setters
//! bypass the frozen flag as well as validation, so code holding
//! `&mut BemBase` can still rewrite a frozen instance through them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::convert::{to_bem_object, to_bem_string, to_bem_vector};
use crate::model::{format_bem_string, BemObject, BemStructure, BemVector, Modifier};
use crate::result::{BemError, BemResult};
use crate::validate::validate_bem_object;

/// Construction options for [`BemBase`]
///
/// # Example
/// ```
/// use bemkit::{BemBase, BemBaseOptions};
///
/// let base = BemBase::with_options("card__title", BemBaseOptions::new().with_frozen(true)).unwrap();
/// assert!(base.is_frozen());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BemBaseOptions {
    /// Freeze the instance right after construction
    #[serde(default)]
    pub frozen: bool,
}

impl BemBaseOptions {
    /// Default options: mutable
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the instance starts frozen
    #[must_use]
    pub const fn with_frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }
}

/// A validated BEM triple with per-part setters and a freeze switch
#[derive(Debug)]
pub struct BemBase {
    object: BemObject,
    frozen: bool,
}

impl BemBase {
    /// Build from any representation, which must be valid
    ///
    /// # Example
    /// ```
    /// use bemkit::{BemBase, Modifier};
    ///
    /// let base = BemBase::new("foo__bar--uno_1").unwrap();
    /// assert_eq!(base.modifier(), Some(&Modifier::full("uno", "1")));
    /// assert_eq!(base.to_query_selector().unwrap(), ".foo__bar--uno_1");
    /// ```
    pub fn new(initializer: impl Into<BemStructure>) -> BemResult<Self> {
        Self::with_options(initializer, BemBaseOptions::default())
    }

    /// Build from any representation with explicit options
    pub fn with_options(
        initializer: impl Into<BemStructure>,
        options: BemBaseOptions,
    ) -> BemResult<Self> {
        let object = to_bem_object(initializer)?;
        Ok(Self {
            object,
            frozen: options.frozen,
        })
    }

    /// Block name
    #[must_use]
    pub fn blk(&self) -> &str {
        &self.object.blk
    }

    /// Element name, if any
    #[must_use]
    pub fn elt(&self) -> Option<&str> {
        self.object.elt.as_deref()
    }

    /// Modifier, if any
    #[must_use]
    pub const fn modifier(&self) -> Option<&Modifier> {
        self.object.modifier.as_ref()
    }

    /// Current state in object form, without re-validating
    #[must_use]
    pub const fn as_object(&self) -> &BemObject {
        &self.object
    }

    /// Whether `freeze()` has been called
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn ensure_mutable(&self, part: &'static str) -> BemResult<()> {
        if self.frozen {
            tracing::debug!(part, bem = %self, "refused mutation of frozen BEM base");
            return Err(BemError::FrozenInstanceMutation { part });
        }
        Ok(())
    }

    fn commit(&mut self, part: &'static str, candidate: BemObject) -> BemResult<()> {
        if let Some(error) = validate_bem_object(&candidate).error {
            tracing::debug!(part, %error, "rejected BEM base mutation");
            return Err(error);
        }
        self.object = candidate;
        Ok(())
    }

    /// Replace the block, validating the resulting object
    pub fn set_blk(&mut self, blk: impl Into<String>) -> BemResult<()> {
        self.ensure_mutable("block")?;
        let candidate = BemObject {
            blk: blk.into(),
            ..self.object.clone()
        };
        self.commit("block", candidate)
    }

    /// Replace or clear the element, validating the resulting object
    pub fn set_elt(&mut self, elt: Option<String>) -> BemResult<()> {
        self.ensure_mutable("element")?;
        let candidate = BemObject {
            elt,
            ..self.object.clone()
        };
        self.commit("element", candidate)
    }

    /// Replace or clear the modifier, validating the resulting object
    pub fn set_modifier(&mut self, modifier: Option<Modifier>) -> BemResult<()> {
        self.ensure_mutable("modifier")?;
        let candidate = BemObject {
            modifier,
            ..self.object.clone()
        };
        self.commit("modifier", candidate)
    }

    /// Replace the block without validation, even when frozen
    ///
    /// Only for parts that were validated elsewhere.
    pub fn set_blk_unchecked(&mut self, blk: impl Into<String>) -> &mut Self {
        self.object.blk = blk.into();
        tracing::trace!(bem = %self, "unchecked block update");
        self
    }

    /// Replace or clear the element without validation, even when frozen
    pub fn set_elt_unchecked(&mut self, elt: Option<String>) -> &mut Self {
        self.object.elt = elt;
        tracing::trace!(bem = %self, "unchecked element update");
        self
    }

    /// Replace or clear the modifier without validation, even when frozen
    pub fn set_modifier_unchecked(&mut self, modifier: Option<Modifier>) -> &mut Self {
        self.object.modifier = modifier;
        tracing::trace!(bem = %self, "unchecked modifier update");
        self
    }

    /// Make the instance read-only for the checked setters. Idempotent.
    ///
    /// The `*_unchecked` setters still write to a frozen instance.
    pub fn freeze(&mut self) -> &mut Self {
        if !self.frozen {
            tracing::trace!(bem = %self, "BEM base frozen");
        }
        self.frozen = true;
        self
    }

    /// Export as a [`BemObject`]
    pub fn to_bem_object(&self) -> BemResult<BemObject> {
        to_bem_object(self.object.clone())
    }

    /// Export as the canonical BEM string
    pub fn to_bem_string(&self) -> BemResult<String> {
        to_bem_string(self.object.clone())
    }

    /// Export as a [`BemVector`]
    pub fn to_bem_vector(&self) -> BemResult<BemVector> {
        to_bem_vector(self.object.clone())
    }

    /// CSS class selector for this name: `"." + bem string`
    pub fn to_query_selector(&self) -> BemResult<String> {
        self.to_bem_string().map(|s| format!(".{s}"))
    }
}

/// Cloning yields an unfrozen copy with the same parts
impl Clone for BemBase {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
            frozen: false,
        }
    }
}

/// Equality compares the parts and ignores the frozen flag
impl PartialEq for BemBase {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl Eq for BemBase {}

/// Writes the parts joined with the BEM delimiters, without validating them
impl fmt::Display for BemBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bem_string(
            &self.object.blk,
            self.object.elt.as_deref(),
            self.object.modifier.as_ref(),
        ))
    }
}

impl FromStr for BemBase {
    type Err = BemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<BemObject> for BemBase {
    type Error = BemError;

    fn try_from(object: BemObject) -> Result<Self, Self::Error> {
        Self::new(object)
    }
}

impl TryFrom<BemVector> for BemBase {
    type Error = BemError;

    fn try_from(vector: BemVector) -> Result<Self, Self::Error> {
        Self::new(vector)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction_tests {
        use super::*;

        #[test]
        fn test_from_string() {
            let base = BemBase::new("foo__bar--uno_1").unwrap();
            assert_eq!(base.blk(), "foo");
            assert_eq!(base.elt(), Some("bar"));
            assert_eq!(base.modifier(), Some(&Modifier::full("uno", "1")));
            assert!(!base.is_frozen());
        }

        #[test]
        fn test_from_object_and_vector() {
            let object = BemObject::new("foo").with_element("bar");
            let a = BemBase::try_from(object.clone()).unwrap();
            let b = BemBase::try_from(BemVector::from(object)).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn test_from_str() {
            let base: BemBase = "card--active".parse().unwrap();
            assert_eq!(base.modifier(), Some(&Modifier::simple("active")));
        }

        #[test]
        fn test_invalid_initializer() {
            let err = BemBase::new("foo__").unwrap_err();
            assert!(err.to_string().starts_with("BEM element "));
        }

        #[test]
        fn test_frozen_option() {
            let base =
                BemBase::with_options("foo", BemBaseOptions::new().with_frozen(true)).unwrap();
            assert!(base.is_frozen());
        }

        #[test]
        fn test_options_serde() {
            let options: BemBaseOptions = serde_json::from_str("{}").unwrap();
            assert!(!options.frozen);
            let options: BemBaseOptions = serde_json::from_str(r#"{"frozen":true}"#).unwrap();
            assert!(options.frozen);
        }
    }

    mod setter_tests {
        use super::*;

        #[test]
        fn test_checked_setters_commit_valid_values() {
            let mut base = BemBase::new("foo").unwrap();
            base.set_blk("card").unwrap();
            base.set_elt(Some("title".into())).unwrap();
            base.set_modifier(Some(Modifier::full("size", "xl"))).unwrap();
            assert_eq!(base.to_bem_string().unwrap(), "card__title--size_xl");

            base.set_elt(None).unwrap();
            base.set_modifier(None).unwrap();
            assert_eq!(base.to_bem_string().unwrap(), "card");
        }

        #[test]
        fn test_rejected_change_leaves_state_untouched() {
            let mut base = BemBase::new("foo__bar--on").unwrap();
            let err = base.set_elt(Some("b--r".into())).unwrap_err();
            assert!(err.to_string().starts_with("BEM element "));
            assert_eq!(base.elt(), Some("bar"));

            assert!(base.set_blk("").is_err());
            assert_eq!(base.blk(), "foo");

            let err = base.set_modifier(Some(Modifier::full("on", "-"))).unwrap_err();
            assert!(err.to_string().starts_with("BEM modifier's optional value "));
            assert_eq!(base.modifier(), Some(&Modifier::simple("on")));
        }

        #[test]
        fn test_whole_object_revalidated() {
            let mut base = BemBase::new("foo").unwrap();
            base.set_modifier_unchecked(Some(Modifier::simple("b--d")));
            // The element is fine, but the stale modifier is checked too
            let err = base.set_elt(Some("bar".into())).unwrap_err();
            assert!(err.to_string().starts_with("BEM modifier's name "));
            assert_eq!(base.elt(), None);
        }

        #[test]
        fn test_unchecked_setters_chain() {
            let mut base = BemBase::new("foo").unwrap();
            base.set_blk_unchecked("card")
                .set_elt_unchecked(Some("title".into()))
                .set_modifier_unchecked(Some(Modifier::simple("on")));
            assert_eq!(base.to_string(), "card__title--on");
        }

        #[test]
        fn test_unchecked_state_is_caught_on_export() {
            let mut base = BemBase::new("foo").unwrap();
            base.set_elt_unchecked(Some("not valid".into()));
            assert!(base.to_bem_string().is_err());
            assert!(base.to_query_selector().is_err());
            assert_eq!(base.to_string(), "foo__not valid");
        }
    }

    mod freeze_tests {
        use super::*;

        #[test]
        fn test_frozen_rejects_checked_setters() {
            let mut base = BemBase::new("foo").unwrap();
            base.freeze();
            for err in [
                base.set_blk("x").unwrap_err(),
                base.set_elt(Some("x".into())).unwrap_err(),
                base.set_modifier(None).unwrap_err(),
            ] {
                assert!(matches!(err, BemError::FrozenInstanceMutation { .. }));
                assert!(err.to_string().contains("frozen"));
            }
            assert_eq!(base.blk(), "foo");
        }

        #[test]
        fn test_frozen_check_precedes_validation() {
            let mut base = BemBase::new("foo").unwrap();
            base.freeze();
            let err = base.set_blk("--").unwrap_err();
            assert_eq!(err, BemError::FrozenInstanceMutation { part: "block" });
        }

        #[test]
        fn test_unchecked_setters_write_through_freeze() {
            let mut base = BemBase::new("foo").unwrap();
            base.freeze();
            base.set_blk_unchecked("bar")
                .set_elt_unchecked(Some("baz".into()))
                .set_modifier_unchecked(Some(Modifier::simple("on")));
            assert!(base.is_frozen());
            assert_eq!(base.to_string(), "bar__baz--on");
            assert!(base.set_blk("qux").is_err());
        }

        #[test]
        fn test_owned_element_is_moved_in() {
            let mut base = BemBase::new("foo").unwrap();
            let elt = String::from("title");
            let ptr = elt.as_ptr();
            base.set_elt(Some(elt)).unwrap();
            assert_eq!(base.elt().unwrap().as_ptr(), ptr);
        }

        #[test]
        fn test_freeze_is_idempotent() {
            let mut base = BemBase::new("foo").unwrap();
            base.freeze().freeze();
            assert!(base.is_frozen());
        }

        #[test]
        fn test_clone_is_unfrozen_and_independent() {
            let mut base = BemBase::new("foo--size_1").unwrap();
            base.freeze();
            let mut copy = base.clone();
            assert!(!copy.is_frozen());
            assert_eq!(copy.to_bem_string().unwrap(), base.to_bem_string().unwrap());

            copy.set_modifier(Some(Modifier::full("size", "2"))).unwrap();
            assert_eq!(base.modifier(), Some(&Modifier::full("size", "1")));
        }

        #[test]
        fn test_equality_ignores_frozen_flag() {
            let mut a = BemBase::new("foo").unwrap();
            let b = BemBase::new("foo").unwrap();
            a.freeze();
            assert_eq!(a, b);
        }
    }

    mod export_tests {
        use super::*;

        #[test]
        fn test_representations() {
            let base = BemBase::new("foo__bar--fiz_buz").unwrap();
            assert_eq!(
                base.to_bem_object().unwrap(),
                BemObject::new("foo")
                    .with_element("bar")
                    .with_modifier(Modifier::full("fiz", "buz"))
            );
            assert_eq!(
                base.to_bem_vector().unwrap(),
                BemVector(
                    "foo".into(),
                    Some("bar".into()),
                    Some(Modifier::full("fiz", "buz"))
                )
            );
            assert_eq!(base.to_string(), "foo__bar--fiz_buz");
            assert_eq!(base.to_query_selector().unwrap(), ".foo__bar--fiz_buz");
        }

        #[test]
        fn test_structure_from_base() {
            let base = BemBase::new("foo--on").unwrap();
            let structure = BemStructure::from(&base);
            assert_eq!(structure, BemStructure::Object(base.as_object().clone()));
        }
    }
}
