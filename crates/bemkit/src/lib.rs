//! Bemkit: Block-Element-Modifier names for CSS selectors
//!
//! A BEM name encodes a component hierarchy in a CSS class: a block, an
//! optional element and an optional modifier with an optional value. Bemkit
//! validates such names, converts between their three interchangeable forms
//! and provides [`BemBase`], a mutable value that page objects build their
//! selectors from.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      BEMKIT Architecture                         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐    ┌────────────┐    ┌────────────┐    ┌─────────┐ │
//! │  │ Grammar  │───►│ Validators │───►│ Converters │───►│ BemBase │ │
//! │  │ name/val │    │ (results)  │    │ (errors)   │    │ (state) │ │
//! │  └──────────┘    └────────────┘    └────────────┘    └─────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Form   | Example                                            |
//! |--------|----------------------------------------------------|
//! | string | `foo__bar--fiz_buz`                                |
//! | object | `{ "blk": "foo", "elt": "bar", "mod": ["fiz", "buz"] }` |
//! | vector | `["foo", "bar", ["fiz", "buz"]]`                   |
//!
//! Validators never fail loudly: they return a [`Validation`] that echoes the
//! input and carries the first error found. Converters and the checked
//! setters of [`BemBase`] turn that error into `Err`.
//!
//! # Example
//!
//! ```
//! use bemkit::prelude::*;
//!
//! let mut base = BemBase::new("card__title--size_xl")?;
//! base.set_modifier(Some(Modifier::simple("active")))?;
//! assert_eq!(base.to_query_selector()?, ".card__title--active");
//!
//! base.freeze();
//! assert!(base.set_blk("other").is_err());
//! # Ok::<(), bemkit::BemError>(())
//! ```

#![warn(missing_docs)]

mod base;
mod convert;
#[allow(clippy::expect_used)]
mod grammar;
mod json;
mod model;
mod result;
mod validate;

pub use base::{BemBase, BemBaseOptions};
pub use convert::{to_bem_object, to_bem_string, to_bem_vector};
pub use grammar::{
    is_bem_name, is_bem_value, validate_bem_name, validate_bem_value, NAME_PATTERN, VALUE_PATTERN,
};
pub use json::validate_bem_json;
pub use model::{
    BemObject, BemStructure, BemVector, Modifier, ModifierRequirement, ELEMENT_DELIMITER,
    MODIFIER_DELIMITER, MODIFIER_VALUE_DELIMITER,
};
pub use result::{BemError, BemResult, Validation};
pub use validate::{
    validate_bem_block, validate_bem_element, validate_bem_modifier, validate_bem_modifier_name,
    validate_bem_modifier_requirement, validate_bem_modifier_value, validate_bem_object,
    validate_bem_string, validate_bem_structure, validate_bem_vector,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::base::*;
    pub use super::convert::*;
    pub use super::grammar::*;
    pub use super::json::*;
    pub use super::model::*;
    pub use super::result::*;
    pub use super::validate::*;
}
