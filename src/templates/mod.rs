//! Template library.
//!
//! This module provides:
//!
//! - **Model**: `Template`, `TemplateGroup` and the payload a template loads
//! - **Catalog**: the built-in template groups plus YAML load/export
//! - **Expand**: substitution of an example into a template's prompt pattern
//!
//! # Prompt patterns
//!
//! A template prompt contains at most one `{example}` placeholder:
//!
//! ```text
//! Topic: {example}
//! Headline:
//! ```
//!
//! Expanding the template with example `Chicago, restaurants, summer` replaces
//! the placeholder and leaves every other brace untouched.

mod builtin;
mod catalog;
mod expand;
mod model;


pub use catalog::Catalog;
pub use expand::{PLACEHOLDER, expand, expand_default, substitute_example};
pub use model::{ActionPayload, Example, ParameterOverrides, Template, TemplateGroup};
