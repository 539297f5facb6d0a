#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Identifier case conversion.
//!
//! One tokenizer, three joins:
//! - **camel**: `firstName`
//! - **dot**: `first.name`
//! - **kebab**: `first-name`
//!
//! Input is split on whitespace, underscores, hyphens (except for kebab) and
//! camelCase humps, lower-cased, then joined per [`Convention`]. Blank input is
//! rejected with a [`ConvertError`] rather than producing an empty identifier.

pub mod colors;
mod convention;
mod convert;
mod error;
mod tokenize;


pub use colors::Colors;
pub use convention::{Convention, ParseConventionError};
pub use convert::{convert, convert_value, to_camel_case, to_dot_case, to_kebab_case};
pub use error::ConvertError;
pub use tokenize::tokenize;
