//! A three-way logical value for command-line flags: true, false, or unset.
//!
//! [`TriState`] is meant for filters where a flag may ask for "only true",
//! "only false" or "don't care". It parses from a set of case-insensitive
//! literals, formats back to `None`/`False`/`True`, and implements
//! [`FlagValue`] so any flag parser speaking that trait can bind it.
//!
//! With the `clap` feature, `TriState` also works directly as a clap
//! argument type.

pub mod error;
pub mod tristate;
pub mod value;

#[cfg(feature = "clap")]
pub mod clap_parser;

pub use error::InvalidLiteral;
pub use tristate::{FALSE_LITERALS, NONE_LITERALS, TRUE_LITERALS, TriState};
pub use value::FlagValue;

#[cfg(feature = "clap")]
pub use clap_parser::TriStateValueParser;
