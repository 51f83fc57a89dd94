//! Tristate command-line flags on top of clap.
//!
//! A [`FlagSet`] collects flags whose storage implements
//! [`tristate_core::FlagValue`] and parses command-line tokens into them.
//! The free functions in [`register`] cover every combination of "new handle
//! or bound variable", "with or without shorthand" and "default or given flag
//! set". The default flag set is only touched by those free functions and by
//! [`command_line`]; everything else works on explicit flag sets.

pub mod command_line;
pub mod error;
pub mod flag_set;
pub mod handle;
pub mod register;

pub use command_line::{args, command_line, parse, parsed, set_command_line};
pub use error::FlagError;
pub use flag_set::{ErrorHandling, Flag, FlagSet};
pub use handle::{TriStateHandle, TriStateTarget};
pub use register::{
    flag, flag_fs, flag_p, flag_p_fs, flag_var, flag_var_fs, flag_var_p, flag_var_p_fs,
};
pub use tristate_core::TriState;
