//! Free functions registering tristate flags.
//!
//! The suffixes combine as follows:
//!
//! - `_var`: bind caller-supplied storage instead of returning a new handle
//! - `_p`:   also take a single-character shorthand used after a single dash
//! - `_fs`:  register into the given flag set instead of the default one

use tristate_core::TriState;

use crate::{
    command_line::command_line,
    flag_set::FlagSet,
    handle::{TriStateHandle, TriStateTarget},
};

pub fn flag(name: &str, value: TriState, usage: &str) -> TriStateHandle {
    command_line().tristate(name, value, usage)
}

pub fn flag_p(name: &str, shorthand: &str, value: TriState, usage: &str) -> TriStateHandle {
    command_line().tristate_p(name, shorthand, value, usage)
}

pub fn flag_var<T>(target: T, name: &str, value: TriState, usage: &str)
where
    T: TriStateTarget + 'static,
{
    command_line().tristate_var(target, name, value, usage);
}

pub fn flag_var_p<T>(target: T, name: &str, shorthand: &str, value: TriState, usage: &str)
where
    T: TriStateTarget + 'static,
{
    command_line().tristate_var_p(target, name, shorthand, value, usage);
}

pub fn flag_fs(fs: &mut FlagSet<'_>, name: &str, value: TriState, usage: &str) -> TriStateHandle {
    fs.tristate(name, value, usage)
}

pub fn flag_p_fs(
    fs: &mut FlagSet<'_>,
    name: &str,
    shorthand: &str,
    value: TriState,
    usage: &str,
) -> TriStateHandle {
    fs.tristate_p(name, shorthand, value, usage)
}

pub fn flag_var_fs<'a, T>(fs: &mut FlagSet<'a>, target: T, name: &str, value: TriState, usage: &str)
where
    T: TriStateTarget + 'a,
{
    fs.tristate_var(target, name, value, usage);
}

pub fn flag_var_p_fs<'a, T>(
    fs: &mut FlagSet<'a>,
    target: T,
    name: &str,
    shorthand: &str,
    value: TriState,
    usage: &str,
) where
    T: TriStateTarget + 'a,
{
    fs.tristate_var_p(target, name, shorthand, value, usage);
}
