use std::{
    env, mem,
    path::Path,
    sync::{LazyLock, Mutex, MutexGuard, PoisonError},
};

use crate::{
    error::FlagError,
    flag_set::{ErrorHandling, FlagSet},
};

static COMMAND_LINE: LazyLock<Mutex<FlagSet<'static>>> =
    LazyLock::new(|| Mutex::new(FlagSet::new(program_name(), ErrorHandling::ExitOnError)));

fn program_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

/// Locks the process-wide default flag set.
///
/// Don't hold the guard across calls to the free registration functions,
/// they lock it themselves.
pub fn command_line() -> MutexGuard<'static, FlagSet<'static>> {
    COMMAND_LINE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the default flag set, returning the previous one.
pub fn set_command_line(flag_set: FlagSet<'static>) -> FlagSet<'static> {
    mem::replace(&mut *command_line(), flag_set)
}

/// Parses the process arguments (minus the program name) into the default flag set.
pub fn parse() -> Result<(), FlagError> {
    command_line().parse(env::args_os().skip(1))
}

pub fn parsed() -> bool {
    command_line().parsed()
}

/// Positional arguments left after [`parse`].
pub fn args() -> Vec<String> {
    command_line().args().to_vec()
}
