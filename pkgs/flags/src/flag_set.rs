use std::{
    collections::{HashMap, HashSet},
    ffi::OsString,
    fmt,
};

use clap::{Arg, ArgAction, Command, parser::ValueSource, value_parser};
use log::{debug, trace};
use tristate_core::{FlagValue, TriState};

use crate::{
    error::FlagError,
    handle::{TriStateHandle, TriStateTarget},
};

/// Flag names may not contain '=', so these ids never collide with a flag.
const POSITIONAL_ID: &str = "=args";
const HELP_ID: &str = "=help";

/// What [`FlagSet::parse`] does when parsing fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorHandling {
    /// Return the error to the caller.
    #[default]
    ContinueOnError,
    /// Print the error (or the requested help) and exit the process.
    ExitOnError,
}

/// A registered flag.
pub struct Flag<'a> {
    name: String,
    shorthand: String,
    usage: String,
    default_value: String,
    value: Box<dyn FlagValue + Send + 'a>,
    changed: bool,
}

impl<'a> Flag<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The single-dash alias, if one was registered.
    pub fn shorthand(&self) -> Option<char> {
        let mut chars = self.shorthand.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The value's text at registration time.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn value(&self) -> &(dyn FlagValue + Send + 'a) {
        self.value.as_ref()
    }

    /// Whether the value was set from the command line (or [`FlagSet::set`]).
    pub fn changed(&self) -> bool {
        self.changed
    }

    fn arg(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone())
            .long(self.name.clone())
            .help(self.usage.clone())
            .value_name(self.value.type_name())
            .value_parser(value_parser!(String))
            .action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true)
            .default_value(self.default_value.clone());
        if let Some(c) = self.shorthand() {
            arg = arg.short(c);
        }
        arg
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("shorthand", &self.shorthand)
            .field("type", &self.value.type_name())
            .field("value", &self.value.string())
            .field("default_value", &self.default_value)
            .field("changed", &self.changed)
            .finish()
    }
}

/// A named collection of flags that command-line tokens are parsed against.
///
/// Values are bound for the lifetime `'a`, so a flag set may borrow
/// caller-owned variables. Tokenizing and help rendering are done by clap.
#[derive(Debug)]
pub struct FlagSet<'a> {
    name: String,
    error_handling: ErrorHandling,
    flags: Vec<Flag<'a>>,
    args: Vec<String>,
    parsed: bool,
}

impl<'a> FlagSet<'a> {
    pub fn new(name: impl Into<String>, error_handling: ErrorHandling) -> Self {
        FlagSet {
            name: name.into(),
            error_handling,
            flags: Vec::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// Registers a flag for any [`FlagValue`]. Its current text becomes the default.
    pub fn var<V>(&mut self, value: V, name: &str, usage: &str)
    where
        V: FlagValue + Send + 'a,
    {
        self.var_p(value, name, "", usage);
    }

    /// Like [`FlagSet::var`] with a single-character shorthand ("" for none).
    ///
    /// Names and shorthands are validated when parsing.
    pub fn var_p<V>(&mut self, value: V, name: &str, shorthand: &str, usage: &str)
    where
        V: FlagValue + Send + 'a,
    {
        let flag = Flag {
            name: name.to_owned(),
            shorthand: shorthand.to_owned(),
            usage: usage.to_owned(),
            default_value: value.string(),
            value: Box::new(value),
            changed: false,
        };
        debug!(
            "Registered flag --{} ({}, default {}) in flag set {:?}",
            flag.name,
            flag.value.type_name(),
            flag.default_value,
            self.name
        );
        self.flags.push(flag);
    }

    /// Registers a tristate flag and returns a handle to its value.
    pub fn tristate(&mut self, name: &str, value: TriState, usage: &str) -> TriStateHandle {
        self.tristate_p(name, "", value, usage)
    }

    pub fn tristate_p(
        &mut self,
        name: &str,
        shorthand: &str,
        value: TriState,
        usage: &str,
    ) -> TriStateHandle {
        let handle = TriStateHandle::default();
        self.tristate_var_p(handle.clone(), name, shorthand, value, usage);
        handle
    }

    /// Registers a tristate flag writing into `target`, which is set to `value` now.
    pub fn tristate_var<T>(&mut self, target: T, name: &str, value: TriState, usage: &str)
    where
        T: TriStateTarget + 'a,
    {
        self.tristate_var_p(target, name, "", value, usage);
    }

    pub fn tristate_var_p<T>(
        &mut self,
        mut target: T,
        name: &str,
        shorthand: &str,
        value: TriState,
        usage: &str,
    ) where
        T: TriStateTarget + 'a,
    {
        target.store(value);
        self.var_p(target, name, shorthand, usage);
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.flags.iter()
    }

    /// Sets a flag by name as if it had been given on the command line.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        let flag = self
            .flags
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_owned()))?;
        apply(flag, raw)
    }

    /// Positional arguments left after the last parse.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// The clap command equivalent to this flag set.
    pub fn command(&self) -> Command {
        let claims_help = self.flags.iter().any(|f| f.name == "help");
        let claims_h = self.flags.iter().any(|f| f.shorthand() == Some('h'));

        let mut cmd = Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .arg(
                Arg::new(POSITIONAL_ID)
                    .value_name("ARGS")
                    .value_parser(value_parser!(String))
                    .num_args(1..)
                    .action(ArgAction::Append),
            );

        if !claims_help {
            let mut help = Arg::new(HELP_ID)
                .long("help")
                .help("Print help")
                .action(ArgAction::Help);
            if !claims_h {
                help = help.short('h');
            }
            cmd = cmd.arg(help);
        }

        self.flags.iter().fold(cmd, |cmd, flag| cmd.arg(flag.arg()))
    }

    /// Rendered help text listing every flag.
    pub fn usage(&self) -> String {
        self.command().render_help().to_string()
    }

    /// Parses `args` (without the program name) and writes the given values
    /// into the bound flags. Flags absent from `args` keep their defaults.
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_parse(args) {
            Ok(()) => Ok(()),
            Err(err) => match self.error_handling {
                ErrorHandling::ContinueOnError => Err(err),
                ErrorHandling::ExitOnError => self.exit(err),
            },
        }
    }

    fn try_parse<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.validate()?;
        let matches = self.command().try_get_matches_from(args)?;

        for flag in &mut self.flags {
            if matches.value_source(&flag.name) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Some(raw) = matches.get_one::<String>(&flag.name) {
                apply(flag, raw)?;
            }
        }

        self.args = matches
            .get_many::<String>(POSITIONAL_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        self.parsed = true;

        debug!(
            "Parsed flag set {:?}: {} flag(s) changed, {} positional arg(s)",
            self.name,
            self.flags.iter().filter(|f| f.changed).count(),
            self.args.len()
        );
        Ok(())
    }

    fn exit(&self, err: FlagError) -> ! {
        match err {
            FlagError::Clap(e) => e.exit(),
            other @ FlagError::InvalidValue { .. } => {
                let kind = other.kind();
                self.command().error(kind, other).exit()
            }
            // Registration errors mean the flags can't form a valid command.
            other => clap::Error::raw(other.kind(), format!("{}\n", other)).exit(),
        }
    }

    fn validate(&self) -> Result<(), FlagError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut shorthands: HashMap<char, &str> = HashMap::new();

        for flag in &self.flags {
            if flag.name.is_empty() || flag.name.starts_with('-') || flag.name.contains('=') {
                return Err(FlagError::InvalidName(flag.name.clone()));
            }
            if !names.insert(&flag.name) {
                return Err(FlagError::DuplicateFlag(flag.name.clone()));
            }

            if flag.shorthand.is_empty() {
                continue;
            }
            let shorthand = match flag.shorthand() {
                Some(c) if c != '-' && c != '=' => c,
                _ => {
                    return Err(FlagError::InvalidShorthand {
                        flag: flag.name.clone(),
                        shorthand: flag.shorthand.clone(),
                    });
                }
            };
            if let Some(existing) = shorthands.insert(shorthand, &flag.name) {
                return Err(FlagError::DuplicateShorthand {
                    shorthand,
                    flag: flag.name.clone(),
                    existing: existing.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn apply(flag: &mut Flag<'_>, raw: &str) -> Result<(), FlagError> {
    flag.value
        .set(raw)
        .map_err(|source| FlagError::InvalidValue {
            flag: flag.name.clone(),
            value: raw.to_owned(),
            source,
        })?;
    flag.changed = true;
    trace!("--{} = {}", flag.name, flag.value.string());
    Ok(())
}
