use std::ffi::OsStr;

use clap::{
    Arg, Command,
    builder::{PossibleValue, TypedValueParser, ValueParserFactory},
    error::ErrorKind,
};

use crate::tristate::TriState;

/// Parses clap arguments into [`TriState`] using the case-insensitive literal tables.
///
/// `-1` is a `None` literal, so args using this parser should set
/// `allow_hyphen_values(true)`; otherwise clap reads `--arg -1` as a flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriStateValueParser;

impl TypedValueParser for TriStateValueParser {
    type Value = TriState;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let raw = value
            .to_str()
            .ok_or_else(|| clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;

        TriState::parse(raw).map_err(|e| {
            let arg = arg.map_or_else(|| "...".to_owned(), ToString::to_string);
            clap::Error::raw(
                ErrorKind::ValueValidation,
                format!("invalid value '{}' for '{}': {}\n", raw, arg, e),
            )
            .with_cmd(cmd)
        })
    }

    /// Canonical names are listed; every other literal is a hidden alias.
    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(TriState::ALL.into_iter().map(|ts| {
            let canonical = ts.as_str();
            PossibleValue::new(canonical).aliases(
                ts.literals()
                    .iter()
                    .copied()
                    .filter(move |lit| !lit.eq_ignore_ascii_case(canonical)),
            )
        })))
    }
}

impl ValueParserFactory for TriState {
    type Parser = TriStateValueParser;

    fn value_parser() -> Self::Parser {
        TriStateValueParser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgAction, value_parser};

    fn command() -> Command {
        Command::new("test").arg(
            Arg::new("tristate")
                .long("tristate")
                .short('t')
                .action(ArgAction::Set)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(TriState))
                .default_value("False"),
        )
    }

    fn parse(args: &[&str]) -> Result<TriState, clap::Error> {
        let matches = command().try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))?;
        Ok(*matches.get_one::<TriState>("tristate").unwrap())
    }

    #[test]
    fn test_parse_via_clap() {
        assert_eq!(parse(&[]).unwrap(), TriState::False);
        assert_eq!(parse(&["--tristate=yes"]).unwrap(), TriState::True);
        assert_eq!(parse(&["--tristate", "unknown"]).unwrap(), TriState::None);
        assert_eq!(parse(&["-t", "TRUE"]).unwrap(), TriState::True);
        assert_eq!(parse(&["-t", "nil"]).unwrap(), TriState::None);
    }

    #[test]
    fn test_hyphen_literal_as_separate_token() {
        assert_eq!(parse(&["-t", "-1"]).unwrap(), TriState::None);
        assert_eq!(parse(&["--tristate", "-1"]).unwrap(), TriState::None);
        assert_eq!(parse(&["--tristate=-1"]).unwrap(), TriState::None);
    }

    #[test]
    fn test_rejects_bad_literal() {
        let err = parse(&["--tristate", "doug"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let msg = err.to_string();
        assert!(msg.contains("doug"), "{}", msg);
        assert!(msg.contains("bad tristate value"), "{}", msg);
    }

    #[test]
    fn test_possible_values() {
        let values: Vec<PossibleValue> = TriStateValueParser.possible_values().unwrap().collect();
        let names: Vec<&str> = values.iter().map(|v| v.get_name()).collect();
        assert_eq!(names, ["None", "False", "True"]);

        assert!(values[0].matches("nil", false));
        assert!(values[2].matches("yes", false));
        assert!(!values[1].matches("yes", false));
    }
}
