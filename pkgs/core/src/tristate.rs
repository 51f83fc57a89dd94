use std::{fmt, str::FromStr};

use crate::error::InvalidLiteral;

/// A three-way logical value: true, false, or unset ("don't care").
///
/// The zero value is [`TriState::None`]. The discriminants only fix the
/// in-memory representation; the type is never ordered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TriState {
    #[default]
    None = 0,
    False = 1,
    True = 2,
}

/// Literals (lowercase) that parse to [`TriState::True`].
pub const TRUE_LITERALS: [&str; 5] = ["1", "t", "true", "y", "yes"];

/// Literals (lowercase) that parse to [`TriState::False`].
pub const FALSE_LITERALS: [&str; 5] = ["0", "f", "false", "n", "no"];

/// Literals (lowercase) that parse to [`TriState::None`].
pub const NONE_LITERALS: [&str; 13] = [
    "-1", "u", "unknown", "e", "either", "b", "both", "a", "all", "any", "none", "null", "nil",
];

impl TriState {
    pub const ALL: [TriState; 3] = [TriState::None, TriState::False, TriState::True];

    /// Name reported to flag parsers for help output.
    pub const TYPE_NAME: &'static str = "TriState";

    /// Parses `input` case-insensitively against the recognized literals.
    ///
    /// | Value  | Literals                                                           |
    /// |--------|--------------------------------------------------------------------|
    /// | True   | `1, t, true, y, yes`                                               |
    /// | False  | `0, f, false, n, no`                                               |
    /// | None   | `-1, u, unknown, e, either, b, both, a, all, any, none, null, nil` |
    ///
    /// Anything else yields [`InvalidLiteral`].
    pub fn parse(input: &str) -> Result<TriState, InvalidLiteral> {
        let is_any = |literals: &[&str]| {
            literals
                .iter()
                .any(|lit| input.chars().map(fold_case).eq(lit.chars()))
        };

        if is_any(&TRUE_LITERALS) {
            Ok(TriState::True)
        } else if is_any(&FALSE_LITERALS) {
            Ok(TriState::False)
        } else if is_any(&NONE_LITERALS) {
            Ok(TriState::None)
        } else {
            Err(InvalidLiteral)
        }
    }

    /// Parses `input` into `self`. On error `self` keeps its previous value.
    pub fn set(&mut self, input: &str) -> Result<(), InvalidLiteral> {
        *self = Self::parse(input)?;
        Ok(())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TriState::None => "None",
            TriState::False => "False",
            TriState::True => "True",
        }
    }

    pub const fn type_name(self) -> &'static str {
        Self::TYPE_NAME
    }

    /// The lowercase literals accepted for this value.
    pub const fn literals(self) -> &'static [&'static str] {
        match self {
            TriState::None => &NONE_LITERALS,
            TriState::False => &FALSE_LITERALS,
            TriState::True => &TRUE_LITERALS,
        }
    }

    /// `None` maps to `Option::None`, `False`/`True` to `Some(false)`/`Some(true)`.
    #[inline(always)]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            TriState::None => None,
            TriState::False => Some(false),
            TriState::True => Some(true),
        }
    }

    /// Filter policy: a set value matches iff it equals `expected`.
    /// An unset value ignores `expected` and yields `none_result`.
    #[inline(always)]
    pub const fn matches(self, expected: bool, none_result: bool) -> bool {
        match self.as_bool() {
            Some(b) => b == expected,
            None => none_result,
        }
    }

    #[inline(always)]
    pub fn is_set(self) -> bool {
        self != TriState::None
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == TriState::None
    }

    #[inline(always)]
    pub fn is_true(self) -> bool {
        self == TriState::True
    }

    #[inline(always)]
    pub fn is_false(self) -> bool {
        self == TriState::False
    }

    #[inline(always)]
    pub fn unwrap_or(self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }
}

/// Lowercases `c` for literal matching. Besides ASCII, only U+0130 and U+212A
/// lowercase to an ASCII letter, so those two are folded as well.
#[inline(always)]
fn fold_case(c: char) -> char {
    match c {
        '\u{130}' => 'i',
        '\u{212A}' => 'k',
        c => c.to_ascii_lowercase(),
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TriState {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriState::parse(s)
    }
}

impl From<bool> for TriState {
    #[inline(always)]
    fn from(b: bool) -> Self {
        if b { TriState::True } else { TriState::False }
    }
}

impl From<Option<bool>> for TriState {
    fn from(b: Option<bool>) -> Self {
        b.map_or(TriState::None, TriState::from)
    }
}

impl From<TriState> for Option<bool> {
    fn from(ts: TriState) -> Self {
        ts.as_bool()
    }
}
