use thiserror::Error;

/// Returned when text is not one of the recognized tristate literals.
///
/// There is exactly one failure mode when parsing, so this carries no data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("bad tristate value")]
pub struct InvalidLiteral;
