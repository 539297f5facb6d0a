//! Errors that can occur during case conversion.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Input was not a string (only reachable through [`crate::convert_value`]).
    #[error("Input must be a string")]
    NotAString,

    /// Input was empty or whitespace only.
    #[error("Input cannot be empty or whitespace only")]
    EmptyInput,
}

impl ConvertError {
    /// Stable name of the failure, for machine-readable reports.
    pub fn kind(self) -> &'static str {
        match self {
            Self::NotAString => "TypeError",
            Self::EmptyInput => "EmptyInputError",
        }
    }
}
