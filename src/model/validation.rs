use thiserror::Error;

use super::disc::DiscFactor;

/// Validation errors for a submission draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of name, task, and deadline is empty.
    #[error("please fill in all fields")]
    MissingFields,
    /// A score did not parse as an integer in `0..=100`.
    #[error("{factor} score must be a number between 0 and 100")]
    InvalidScore {
        /// The first factor that failed, in D, I, S, C order.
        factor: DiscFactor,
    },
}

/// Parses a raw score input for a factor.
///
/// The input is trimmed and must parse as a whole integer in `0..=100`;
/// trailing garbage (`"50x"`) is rejected.
pub fn parse_score(factor: DiscFactor, raw: &str) -> Result<u8, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|v| (0..=100).contains(v))
        .map(|v| v as u8)
        .ok_or(ValidationError::InvalidScore { factor })
}
