use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing usable as a first or last name remained once whitespace,
    /// parenthetical asides, the salutation and the suffix were removed.
    #[error("no name provided")]
    Empty,
}
