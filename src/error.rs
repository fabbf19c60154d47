//! Error types shared by the generator and both front ends.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("You must enable at least one character class or add custom characters!")]
    NoCharacterClass,

    #[error(
        "The duplicate limit {limit} is too low for the given character set and password length. \
         You need to allow at least {minimum} duplicate characters."
    )]
    LimitTooLow { limit: usize, minimum: usize },

    #[error("The character set is empty, every character was blacklisted.")]
    EmptyCharset,

    #[error(
        "Ran out of characters after {produced} of {length}: \
         the duplicate limit must be at least {minimum} for this length."
    )]
    Exhausted {
        produced: usize,
        length: usize,
        minimum: usize,
    },

    #[error("A password of {length} characters is too long to hold in memory.")]
    TooLong { length: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors caused by the requested settings rather than by the environment.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::NoCharacterClass | Error::LimitTooLow { .. } | Error::EmptyCharset
        )
    }

    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
