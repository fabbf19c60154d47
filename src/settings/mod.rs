//! Password generation settings.

use log::debug;

use crate::error::{Error, Result};
use crate::pass::charset::{CharClasses, Charset};
use crate::pass::{feasible, minimum_duplicate_limit};

pub const DEFAULT_LENGTH: usize = 12;
pub const DEFAULT_MAX_DUPLICATE: usize = 0;

/// Fully resolved request, shared by the interactive and batch front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    /// 0 means no limit.
    pub max_duplicate: usize,
    pub amount: usize,
    pub classes: CharClasses,
    pub additional: String,
    pub blacklist: String,
    pub quiet: bool,
}

impl Settings {
    pub fn charset(&self) -> Charset {
        Charset::build(&self.classes, &self.additional, &self.blacklist)
    }

    /// At least one class or custom characters must be requested.
    pub fn check_sources(&self) -> Result<()> {
        if self.classes.any() || !self.additional.is_empty() {
            Ok(())
        } else {
            Err(Error::NoCharacterClass)
        }
    }

    /// Reject settings that could never produce a password, before generating.
    pub fn validate(&self, charset: &Charset) -> Result<()> {
        self.check_sources()?;
        if charset.is_empty() && self.length > 0 {
            return Err(Error::EmptyCharset);
        }
        if !feasible(charset.len(), self.length, self.max_duplicate) {
            return Err(Error::LimitTooLow {
                limit: self.max_duplicate,
                minimum: minimum_duplicate_limit(self.length, charset.len()),
            });
        }
        debug!(
            "settings ok: length {}, charset {} chars, max duplicate {}, amount {}",
            self.length,
            charset.len(),
            self.max_duplicate,
            self.amount
        );
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            max_duplicate: DEFAULT_MAX_DUPLICATE,
            amount: 1,
            classes: CharClasses::all(),
            additional: String::new(),
            blacklist: String::new(),
            quiet: false,
        }
    }
}
