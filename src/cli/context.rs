//! CLI context - bundles resolved settings and the output sink.

use std::io::Write;

use log::debug;

use super::{CliFlags, prompts, quiet};
use crate::entropy::RandomSource;
use crate::error::Result;
use crate::pass::{self, Charset, output};
use crate::settings::Settings;

/// Batch sizes above this get a warning when printed to a terminal.
const TERMINAL_BATCH_WARN: usize = 1_000;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    charset: Charset,
}

impl Context {
    /// Resolve flags into settings and validate them before anything is generated.
    pub fn new(flags: CliFlags) -> Result<Self> {
        let settings = Settings::from(flags);
        let charset = settings.charset();
        settings.validate(&charset)?;
        Ok(Self { settings, charset })
    }

    /// Print the header (unless quiet) and then the passwords.
    pub fn run<W: Write, R: RandomSource>(&self, out: &mut W, rng: &mut R) -> Result<()> {
        quiet::set(self.settings.quiet);
        debug!("batch of {} passwords", self.settings.amount);

        if !self.settings.quiet {
            output::write_header(out, &self.settings, &self.charset)?;
        }
        if self.settings.amount > TERMINAL_BATCH_WARN && quiet::is_terminal() {
            prompts::many_to_terminal(self.settings.amount);
        }
        pass::generate_batch(out, &self.settings, &self.charset, rng)
    }
}
