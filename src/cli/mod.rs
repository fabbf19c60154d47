//! Non-interactive mode: everything comes from the command line.

mod context;
mod flags;
mod parse;
mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::entropy;
use crate::exits::{self, ExitCode};
use crate::pass::SecureBufWriter;

/// Run CLI mode and exit with the matching status.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        // clap renders help, version and usage errors itself
        Err(e) => e.exit(),
    };

    let context = match Context::new(flags) {
        Ok(context) => context,
        Err(e) => {
            prompts::usage_error(&e.to_string());
            return ExitCode::Usage;
        }
    };

    let stdout = std::io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());
    match context.run(&mut out, &mut entropy::system()) {
        Ok(()) => ExitCode::Success,
        Err(e) => exits::report(&e),
    }
}
