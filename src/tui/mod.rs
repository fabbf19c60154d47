//! Interactive mode.

mod input;
mod options;
mod text;

use std::io;

use log::debug;

pub use input::Prompter;
pub use options::*;

use crate::entropy;
use crate::error::Error;
use crate::exits::{self, ExitCode};
use crate::pass::SecureBufWriter;

/// Run interactive mode on stdin/stdout.
pub fn run() -> ExitCode {
    let stdin = io::stdin();
    let mut prompter =
        Prompter::new(stdin.lock(), SecureBufWriter::new(io::stdout())).errors_to_stderr();

    match session(&mut prompter, &mut entropy::system()) {
        Ok(()) => ExitCode::Success,
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("input closed, leaving interactive mode");
            ExitCode::Success
        }
        Err(e) => exits::report(&e),
    }
}
