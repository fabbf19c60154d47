//! Exit handling: process hardening and exit statuses.

use log::debug;

use crate::error::Error;
use crate::terminal::print_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Failure,
    Usage,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => std::process::ExitCode::SUCCESS,
            ExitCode::Failure => std::process::ExitCode::FAILURE,
            ExitCode::Usage => std::process::ExitCode::from(2),
        }
    }
}

/// Keep generated passwords out of core dumps and away from ptrace.
/// Call this early in main().
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Report a failed run and pick the exit status.
/// A closed pipe (e.g. `pwgen 12 -n 1000 | head`) is not an error.
pub fn report(err: &Error) -> ExitCode {
    if err.is_broken_pipe() {
        debug!("stdout closed, stopping");
        return ExitCode::Success;
    }
    print_error(&err.to_string());
    if err.is_usage() {
        ExitCode::Usage
    } else {
        ExitCode::Failure
    }
}
