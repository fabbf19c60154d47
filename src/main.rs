use std::env;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

/// Environment variable holding the env_logger filter, e.g. `PWGEN_LOG=debug`.
const LOG_ENV: &str = "PWGEN_LOG";

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();
    exits::harden();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    };
    code.into()
}
