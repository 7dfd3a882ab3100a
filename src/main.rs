#![warn(clippy::all, rust_2018_idioms)]

use std::process::ExitCode;

use sketchpad::shell;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = shell::install_interrupt_handler() {
        log::warn!("Could not install interrupt handler: {}", err);
    }

    match shell::run_guarded() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            println!("An error occurred: {}", err);
            ExitCode::FAILURE
        }
    }
}
