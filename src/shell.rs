use std::any::Any;
use std::panic;

use crate::PaintApp;
use crate::config::{self, WINDOW_TITLE};
use crate::error::{PaintError, PaintResult};

/// Printed when the process is interrupted; the drawing is discarded
pub const INTERRUPTED_NOTICE: &str = "Interrupted, drawing not saved.";

/// Makes Ctrl-C (and SIGTERM) end the program at once with status 0,
/// without saving anything.
#[cfg(unix)]
pub fn install_interrupt_handler() -> std::io::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;

    // The listener thread lives until the process exits
    std::thread::Builder::new()
        .name("signal-listener".to_owned())
        .spawn(move || {
            if let Some(sig) = signals.forever().next() {
                log::info!("Received signal {}, exiting", sig);
                println!("{}", INTERRUPTED_NOTICE);
                // Exits from this thread without letting eframe shut down;
                // there is nothing to flush since the drawing is discarded.
                std::process::exit(0);
            }
        })?;

    Ok(())
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() -> std::io::Result<()> {
    log::debug!("Interrupt handling relies on the platform default here");
    Ok(())
}

/// Opens the window and runs the event loop until it is closed.
pub fn run() -> PaintResult<()> {
    eframe::run_native(
        WINDOW_TITLE,
        config::native_options(),
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )?;
    Ok(())
}

/// Like [`run`], but a panic inside the event loop comes back as an error
/// instead of unwinding out of `main`.
pub fn run_guarded() -> PaintResult<()> {
    panic::catch_unwind(run).unwrap_or_else(|payload| Err(PaintError::Panic(panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_owned()
    }
}
