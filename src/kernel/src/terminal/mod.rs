//! The `dsh` shell loop.
//!
//! Prompts, reads a line through the console session, dispatches it and
//! carries out whatever power transition the command asks for.

use crate::arch::x86_64::{power, VgaSession};
use dexis_console::{Command, Flow};
use dexis_hal::{IoDelay, ScancodeSource};

/// Runs the shell until a command powers the machine down.
pub fn run<S, D>(session: &mut VgaSession, keyboard: &mut S, delay: &mut D) -> !
where
    S: ScancodeSource,
    D: IoDelay,
{
    session.grid_mut().write("\nRunning dsh (DexShell) v0.0.1\n");
    loop {
        session.prompt();
        let line = session.read_line(keyboard, delay);
        let Some(command) = Command::parse(line.as_str()) else {
            continue;
        };
        match command.execute(session.grid_mut()) {
            Flow::Continue => {}
            Flow::Shutdown => power::shutdown(),
            Flow::Reboot => power::reboot(),
        }
    }
}
