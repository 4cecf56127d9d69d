//! Built-in `dsh` shell commands.
//!
//! Dispatch is an exact match on the committed line. Commands only write to a
//! [`Console`]; anything that touches hardware beyond that is reported back as
//! a [`Flow`] for the caller to carry out.

use dexis_hal::Console;

const HELP_HINT: &str = "Type 'help' for available commands list\n\n";

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Power the machine off.
    Shutdown,
    /// Reset the machine.
    Reboot,
    /// Clear the screen.
    Cleanup,
    /// Show version information.
    Sysabout,
    /// Echo text.
    Echo {
        /// The text to echo.
        text: &'a str,
    },
    /// Display help information.
    Help,
    /// Unknown command.
    Unknown(&'a str),
}

/// What the caller must do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Power off and halt.
    Shutdown,
    /// Reset and halt.
    Reboot,
}

impl<'a> Command<'a> {
    /// Parses a committed line. Returns `None` for an empty line.
    pub fn parse(line: &'a str) -> Option<Command<'a>> {
        let command = match line {
            "" => return None,
            "shutdown" => Command::Shutdown,
            "reboot" => Command::Reboot,
            "cleanup" => Command::Cleanup,
            "sysabout" => Command::Sysabout,
            "help" => Command::Help,
            "echo" => Command::Echo { text: "" },
            other => match other.strip_prefix("echo ") {
                Some(text) => Command::Echo { text },
                None => Command::Unknown(other),
            },
        };
        Some(command)
    }

    /// Executes a command against the console.
    pub fn execute<T: Console>(self, console: &mut T) -> Flow {
        log::debug!("dispatch {:?}", self);
        match self {
            Command::Shutdown => {
                console.write_str("\nShutting down...\n");
                log::info!("Shutting down...");
                Flow::Shutdown
            }
            Command::Reboot => {
                console.write_str("\nRebooting...\n");
                log::info!("Rebooting...");
                Flow::Reboot
            }
            Command::Cleanup => {
                console.clear();
                Flow::Continue
            }
            Command::Sysabout => {
                console.write_str("\ndsh (DexisShell) v0.1.0\n");
                console.write_str("Author: ShLKV (The Shlyukov)\n");
                console.write_str("License: MIT\n");
                console.write_str("https://github.com/TheShlyukov/DexisCore");
                console.write_str("\n");
                console.write_str(HELP_HINT);
                Flow::Continue
            }
            Command::Echo { text } => {
                console.write_str("\n");
                console.write_str(text);
                console.write_str("\n\n");
                Flow::Continue
            }
            Command::Help => {
                console.write_str("\nAvailable commands:\n");
                console.write_str("shutdown - shutdown system\n");
                console.write_str("reboot - reboot system\n");
                console.write_str("cleanup - clear terminal\n");
                console.write_str("sysabout - about system\n");
                console.write_str("echo - echo string\n");
                console.write_str("help - available commands list\n\n");
                Flow::Continue
            }
            Command::Unknown(cmd) => {
                log::warn!("unknown command: {}", cmd);
                console.write_str("\nUnknown command!\n");
                console.write_str(HELP_HINT);
                Flow::Continue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{memory_grid, row_text};

    /// Console double that keeps the exact write sequence.
    #[derive(Default)]
    struct Transcript {
        writes: Vec<String>,
        clears: usize,
    }

    impl Console for Transcript {
        fn write_str(&mut self, s: &str) {
            self.writes.push(s.to_string());
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn test_parse_exact_names() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("cleanup"), Some(Command::Cleanup));
        assert_eq!(Command::parse("sysabout"), Some(Command::Sysabout));
        assert_eq!(Command::parse("shutdown"), Some(Command::Shutdown));
        assert_eq!(Command::parse("reboot"), Some(Command::Reboot));
        assert_eq!(Command::parse("help "), Some(Command::Unknown("help ")));
        assert_eq!(Command::parse("HELP"), Some(Command::Unknown("HELP")));
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_parse_echo_forms() {
        assert_eq!(Command::parse("echo"), Some(Command::Echo { text: "" }));
        assert_eq!(Command::parse("echo "), Some(Command::Echo { text: "" }));
        assert_eq!(
            Command::parse("echo hello  world"),
            Some(Command::Echo { text: "hello  world" })
        );
        assert_eq!(Command::parse("echoes"), Some(Command::Unknown("echoes")));
    }

    #[test]
    fn test_echo_write_sequence() {
        let mut console = Transcript::default();
        let flow = Command::parse("echo hello")
            .expect("non-empty line")
            .execute(&mut console);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(console.writes, ["\n", "hello", "\n\n"]);
    }

    #[test]
    fn test_echo_renders_on_grid() {
        let mut grid = memory_grid();
        grid.write("dsh> echo hello\n");
        Command::Echo { text: "hello" }.execute(&mut grid);

        assert_eq!(row_text(&grid, 1), "");
        assert_eq!(row_text(&grid, 2), "hello");
        assert_eq!(grid.position(), (4, 0));
    }

    #[test]
    fn test_unknown_command_message() {
        let mut console = Transcript::default();
        Command::Unknown("frobnicate").execute(&mut console);
        assert_eq!(
            console.writes.concat(),
            "\nUnknown command!\nType 'help' for available commands list\n\n"
        );
    }

    #[test]
    fn test_cleanup_clears() {
        let mut console = Transcript::default();
        assert_eq!(Command::Cleanup.execute(&mut console), Flow::Continue);
        assert_eq!(console.clears, 1);
        assert!(console.writes.is_empty());
    }

    #[test]
    fn test_power_commands_report_flow() {
        let mut console = Transcript::default();
        assert_eq!(Command::Shutdown.execute(&mut console), Flow::Shutdown);
        assert_eq!(Command::Reboot.execute(&mut console), Flow::Reboot);
        assert_eq!(console.writes, ["\nShutting down...\n", "\nRebooting...\n"]);
    }

    #[test]
    fn test_sysabout_text() {
        let mut console = Transcript::default();
        assert_eq!(Command::Sysabout.execute(&mut console), Flow::Continue);
        assert_eq!(
            console.writes.concat(),
            "\ndsh (DexisShell) v0.1.0\nAuthor: ShLKV (The Shlyukov)\nLicense: MIT\n\
             https://github.com/TheShlyukov/DexisCore\nType 'help' for available commands list\n\n"
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut console = Transcript::default();
        Command::Help.execute(&mut console);
        let text = console.writes.concat();
        for name in ["shutdown", "reboot", "cleanup", "sysabout", "echo", "help"] {
            assert!(text.contains(name), "help is missing {}", name);
        }
    }
}
