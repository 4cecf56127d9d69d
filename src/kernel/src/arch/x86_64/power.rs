//! Machine power control and the port 0x80 I/O delay.

use dexis_hal::IoDelay;
use x86_64::instructions::interrupts;
use x86_64::instructions::port::{Port, PortReadOnly, PortWriteOnly};

/// QEMU/Bochs ACPI PM1a control port.
const ACPI_PM1A_CNT_PORT: u16 = 0x604;

/// SLP_EN with sleep type 5 (soft off).
const ACPI_SHUTDOWN_VALUE: u16 = 0x2000;

/// PS/2 controller status/command port.
const PS2_COMMAND_PORT: u16 = 0x64;

/// Input buffer full bit of the controller status register.
const PS2_INPUT_FULL: u8 = 1 << 1;

/// Controller command that pulses the CPU reset line.
const PS2_PULSE_RESET: u8 = 0xFE;

/// POST diagnostic port, written to burn one I/O cycle.
const IO_DELAY_PORT: u16 = 0x80;

/// Powers the machine off. Halts if the write has no effect.
pub fn shutdown() -> ! {
    let mut port: Port<u16> = Port::new(ACPI_PM1A_CNT_PORT);
    // SAFETY: 0x604 is the ACPI PM1a control block on QEMU's PIIX4/ICH9
    // machines; on other hardware the write is ignored.
    unsafe { port.write(ACPI_SHUTDOWN_VALUE) };
    halt()
}

/// Resets the machine through the keyboard controller. Halts if the reset
/// does not take.
pub fn reboot() -> ! {
    let mut status: PortReadOnly<u8> = PortReadOnly::new(PS2_COMMAND_PORT);
    let mut command: PortWriteOnly<u8> = PortWriteOnly::new(PS2_COMMAND_PORT);
    // SAFETY: The 8042 controller is present on every PC target we boot on.
    // Waiting for an empty input buffer before writing a command is the
    // controller's protocol.
    unsafe {
        while status.read() & PS2_INPUT_FULL != 0 {}
        command.write(PS2_PULSE_RESET);
    }
    halt()
}

/// Disables interrupts and halts forever.
fn halt() -> ! {
    interrupts::disable();
    super::halt_loop()
}

/// Short delay made of writes to the POST port.
pub struct IoWait {
    port: PortWriteOnly<u8>,
}

impl IoWait {
    /// Creates a handle to port 0x80.
    pub const fn new() -> Self {
        IoWait {
            port: PortWriteOnly::new(IO_DELAY_PORT),
        }
    }
}

impl Default for IoWait {
    fn default() -> Self {
        Self::new()
    }
}

impl IoDelay for IoWait {
    fn wait(&mut self) {
        // SAFETY: Port 0x80 is unused after POST; writing it only costs time.
        unsafe { self.port.write(0) };
    }
}
