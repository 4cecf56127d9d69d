//! Test infrastructure for the DexisCore kernel.
//!
//! Bare-metal tests run under QEMU with the isa-debug-exit device and report
//! over serial. Keyboard input is replayed from a script so the console can
//! be driven without a human at the keys.
//!
//! ```rust,ignore
//! #![feature(custom_test_frameworks)]
//! #![test_runner(dexis_kernel::testutil::test_runner)]
//! ```

use crate::serial_println;
use dexis_hal::{IoDelay, ScancodeSource};

/// QEMU exit codes for signaling test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// Exit QEMU with the given exit code.
///
/// QEMU must be started with `-device isa-debug-exit,iobase=0xf4,iosize=0x04`.
/// The process exit status is `(value << 1) | 1`: 33 for `Success`, 35 for
/// `Failed`.
pub fn exit_qemu(exit_code: QemuExitCode) {
    #[cfg(target_arch = "x86_64")]
    {
        use x86_64::instructions::port::Port;

        // SAFETY: Writing to the isa-debug-exit device port is safe when QEMU
        // is configured with this device. It triggers a QEMU exit.
        unsafe {
            let mut port = Port::new(0xf4);
            port.write(exit_code as u32);
        }
    }
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        serial_println!("test {} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// Custom test runner for bare-metal tests.
///
/// Runs all tests and exits QEMU with success if all pass.
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler for test binaries.
///
/// Reports test failure and exits QEMU with failure code.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}

/// Replays a fixed byte sequence in place of the PS/2 port.
///
/// Once the script runs out it reads `0xFF`, which no key produces, and a
/// test that keeps polling past that point fails instead of hanging.
pub struct ScriptedKeyboard {
    script: &'static [u8],
    next: usize,
}

impl ScriptedKeyboard {
    /// Idle polls tolerated after the script ends.
    const IDLE_LIMIT: usize = 1_000;

    /// Creates a keyboard that replays `script` byte by byte.
    pub const fn new(script: &'static [u8]) -> Self {
        ScriptedKeyboard { script, next: 0 }
    }
}

impl ScancodeSource for ScriptedKeyboard {
    fn read_raw(&mut self) -> u8 {
        let byte = self.script.get(self.next).copied().unwrap_or(0xFF);
        self.next += 1;
        assert!(
            self.next <= self.script.len() + Self::IDLE_LIMIT,
            "keyboard script exhausted"
        );
        byte
    }
}

/// An [`IoDelay`] that returns at once.
#[derive(Debug, Default)]
pub struct NoDelay;

impl IoDelay for NoDelay {
    fn wait(&mut self) {}
}
