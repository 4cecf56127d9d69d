//! DexisCore Kernel Entry Point
//!
//! This is the main entry point for the DexisCore kernel.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::fmt::Write;
use core::panic::PanicInfo;
use dexis_common::Color;
use dexis_console::{ConsoleConfig, BUFFER_HEIGHT};
use dexis_kernel::arch::x86_64::{self, vga, IoWait, Ps2Keyboard};
use dexis_kernel::boot;
use dexis_kernel::{serial_println, terminal};

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    dexis_kernel::init();

    let mut session = vga::session(ConsoleConfig::default());
    session.initialize();
    boot::banner::print_banner(session.grid_mut());
    boot::ok(session.grid_mut(), "Serial port initialized");
    boot::ok(session.grid_mut(), "Console ready");

    serial_println!("Kernel loaded and running");

    let mut keyboard = Ps2Keyboard::new();
    let mut delay = IoWait::new();
    terminal::run(&mut session, &mut keyboard, &mut delay)
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    // The session is owned by kernel_main; draw over whatever it left.
    let mut grid = vga::grid();
    grid.set_position(BUFFER_HEIGHT - 2, 0);
    grid.set_color(Color::LightRed, Color::Black);
    grid.write("!!! KERNEL PANIC !!!\n");
    grid.set_color(Color::White, Color::Black);
    let _ = write!(grid, "{}", info);

    x86_64::halt_loop()
}
