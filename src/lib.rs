//! Typed access to battery-backed SRAM on Game Boy Advance cartridges.
//!
//! SRAM is a 32KiB region of memory mapped at `0x0E00_0000`, kept alive by a battery on the
//! cartridge. This crate configures the bus timing needed to talk to it, embeds the `SRAM_V113`
//! marker that emulators and flashing tools use to detect the save type, and provides
//! bounds-checked copies of plain data in and out of it.
//!
//! ``` no_run
//! use gba_sram::sram::Sram;
//!
//! #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
//! #[repr(C)]
//! struct Progress {
//!     level: u32,
//!     score: u32,
//! }
//!
//! let mut sram = unsafe { Sram::new() };
//! sram.write_offset(&Progress { level: 3, score: 1200 }, 16);
//!
//! let mut progress = Progress { level: 0, score: 0 };
//! sram.read_offset(&mut progress, 16);
//! ```
//!
//! The wait-state profile used for SRAM is chosen at build time through the `waitstate_4`,
//! `waitstate_3`, `waitstate_2` and `waitstate_8` features. `waitstate_8` is enabled by default;
//! disable default features to pick another one.

#![no_std]
#![cfg_attr(test, no_main)]
#![cfg_attr(test, feature(custom_test_frameworks))]
#![cfg_attr(test, test_runner(gba_test::runner))]
#![cfg_attr(test, reexport_test_harness_main = "test_harness")]

pub mod sram;

mod log;
mod mmio;
mod range;

#[cfg(test)]
#[no_mangle]
pub fn main() {
    let _ = mgba_log::init();
    test_harness()
}
