#![no_std]
#![no_main]

extern crate gba;

use bytemuck::{Pod, Zeroable};
use core::ops::Range;
use deranged::RangedUsize;
use embedded_io::{Read, Write};
use gba_sram::sram::Sram;
use log::{error, info};
use mgba_log::fatal;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    #[cfg(debug_assertions)]
    {
        error!("{}", info);
        fatal!("Halting due to panic. See logs for `PanicInfo`.");
    }
    loop {}
}

#[no_mangle]
pub fn __sync_synchronize() {}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Save {
    level: u32,
    high_score: u32,
}

const SAVE_OFFSET: usize = 64;

#[no_mangle]
pub fn main() {
    mgba_log::init().expect("must be running in mGBA");

    let mut sram = unsafe { Sram::new() };
    info!("save type: {}", sram.save_type());

    // Typed round trip.
    let save = Save {
        level: 7,
        high_score: 0xDEAD_BEEF,
    };
    sram.write_offset(&save, SAVE_OFFSET);
    let mut loaded = Save::zeroed();
    sram.read_offset(&mut loaded, SAVE_OFFSET);

    // Streaming round trip.
    const RANGE: Range<RangedUsize<0, 32767>> =
        unsafe { RangedUsize::new_unchecked(0)..RangedUsize::new_unchecked(4) };
    let write = &[1, 2, 3, 4];
    sram.writer(RANGE).write(write).expect("failed to write");
    let mut read = [0; 4];
    sram.reader(RANGE).read(&mut read).expect("failed to read");

    if loaded == save && read == *write {
        info!("success");
    } else {
        info!("failed");
    }
}
