//! Unchecked byte access to SRAM.
//!
//! SRAM sits on an 8-bit bus, so everything here is done one volatile byte access at a time. Wider
//! accesses would only see the same byte repeated.

use super::SRAM_MEMORY;

/// Copies `destination.len()` bytes starting at SRAM + `offset` into `destination`.
///
/// # Safety
/// `offset + destination.len()` must not exceed [`SIZE`](super::SIZE).
pub(super) unsafe fn unsafe_read(destination: &mut [u8], offset: usize) {
    let source = unsafe { SRAM_MEMORY.add(offset) };
    for (i, byte) in destination.iter_mut().enumerate() {
        *byte = unsafe { source.add(i).read_volatile() };
    }
}

/// Copies `source` into SRAM starting at SRAM + `offset`.
///
/// # Safety
/// `offset + source.len()` must not exceed [`SIZE`](super::SIZE).
pub(super) unsafe fn unsafe_write(source: &[u8], offset: usize) {
    let destination = unsafe { SRAM_MEMORY.add(offset) };
    for (i, &byte) in source.iter().enumerate() {
        unsafe { destination.add(i).write_volatile(byte) };
    }
}

/// Fills `len` bytes starting at SRAM + `offset` with `value`.
///
/// # Safety
/// `offset + len` must not exceed [`SIZE`](super::SIZE).
pub(super) unsafe fn unsafe_set_bytes(value: u8, len: usize, offset: usize) {
    let destination = unsafe { SRAM_MEMORY.add(offset) };
    for i in 0..len {
        unsafe { destination.add(i).write_volatile(value) };
    }
}
