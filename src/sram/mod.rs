//! SRAM backup memory.
//!
//! SRAM only comes in a single size: 32KiB. It is mapped directly into the address space at
//! `0x0E00_0000` and accessed one byte at a time over an 8-bit bus.
//!
//! Create an [`Sram`] with [`Sram::new()`] to configure the SRAM wait state and gain access to the
//! memory. From there, plain-data values can be copied in and out with [`Sram::read_offset()`] and
//! [`Sram::write_offset()`], regions can be filled with [`Sram::clear_offset()`] and
//! [`Sram::set_bytes_offset()`], and [`Sram::reader()`] and [`Sram::writer()`] give streaming access
//! over a range through [`embedded_io`].
//!
//! Only types implementing [`bytemuck::Pod`] can be stored. Storing a type larger than SRAM is a
//! build failure. Accessing outside of SRAM at runtime panics, unless the `try_` variant of the
//! method is used. In both cases nothing is read or written.

mod error;
mod raw;
mod reader;
mod save_type;
mod waitstate;
mod writer;

pub use error::Error;
pub use reader::Reader;
pub use save_type::SaveType;
pub use waitstate::{WaitState, WAITSTATE};
pub use writer::Writer;

use crate::{
    log,
    mmio::{IME, WAITCNT},
    range::translate_range,
};
use bytemuck::Pod;
use core::{mem::size_of, ops::RangeBounds};
use deranged::RangedUsize;
use save_type::SAVE_TYPE;

const SRAM_MEMORY: *mut u8 = 0x0e00_0000 as *mut u8;

/// Total size of SRAM, in bytes.
pub const SIZE: usize = 32 * 1024;

/// Returns the total size of SRAM, in bytes.
#[must_use]
pub const fn size() -> usize {
    SIZE
}

/// Configures the SRAM wait state and returns the embedded save-type signature.
///
/// The wait state written is [`WAITSTATE`], selected at build time. Only the SRAM wait control
/// bits of `WAITCNT` are touched. Calling this again simply applies the same value again.
///
/// # Safety
/// Must have exclusive ownership of WAITCNT’s SRAM wait control setting.
pub unsafe fn init() -> &'static SaveType {
    let mut waitstate_control = unsafe { WAITCNT.read_volatile() };
    log::info!(
        "Configuring SRAM wait state: {} cycles (was {} cycles)",
        WAITSTATE.cycles(),
        waitstate_control.sram_waitstate().cycles()
    );
    waitstate_control.set_sram_waitstate(WAITSTATE);
    unsafe { WAITCNT.write_volatile(waitstate_control) };

    &SAVE_TYPE
}

fn check_bounds(offset: usize, len: usize) -> Result<(), Error> {
    match offset.checked_add(len) {
        Some(end) if end <= SIZE => Ok(()),
        _ => {
            log::warn!("Rejected SRAM access of {len} bytes at offset {offset}");
            Err(Error::OutOfBounds { offset, len })
        }
    }
}

/// Access to SRAM backup.
#[derive(Debug)]
pub struct Sram {
    /// As this struct maintains ownership of SRAM memory and WAITCNT's SRAM wait control setting,
    /// we want to make sure it can only be constructed through its `unsafe` `new()` associated
    /// function.
    _private: (),
}

impl Sram {
    /// Creates an accessor to the SRAM backup.
    ///
    /// This runs [`init()`], so the SRAM wait state is configured before any access.
    ///
    /// # Safety
    /// Must have exclusive ownership of both SRAM memory and WAITCNT’s SRAM wait control setting
    /// for the duration of its lifetime.
    pub unsafe fn new() -> Self {
        unsafe { init() };

        Self { _private: () }
    }

    /// Returns the save-type signature embedded in the ROM.
    pub fn save_type(&self) -> &'static SaveType {
        &SAVE_TYPE
    }

    /// Returns the total size of SRAM, in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        SIZE
    }

    /// Copies the start of SRAM into `destination`.
    pub fn read<T: Pod>(&self, destination: &mut T) {
        const { assert!(size_of::<T>() <= SIZE, "type is larger than SRAM") };

        unsafe { raw::unsafe_read(bytemuck::bytes_of_mut(destination), 0) };
    }

    /// Copies SRAM starting at `offset` into `destination`.
    ///
    /// # Panics
    /// If `offset + size_of::<T>()` exceeds [`SIZE`]. Nothing is copied in that case.
    #[track_caller]
    pub fn read_offset<T: Pod>(&self, destination: &mut T, offset: usize) {
        if let Err(error) = self.try_read_offset(destination, offset) {
            panic!("{error}");
        }
    }

    /// Copies SRAM starting at `offset` into `destination`, failing if the value doesn't fit.
    pub fn try_read_offset<T: Pod>(
        &self,
        destination: &mut T,
        offset: usize,
    ) -> Result<(), Error> {
        const { assert!(size_of::<T>() <= SIZE, "type is larger than SRAM") };

        let bytes = bytemuck::bytes_of_mut(destination);
        check_bounds(offset, bytes.len())?;
        unsafe { raw::unsafe_read(bytes, offset) };
        Ok(())
    }

    /// Copies `source` to the start of SRAM.
    ///
    /// Whether `T` can be stored is decided at build time. Types that are not [`Pod`], such as
    /// structs with padding, are rejected:
    ///
    /// ``` compile_fail
    /// use gba_sram::sram::Sram;
    ///
    /// #[derive(Clone, Copy)]
    /// #[repr(C)]
    /// struct Padded {
    ///     flag: u8,
    ///     value: u32,
    /// }
    ///
    /// let mut sram = unsafe { Sram::new() };
    /// sram.write(&Padded { flag: 1, value: 2 });
    /// ```
    ///
    /// So are types larger than SRAM:
    ///
    /// ``` compile_fail
    /// use gba_sram::sram::Sram;
    ///
    /// let mut sram = unsafe { Sram::new() };
    /// sram.write(&[0u64; 4097]);
    /// ```
    pub fn write<T: Pod>(&mut self, source: &T) {
        const { assert!(size_of::<T>() <= SIZE, "type is larger than SRAM") };

        unsafe { raw::unsafe_write(bytemuck::bytes_of(source), 0) };
    }

    /// Copies `source` into SRAM starting at `offset`.
    ///
    /// # Panics
    /// If `offset + size_of::<T>()` exceeds [`SIZE`]. Nothing is written in that case.
    #[track_caller]
    pub fn write_offset<T: Pod>(&mut self, source: &T, offset: usize) {
        if let Err(error) = self.try_write_offset(source, offset) {
            panic!("{error}");
        }
    }

    /// Copies `source` into SRAM starting at `offset`, failing if the value doesn't fit.
    pub fn try_write_offset<T: Pod>(&mut self, source: &T, offset: usize) -> Result<(), Error> {
        const { assert!(size_of::<T>() <= SIZE, "type is larger than SRAM") };

        let bytes = bytemuck::bytes_of(source);
        check_bounds(offset, bytes.len())?;
        unsafe { raw::unsafe_write(bytes, offset) };
        Ok(())
    }

    /// Fills the first `bytes` bytes of SRAM with zero.
    ///
    /// # Panics
    /// If `bytes` exceeds [`SIZE`].
    #[track_caller]
    pub fn clear(&mut self, bytes: usize) {
        self.clear_offset(bytes, 0);
    }

    /// Fills `bytes` bytes of SRAM starting at `offset` with zero.
    ///
    /// # Panics
    /// If `offset + bytes` exceeds [`SIZE`]. Nothing is written in that case.
    #[track_caller]
    pub fn clear_offset(&mut self, bytes: usize, offset: usize) {
        self.set_bytes_offset(0, bytes, offset);
    }

    /// Fills `bytes` bytes of SRAM starting at `offset` with zero, failing if the range doesn't
    /// fit.
    pub fn try_clear_offset(&mut self, bytes: usize, offset: usize) -> Result<(), Error> {
        self.try_set_bytes_offset(0, bytes, offset)
    }

    /// Fills the first `bytes` bytes of SRAM with `value`.
    ///
    /// # Panics
    /// If `bytes` exceeds [`SIZE`].
    #[track_caller]
    pub fn set_bytes(&mut self, value: u8, bytes: usize) {
        self.set_bytes_offset(value, bytes, 0);
    }

    /// Fills `bytes` bytes of SRAM starting at `offset` with `value`.
    ///
    /// # Panics
    /// If `offset + bytes` exceeds [`SIZE`]. Nothing is written in that case.
    #[track_caller]
    pub fn set_bytes_offset(&mut self, value: u8, bytes: usize, offset: usize) {
        if let Err(error) = self.try_set_bytes_offset(value, bytes, offset) {
            panic!("{error}");
        }
    }

    /// Fills `bytes` bytes of SRAM starting at `offset` with `value`, failing if the range doesn't
    /// fit.
    pub fn try_set_bytes_offset(
        &mut self,
        value: u8,
        bytes: usize,
        offset: usize,
    ) -> Result<(), Error> {
        check_bounds(offset, bytes)?;
        unsafe { raw::unsafe_set_bytes(value, bytes, offset) };
        Ok(())
    }

    /// Runs `f` with interrupts disabled.
    ///
    /// SRAM access is not synchronized in any way. If interrupt handlers also touch SRAM, wrap
    /// main-thread accesses in this. The previous interrupt master enable is restored afterwards.
    pub fn with_interrupts_disabled<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous_ime = unsafe { IME.read_volatile() };
        unsafe { IME.write_volatile(false) };
        log::debug!("Disabled interrupts for SRAM access");

        let result = f(self);

        unsafe { IME.write_volatile(previous_ime) };
        result
    }

    /// Returns a reader over the given range.
    pub fn reader<'a, 'b, Range>(&'a self, range: Range) -> Reader<'b>
    where
        Range: RangeBounds<RangedUsize<0, 32767>>,
        'a: 'b,
    {
        let (offset, len) = translate_range(range);
        unsafe { Reader::new_unchecked(offset, len) }
    }

    /// Returns a writer over the given range.
    pub fn writer<'a, 'b, Range>(&'a mut self, range: Range) -> Writer<'b>
    where
        Range: RangeBounds<RangedUsize<0, 32767>>,
        'a: 'b,
    {
        let (offset, len) = translate_range(range);
        unsafe { Writer::new_unchecked(offset, len) }
    }
}
