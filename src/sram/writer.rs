use super::{raw, Error};
use crate::log;
use core::{cmp::min, marker::PhantomData};
use embedded_io::{ErrorType, Write};

fn verify_byte(offset: usize, byte: u8) -> Result<(), Error> {
    let mut read = [0];
    unsafe { raw::unsafe_read(&mut read, offset) };
    if read[0] == byte {
        Ok(())
    } else {
        log::warn!(
            "SRAM verification failed at offset {offset}: wrote 0x{byte:02x}, read 0x{:02x}",
            read[0]
        );
        Err(Error::WriteFailure)
    }
}

/// A writer on SRAM.
///
/// This type allows writing data on the range specified upon creation. Every byte is read back
/// after it is written, so a missing SRAM chip is reported as [`Error::WriteFailure`].
#[derive(Debug)]
pub struct Writer<'a> {
    offset: usize,
    len: usize,
    lifetime: PhantomData<&'a ()>,
}

impl Writer<'_> {
    /// # Safety
    /// `offset + len` must not exceed [`SIZE`](super::SIZE).
    pub(in crate::sram) unsafe fn new_unchecked(offset: usize, len: usize) -> Self {
        log::info!("Creating SRAM writer at offset {offset} with length {len}");
        Self {
            offset,
            len,
            lifetime: PhantomData,
        }
    }
}

impl ErrorType for Writer<'_> {
    type Error = Error;
}

impl Write for Writer<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.len == 0 && !buf.is_empty() {
            return Err(Error::EndOfWriter);
        }

        let count = min(buf.len(), self.len);
        for (i, &byte) in buf[..count].iter().enumerate() {
            let offset = self.offset + i;
            unsafe { raw::unsafe_write(&[byte], offset) };
            verify_byte(offset, byte)?;
        }
        self.offset += count;
        self.len -= count;
        Ok(count)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
