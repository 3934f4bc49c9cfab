use super::raw;
use core::{cmp::min, convert::Infallible, marker::PhantomData};
use embedded_io::{ErrorType, Read};

/// A reader on SRAM.
///
/// This type allows reading data over the range specified upon creation. Once the range is
/// exhausted, reads return `Ok(0)`.
#[derive(Debug)]
pub struct Reader<'a> {
    offset: usize,
    len: usize,
    lifetime: PhantomData<&'a ()>,
}

impl Reader<'_> {
    /// # Safety
    /// `offset + len` must not exceed [`SIZE`](super::SIZE).
    pub(in crate::sram) unsafe fn new_unchecked(offset: usize, len: usize) -> Self {
        Self {
            offset,
            len,
            lifetime: PhantomData,
        }
    }
}

impl ErrorType for Reader<'_> {
    type Error = Infallible;
}

impl Read for Reader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let count = min(buf.len(), self.len);
        unsafe { raw::unsafe_read(&mut buf[..count], self.offset) };
        self.offset += count;
        self.len -= count;
        Ok(count)
    }
}
