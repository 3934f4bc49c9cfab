use core::{
    fmt,
    fmt::{Display, Formatter},
};
use embedded_io::ErrorKind;

/// An error that can occur when accessing SRAM memory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested access does not fit within SRAM.
    ///
    /// Nothing is read or written when this is returned.
    OutOfBounds {
        /// Offset from the start of SRAM at which the access was requested.
        offset: usize,
        /// Number of bytes requested.
        len: usize,
    },

    /// Data written was unable to be verified.
    ///
    /// This usually means there is no SRAM chip on the cartridge.
    WriteFailure,

    /// The writer has exhausted all of its space.
    ///
    /// This indicates that the range provided when creating the writer has been completely
    /// exhausted.
    EndOfWriter,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { offset, len } => write!(
                formatter,
                "size and offset are too high: {len} bytes at offset {offset} exceeds SRAM size of {}",
                super::SIZE
            ),
            Self::WriteFailure => {
                formatter.write_str("unable to verify that data was written correctly")
            }
            Self::EndOfWriter => formatter.write_str("the writer has reached the end of its range"),
        }
    }
}

impl core::error::Error for Error {}

impl embedded_io::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds { .. } => ErrorKind::InvalidInput,
            Self::WriteFailure => ErrorKind::NotConnected,
            Self::EndOfWriter => ErrorKind::WriteZero,
        }
    }
}
