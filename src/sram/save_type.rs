use core::{
    fmt,
    fmt::{Debug, Display, Formatter},
};

const MARKER: &str = "SRAM_V113";
const PADDED_LEN: usize = (MARKER.len() + 1).next_multiple_of(4);

const fn pad(marker: &str) -> [u8; PADDED_LEN] {
    let mut bytes = [0; PADDED_LEN];
    let marker = marker.as_bytes();
    let mut i = 0;
    while i < marker.len() {
        bytes[i] = marker[i];
        i += 1;
    }
    bytes
}

/// The save-type signature embedded in the ROM.
///
/// Emulators and flashing tools don't read the cartridge header to find out which backup media a
/// game uses. Instead, they scan the ROM for a marker string. For SRAM that string is `SRAM_V`
/// followed by a library version, word-aligned and NUL terminated. The exact bytes are relied on
/// by third-party tooling and must not change.
#[repr(C, align(4))]
pub struct SaveType {
    bytes: [u8; PADDED_LEN],
}

// `#[used]` keeps the marker in the image even though nothing reads it at runtime.
#[used]
pub(super) static SAVE_TYPE: SaveType = SaveType {
    bytes: pad(MARKER),
};

impl SaveType {
    /// Returns the marker bytes, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..MARKER.len()]
    }

    /// Returns the marker as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: the bytes were copied from `MARKER`, which is ASCII.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the address of the marker within the ROM image.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

impl Debug for SaveType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("SaveType").field(&self.as_str()).finish()
    }
}

impl Display for SaveType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
