/// Number of cycles a bus access to SRAM takes.
///
/// The discriminants are the values of the SRAM wait control bits (bits 0-1) of `WAITCNT`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum WaitState {
    /// 4 cycles.
    _4 = 0,
    /// 3 cycles.
    _3 = 1,
    /// 2 cycles.
    _2 = 2,
    /// 8 cycles.
    ///
    /// This is the profile commercial cartridges use, and the only one that is reliable across
    /// SRAM chips.
    _8 = 3,
}

impl WaitState {
    #[cfg_attr(not(any(test, feature = "log")), allow(dead_code))]
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::_4,
            1 => Self::_3,
            2 => Self::_2,
            _ => Self::_8,
        }
    }

    /// Returns the number of cycles taken by a single SRAM access with this profile.
    pub const fn cycles(self) -> u8 {
        match self {
            Self::_4 => 4,
            Self::_3 => 3,
            Self::_2 => 2,
            Self::_8 => 8,
        }
    }
}

#[cfg(not(any(
    feature = "waitstate_4",
    feature = "waitstate_3",
    feature = "waitstate_2",
    feature = "waitstate_8"
)))]
compile_error!(
    "no SRAM wait state selected: enable one of the `waitstate_4`, `waitstate_3`, `waitstate_2` or `waitstate_8` features"
);

#[cfg(any(
    all(
        feature = "waitstate_4",
        any(
            feature = "waitstate_3",
            feature = "waitstate_2",
            feature = "waitstate_8"
        )
    ),
    all(
        feature = "waitstate_3",
        any(feature = "waitstate_2", feature = "waitstate_8")
    ),
    all(feature = "waitstate_2", feature = "waitstate_8"),
))]
compile_error!(
    "multiple SRAM wait states selected: enable only one of the `waitstate_*` features (disable default features to select something other than `waitstate_8`)"
);

/// The wait state applied to SRAM by [`init()`](super::init).
#[cfg(feature = "waitstate_4")]
pub const WAITSTATE: WaitState = WaitState::_4;
/// The wait state applied to SRAM by [`init()`](super::init).
#[cfg(all(feature = "waitstate_3", not(feature = "waitstate_4")))]
pub const WAITSTATE: WaitState = WaitState::_3;
/// The wait state applied to SRAM by [`init()`](super::init).
#[cfg(all(
    feature = "waitstate_2",
    not(any(feature = "waitstate_4", feature = "waitstate_3"))
))]
pub const WAITSTATE: WaitState = WaitState::_2;
/// The wait state applied to SRAM by [`init()`](super::init).
#[cfg(not(any(
    feature = "waitstate_4",
    feature = "waitstate_3",
    feature = "waitstate_2"
)))]
pub const WAITSTATE: WaitState = WaitState::_8;
