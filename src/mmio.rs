use crate::sram::WaitState;

pub(crate) const WAITCNT: *mut WaitstateControl = 0x0400_0204 as *mut WaitstateControl;
pub(crate) const IME: *mut bool = 0x0400_0208 as *mut bool;

const SRAM_WAITSTATE_MASK: u16 = 0b0000_0000_0000_0011;

#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub(crate) struct WaitstateControl(u16);

impl WaitstateControl {
    #[cfg_attr(not(any(test, feature = "log")), allow(dead_code))]
    pub(crate) fn sram_waitstate(self) -> WaitState {
        WaitState::from_bits((self.0 & SRAM_WAITSTATE_MASK) as u8)
    }

    /// Replaces only the SRAM wait control bits; game pak and prefetch settings are left alone.
    pub(crate) fn set_sram_waitstate(&mut self, waitstate: WaitState) {
        self.0 = (self.0 & !SRAM_WAITSTATE_MASK) | waitstate as u16;
    }
}
