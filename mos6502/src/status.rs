/// A single bit of the `P` status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum StatusFlag {
    Carry            = 1 << 0,
    Zero             = 1 << 1,
    InterruptDisable = 1 << 2,
    Decimal          = 1 << 3,
    Break            = 1 << 4,
    Unused           = 1 << 5,
    Overflow         = 1 << 6,
    Negative         = 1 << 7,
}

/// `P` immediately after `Reset`: `U` and `I` set, everything else clear.
pub const RESET_STATUS_FLAG: u8 = StatusFlag::Unused as u8 | StatusFlag::InterruptDisable as u8;
