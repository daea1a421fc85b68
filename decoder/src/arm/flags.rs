use std::fmt;

/// L bit (bit 20).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStoreKind {
    Store,
    Load,
}

impl From<bool> for LoadStoreKind {
    fn from(b: bool) -> Self {
        match b {
            false => Self::Store,
            true => Self::Load,
        }
    }
}

impl fmt::Display for LoadStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => f.write_str("str"),
            Self::Load => f.write_str("ldr"),
        }
    }
}

/// B bit (bit 22): there are two different kind of transfer size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReadWriteKind {
    /// A u32 value.
    #[default]
    Word,

    /// A u8 value.
    Byte,
}

impl From<bool> for ReadWriteKind {
    fn from(value: bool) -> Self {
        if value { Self::Byte } else { Self::Word }
    }
}

/// P bit (bit 24).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indexing {
    /// Add offset after transfer.
    Post,

    /// Add offset before transfer.
    Pre,
}

impl From<bool> for Indexing {
    fn from(state: bool) -> Self {
        match state {
            false => Self::Post,
            true => Self::Pre,
        }
    }
}

/// U bit (bit 23).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offsetting {
    /// Substract the offset from base.
    Down,

    /// Add the offset to base.
    Up,
}

impl From<bool> for Offsetting {
    fn from(state: bool) -> Self {
        match state {
            false => Self::Down,
            true => Self::Up,
        }
    }
}

/// Shift type applied to the offset register (bits 5-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    Lsl,
    Lsr,
    Asr,
    Ror,
}

impl From<u8> for ShiftKind {
    fn from(op: u8) -> Self {
        match op & 0b11 {
            0 => Self::Lsl,
            1 => Self::Lsr,
            2 => Self::Asr,
            _ => Self::Ror,
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lsl => f.write_str("LSL"),
            Self::Lsr => f.write_str("LSR"),
            Self::Asr => f.write_str("ASR"),
            Self::Ror => f.write_str("ROR"),
        }
    }
}

/// Where the shift amount comes from (bit 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftSource {
    /// 5-bit amount in bits 7-11. An amount of zero has its own meaning
    /// per shift kind (`LSR #32`, `ASR #32`, `RRX`).
    Immediate,

    /// Amount read from the bottom byte of `Rs` (bits 8-11).
    Register,
}

impl From<bool> for ShiftSource {
    fn from(b: bool) -> Self {
        match b {
            false => Self::Immediate,
            true => Self::Register,
        }
    }
}
