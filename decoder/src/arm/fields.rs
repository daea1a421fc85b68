use crate::bitwise::Bits;
use crate::family::OpcodeIndex;

/// Sub-fields of a single data transfer table slot, before any validation.
///
/// ```text
/// offset:  7   6   5   4   3   2   1   0
///         [U] [B] [W] [L] [7] [6   5] [4]   <- instruction bit
///         |-variant-| fn  |---shift----|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields {
    /// Bits 5-7: W, B and U from lowest to highest.
    pub variant: u8,

    /// Bit 4: the L bit.
    pub function: bool,

    /// Bits 0-3: instruction bits 4-7.
    pub shift: u8,
}

impl From<OpcodeIndex> for RawFields {
    #[allow(clippy::cast_possible_truncation)]
    fn from(index: OpcodeIndex) -> Self {
        let offset = index.offset();

        Self {
            variant: offset.get_bits(5..=7) as u8,
            function: offset.get_bit(4),
            shift: offset.get_bits(0..=3) as u8,
        }
    }
}
