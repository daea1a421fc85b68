//! # Table Families
//!
//! A table family is one dense, index-addressed dispatch table. Each family
//! fixes how wide its index is, where its first slot sits inside the larger
//! decode space and how far apart consecutive slots are when annotated.
//!
//! | Family                  | Domain | Base  | Step | Index bits |
//! |-------------------------|--------|-------|------|------------|
//! | `ArmPrimary`            | 4096   | 0x000 | 1    | 12         |
//! | `ArmSdtRegisterOffset`  | 256    | 0x600 | 1    | 8          |
//! | `ArmSdtPreIndexed`      | 256    | 0x700 | 1    | 8          |
//! | `ThumbWide`             | 1024   | 0x000 | 4    | 10         |
//! | `ThumbNarrow`           | 256    | 0x000 | 1    | 8          |
//!
//! ## ARM decode index
//!
//! The 12-bit ARM index packs the bits of the instruction that tell
//! instruction classes apart:
//!
//! ```text
//!  31-28  27-20          19-8         7-4      3-0
//! [Cond] [index 11-4]  [..........]  [idx 3-0] [..]
//! ```
//!
//! Both single data transfer families are 256-wide slices of that space.

use std::fmt;

use crate::bitwise::Bits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFamily {
    /// Whole ARM decode space, no classification yet.
    ArmPrimary,

    /// `LDR`/`STR` with a shifted register offset, post-indexed (P=0).
    ArmSdtRegisterOffset,

    /// `LDR`/`STR` with a shifted register offset, pre-indexed (P=1).
    ArmSdtPreIndexed,

    /// Thumb decode space indexed by bits 6-15, annotated in steps of 4.
    ThumbWide,

    /// Thumb decode space indexed by bits 8-15.
    ThumbNarrow,
}

impl TableFamily {
    pub const ALL: [Self; 5] = [
        Self::ArmPrimary,
        Self::ArmSdtRegisterOffset,
        Self::ArmSdtPreIndexed,
        Self::ThumbWide,
        Self::ThumbNarrow,
    ];

    #[must_use]
    pub const fn index_width(self) -> u8 {
        match self {
            Self::ArmPrimary => 12,
            Self::ThumbWide => 10,
            Self::ArmSdtRegisterOffset | Self::ArmSdtPreIndexed | Self::ThumbNarrow => 8,
        }
    }

    #[must_use]
    pub const fn domain_size(self) -> usize {
        1 << self.index_width()
    }

    /// Absolute index of the first slot.
    #[must_use]
    pub const fn base(self) -> u16 {
        match self {
            Self::ArmSdtRegisterOffset => 0x600,
            Self::ArmSdtPreIndexed => 0x700,
            Self::ArmPrimary | Self::ThumbWide | Self::ThumbNarrow => 0x000,
        }
    }

    #[must_use]
    pub const fn step(self) -> u16 {
        match self {
            Self::ThumbWide => 4,
            Self::ArmPrimary
            | Self::ArmSdtRegisterOffset
            | Self::ArmSdtPreIndexed
            | Self::ThumbNarrow => 1,
        }
    }

    /// Families with no classification logic: every slot is unimplemented.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::ArmPrimary | Self::ThumbWide | Self::ThumbNarrow)
    }

    /// Returns the slot at `offset`, or `None` when it falls outside the domain.
    #[must_use]
    pub fn index(self, offset: u16) -> Option<OpcodeIndex> {
        (usize::from(offset) < self.domain_size()).then_some(OpcodeIndex {
            family: self,
            offset,
        })
    }

    /// Every slot of the domain in ascending order.
    pub fn indices(self) -> impl Iterator<Item = OpcodeIndex> {
        // Every domain is at most 4096 wide, so the offset fits in a u16.
        #[allow(clippy::cast_possible_truncation)]
        let size = self.domain_size() as u16;
        (0..size).map(move |offset| OpcodeIndex {
            family: self,
            offset,
        })
    }

    /// Finds the slot an ARM instruction dispatches to, if this family covers it.
    #[must_use]
    pub fn locate_arm(self, op_code: u32) -> Option<OpcodeIndex> {
        match self {
            Self::ArmPrimary | Self::ArmSdtRegisterOffset | Self::ArmSdtPreIndexed => {
                arm_decode_index(op_code)
                    .checked_sub(self.base())
                    .and_then(|offset| self.index(offset))
            }
            Self::ThumbWide | Self::ThumbNarrow => None,
        }
    }

    /// Finds the slot a Thumb instruction dispatches to, if this family covers it.
    #[must_use]
    pub fn locate_thumb(self, op_code: u16) -> Option<OpcodeIndex> {
        match self {
            Self::ThumbWide => self.index(thumb_decode_index(op_code)),
            Self::ThumbNarrow => self.index(thumb_narrow_decode_index(op_code)),
            Self::ArmPrimary | Self::ArmSdtRegisterOffset | Self::ArmSdtPreIndexed => None,
        }
    }
}

impl fmt::Display for TableFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArmPrimary => f.write_str("arm primary"),
            Self::ArmSdtRegisterOffset => f.write_str("arm sdt register offset"),
            Self::ArmSdtPreIndexed => f.write_str("arm sdt pre-indexed"),
            Self::ThumbWide => f.write_str("thumb wide"),
            Self::ThumbNarrow => f.write_str("thumb narrow"),
        }
    }
}

/// One slot of a family's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpcodeIndex {
    family: TableFamily,
    offset: u16,
}

impl OpcodeIndex {
    #[must_use]
    pub const fn family(self) -> TableFamily {
        self.family
    }

    /// Position inside the family's table.
    #[must_use]
    pub const fn offset(self) -> u16 {
        self.offset
    }

    /// Position inside the whole decode space, used to annotate table entries.
    #[must_use]
    pub const fn absolute(self) -> u16 {
        self.family.base() + self.offset * self.family.step()
    }
}

/// Takes bits 20-27 and bits 4-7 of an ARM instruction.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn arm_decode_index(op_code: u32) -> u16 {
    let high = op_code.get_bits(20..=27);
    let low = op_code.get_bits(4..=7);

    ((high << 4) | low) as u16
}

/// Takes bits 6-15 of a Thumb instruction.
#[must_use]
pub fn thumb_decode_index(op_code: u16) -> u16 {
    op_code.get_bits(6..=15)
}

/// Takes bits 8-15 of a Thumb instruction.
#[must_use]
pub fn thumb_narrow_decode_index(op_code: u16) -> u16 {
    op_code.get_bits(8..=15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn domain_sizes() {
        let sizes: Vec<usize> = TableFamily::ALL
            .iter()
            .map(|family| family.domain_size())
            .collect();
        assert_eq!(sizes, vec![4096, 256, 256, 1024, 256]);
    }

    #[test]
    fn indices_are_ascending_and_complete() {
        for family in TableFamily::ALL {
            let offsets: Vec<u16> = family.indices().map(OpcodeIndex::offset).collect();
            assert_eq!(offsets.len(), family.domain_size());
            assert!(offsets.windows(2).all(|w| w[1] == w[0] + 1));
            assert_eq!(offsets[0], 0);
        }
    }

    #[test]
    fn index_bounds() {
        assert!(TableFamily::ArmSdtPreIndexed.index(0xff).is_some());
        assert!(TableFamily::ArmSdtPreIndexed.index(0x100).is_none());
        assert!(TableFamily::ArmPrimary.index(0xfff).is_some());
        assert!(TableFamily::ArmPrimary.index(0x1000).is_none());
    }

    #[test]
    fn absolute_annotations() {
        let first = TableFamily::ArmSdtRegisterOffset.index(0).unwrap();
        assert_eq!(first.absolute(), 0x600);

        let last = TableFamily::ArmSdtPreIndexed.index(0xff).unwrap();
        assert_eq!(last.absolute(), 0x7ff);

        let thumb_last = TableFamily::ThumbWide.index(1023).unwrap();
        assert_eq!(thumb_last.absolute(), 0xffc);

        let thumb = TableFamily::ThumbWide.index(3).unwrap();
        assert_eq!(thumb.absolute(), 0x00c);
    }

    #[test]
    fn decode_arm_index() {
        // STR R0, [R1], -R2 (post-indexed, register offset)
        assert_eq!(arm_decode_index(0xE601_0002), 0x600);
        // LDRB R0, [R1, R2, ROR #1]!
        assert_eq!(arm_decode_index(0xE7F1_00E2), 0x7fe);
        assert_eq!(arm_decode_index(0xFFFF_FFFF), 0xfff);
        assert_eq!(arm_decode_index(0xF00F_FF0F), 0x000);
    }

    #[test]
    fn locate_arm_opcode() {
        let op_code = 0xE791_0102; // LDR R0, [R1, R2, LSL #2]
        assert_eq!(
            TableFamily::ArmSdtPreIndexed
                .locate_arm(op_code)
                .map(OpcodeIndex::offset),
            Some(0x90)
        );
        assert_eq!(TableFamily::ArmSdtRegisterOffset.locate_arm(op_code), None);
        assert_eq!(
            TableFamily::ArmPrimary
                .locate_arm(op_code)
                .map(OpcodeIndex::absolute),
            Some(0x790)
        );
        assert_eq!(TableFamily::ThumbWide.locate_arm(op_code), None);
    }

    #[test]
    fn locate_thumb_opcode() {
        let op_code = 0b0001_1000_1000_1000; // ADD R0, R1, R2
        assert_eq!(
            TableFamily::ThumbWide
                .locate_thumb(op_code)
                .map(OpcodeIndex::offset),
            Some(0b00_0110_0010)
        );
        assert_eq!(
            TableFamily::ThumbNarrow
                .locate_thumb(op_code)
                .map(OpcodeIndex::offset),
            Some(0b0001_1000)
        );
        assert_eq!(TableFamily::ArmPrimary.locate_thumb(op_code), None);
    }
}
