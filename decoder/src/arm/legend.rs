//! # Single Data Transfer Legends
//!
//! Every slot of a single data transfer table is resolved through two fixed
//! lookups: the addressing variant (bits 5-7 of the slot) and the shift
//! descriptor (bits 0-3). A slot decodes only when both lookups land on a
//! [`Slot::Defined`] record.
//!
//! ## Addressing variants
//!
//! ```text
//! selector  post-indexed (0x600)   pre-indexed (0x700)
//!   000        ""                     "p"
//!   001        reserved               "pw"
//!   010        "b"                    "pb"
//!   011        reserved               "pbw"
//!   100        "u"                    "pu"
//!   101        reserved               "puw"
//!   110        "ub"                   "pub"
//!   111        reserved               "pubw"
//! ```
//!
//! Post-indexed transfers always write back, so W=1 there selects the
//! user-mode translation forms (`LDRT`/`STRT`), which have no handler.
//!
//! ## Shift descriptors
//!
//! ```text
//! selector  bit 7  type  bit 4   descriptor
//!  0 / 8     x      LSL    0      LSL_Rm_0
//!  1         0      LSL    1      LSL_Rm_1
//!  2 / 10    x      LSR    0      LSR_Rm_0
//!  3         0      LSR    1      LSR_Rm_1
//!  4 / 12    x      ASR    0      ASR_Rm_0
//!  5         0      ASR    1      ASR_Rm_1
//!  6 / 14    x      ROR    0      ROR_Rm_0
//!  7         0      ROR    1      ROR_Rm_1
//!  9 11 13 15  1    any    1      reserved
//! ```
//!
//! With an immediate amount, bit 7 is the lowest bit of the amount, so two
//! selectors reach the same descriptor. Both stay in the table as distinct
//! slots naming the same handler.

use std::fmt;

use crate::family::{OpcodeIndex, TableFamily};

use super::fields::RawFields;
use super::flags::{Indexing, LoadStoreKind, Offsetting, ReadWriteKind, ShiftKind, ShiftSource};
use super::flags::Indexing::{Post, Pre};
use super::flags::Offsetting::{Down, Up};
use super::flags::ReadWriteKind::{Byte, Word};
use super::flags::ShiftKind::{Asr, Lsl, Lsr, Ror};
use super::flags::ShiftSource::{Immediate, Register};

/// One position of a fixed legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<T> {
    Defined(T),

    /// The encoding belongs to another instruction class or is undefined.
    Reserved,
}

impl<T: Copy> Slot<T> {
    #[must_use]
    pub const fn defined(self) -> Option<T> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Reserved => None,
        }
    }
}

/// How the transfer computes its effective address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressingVariant {
    pub indexing: Indexing,
    pub offsetting: Offsetting,
    pub quantity: ReadWriteKind,
    pub write_back: bool,
}

impl AddressingVariant {
    const fn new(
        indexing: Indexing,
        offsetting: Offsetting,
        quantity: ReadWriteKind,
        write_back: bool,
    ) -> Slot<Self> {
        Slot::Defined(Self {
            indexing,
            offsetting,
            quantity,
            write_back,
        })
    }
}

/// Handler suffix: `p`, `u`, `b` and `w` in this order, each one only when set.
impl fmt::Display for AddressingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indexing == Indexing::Pre {
            f.write_str("p")?;
        }
        if self.offsetting == Offsetting::Up {
            f.write_str("u")?;
        }
        if self.quantity == ReadWriteKind::Byte {
            f.write_str("b")?;
        }
        if self.write_back {
            f.write_str("w")?;
        }

        Ok(())
    }
}

/// Shift applied to the offset register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftDescriptor {
    pub kind: ShiftKind,
    pub source: ShiftSource,
}

impl ShiftDescriptor {
    const fn new(kind: ShiftKind, source: ShiftSource) -> Slot<Self> {
        Slot::Defined(Self { kind, source })
    }
}

impl fmt::Display for ShiftDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            ShiftSource::Immediate => 0,
            ShiftSource::Register => 1,
        };

        write!(f, "{}_Rm_{source}", self.kind)
    }
}

pub const POST_INDEXED_VARIANTS: [Slot<AddressingVariant>; 8] = [
    AddressingVariant::new(Post, Down, Word, false),
    Slot::Reserved,
    AddressingVariant::new(Post, Down, Byte, false),
    Slot::Reserved,
    AddressingVariant::new(Post, Up, Word, false),
    Slot::Reserved,
    AddressingVariant::new(Post, Up, Byte, false),
    Slot::Reserved,
];

pub const PRE_INDEXED_VARIANTS: [Slot<AddressingVariant>; 8] = [
    AddressingVariant::new(Pre, Down, Word, false),
    AddressingVariant::new(Pre, Down, Word, true),
    AddressingVariant::new(Pre, Down, Byte, false),
    AddressingVariant::new(Pre, Down, Byte, true),
    AddressingVariant::new(Pre, Up, Word, false),
    AddressingVariant::new(Pre, Up, Word, true),
    AddressingVariant::new(Pre, Up, Byte, false),
    AddressingVariant::new(Pre, Up, Byte, true),
];

pub const SHIFT_LEGEND: [Slot<ShiftDescriptor>; 16] = [
    ShiftDescriptor::new(Lsl, Immediate),
    ShiftDescriptor::new(Lsl, Register),
    ShiftDescriptor::new(Lsr, Immediate),
    ShiftDescriptor::new(Lsr, Register),
    ShiftDescriptor::new(Asr, Immediate),
    ShiftDescriptor::new(Asr, Register),
    ShiftDescriptor::new(Ror, Immediate),
    ShiftDescriptor::new(Ror, Register),
    ShiftDescriptor::new(Lsl, Immediate),
    Slot::Reserved,
    ShiftDescriptor::new(Lsr, Immediate),
    Slot::Reserved,
    ShiftDescriptor::new(Asr, Immediate),
    Slot::Reserved,
    ShiftDescriptor::new(Ror, Immediate),
    Slot::Reserved,
];

/// Variant legend of a family, `None` for families without classification.
#[must_use]
pub const fn variant_legend(family: TableFamily) -> Option<&'static [Slot<AddressingVariant>; 8]> {
    match family {
        TableFamily::ArmSdtRegisterOffset => Some(&POST_INDEXED_VARIANTS),
        TableFamily::ArmSdtPreIndexed => Some(&PRE_INDEXED_VARIANTS),
        TableFamily::ArmPrimary | TableFamily::ThumbWide | TableFamily::ThumbNarrow => None,
    }
}

/// Fully resolved single data transfer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeFields {
    pub function: LoadStoreKind,
    pub variant: AddressingVariant,
    pub shift: ShiftDescriptor,
}

/// Resolves a slot through the legends of its family.
/// Returns `None` when either legend marks the encoding as reserved.
#[must_use]
pub fn classify(index: OpcodeIndex) -> Option<DecodeFields> {
    let legend = variant_legend(index.family())?;
    let raw = RawFields::from(index);

    let variant = legend[usize::from(raw.variant)].defined()?;
    let shift = SHIFT_LEGEND[usize::from(raw.shift)].defined()?;

    Some(DecodeFields {
        function: raw.function.into(),
        variant,
        shift,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwise::Bits;
    use pretty_assertions::assert_eq;

    /// Rebuilds a shift slot from what bits 4-7 mean in the instruction word.
    fn shift_from_encoding(selector: u8) -> Slot<ShiftDescriptor> {
        let source: ShiftSource = selector.get_bit(0).into();
        let bit_7 = selector.get_bit(3);

        if source == ShiftSource::Register && bit_7 {
            return Slot::Reserved;
        }

        Slot::Defined(ShiftDescriptor {
            kind: selector.get_bits(1..=2).into(),
            source,
        })
    }

    /// Rebuilds a variant slot from the P, U, B and W bits.
    fn variant_from_encoding(indexing: Indexing, selector: u8) -> Slot<AddressingVariant> {
        let write_back = selector.get_bit(0);
        if indexing == Indexing::Post && write_back {
            return Slot::Reserved;
        }

        Slot::Defined(AddressingVariant {
            indexing,
            offsetting: selector.get_bit(2).into(),
            quantity: selector.get_bit(1).into(),
            write_back,
        })
    }

    #[test]
    fn shift_legend_matches_encoding() {
        for selector in 0..16_u8 {
            assert_eq!(
                SHIFT_LEGEND[usize::from(selector)],
                shift_from_encoding(selector),
                "shift selector {selector}"
            );
        }
    }

    #[test]
    fn variant_legends_match_encoding() {
        for selector in 0..8_u8 {
            assert_eq!(
                POST_INDEXED_VARIANTS[usize::from(selector)],
                variant_from_encoding(Indexing::Post, selector)
            );
            assert_eq!(
                PRE_INDEXED_VARIANTS[usize::from(selector)],
                variant_from_encoding(Indexing::Pre, selector)
            );
        }
    }

    #[test]
    fn shift_legend_multiplicity() {
        let reserved: Vec<usize> = SHIFT_LEGEND
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == Slot::Reserved)
            .map(|(selector, _)| selector)
            .collect();
        assert_eq!(reserved, vec![9, 11, 13, 15]);

        for kind in [Lsl, Lsr, Asr, Ror] {
            let count = |source| {
                SHIFT_LEGEND
                    .iter()
                    .filter(|slot| **slot == ShiftDescriptor::new(kind, source))
                    .count()
            };
            assert_eq!(count(Immediate), 2, "{kind} immediate");
            assert_eq!(count(Register), 1, "{kind} register");
        }
    }

    #[test]
    fn aliased_selectors() {
        for (low, high) in [(0, 8), (2, 10), (4, 12), (6, 14)] {
            assert_eq!(SHIFT_LEGEND[low], SHIFT_LEGEND[high]);
            assert_ne!(SHIFT_LEGEND[low], Slot::Reserved);
        }
    }

    #[test]
    fn odd_post_indexed_variants_never_decode() {
        for index in TableFamily::ArmSdtRegisterOffset.indices() {
            let raw = RawFields::from(index);
            if raw.variant % 2 == 1 {
                assert_eq!(classify(index), None, "{:#05x}", index.absolute());
            }
        }
    }

    #[test]
    fn pre_indexed_only_reserved_shifts_fail() {
        for index in TableFamily::ArmSdtPreIndexed.indices() {
            let raw = RawFields::from(index);
            let reserved_shift = matches!(raw.shift, 9 | 11 | 13 | 15);
            assert_eq!(
                classify(index).is_none(),
                reserved_shift,
                "{:#05x}",
                index.absolute()
            );
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for family in [TableFamily::ArmSdtRegisterOffset, TableFamily::ArmSdtPreIndexed] {
            for index in family.indices() {
                assert_eq!(classify(index), classify(index));
            }
        }
    }

    #[test]
    fn placeholder_families_never_decode() {
        assert!(TableFamily::ArmPrimary.indices().all(|i| classify(i).is_none()));
        assert!(TableFamily::ThumbWide.indices().all(|i| classify(i).is_none()));
        assert!(TableFamily::ThumbNarrow.indices().all(|i| classify(i).is_none()));
    }

    #[test]
    fn classify_first_slots() {
        let first = TableFamily::ArmSdtRegisterOffset.index(0x00).unwrap();
        assert_eq!(
            classify(first),
            Some(DecodeFields {
                function: LoadStoreKind::Store,
                variant: AddressingVariant {
                    indexing: Post,
                    offsetting: Down,
                    quantity: Word,
                    write_back: false,
                },
                shift: ShiftDescriptor {
                    kind: Lsl,
                    source: Immediate,
                },
            })
        );

        let second = TableFamily::ArmSdtRegisterOffset.index(0x01).unwrap();
        assert_eq!(
            classify(second).map(|fields| fields.shift.source),
            Some(Register)
        );

        let reserved = TableFamily::ArmSdtRegisterOffset.index(0x09).unwrap();
        assert_eq!(classify(reserved), None);
    }

    #[test]
    fn tokens() {
        let variants: Vec<String> = PRE_INDEXED_VARIANTS
            .iter()
            .filter_map(|slot| slot.defined())
            .map(|variant| variant.to_string())
            .collect();
        assert_eq!(
            variants,
            vec!["p", "pw", "pb", "pbw", "pu", "puw", "pub", "pubw"]
        );

        let variants: Vec<String> = POST_INDEXED_VARIANTS
            .iter()
            .filter_map(|slot| slot.defined())
            .map(|variant| variant.to_string())
            .collect();
        assert_eq!(variants, vec!["", "b", "u", "ub"]);

        let shift = SHIFT_LEGEND[7].defined().unwrap();
        assert_eq!(shift.to_string(), "ROR_Rm_1");
    }
}
