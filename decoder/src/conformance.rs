//! # Decoder Conformance Fixture
//!
//! A flat ROM with one ARM word per slot of the primary decode space. Feeding
//! it to a decoder must reach all 4096 decode indices, in order.
//!
//! ```text
//!          31-28  27-20        19-8       7-4        3-0
//! word:   [1110] [index 11-4] [0000...]  [index 3-0] [0001]
//!          AL                                         skeleton
//! ```
//!
//! The two halves of the index land on disjoint bits, exactly where the ARM
//! decode index reads them back from.

use std::io::{self, Write};

use crate::bitwise::Bits;
use crate::family::TableFamily;

/// `AND R0, R0, R1` under the always condition.
pub const SKELETON: u32 = 0xE000_0001;

/// Path the fixture is written to, relative to the working directory.
pub const FIXTURE_PATH: &str = "GBA.ROM";

#[must_use]
pub fn conformance_word(index: u16) -> u32 {
    let index = u32::from(index);
    SKELETON
        .with_bits(20..=27, index.get_bits(4..=11))
        .with_bits(4..=7, index.get_bits(0..=3))
}

/// Every word of the fixture in index order.
pub fn conformance_words() -> impl Iterator<Item = u32> {
    TableFamily::ArmPrimary
        .indices()
        .map(|index| conformance_word(index.offset()))
}

/// Writes the fixture as little-endian words and returns the bytes written.
///
/// # Errors
///
/// Fails as soon as `out` rejects a write.
pub fn write_fixture<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut written = 0;
    for word in conformance_words() {
        out.write_all(&word.to_le_bytes())?;
        written += 4;
    }

    Ok(written)
}
