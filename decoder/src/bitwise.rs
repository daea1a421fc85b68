use std::ops::RangeInclusive;

/// Helpers to read and place bit fields.
/// The index (`bit_idx`) goes from lsb to msb (right to left) and ranges
/// are inclusive on both ends, the same way the ARM manual writes them.
pub trait Bits: Copy {
    /// Width of the type in bits.
    const WIDTH: u8;

    fn get_bit(self, bit_idx: u8) -> bool;

    /// Reads the field covered by `bits_range` and moves it to position 0.
    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self;

    /// Returns a copy where the field covered by `bits_range` is replaced
    /// by the low bits of `value`. Bits of `value` that don't fit are dropped.
    #[must_use]
    fn with_bits(self, bits_range: RangeInclusive<u8>, value: Self) -> Self;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {
        $(
            impl Bits for $t {
                #[allow(clippy::cast_possible_truncation)]
                const WIDTH: u8 = <$t>::BITS as u8;

                fn get_bit(self, bit_idx: u8) -> bool {
                    debug_assert!(bit_idx < Self::WIDTH);
                    (self >> bit_idx) & 1 == 1
                }

                fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self {
                    let (start, mask) = field_mask::<$t>(&bits_range);
                    (self >> start) & mask
                }

                fn with_bits(self, bits_range: RangeInclusive<u8>, value: Self) -> Self {
                    let (start, mask) = field_mask::<$t>(&bits_range);
                    (self & !(mask << start)) | ((value & mask) << start)
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32);

/// Gets the starting bit and a right-aligned mask with as many ones as the
/// field is long. If `bits_range` is 4..=7 the mask is 0b1111.
fn field_mask<T>(bits_range: &RangeInclusive<u8>) -> (u8, T)
where
    T: Bits
        + From<u8>
        + std::ops::Shl<u8, Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Not<Output = T>,
{
    let start = *bits_range.start();
    let end = *bits_range.end();
    debug_assert!(start <= end && end < T::WIDTH);

    let length = end - start + 1;
    let mask = if length >= T::WIDTH {
        !T::from(0)
    } else {
        (T::from(1) << length) - T::from(1)
    };

    (start, mask)
}
