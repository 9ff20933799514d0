//! Order-preserving key encodings and bucket selection
//!
//! A radix heap buckets elements by the position of the highest bit at which
//! their key differs from the current floor, so it natively understands only
//! unsigned integers. This module maps every supported key type onto an
//! unsigned image of the same width such that unsigned comparison of the
//! images agrees with the natural ordering of the keys:
//!
//! - **Unsigned integers** pass through unchanged.
//! - **Signed integers** have their sign bit flipped, which makes
//!   two's-complement ordering coincide with unsigned ordering.
//! - **Floats** are reinterpreted as raw bits, then all bits are inverted for
//!   negative values and only the sign bit for non-negative ones. For finite
//!   values this maps IEEE-754 ordering onto unsigned ordering.
//!
//! Both directions are total, branch-light bit transforms; `decode(encode(x))`
//! returns `x` for every representable value. NaN is outside the contract
//! (a monotone queue has no business holding one), though the transform is
//! still a bijection on bit patterns.

use std::fmt;

/// Unsigned image of an encoded key.
///
/// This trait provides the bit-level operations needed for bucket assignment.
/// It is implemented for all unsigned integer types.
///
/// # Safety
///
/// Implementations must satisfy:
/// - `BITS` must equal the number of bits in the type
/// - `leading_zeros()` must return the number of leading zero bits
/// - `bitxor()` must be bitwise XOR
pub trait EncodedKey: Ord + Copy + Default + fmt::Debug {
    /// Number of bits in this key type
    const BITS: u32;

    /// Returns the number of leading zeros in the binary representation
    fn leading_zeros(self) -> u32;

    /// Compute XOR of two keys (for finding the differing high bit)
    fn bitxor(self, other: Self) -> Self;
}

macro_rules! impl_encoded_key {
    ($($t:ty),+) => {
        $(
            impl EncodedKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn bitxor(self, other: Self) -> Self {
                    self ^ other
                }
            }
        )+
    };
}

impl_encoded_key!(u8, u16, u32, u64, u128, usize);

/// A key that can be stored in a radix heap.
///
/// `encode` is an order-preserving bijection onto [`EncodedKey`]: for any two
/// keys `a < b`, `a.encode() < b.encode()` as unsigned integers, and
/// `decode(encode(x)) == x`. The heap works exclusively on encoded images and
/// decodes only at the API boundary, so `push`/`pop` pay a fixed handful of
/// bit operations and no per-call dispatch.
///
/// Implemented for all primitive integer types and for `f32`/`f64`.
pub trait RadixKey: Copy {
    /// The unsigned image type, same bit width as `Self`.
    type Encoded: EncodedKey;

    /// Map this key to its unsigned image.
    fn encode(self) -> Self::Encoded;

    /// Recover the key from its unsigned image. Inverse of [`encode`](Self::encode).
    fn decode(raw: Self::Encoded) -> Self;
}

macro_rules! impl_unsigned_key {
    ($($t:ty),+) => {
        $(
            impl RadixKey for $t {
                type Encoded = $t;

                #[inline]
                fn encode(self) -> $t {
                    self
                }

                #[inline]
                fn decode(raw: $t) -> $t {
                    raw
                }
            }
        )+
    };
}

impl_unsigned_key!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_signed_key {
    ($(($i:ty, $u:ty)),+) => {
        $(
            impl RadixKey for $i {
                type Encoded = $u;

                #[inline]
                fn encode(self) -> $u {
                    (self as $u) ^ (1 << (<$u>::BITS - 1))
                }

                #[inline]
                fn decode(raw: $u) -> $i {
                    (raw ^ (1 << (<$u>::BITS - 1))) as $i
                }
            }
        )+
    };
}

impl_signed_key!(
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize)
);

macro_rules! impl_float_key {
    ($(($f:ty, $u:ty)),+) => {
        $(
            impl RadixKey for $f {
                type Encoded = $u;

                #[inline]
                fn encode(self) -> $u {
                    // -0.0 and +0.0 compare equal, so give them the same ordinal.
                    let x = if self == 0.0 { 0.0 } else { self };
                    let bits = x.to_bits();
                    // Negative: invert all bits. Non-negative: invert the sign bit.
                    bits ^ ((bits >> (<$u>::BITS - 1)).wrapping_neg() | (1 << (<$u>::BITS - 1)))
                }

                #[inline]
                fn decode(raw: $u) -> $f {
                    let mask = (raw >> (<$u>::BITS - 1)).wrapping_sub(1) | (1 << (<$u>::BITS - 1));
                    <$f>::from_bits(raw ^ mask)
                }
            }
        )+
    };
}

impl_float_key!((f32, u32), (f64, u64));

/// Compute the bucket index for an encoded key relative to the current floor.
///
/// Returns 0 if `x == last`, otherwise `BITS - leading_zeros(x XOR last)`,
/// i.e. one plus the zero-based index of the most significant bit at which
/// `x` and `last` diverge. Keys sharing a long common high-bit prefix with
/// the floor cluster into low-numbered buckets.
#[inline]
pub(crate) fn find_bucket<E: EncodedKey>(x: E, last: E) -> usize {
    let diff = x.bitxor(last);
    // Compare against default (zero) rather than casting to usize, which
    // would truncate u128 on 32-bit platforms and misclassify.
    if diff == E::default() {
        0
    } else {
        (E::BITS - diff.leading_zeros()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_is_identity() {
        for x in [0u32, 1, 7, u32::MAX / 2, u32::MAX] {
            assert_eq!(x.encode(), x);
            assert_eq!(u32::decode(x), x);
        }
    }

    #[test]
    fn signed_roundtrip_exhaustive_i8() {
        for x in i8::MIN..=i8::MAX {
            assert_eq!(i8::decode(x.encode()), x);
        }
    }

    #[test]
    fn signed_roundtrip_exhaustive_i16() {
        for x in i16::MIN..=i16::MAX {
            assert_eq!(i16::decode(x.encode()), x);
        }
    }

    #[test]
    fn unsigned_roundtrip_exhaustive_u16() {
        for x in u16::MIN..=u16::MAX {
            assert_eq!(u16::decode(x.encode()), x);
        }
    }

    #[test]
    fn signed_order_exhaustive_i16() {
        // Consecutive values must encode to consecutive ordinals, which
        // implies full order preservation over the type.
        let mut prev = i16::MIN.encode();
        for x in (i16::MIN + 1)..=i16::MAX {
            let cur = x.encode();
            assert_eq!(cur, prev + 1, "gap at {}", x);
            prev = cur;
        }
    }

    #[test]
    fn signed_extremes() {
        assert_eq!(i32::MIN.encode(), 0u32);
        assert_eq!(0i32.encode(), 1u32 << 31);
        assert_eq!(i32::MAX.encode(), u32::MAX);
    }

    #[test]
    fn float_order_known_values() {
        let vals = [
            f64::MIN,
            -100.0,
            -1.5,
            -1.0,
            -f64::MIN_POSITIVE,
            0.0,
            f64::MIN_POSITIVE,
            0.5,
            1.0,
            100.0,
            f64::MAX,
        ];
        for w in vals.windows(2) {
            assert!(
                w[0].encode() < w[1].encode(),
                "{} should encode below {}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn float_roundtrip_known_values() {
        for x in [-100.0f64, -1.5, -0.0, 0.0, 0.25, 1.0, 1e300, -1e300] {
            let back = f64::decode(x.encode());
            assert_eq!(back, x);
        }
        for x in [-100.0f32, -1.5, 0.0, 3.25, 1e30] {
            let back = f32::decode(x.encode());
            assert_eq!(back, x);
        }
    }

    #[test]
    fn float_zero_ordinals_coincide() {
        assert_eq!((-0.0f64).encode(), 0.0f64.encode());
        assert_eq!((-0.0f32).encode(), 0.0f32.encode());
        // decode(encode(-0.0)) == -0.0 holds numerically.
        assert_eq!(f64::decode((-0.0f64).encode()), -0.0);
    }

    #[test]
    fn find_bucket_basics() {
        assert_eq!(find_bucket(0u32, 0u32), 0);
        assert_eq!(find_bucket(1u32, 0u32), 1);
        assert_eq!(find_bucket(2u32, 0u32), 2);
        assert_eq!(find_bucket(3u32, 0u32), 2);
        assert_eq!(find_bucket(255u32, 0u32), 8);
        assert_eq!(find_bucket(256u32, 0u32), 9);
        assert_eq!(find_bucket(u32::MAX, 0u32), 32);
        // Shared high prefix lands in a low bucket regardless of magnitude.
        assert_eq!(find_bucket(u32::MAX, u32::MAX - 1), 1);
        assert_eq!(find_bucket(0u64, 0u64), 0);
        assert_eq!(find_bucket(u64::MAX, 0u64), 64);
    }

    #[test]
    fn find_bucket_narrow_widths() {
        assert_eq!(find_bucket(0u8, 0u8), 0);
        assert_eq!(find_bucket(u8::MAX, 0u8), 8);
        assert_eq!(find_bucket(u16::MAX, 0u16), 16);
        assert_eq!(find_bucket(u128::MAX, 0u128), 128);
    }
}
