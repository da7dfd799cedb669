//! Width abstraction for exact fixed-width apportionment arithmetic.
//!
//! The engine is written once, generic over [`SplitWidth`], which pairs a
//! native signed integer type with a double-width intermediate type. The
//! double width is what makes [`muldiv`](SplitWidth::muldiv) exact: the
//! product `a * b` always fits in `Wide`, so the division never sees an
//! overflowed intermediate.

use std::fmt;
use std::ops::{Add, Sub};

/// Quotient/remainder pair produced by [`SplitWidth::muldiv`].
///
/// Until canonicalized by the allocator, `rem` follows the native
/// truncating-division convention: it carries the sign of the dividend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DivPair<W> {
    /// Quotient, truncated toward zero.
    pub quot: W,
    /// Remainder.
    pub rem: W,
}

/// A native signed integer width supported by the apportionment engine.
///
/// Implemented for `i32` (wide type `i64`) and `i64` (wide type `i128`).
/// Additive operations come in checked, overflowing, and wrapping flavours
/// because the engine needs all three: checked for the weight total (where
/// overflow is a reportable error), overflowing and wrapping for the excess
/// fold (where two's-complement wraparound is part of the algorithm).
pub trait SplitWidth:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + 'static
{
    /// Double-width type holding any product of two native values.
    type Wide: Copy;

    /// Native width in bits, used in error messages.
    const BITS: u32;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Exact `(self * mul) / div` and `(self * mul) % div` through the
    /// double-width intermediate.
    ///
    /// Follows native truncating division: the quotient truncates toward
    /// zero and the remainder carries the dividend's sign. Total for any
    /// `div != 0`; callers must not pass a zero divisor. In the corner
    /// case where the true quotient exceeds the native width (only
    /// reachable with mixed-sign weights), the quotient wraps to the
    /// native width rather than faulting.
    fn muldiv(self, mul: Self, div: Self) -> DivPair<Self>;

    /// Overflow-checked addition.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Two's-complement addition reporting whether it wrapped.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    /// Two's-complement addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Two's-complement subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Convert to a row count, clamping negative values to zero and
    /// saturating at the platform index width.
    fn clamp_to_index(self) -> usize;
}

macro_rules! impl_split_width {
    ($native:ty, $wide:ty, $bits:expr) => {
        impl SplitWidth for $native {
            type Wide = $wide;

            const BITS: u32 = $bits;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn muldiv(self, mul: Self, div: Self) -> DivPair<Self> {
                let prod = self as $wide * mul as $wide;
                let div = div as $wide;
                DivPair {
                    quot: (prod / div) as $native,
                    rem: (prod % div) as $native,
                }
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$native>::checked_add(self, rhs)
            }

            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$native>::overflowing_add(self, rhs)
            }

            fn wrapping_add(self, rhs: Self) -> Self {
                <$native>::wrapping_add(self, rhs)
            }

            fn wrapping_sub(self, rhs: Self) -> Self {
                <$native>::wrapping_sub(self, rhs)
            }

            fn clamp_to_index(self) -> usize {
                usize::try_from(self.max(0)).unwrap_or(usize::MAX)
            }
        }
    };
}

impl_split_width!(i32, i64, 32);
impl_split_width!(i64, i128, 64);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn muldiv_exact_beyond_native_width() {
        // i32::MAX * 1000 overflows i32 but the result divides back down.
        let DivPair { quot, rem } = i32::MAX.muldiv(1000, 1000);
        assert_eq!(quot, i32::MAX);
        assert_eq!(rem, 0);

        let DivPair { quot, rem } = i64::MAX.muldiv(1000, 1000);
        assert_eq!(quot, i64::MAX);
        assert_eq!(rem, 0);
    }

    #[test]
    fn muldiv_truncates_toward_zero() {
        let DivPair { quot, rem } = (-7i32).muldiv(1, 2);
        assert_eq!(quot, -3);
        assert_eq!(rem, -1);

        let DivPair { quot, rem } = 7i32.muldiv(1, -2);
        assert_eq!(quot, -3);
        assert_eq!(rem, 1);
    }

    #[test]
    fn remainder_carries_dividend_sign() {
        let DivPair { rem, .. } = (-10i64).muldiv(3, 7);
        assert!(rem <= 0, "negative dividend must give rem <= 0, got {rem}");

        let DivPair { rem, .. } = 10i64.muldiv(3, -7);
        assert!(rem >= 0, "positive dividend must give rem >= 0, got {rem}");
    }

    #[test]
    fn clamp_to_index_floors_negatives() {
        assert_eq!((-5i32).clamp_to_index(), 0);
        assert_eq!(0i32.clamp_to_index(), 0);
        assert_eq!(17i64.clamp_to_index(), 17);
    }

    proptest! {
        #[test]
        fn division_identity_i32(
            a in any::<i32>(),
            b in any::<i32>(),
            c in any::<i32>().prop_filter("nonzero divisor", |c| *c != 0),
        ) {
            let DivPair { quot, rem } = a.muldiv(b, c);
            // Verify a*b == q*c + r in the wide domain. The quotient may
            // have wrapped to i32, in which case only the low 32 bits of
            // the identity are meaningful.
            let prod = a as i64 * b as i64;
            let true_quot = prod / c as i64;
            if i32::try_from(true_quot).is_ok() {
                prop_assert_eq!(quot as i64 * c as i64 + rem as i64, prod);
                prop_assert!((rem as i64).unsigned_abs() < (c as i64).unsigned_abs());
            }
        }

        #[test]
        fn division_identity_i64(
            a in any::<i64>(),
            b in any::<i64>(),
            c in any::<i64>().prop_filter("nonzero divisor", |c| *c != 0),
        ) {
            let DivPair { quot, rem } = a.muldiv(b, c);
            let prod = a as i128 * b as i128;
            let true_quot = prod / c as i128;
            if i64::try_from(true_quot).is_ok() {
                prop_assert_eq!(quot as i128 * c as i128 + rem as i128, prod);
                prop_assert!((rem as i128).unsigned_abs() < (c as i128).unsigned_abs());
            }
        }
    }
}
