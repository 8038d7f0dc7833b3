//! Storage types that can live inside a matrix buffer.
//!
//! [`Element`] ties a Rust storage type to its [`ElementKind`], its native
//! arithmetic and its [`Scalar`] conversions. It is implemented for the ten
//! primitive numeric types plus [`ClampedU8`] and is not intended to be
//! implemented outside this crate.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::kind::ElementKind;
use crate::scalar::Scalar;

/// A fixed-width numeric type usable as matrix storage.
///
/// The arithmetic methods define the kind's element domain: integer kinds
/// wrap on overflow, the clamped kind saturates and the float kinds follow
/// IEEE 754. All four matrix operations evaluate in this domain.
pub trait Element: Copy + PartialEq + fmt::Debug + fmt::Display + Zero + One {
    /// Kind tag of this storage type.
    const KIND: ElementKind;

    /// Addition in the element domain.
    fn elem_add(self, rhs: Self) -> Self;

    /// Subtraction in the element domain.
    fn elem_sub(self, rhs: Self) -> Self;

    /// Multiplication in the element domain.
    fn elem_mul(self, rhs: Self) -> Self;

    /// Coerce a dynamically typed value into this storage type.
    ///
    /// Integer targets truncate floats toward zero and reduce modulo the
    /// type width, so out-of-range writes wrap exactly like a raw buffer
    /// store. Non-finite floats become zero. [`ClampedU8`] clamps instead.
    fn from_scalar(value: Scalar) -> Self;

    /// Lift a stored element back into a [`Scalar`].
    fn to_scalar(self) -> Scalar;
}

/// Unsigned byte with saturating arithmetic.
///
/// Stores plain `u8` values but clamps every write and every arithmetic
/// result into `0..=255` instead of wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClampedU8(pub u8);

impl fmt::Display for ClampedU8 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u8> for ClampedU8 {
    fn from(value: u8) -> Self {
        ClampedU8(value)
    }
}

impl From<ClampedU8> for u8 {
    fn from(value: ClampedU8) -> Self {
        value.0
    }
}

impl Add for ClampedU8 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_add(rhs.0))
    }
}

impl Sub for ClampedU8 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_sub(rhs.0))
    }
}

impl Mul for ClampedU8 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_mul(rhs.0))
    }
}

impl Zero for ClampedU8 {
    fn zero() -> Self {
        ClampedU8(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for ClampedU8 {
    fn one() -> Self {
        ClampedU8(1)
    }
}

/// Truncate toward zero and reduce into `[0, modulus)`.
///
/// Mirrors a raw typed-buffer store: the fractional part is dropped and the
/// integer part wraps modulo the target width. Non-finite input maps to 0.
/// The `%` step is exact in f64, but re-adding a 2^64 modulus to a negative
/// remainder rounds, so the euclidean adjustment runs in `i128`.
fn wrap_float(value: f64, modulus: f64) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    let remainder = value.trunc() % modulus;
    (remainder as i128).rem_euclid(modulus as i128) as u64
}

/// Clamp into `[0, 255]`, rounding halfway cases to the even neighbour.
fn clamp_round(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let clamped = value.clamp(0.0, 255.0);
    let floor = clamped.floor();
    let frac = clamped - floor;
    let rounded = if frac > 0.5 {
        floor + 1.0
    } else if frac < 0.5 {
        floor
    } else if (floor as u16) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    };
    rounded as u8
}

macro_rules! impl_int_element {
    ($ty:ty, $kind:path, $modulus:expr, $variant:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            fn elem_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn elem_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            fn elem_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn from_scalar(value: Scalar) -> Self {
                match value {
                    Scalar::I8(v) => v as $ty,
                    Scalar::U8(v) => v as $ty,
                    Scalar::I16(v) => v as $ty,
                    Scalar::U16(v) => v as $ty,
                    Scalar::I32(v) => v as $ty,
                    Scalar::U32(v) => v as $ty,
                    Scalar::I64(v) => v as $ty,
                    Scalar::U64(v) => v as $ty,
                    Scalar::F32(v) => wrap_float(v as f64, $modulus) as $ty,
                    Scalar::F64(v) => wrap_float(v, $modulus) as $ty,
                }
            }

            fn to_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }
        }
    };
}

macro_rules! impl_float_element {
    ($ty:ty, $kind:path, $variant:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            fn elem_add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn elem_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            fn elem_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            fn from_scalar(value: Scalar) -> Self {
                match value {
                    Scalar::I8(v) => v as $ty,
                    Scalar::U8(v) => v as $ty,
                    Scalar::I16(v) => v as $ty,
                    Scalar::U16(v) => v as $ty,
                    Scalar::I32(v) => v as $ty,
                    Scalar::U32(v) => v as $ty,
                    Scalar::I64(v) => v as $ty,
                    Scalar::U64(v) => v as $ty,
                    Scalar::F32(v) => v as $ty,
                    Scalar::F64(v) => v as $ty,
                }
            }

            fn to_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }
        }
    };
}

impl_int_element!(i8, ElementKind::Int8, 256.0, I8);
impl_int_element!(u8, ElementKind::Uint8, 256.0, U8);
impl_int_element!(i16, ElementKind::Int16, 65_536.0, I16);
impl_int_element!(u16, ElementKind::Uint16, 65_536.0, U16);
impl_int_element!(i32, ElementKind::Int32, 4_294_967_296.0, I32);
impl_int_element!(u32, ElementKind::Uint32, 4_294_967_296.0, U32);
impl_int_element!(i64, ElementKind::Int64, 18_446_744_073_709_551_616.0, I64);
impl_int_element!(u64, ElementKind::Uint64, 18_446_744_073_709_551_616.0, U64);

impl_float_element!(f32, ElementKind::Float32, F32);
impl_float_element!(f64, ElementKind::Float64, F64);

impl Element for ClampedU8 {
    const KIND: ElementKind = ElementKind::Uint8Clamped;

    fn elem_add(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_add(rhs.0))
    }

    fn elem_sub(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_sub(rhs.0))
    }

    fn elem_mul(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_mul(rhs.0))
    }

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::I8(v) => ClampedU8(v.max(0) as u8),
            Scalar::U8(v) => ClampedU8(v),
            Scalar::I16(v) => ClampedU8(v.clamp(0, 255) as u8),
            Scalar::U16(v) => ClampedU8(v.min(255) as u8),
            Scalar::I32(v) => ClampedU8(v.clamp(0, 255) as u8),
            Scalar::U32(v) => ClampedU8(v.min(255) as u8),
            Scalar::I64(v) => ClampedU8(v.clamp(0, 255) as u8),
            Scalar::U64(v) => ClampedU8(v.min(255) as u8),
            Scalar::F32(v) => ClampedU8(clamp_round(v as f64)),
            Scalar::F64(v) => ClampedU8(clamp_round(v)),
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::U8(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_stores_wrap() {
        assert_eq!(u8::from_scalar(Scalar::I32(300)), 44);
        assert_eq!(u8::from_scalar(Scalar::F64(300.0)), 44);
        assert_eq!(i8::from_scalar(Scalar::I32(200)), -56);
        assert_eq!(i8::from_scalar(Scalar::F64(-129.0)), 127);
        assert_eq!(u16::from_scalar(Scalar::F64(-1.0)), u16::MAX);
    }

    #[test]
    fn float_stores_truncate_before_wrapping() {
        assert_eq!(u8::from_scalar(Scalar::F64(300.9)), 44);
        assert_eq!(u8::from_scalar(Scalar::F64(-0.7)), 0);
        assert_eq!(i32::from_scalar(Scalar::F64(-2.9)), -2);
    }

    #[test]
    fn non_finite_floats_store_as_zero_in_integer_kinds() {
        assert_eq!(i16::from_scalar(Scalar::F64(f64::NAN)), 0);
        assert_eq!(u32::from_scalar(Scalar::F64(f64::INFINITY)), 0);
        assert_eq!(i64::from_scalar(Scalar::F32(f32::NEG_INFINITY)), 0);
    }

    #[test]
    fn negative_float_stores_wrap_exactly_in_the_64_bit_kinds() {
        assert_eq!(i64::from_scalar(Scalar::F64(-5.0)), -5);
        assert_eq!(i64::from_scalar(Scalar::F64(-3000.0)), -3000);
        assert_eq!(i64::from_scalar(Scalar::F64(-(2f64.powi(63)))), i64::MIN);
        assert_eq!(u64::from_scalar(Scalar::F64(-1.0)), u64::MAX);
        assert_eq!(u64::from_scalar(Scalar::F64(-2.0)), u64::MAX - 1);
        assert_eq!(u64::from_scalar(Scalar::F32(-1.5)), u64::MAX);
    }

    #[test]
    fn clamped_stores_saturate() {
        assert_eq!(ClampedU8::from_scalar(Scalar::I32(300)), ClampedU8(255));
        assert_eq!(ClampedU8::from_scalar(Scalar::I32(-20)), ClampedU8(0));
        assert_eq!(ClampedU8::from_scalar(Scalar::F64(f64::NAN)), ClampedU8(0));
        assert_eq!(
            ClampedU8::from_scalar(Scalar::F64(f64::INFINITY)),
            ClampedU8(255)
        );
    }

    #[test]
    fn clamped_float_stores_round_half_to_even() {
        assert_eq!(ClampedU8::from_scalar(Scalar::F64(0.5)), ClampedU8(0));
        assert_eq!(ClampedU8::from_scalar(Scalar::F64(1.5)), ClampedU8(2));
        assert_eq!(ClampedU8::from_scalar(Scalar::F64(2.5)), ClampedU8(2));
        assert_eq!(ClampedU8::from_scalar(Scalar::F64(254.4)), ClampedU8(254));
    }

    #[test]
    fn arithmetic_domains() {
        assert_eq!(200u8.elem_add(100), 44);
        assert_eq!(i8::MIN.elem_sub(1), i8::MAX);
        assert_eq!(ClampedU8(200).elem_add(ClampedU8(100)), ClampedU8(255));
        assert_eq!(ClampedU8(10).elem_sub(ClampedU8(30)), ClampedU8(0));
        assert_eq!(0.1f64.elem_add(0.2), 0.1 + 0.2);
    }

    #[test]
    fn clamped_operators_saturate_like_the_element_domain() {
        assert_eq!(ClampedU8(200) + ClampedU8(100), ClampedU8(255));
        assert_eq!(ClampedU8(10) - ClampedU8(30), ClampedU8(0));
        assert_eq!(ClampedU8(16) * ClampedU8(16), ClampedU8(255));
    }

    #[test]
    fn widening_and_narrowing_between_scalar_kinds() {
        assert_eq!(f32::from_scalar(Scalar::F64(1.5)), 1.5f32);
        assert_eq!(f64::from_scalar(Scalar::I64(1 << 40)), (1u64 << 40) as f64);
        assert_eq!(u64::from_scalar(Scalar::I8(-1)), u64::MAX);
    }

    #[test]
    fn to_scalar_reports_storage_value() {
        assert_eq!(5i32.to_scalar(), Scalar::I32(5));
        assert_eq!(ClampedU8(255).to_scalar(), Scalar::U8(255));
    }
}
