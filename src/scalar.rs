//! Dynamically typed element values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::ElementKind;

/// One element value carried across the dynamically typed API.
///
/// There is no dedicated clamped variant: clamped matrices exchange their
/// elements as [`Scalar::U8`], the storage type of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    I64(i64),
    U64(u64),
}

impl Scalar {
    /// Element kind this value naturally belongs to.
    ///
    /// `U8` always reports [`ElementKind::Uint8`]; whether a byte lands in a
    /// plain or a clamped buffer is decided by the receiving matrix.
    pub fn kind(&self) -> ElementKind {
        match self {
            Scalar::I8(_) => ElementKind::Int8,
            Scalar::U8(_) => ElementKind::Uint8,
            Scalar::I16(_) => ElementKind::Int16,
            Scalar::U16(_) => ElementKind::Uint16,
            Scalar::I32(_) => ElementKind::Int32,
            Scalar::U32(_) => ElementKind::Uint32,
            Scalar::F32(_) => ElementKind::Float32,
            Scalar::F64(_) => ElementKind::Float64,
            Scalar::I64(_) => ElementKind::Int64,
            Scalar::U64(_) => ElementKind::Uint64,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

impl_scalar_from!(
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    f32 => F32,
    f64 => F64,
    i64 => I64,
    u64 => U64,
);
