//! Element kinds a matrix buffer can store.
//!
//! Each kind mirrors one fixed-width numeric buffer layout. The canonical
//! lowercase names (`"int8"`, `"uint8-clamped"`, `"float64"`, ...) are the
//! stable contract for both [`std::str::FromStr`] and serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Storage kind of a matrix element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Int8,
    Uint8,
    #[serde(rename = "uint8-clamped")]
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    Int64,
    Uint64,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 11] = [
        ElementKind::Int8,
        ElementKind::Uint8,
        ElementKind::Uint8Clamped,
        ElementKind::Int16,
        ElementKind::Uint16,
        ElementKind::Int32,
        ElementKind::Uint32,
        ElementKind::Float32,
        ElementKind::Float64,
        ElementKind::Int64,
        ElementKind::Uint64,
    ];

    /// Canonical lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Int8 => "int8",
            ElementKind::Uint8 => "uint8",
            ElementKind::Uint8Clamped => "uint8-clamped",
            ElementKind::Int16 => "int16",
            ElementKind::Uint16 => "uint16",
            ElementKind::Int32 => "int32",
            ElementKind::Uint32 => "uint32",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
            ElementKind::Int64 => "int64",
            ElementKind::Uint64 => "uint64",
        }
    }

    /// Width of one element in bytes.
    pub fn byte_width(&self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::Uint8 | ElementKind::Uint8Clamped => 1,
            ElementKind::Int16 | ElementKind::Uint16 => 2,
            ElementKind::Int32 | ElementKind::Uint32 | ElementKind::Float32 => 4,
            ElementKind::Float64 | ElementKind::Int64 | ElementKind::Uint64 => 8,
        }
    }

    /// True for the integer kinds, including the clamped one.
    pub fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// True for `float32` and `float64`.
    pub fn is_float(&self) -> bool {
        matches!(self, ElementKind::Float32 | ElementKind::Float64)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int8" => Ok(ElementKind::Int8),
            "uint8" => Ok(ElementKind::Uint8),
            "uint8-clamped" => Ok(ElementKind::Uint8Clamped),
            "int16" => Ok(ElementKind::Int16),
            "uint16" => Ok(ElementKind::Uint16),
            "int32" => Ok(ElementKind::Int32),
            "uint32" => Ok(ElementKind::Uint32),
            "float32" => Ok(ElementKind::Float32),
            "float64" => Ok(ElementKind::Float64),
            "int64" => Ok(ElementKind::Int64),
            "uint64" => Ok(ElementKind::Uint64),
            _ => Err(MatrixError::UnknownElementKind {
                name: s.to_string(),
            }),
        }
    }
}
