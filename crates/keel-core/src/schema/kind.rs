use crate::{Error, Result};
use std::fmt;

/// The closed set of kinds a member type can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// UTF-8 string
    String,

    /// Civil date and time, without a zone
    DateTime,

    /// A nested record
    Struct,

    /// A homogeneous sequence
    Slice,
}

impl Kind {
    /// The wire name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "string",
            Kind::DateTime => "datetime",
            Kind::Struct => "struct",
            Kind::Slice => "slice",
        }
    }

    /// Parses a wire name. Anything outside the closed set (`map`, `func`,
    /// `chan`, ...) is an unsupported kind.
    pub fn from_name(name: &str) -> Result<Kind> {
        Ok(match name {
            "bool" => Kind::Bool,
            "i8" => Kind::I8,
            "i16" => Kind::I16,
            "i32" => Kind::I32,
            "i64" => Kind::I64,
            "u8" => Kind::U8,
            "u16" => Kind::U16,
            "u32" => Kind::U32,
            "u64" => Kind::U64,
            "f32" => Kind::F32,
            "f64" => Kind::F64,
            "string" => Kind::String,
            "datetime" => Kind::DateTime,
            "struct" => Kind::Struct,
            "slice" => Kind::Slice,
            _ => return Err(Error::unsupported_kind(name)),
        })
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64)
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(self, Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64)
    }

    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// True for kinds whose values have a natural order.
    pub const fn is_ordered(self) -> bool {
        self.is_numeric() || matches!(self, Kind::String | Kind::DateTime)
    }

    /// True for every kind except `Struct` and `Slice`.
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Kind::Struct | Kind::Slice)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Kind> {
        Kind::from_name(s)
    }
}
