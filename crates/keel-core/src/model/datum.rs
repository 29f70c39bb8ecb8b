use crate::{Kind, Model};
use jiff::civil::DateTime;

/// The data held by a [`Value`](super::Value).
///
/// A closed set of variants mirroring [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    DateTime(DateTime),
    Struct(Box<Model>),
    List(Vec<Datum>),
}

impl Datum {
    /// The unset timestamp, `0001-01-01 00:00:00`.
    pub const ZERO_DATETIME: DateTime = jiff::civil::date(1, 1, 1).at(0, 0, 0, 0);

    pub fn kind(&self) -> Kind {
        match self {
            Datum::Bool(_) => Kind::Bool,
            Datum::I8(_) => Kind::I8,
            Datum::I16(_) => Kind::I16,
            Datum::I32(_) => Kind::I32,
            Datum::I64(_) => Kind::I64,
            Datum::U8(_) => Kind::U8,
            Datum::U16(_) => Kind::U16,
            Datum::U32(_) => Kind::U32,
            Datum::U64(_) => Kind::U64,
            Datum::F32(_) => Kind::F32,
            Datum::F64(_) => Kind::F64,
            Datum::String(_) => Kind::String,
            Datum::DateTime(_) => Kind::DateTime,
            Datum::Struct(_) => Kind::Struct,
            Datum::List(_) => Kind::Slice,
        }
    }

    /// Returns `true` for the zero datum of the variant. A struct is zero
    /// when every optional field is nil and every other field is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Datum::Bool(v) => !v,
            Datum::I8(v) => *v == 0,
            Datum::I16(v) => *v == 0,
            Datum::I32(v) => *v == 0,
            Datum::I64(v) => *v == 0,
            Datum::U8(v) => *v == 0,
            Datum::U16(v) => *v == 0,
            Datum::U32(v) => *v == 0,
            Datum::U64(v) => *v == 0,
            Datum::F32(v) => *v == 0.0,
            Datum::F64(v) => *v == 0.0,
            Datum::String(v) => v.is_empty(),
            Datum::DateTime(v) => *v == Datum::ZERO_DATETIME,
            Datum::Struct(model) => model.fields().all(|field| {
                if field.ty().is_pointer() {
                    field.value().is_nil()
                } else {
                    field.value().is_zero()
                }
            }),
            Datum::List(items) => items.is_empty(),
        }
    }

    /// Name used when reporting a mismatch: the kind name, or the record's
    /// key for structs.
    pub(crate) fn type_name(&self) -> String {
        match self {
            Datum::Struct(model) => model.pkg_key(),
            datum => datum.kind().name().to_string(),
        }
    }

    pub fn as_struct(&self) -> Option<&Model> {
        match self {
            Datum::Struct(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Datum]> {
        match self {
            Datum::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Datum {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Datum {
                fn from(value: &$ty) -> Self {
                    Self::$variant(value.clone())
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool)
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
    String(String)
    DateTime(DateTime)
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Model> for Datum {
    fn from(value: Model) -> Self {
        Self::Struct(Box::new(value))
    }
}

impl From<Vec<Datum>> for Datum {
    fn from(value: Vec<Datum>) -> Self {
        Self::List(value)
    }
}
