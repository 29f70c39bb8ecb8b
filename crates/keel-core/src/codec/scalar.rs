use crate::{Error, Result};
use std::fmt;

/// A storage or wire scalar.
///
/// Booleans travel as `I8`, datetimes and multi-element sequences as
/// `String`.
#[derive(Clone, PartialEq)]
pub enum Scalar {
    Null,
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
}

impl Scalar {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn to_json(&self) -> Result<serde_json::Value> {
        use serde_json::Value as Json;

        Ok(match self {
            Scalar::Null => Json::Null,
            Scalar::I8(v) => Json::from(*v),
            Scalar::I16(v) => Json::from(*v),
            Scalar::I32(v) => Json::from(*v),
            Scalar::I64(v) => Json::from(*v),
            Scalar::U8(v) => Json::from(*v),
            Scalar::U16(v) => Json::from(*v),
            Scalar::U32(v) => Json::from(*v),
            Scalar::U64(v) => Json::from(*v),
            Scalar::F32(v) => json_float(f64::from(*v), self)?,
            Scalar::F64(v) => json_float(*v, self)?,
            Scalar::String(v) => Json::from(v.as_str()),
        })
    }

    pub(crate) fn from_json(json: &serde_json::Value) -> Result<Scalar> {
        use serde_json::Value as Json;

        Ok(match json {
            Json::Null => Scalar::Null,
            Json::Bool(v) => Scalar::I8(i8::from(*v)),
            Json::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Scalar::I64(v)
                } else if let Some(v) = n.as_u64() {
                    Scalar::U64(v)
                } else if let Some(v) = n.as_f64() {
                    Scalar::F64(v)
                } else {
                    return Err(Error::decode("scalar", json));
                }
            }
            Json::String(v) => Scalar::String(v.clone()),
            json => return Err(Error::decode("scalar", json)),
        })
    }
}

fn json_float(v: f64, scalar: &Scalar) -> Result<serde_json::Value> {
    serde_json::Number::from_f64(v)
        .map(serde_json::Value::Number)
        .ok_or_else(|| Error::encode("json", scalar))
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("NULL"),
            Scalar::I8(v) => write!(f, "{v}"),
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::U8(v) => write!(f, "{v}"),
            Scalar::U16(v) => write!(f, "{v}"),
            Scalar::U32(v) => write!(f, "{v}"),
            Scalar::U64(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v:.6}"),
            Scalar::F64(v) => write!(f, "{v:.6}"),
            Scalar::String(v) => f.write_str(v),
        }
    }
}

/// Prints the raw scalar, quoting strings.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(v) => fmt::Debug::fmt(v, f),
            scalar => fmt::Display::fmt(scalar, f),
        }
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
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
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
