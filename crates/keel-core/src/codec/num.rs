use super::Scalar;
use crate::{model::Datum, Error, Kind, Result};

/// Integer view of a datum for integer encoders. Booleans count as `0`/`1`.
fn datum_int(datum: &Datum) -> Option<i128> {
    Some(match datum {
        Datum::Bool(v) => i128::from(*v),
        Datum::I8(v) => i128::from(*v),
        Datum::I16(v) => i128::from(*v),
        Datum::I32(v) => i128::from(*v),
        Datum::I64(v) => i128::from(*v),
        Datum::U8(v) => i128::from(*v),
        Datum::U16(v) => i128::from(*v),
        Datum::U32(v) => i128::from(*v),
        Datum::U64(v) => i128::from(*v),
        _ => return None,
    })
}

/// Integer view of a scalar for integer decoders. Floats qualify when they
/// have no fractional part, strings when they parse.
pub(super) fn scalar_int(scalar: &Scalar) -> Option<i128> {
    Some(match scalar {
        Scalar::I8(v) => i128::from(*v),
        Scalar::I16(v) => i128::from(*v),
        Scalar::I32(v) => i128::from(*v),
        Scalar::I64(v) => i128::from(*v),
        Scalar::U8(v) => i128::from(*v),
        Scalar::U16(v) => i128::from(*v),
        Scalar::U32(v) => i128::from(*v),
        Scalar::U64(v) => i128::from(*v),
        Scalar::F32(v) => float_int(f64::from(*v))?,
        Scalar::F64(v) => float_int(*v)?,
        Scalar::String(s) => s.trim().parse().ok()?,
        Scalar::Null => return None,
    })
}

fn float_int(v: f64) -> Option<i128> {
    (v.is_finite() && v.fract() == 0.0 && v.abs() < 2f64.powi(64)).then_some(v as i128)
}

macro_rules! impl_int {
    (
        $(
            $variant:ident($ty:ty) {
                $encode:ident
                $decode:ident
            }
        )*
    ) => {
        $(
            #[doc = concat!("Encodes any integer or boolean datum that fits in `", stringify!($ty), "`.")]
            pub fn $encode(datum: &Datum) -> Result<Scalar> {
                datum_int(datum)
                    .and_then(|v| <$ty>::try_from(v).ok())
                    .map(Scalar::$variant)
                    .ok_or_else(|| Error::encode(Kind::$variant.name(), datum))
            }

            pub fn $decode(scalar: &Scalar) -> Result<Datum> {
                scalar_int(scalar)
                    .and_then(|v| <$ty>::try_from(v).ok())
                    .map(Datum::$variant)
                    .ok_or_else(|| Error::decode(Kind::$variant.name(), scalar))
            }
        )*
    };
}

impl_int! {
    I8(i8) {
        encode_i8
        decode_i8
    }
    I16(i16) {
        encode_i16
        decode_i16
    }
    I32(i32) {
        encode_i32
        decode_i32
    }
    I64(i64) {
        encode_i64
        decode_i64
    }
    U8(u8) {
        encode_u8
        decode_u8
    }
    U16(u16) {
        encode_u16
        decode_u16
    }
    U32(u32) {
        encode_u32
        decode_u32
    }
    U64(u64) {
        encode_u64
        decode_u64
    }
}

/// Integer view of a datum for float encoders. Booleans do not qualify.
fn datum_number(datum: &Datum) -> Option<i128> {
    match datum {
        Datum::Bool(_) => None,
        datum => datum_int(datum),
    }
}

/// Encodes `f32` and integer data. `f64` data is rejected.
pub fn encode_f32(datum: &Datum) -> Result<Scalar> {
    match datum {
        Datum::F32(v) => Ok(Scalar::F32(*v)),
        datum => datum_number(datum)
            .map(|v| Scalar::F32(v as f32))
            .ok_or_else(|| Error::encode(Kind::F32.name(), datum)),
    }
}

/// Encodes float and integer data.
pub fn encode_f64(datum: &Datum) -> Result<Scalar> {
    match datum {
        Datum::F64(v) => Ok(Scalar::F64(*v)),
        Datum::F32(v) => Ok(Scalar::F64(f64::from(*v))),
        datum => datum_number(datum)
            .map(|v| Scalar::F64(v as f64))
            .ok_or_else(|| Error::encode(Kind::F64.name(), datum)),
    }
}

pub fn decode_f32(scalar: &Scalar) -> Result<Datum> {
    let v = match scalar {
        Scalar::F32(v) => Some(*v),
        Scalar::F64(v) if !v.is_finite() || v.abs() <= f64::from(f32::MAX) => Some(*v as f32),
        Scalar::F64(_) | Scalar::Null => None,
        Scalar::String(s) => s.trim().parse().ok(),
        scalar => scalar_int(scalar).map(|v| v as f32),
    };

    v.map(Datum::F32)
        .ok_or_else(|| Error::decode(Kind::F32.name(), scalar))
}

pub fn decode_f64(scalar: &Scalar) -> Result<Datum> {
    let v = match scalar {
        Scalar::F64(v) => Some(*v),
        Scalar::F32(v) => Some(f64::from(*v)),
        Scalar::Null => None,
        Scalar::String(s) => s.trim().parse().ok(),
        scalar => scalar_int(scalar).map(|v| v as f64),
    };

    v.map(Datum::F64)
        .ok_or_else(|| Error::decode(Kind::F64.name(), scalar))
}
