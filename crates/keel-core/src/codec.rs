//! Per-kind conversion between a [`Value`] and a storage or wire [`Scalar`].
//!
//! Encoders are keyed on the *target* kind and widen from compatible data:
//! every integer encoder accepts any integer or boolean datum that fits,
//! float encoders accept integers and narrower floats. String encoders never
//! stringify other kinds. Decoders mirror the encoders and additionally
//! parse text seeds, so `"42"` decodes into any integer kind it fits.

mod datetime;
pub use datetime::{decode_datetime, encode_datetime, DATETIME_LAYOUT};

mod num;
pub use num::*;

mod scalar;
pub use scalar::Scalar;

mod sequence;
pub use sequence::{decode_sequence, encode_sequence};

use crate::{model::Datum, Error, Kind, Result, Type, Value, View};

/// Encodes a value. Nil values encode to [`Scalar::Null`].
pub fn encode(value: &Value) -> Result<Scalar> {
    match value.get() {
        None => Ok(Scalar::Null),
        Some(datum) => encode_datum(value.ty(), datum),
    }
}

/// Encodes `datum` as the kind of `ty`.
pub fn encode_datum(ty: &Type, datum: &Datum) -> Result<Scalar> {
    match ty.kind() {
        Kind::Bool => encode_bool(datum),
        Kind::I8 => encode_i8(datum),
        Kind::I16 => encode_i16(datum),
        Kind::I32 => encode_i32(datum),
        Kind::I64 => encode_i64(datum),
        Kind::U8 => encode_u8(datum),
        Kind::U16 => encode_u16(datum),
        Kind::U32 => encode_u32(datum),
        Kind::U64 => encode_u64(datum),
        Kind::F32 => encode_f32(datum),
        Kind::F64 => encode_f64(datum),
        Kind::String => encode_string(datum),
        Kind::DateTime => encode_datetime(datum),
        Kind::Struct => encode_struct(datum),
        Kind::Slice => match datum {
            Datum::List(items) => encode_sequence(ty.elem(), items),
            datum => Err(Error::encode(ty.to_string(), datum)),
        },
    }
}

/// Decodes `scalar` into a value of type `ty`. Same as
/// [`Type::construct`] with a seed.
pub fn decode(scalar: &Scalar, ty: &Type) -> Result<Value> {
    ty.construct(Some(scalar))
}

/// Decodes a non-null scalar into a datum of `ty`'s kind.
pub(crate) fn decode_datum(ty: &Type, scalar: &Scalar) -> Result<Datum> {
    match ty.kind() {
        Kind::Bool => decode_bool(scalar),
        Kind::I8 => decode_i8(scalar),
        Kind::I16 => decode_i16(scalar),
        Kind::I32 => decode_i32(scalar),
        Kind::I64 => decode_i64(scalar),
        Kind::U8 => decode_u8(scalar),
        Kind::U16 => decode_u16(scalar),
        Kind::U32 => decode_u32(scalar),
        Kind::U64 => decode_u64(scalar),
        Kind::F32 => decode_f32(scalar),
        Kind::F64 => decode_f64(scalar),
        Kind::String => decode_string(scalar),
        Kind::DateTime => decode_datetime(scalar),
        Kind::Struct => decode_struct(ty, scalar),
        Kind::Slice => decode_sequence(ty.elem(), scalar).map(Datum::List),
    }
}

/// `false` and `true` encode as `0` and `1`.
pub fn encode_bool(datum: &Datum) -> Result<Scalar> {
    match datum {
        Datum::Bool(v) => Ok(Scalar::I8(i8::from(*v))),
        datum => Err(Error::encode(Kind::Bool.name(), datum)),
    }
}

pub fn decode_bool(scalar: &Scalar) -> Result<Datum> {
    let v = match scalar {
        Scalar::String(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        scalar => match num::scalar_int(scalar) {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
    };

    v.map(Datum::Bool)
        .ok_or_else(|| Error::decode(Kind::Bool.name(), scalar))
}

pub fn encode_string(datum: &Datum) -> Result<Scalar> {
    match datum {
        Datum::String(v) => Ok(Scalar::String(v.clone())),
        datum => Err(Error::encode(Kind::String.name(), datum)),
    }
}

pub fn decode_string(scalar: &Scalar) -> Result<Datum> {
    match scalar {
        Scalar::String(v) => Ok(Datum::String(v.clone())),
        scalar => Err(Error::decode(Kind::String.name(), scalar)),
    }
}

/// A record encodes as its primary key.
pub fn encode_struct(datum: &Datum) -> Result<Scalar> {
    match datum {
        Datum::Struct(model) => encode(model.primary_field().value()),
        datum => Err(Error::encode(Kind::Struct.name(), datum)),
    }
}

/// Decodes a primary key into a fresh record of `ty` with only its key set.
pub fn decode_struct(ty: &Type, scalar: &Scalar) -> Result<Datum> {
    let Some(template) = ty.elem().template() else {
        return Err(Error::decode(ty.to_string(), scalar));
    };

    let mut model = template.copy(&View::Meta)?;
    let primary = model.primary_field_mut();
    let key = primary.ty().construct(Some(scalar))?;
    *primary.value_mut() = key;

    Ok(Datum::Struct(Box::new(model)))
}
