use super::Scalar;
use crate::{model::Datum, Error, Kind, Result};
use jiff::civil::DateTime;

/// `YYYY-MM-DD hh:mm:ss`
pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a datetime with [`DATETIME_LAYOUT`]. The unset timestamp
/// encodes as an empty string. The layout has no fractional part, so
/// sub-second precision is dropped.
pub fn encode_datetime(datum: &Datum) -> Result<Scalar> {
    match datum {
        Datum::DateTime(v) if *v == Datum::ZERO_DATETIME => Ok(Scalar::String(String::new())),
        Datum::DateTime(v) => Ok(Scalar::String(v.strftime(DATETIME_LAYOUT).to_string())),
        datum => Err(Error::encode(Kind::DateTime.name(), datum)),
    }
}

/// Parses [`DATETIME_LAYOUT`], falling back to ISO 8601. An empty string
/// decodes to the unset timestamp.
pub fn decode_datetime(scalar: &Scalar) -> Result<Datum> {
    let Scalar::String(text) = scalar else {
        return Err(Error::decode(Kind::DateTime.name(), scalar));
    };

    let text = text.trim();
    if text.is_empty() {
        return Ok(Datum::DateTime(Datum::ZERO_DATETIME));
    }

    DateTime::strptime(DATETIME_LAYOUT, text)
        .or_else(|_| text.parse::<DateTime>())
        .map(Datum::DateTime)
        .map_err(|_| Error::decode(Kind::DateTime.name(), scalar))
}
