use super::{decode_datum, encode_datum, Scalar};
use crate::{model::Datum, Error, Result, Type};

/// Encodes sequence items with the element type's encoder.
///
/// No items encode as an empty string and a single item as its bare scalar.
/// Two or more items encode as JSON array text. A single item that would
/// read back as a sequence on its own (empty, or text starting with `[`) is
/// bracketed as well.
pub fn encode_sequence(elem: &Type, items: &[Datum]) -> Result<Scalar> {
    let mut encoded = items
        .iter()
        .map(|item| encode_datum(elem, item))
        .collect::<Result<Vec<_>>>()?;

    match encoded.len() {
        0 => return Ok(Scalar::String(String::new())),
        1 if !is_ambiguous(&encoded[0]) => return Ok(encoded.remove(0)),
        _ => {}
    }

    let json = encoded
        .iter()
        .map(Scalar::to_json)
        .collect::<Result<Vec<_>>>()?;

    Ok(Scalar::String(serde_json::to_string(&json)?))
}

/// Decodes sequence items with the element type's decoder.
///
/// Text starting with `[` is parsed as a JSON array; any other non-empty
/// scalar is a single item.
pub fn decode_sequence(elem: &Type, scalar: &Scalar) -> Result<Vec<Datum>> {
    match scalar {
        Scalar::Null => Ok(vec![]),
        Scalar::String(text) if text.trim().is_empty() => Ok(vec![]),
        Scalar::String(text) if text.trim_start().starts_with('[') => {
            let items: Vec<serde_json::Value> = serde_json::from_str(text)
                .map_err(|_| Error::decode(format!("Vec<{}>", elem.name()), scalar))?;

            items
                .iter()
                .map(|item| decode_datum(elem, &Scalar::from_json(item)?))
                .collect()
        }
        scalar => Ok(vec![decode_datum(elem, scalar)?]),
    }
}

fn is_ambiguous(scalar: &Scalar) -> bool {
    match scalar {
        Scalar::String(text) => text.trim().is_empty() || text.trim_start().starts_with('['),
        _ => false,
    }
}
