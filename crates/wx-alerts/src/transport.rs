use base64::Engine;
use parcel::{ParcelLimits, Parcelable, WriteFlags};

use crate::Error;

/// Encoding tag for base64-wrapped parcels.
pub const PARCEL_ENCODING: &str = "parcel-v1";

/// Marshal a record under `limits` and wrap the bytes as base64 text,
/// returning the content and its encoding tag.
///
/// Anything this accepts decodes with [`decode_parcel`] under the same limits.
pub fn encode_parcel<T: Parcelable>(
    value: &T,
    flags: WriteFlags,
    limits: ParcelLimits,
) -> Result<(String, &'static str), Error> {
    let bytes = parcel::to_bytes_with_limits(value, flags, limits)?;
    let content = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok((content, PARCEL_ENCODING))
}

/// Reverse of [`encode_parcel`]. A missing tag is read as [`PARCEL_ENCODING`];
/// any other tag is rejected before decoding.
pub fn decode_parcel<T: Parcelable>(
    content: &str,
    enc_tag: Option<&str>,
    limits: ParcelLimits,
) -> Result<T, Error> {
    if let Some(enc) = enc_tag {
        if enc != PARCEL_ENCODING {
            return Err(Error::EncodingMismatch {
                expected: PARCEL_ENCODING.to_string(),
                actual: enc.to_string(),
            });
        }
    }
    let bytes = base64::engine::general_purpose::STANDARD.decode(content.trim())?;
    Ok(parcel::from_bytes_with_limits(&bytes, limits)?)
}
