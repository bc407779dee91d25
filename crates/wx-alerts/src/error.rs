use thiserror::Error;

use parcel::ParcelError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parcel error: {0}")]
    Parcel(#[from] ParcelError),
    #[error("serde json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding tag mismatch: expected {expected}, got {actual}")]
    EncodingMismatch { expected: String, actual: String },
}
