//! Flat binary transfer stream for moving records across a process or
//! component boundary.
//!
//! This crate provides:
//!
//! - [`Parcel`] - A sequential, 4-byte aligned, little-endian byte buffer
//! - [`Parcelable`] - The contract a record implements to travel in a parcel
//! - [`WriteFlags`] - Opaque flags passed through every write
//! - [`ParcelError`] - Malformed-stream errors raised on read
//! - [`ParcelLimits`] - Size bounds checked on write and read, loadable from the environment
//!
//! # Wire layout
//!
//! | Item | Encoding |
//! |------|----------|
//! | `i32` | 4 bytes LE |
//! | `i64` | 8 bytes LE |
//! | `bool` | `i32` 0 or 1 |
//! | string | `i32` byte length (`-1` = null), UTF-8 bytes, zero padding to 4 |
//! | typed list | `i32` count (`-1` = null), then per element: descriptor string, fields |
//!
//! Typed lists are statically bound to one element type. Each element's
//! descriptor is checked on read, so a stream carrying a different record
//! type fails with [`ParcelError::UnexpectedType`] instead of being coerced.

mod config;
mod error;
mod parcel;
mod parcelable;

pub use config::{ParcelLimits, DEFAULT_MAX_LIST_LEN, DEFAULT_MAX_STRING_LEN};
pub use error::ParcelError;
pub use parcel::{
    from_bytes, from_bytes_with_limits, to_bytes, to_bytes_with_limits, Parcel, NULL_MARKER,
};
pub use parcelable::{Parcelable, WriteFlags};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
