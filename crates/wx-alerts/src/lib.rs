//! Weather alert headline records that travel as parcels.
//!
//! # Records
//!
//! | Type | Descriptor | Contents |
//! |------|------------|----------|
//! | [`WxDataHeader`] | `wx.alerts.WxDataHeader` | source key, valid/expire times |
//! | [`Alert`] | `wx.alerts.Alert` | detail key plus headline fields |
//! | [`WxAlertHeadlines`] | `wx.alerts.WxAlertHeadlines` | header, then the alert list |
//!
//! `WxAlertHeadlines` writes its header first and its alert list second,
//! and reads them back in the same order.
//!
//! # Example
//!
//! ```rust
//! use wx_alerts::{Alert, WxAlertHeadlines, WxDataHeader};
//! use parcel::{Parcel, Parcelable, WriteFlags};
//!
//! let headlines = WxAlertHeadlines::with_alerts(
//!     WxDataHeader::new("47.61,-122.33", 0, 900_000),
//!     vec![Alert::new("59c65e0f-9c3b-3daf-b0b0-f804e56d6e87")],
//! );
//!
//! let mut parcel = Parcel::new();
//! headlines.write_to_parcel(&mut parcel, WriteFlags::NONE)?;
//! parcel.set_data_position(0)?;
//! let back = WxAlertHeadlines::read_from_parcel(&mut parcel)?;
//! assert_eq!(back, headlines);
//! # Ok::<(), parcel::ParcelError>(())
//! ```
//!
//! # Text transport
//!
//! [`encode_parcel`] and [`decode_parcel`] wrap marshalled bytes as base64
//! tagged with [`PARCEL_ENCODING`].

mod alert;
mod error;
mod header;
mod headlines;
mod transport;

pub use alert::{Alert, SEVERITY_UNKNOWN};
pub use error::Error;
pub use header::WxDataHeader;
pub use headlines::WxAlertHeadlines;
pub use transport::{decode_parcel, encode_parcel, PARCEL_ENCODING};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
