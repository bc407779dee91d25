use parcel::{Parcel, ParcelError, Parcelable, WriteFlags};
use serde::{Deserialize, Serialize};

/// State shared by every weather data record, written ahead of the
/// record's own fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WxDataHeader {
    /// Request or location key the data was fetched for.
    #[serde(default)]
    pub source_key: Option<String>,

    /// When the data was produced (epoch millis).
    #[serde(default)]
    pub valid_time_ms: i64,

    /// When the data goes stale (epoch millis).
    #[serde(default)]
    pub expire_time_ms: i64,
}

impl WxDataHeader {
    pub fn new(source_key: impl Into<String>, valid_time_ms: i64, expire_time_ms: i64) -> Self {
        Self {
            source_key: Some(source_key.into()),
            valid_time_ms,
            expire_time_ms,
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expire_time_ms
    }
}

impl Parcelable for WxDataHeader {
    const DESCRIPTOR: &'static str = "wx.alerts.WxDataHeader";

    fn write_to_parcel(&self, dest: &mut Parcel, _flags: WriteFlags) -> Result<(), ParcelError> {
        dest.write_string(self.source_key.as_deref())?;
        dest.write_i64(self.valid_time_ms);
        dest.write_i64(self.expire_time_ms);
        Ok(())
    }

    fn read_from_parcel(source: &mut Parcel) -> Result<Self, ParcelError> {
        Ok(Self {
            source_key: source.read_string()?,
            valid_time_ms: source.read_i64()?,
            expire_time_ms: source.read_i64()?,
        })
    }
}
