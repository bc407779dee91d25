//! A single weather alert headline.

use std::cmp::Ordering;

use parcel::{Parcel, ParcelError, Parcelable, WriteFlags};
use serde::{Deserialize, Serialize};

/// Severity code for alerts whose severity is not known.
pub const SEVERITY_UNKNOWN: i32 = 0;

/// One alert headline.
///
/// Only `detail_key` is required. The remaining fields default to null or
/// zero so a feed entry carrying nothing but a key is still a valid alert.
///
/// # Ordering
///
/// Alerts sort most urgent first:
///
/// 1. `severity_code` ascending (1 is the most severe); unknown or
///    non-positive codes sort after every known code
/// 2. newest `issue_time_ms` first
/// 3. `detail_key` lexicographically
///
/// Remaining fields break any tie so the ordering agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Opaque key used to fetch the alert's full text,
    /// e.g. "59c65e0f-9c3b-3daf-b0b0-f804e56d6e87".
    pub detail_key: String,

    /// Phenomenon code (e.g. "WS" for winter storm).
    #[serde(default)]
    pub phenomena: Option<String>,

    /// Significance code (e.g. "W" warning, "A" watch, "Y" advisory).
    #[serde(default)]
    pub significance: Option<String>,

    #[serde(default)]
    pub event_description: Option<String>,

    #[serde(default)]
    pub headline_text: Option<String>,

    #[serde(default)]
    pub severity_code: i32,

    /// Issue time (epoch millis).
    #[serde(default)]
    pub issue_time_ms: i64,

    /// Expiry time (epoch millis).
    #[serde(default)]
    pub expire_time_ms: i64,
}

impl Alert {
    /// Create an alert carrying only its detail key.
    pub fn new(detail_key: impl Into<String>) -> Self {
        Self {
            detail_key: detail_key.into(),
            phenomena: None,
            significance: None,
            event_description: None,
            headline_text: None,
            severity_code: SEVERITY_UNKNOWN,
            issue_time_ms: 0,
            expire_time_ms: 0,
        }
    }

    pub fn with_phenomena(mut self, phenomena: impl Into<String>) -> Self {
        self.phenomena = Some(phenomena.into());
        self
    }

    pub fn with_significance(mut self, significance: impl Into<String>) -> Self {
        self.significance = Some(significance.into());
        self
    }

    pub fn with_event_description(mut self, description: impl Into<String>) -> Self {
        self.event_description = Some(description.into());
        self
    }

    pub fn with_headline_text(mut self, text: impl Into<String>) -> Self {
        self.headline_text = Some(text.into());
        self
    }

    pub fn with_severity_code(mut self, code: i32) -> Self {
        self.severity_code = code;
        self
    }

    pub fn with_issue_time_ms(mut self, ms: i64) -> Self {
        self.issue_time_ms = ms;
        self
    }

    pub fn with_expire_time_ms(mut self, ms: i64) -> Self {
        self.expire_time_ms = ms;
        self
    }

    fn severity_rank(&self) -> i32 {
        if self.severity_code > SEVERITY_UNKNOWN {
            self.severity_code
        } else {
            i32::MAX
        }
    }
}

impl Ord for Alert {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity_rank()
            .cmp(&other.severity_rank())
            .then_with(|| other.issue_time_ms.cmp(&self.issue_time_ms))
            .then_with(|| self.detail_key.cmp(&other.detail_key))
            .then_with(|| self.severity_code.cmp(&other.severity_code))
            .then_with(|| self.expire_time_ms.cmp(&other.expire_time_ms))
            .then_with(|| self.phenomena.cmp(&other.phenomena))
            .then_with(|| self.significance.cmp(&other.significance))
            .then_with(|| self.event_description.cmp(&other.event_description))
            .then_with(|| self.headline_text.cmp(&other.headline_text))
    }
}

impl PartialOrd for Alert {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Parcelable for Alert {
    const DESCRIPTOR: &'static str = "wx.alerts.Alert";

    fn write_to_parcel(&self, dest: &mut Parcel, _flags: WriteFlags) -> Result<(), ParcelError> {
        dest.write_string(Some(&self.detail_key))?;
        dest.write_string(self.phenomena.as_deref())?;
        dest.write_string(self.significance.as_deref())?;
        dest.write_string(self.event_description.as_deref())?;
        dest.write_string(self.headline_text.as_deref())?;
        dest.write_i32(self.severity_code);
        dest.write_i64(self.issue_time_ms);
        dest.write_i64(self.expire_time_ms);
        Ok(())
    }

    fn read_from_parcel(source: &mut Parcel) -> Result<Self, ParcelError> {
        Ok(Self {
            detail_key: source.read_required_string("detail_key")?,
            phenomena: source.read_string()?,
            significance: source.read_string()?,
            event_description: source.read_string()?,
            headline_text: source.read_string()?,
            severity_code: source.read_i32()?,
            issue_time_ms: source.read_i64()?,
            expire_time_ms: source.read_i64()?,
        })
    }
}
