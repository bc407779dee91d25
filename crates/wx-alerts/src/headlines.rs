//! The alert headline list and its parcel contract.

use parcel::{Parcel, ParcelError, Parcelable, WriteFlags};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::alert::Alert;
use crate::header::WxDataHeader;
use crate::Error;

/// Ordered alert headlines for one location.
///
/// Insertion order is kept through every round trip; duplicates are allowed.
/// Use [`sorted_alerts`](WxAlertHeadlines::sorted_alerts) for a
/// severity-ordered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WxAlertHeadlines {
    #[serde(default)]
    pub header: WxDataHeader,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub alerts: Vec<Alert>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Alert>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Alert>>::deserialize(deserializer)?.unwrap_or_default())
}

impl WxAlertHeadlines {
    pub fn new(header: WxDataHeader) -> Self {
        Self {
            header,
            alerts: Vec::new(),
        }
    }

    pub fn with_alerts(header: WxDataHeader, alerts: Vec<Alert>) -> Self {
        Self { header, alerts }
    }

    /// Parse a headline feed body of the form `{"alerts": [...]}`.
    ///
    /// A missing or null `alerts` member yields an empty list.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let headlines: Self = serde_json::from_str(body)?;
        debug!(count = headlines.alerts.len(), "Parsed alert headlines");
        Ok(headlines)
    }

    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }

    /// Sorted copy of the alerts; the stored order is left as is.
    pub fn sorted_alerts(&self) -> Vec<Alert> {
        let mut sorted = self.alerts.clone();
        sorted.sort();
        sorted
    }

    /// First alert with the given detail key.
    pub fn find_by_detail_key(&self, detail_key: &str) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.detail_key == detail_key)
    }
}

impl<'a> IntoIterator for &'a WxAlertHeadlines {
    type Item = &'a Alert;
    type IntoIter = std::slice::Iter<'a, Alert>;

    fn into_iter(self) -> Self::IntoIter {
        self.alerts.iter()
    }
}

impl Parcelable for WxAlertHeadlines {
    const DESCRIPTOR: &'static str = "wx.alerts.WxAlertHeadlines";

    fn write_to_parcel(&self, dest: &mut Parcel, flags: WriteFlags) -> Result<(), ParcelError> {
        self.header.write_to_parcel(dest, flags)?;
        dest.write_typed_list(&self.alerts, flags)
    }

    fn read_from_parcel(source: &mut Parcel) -> Result<Self, ParcelError> {
        let header = WxDataHeader::read_from_parcel(source)?;
        let alerts = source.read_typed_list::<Alert>()?;
        Ok(Self { header, alerts })
    }
}
