//! Size limits for parcels, applied on both write and read.

use std::env;

/// Default maximum number of elements accepted in one list.
pub const DEFAULT_MAX_LIST_LEN: usize = 4096;

/// Default maximum string length in bytes.
pub const DEFAULT_MAX_STRING_LEN: usize = 64 * 1024;

/// Bounds on list and string sizes. Writes past a bound fail, so anything
/// written under a set of limits reads back under the same limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcelLimits {
    /// Maximum element count of a typed list.
    pub max_list_len: usize,

    /// Maximum byte length of a single string.
    pub max_string_len: usize,
}

impl Default for ParcelLimits {
    fn default() -> Self {
        Self {
            max_list_len: DEFAULT_MAX_LIST_LEN,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }
}

impl ParcelLimits {
    /// Create limits from environment variables.
    ///
    /// Optional environment variables:
    /// - `WX_PARCEL_MAX_LIST_LEN` - Max list elements (default: 4096)
    /// - `WX_PARCEL_MAX_STRING_LEN` - Max string bytes (default: 65536)
    ///
    /// Values that fail to parse fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_list_len = lookup("WX_PARCEL_MAX_LIST_LEN")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_LIST_LEN);

        let max_string_len = lookup("WX_PARCEL_MAX_STRING_LEN")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_STRING_LEN);

        Self {
            max_list_len,
            max_string_len,
        }
    }

    /// Set the maximum list length.
    pub fn with_max_list_len(mut self, max: usize) -> Self {
        self.max_list_len = max;
        self
    }

    /// Set the maximum string length.
    pub fn with_max_string_len(mut self, max: usize) -> Self {
        self.max_string_len = max;
        self
    }
}
