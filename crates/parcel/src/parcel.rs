//! The parcel buffer: a flat, ordered, 4-byte aligned byte stream.

use tracing::{debug, trace, warn};

use crate::config::ParcelLimits;
use crate::error::ParcelError;
use crate::parcelable::{Parcelable, WriteFlags};

/// Length prefix marking a null string or null list.
pub const NULL_MARKER: i32 = -1;

const ALIGN: usize = 4;

fn pad(len: usize) -> usize {
    (len + ALIGN - 1) & !(ALIGN - 1)
}

/// Sequential read/write buffer used to move records across a boundary.
///
/// Writes land at the current position (overwriting or growing the data)
/// and advance it; reads consume from the current position. After writing,
/// rewind with [`set_data_position`](Parcel::set_data_position) to read back.
///
/// All integers are little-endian and every item is padded to 4 bytes.
#[derive(Debug, Clone, Default)]
pub struct Parcel {
    data: Vec<u8>,
    position: usize,
    limits: ParcelLimits,
}

impl Parcel {
    /// Create an empty parcel with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty parcel with the given limits.
    pub fn with_limits(limits: ParcelLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Wrap previously marshalled bytes, positioned at the start.
    pub fn unmarshall(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            ..Self::default()
        }
    }

    /// Replace the limits.
    pub fn set_limits(&mut self, limits: ParcelLimits) {
        self.limits = limits;
    }

    /// Current limits.
    pub fn limits(&self) -> ParcelLimits {
        self.limits
    }

    /// Copy of the raw bytes.
    pub fn marshall(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Consume the parcel, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Total bytes held.
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// Current read/write offset.
    pub fn data_position(&self) -> usize {
        self.position
    }

    /// Bytes left between the position and the end of the data.
    pub fn data_avail(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move the read/write offset. Positions past the end are rejected.
    pub fn set_data_position(&mut self, position: usize) -> Result<(), ParcelError> {
        if position > self.data.len() {
            return Err(ParcelError::InvalidPosition {
                position,
                size: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    fn write_aligned(&mut self, bytes: &[u8]) {
        let start = self.position;
        let end = start + pad(bytes.len());
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        self.data[start + bytes.len()..end].fill(0);
        self.position = end;
    }

    fn read_aligned(&mut self, len: usize) -> Result<&[u8], ParcelError> {
        let needed = pad(len);
        let remaining = self.data_avail();
        if needed > remaining {
            return Err(ParcelError::Truncated { needed, remaining });
        }
        let start = self.position;
        self.position += needed;
        Ok(&self.data[start..start + len])
    }

    fn write_len(&mut self, len: usize, what: &'static str) -> Result<(), ParcelError> {
        let value = i32::try_from(len).map_err(|_| ParcelError::LimitExceeded {
            what,
            limit: i32::MAX as usize,
            actual: len,
        })?;
        self.write_i32(value);
        Ok(())
    }

    fn check_limit(what: &'static str, limit: usize, actual: usize) -> Result<(), ParcelError> {
        if actual > limit {
            return Err(ParcelError::LimitExceeded {
                what,
                limit,
                actual,
            });
        }
        Ok(())
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_aligned(&value.to_le_bytes());
    }

    pub fn read_i32(&mut self) -> Result<i32, ParcelError> {
        let bytes = self.read_aligned(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn write_i64(&mut self, value: i64) {
        self.write_aligned(&value.to_le_bytes());
    }

    pub fn read_i64(&mut self) -> Result<i64, ParcelError> {
        let bytes = self.read_aligned(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(i64::from_le_bytes(buf))
    }

    /// Booleans occupy one 32-bit slot holding 0 or 1.
    pub fn write_bool(&mut self, value: bool) {
        self.write_i32(i32::from(value));
    }

    pub fn read_bool(&mut self) -> Result<bool, ParcelError> {
        match self.read_i32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ParcelError::InvalidBool(other)),
        }
    }

    /// Write a nullable string: byte length (or [`NULL_MARKER`]), then the
    /// UTF-8 bytes padded to 4.
    ///
    /// Strings longer than the parcel's `max_string_len` are rejected before
    /// anything is written, so every written string can be read back.
    pub fn write_string(&mut self, value: Option<&str>) -> Result<(), ParcelError> {
        match value {
            Some(s) => {
                Self::check_limit("string length", self.limits.max_string_len, s.len())?;
                self.write_len(s.len(), "string length")?;
                self.write_aligned(s.as_bytes());
            }
            None => self.write_i32(NULL_MARKER),
        }
        Ok(())
    }

    pub fn read_string(&mut self) -> Result<Option<String>, ParcelError> {
        let len = self.read_i32()?;
        if len == NULL_MARKER {
            return Ok(None);
        }
        let len = usize::try_from(len).map_err(|_| ParcelError::InvalidLength(len))?;
        Self::check_limit("string length", self.limits.max_string_len, len)?;
        let bytes = self.read_aligned(len)?.to_vec();
        Ok(Some(String::from_utf8(bytes)?))
    }

    /// Read a string that must not be null; `field` names it in the error.
    pub fn read_required_string(&mut self, field: &'static str) -> Result<String, ParcelError> {
        self.read_string()?.ok_or(ParcelError::UnexpectedNull(field))
    }

    /// Write one record preceded by its type descriptor.
    pub fn write_parcelable<T: Parcelable>(
        &mut self,
        value: &T,
        flags: WriteFlags,
    ) -> Result<(), ParcelError> {
        self.write_string(Some(T::DESCRIPTOR))?;
        value.write_to_parcel(self, flags)
    }

    /// Read one record, checking its descriptor against `T`.
    pub fn read_parcelable<T: Parcelable>(&mut self) -> Result<T, ParcelError> {
        let descriptor = self.read_required_string("type descriptor")?;
        if descriptor != T::DESCRIPTOR {
            return Err(ParcelError::UnexpectedType {
                expected: T::DESCRIPTOR,
                actual: descriptor,
            });
        }
        T::read_from_parcel(self)
    }

    /// Write a count-prefixed list, each element preceded by its descriptor.
    ///
    /// Lists longer than the parcel's `max_list_len` are rejected before the
    /// count is written.
    pub fn write_typed_list<T: Parcelable>(
        &mut self,
        items: &[T],
        flags: WriteFlags,
    ) -> Result<(), ParcelError> {
        Self::check_limit("list length", self.limits.max_list_len, items.len())?;
        self.write_len(items.len(), "list length")?;
        for item in items {
            self.write_parcelable(item, flags)?;
        }
        trace!(descriptor = T::DESCRIPTOR, count = items.len(), "Wrote typed list");
        Ok(())
    }

    /// Write the null-list marker.
    pub fn write_null_list(&mut self) {
        self.write_i32(NULL_MARKER);
    }

    /// Read a list written by [`write_typed_list`](Parcel::write_typed_list).
    ///
    /// A null-list marker reads back as an empty list. Any element whose
    /// descriptor differs from `T::DESCRIPTOR` fails the whole read.
    pub fn read_typed_list<T: Parcelable>(&mut self) -> Result<Vec<T>, ParcelError> {
        let count = self.read_i32()?;
        if count == NULL_MARKER {
            debug!(descriptor = T::DESCRIPTOR, "Null list marker, reading as empty");
            return Ok(Vec::new());
        }
        let count = usize::try_from(count).map_err(|_| ParcelError::InvalidLength(count))?;
        Self::check_limit("list length", self.limits.max_list_len, count)?;

        // Each element carries at least a descriptor length prefix.
        let remaining = self.data_avail();
        if count > remaining / ALIGN {
            return Err(ParcelError::CountMismatch {
                declared: count,
                remaining,
            });
        }

        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let item = self.read_parcelable::<T>().inspect_err(|e| {
                warn!(descriptor = T::DESCRIPTOR, index, count, "Rejected list element: {}", e);
            })?;
            items.push(item);
        }
        trace!(descriptor = T::DESCRIPTOR, count, "Read typed list");
        Ok(items)
    }
}

/// Marshal a single record (without a descriptor) into bytes with default
/// limits.
pub fn to_bytes<T: Parcelable>(value: &T, flags: WriteFlags) -> Result<Vec<u8>, ParcelError> {
    to_bytes_with_limits(value, flags, ParcelLimits::default())
}

/// Like [`to_bytes`] with explicit limits; output always reads back under
/// the same limits.
pub fn to_bytes_with_limits<T: Parcelable>(
    value: &T,
    flags: WriteFlags,
    limits: ParcelLimits,
) -> Result<Vec<u8>, ParcelError> {
    let mut parcel = Parcel::with_limits(limits);
    value.write_to_parcel(&mut parcel, flags)?;
    Ok(parcel.into_bytes())
}

/// Read a record produced by [`to_bytes`] with default limits, rejecting
/// trailing bytes.
pub fn from_bytes<T: Parcelable>(bytes: &[u8]) -> Result<T, ParcelError> {
    from_bytes_with_limits(bytes, ParcelLimits::default())
}

/// Like [`from_bytes`] with explicit limits.
pub fn from_bytes_with_limits<T: Parcelable>(
    bytes: &[u8],
    limits: ParcelLimits,
) -> Result<T, ParcelError> {
    let mut parcel = Parcel::unmarshall(bytes);
    parcel.set_limits(limits);
    let value = T::read_from_parcel(&mut parcel)?;
    match parcel.data_avail() {
        0 => Ok(value),
        extra => Err(ParcelError::TrailingData(extra)),
    }
}
