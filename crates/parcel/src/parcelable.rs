//! The record contract for types that travel inside a parcel.

use std::ops::BitOr;

use crate::error::ParcelError;
use crate::parcel::Parcel;

/// Opaque write flags owned by the host transfer mechanism.
///
/// Flags are handed down to nested writes unchanged and are never encoded,
/// so field bytes are identical whatever value is passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WriteFlags(u32);

impl WriteFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);

    /// The record is being written as the return value of a call.
    pub const RETURN_VALUE: Self = Self(0x1);

    /// Wrap a raw bitmask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bitmask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for WriteFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A record that can be written to and rebuilt from a [`Parcel`].
///
/// Implementations must read their fields in exactly the order they write
/// them. A record composed of other records writes the inner record first
/// (its "base" state) and then its own fields, and reads in the same order.
///
/// # Example
///
/// ```rust
/// use parcel::{Parcel, ParcelError, Parcelable, WriteFlags};
///
/// #[derive(Debug, PartialEq)]
/// struct Station {
///     id: String,
///     elevation_m: i32,
/// }
///
/// impl Parcelable for Station {
///     const DESCRIPTOR: &'static str = "wx.Station";
///
///     fn write_to_parcel(&self, dest: &mut Parcel, _flags: WriteFlags) -> Result<(), ParcelError> {
///         dest.write_string(Some(&self.id))?;
///         dest.write_i32(self.elevation_m);
///         Ok(())
///     }
///
///     fn read_from_parcel(source: &mut Parcel) -> Result<Self, ParcelError> {
///         Ok(Self {
///             id: source.read_required_string("id")?,
///             elevation_m: source.read_i32()?,
///         })
///     }
/// }
///
/// let station = Station { id: "KSEA".into(), elevation_m: 131 };
/// let bytes = parcel::to_bytes(&station, WriteFlags::NONE)?;
/// let back: Station = parcel::from_bytes(&bytes)?;
/// assert_eq!(station, back);
/// # Ok::<(), ParcelError>(())
/// ```
pub trait Parcelable: Sized {
    /// Type descriptor written ahead of each element in a typed list.
    const DESCRIPTOR: &'static str;

    /// Append this record's fields to `dest`.
    fn write_to_parcel(&self, dest: &mut Parcel, flags: WriteFlags) -> Result<(), ParcelError>;

    /// Rebuild a record from `source`, consuming exactly what
    /// [`write_to_parcel`](Parcelable::write_to_parcel) produced.
    fn read_from_parcel(source: &mut Parcel) -> Result<Self, ParcelError>;
}
