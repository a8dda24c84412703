use bytemuck::{Pod, Zeroable};

/// A `u16` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u16` it has an
/// alignment of 1 and can be read straight out of a byte stream.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U16BE([u8; 2]);
impl U16BE {
  /// Convert this value to a native `u16`
  #[inline]
  #[must_use]
  pub const fn to_u16(self) -> u16 {
    u16::from_be_bytes(self.0)
  }
  /// Make a value from a native `u16`
  #[inline]
  #[must_use]
  pub const fn from_u16(u: u16) -> Self {
    Self(u.to_be_bytes())
  }
}
impl core::fmt::Debug for U16BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U16BE").field(&self.to_u16()).finish()
  }
}
impl From<u16> for U16BE {
  #[inline]
  #[must_use]
  fn from(value: u16) -> Self {
    Self::from_u16(value)
  }
}
impl From<U16BE> for u16 {
  #[inline]
  #[must_use]
  fn from(value: U16BE) -> Self {
    value.to_u16()
  }
}
