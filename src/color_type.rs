//! The PNG color types and how many samples each one packs per pixel.

use crate::SampleError;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette entries are full RGB values, so an index counts as one
  /// sample no matter what it points at.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl ColorType {
  /// The number of samples that make up one pixel of this color type.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// The tag byte this color type is stored as.
  #[inline]
  #[must_use]
  pub const fn to_u8(self) -> u8 {
    self as u8
  }
}
impl TryFrom<u8> for ColorType {
  type Error = SampleError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => ColorType::Y,
      2 => ColorType::RGB,
      3 => ColorType::Index,
      4 => ColorType::YA,
      6 => ColorType::RGBA,
      _ => return Err(SampleError::InvalidColorType(value)),
    })
  }
}
