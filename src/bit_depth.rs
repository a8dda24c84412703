//! The legal PNG bit depths.

use crate::SampleError;

/// Bits per sample within a packed buffer.
///
/// This is a closed set: every legal depth has a variant, and holding a
/// `BitDepth` means the depth byte already passed validation. The variant
/// picked at construction selects the extraction path for a whole
/// traversal, there's no per-sample re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BitDepth {
  /// 1 bit per sample, 8 samples per byte.
  One = 1,
  /// 2 bits per sample, 4 samples per byte.
  Two = 2,
  /// 4 bits per sample, 2 samples per byte.
  Four = 4,
  /// 8 bits per sample, the byte itself.
  Eight = 8,
  /// 16 bits per sample, a big-endian byte pair.
  Sixteen = 16,
}
impl BitDepth {
  /// The number of bits used to encode one sample.
  #[inline]
  #[must_use]
  pub const fn bits_per_sample(self) -> u8 {
    self as u8
  }
}
impl TryFrom<u8> for BitDepth {
  type Error = SampleError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      1 => BitDepth::One,
      2 => BitDepth::Two,
      4 => BitDepth::Four,
      8 => BitDepth::Eight,
      16 => BitDepth::Sixteen,
      _ => return Err(SampleError::InvalidBitDepth(value)),
    })
  }
}
