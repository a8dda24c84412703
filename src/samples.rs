//! The sample sequencer: a packed buffer plus a depth, and iteration over
//! the sample values inside it.

use bitfrob::{u8_replicate_bits, U8BitIterHigh};
use bytemuck::checked::pod_read_unaligned;

use crate::{BitDepth, SampleError, U16BE};

/// A byte buffer viewed as a packed sequence of samples at some bit depth.
///
/// This holds only the buffer reference and the depth, never a cursor.
/// Each call to [`iter`](Self::iter) starts a fresh traversal from the
/// buffer's beginning, so any number of traversals (on any number of
/// threads) can run over the same value without coordination.
///
/// The buffer is never copied or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedSamples<'b> {
  bytes: &'b [u8],
  depth: BitDepth,
}
impl<'b> PackedSamples<'b> {
  /// View `bytes` as samples packed at `depth`.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8], depth: BitDepth) -> Self {
    Self { bytes, depth }
  }

  /// Like [`new`](Self::new), but validates a raw depth byte first.
  ///
  /// ## Failure
  /// * [`SampleError::InvalidBitDepth`] if `depth` isn't 1, 2, 4, 8, or 16.
  #[inline]
  pub fn try_new(bytes: &'b [u8], depth: u8) -> Result<Self, SampleError> {
    Ok(Self::new(bytes, BitDepth::try_from(depth)?))
  }

  /// The buffer being viewed.
  #[inline]
  #[must_use]
  pub const fn bytes(&self) -> &'b [u8] {
    self.bytes
  }

  /// The depth the buffer is packed at.
  #[inline]
  #[must_use]
  pub const fn depth(&self) -> BitDepth {
    self.depth
  }

  /// The number of samples a full traversal produces.
  ///
  /// This is `(buffer_len * 8) / depth`, rounded down. The rounding only
  /// ever matters at depth 16, where an odd trailing byte doesn't form a
  /// full sample (see [`iter`](Self::iter)).
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    match self.depth {
      BitDepth::One => self.bytes.len().saturating_mul(8),
      BitDepth::Two => self.bytes.len().saturating_mul(4),
      BitDepth::Four => self.bytes.len().saturating_mul(2),
      BitDepth::Eight => self.bytes.len(),
      BitDepth::Sixteen => self.bytes.len() / 2,
    }
  }

  /// If a traversal would produce no samples at all.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Iterate the sample values, in buffer order.
  ///
  /// Samples come out most-significant-group first within each byte, so
  /// `[0xAB]` at depth 4 gives `0xA` then `0xB`. Depth 16 samples combine
  /// two consecutive bytes big-endian; if the buffer length is odd the
  /// trailing lone byte produces nothing.
  ///
  /// The iterator is lazy, each sample is only extracted when pulled.
  #[inline]
  pub fn iter(&self) -> SampleIter<'b> {
    SampleIter { spare: self.bytes, depth: self.depth, bits: None }
  }

  /// Iterate the samples with each value scaled up to the full `u8` range.
  ///
  /// Sub-byte samples get their bits replicated (depth 1: `1` becomes
  /// `0xFF`, depth 4: `0xA` becomes `0xAA`, and so on), depth 8 samples
  /// pass through, and depth 16 samples keep their high byte.
  #[inline]
  pub fn iter_scaled_depth_8(&self) -> impl Iterator<Item = u8> + 'b {
    let depth = self.depth;
    self.iter().map(move |sample| match depth {
      BitDepth::Sixteen => (sample >> 8) as u8,
      BitDepth::Eight => sample as u8,
      sub_byte => u8_replicate_bits(u32::from(sub_byte.bits_per_sample()), sample as u8),
    })
  }
}
impl<'b> IntoIterator for PackedSamples<'b> {
  type Item = u16;
  type IntoIter = SampleIter<'b>;
  #[inline]
  fn into_iter(self) -> SampleIter<'b> {
    self.iter()
  }
}
impl<'b> IntoIterator for &PackedSamples<'b> {
  type Item = u16;
  type IntoIter = SampleIter<'b>;
  #[inline]
  fn into_iter(self) -> SampleIter<'b> {
    self.iter()
  }
}

/// Iterator over the samples of a [`PackedSamples`] view.
///
/// The only state carried between pulls is the unconsumed tail of the
/// buffer and, for sub-byte depths, the groups still pending within the
/// byte currently being split.
pub struct SampleIter<'b> {
  spare: &'b [u8],
  depth: BitDepth,
  bits: Option<U8BitIterHigh>,
}
impl<'b> Iterator for SampleIter<'b> {
  type Item = u16;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if let Some(group_iter) = self.bits.as_mut() {
      if let Some(group) = group_iter.next() {
        return Some(u16::from(group));
      }
      self.bits = None;
    }
    match self.depth {
      BitDepth::Sixteen => {
        if self.spare.len() < 2 {
          // an odd trailing byte can't form a sample and is dropped.
          self.spare = &[];
          return None;
        }
        let (unit, rest) = self.spare.split_at(2);
        self.spare = rest;
        Some(pod_read_unaligned::<U16BE>(unit).to_u16())
      }
      BitDepth::Eight => {
        let (byte, rest) = self.spare.split_first()?;
        self.spare = rest;
        Some(u16::from(*byte))
      }
      sub_byte => {
        let (byte, rest) = self.spare.split_first()?;
        self.spare = rest;
        let mut group_iter =
          U8BitIterHigh::from_count_and_bits(u32::from(sub_byte.bits_per_sample()), *byte);
        let first = group_iter.next().map(u16::from);
        self.bits = Some(group_iter);
        first
      }
    }
  }
}

#[test]
fn test_sample_iter_splits_bytes_msb_first() {
  let two = PackedSamples::new(&[0b1110_0100], BitDepth::Two);
  assert!(two.iter().eq([3, 2, 1, 0]));

  let four = PackedSamples::new(&[0xAB, 0xCD], BitDepth::Four);
  assert!(four.iter().eq([0xA, 0xB, 0xC, 0xD]));
}
