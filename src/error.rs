/// An error from the `packed_samples` crate.
///
/// Both variants are input validation failures raised before any traversal
/// begins. Decoding a buffer through an already-constructed sequencer can't
/// fail, so these carry enough to tell the caller which piece of upstream
/// metadata was bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SampleError {
  /// The color type byte wasn't one of the five legal tags (0, 2, 3, 4, 6).
  InvalidColorType(u8),

  /// The bit depth byte wasn't one of the five legal depths (1, 2, 4, 8, 16).
  InvalidBitDepth(u8),
}
