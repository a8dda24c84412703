use packed_samples::{BitDepth, PackedSamples, SampleError};

const ALL_DEPTHS: [BitDepth; 5] =
  [BitDepth::One, BitDepth::Two, BitDepth::Four, BitDepth::Eight, BitDepth::Sixteen];

fn collect(samples: PackedSamples<'_>) -> Vec<u16> {
  samples.iter().collect()
}

#[test]
fn test_depth_1_unpacks_every_bit_high_to_low() {
  let samples = PackedSamples::new(&[0b1011_0010], BitDepth::One);
  assert_eq!(collect(samples), [1, 0, 1, 1, 0, 0, 1, 0]);
}

#[test]
fn test_depth_2_unpacks_four_fields_high_to_low() {
  let samples = PackedSamples::new(&[0b1100_1001], BitDepth::Two);
  assert_eq!(collect(samples), [3, 0, 2, 1]);
}

#[test]
fn test_depth_4_unpacks_high_nibble_first() {
  let samples = PackedSamples::new(&[0xAB], BitDepth::Four);
  assert_eq!(collect(samples), [0xA, 0xB]);
}

#[test]
fn test_depth_8_passes_bytes_through() {
  let samples = PackedSamples::new(&[0x12, 0x34], BitDepth::Eight);
  assert_eq!(collect(samples), [18, 52]);
}

#[test]
fn test_depth_16_combines_byte_pairs_big_endian() {
  let samples = PackedSamples::new(&[0x01, 0x02, 0x03, 0x04], BitDepth::Sixteen);
  assert_eq!(collect(samples), [0x0102, 0x0304]);
}

#[test]
fn test_depth_16_drops_a_trailing_odd_byte() {
  let samples = PackedSamples::new(&[0x01, 0x02, 0x03], BitDepth::Sixteen);
  assert_eq!(samples.len(), 1);
  assert_eq!(collect(samples), [0x0102]);
}

#[test]
fn test_empty_buffers_produce_nothing() {
  for depth in ALL_DEPTHS {
    let samples = PackedSamples::new(&[], depth);
    assert_eq!(samples.len(), 0);
    assert!(samples.is_empty());
    assert_eq!(samples.iter().next(), None);
  }
}

#[test]
fn test_len_matches_actual_sample_count() {
  for depth in ALL_DEPTHS {
    for byte_count in [0, 1, 2, 3, 7, 64, 1023] {
      let bytes = super::rand_bytes(byte_count);
      let samples = PackedSamples::new(&bytes, depth);
      let expected = (byte_count * 8) / usize::from(depth.bits_per_sample());
      assert_eq!(samples.len(), expected, "depth:{depth:?} byte_count:{byte_count}");
      assert_eq!(samples.iter().count(), expected, "depth:{depth:?} byte_count:{byte_count}");
    }
  }
}

#[test]
fn test_traversals_are_independent_and_repeatable() {
  for depth in ALL_DEPTHS {
    let bytes = super::rand_bytes(129);
    let samples = PackedSamples::new(&bytes, depth);
    let first: Vec<u16> = samples.iter().collect();
    let second: Vec<u16> = samples.iter().collect();
    assert_eq!(first, second, "depth:{depth:?}");

    // partially consuming one traversal doesn't disturb another.
    let mut partial = samples.iter();
    partial.next();
    partial.next();
    assert_eq!(collect(samples), first, "depth:{depth:?}");
  }
}

#[test]
fn test_sample_values_stay_in_depth_range() {
  for depth in [BitDepth::One, BitDepth::Two, BitDepth::Four] {
    let bytes = super::rand_bytes(257);
    let max = (1_u16 << depth.bits_per_sample()) - 1;
    for sample in PackedSamples::new(&bytes, depth) {
      assert!(sample <= max, "depth:{depth:?} sample:{sample}");
    }
  }
}

#[test]
fn test_try_new_rejects_illegal_depths() {
  for depth in [0, 3, 5, 6, 7, 9, 15, 17, 32, 64, 255] {
    assert_eq!(
      PackedSamples::try_new(&[0xFF], depth).unwrap_err(),
      SampleError::InvalidBitDepth(depth),
      "depth:{depth}"
    );
  }
  for depth in [1, 2, 4, 8, 16] {
    assert!(PackedSamples::try_new(&[0xFF], depth).is_ok(), "depth:{depth}");
  }
}

#[test]
fn test_scaled_iteration_replicates_bits() {
  let one = PackedSamples::new(&[0b1011_0010], BitDepth::One);
  assert!(one.iter_scaled_depth_8().eq([255, 0, 255, 255, 0, 0, 255, 0]));

  let two = PackedSamples::new(&[0b1100_1001], BitDepth::Two);
  assert!(two.iter_scaled_depth_8().eq([0b1111_1111, 0, 0b1010_1010, 0b0101_0101]));

  let four = PackedSamples::new(&[0xAB], BitDepth::Four);
  assert!(four.iter_scaled_depth_8().eq([0xAA, 0xBB]));

  let eight = PackedSamples::new(&[0x12, 0x34], BitDepth::Eight);
  assert!(eight.iter_scaled_depth_8().eq([0x12, 0x34]));

  let sixteen = PackedSamples::new(&[0x01, 0x02, 0xFF, 0xFE], BitDepth::Sixteen);
  assert!(sixteen.iter_scaled_depth_8().eq([0x01, 0xFF]));
}
