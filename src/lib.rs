#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! A crate for pulling individual sample values out of packed byte buffers.
//!
//! PNG-style pixel data stores each channel sample at a declared bit depth
//! of 1, 2, 4, 8, or 16 bits, packed most-significant-bit first within each
//! byte (big-endian byte pairs for 16). This crate turns such a buffer into
//! the flat stream of sample values it contains:
//!
//! ```
//! use packed_samples::{BitDepth, PackedSamples};
//!
//! let samples = PackedSamples::new(&[0b1100_1001], BitDepth::Two);
//! assert_eq!(samples.iter().collect::<Vec<u16>>(), [3, 0, 2, 1]);
//! ```
//!
//! Grouping the flat stream into pixels is the caller's job: resolve the
//! samples-per-pixel count from the image's [`ColorType`] and chunk the
//! stream accordingly.
//!
//! This crate does *not* parse chunk structures, decompress image data, or
//! apply filter/color transforms. It's the layer below all of that: pure
//! integer arithmetic over an already-resident buffer, with no allocation.

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod bit_depth;
pub use bit_depth::*;

pub mod color_type;
pub use color_type::*;

pub mod error;
pub use error::*;

pub mod int_endian;
pub use int_endian::*;

pub mod samples;
pub use samples::*;
