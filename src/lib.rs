//! Pure-rust SILK frame decoder.
//!
//! Decodes single 20 ms SILK frames, the speech half of the Opus codec,
//! into normalized `f32` samples.
//!
//! ```
//! use silk::{Bandwidth, Decoder, NANOSECONDS_20MS};
//!
//! let frame = [0x0b, 0xe4, 0xc1, 0x36, 0xec, 0xc5, 0x80];
//! let mut samples = [0f32; 320];
//!
//! let mut decoder = Decoder::new();
//! decoder
//!     .decode(&frame, &mut samples, false, NANOSECONDS_20MS, Bandwidth::Wide)
//!     .unwrap();
//! ```

mod entropy;
mod maths;
mod tables;

mod decoder;

pub use crate::decoder::{Bandwidth, Decoder, Error, NANOSECONDS_20MS};
