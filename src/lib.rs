#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Type-directed decoding of big-endian binary values.
//!
//! A static type picks its decoder through [`Decode`]; [`decode`] applies it to a
//! [`Buffer`](buffer::Buffer). Sequences derive their decoder from the element's,
//! so `Vec<Vec<String>>` works as soon as `String` does. For shapes that are only
//! known at runtime, [`shape::Shape`] maps a closed set of tag bytes onto the same
//! decoders.

pub mod buffer;

pub mod codec;
pub use codec::{decode, decode_exact, decode_with, Decode, Decoder, Limits};

mod error;
pub use error::Error;

pub mod shape;
