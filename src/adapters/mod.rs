//! Adapter implementations of port traits.
//!
//! - `png`: encodes with the `image` crate's PNG codec.
//! - `disabled`: stands in for a build without an encoder.

pub mod disabled;
pub mod png;
