//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the drawing core and an
//! external system. Implementations live in `src/adapters/`.

pub mod icon_writer;

pub use icon_writer::IconWriter;
