//! Core foundation layer.
//!
//! This is the bottom layer of the crate with no internal dependencies.
//!
//! # Contents
//!
//! - [`math`]: Angle primitives in degrees (normalization, shortest deltas,
//!   bounded turning)

pub mod math;
