//! Turn control layer.
//!
//! Drives the core angle primitives from a per-tick update loop.
//!
//! # Contents
//!
//! - [`heading`]: Rate-limited heading controller

pub mod heading;

pub use heading::{HeadingConfig, HeadingController};
