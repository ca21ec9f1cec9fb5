//! DishaTurn - Deterministic heading interpolation for differential drive robots
//!
//! # Architecture
//!
//! The crate is organized into 2 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   control/                          │  ← Turn control
//! │              (rate-limited heading)                 │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │               (angle primitives)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Contents
//!
//! - [`core::math`]: Pure angle primitives in degrees — normalization into
//!   `[0, 360)`, shortest signed deltas, and the bounded `fixed_turn` step.
//! - [`control`]: A [`HeadingController`] that drives `fixed_turn` once per
//!   simulation tick with a per-tick rate derived from elapsed time and a
//!   configured rotation speed.
//!
//! All angles are `f32` degrees. The primitives are pure, allocation-free,
//! and safe to call from any thread.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Turn control (depends on core)
// ============================================================================
pub mod control;

pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core math
pub use crate::core::math;
pub use crate::core::math::{angle_delta_degrees, angle_lerp_degrees, fixed_turn, normalize_degrees};

// Control
pub use control::{HeadingConfig, HeadingController};

// Errors
pub use error::{DishaError, Result};
