//! Mathematical primitives for heading control in degrees.
//!
//! Functions for angle normalization and bounded angular stepping.
//!
//! All angles are `f32` degrees. Two angles are equivalent for turning
//! purposes when they differ by a whole number of turns; every function here
//! reduces its result with a single remainder operation rather than
//! iterative subtraction, so large-magnitude inputs stay O(1) and do not
//! drift.

/// Normalize an angle to [0, 360).
///
/// Identity for angles already in range. Exact multiples of 360 (including
/// negative ones and 0) map to 0. Non-finite inputs propagate NaN.
///
/// # Example
/// ```
/// use disha_turn::core::math::normalize_degrees;
///
/// assert!((normalize_degrees(-20.0) - 340.0).abs() < 1e-4);
/// assert!((normalize_degrees(405.0) - 45.0).abs() < 1e-4);
/// assert_eq!(normalize_degrees(720.0), 0.0);
/// ```
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let mut a = angle % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    // The correction above can round to exactly 360.0 for tiny negative
    // inputs; 360.0 must never escape the half-open range.
    if a >= 360.0 {
        a = 0.0;
    }
    a
}

/// Shortest signed rotation from angle `from` to angle `to`, in (-180, 180].
///
/// Returns the signed number of degrees to add to `from` to reach `to`,
/// taking the shorter way around the circle. When the two angles are exactly
/// 180° apart both directions cover the same arc; the result is +180 (the
/// increasing direction) so callers see a deterministic choice instead of
/// whatever rounding happens to produce.
///
/// # Example
/// ```
/// use disha_turn::core::math::angle_delta_degrees;
///
/// assert!((angle_delta_degrees(45.0, 75.0) - 30.0).abs() < 1e-4);
///
/// // A raw difference of 270 is a shortest rotation of -90
/// assert!((angle_delta_degrees(0.0, 270.0) - (-90.0)).abs() < 1e-4);
///
/// // Exactly opposite headings tie-break to +180
/// assert_eq!(angle_delta_degrees(90.0, 270.0), 180.0);
/// ```
#[inline]
pub fn angle_delta_degrees(from: f32, to: f32) -> f32 {
    let mut d = (to - from) % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Step a heading toward a desired heading by at most `delta_rate` degrees,
/// turning along the shorter arc, and return the new heading in [0, 360).
///
/// The sign of `delta_rate` is ignored; only its magnitude bounds the step.
/// Direction always comes from the shortest rotation, with exactly-opposite
/// headings resolved in the increasing direction (see
/// [`angle_delta_degrees`]). When the magnitude of `delta_rate` meets or
/// exceeds the remaining distance the result is exactly the normalized
/// desired heading, never past it.
///
/// Total over finite inputs: no panics, no side effects. Non-finite `current`
/// or `desired` propagates NaN; a NaN `delta_rate` behaves as an unbounded
/// step.
///
/// # Example
/// ```
/// use disha_turn::core::math::fixed_turn;
///
/// // 30° to go, 10° allowed this tick
/// assert!((fixed_turn(45.0, 75.0, 10.0) - 55.0).abs() < 1e-4);
///
/// // 5° to go, 10° allowed: clamps to the target
/// assert!((fixed_turn(45.0, 50.0, 10.0) - 50.0).abs() < 1e-4);
///
/// // Wound inputs, unwound output
/// assert!((fixed_turn(405.0, 435.0, 10.0) - 55.0).abs() < 1e-4);
/// ```
#[inline]
pub fn fixed_turn(current: f32, desired: f32, delta_rate: f32) -> f32 {
    let delta = angle_delta_degrees(current, desired);
    let step = delta_rate.abs().min(delta.abs());
    normalize_degrees(current + delta.signum() * step)
}

/// Linear interpolation between two headings in degrees, taking the shortest
/// path.
///
/// `t` should be in [0, 1] where 0 returns `normalize_degrees(a)` and 1
/// returns `normalize_degrees(b)`; values outside that range extrapolate
/// along the same arc.
#[inline]
pub fn angle_lerp_degrees(a: f32, b: f32, t: f32) -> f32 {
    normalize_degrees(a + angle_delta_degrees(a, b) * t)
}
