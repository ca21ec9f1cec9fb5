//! Rate-limited heading controller.
//!
//! Wraps [`fixed_turn`] in the per-tick update loop that actor rotation
//! code actually runs: the caller supplies elapsed time, the controller
//! converts its configured rotation speed into a per-tick step bound and
//! advances the heading along the shorter arc until the target is reached.

use serde::{Deserialize, Serialize};

use crate::core::math::{angle_delta_degrees, fixed_turn, normalize_degrees};
use crate::error::{DishaError, Result};

/// Heading controller parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeadingConfig {
    /// Maximum rotation speed in degrees per second (default: 20.0)
    #[serde(default = "default_turn_rate")]
    pub turn_rate: f32,

    /// Alignment tolerance in degrees; once the remaining distance falls
    /// within this the heading snaps to the target (default: 0.1)
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            turn_rate: default_turn_rate(),
            tolerance: default_tolerance(),
        }
    }
}

impl HeadingConfig {
    /// Check that the parameters describe a usable controller.
    pub fn validate(&self) -> Result<()> {
        if !self.turn_rate.is_finite() || self.turn_rate <= 0.0 {
            return Err(DishaError::Config(format!(
                "turn_rate must be finite and positive, got {}",
                self.turn_rate
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(DishaError::Config(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Deterministic heading state machine for one rotating body.
///
/// Holds the current heading in [0, 360) and an optional target. Each call
/// to [`update`](Self::update) moves the heading toward the target by at
/// most `turn_rate * dt` degrees, always along the shorter arc, and clears
/// the target once aligned.
///
/// # Example
///
/// ```
/// use disha_turn::{HeadingConfig, HeadingController};
///
/// let config = HeadingConfig { turn_rate: 30.0, tolerance: 0.1 };
/// let mut controller = HeadingController::new(config, 45.0).unwrap();
/// controller.set_heading_target(75.0);
///
/// // 30°/s for a third of a second: 10° of progress
/// let heading = controller.update(1.0 / 3.0);
/// assert!((heading - 55.0).abs() < 1e-3);
/// assert!(controller.is_turning());
/// ```
#[derive(Clone, Debug)]
pub struct HeadingController {
    config: HeadingConfig,
    heading: f32,
    target: Option<f32>,
}

impl HeadingController {
    /// Create a controller at the given initial heading (any winding; it is
    /// normalized on entry). Fails if the configuration is invalid.
    pub fn new(config: HeadingConfig, initial_heading: f32) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            heading: normalize_degrees(initial_heading),
            target: None,
        })
    }

    /// Set a new heading target in degrees (any winding).
    pub fn set_heading_target(&mut self, degrees: f32) {
        let target = normalize_degrees(degrees);
        log::debug!(
            "Heading target {:.2}° (current {:.2}°, {:.2}° to go)",
            target,
            self.heading,
            angle_delta_degrees(self.heading, target).abs()
        );
        self.target = Some(target);
    }

    /// Advance the heading by one tick of `dt` seconds and return it.
    ///
    /// With no target set, or a non-positive `dt`, the heading is unchanged.
    pub fn update(&mut self, dt: f32) -> f32 {
        let target = match self.target {
            Some(t) => t,
            None => return self.heading,
        };
        if !(dt > 0.0) {
            return self.heading;
        }

        let delta_rate = self.config.turn_rate * dt;
        self.heading = fixed_turn(self.heading, target, delta_rate);
        log::trace!("Heading {:.2}° -> target {:.2}°", self.heading, target);

        if angle_delta_degrees(self.heading, target).abs() <= self.config.tolerance {
            self.heading = target;
            self.target = None;
            log::debug!("Heading aligned at {:.2}°", self.heading);
        }
        self.heading
    }

    /// Current heading in [0, 360).
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Current target, if a turn is in progress.
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Shortest remaining distance to the target in degrees (0 when idle).
    pub fn remaining(&self) -> f32 {
        self.target
            .map(|t| angle_delta_degrees(self.heading, t).abs())
            .unwrap_or(0.0)
    }

    /// Whether a turn is still in progress.
    pub fn is_turning(&self) -> bool {
        self.target.is_some()
    }

    /// Get the controller configuration.
    pub fn config(&self) -> &HeadingConfig {
        &self.config
    }
}

fn default_turn_rate() -> f32 {
    20.0
}

fn default_tolerance() -> f32 {
    0.1
}
