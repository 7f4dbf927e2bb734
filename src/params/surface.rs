//! Heightfield simulation parameters.

use crate::error::{ConfigError, ConfigResult};

/// Liquid surface simulation parameters
///
/// Immutable for the lifetime of one configured surface; changing any field
/// requires a full `configure`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceParams {
    /// Sample points along X (>= 2)
    pub width: usize,

    /// Sample points along Z (>= 2)
    pub height: usize,

    /// Rest elevation every sample starts at
    pub initial_height: f32,

    /// Vertical exaggeration applied when building the mesh (no effect on physics)
    pub scale: f32,

    /// Ripple strength as a fraction of the grid height (samples)
    /// Formula: strength = ripple_strength * height * min(force, max_drag_splash_force)
    pub ripple_strength: f32,

    /// Ripple radius as a fraction of the grid width (floored at 2 samples)
    pub ripple_radius: f32,

    /// Velocity decay per 1/60 s (0 = instant stop, 1 = no damping)
    pub ripple_damping: f32,

    /// Wave propagation coefficient (dimensionless)
    pub wave_speed: f32,

    /// Ceiling on the force multiplier of a single injection
    pub max_drag_splash_force: f32,

    /// Absolute ceiling on injected strength, independent of the force clamp
    pub max_ripple_strength: Option<f32>,

    /// Stroke force per unit of normalized distance moved in one frame
    pub drag_force_per_unit: f32,

    /// Movement below this (normalized units) is treated as pointer jitter
    pub stroke_epsilon: f32,

    /// Fixed step used when the host has no live clock (seconds)
    pub nominal_step_s: f32,

    /// Upper clamp for live frame deltas (seconds)
    pub max_step_s: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            width: 96,
            height: 96,
            initial_height: 0.0,
            scale: 1.0,
            ripple_strength: 0.005,
            ripple_radius: 0.04,
            ripple_damping: 0.985,
            wave_speed: 8.0,
            max_drag_splash_force: 3.0,
            max_ripple_strength: None,
            drag_force_per_unit: 60.0,
            stroke_epsilon: 1e-4,
            nominal_step_s: 1.0 / 60.0,
            max_step_s: 0.1,
        }
    }
}

impl SurfaceParams {
    /// Check dimensions and scalar ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width < 2 || self.height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        let scalars = [
            ("initial_height", self.initial_height),
            ("scale", self.scale),
            ("ripple_strength", self.ripple_strength),
            ("ripple_radius", self.ripple_radius),
            ("ripple_damping", self.ripple_damping),
            ("wave_speed", self.wave_speed),
            ("max_drag_splash_force", self.max_drag_splash_force),
            ("drag_force_per_unit", self.drag_force_per_unit),
            ("stroke_epsilon", self.stroke_epsilon),
            ("nominal_step_s", self.nominal_step_s),
            ("max_step_s", self.max_step_s),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.ripple_damping) {
            return Err(ConfigError::OutOfRange {
                name: "ripple_damping",
                value: self.ripple_damping,
                range: "[0, 1]",
            });
        }

        let non_negative = [
            ("ripple_strength", self.ripple_strength),
            ("ripple_radius", self.ripple_radius),
            ("wave_speed", self.wave_speed),
            ("max_drag_splash_force", self.max_drag_splash_force),
            ("drag_force_per_unit", self.drag_force_per_unit),
            ("stroke_epsilon", self.stroke_epsilon),
            ("nominal_step_s", self.nominal_step_s),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    name,
                    value,
                    range: "[0, inf)",
                });
            }
        }

        if self.max_step_s <= 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "max_step_s",
                value: self.max_step_s,
                range: "(0, inf)",
            });
        }

        if let Some(ceiling) = self.max_ripple_strength {
            if !ceiling.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: "max_ripple_strength",
                    value: ceiling,
                });
            }
            if ceiling < 0.0 {
                return Err(ConfigError::OutOfRange {
                    name: "max_ripple_strength",
                    value: ceiling,
                    range: "[0, inf)",
                });
            }
        }

        Ok(())
    }

    /// Ripple radius in samples, never below 2
    pub fn radius_samples(&self) -> usize {
        ((self.ripple_radius * self.width as f32).round() as usize).max(2)
    }

    /// Stroke sub-steps per unit of normalized distance
    pub fn stroke_density(&self) -> f32 {
        self.width.max(self.height) as f32 * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SurfaceParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        let params = SurfaceParams {
            width: 1,
            height: 8,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::GridTooSmall {
                width: 1,
                height: 8
            })
        );
    }

    #[test]
    fn test_accepts_minimal_grid() {
        let params = SurfaceParams {
            width: 2,
            height: 2,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_damping_above_one() {
        let params = SurfaceParams {
            ripple_damping: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::OutOfRange {
                name: "ripple_damping",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let params = SurfaceParams {
            wave_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite {
                name: "wave_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_radius_floor() {
        let params = SurfaceParams {
            width: 10,
            ripple_radius: 0.05,
            ..Default::default()
        };
        assert_eq!(params.radius_samples(), 2);

        let params = SurfaceParams {
            width: 200,
            ripple_radius: 0.05,
            ..Default::default()
        };
        assert_eq!(params.radius_samples(), 10);
    }
}
