//! Viewer camera configuration.

/// Orbit camera looking at the centre of the surface
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Eye distance as a multiple of the larger surface extent
    pub distance_factor: f32,

    /// Angle above the rest plane (degrees)
    pub pitch_degrees: f32,

    /// Rotation around the vertical axis (degrees, 0 = looking along -Z)
    pub yaw_degrees: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance_factor: 1.1,
            pitch_degrees: 50.0, // Steep enough to keep the whole pool in view
            yaw_degrees: 0.0,
        }
    }
}
