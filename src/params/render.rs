//! Rendering and snapshot configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (surface units)
    pub near_plane: f32,

    /// Far clipping plane (surface units)
    pub far_plane: f32,

    /// Background colour (linear RGB)
    pub clear_color: [f64; 3],

    /// Surface base colour (linear RGB)
    pub liquid_color: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 2000.0,
            clear_color: [0.02, 0.02, 0.04],
            liquid_color: [0.10, 0.35, 0.65],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Heightmap snapshot written by the headless runner
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Output PNG path
    pub path: String,

    /// Height mapped to black; `None` uses the grid minimum
    pub low: Option<f32>,

    /// Height mapped to white; `None` uses the grid maximum
    pub high: Option<f32>,
}

impl SnapshotConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            low: None,
            high: None,
        }
    }
}
