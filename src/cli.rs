//! Command-line argument parsing.

use clap::Parser;
use glam::Vec2;

use crate::params::{SnapshotConfig, SurfaceParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ripplesurf")]
#[command(about = "Interactive liquid surface heightfield simulator", long_about = None)]
pub struct Args {
    /// Sample points along X
    #[arg(long, value_name = "SAMPLES")]
    pub width: Option<usize>,

    /// Sample points along Z
    #[arg(long, value_name = "SAMPLES")]
    pub height: Option<usize>,

    /// Rest elevation of the surface
    #[arg(long, allow_negative_numbers = true)]
    pub initial_height: Option<f32>,

    /// Vertical exaggeration of the rendered mesh
    #[arg(long)]
    pub scale: Option<f32>,

    /// Ripple strength (fraction of grid height)
    #[arg(long)]
    pub ripple_strength: Option<f32>,

    /// Ripple radius (fraction of grid width)
    #[arg(long)]
    pub ripple_radius: Option<f32>,

    /// Velocity decay per 1/60 s, in [0, 1]
    #[arg(long)]
    pub ripple_damping: Option<f32>,

    /// Wave propagation coefficient
    #[arg(long)]
    pub wave_speed: Option<f32>,

    /// Ceiling on the per-injection force multiplier
    #[arg(long)]
    pub max_drag_splash_force: Option<f32>,

    /// Absolute ceiling on injected ripple strength
    #[arg(long)]
    pub max_ripple_strength: Option<f32>,

    /// Stroke force per unit of normalized drag distance per frame
    #[arg(long)]
    pub drag_force_per_unit: Option<f32>,

    /// Drag movement below this (normalized units) is ignored as jitter
    #[arg(long)]
    pub stroke_epsilon: Option<f32>,

    /// Step used with --fixed-step and in headless mode (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub nominal_step_s: Option<f32>,

    /// Upper clamp on live frame deltas (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub max_step_s: Option<f32>,

    /// Ignore the wall clock and advance by the fixed nominal step
    #[arg(long)]
    pub fixed_step: bool,

    /// Run without a window
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, value_name = "COUNT", default_value = "600")]
    pub frames: usize,

    /// Splash at a normalized point before the first headless frame (repeatable)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub splash: Vec<Vec2>,

    /// Write a grayscale heightmap PNG after the headless run
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<String>,

    /// Height mapped to black in the snapshot (default: grid minimum)
    #[arg(long, allow_negative_numbers = true)]
    pub snapshot_low: Option<f32>,

    /// Height mapped to white in the snapshot (default: grid maximum)
    #[arg(long, allow_negative_numbers = true)]
    pub snapshot_high: Option<f32>,
}

impl Args {
    /// Surface parameters: defaults overridden by any flags given
    pub fn surface_params(&self) -> SurfaceParams {
        let defaults = SurfaceParams::default();
        SurfaceParams {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            initial_height: self.initial_height.unwrap_or(defaults.initial_height),
            scale: self.scale.unwrap_or(defaults.scale),
            ripple_strength: self.ripple_strength.unwrap_or(defaults.ripple_strength),
            ripple_radius: self.ripple_radius.unwrap_or(defaults.ripple_radius),
            ripple_damping: self.ripple_damping.unwrap_or(defaults.ripple_damping),
            wave_speed: self.wave_speed.unwrap_or(defaults.wave_speed),
            max_drag_splash_force: self
                .max_drag_splash_force
                .unwrap_or(defaults.max_drag_splash_force),
            max_ripple_strength: self.max_ripple_strength.or(defaults.max_ripple_strength),
            drag_force_per_unit: self
                .drag_force_per_unit
                .unwrap_or(defaults.drag_force_per_unit),
            stroke_epsilon: self.stroke_epsilon.unwrap_or(defaults.stroke_epsilon),
            nominal_step_s: self.nominal_step_s.unwrap_or(defaults.nominal_step_s),
            max_step_s: self.max_step_s.unwrap_or(defaults.max_step_s),
        }
    }

    /// Snapshot configuration if a path was given
    pub fn snapshot_config(&self) -> Option<SnapshotConfig> {
        self.snapshot.as_deref().map(|path| SnapshotConfig {
            low: self.snapshot_low,
            high: self.snapshot_high,
            ..SnapshotConfig::new(path)
        })
    }
}

/// Parse `X,Y` into a normalized point
fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{}': {}", v, e))
    };
    Ok(Vec2::new(parse(x)?, parse(y)?))
}
