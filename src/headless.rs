//! Window-less batch runner: scripted splashes, fixed steps, PNG heightmap.

use glam::Vec2;
use image::{GrayImage, Luma};
use log::{debug, info};

use crate::error::AppError;
use crate::params::SnapshotConfig;
use crate::surface::{HeightGrid, SurfaceStats, SurfaceSystem};

/// Frames between progress log lines
const LOG_INTERVAL_FRAMES: usize = 120;

/// Run `frames` nominal ticks, splashing at each point before the first one
pub fn run(surface: &mut SurfaceSystem, frames: usize, splashes: &[Vec2]) -> SurfaceStats {
    for &point in splashes {
        debug!("Splash at {:?}", point);
        surface.inject_at(point, 1.0);
    }

    for frame in 0..frames {
        surface.tick_nominal();
        if frame % LOG_INTERVAL_FRAMES == 0 {
            let stats = surface.stats();
            debug!(
                "Frame {}: heights [{:.4}, {:.4}], peak speed {:.4}",
                frame, stats.min_height, stats.max_height, stats.peak_speed
            );
        }
    }

    let stats = surface.stats();
    info!(
        "Ran {} frames: heights [{:.4}, {:.4}], peak speed {:.4}",
        frames, stats.min_height, stats.max_height, stats.peak_speed
    );
    stats
}

/// Grayscale heightmap, one pixel per sample
///
/// Heights are mapped linearly from `[low, high]` to `[0, 255]`; a range
/// narrower than float noise renders flat mid-gray.
pub fn heightmap_image(grid: &HeightGrid, low: f32, high: f32) -> GrayImage {
    let range = high - low;
    GrayImage::from_fn(grid.width() as u32, grid.depth() as u32, |x, z| {
        if range <= f32::EPSILON {
            return Luma([128]);
        }
        let h = grid.height_at(x as usize, z as usize);
        let t = ((h - low) / range).clamp(0.0, 1.0);
        Luma([(t * 255.0).round() as u8])
    })
}

/// Write the current heightfield to a PNG
pub fn write_snapshot(surface: &SurfaceSystem, config: &SnapshotConfig) -> Result<(), AppError> {
    let stats = surface.stats();
    let low = config.low.unwrap_or(stats.min_height);
    let high = config.high.unwrap_or(stats.max_height);

    heightmap_image(surface.grid(), low, high)
        .save(&config.path)
        .map_err(|source| AppError::Snapshot {
            path: config.path.clone(),
            source,
        })?;

    info!("Wrote heightmap snapshot to {}", config.path);
    Ok(())
}
