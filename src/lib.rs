//! Ripplesurf library - interactive liquid surface heightfield simulation

pub mod camera;
pub mod cli;
pub mod error;
pub mod headless;
pub mod params;
pub mod rendering;
pub mod surface;
