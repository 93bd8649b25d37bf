// Command-line configuration. With no flags you get the classic scene:
// a 900x600 window, an 80px circle on the cursor, a 100px circle at (600,400).

use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;
use crate::types::Circle;

/// Largest frame side we will allocate a buffer for.
const MAX_FRAME_SIDE: usize = 16_384;

/// Radii and anchor coordinates may reach this many frame sides.
const SCENE_REACH: f64 = 8.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "circle-tangents", about = "Two circles, their external tangents, and the wedge between them")]
pub struct Args {
    /// Frame width in pixels
    #[arg(long, default_value_t = 900)]
    pub width: usize,

    /// Frame height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    #[arg(long, default_value = "Circle Tangents")]
    pub title: String,

    /// Radius of the circle that follows the mouse
    #[arg(long, default_value_t = 80.0)]
    pub primary_radius: f64,

    #[arg(long, default_value_t = 600.0)]
    pub anchor_x: f64,

    #[arg(long, default_value_t = 400.0)]
    pub anchor_y: f64,

    #[arg(long, default_value_t = 100.0)]
    pub anchor_radius: f64,

    /// Frame rate cap for the window loop
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Render the starting scene to this PNG and exit without opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Where S-key snapshots are written
    #[arg(long, default_value = ".")]
    pub snapshot_dir: PathBuf,
}

impl Args {
    /// Reject values the rasterizers can't do anything sensible with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 || self.width > MAX_FRAME_SIDE || self.height > MAX_FRAME_SIDE {
            return Err(Error::InvalidConfig(format!(
                "frame must be between 1x1 and {MAX_FRAME_SIDE}x{MAX_FRAME_SIDE}, got {}x{}",
                self.width, self.height
            )));
        }
        let limit = SCENE_REACH * self.width.max(self.height) as f64;
        for (name, r) in [("primary-radius", self.primary_radius), ("anchor-radius", self.anchor_radius)] {
            if !r.is_finite() || !(0.0..=limit).contains(&r) {
                return Err(Error::InvalidConfig(format!("{name} must be within 0..={limit}, got {r}")));
            }
        }
        for (name, v) in [("anchor-x", self.anchor_x), ("anchor-y", self.anchor_y)] {
            if !v.is_finite() || !(-limit..=limit).contains(&v) {
                return Err(Error::InvalidConfig(format!("{name} must be within -{limit}..={limit}, got {v}")));
            }
        }
        Ok(())
    }

    /// Starting position of the mouse-driven circle.
    pub fn primary(&self) -> Circle {
        Circle { x: 300.0, y: 300.0, r: self.primary_radius }
    }

    pub fn anchor(&self) -> Circle {
        Circle { x: self.anchor_x, y: self.anchor_y, r: self.anchor_radius }
    }
}
