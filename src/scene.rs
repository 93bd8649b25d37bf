// The whole picture for one frame: two disks, their external tangents,
// and the filled wedge beyond the second disk.

use log::trace;

use crate::error::GeometryError;
use crate::fill::fill_between;
use crate::raster::{clear, draw_line, fill_disk, pixel_coord};
use crate::tangent::{Bounds, external_tangents};
use crate::types::{Circle, FrameBuffer, Palette};

/// What actually got drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    pub tangents_drawn: bool,
    pub fill_columns: usize,
    pub skipped: Option<GeometryError>, // why tangents or fill were left out
}

pub struct TangentRenderer {
    primary: Circle, // follows the cursor
    anchor: Circle,  // never moves
    palette: Palette,
}

impl TangentRenderer {
    pub fn new(primary: Circle, anchor: Circle, palette: Palette) -> Self {
        Self { primary, anchor, palette }
    }

    pub fn primary(&self) -> Circle {
        self.primary
    }

    pub fn anchor(&self) -> Circle {
        self.anchor
    }

    /// Recenter the cursor-driven circle.
    pub fn move_primary(&mut self, x: f64, y: f64) {
        self.primary.x = x;
        self.primary.y = y;
    }

    /// Redraw everything into `fb`. Geometry that has no answer this frame
    /// (nested circles, vertical tangents...) is skipped, never fatal.
    pub fn render(&self, fb: &mut FrameBuffer) -> FrameReport {
        let mut report = FrameReport::default();

        clear(fb, self.palette.background);
        fill_disk(fb, &self.primary, self.palette.outline);
        fill_disk(fb, &self.anchor, self.palette.outline);

        let pair = match external_tangents(&self.primary, &self.anchor, Bounds::of(fb)) {
            Ok(pair) => pair,
            Err(e) => {
                trace!("tangents skipped: {e}");
                report.skipped = Some(e);
                return report;
            }
        };

        for t in &pair {
            draw_line(fb, t.near.x, t.near.y, t.far.x, t.far.y, self.palette.outline);
        }
        report.tangents_drawn = true;

        let start_x = pixel_coord(self.anchor.x + self.anchor.r);
        match fill_between(fb, &pair, start_x, self.palette.fill) {
            Ok(columns) => report.fill_columns = columns,
            Err(e) => {
                trace!("fill skipped: {e}");
                report.skipped = Some(e);
            }
        }
        report
    }
}
