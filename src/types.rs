// Core types shared by the geometry and the rasterizers.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Pixel at (x,y), or None when outside the frame.
    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A circle in frame coordinates. Radius is expected to be >= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn center(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Pack an RGB triplet the way the window expects it (0x00RRGGBB).
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// The three colors used every frame, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: u32, // cleared to this before drawing
    pub outline: u32,    // disks and tangent lines
    pub fill: u32,       // wedge between the tangents
}

impl Palette {
    pub fn new() -> Self {
        Self {
            background: pack_rgb(0, 0, 0),
            outline: pack_rgb(255, 255, 255),
            fill: pack_rgb(100, 100, 255), // light blue
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
