// Software rasterizers: pixels, disks, lines and vertical spans.
//
// Geometry everywhere else is f64; everything in here plots integer pixels.
// Conversion is always floor: `pixel_coord` for points, `f64::floor` on the
// disk center and radius before the integer walk.

use crate::types::{Circle, FrameBuffer};

/// Convert a geometric coordinate to the pixel that contains it.
#[inline]
pub fn pixel_coord(v: f64) -> i32 {
    v.floor() as i32
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Paint the whole frame one color.
pub fn clear(fb: &mut FrameBuffer, color: u32) {
    fb.pixels.fill(color);
}

/// Fill pixels x0..=x1 on row y, clipped to the frame.
fn fill_row(fb: &mut FrameBuffer, x0: i64, x1: i64, y: i64, color: u32) {
    if y < 0 || y as usize >= fb.height {
        return;
    }
    let lo = x0.max(0);
    let hi = x1.min(fb.width as i64 - 1);
    if lo > hi {
        return;
    }
    let row = y as usize * fb.width;
    fb.pixels[row + lo as usize..=row + hi as usize].fill(color);
}

/// Fill pixels y_top..=y_bottom in column x, clipped to the frame.
pub fn fill_column(fb: &mut FrameBuffer, x: i32, y_top: i32, y_bottom: i32, color: u32) {
    if x < 0 || x as usize >= fb.width {
        return;
    }
    let lo = y_top.max(0);
    let hi = y_bottom.min(fb.height as i32 - 1);
    for y in lo..=hi {
        fb.pixels[y as usize * fb.width + x as usize] = color;
    }
}

/// Above this radius the midpoint walk is replaced by a per-row fill.
const MIDPOINT_MAX_RADIUS: f64 = (1u32 << 24) as f64;

/// Filled disk via the midpoint circle algorithm.
///
/// Walks one octant of the boundary and, at each step, fills the four
/// horizontal spans that the eight-way symmetry gives us. Disks that miss
/// the frame return at once, disks that swallow it fill it whole, and
/// very large radii are filled row by row over the visible rows only.
pub fn fill_disk(fb: &mut FrameBuffer, c: &Circle, color: u32) {
    if !(c.x.is_finite() && c.y.is_finite() && c.r.is_finite()) || c.r < 0.0 {
        return;
    }
    if fb.width == 0 || fb.height == 0 {
        return;
    }
    let (cx, cy, r) = (c.x.floor(), c.y.floor(), c.r.floor());
    let (max_x, max_y) = ((fb.width - 1) as f64, (fb.height - 1) as f64);

    if cx + r < 0.0 || cx - r > max_x || cy + r < 0.0 || cy - r > max_y {
        return;
    }
    let inside = |px: f64, py: f64| (px - cx).hypot(py - cy) <= r;
    if inside(0.0, 0.0) && inside(max_x, 0.0) && inside(0.0, max_y) && inside(max_x, max_y) {
        clear(fb, color);
        return;
    }
    if r > MIDPOINT_MAX_RADIUS {
        fill_disk_rows(fb, cx, cy, r, color);
        return;
    }

    // the disk touches the frame, so these fit comfortably in i64
    let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
    // past this offset from cy no row of the frame can be reached
    let reach = cy.abs().max((cy - max_y as i64).abs());

    let mut x: i64 = 0;
    let mut y: i64 = r;
    let mut p: i64 = 1 - r;
    while x <= y && x <= reach {
        fill_row(fb, cx - x, cx + x, cy + y, color);
        fill_row(fb, cx - x, cx + x, cy - y, color);
        fill_row(fb, cx - y, cx + y, cy + x, color);
        fill_row(fb, cx - y, cx + y, cy - x, color);
        if p < 0 {
            p += 2 * x + 3;
        } else {
            p += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
}

/// Half-width per visible row from the circle equation.
fn fill_disk_rows(fb: &mut FrameBuffer, cx: f64, cy: f64, r: f64, color: u32) {
    for row in 0..fb.height {
        let dy = row as f64 - cy;
        if dy.abs() > r {
            continue;
        }
        let half = ((r - dy) * (r + dy)).sqrt().floor();
        // `as` saturates, fill_row clips
        fill_row(fb, (cx - half) as i64, (cx + half) as i64, row as i64, color);
    }
}

/// Pixel path of a DDA line from (x0,y0) to (x1,y1), both ends included.
///
/// Steps along the longer axis so neither coordinate moves more than one
/// pixel per step. Identical endpoints give a single pixel.
pub fn dda_points(x0: f64, y0: f64, x1: f64, y1: f64) -> impl Iterator<Item = (i32, i32)> {
    let finite = x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite();
    let (dx, dy) = (x1 - x0, y1 - y0);
    let steps = if finite { dx.abs().ceil().max(dy.abs().ceil()).max(1.0) } else { 0.0 };
    let (x_inc, y_inc) = (dx / steps, dy / steps);
    let last = if finite && (dx != 0.0 || dy != 0.0) { steps as u32 } else { 0 };

    (0..=last)
        .take_while(move |_| finite)
        .map(move |i| {
            let i = i as f64;
            (pixel_coord(x0 + x_inc * i), pixel_coord(y0 + y_inc * i))
        })
}

/// Clip a segment to the rectangle [lo, hi_x] x [lo, hi_y] (Liang-Barsky).
/// None when the segment misses it entirely.
pub fn clip_segment(
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    lo: f64,
    hi_x: f64,
    hi_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [(-dx, x0 - lo), (dx, hi_x - x0), (-dy, y0 - lo), (dy, hi_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some(((x0 + t0 * dx, y0 + t0 * dy), (x0 + t1 * dx, y0 + t1 * dy)))
}

/// Draw a 1-pixel line; parts outside the frame are dropped.
///
/// The segment is clipped to a one-pixel margin around the frame first, so
/// the step count never exceeds the frame's own size.
pub fn draw_line(fb: &mut FrameBuffer, x0: f64, y0: f64, x1: f64, y1: f64, color: u32) {
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return;
    }
    let (hi_x, hi_y) = (fb.width as f64 + 1.0, fb.height as f64 + 1.0);
    let Some(((ax, ay), (bx, by))) = clip_segment((x0, y0), (x1, y1), -1.0, hi_x, hi_y) else {
        return;
    };
    for (x, y) in dda_points(ax, ay, bx, by) {
        put_pixel(fb, x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ON: u32 = 0x00FF_FFFF;

    #[test]
    fn pixel_coord_floors_negatives() {
        assert_eq!(pixel_coord(2.9), 2);
        assert_eq!(pixel_coord(-0.5), -1);
        assert_eq!(pixel_coord(0.0), 0);
    }

    #[test]
    fn put_pixel_drops_out_of_bounds() {
        let mut fb = FrameBuffer::new(8, 8);
        put_pixel(&mut fb, -1, 3, ON);
        put_pixel(&mut fb, 8, 3, ON);
        put_pixel(&mut fb, 3, 8, ON);
        assert!(fb.pixels.iter().all(|&p| p == 0));
        put_pixel(&mut fb, 7, 7, ON);
        assert_eq!(fb.get(7, 7), Some(ON));
    }

    #[test]
    fn zero_radius_disk_is_one_pixel() {
        let mut fb = FrameBuffer::new(10, 10);
        fill_disk(&mut fb, &Circle { x: 5.0, y: 5.0, r: 0.0 }, ON);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == ON).count(), 1);
        assert_eq!(fb.get(5, 5), Some(ON));
    }

    #[test]
    fn disk_clipped_at_frame_edge() {
        let mut fb = FrameBuffer::new(20, 20);
        fill_disk(&mut fb, &Circle { x: 0.0, y: 0.0, r: 10.0 }, ON);
        assert_eq!(fb.get(0, 0), Some(ON));
        assert_eq!(fb.get(9, 0), Some(ON));
        assert_eq!(fb.get(15, 15), Some(0));
    }

    #[test]
    fn negative_radius_draws_nothing() {
        let mut fb = FrameBuffer::new(10, 10);
        fill_disk(&mut fb, &Circle { x: 5.0, y: 5.0, r: -3.0 }, ON);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn identical_endpoints_plot_once() {
        let pts: Vec<_> = dda_points(4.2, 7.8, 4.2, 7.8).collect();
        assert_eq!(pts, vec![(4, 7)]);
    }

    #[test]
    fn non_finite_line_is_empty() {
        assert_eq!(dda_points(0.0, 0.0, f64::NAN, 3.0).count(), 0);
        assert_eq!(dda_points(f64::INFINITY, 0.0, 1.0, 3.0).count(), 0);
    }

    #[test]
    fn horizontal_line_covers_every_column() {
        let mut fb = FrameBuffer::new(12, 4);
        draw_line(&mut fb, 1.0, 2.0, 10.0, 2.0, ON);
        for x in 1..=10 {
            assert_eq!(fb.get(x, 2), Some(ON), "column {x}");
        }
        assert_eq!(fb.get(0, 2), Some(0));
        assert_eq!(fb.get(11, 2), Some(0));
    }

    #[test]
    fn huge_disk_covering_frame_fills_it() {
        let mut fb = FrameBuffer::new(90, 60);
        fill_disk(&mut fb, &Circle { x: 60.0, y: 40.0, r: 3.0e9 }, ON);
        assert!(fb.pixels.iter().all(|&p| p == ON));
    }

    #[test]
    fn far_away_disk_is_a_no_op() {
        let mut fb = FrameBuffer::new(90, 60);
        fill_disk(&mut fb, &Circle { x: 1.0e10, y: 40.0, r: 100.0 }, ON);
        fill_disk(&mut fb, &Circle { x: -1.0e300, y: 1.0e300, r: 1.0e10 }, ON);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn large_disk_edge_crossing_frame() {
        // top of the disk sits on row 30
        let mut fb = FrameBuffer::new(90, 60);
        fill_disk(&mut fb, &Circle { x: 45.0, y: 2_000_030.0, r: 2_000_000.0 }, ON);
        assert_eq!(fb.get(45, 29), Some(0));
        assert_eq!(fb.get(45, 30), Some(ON));
        assert_eq!(fb.get(45, 59), Some(ON));
        assert_eq!(fb.get(0, 0), Some(0));
    }

    #[test]
    fn enormous_disk_edge_uses_visible_rows_only() {
        let mut fb = FrameBuffer::new(90, 60);
        fill_disk(&mut fb, &Circle { x: 45.0, y: 1.0e12 + 30.0, r: 1.0e12 }, ON);
        assert_eq!(fb.get(45, 29), Some(0));
        assert_eq!(fb.get(45, 30), Some(ON));
        assert_eq!(fb.get(0, 59), Some(ON));
    }

    #[test]
    fn extreme_line_is_clipped_to_frame() {
        let mut fb = FrameBuffer::new(90, 60);
        draw_line(&mut fb, -1.0e12, 30.0, 1.0e12, 30.0, ON);
        for x in 0..90 {
            assert_eq!(fb.get(x, 30), Some(ON), "column {x}");
        }
        assert_eq!(fb.pixels.iter().filter(|&&p| p == ON).count(), 90);
    }

    #[test]
    fn segment_outside_frame_is_rejected() {
        assert_eq!(clip_segment((-10.0, -10.0), (-5.0, 50.0), -1.0, 91.0, 61.0), None);
        let ((ax, ay), (bx, by)) = clip_segment((10.0, 10.0), (20.0, 20.0), -1.0, 91.0, 61.0).unwrap();
        assert_eq!((ax, ay, bx, by), (10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn fill_column_clamps_huge_spans() {
        let mut fb = FrameBuffer::new(3, 5);
        fill_column(&mut fb, 1, -1_000_000, 1_000_000, ON);
        for y in 0..5 {
            assert_eq!(fb.get(1, y), Some(ON));
            assert_eq!(fb.get(0, y), Some(0));
        }
    }

    proptest! {
        #[test]
        fn prop_disk_inside_set_outside_clear(
            cx in 40i32..60,
            cy in 40i32..60,
            r in 0i32..35,
        ) {
            let mut fb = FrameBuffer::new(100, 100);
            let c = Circle { x: cx as f64, y: cy as f64, r: r as f64 };
            fill_disk(&mut fb, &c, ON);

            for y in 0..100 {
                for x in 0..100 {
                    let d = (((x - cx) * (x - cx) + (y - cy) * (y - cy)) as f64).sqrt();
                    let set = fb.get(x, y) == Some(ON);
                    if d <= r as f64 {
                        prop_assert!(set, "({x},{y}) at distance {d} should be set");
                    }
                    if d > r as f64 + 1.0 {
                        prop_assert!(!set, "({x},{y}) at distance {d} should be clear");
                    }
                }
            }
        }

        #[test]
        fn prop_line_is_connected(
            x0 in 0.0f64..200.0,
            y0 in 0.0f64..200.0,
            x1 in 0.0f64..200.0,
            y1 in 0.0f64..200.0,
        ) {
            let pts: Vec<_> = dda_points(x0, y0, x1, y1).collect();
            prop_assert_eq!(pts.first().copied(), Some((pixel_coord(x0), pixel_coord(y0))));
            let (lx, ly) = *pts.last().unwrap();
            prop_assert!((lx - pixel_coord(x1)).abs() <= 1 && (ly - pixel_coord(y1)).abs() <= 1);
            for w in pts.windows(2) {
                let (ax, ay) = w[0];
                let (bx, by) = w[1];
                prop_assert!((bx - ax).abs() <= 1 && (by - ay).abs() <= 1,
                    "gap between {:?} and {:?}", w[0], w[1]);
            }
        }
    }
}
