//! Line and rectangle primitives
//!
//! Everything is expressed through [`Framebuffer::set_pixel`], so shapes that
//! hang off the panel are clipped pixel by pixel. Lines only walk the part of
//! their major axis that lies on the panel, and plot the same pixels whichever
//! endpoint comes first.

use crate::color::Color;
use crate::framebuffer::Framebuffer;

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a straight line between two points, both endpoints included
    ///
    /// One pixel per step along the major axis, the minor coordinate rounded
    /// to the nearest integer (halves round up). Endpoints may lie off-screen,
    /// including negative coordinates; only steps that land inside the panel
    /// are visited, so far-away endpoints cost nothing extra. Swapping the
    /// endpoints draws the same pixels.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = (i64::from(y1) - i64::from(y0)).abs();

        if dx >= dy {
            for (x, y) in LineSteps::new((x0, y0), (x1, y1), self.width()) {
                self.plot(x, y, color);
            }
        } else {
            for (y, x) in LineSteps::new((y0, x0), (y1, x1), self.height()) {
                self.plot(x, y, color);
            }
        }
    }

    /// Draw `len` pixels to the right of (x, y)
    pub fn draw_hline(&mut self, x: u32, y: u32, len: u32, color: Color) {
        let end = x.saturating_add(len).min(self.width());
        for px in x..end {
            self.set_pixel(px, y, color);
        }
    }

    /// Draw `len` pixels downward from (x, y)
    pub fn draw_vline(&mut self, x: u32, y: u32, len: u32, color: Color) {
        let end = y.saturating_add(len).min(self.height());
        for py in y..end {
            self.set_pixel(x, py, color);
        }
    }

    /// Draw the outline of the rectangle `[x, x+w) x [y, y+h)`
    ///
    /// Only the four border lines are touched. A zero width or height draws
    /// nothing.
    pub fn draw_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        if w == 0 || h == 0 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.draw_hline(x, y, w, color);
        self.draw_hline(x, bottom, w, color);
        self.draw_vline(x, y, h, color);
        self.draw_vline(right, y, h, color);
    }

    /// Fill the rectangle `[x, x+w) x [y, y+h)`
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let bottom = y.saturating_add(h).min(self.height());
        for py in y..bottom {
            self.draw_hline(x, py, w, color);
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }
}

/// `(major, minor)` points of a line, one per major-axis step
///
/// Only steps with `0 <= major < limit` are produced.
struct LineSteps {
    origin: (i64, i64),
    run: i64,
    rise: i64,
    next: i64,
    last: i64,
}

impl LineSteps {
    fn new(a: (i32, i32), b: (i32, i32), limit: u32) -> Self {
        // Always walk from the lower major coordinate
        let (a, b) = if b.0 < a.0 { (b, a) } else { (a, b) };
        let origin = (i64::from(a.0), i64::from(a.1));
        let end = (i64::from(b.0), i64::from(b.1));

        Self {
            origin,
            run: end.0 - origin.0,
            rise: end.1 - origin.1,
            next: origin.0.max(0),
            last: end.0.min(i64::from(limit) - 1),
        }
    }
}

impl Iterator for LineSteps {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let major = self.next;
        self.next += 1;

        if self.run == 0 {
            return Some((major, self.origin.1));
        }

        // round(step * rise / run) with halves rounded up; i128 as both
        // factors can span the full i32 range
        let numerator = i128::from(major - self.origin.0) * i128::from(self.rise);
        let run = i128::from(self.run);
        let offset = (2 * numerator + run).div_euclid(2 * run);
        Some((major, self.origin.1 + offset as i64))
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::framebuffer::tests::{lit_pixels, test_framebuffer};
    use alloc::vec::Vec;

    #[test]
    fn test_point_line_sets_one_pixel() {
        let mut fb = test_framebuffer();
        fb.draw_line(17, 33, 17, 33, Color::On);
        assert_eq!(lit_pixels(&fb), alloc::vec![(17, 33)]);
    }

    #[test]
    fn test_horizontal_line_includes_endpoints() {
        let mut fb = test_framebuffer();
        fb.draw_line(0, 0, 10, 0, Color::On);
        let expected: Vec<(u32, u32)> = (0..=10).map(|x| (x, 0)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_vertical_line() {
        let mut fb = test_framebuffer();
        fb.draw_line(5, 20, 5, 3, Color::On);
        let expected: Vec<(u32, u32)> = (3..=20).map(|y| (5, y)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_diagonal_line() {
        let mut fb = test_framebuffer();
        fb.draw_line(0, 0, 7, 7, Color::On);
        let expected: Vec<(u32, u32)> = (0..=7).map(|i| (i, i)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_line_symmetry() {
        for (x0, y0, x1, y1) in [
            (0, 0, 10, 0),
            (3, 40, 3, 2),
            (10, 10, 30, 30),
            (50, 5, 20, 35),
            (0, 0, 4, 1),
            (0, 0, 1, 4),
            (7, 3, 0, 60),
            (120, 2, 5, 9),
            (-9, 70, 140, -3),
        ] {
            let mut forward = test_framebuffer();
            forward.draw_line(x0, y0, x1, y1, Color::On);
            let mut backward = test_framebuffer();
            backward.draw_line(x1, y1, x0, y0, Color::On);
            assert_eq!(lit_pixels(&forward), lit_pixels(&backward));
        }
    }

    #[test]
    fn test_steep_line_is_connected() {
        let mut fb = test_framebuffer();
        fb.draw_line(2, 1, 5, 20, Color::On);
        let lit = lit_pixels(&fb);
        // One pixel per row for a steep line
        assert_eq!(lit.len(), 20);
        assert_eq!(lit.first(), Some(&(2, 1)));
        assert_eq!(lit.last(), Some(&(5, 20)));
        for pair in lit.windows(2) {
            assert_eq!(pair[1].1, pair[0].1 + 1);
            assert!(pair[1].0.abs_diff(pair[0].0) <= 1);
        }
    }

    #[test]
    fn test_line_clips_negative_coordinates() {
        let mut fb = test_framebuffer();
        fb.draw_line(-5, 0, 5, 0, Color::On);
        let expected: Vec<(u32, u32)> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_shallow_line_rounds_ties_up() {
        let mut fb = test_framebuffer();
        fb.draw_line(4, 1, 0, 0, Color::On);
        assert_eq!(
            lit_pixels(&fb),
            alloc::vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 1)]
        );
    }

    #[test]
    fn test_far_endpoints_are_clipped() {
        let mut fb = test_framebuffer();
        fb.draw_line(i32::MIN, 0, i32::MAX, 0, Color::On);
        let expected: Vec<(u32, u32)> = (0..128).map(|x| (x, 0)).collect();
        assert_eq!(lit_pixels(&fb), expected);

        let mut fb = test_framebuffer();
        fb.draw_line(i32::MAX, i32::MAX, i32::MIN, i32::MIN, Color::On);
        let expected: Vec<(u32, u32)> = (0..64).map(|i| (i, i)).collect();
        assert_eq!(lit_pixels(&fb), expected);

        let mut fb = test_framebuffer();
        fb.draw_line(5, i32::MIN, 5, i32::MAX, Color::On);
        assert_eq!(lit_pixels(&fb).len(), 64);
    }

    #[test]
    fn test_line_entirely_offscreen() {
        let mut fb = test_framebuffer();
        fb.draw_line(-100, -3, 300, -3, Color::On);
        fb.draw_line(200, 0, 200, 63, Color::On);
        assert!(lit_pixels(&fb).is_empty());
    }

    #[test]
    fn test_line_can_erase() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        fb.draw_line(0, 8, 127, 8, Color::Off);
        assert!((0..128).all(|x| fb.pixel(x, 8) == Some(Color::Off)));
        assert_eq!(fb.pixel(0, 7), Some(Color::On));
    }

    #[test]
    fn test_fill_rect_sets_w_times_h() {
        let mut fb = test_framebuffer();
        fb.fill_rect(2, 38, 46, 4, Color::On);
        let lit = lit_pixels(&fb);
        assert_eq!(lit.len(), 46 * 4);
        assert!(lit.iter().all(|(x, y)| (2..=47).contains(x) && (38..=41).contains(y)));
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut fb = test_framebuffer();
        fb.fill_rect(120, 60, 20, 20, Color::On);
        assert_eq!(lit_pixels(&fb).len(), 8 * 4);

        let mut fb = test_framebuffer();
        fb.fill_rect(u32::MAX - 1, 0, 10, 10, Color::On);
        assert!(lit_pixels(&fb).is_empty());
    }

    #[test]
    fn test_fill_rect_zero_size() {
        let mut fb = test_framebuffer();
        fb.fill_rect(10, 10, 0, 5, Color::On);
        fb.fill_rect(10, 10, 5, 0, Color::On);
        assert!(lit_pixels(&fb).is_empty());
    }

    #[test]
    fn test_draw_rect_border_only() {
        let mut fb = test_framebuffer();
        fb.draw_rect(0, 36, 100, 8, Color::On);
        let lit = lit_pixels(&fb);

        // Two rows of 100 plus two columns of 6 between them
        assert_eq!(lit.len(), 2 * 100 + 2 * 6);
        assert!(lit.iter().all(|(x, y)| *y == 36 || *y == 43 || *x == 0 || *x == 99));
        assert_eq!(fb.pixel(1, 37), Some(Color::Off));
    }

    #[test]
    fn test_draw_rect_clipped_edges() {
        let mut fb = test_framebuffer();
        fb.draw_rect(120, 60, 20, 20, Color::On);
        // Top row 120..128 and left column 60..64 remain
        assert_eq!(lit_pixels(&fb).len(), 8 + 3);
    }

    #[test]
    fn test_draw_rect_degenerate() {
        let mut fb = test_framebuffer();
        fb.draw_rect(10, 10, 0, 5, Color::On);
        fb.draw_rect(10, 10, 5, 0, Color::On);
        assert!(lit_pixels(&fb).is_empty());

        fb.draw_rect(10, 10, 1, 1, Color::On);
        assert_eq!(lit_pixels(&fb), alloc::vec![(10, 10)]);

        let mut fb = test_framebuffer();
        fb.draw_rect(10, 10, 4, 1, Color::On);
        assert_eq!(lit_pixels(&fb).len(), 4);
    }
}
