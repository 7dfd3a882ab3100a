use crate::color::Color;

/// A pointer position in canvas pixels. May lie outside the canvas while the
/// user drags past its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// One committed piece of a stroke: a straight line between two consecutive
/// pointer samples, drawn with the pen settings active when it was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: u32,
}

impl Segment {
    pub fn new(from: Point, to: Point, color: Color, width: u32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    /// Distance from a pixel center to the closest point on this segment
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let (ax, ay) = (self.from.x as f32, self.from.y as f32);
        let (bx, by) = (self.to.x as f32, self.to.y as f32);
        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;

        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((x - ax) * dx + (y - ay) * dy) / len_sq).clamp(0.0, 1.0)
        };

        let (cx, cy) = (ax + t * dx, ay + t * dy);
        ((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
    }

    /// Half the brush width, never thinner than half a pixel so a 1px pen
    /// leaves an unbroken line
    pub fn radius(&self) -> f32 {
        (self.width as f32 / 2.0).max(0.5)
    }

    /// Where inside a pixel coverage is sampled. Odd widths center on the
    /// pixel; even widths sample the pixel's lower-right quarter point so the
    /// line straddles the pixel boundary and stays exactly `width` across.
    pub fn sample_offset(&self) -> f32 {
        if self.width % 2 == 0 { 0.5 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_segment() {
        let seg = Segment::new(Point::new(0, 0), Point::new(10, 0), Color::BLACK, 1);
        assert_eq!(seg.distance_to(5.0, 3.0), 3.0);
        // Beyond the end the closest point is the endpoint itself
        assert_eq!(seg.distance_to(13.0, 4.0), 5.0);
    }

    #[test]
    fn test_zero_length_segment_is_a_dot() {
        let seg = Segment::new(Point::new(4, 4), Point::new(4, 4), Color::BLACK, 2);
        assert_eq!(seg.distance_to(4.0, 4.0), 0.0);
        assert_eq!(seg.distance_to(4.0, 7.0), 3.0);
    }

    #[test]
    fn test_radius_floor() {
        let thin = Segment::new(Point::new(0, 0), Point::new(1, 1), Color::BLACK, 1);
        let thick = Segment { width: 10, ..thin };
        assert_eq!(thin.radius(), 0.5);
        assert_eq!(thick.radius(), 5.0);
    }

    #[test]
    fn test_sample_offset_by_parity() {
        let seg = Segment::new(Point::new(0, 0), Point::new(1, 0), Color::BLACK, 5);
        assert_eq!(seg.sample_offset(), 0.0);
        assert_eq!(Segment { width: 10, ..seg }.sample_offset(), 0.5);
    }
}
