use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// One tile's rectangle within the container
pub struct Rect {
    /// Left edge of the rectangle
    pub left: f64,
    /// Top edge of the rectangle
    pub top: f64,
    /// Width of the rectangle (from the left edge)
    pub width: f64,
    /// Height of the rectangle (from the top edge)
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: (f64, f64)) -> bool {
        point.0 >= self.left
            && point.0 <= self.right()
            && point.1 >= self.top
            && point.1 <= self.bottom()
    }

    /// Whether `other` lies entirely within self, to within `tolerance`
    /// pixels on every edge.
    #[must_use]
    pub fn contains(&self, other: &Rect, tolerance: f64) -> bool {
        other.left >= self.left - tolerance
            && other.top >= self.top - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// Whether self and `other` overlap with positive area. Rectangles that
    /// merely share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn test_edges_and_area() {
        let r = rect(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.area(), 5000.0);
    }

    #[test]
    fn test_contains_point_on_boundary() {
        let r = rect(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains_point((0.0, 0.0)));
        assert!(r.contains_point((100.0, 100.0)));
        assert!(!r.contains_point((100.1, 50.0)));
    }

    #[test]
    fn test_contains_with_tolerance() {
        let container = rect(0.0, 0.0, 1000.0, 600.0);
        let inside = rect(0.0, 0.0, 1000.0, 562.5);
        let slightly_out = rect(0.0, 0.0, 1000.5, 562.5);
        let far_out = rect(0.0, 0.0, 1010.0, 562.5);

        assert!(container.contains(&inside, 0.0));
        assert!(container.contains(&slightly_out, 1.0));
        assert!(!container.contains(&far_out, 1.0));
    }

    #[test]
    fn test_intersects_requires_positive_overlap() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(100.0, 0.0, 100.0, 100.0);
        let c = rect(50.0, 50.0, 100.0, 100.0);

        // Shared edge is not an intersection
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }
}
