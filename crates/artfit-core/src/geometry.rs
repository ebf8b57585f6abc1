//! Axis-aligned rectangles.
//!
//! Positions are relative to the parent element, the way the host reports them.

use glam::DVec2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Position relative to parent
    pub x: f64,
    pub y: f64,
    /// Size of the element
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Get position as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Get size as a vector.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if `other` lies entirely inside these bounds.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.left(), other.top()) && self.contains(other.right(), other.bottom())
    }

    /// Compute union (bounding box) with another bounds.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Bounds::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Bounding box of a sequence of rectangles.
    ///
    /// The first rectangle seeds the extrema, so content lying entirely in
    /// negative coordinates is measured correctly. Returns `None` for an empty
    /// sequence.
    pub fn enclosing<I>(rects: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = Bounds>,
    {
        let mut rects = rects.into_iter();
        let first = rects.next()?;
        let seed = (first.left(), first.top(), first.right(), first.bottom());
        let (min_x, min_y, max_x, max_y) = rects.fold(seed, |(min_x, min_y, max_x, max_y), r| {
            (
                min_x.min(r.left()),
                min_y.min(r.top()),
                max_x.max(r.right()),
                max_y.max(r.bottom()),
            )
        });
        Some(Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Same size, origin moved by `delta`.
    pub fn translate(&self, delta: DVec2) -> Bounds {
        Bounds::from_vecs(self.position() + delta, self.size())
    }

    /// Same origin, new size.
    pub fn with_size(&self, size: DVec2) -> Bounds {
        Bounds::from_vecs(self.position(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.left(), 10.0);
        assert_eq!(bounds.top(), 20.0);
        assert_eq!(bounds.right(), 110.0);
        assert_eq!(bounds.bottom(), 70.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert!(bounds.contains(50.0, 40.0));
        assert!(!bounds.contains(5.0, 40.0));
        assert!(!bounds.contains(50.0, 100.0));
        assert!(bounds.contains_bounds(&Bounds::new(10.0, 20.0, 10.0, 10.0)));
        assert!(!bounds.contains_bounds(&Bounds::new(100.0, 20.0, 20.0, 10.0)));
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Bounds::new(0.0, 0.0, 15.0, 15.0));
    }

    #[test]
    fn test_enclosing_empty() {
        assert_eq!(Bounds::enclosing(std::iter::empty()), None);
    }

    #[test]
    fn test_enclosing_negative_coordinates() {
        // Extrema start from the first rectangle, not the origin.
        let rects = [
            Bounds::new(-30.0, -40.0, 10.0, 10.0),
            Bounds::new(-25.0, -35.0, 10.0, 10.0),
        ];
        let bbox = Bounds::enclosing(rects).unwrap();
        assert_eq!(bbox, Bounds::new(-30.0, -40.0, 15.0, 15.0));
    }

    #[test]
    fn test_enclosing_size_is_exact_extrema_difference() {
        let rects = [
            Bounds::new(-194.85078293996662, -70.85394652210348, 489.8774636553663, 311.1273401860173),
            Bounds::new(612.4401384713255, 18.273109471103, 701.3128231278821, 95.04139781130491),
            Bounds::new(1204.7130843321927, -3.4891202846014, 519.3929941616934, 407.8113962004071),
            Bounds::new(37.19038726112431, 250.60912871104917, 1611.2293158120155, 83.3388135207337),
        ];
        let min_x = rects.iter().map(Bounds::left).fold(f64::INFINITY, f64::min);
        let min_y = rects.iter().map(Bounds::top).fold(f64::INFINITY, f64::min);
        let max_x = rects.iter().map(Bounds::right).fold(f64::NEG_INFINITY, f64::max);
        let max_y = rects.iter().map(Bounds::bottom).fold(f64::NEG_INFINITY, f64::max);

        let bbox = Bounds::enclosing(rects).unwrap();
        assert_eq!(bbox.x, min_x);
        assert_eq!(bbox.y, min_y);
        assert_eq!(bbox.width, max_x - min_x);
        assert_eq!(bbox.height, max_y - min_y);
    }

    #[test]
    fn test_translate_keeps_size() {
        let moved = Bounds::new(10.0, 20.0, 5.0, 6.0).translate(DVec2::new(-10.0, -20.0));
        assert_eq!(moved, Bounds::new(0.0, 0.0, 5.0, 6.0));
    }
}
