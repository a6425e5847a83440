//=========================================================================
// Click Region
//=========================================================================
//
// Labelled rectangle answering hit tests in logical window coordinates
// (top-left origin, y grows downward).
//
//=========================================================================

//=== Rect ================================================================

/// Axis-aligned rectangle: origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict containment: points on any edge are outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.x < px && px < self.x + self.width && self.y < py && py < self.y + self.height
    }
}

//=== ClickRegion =========================================================

/// A clickable rectangle identified by its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickRegion {
    pub label: &'static str,
    pub rect: Rect,
}

impl ClickRegion {
    pub const fn new(label: &'static str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            label,
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }
}

/// Label of the first region containing the point, if any.
pub fn hit_test(regions: &[ClickRegion], x: f32, y: f32) -> Option<&'static str> {
    regions.iter().find(|r| r.contains(x, y)).map(|r| r.label)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: ClickRegion = ClickRegion::new("box", 10.0, 20.0, 100.0, 50.0);

    #[test]
    fn interior_point_is_inside() {
        assert!(BOX.contains(60.0, 45.0));
        assert!(BOX.contains(10.5, 20.5));
    }

    #[test]
    fn edges_are_outside() {
        assert!(!BOX.contains(10.0, 45.0));
        assert!(!BOX.contains(110.0, 45.0));
        assert!(!BOX.contains(60.0, 20.0));
        assert!(!BOX.contains(60.0, 70.0));
    }

    #[test]
    fn far_points_are_outside() {
        assert!(!BOX.contains(-5.0, -5.0));
        assert!(!BOX.contains(500.0, 45.0));
    }

    #[test]
    fn hit_test_returns_first_match() {
        let regions = [
            ClickRegion::new("a", 0.0, 0.0, 10.0, 10.0),
            ClickRegion::new("b", 5.0, 5.0, 10.0, 10.0),
        ];
        assert_eq!(hit_test(&regions, 7.0, 7.0), Some("a"));
        assert_eq!(hit_test(&regions, 12.0, 12.0), Some("b"));
        assert_eq!(hit_test(&regions, 50.0, 50.0), None);
    }
}
