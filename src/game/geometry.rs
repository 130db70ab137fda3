/// Axis-aligned rectangle in field units (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Closed-interval overlap test: rectangles whose edges touch collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let collision_x = self.x + self.w >= other.x && other.x + other.w >= self.x;
        let collision_y = self.y + self.h >= other.y && other.y + other.h >= self.y;

        collision_x && collision_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0, 0, 10, 10);

        assert!(a.overlaps(&Rect::new(9, 0, 10, 10)));
        // a.x + a.w == 10 touches b.x == 10
        assert!(a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(11, 0, 10, 10)));
    }

    #[test]
    fn test_needs_both_axes() {
        let a = Rect::new(0, 0, 10, 10);

        // Same column, far below
        assert!(!a.overlaps(&Rect::new(0, 50, 10, 10)));
        // Same row, far right
        assert!(!a.overlaps(&Rect::new(50, 0, 10, 10)));
        assert!(a.overlaps(&Rect::new(5, 5, 2, 2)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let anchor = Rect::new(20, 20, 10, 60);

        for x in (0..60).step_by(3) {
            for y in (0..100).step_by(7) {
                let other = Rect::new(x, y, 10, 10);
                assert_eq!(
                    anchor.overlaps(&other),
                    other.overlaps(&anchor),
                    "asymmetric at ({}, {})",
                    x,
                    y
                );
            }
        }
    }
}
