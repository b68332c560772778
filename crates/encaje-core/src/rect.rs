/// A rectangle in virtual-screen coordinates.
///
/// Edges are absolute: `right >= left` and `bottom >= top`; degenerate
/// rectangles (zero width or height) are legal. Values come straight
/// from OS geometry queries and are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns whether the two rectangles share any interior area.
    ///
    /// Open-interval test: rectangles that merely touch along an edge
    /// do not intersect. A window flush against the boundary of a
    /// neighboring monitor therefore belongs to neither side.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.left >= other.right
            || self.right <= other.left
            || self.top >= other.bottom
            || self.bottom <= other.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height() {
        let r = Rect::new(-100, 50, 200, 80);
        assert_eq!(r.width(), 300);
        assert_eq!(r.height(), 30);
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 150, 150);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        // Side by side monitors: a window exactly filling the left one
        // must not count as present on the right one.
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 200, 100);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn corner_touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 100, 200, 200);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(500, 500, 600, 600);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn zero_width_rect_on_the_boundary_does_not_intersect() {
        let line = Rect::new(100, 0, 100, 100);
        let area = Rect::new(0, 0, 100, 100);
        assert!(!line.intersects(&area));
        assert!(!area.intersects(&line));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(25, 25, 75, 75);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
