//! Target-rectangle computation for window transforms.
//!
//! All placement is relative to a monitor's work area (bounds minus
//! taskbar and docked panels), queried fresh for every action.

use crate::Rect;

/// Computes a rectangle scaled to a fraction of the work area,
/// centered within it.
///
/// Width and height are `floor(dimension * scale)`. `scale` must be
/// positive; it is deliberately not clamped above 1.0 — an oversized
/// rectangle is centered symmetrically off the work area.
pub fn scaled_rect(work_area: &Rect, scale: f64) -> Rect {
    let width = (f64::from(work_area.width()) * scale) as i32;
    let height = (f64::from(work_area.height()) * scale) as i32;
    centered_rect(work_area, width, height)
}

/// Computes a rectangle of the given size centered in the work area.
///
/// Used to center a window without resizing it. Centering uses floor
/// division so oversized dimensions produce a symmetric overhang.
pub fn centered_rect(work_area: &Rect, width: i32, height: i32) -> Rect {
    let left = work_area.left + (work_area.width() - width).div_euclid(2);
    let top = work_area.top + (work_area.height() - height).div_euclid(2);
    Rect::new(left, top, left + width, top + height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_area() -> Rect {
        Rect::new(0, 40, 1920, 1080)
    }

    #[test]
    fn full_scale_yields_the_work_area() {
        assert_eq!(scaled_rect(&work_area(), 1.0), work_area());
    }

    #[test]
    fn scaled_rect_is_contained_for_scales_up_to_one() {
        let work = work_area();
        for scale in [0.1, 0.25, 0.5, 0.6, 0.8, 0.99, 1.0] {
            let r = scaled_rect(&work, scale);
            assert!(r.left >= work.left, "scale {scale}");
            assert!(r.top >= work.top, "scale {scale}");
            assert!(r.right <= work.right, "scale {scale}");
            assert!(r.bottom <= work.bottom, "scale {scale}");
        }
    }

    #[test]
    fn scaled_rect_is_centered_within_rounding() {
        let work = work_area();
        for scale in [0.3, 0.6, 0.8] {
            let r = scaled_rect(&work, scale);
            let left_gap = r.left - work.left;
            let right_gap = work.right - r.right;
            let top_gap = r.top - work.top;
            let bottom_gap = work.bottom - r.bottom;
            assert!((left_gap - right_gap).abs() <= 1, "scale {scale}");
            assert!((top_gap - bottom_gap).abs() <= 1, "scale {scale}");
        }
    }

    #[test]
    fn dimensions_round_down() {
        // 0.8 * 101 = 80.8 -> 80
        let work = Rect::new(0, 0, 101, 101);
        let r = scaled_rect(&work, 0.8);
        assert_eq!(r.width(), 80);
        assert_eq!(r.height(), 80);
    }

    #[test]
    fn oversized_scale_centers_off_the_work_area() {
        let work = Rect::new(0, 0, 100, 100);
        let r = scaled_rect(&work, 1.5);
        assert_eq!(r.width(), 150);
        // Floor division: overhang of 50 split as -25 on each side.
        assert_eq!(r.left, -25);
        assert_eq!(r.right, 125);
    }

    #[test]
    fn centered_rect_preserves_the_given_size() {
        let work = work_area();
        let r = centered_rect(&work, 640, 480);
        assert_eq!(r.width(), 640);
        assert_eq!(r.height(), 480);
        assert!(r.left >= work.left && r.right <= work.right);
        assert!(r.top >= work.top && r.bottom <= work.bottom);
    }

    #[test]
    fn centered_rect_honors_work_area_offset() {
        // Work area of a secondary monitor left of the primary.
        let work = Rect::new(-1920, 0, 0, 1080);
        let r = centered_rect(&work, 400, 300);
        assert_eq!(r.left, -1920 + (1920 - 400) / 2);
        assert_eq!(r.top, (1080 - 300) / 2);
    }
}
