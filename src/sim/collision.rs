//! Collision detection
//!
//! The classic axis-aligned overlap test. The scan itself lives in
//! [`GameSession::poll`](super::session::GameSession::poll) because every hit
//! mutates the player mid-scan.

use super::bounds::BoundingBox;

/// Axis-aligned overlap test between two boxes.
///
/// Touching edges count as overlap (`>=`/`<=`), matching the scoring rule.
/// The test is symmetric in its arguments.
#[inline]
pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.right >= b.left && a.left <= b.right && a.top <= b.bottom && a.bottom >= b.top
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32) -> BoundingBox {
        BoundingBox::from_origin_size(x, y, 40.0)
    }

    #[test]
    fn test_overlapping_boxes() {
        assert!(boxes_overlap(&square(0.0, 0.0), &square(20.0, 20.0)));
    }

    #[test]
    fn test_identical_boxes() {
        assert!(boxes_overlap(&square(5.0, 5.0), &square(5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_count() {
        // Right edge of a exactly on left edge of b
        assert!(boxes_overlap(&square(0.0, 0.0), &square(40.0, 0.0)));
        // Bottom edge of a exactly on top edge of b
        assert!(boxes_overlap(&square(0.0, 0.0), &square(0.0, 40.0)));
    }

    #[test]
    fn test_disjoint_boxes() {
        assert!(!boxes_overlap(&square(0.0, 0.0), &square(41.0, 0.0)));
        assert!(!boxes_overlap(&square(0.0, 0.0), &square(0.0, 41.0)));
        assert!(!boxes_overlap(&square(0.0, 0.0), &square(300.0, 300.0)));
    }

    #[test]
    fn test_symmetric() {
        let cases = [
            (square(0.0, 0.0), square(20.0, 20.0)),
            (square(0.0, 0.0), square(40.0, 0.0)),
            (square(0.0, 0.0), square(100.0, 100.0)),
            (square(-30.0, -30.0), square(0.0, 0.0)),
        ];
        for (a, b) in cases {
            assert_eq!(boxes_overlap(&a, &b), boxes_overlap(&b, &a));
        }
    }
}
