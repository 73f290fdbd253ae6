//! Axis-aligned geometry primitives

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in surface coordinates.
///
/// Invariant: `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoundingBox {
    /// Square box of `size` anchored at a top-left origin.
    pub fn from_origin_size(x: f32, y: f32, size: f32) -> Self {
        Self {
            left: x,
            right: x + size,
            top: y,
            bottom: y + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Playable surface dimensions, measured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let b = BoundingBox::from_origin_size(10.0, 20.0, 40.0);
        assert_eq!(b.left, 10.0);
        assert_eq!(b.right, 50.0);
        assert_eq!(b.top, 20.0);
        assert_eq!(b.bottom, 60.0);
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 40.0);
    }

    #[test]
    fn test_negative_origin_keeps_invariant() {
        let b = BoundingBox::from_origin_size(-20.0, -20.0, 40.0);
        assert!(b.left <= b.right);
        assert!(b.top <= b.bottom);
    }
}
