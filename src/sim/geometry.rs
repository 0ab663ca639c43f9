//! Axis-aligned bounding boxes
//!
//! Every collision in the game is a closed-interval AABB overlap test.
//! Zero-width and zero-height boxes are valid: they model painted lines.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in world units (y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BoundingBox {
    /// Build a box from two opposite corners in any order.
    ///
    /// Panics on NaN coordinates.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        assert!(
            !(x0.is_nan() || y0.is_nan() || x1.is_nan() || y1.is_nan()),
            "bounding box with NaN coordinate: ({x0}, {y0}) - ({x1}, {y1})"
        );
        Self {
            x_min: x0.min(x1),
            y_min: y0.min(y1),
            x_max: x0.max(x1),
            y_max: y0.max(y1),
        }
    }

    /// Square envelope of half-size `half_extent` centered on `center`
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            center.x + half_extent,
            center.y + half_extent,
        )
    }

    /// Degenerate box covering a single point
    pub fn point(p: Vec2) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }

    /// True when the box has no area (a line or a point)
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Closed-interval overlap: touching edges count
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !(self.x_max < other.x_min
            || self.x_min > other.x_max
            || self.y_max < other.y_min
            || self.y_min > other.y_max)
    }

    /// Smallest box containing both
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}
