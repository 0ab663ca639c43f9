//! Reset button and window-to-world mapping

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Maps window pixels (origin top-left, y down) to world units (origin
/// center, y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub window: Vec2,
    pub half_extent: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            window: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            half_extent: Vec2::new(VIEW_HALF_WIDTH, VIEW_HALF_HEIGHT),
        }
    }
}

impl Viewport {
    pub fn to_world(&self, pixel: Vec2) -> Vec2 {
        let n = pixel / self.window;
        Vec2::new(
            -self.half_extent.x + n.x * 2.0 * self.half_extent.x,
            self.half_extent.y - n.y * 2.0 * self.half_extent.y,
        )
    }
}

/// A clickable rectangle with a label, anchored at its bottom-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub origin: Vec2,
    pub size: Vec2,
    pub label: String,
    pub hovered: bool,
}

impl Button {
    pub fn new(origin: Vec2, size: Vec2, label: &str) -> Self {
        Self {
            origin,
            size,
            label: label.to_string(),
            hovered: false,
        }
    }

    /// The in-game reset button
    pub fn reset() -> Self {
        Self::new(Vec2::new(-450.0, 240.0), Vec2::new(120.0, 50.0), "Reset")
    }

    /// Edges count as inside
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    pub fn update_hover(&mut self, pointer: Option<Vec2>) {
        self.hovered = pointer.is_some_and(|p| self.contains(p));
    }

    /// True when a click at `pointer` lands on the button
    pub fn is_clicked(&self, pointer: Option<Vec2>, click: bool) -> bool {
        click && pointer.is_some_and(|p| self.contains(p))
    }
}
