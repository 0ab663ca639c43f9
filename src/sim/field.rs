//! Field geometry and the boundary zone registry
//!
//! The field is centered on the origin with the length along y. Side A
//! attacks the goal at +y, side B the goal at -y. The zone list tiles the
//! area just outside the painted rectangle and is scanned in construction
//! order, so earlier zones take precedence where they touch later ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, ZoneTag};
use super::geometry::BoundingBox;
use crate::consts::*;

/// Tag used for the B-side right external post line.
///
/// The mirrored table has always tagged this line `CornerARight`, which
/// sends the ball to the opposite end of the field. `Mirrored` tags it
/// `CornerBRight` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostTag {
    #[default]
    Legacy,
    Mirrored,
}

impl PostTag {
    fn b_right_tag(self) -> ZoneTag {
        match self {
            PostTag::Legacy => ZoneTag::CornerARight,
            PostTag::Mirrored => ZoneTag::CornerBRight,
        }
    }
}

/// Field construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Scale applied to the reference dimensions (90 x 120)
    pub size_factor: f32,
    /// Distance between the painted lines and the boundary zones
    pub tolerance: f32,
    /// Gap between a goal post and the neighbouring corner line
    pub post_offset: f32,
    /// How far the outer zones extend away from the field (0 = pure lines)
    pub outer_depth: f32,
    pub b_right_post_tag: PostTag,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size_factor: FIELD_SIZE_FACTOR,
            tolerance: ZONE_TOLERANCE,
            post_offset: POST_OFFSET,
            outer_depth: OUTER_ZONE_DEPTH,
            b_right_post_tag: PostTag::Legacy,
        }
    }
}

/// Painted dimensions of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDimensions {
    pub width: f32,
    pub length: f32,
    pub center_radius: f32,
    pub big_area_width: f32,
    pub big_area_length: f32,
    pub small_area_width: f32,
    pub small_area_length: f32,
    pub goal_width: f32,
    pub goal_length: f32,
}

impl FieldDimensions {
    pub fn new(size_factor: f32) -> Self {
        Self {
            width: size_factor * 90.0,
            length: size_factor * 120.0,
            center_radius: size_factor * 14.15,
            big_area_width: size_factor * 60.0,
            big_area_length: size_factor * 40.0,
            small_area_width: size_factor * 27.3,
            small_area_length: size_factor * 15.5,
            goal_width: size_factor * 18.3,
            goal_length: size_factor * 8.5,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    /// Center spot and the two penalty spots
    pub fn marks(&self) -> [Vec2; 3] {
        let offset = 3.0 * self.small_area_length;
        [Vec2::ZERO, Vec2::new(0.0, -offset), Vec2::new(0.0, offset)]
    }

    /// The playable rectangle
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            -self.half_width(),
            -self.half_length(),
            self.half_width(),
            self.half_length(),
        )
    }
}

/// One entry of the zone registry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub bounds: BoundingBox,
    pub tag: ZoneTag,
}

/// The field: painted dimensions plus the ordered boundary zones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub dims: FieldDimensions,
    pub config: FieldConfig,
    zones: Vec<Zone>,
}

impl Field {
    pub fn new(config: FieldConfig) -> Self {
        assert!(
            config.size_factor > 0.0,
            "field size factor must be positive, got {}",
            config.size_factor
        );
        let dims = FieldDimensions::new(config.size_factor);
        let zones = build_zones(&dims, &config);
        log::debug!(
            "Field {}x{} (goal {}) with {} zones",
            dims.width,
            dims.length,
            dims.goal_width,
            zones.len()
        );
        Self { dims, config, zones }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Where the ball is placed for a corner kick
    pub fn corner_spot(&self, tag: ZoneTag) -> Option<Vec2> {
        let hw = self.dims.half_width();
        let hl = self.dims.half_length();
        match tag {
            ZoneTag::CornerALeft => Some(Vec2::new(-hw, hl)),
            ZoneTag::CornerARight => Some(Vec2::new(hw, hl)),
            ZoneTag::CornerBLeft => Some(Vec2::new(-hw, -hl)),
            ZoneTag::CornerBRight => Some(Vec2::new(hw, -hl)),
            _ => None,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl Collidable for Field {
    fn check_collision(&self, bb: &BoundingBox) -> ZoneTag {
        self.zones
            .iter()
            .find(|zone| zone.bounds.overlaps(bb))
            .map(|zone| zone.tag)
            .unwrap_or(ZoneTag::None)
    }

    fn bounding_box(&self) -> BoundingBox {
        self.zones
            .iter()
            .map(|zone| zone.bounds)
            .fold(self.dims.bounds(), |acc, bb| acc.union(&bb))
    }
}

/// Build the zones for the +y end, then mirror them for the -y end.
fn build_zones(dims: &FieldDimensions, config: &FieldConfig) -> Vec<Zone> {
    let hw = dims.half_width();
    let hl = dims.half_length();
    let hg = dims.goal_width / 2.0;
    let tol = config.tolerance;
    let depth = config.outer_depth;
    let post = config.post_offset;

    let zone = |x0: f32, y0: f32, x1: f32, y1: f32, tag: ZoneTag| Zone {
        bounds: BoundingBox::new(x0, y0, x1, y1),
        tag,
    };

    let mut zones = Vec::with_capacity(16);

    // Lateral strips span the whole length, beyond the end lines too
    zones.push(zone(-hw - tol - depth, -hl - tol, -hw - tol, hl + tol, ZoneTag::LateralLeft));
    zones.push(zone(hw + tol, -hl - tol, hw + tol + depth, hl + tol, ZoneTag::LateralRight));

    // (sign, goal tag, left corner, right corner, right external post)
    let ends = [
        (1.0, ZoneTag::GoalA, ZoneTag::CornerALeft, ZoneTag::CornerARight, ZoneTag::CornerARight),
        (
            -1.0,
            ZoneTag::GoalB,
            ZoneTag::CornerBLeft,
            ZoneTag::CornerBRight,
            config.b_right_post_tag.b_right_tag(),
        ),
    ];

    for (sign, goal, corner_left, corner_right, right_post) in ends {
        let line = sign * (hl + tol);
        let far = sign * (hl + tol + depth);
        let goal_line = sign * hl;

        zones.push(zone(-hw - tol - depth, line, -hg, far, corner_left));
        zones.push(zone(hg, line, hw + tol + depth, far, corner_right));
        zones.push(zone(-hg, line, hg, far, goal));

        // Inside edges of the posts count as a goal
        zones.push(zone(-hg, goal_line, -hg, line, goal));
        zones.push(zone(hg, goal_line, hg, line, goal));

        // Just outside the posts counts as a corner
        zones.push(zone(-hg - post, goal_line, -hg - post, line, corner_left));
        zones.push(zone(hg + post, goal_line, hg + post, line, right_post));
    }

    zones
}
