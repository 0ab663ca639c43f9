//! Zone classification and the collision dispatcher
//!
//! The dispatcher does not own anything it checks. It keeps an ordered list of
//! handles and asks a lookup (normally the pitch) to resolve them at query
//! time, so players can move between queries without re-registering.

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;

/// Result of classifying a box against the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneTag {
    #[default]
    None,
    GoalA,
    GoalB,
    LateralLeft,
    LateralRight,
    CornerALeft,
    CornerARight,
    CornerBLeft,
    CornerBRight,
    Player,
}

impl ZoneTag {
    pub fn is_none(self) -> bool {
        self == ZoneTag::None
    }
}

/// Anything a moving box can run into
pub trait Collidable {
    /// Classify `bb` against this entity, `ZoneTag::None` on a miss
    fn check_collision(&self, bb: &BoundingBox) -> ZoneTag;

    /// Overall extent of the entity
    fn bounding_box(&self) -> BoundingBox;
}

/// Handle to a collidable owned elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollidableId {
    Field,
    Player(usize),
}

/// Resolves handles to live entities
pub trait CollidableLookup {
    fn collidable(&self, id: CollidableId) -> Option<&dyn Collidable>;
}

/// Ordered registry of collidables; the first non-`None` answer wins
#[derive(Debug, Clone, Default)]
pub struct CollisionDispatcher {
    order: Vec<CollidableId>,
}

impl CollisionDispatcher {
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Append to the check order (duplicates are kept)
    pub fn add_collidable(&mut self, id: CollidableId) {
        self.order.push(id);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[CollidableId] {
        &self.order
    }

    /// Ask each registered collidable in order, return the first hit
    pub fn check_collisions(&self, world: &dyn CollidableLookup, bb: &BoundingBox) -> ZoneTag {
        for &id in &self.order {
            let Some(collidable) = world.collidable(id) else {
                log::debug!("Skipping unresolved collidable {:?}", id);
                continue;
            };
            let result = collidable.check_collision(bb);
            if !result.is_none() {
                return result;
            }
        }
        ZoneTag::None
    }
}
