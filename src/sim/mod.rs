//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep, time passed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (registration order for collisions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod geometry;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Collidable, CollidableId, CollidableLookup, CollisionDispatcher, ZoneTag};
pub use field::{Field, FieldConfig, FieldDimensions, PostTag, Zone};
pub use geometry::BoundingBox;
pub use player::{Player, PlayerAiConfig, Team, spawn_players};
pub use state::{
    Ball, BallConfig, GameEvent, GameState, Overlay, PauseState, Pitch, Score, TimingConfig,
};
pub use tick::{TickInput, resolve_zone, tick, update_ball};
