//! Scripted opponents
//!
//! Players drift toward a point between their home spot and the ball, with a
//! little seeded jitter. For collisions they are just a square footprint, and
//! they never step onto the ball themselves.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, ZoneTag};
use super::geometry::BoundingBox;

/// Which side a player belongs to (render color only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

/// Movement tuning for scripted players
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAiConfig {
    /// Fraction of the remaining distance covered per tick (0..=1)
    pub approach_rate: f32,
    /// How far toward the ball the target sits (0 = home, 1 = ball)
    pub pull: f32,
    /// Max random offset per axis per tick
    pub jitter: f32,
}

impl Default for PlayerAiConfig {
    fn default() -> Self {
        Self {
            approach_rate: 0.03,
            pull: 0.35,
            jitter: 0.4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub home: Vec2,
    pub position: Vec2,
    /// Side length of the square footprint
    pub size: f32,
    pub team: Team,
}

impl Player {
    pub fn new(home: Vec2, size: f32, team: Team) -> Self {
        Self {
            home,
            position: home,
            size,
            team,
        }
    }

    pub fn reset_position(&mut self) {
        self.position = self.home;
    }

    /// One movement step toward the ball. A step that would newly cover the
    /// ball is dropped, otherwise the ball could be pinned in place.
    pub fn update<R: Rng>(&mut self, ball: &BoundingBox, ai: &PlayerAiConfig, rng: &mut R) {
        let target = self.home.lerp(ball.center(), ai.pull);
        let mut step = (target - self.position) * ai.approach_rate;
        if ai.jitter > 0.0 {
            step += Vec2::new(
                rng.random_range(-ai.jitter..=ai.jitter),
                rng.random_range(-ai.jitter..=ai.jitter),
            );
        }

        let next = BoundingBox::around(self.position + step, self.size / 2.0);
        if next.overlaps(ball) && !self.bounding_box().overlaps(ball) {
            return;
        }
        self.position += step;
    }
}

impl Collidable for Player {
    fn check_collision(&self, bb: &BoundingBox) -> ZoneTag {
        if self.bounding_box().overlaps(bb) {
            ZoneTag::Player
        } else {
            ZoneTag::None
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.position, self.size / 2.0)
    }
}

/// Build one player per kickoff position
pub fn spawn_players(positions: &[Vec2], size: f32, team: Team) -> Vec<Player> {
    positions
        .iter()
        .map(|&pos| Player::new(pos, size, team))
        .collect()
}
