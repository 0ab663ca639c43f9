//! Renderer contract
//!
//! The simulation never draws. Each frame the loop builds a `FrameView` from
//! the game state and hands it to a `Renderer`, which sends nothing back.

use glam::Vec2;

use crate::sim::{FieldDimensions, GameState, Team};
use crate::ui::Button;

/// Text of the goal banner
pub const GOAL_BANNER_TEXT: &str = "GOOOOL!";

/// What a player looks like this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: f32,
    pub team: Team,
}

/// Read-only snapshot of one frame
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub field: &'a FieldDimensions,
    pub ball_position: Vec2,
    pub ball_rotation: f32,
    pub ball_radius: f32,
    pub players: Vec<PlayerView>,
    pub scoreboard: String,
    /// Seconds since the goal banner started, while visible
    pub goal_banner: Option<f32>,
    /// Overlay text and seconds since it appeared
    pub overlay: Option<(&'a str, f32)>,
    pub paused: bool,
    pub button: &'a Button,
}

impl<'a> FrameView<'a> {
    pub fn capture(state: &'a GameState, button: &'a Button, now: f64) -> Self {
        let overlay = state
            .overlay
            .text(now)
            .zip(state.overlay.elapsed(now));
        Self {
            field: &state.pitch.field.dims,
            ball_position: state.ball.position,
            ball_rotation: state.ball.rotation,
            ball_radius: state.ball.radius,
            players: state
                .pitch
                .players
                .iter()
                .map(|p| PlayerView {
                    position: p.position,
                    size: p.size,
                    team: p.team,
                })
                .collect(),
            scoreboard: state.score.scoreboard_text(),
            goal_banner: state.score.banner_elapsed(now),
            overlay,
            paused: state.pause.is_paused(now),
            button,
        }
    }
}

/// Anything that can present a frame
pub trait Renderer {
    fn draw(&mut self, frame: &FrameView<'_>);
}

/// Headless renderer: logs what a player would notice changing on screen
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_scoreboard: String,
    last_overlay: Option<String>,
    banner_showing: bool,
    pub frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        if self.frames == 1 {
            let [center, spot_b, spot_a] = frame.field.marks();
            log::info!(
                "Field {}x{}, goal {}, center {}, penalty spots {} / {}",
                frame.field.width,
                frame.field.length,
                frame.field.goal_width,
                center,
                spot_b,
                spot_a
            );
        }

        if frame.scoreboard != self.last_scoreboard {
            log::info!("{}", frame.scoreboard);
            self.last_scoreboard.clone_from(&frame.scoreboard);
        }

        let banner = frame.goal_banner.is_some();
        if banner && !self.banner_showing {
            log::info!("{}", GOAL_BANNER_TEXT);
        }
        self.banner_showing = banner;

        let overlay = frame.overlay.map(|(text, _)| text);
        if overlay != self.last_overlay.as_deref() {
            if let Some(text) = overlay {
                let pos = frame.ball_position;
                log::info!("{} at ({:.0}, {:.0})", text, pos.x, pos.y);
            }
            self.last_overlay = overlay.map(str::to_string);
        }
    }
}
