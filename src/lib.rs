//! Kickoff - A top-down soccer arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field zones, collisions, ball, players, scoring)
//! - `settings`: Data-driven configuration loaded from JSON
//! - `ui`: Reset button and window-to-world mapping
//! - `render`: Frame snapshot handed to whatever draws the game
//! - `platform`: Input and clock abstractions
//! - `game_loop`: Fixed-rate loop tying the above together

pub mod game_loop;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Field scale used by the full-size game
    pub const FIELD_SIZE_FACTOR: f32 = 6.0;
    /// How far boundary zones sit outside the painted lines
    pub const ZONE_TOLERANCE: f32 = 25.0;
    /// Gap between a goal post and the corner "external post" line
    pub const POST_OFFSET: f32 = 2.0;
    /// How far outer zones extend past their boundary line
    pub const OUTER_ZONE_DEPTH: f32 = 10_000.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance per tick along each pressed axis
    pub const BALL_SPEED: f32 = 3.0;
    /// Visual spin per tick (degrees) for horizontal / vertical input
    pub const BALL_SPIN_X: f32 = 3.0;
    pub const BALL_SPIN_Y: f32 = 2.0;

    /// Player footprint side length
    pub const PLAYER_SIZE: f32 = 14.0;

    /// Pause after a goal, corner or side event (seconds)
    pub const PAUSE_SECS: f32 = 3.0;
    /// "CORNER" / "SIDE" overlay lifetime (150 frames)
    pub const OVERLAY_SECS: f32 = 150.0 / TICK_RATE;
    /// Goal banner lifetime (250 frames)
    pub const GOAL_BANNER_SECS: f32 = 250.0 / TICK_RATE;

    /// World-space extents shown by the window
    pub const VIEW_HALF_WIDTH: f32 = 500.0;
    pub const VIEW_HALF_HEIGHT: f32 = 400.0;
    /// Default window size (pixels)
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}
