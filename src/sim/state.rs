//! Game state and core simulation types
//!
//! Timers are absolute deadlines in seconds on the caller's clock. They are
//! compared once per tick and never fire callbacks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, CollidableId, CollidableLookup, CollisionDispatcher, ZoneTag};
use super::field::Field;
use super::geometry::BoundingBox;
use super::player::{Player, PlayerAiConfig, Team, spawn_players};
use crate::consts::*;
use crate::settings::Settings;

/// Ball tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Distance per tick along each pressed axis
    pub speed: f32,
    /// Visual spin per tick (degrees)
    pub spin_x: f32,
    pub spin_y: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            spin_x: BALL_SPIN_X,
            spin_y: BALL_SPIN_Y,
        }
    }
}

/// Durations of the timed windows (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub pause_secs: f32,
    pub overlay_secs: f32,
    pub goal_banner_secs: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pause_secs: PAUSE_SECS,
            overlay_secs: OVERLAY_SECS,
            goal_banner_secs: GOAL_BANNER_SECS,
        }
    }
}

/// The player-controlled ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Visual rotation (degrees, [0, 360))
    pub rotation: f32,
    pub radius: f32,
    pub kickoff: Vec2,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            radius,
            kickoff: Vec2::ZERO,
        }
    }

    pub fn reset_position(&mut self) {
        self.position = self.kickoff;
    }

    /// Envelope of the ball if it were centered on `pos`
    pub fn bounding_box_at(&self, pos: Vec2) -> BoundingBox {
        BoundingBox::around(pos, self.radius)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box_at(self.position)
    }
}

/// Team scores and the goal banner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Score {
    pub team_a: u32,
    pub team_b: u32,
    /// When the last goal banner started
    goal_at: Option<f64>,
    banner_secs: f32,
}

impl Score {
    pub fn new(banner_secs: f32) -> Self {
        Self {
            banner_secs,
            ..Default::default()
        }
    }

    pub fn add_point(&mut self, team: Team) {
        match team {
            Team::A => self.team_a += 1,
            Team::B => self.team_b += 1,
        }
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }

    /// Start the goal banner
    pub fn on_goal(&mut self, now: f64) {
        self.goal_at = Some(now);
    }

    pub fn banner_visible(&self, now: f64) -> bool {
        self.goal_at
            .is_some_and(|t| now >= t && now - t < self.banner_secs as f64)
    }

    /// Seconds since the banner started, while it is visible
    pub fn banner_elapsed(&self, now: f64) -> Option<f32> {
        match self.goal_at {
            Some(t) if self.banner_visible(now) => Some((now - t) as f32),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.team_a = 0;
        self.team_b = 0;
        self.goal_at = None;
    }

    pub fn scoreboard_text(&self) -> String {
        format!("Team A   {}   |   Team B   {}", self.team_a, self.team_b)
    }
}

/// Transient centered message ("CORNER", "SIDE")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overlay {
    text: String,
    shown_at: Option<f64>,
    duration_secs: f32,
}

impl Overlay {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            ..Default::default()
        }
    }

    pub fn show_text(&mut self, text: &str, now: f64) {
        self.text.clear();
        self.text.push_str(text);
        self.shown_at = Some(now);
    }

    pub fn hide(&mut self) {
        self.shown_at = None;
    }

    pub fn visible(&self, now: f64) -> bool {
        self.shown_at
            .is_some_and(|t| now >= t && now - t < self.duration_secs as f64)
    }

    /// Current text, if the overlay is showing
    pub fn text(&self, now: f64) -> Option<&str> {
        self.visible(now).then_some(self.text.as_str())
    }

    pub fn elapsed(&self, now: f64) -> Option<f32> {
        match self.shown_at {
            Some(t) if self.visible(now) => Some((now - t) as f32),
            _ => None,
        }
    }

    /// Pulse scale for the glyph at `index`; each glyph lags the previous by 0.1s
    pub fn glyph_scale(elapsed: f32, index: usize) -> f32 {
        let t = elapsed - index as f32 * 0.1;
        1.0 + 0.3 * (t * 5.0).sin()
    }
}

/// Gameplay pause window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PauseState {
    #[default]
    Active,
    Paused {
        until: f64,
        /// False for side throw-ins, where players keep their spots
        reset_players: bool,
    },
}

impl PauseState {
    pub fn start(&mut self, now: f64, secs: f32, reset_players: bool) {
        *self = PauseState::Paused {
            until: now + secs as f64,
            reset_players,
        };
    }

    pub fn is_paused(&self, now: f64) -> bool {
        matches!(*self, PauseState::Paused { until, .. } if now <= until)
    }

    /// Leave the pause once its deadline has passed. Returns true on the
    /// tick that resumes play.
    pub fn poll(&mut self, now: f64) -> bool {
        match *self {
            PauseState::Paused { until, .. } if now > until => {
                *self = PauseState::Active;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        *self = PauseState::Active;
    }
}

/// Something the renderer or logs may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Goal { team: Team, team_a: u32, team_b: u32 },
    Corner { tag: ZoneTag, spot: Vec2 },
    Side { tag: ZoneTag, spot: Vec2 },
    Blocked,
    /// Reset key: ball back to kickoff
    BallReset,
    /// Reset button: ball, score and players back to kickoff
    GameReset,
    Resumed,
}

/// Everything the ball can collide with
#[derive(Debug, Clone)]
pub struct Pitch {
    pub field: Field,
    pub players: Vec<Player>,
}

impl CollidableLookup for Pitch {
    fn collidable(&self, id: CollidableId) -> Option<&dyn Collidable> {
        match id {
            CollidableId::Field => Some(&self.field),
            CollidableId::Player(i) => self.players.get(i).map(|p| p as &dyn Collidable),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub pitch: Pitch,
    pub dispatcher: CollisionDispatcher,
    pub ball: Ball,
    pub score: Score,
    pub overlay: Overlay,
    pub pause: PauseState,
    pub ball_config: BallConfig,
    pub timing: TimingConfig,
    pub ai: PlayerAiConfig,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let field = Field::new(settings.field);
        let players = spawn_players(&settings.players.positions, settings.players.size, Team::B);

        // Field first: its zones win over a player standing in them
        let mut dispatcher = CollisionDispatcher::new();
        dispatcher.add_collidable(CollidableId::Field);
        for i in 0..players.len() {
            dispatcher.add_collidable(CollidableId::Player(i));
        }

        log::info!(
            "New match: field {}x{}, {} players, seed {}",
            field.dims.width,
            field.dims.length,
            players.len(),
            settings.seed
        );

        Self {
            pitch: Pitch { field, players },
            dispatcher,
            ball: Ball::new(settings.ball.radius),
            score: Score::new(settings.timing.goal_banner_secs),
            overlay: Overlay::new(settings.timing.overlay_secs),
            pause: PauseState::Active,
            ball_config: settings.ball,
            timing: settings.timing,
            ai: settings.ai,
            rng: Pcg32::seed_from_u64(settings.seed),
            time_ticks: 0,
        }
    }

    /// Classify a box against the field and every player
    pub fn classify(&self, bb: &BoundingBox) -> ZoneTag {
        self.dispatcher.check_collisions(&self.pitch, bb)
    }

    pub fn reset_players(&mut self) {
        for player in &mut self.pitch.players {
            player.reset_position();
        }
    }

    /// Start a pause window, optionally sending players back to their spots
    pub fn set_pause(&mut self, now: f64, reset_players: bool) {
        self.pause.start(now, self.timing.pause_secs, reset_players);
        if reset_players {
            self.reset_players();
        }
    }

    /// Reset button: fresh kickoff with the score cleared
    pub fn reset_game(&mut self) {
        self.ball.reset_position();
        self.ball.rotation = 0.0;
        self.score.reset();
        self.reset_players();
        self.overlay.hide();
        self.pause.clear();
        log::info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registers_field_then_players() {
        let state = GameState::default();
        assert_eq!(state.pitch.players.len(), 8);
        assert_eq!(state.dispatcher.len(), 9);
        assert_eq!(state.dispatcher.order()[0], CollidableId::Field);
        assert_eq!(state.dispatcher.order()[8], CollidableId::Player(7));
    }

    #[test]
    fn test_field_beats_player_in_corner() {
        let mut state = GameState::default();
        // Park a player on top of the A-left corner zone
        state.pitch.players[0].position = Vec2::new(-200.0, 390.0);
        let bb = state.ball.bounding_box_at(Vec2::new(-200.0, 390.0));
        assert_eq!(state.classify(&bb), ZoneTag::CornerALeft);
    }

    #[test]
    fn test_player_blocks_inside_field() {
        let state = GameState::default();
        // Player 0 stands at (85, 70)
        let bb = state.ball.bounding_box_at(Vec2::new(85.0, 55.0));
        assert_eq!(state.classify(&bb), ZoneTag::Player);
        assert_eq!(state.classify(&state.ball.bounding_box()), ZoneTag::None);
    }

    #[test]
    fn test_score_and_banner() {
        let mut score = Score::new(2.0);
        assert_eq!(score.scoreboard_text(), "Team A   0   |   Team B   0");
        score.add_point(Team::A);
        score.add_point(Team::B);
        score.add_point(Team::B);
        assert_eq!(score.get(Team::B), 2);
        assert_eq!(score.scoreboard_text(), "Team A   1   |   Team B   2");

        assert!(!score.banner_visible(0.0));
        score.on_goal(10.0);
        assert!(score.banner_visible(11.5));
        assert_eq!(score.banner_elapsed(11.5), Some(1.5));
        assert!(!score.banner_visible(12.0));

        score.reset();
        assert_eq!((score.team_a, score.team_b), (0, 0));
        assert!(!score.banner_visible(10.5));
    }

    #[test]
    fn test_overlay_lifetime() {
        let mut overlay = Overlay::new(2.5);
        assert_eq!(overlay.text(0.0), None);
        overlay.show_text("CORNER", 1.0);
        assert_eq!(overlay.text(1.0), Some("CORNER"));
        assert_eq!(overlay.elapsed(2.0), Some(1.0));
        assert_eq!(overlay.text(3.5), None);

        overlay.show_text("SIDE", 4.0);
        assert_eq!(overlay.text(4.1), Some("SIDE"));
        overlay.hide();
        assert!(!overlay.visible(4.1));
    }

    #[test]
    fn test_glyph_scale_pulses_around_one() {
        assert_eq!(Overlay::glyph_scale(0.0, 0), 1.0);
        for i in 0..8 {
            let s = Overlay::glyph_scale(0.37, i);
            assert!((0.7..=1.3).contains(&s));
        }
    }

    #[test]
    fn test_pause_window() {
        let mut pause = PauseState::default();
        assert!(!pause.is_paused(0.0));
        assert!(!pause.poll(0.0));

        pause.start(10.0, 3.0, false);
        assert!(pause.is_paused(12.9));
        assert!(!pause.poll(13.0));
        assert!(pause.poll(13.01));
        assert_eq!(pause, PauseState::Active);
    }

    #[test]
    fn test_set_pause_resets_players_only_when_asked() {
        let mut state = GameState::default();
        state.pitch.players[2].position = Vec2::new(0.0, 0.0);

        state.set_pause(0.0, false);
        assert_eq!(state.pitch.players[2].position, Vec2::ZERO);
        assert!(matches!(state.pause, PauseState::Paused { reset_players: false, .. }));

        state.set_pause(0.0, true);
        assert_eq!(state.pitch.players[2].position, Vec2::new(180.0, 150.0));
    }

    #[test]
    fn test_reset_game() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(40.0, -20.0);
        state.score.add_point(Team::A);
        state.overlay.show_text("SIDE", 0.0);
        state.set_pause(0.0, false);

        state.reset_game();
        assert_eq!(state.ball.position, Vec2::ZERO);
        assert_eq!(state.score.team_a, 0);
        assert!(!state.overlay.visible(0.5));
        assert_eq!(state.pause, PauseState::Active);
    }
}
