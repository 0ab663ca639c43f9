//! Fixed timestep simulation tick
//!
//! One tick: honour resets, leave or respect the pause window, move the ball
//! and resolve whatever zone it lands in, then step the players.

use glam::Vec2;

use super::collision::ZoneTag;
use super::player::Team;
use super::state::{GameEvent, GameState};
use crate::normalize_degrees;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Reset key: ball back to kickoff, skips the rest of the ball update
    pub reset_ball: bool,
    /// Reset button: ball, score and players back to kickoff
    pub reset_game: bool,
    /// Pointer position (window pixels from the platform, world units by
    /// the time it reaches `tick`)
    pub pointer: Option<Vec2>,
    /// Pointer pressed this frame
    pub click: bool,
    /// Stop the loop after this frame
    pub quit: bool,
}

impl TickInput {
    /// Movement direction (per-axis unit steps) and the spin that goes with it
    pub fn direction(&self, spin_x: f32, spin_y: f32) -> (Vec2, f32) {
        let mut dir = Vec2::ZERO;
        let mut spin = 0.0;
        if self.left {
            dir.x -= 1.0;
            spin -= spin_x;
        }
        if self.right {
            dir.x += 1.0;
            spin += spin_x;
        }
        if self.up {
            dir.y += 1.0;
            spin += spin_y;
        }
        if self.down {
            dir.y -= 1.0;
            spin -= spin_y;
        }
        (dir, spin)
    }

    /// Clear the one-shot commands after they have been consumed
    pub fn clear_one_shots(&mut self) {
        self.reset_ball = false;
        self.reset_game = false;
        self.click = false;
    }
}

/// Advance the game by one tick at time `now` (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if input.reset_game {
        state.reset_game();
        events.push(GameEvent::GameReset);
    }

    if state.pause.poll(now) {
        log::debug!("Play resumed at tick {}", state.time_ticks);
        events.push(GameEvent::Resumed);
    }

    // Frozen: rendering carries on, nothing moves
    if state.pause.is_paused(now) {
        return events;
    }

    if let Some(event) = update_ball(state, input, now) {
        events.push(event);
    }

    // A goal or boundary this tick already placed everyone
    if !state.pause.is_paused(now) {
        let ball = state.ball.bounding_box();
        for player in &mut state.pitch.players {
            player.update(&ball, &state.ai, &mut state.rng);
        }
    }

    events
}

/// Move the ball from input and resolve the zone its new box falls in
pub fn update_ball(state: &mut GameState, input: &TickInput, now: f64) -> Option<GameEvent> {
    if input.reset_ball {
        state.ball.reset_position();
        log::debug!("Ball reset to kickoff");
        return Some(GameEvent::BallReset);
    }

    let cfg = state.ball_config;
    let (dir, spin) = input.direction(cfg.spin_x, cfg.spin_y);
    if dir == Vec2::ZERO {
        return None;
    }

    let candidate = state.ball.position + dir * cfg.speed;
    assert!(
        candidate.is_finite(),
        "non-finite ball position {candidate} (from {})",
        state.ball.position
    );
    state.ball.rotation = normalize_degrees(state.ball.rotation + spin);

    let tag = state.classify(&state.ball.bounding_box_at(candidate));
    resolve_zone(state, tag, candidate, now)
}

/// Apply the outcome of a zone classification
pub fn resolve_zone(
    state: &mut GameState,
    tag: ZoneTag,
    candidate: Vec2,
    now: f64,
) -> Option<GameEvent> {
    match tag {
        ZoneTag::None => {
            state.ball.position = candidate;
            None
        }
        ZoneTag::Player => {
            log::debug!("Blocked by player at {}", candidate);
            Some(GameEvent::Blocked)
        }
        ZoneTag::GoalA | ZoneTag::GoalB => {
            let team = if tag == ZoneTag::GoalA { Team::A } else { Team::B };
            state.score.add_point(team);
            state.score.on_goal(now);
            state.ball.reset_position();
            state.set_pause(now, true);
            log::info!("GOAL from {} ({})", team.as_str(), state.score.scoreboard_text());
            Some(GameEvent::Goal {
                team,
                team_a: state.score.get(Team::A),
                team_b: state.score.get(Team::B),
            })
        }
        ZoneTag::CornerALeft
        | ZoneTag::CornerARight
        | ZoneTag::CornerBLeft
        | ZoneTag::CornerBRight => {
            let spot = state
                .pitch
                .field
                .corner_spot(tag)
                .unwrap_or(state.ball.position);
            state.ball.position = spot;
            state.overlay.show_text("CORNER", now);
            state.set_pause(now, true);
            log::info!("Corner ({:?}) at {}", tag, spot);
            Some(GameEvent::Corner { tag, spot })
        }
        ZoneTag::LateralLeft | ZoneTag::LateralRight => {
            let edge = state.pitch.field.dims.half_width();
            let x = if tag == ZoneTag::LateralLeft { -edge } else { edge };
            let spot = Vec2::new(x, candidate.y);
            state.ball.position = spot;
            state.overlay.show_text("SIDE", now);
            state.set_pause(now, false);
            log::info!("Side ({:?}) at {}", tag, spot);
            Some(GameEvent::Side { tag, spot })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::collision::Collidable;
    use crate::sim::field::PostTag;
    use crate::sim::state::PauseState;

    fn up() -> TickInput {
        TickInput {
            up: true,
            ..Default::default()
        }
    }

    fn left() -> TickInput {
        TickInput {
            left: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_free_move_and_spin() {
        let mut state = GameState::default();
        let input = TickInput {
            up: true,
            right: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        assert!(events.is_empty());
        assert_eq!(state.ball.position, Vec2::new(3.0, 3.0));
        assert_eq!(state.ball.rotation, 5.0);

        tick(&mut state, &left(), 0.1);
        assert_eq!(state.ball.position, Vec2::new(0.0, 3.0));
        assert_eq!(state.ball.rotation, 2.0);
    }

    #[test]
    fn test_opposite_keys_cancel_out() {
        let mut state = GameState::default();
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &input, 0.0).is_empty());
        assert_eq!(state.ball.position, Vec2::ZERO);
    }

    #[test]
    fn test_goal_a_example() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(0.0, 382.0);
        state.pitch.players[3].position = Vec2::new(10.0, 10.0);

        let events = tick(&mut state, &up(), 5.0);
        assert_eq!(
            events,
            vec![GameEvent::Goal {
                team: Team::A,
                team_a: 1,
                team_b: 0
            }]
        );
        assert_eq!(state.score.team_a, 1);
        assert_eq!(state.score.team_b, 0);
        assert_eq!(state.ball.position, Vec2::ZERO);
        assert!(state.score.banner_visible(5.5));
        assert!(matches!(state.pause, PauseState::Paused { reset_players: true, .. }));
        // Players back on their spots, and not stepped after the reset
        assert_eq!(state.pitch.players[3].position, Vec2::new(0.0, 150.0));
    }

    #[test]
    fn test_goal_b() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(20.0, -382.0);
        let input = TickInput {
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!((state.score.team_a, state.score.team_b), (0, 1));
        assert_eq!(state.ball.position, Vec2::ZERO);
    }

    #[test]
    fn test_pause_freezes_then_resumes() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(0.0, 382.0);
        tick(&mut state, &up(), 0.0);
        let players: Vec<Vec2> = state.pitch.players.iter().map(|p| p.position).collect();

        // Inside the window nothing moves
        assert!(tick(&mut state, &up(), 1.0).is_empty());
        assert!(tick(&mut state, &up(), 3.0).is_empty());
        assert_eq!(state.ball.position, Vec2::ZERO);
        let frozen: Vec<Vec2> = state.pitch.players.iter().map(|p| p.position).collect();
        assert_eq!(players, frozen);

        // Past the deadline the same tick resumes and moves
        let events = tick(&mut state, &up(), 3.1);
        assert_eq!(events, vec![GameEvent::Resumed]);
        assert_eq!(state.ball.position, Vec2::new(0.0, 3.0));
        assert_eq!(state.score.team_a, 1);
    }

    #[test]
    fn test_corner_snaps_and_resets_players() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(-200.0, 372.0);
        state.pitch.players[0].position = Vec2::new(-100.0, 100.0);

        let events = tick(&mut state, &up(), 2.0);
        assert_eq!(
            events,
            vec![GameEvent::Corner {
                tag: ZoneTag::CornerALeft,
                spot: Vec2::new(-270.0, 360.0)
            }]
        );
        assert_eq!(state.ball.position, Vec2::new(-270.0, 360.0));
        assert_eq!(state.overlay.text(2.5), Some("CORNER"));
        assert_eq!(state.pitch.players[0].position, Vec2::new(85.0, 70.0));
        assert_eq!((state.score.team_a, state.score.team_b), (0, 0));
    }

    #[test]
    fn test_side_clamps_and_keeps_players() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(-283.0, 40.0);
        state.pitch.players[0].position = Vec2::new(-100.0, 100.0);

        let events = tick(&mut state, &left(), 1.0);
        assert_eq!(
            events,
            vec![GameEvent::Side {
                tag: ZoneTag::LateralLeft,
                spot: Vec2::new(-270.0, 40.0)
            }]
        );
        assert_eq!(state.ball.position, Vec2::new(-270.0, 40.0));
        assert_eq!(state.overlay.text(1.0), Some("SIDE"));
        assert!(matches!(state.pause, PauseState::Paused { reset_players: false, .. }));
        assert_eq!(state.pitch.players[0].position, Vec2::new(-100.0, 100.0));
    }

    #[test]
    fn test_side_right_keeps_candidate_y() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(283.0, -100.0);
        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.ball.position, Vec2::new(270.0, -103.0));
    }

    #[test]
    fn test_blocked_by_player() {
        let mut state = GameState::default();
        // Player 0 footprint spans y 63..77 at x 78..92
        state.ball.position = Vec2::new(85.0, 50.0);
        let events = tick(&mut state, &up(), 0.0);
        assert_eq!(events, vec![GameEvent::Blocked]);
        assert_eq!(state.ball.position, Vec2::new(85.0, 50.0));
        assert_eq!(state.pause, PauseState::Active);
    }

    #[test]
    fn test_reset_key_short_circuits() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(0.0, 382.0);
        let input = TickInput {
            up: true,
            reset_ball: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        assert_eq!(events, vec![GameEvent::BallReset]);
        assert_eq!(state.ball.position, Vec2::ZERO);
        assert_eq!(state.score.team_a, 0);
    }

    #[test]
    fn test_reset_button_works_while_paused() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(0.0, 382.0);
        tick(&mut state, &up(), 0.0);
        assert_eq!(state.score.team_a, 1);

        let input = TickInput {
            reset_game: true,
            up: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, 1.0);
        assert_eq!(events, vec![GameEvent::GameReset]);
        assert_eq!(state.score.team_a, 0);
        // Play continues in the same tick
        assert_eq!(state.ball.position, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_legacy_b_post_sends_ball_to_a_corner() {
        let mut settings = Settings::default();
        let hg = 6.0 * 18.3 / 2.0;
        let start = Vec2::new(hg + 14.0, -372.0);

        let mut legacy = GameState::new(&settings);
        legacy.ball.position = start;
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut legacy, &input, 0.0);
        assert_eq!(legacy.ball.position, Vec2::new(270.0, 360.0));

        settings.field.b_right_post_tag = PostTag::Mirrored;
        let mut mirrored = GameState::new(&settings);
        mirrored.ball.position = start;
        tick(&mut mirrored, &input, 0.0);
        assert_eq!(mirrored.ball.position, Vec2::new(270.0, -360.0));
    }

    #[test]
    fn test_players_step_toward_ball_while_active() {
        let mut state = GameState::default();
        let before = state.pitch.players[0].position;
        tick(&mut state, &TickInput::default(), 0.0);
        assert_ne!(state.pitch.players[0].position, before);
    }

    #[test]
    fn test_still_players_never_pin_the_ball() {
        let mut settings = Settings::default();
        settings.ai.jitter = 0.0;
        let mut state = GameState::new(&settings);
        state.ball.position = Vec2::new(0.0, 131.0);

        for i in 0..600 {
            tick(&mut state, &TickInput::default(), i as f64 / 60.0);
        }
        let ball = state.ball.bounding_box();
        assert!(state.pitch.players.iter().all(|p| !p.bounding_box().overlaps(&ball)));

        let down = TickInput {
            down: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &down, 10.0), vec![]);
        assert_eq!(state.ball.position, Vec2::new(0.0, 128.0));
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn test_nan_position_fails_fast() {
        let mut state = GameState::default();
        state.ball.position = Vec2::new(f32::NAN, 0.0);
        tick(&mut state, &up(), 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::default();
        let mut b = GameState::default();
        let inputs = [up(), left(), TickInput::default(), up(), up()];

        for (i, input) in inputs.iter().enumerate() {
            let now = i as f64 / 60.0;
            assert_eq!(tick(&mut a, input, now), tick(&mut b, input, now));
        }
        for (pa, pb) in a.pitch.players.iter().zip(&b.pitch.players) {
            assert_eq!(pa.position, pb.position);
        }
        assert_eq!(a.ball.position, b.ball.position);
    }
}
