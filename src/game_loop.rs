//! Fixed-rate game loop
//!
//! Frames arrive at whatever rate the platform manages; the simulation always
//! advances in `SIM_DT` steps. UI handling (reset button hover and clicks)
//! happens once per frame, before the ticks.

use crate::Settings;
use crate::consts::*;
use crate::platform::{Clock, InputSource};
use crate::render::{FrameView, Renderer};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::ui::{Button, Viewport};

/// Longest frame the accumulator will absorb (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Turns frame durations into a whole number of simulation steps
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's duration and return how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}

/// Everything a running game owns besides its collaborators
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    pub button: Button,
    pub viewport: Viewport,
    step: FixedStep,
    last_frame: Option<f64>,
    /// One-shot commands waiting for a tick to consume them
    pending: TickInput,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings),
            button: Button::reset(),
            viewport: Viewport::default(),
            step: FixedStep::new(),
            last_frame: None,
            pending: TickInput::default(),
        }
    }

    /// Run one frame ending at `now` and return the events of its ticks.
    ///
    /// `input.pointer` is in window pixels. One-shot commands from a frame
    /// too short to tick are kept for the next tick.
    pub fn frame(&mut self, input: &TickInput, now: f64) -> Vec<GameEvent> {
        let dt = match self.last_frame {
            Some(last) => (now - last) as f32,
            None => SIM_DT,
        };
        self.last_frame = Some(now);

        let mut input = *input;
        input.pointer = input.pointer.map(|p| self.viewport.to_world(p));
        self.button.update_hover(input.pointer);
        if self.button.is_clicked(input.pointer, input.click) {
            log::info!("Reset button pressed");
            self.pending.reset_game = true;
        }
        self.pending.reset_ball |= input.reset_ball;
        self.pending.reset_game |= input.reset_game;
        input.reset_ball = self.pending.reset_ball;
        input.reset_game = self.pending.reset_game;

        let substeps = self.step.advance(dt);
        let mut events = Vec::new();
        for i in 0..substeps {
            // Earlier substeps of a long frame happened earlier
            let behind = (substeps - 1 - i) as f64 * SIM_DT as f64;
            events.extend(tick(&mut self.state, &input, now - behind));
            input.clear_one_shots();
            self.pending.clear_one_shots();
        }
        events
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// What happened during a `run_loop`
#[derive(Debug, Clone, Default)]
pub struct LoopSummary {
    pub frames: u64,
    pub events: Vec<GameEvent>,
}

impl LoopSummary {
    pub fn goals(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Goal { .. }))
            .count()
    }
}

/// Poll, tick, draw, sleep; until the input source asks to quit
pub fn run_loop<I, R, C>(
    game: &mut Game,
    input: &mut I,
    renderer: &mut R,
    clock: &mut C,
) -> LoopSummary
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    let mut summary = LoopSummary::default();
    let mut next_frame = clock.now();

    loop {
        let snapshot = input.poll();
        if snapshot.quit {
            log::info!("Quit after {} frames", summary.frames);
            break;
        }

        let now = clock.now();
        summary.events.extend(game.frame(&snapshot, now));
        renderer.draw(&FrameView::capture(&game.state, &game.button, now));
        summary.frames += 1;

        next_frame += SIM_DT as f64;
        clock.sleep_until(next_frame);
    }

    summary
}
