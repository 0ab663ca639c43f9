//! Input sources
//!
//! A source yields one `TickInput` snapshot per frame. Pointer positions are
//! window pixels (origin top-left, y down).

use glam::Vec2;

use crate::sim::TickInput;

pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed list of snapshots, then asks the loop to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Build a script from `(snapshot, frame count)` runs
    pub fn from_runs(runs: &[(TickInput, usize)]) -> Self {
        let frames = runs
            .iter()
            .flat_map(|(input, count)| std::iter::repeat_n(*input, *count))
            .collect();
        Self::new(frames)
    }

    /// A short match for the headless binary: dribble up the right, take a
    /// corner, run into the left line, then press the reset button.
    pub fn demo() -> Self {
        let up = TickInput {
            up: true,
            ..Default::default()
        };
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        let down = TickInput {
            down: true,
            ..Default::default()
        };
        let idle = TickInput::default();
        let click_reset = TickInput {
            // Over the reset button
            pointer: Some(Vec2::new(100.0, 140.0)),
            click: true,
            ..Default::default()
        };

        Self::from_runs(&[
            (right, 40),
            (up, 130),
            (idle, 200),
            (left, 120),
            (down, 60),
            (left, 60),
            (idle, 200),
            (up, 140),
            (click_reset, 1),
            (idle, 30),
        ])
    }

    /// Frames not yet replayed
    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }

    /// Stop after `frames` snapshots, even if the script is longer
    pub fn truncate(&mut self, frames: usize) {
        self.frames.truncate(self.cursor + frames);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        match self.frames.get(self.cursor) {
            Some(input) => {
                self.cursor += 1;
                *input
            }
            None => TickInput {
                quit: true,
                ..Default::default()
            },
        }
    }
}
