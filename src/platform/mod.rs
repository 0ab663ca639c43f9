//! Platform abstraction layer
//!
//! Handles the pieces the simulation must not touch directly:
//! - Time (wall clock or a manually stepped one)
//! - Input snapshots, once per frame

pub mod input;
pub mod time;

pub use input::{InputSource, ScriptedInput};
pub use time::{Clock, ManualClock, SystemClock};
