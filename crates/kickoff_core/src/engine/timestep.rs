//! Fixed timestep
//!
//! The simulation only ever advances in whole steps of `TICK_DT`.
//! Wall-clock time is fed through `FixedStepLoop`, so display frame rate and
//! speed multiplier change how many steps run per frame, never the step size.

use serde::{Deserialize, Serialize};

use super::match_sim::MatchState;

/// Simulation step (50ms, 20 Hz)
pub const TICK_DT: f32 = 0.05;

/// Largest step `advance` accepts; larger inputs are clamped
pub const MAX_TICK_DT: f32 = 0.25;

/// Real frame delta is capped before accumulation (avoids the spiral of death)
pub const MAX_FRAME_DELTA: f32 = 0.1;

pub const TICKS_PER_SECOND: u32 = 20;

/// Float slack when comparing the accumulator against one step
const ACCUMULATOR_EPSILON: f32 = 1e-6;

// Compile-time validation
const _: () = assert!(TICKS_PER_SECOND as f32 * TICK_DT == 1.0);

/// Fixed-step accumulator driving a `MatchState` from real elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStepLoop {
    pub step: f32,
    pub max_frame_delta: f32,
    pub speed_multiplier: f32,
    /// Leftover simulated seconds not yet consumed
    pub accumulator: f32,
}

impl Default for FixedStepLoop {
    fn default() -> Self {
        Self::new(TICK_DT)
    }
}

impl FixedStepLoop {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.clamp(f32::EPSILON, MAX_TICK_DT),
            max_frame_delta: MAX_FRAME_DELTA,
            speed_multiplier: 1.0,
            accumulator: 0.0,
        }
    }

    pub fn with_speed(mut self, speed_multiplier: f32) -> Self {
        self.set_speed(speed_multiplier);
        self
    }

    pub fn set_speed(&mut self, speed_multiplier: f32) {
        self.speed_multiplier = if speed_multiplier.is_finite() {
            speed_multiplier.max(0.0)
        } else {
            1.0
        };
    }

    /// Consume one display frame. Returns the new state and the number of
    /// whole steps taken. A paused or finished match accumulates nothing.
    pub fn frame(&mut self, mut state: MatchState, real_delta: f32) -> (MatchState, u32) {
        if state.is_paused() || state.is_finished() {
            return (state, 0);
        }
        let delta = if real_delta.is_finite() {
            real_delta.clamp(0.0, self.max_frame_delta)
        } else {
            0.0
        };
        self.accumulator += delta * self.speed_multiplier;

        let mut steps = 0;
        while self.accumulator + ACCUMULATOR_EPSILON >= self.step {
            state.step(self.step);
            self.accumulator -= self.step;
            steps += 1;
            if self.accumulator < 0.0 {
                self.accumulator = 0.0;
            }
            if state.is_paused() || state.is_finished() {
                // break reached; leftover waits for resume
                break;
            }
        }
        (state, steps)
    }
}
