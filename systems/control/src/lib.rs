#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure control-loop system that decides when the world advances.
//!
//! The host adapter gathers button presses, slider values and clicks into a
//! [`ControlInput`] once per frame and forwards the elapsed frame time. The
//! system owns the run state and answers with the commands the world should
//! apply; it never touches the world directly.

use std::time::Duration;

use lifegrid_core::{shapes, CellCoord, Command, DeadBias, RunState, SimulationConfig};
use log::debug;

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlInput {
    /// Begin stepping automatically.
    pub start: bool,
    /// Stop stepping automatically.
    pub stop: bool,
    /// Stop and advance exactly one generation.
    pub step: bool,
    /// Stop and regenerate the grid with the current dead bias.
    pub reset: bool,
    /// Stop and regenerate the grid with every cell dead.
    pub clear: bool,
    /// New dead bias chosen by the player, if it changed this frame.
    pub dead_bias: Option<DeadBias>,
    /// New refresh interval chosen by the player, if it changed this frame.
    pub refresh_interval: Option<Duration>,
    /// Newly selected catalog shape, if it changed this frame.
    pub shape: Option<String>,
    /// Newly selected stamp rotation in degrees, if it changed this frame.
    pub angle_degrees: Option<f64>,
    /// Cell clicked by the player on this frame.
    pub clicked_cell: Option<CellCoord>,
}

/// Control-loop system that translates input and elapsed time into commands.
#[derive(Clone, Debug)]
pub struct Control {
    run_state: RunState,
    refresh_interval: Duration,
    accumulator: Duration,
    dead_bias: DeadBias,
    shape: String,
    angle_degrees: f64,
}

impl Control {
    /// Creates an idle control loop using the run configuration's defaults.
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            run_state: RunState::Idle,
            refresh_interval: config.refresh_interval(),
            accumulator: Duration::ZERO,
            dead_bias: config.dead_bias(),
            shape: shapes::CELL.to_owned(),
            angle_degrees: 0.0,
        }
    }

    /// Current run state.
    #[must_use]
    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Interval between automatic generations.
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Dead bias used for the next reset.
    #[must_use]
    pub const fn dead_bias(&self) -> DeadBias {
        self.dead_bias
    }

    /// Shape stamped on the next click.
    #[must_use]
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Rotation applied to the next stamp, in degrees.
    #[must_use]
    pub const fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Consumes one frame of input and elapsed time, emitting world commands.
    ///
    /// Clicks and dead-bias changes only take effect on the grid while idle.
    /// While running, one [`Command::Step`] is emitted per whole refresh
    /// interval accumulated across frames.
    pub fn handle(&mut self, input: &ControlInput, dt: Duration, out: &mut Vec<Command>) {
        if let Some(shape) = &input.shape {
            self.shape.clone_from(shape);
        }
        if let Some(angle_degrees) = input.angle_degrees {
            self.angle_degrees = angle_degrees;
        }
        if let Some(refresh_interval) = input.refresh_interval {
            self.refresh_interval = refresh_interval;
        }

        if input.stop {
            self.transition(RunState::Idle);
        }
        if input.step {
            self.transition(RunState::Idle);
            out.push(Command::Step);
        }
        if input.reset {
            self.transition(RunState::Idle);
            out.push(Command::Reset {
                dead_bias: self.dead_bias,
            });
        }
        if input.clear {
            self.transition(RunState::Idle);
            out.push(Command::Clear);
        }

        let mut started = false;
        if input.start && self.run_state == RunState::Idle {
            self.transition(RunState::Running);
            out.push(Command::Step);
            started = true;
        }

        if let Some(dead_bias) = input.dead_bias {
            self.dead_bias = dead_bias;
            if self.run_state == RunState::Idle {
                out.push(Command::Reset { dead_bias });
            }
        }

        if let Some(anchor) = input.clicked_cell {
            if self.run_state == RunState::Idle {
                out.push(Command::StampShape {
                    shape: self.shape.clone(),
                    angle_degrees: self.angle_degrees,
                    anchor,
                });
            }
        }

        if self.run_state == RunState::Running && !started {
            self.accumulator = self.accumulator.saturating_add(dt);
            for _ in 0..self.resolve_steps() {
                out.push(Command::Step);
            }
        }
    }

    fn transition(&mut self, next: RunState) {
        if self.run_state != next {
            debug!("run state {:?} -> {:?}", self.run_state, next);
        }
        self.run_state = next;
        self.accumulator = Duration::ZERO;
    }

    fn resolve_steps(&mut self) -> usize {
        if self.refresh_interval.is_zero() {
            return 0;
        }

        let mut steps = 0;
        while self.accumulator >= self.refresh_interval {
            self.accumulator -= self.refresh_interval;
            steps += 1;
        }
        steps
    }
}
