use crate::config::SimulationConfig;
use bevy::prelude::*;
use std::time::Duration;

/// Where the generation cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Moths are on display; `time_left` countdown ticks remain
    Running { time_left: u32 },
    /// Countdown expired, selection and reproduction are due
    Evaluating,
    /// Cooling down after an evaluation
    Paused,
}

/// What happened during one [`CycleScheduler::tick`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleTick {
    /// Times the reposition interval elapsed
    pub repositions: u32,
    /// Countdown decrements applied
    pub countdown_ticks: u32,
    /// Countdown reached zero; the caller must evaluate and then call
    /// [`CycleScheduler::finish_evaluation`]
    pub evaluate: bool,
    /// Pause elapsed and a fresh countdown started
    pub resumed: bool,
}

/// Drives the reposition/countdown/pause timing of the generation cycle.
///
/// Owns one timer per action. Repeating timers only advance while
/// [`CyclePhase::Running`]; leaving that phase cancels them and re-entering
/// restarts them from zero.
#[derive(Debug, Clone)]
pub struct CycleScheduler {
    phase: CyclePhase,
    generation_seconds: u32,
    reposition: Timer,
    countdown: Timer,
    pause: Timer,
    stopped: bool,
}

impl CycleScheduler {
    /// New scheduler at `Running(generation_seconds)`, initially stopped
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            phase: CyclePhase::Running {
                time_left: config.generation_seconds,
            },
            generation_seconds: config.generation_seconds,
            reposition: Timer::from_seconds(config.reposition_interval, TimerMode::Repeating),
            countdown: Timer::from_seconds(config.countdown_interval, TimerMode::Repeating),
            pause: Timer::from_seconds(config.evaluation_pause, TimerMode::Once),
            stopped: true,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Countdown ticks left in the current generation; zero outside `Running`
    pub fn time_left(&self) -> u32 {
        match self.phase {
            CyclePhase::Running { time_left } => time_left,
            CyclePhase::Evaluating | CyclePhase::Paused => 0,
        }
    }

    /// Time left before the countdown restarts; zero outside `Paused`
    pub fn pause_remaining(&self) -> Duration {
        match self.phase {
            CyclePhase::Paused => self.pause.remaining(),
            _ => Duration::ZERO,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Freeze every timer in place
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Cancel everything and begin a fresh countdown
    pub fn reset(&mut self) {
        self.pause.reset();
        self.restart_countdown();
        self.stopped = false;
    }

    /// Advance timers by `delta` and report which actions fell due.
    ///
    /// Within a single tick repositions are reported before the countdown, and
    /// the countdown stops decrementing once it reaches zero.
    pub fn tick(&mut self, delta: Duration) -> CycleTick {
        let mut tick = CycleTick::default();
        if self.stopped {
            return tick;
        }

        match self.phase {
            CyclePhase::Running { mut time_left } => {
                tick.repositions = self.reposition.tick(delta).times_finished_this_tick();

                let finished = self.countdown.tick(delta).times_finished_this_tick();
                for _ in 0..finished {
                    if time_left == 0 {
                        break;
                    }
                    time_left -= 1;
                    tick.countdown_ticks += 1;
                }

                if time_left == 0 {
                    self.phase = CyclePhase::Evaluating;
                    tick.evaluate = true;
                } else {
                    self.phase = CyclePhase::Running { time_left };
                }
            }
            // Evaluation was reported but not yet acknowledged
            CyclePhase::Evaluating => tick.evaluate = true,
            CyclePhase::Paused => {
                if self.pause.tick(delta).finished() {
                    self.restart_countdown();
                    tick.resumed = true;
                }
            }
        }

        tick
    }

    /// Acknowledge a completed evaluation and enter the post-evaluation pause
    pub fn finish_evaluation(&mut self) {
        if self.phase == CyclePhase::Evaluating {
            self.pause.reset();
            self.phase = CyclePhase::Paused;
        }
    }

    fn restart_countdown(&mut self) {
        self.reposition.reset();
        self.countdown.reset();
        self.phase = CyclePhase::Running {
            time_left: self.generation_seconds,
        };
    }
}
