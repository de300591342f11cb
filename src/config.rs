//! Configuration constants for the peppered moth simulation

use crate::error::ConfigError;

// ============================================================================
// POPULATION SETTINGS
// ============================================================================

/// Number of moths in every generation
pub const POPULATION_SIZE: usize = 20;

/// Number of generations kept for the history chart (oldest evicted first)
pub const HISTORY_CAPACITY: usize = 30;

/// Chance that an offspring's coloration flips from its parent's
pub const MUTATION_CHANCE: f64 = 0.1;

// ============================================================================
// CAMOUFLAGE
// ============================================================================

/// Brightness of a light moth on the 0-255 scale
pub const LIGHT_BRIGHTNESS: i32 = 220;

/// Brightness of a dark moth on the 0-255 scale
pub const DARK_BRIGHTNESS: i32 = 70;

/// A moth survives evaluation when its contrast with the background is below this
pub const CAMOUFLAGE_THRESHOLD: u32 = 100;

/// Background brightness the slider starts at
pub const DEFAULT_BACKGROUND_BRIGHTNESS: i32 = 128;

// ============================================================================
// TIMING (seconds)
// ============================================================================

/// Countdown length of one generation
pub const GENERATION_SECONDS: u32 = 10;

/// Interval between moth repositions while a generation is running
pub const REPOSITION_INTERVAL: f32 = 2.0;

/// Interval between countdown ticks
pub const COUNTDOWN_INTERVAL: f32 = 1.0;

/// Pause after each evaluation before the next countdown starts
pub const EVALUATION_PAUSE: f32 = 3.0;

// ============================================================================
// DRAWING AREA & INTERACTION
// ============================================================================

/// Width of the area moths are scattered over
pub const AREA_WIDTH: f32 = 800.0;

/// Height of the area moths are scattered over
pub const AREA_HEIGHT: f32 = 500.0;

/// Radius of a drawn moth
pub const MOTH_RADIUS: f32 = 10.0;

/// A predator click removes a moth whose centre is closer than this
pub const PICK_RADIUS: f32 = 10.0;

/// Tunable parts of a simulation run. Selection threshold and mutation chance
/// stay fixed constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub area_width: f32,
    pub area_height: f32,
    pub population_size: usize,
    pub history_capacity: usize,
    /// Countdown start value, in countdown ticks
    pub generation_seconds: u32,
    pub reposition_interval: f32,
    pub countdown_interval: f32,
    pub evaluation_pause: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            area_width: AREA_WIDTH,
            area_height: AREA_HEIGHT,
            population_size: POPULATION_SIZE,
            history_capacity: HISTORY_CAPACITY,
            generation_seconds: GENERATION_SECONDS,
            reposition_interval: REPOSITION_INTERVAL,
            countdown_interval: COUNTDOWN_INTERVAL,
            evaluation_pause: EVALUATION_PAUSE,
        }
    }
}

impl SimulationConfig {
    /// Same defaults, scattered over an externally sized drawing area.
    pub fn with_area(width: f32, height: f32) -> Self {
        Self {
            area_width: width,
            area_height: height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.area_width.is_finite() && self.area_width > 0.0)
            || !(self.area_height.is_finite() && self.area_height > 0.0)
        {
            return Err(ConfigError::InvalidArea {
                width: self.area_width,
                height: self.area_height,
            });
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if self.generation_seconds == 0 {
            return Err(ConfigError::InvalidInterval("generation_seconds"));
        }
        for (name, value) in [
            ("reposition_interval", self.reposition_interval),
            ("countdown_interval", self.countdown_interval),
            ("evaluation_pause", self.evaluation_pause),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidInterval(name));
            }
        }
        Ok(())
    }
}
