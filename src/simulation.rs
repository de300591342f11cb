use crate::config::*;
use crate::cycle::{CyclePhase, CycleScheduler};
use crate::error::ConfigError;
use crate::moth::{Area, Moth};
use crate::population::{History, HistoryEntry, Population};
use crate::reproduction::reproduce;
use crate::selection::select_survivors;
use bevy::log::{debug, info};
use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

/// Background brightness on the 0-255 scale, set by the input surface.
/// The core reads it as-is without clamping.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub brightness: i32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BACKGROUND_BRIGHTNESS,
        }
    }
}

/// When on, pointer clicks eat moths
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PredatorMode(pub bool);

/// Start over: clear history, new population, fresh countdown
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetRequested;

/// Flip [`PredatorMode`]
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PredatorModeToggled;

/// Pointer click in drawing-area coordinates
#[derive(Event, Debug, Clone, Copy)]
pub struct PredatorClick {
    pub position: Vec2,
}

/// Outcome of one selection + reproduction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub survivors: usize,
    pub counts: HistoryEntry,
}

/// What one [`Simulation::advance`] call changed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub repositioned: bool,
    pub countdown_changed: bool,
    pub evaluation: Option<Evaluation>,
    pub resumed: bool,
}

impl CycleReport {
    /// Anything the presentation surface shows has changed
    pub fn needs_redraw(&self) -> bool {
        self.repositioned || self.countdown_changed || self.evaluation.is_some() || self.resumed
    }
}

/// Owner of the population, its history and the generation cycle
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    area: Area,
    population: Population,
    history: History,
    scheduler: CycleScheduler,
    started: bool,
}

impl Simulation {
    /// Validated, stopped simulation with an empty population. Call
    /// [`Simulation::start`] to populate it and begin the countdown.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            area: Area::new(config.area_width, config.area_height),
            population: Population::default(),
            history: History::new(config.history_capacity),
            scheduler: CycleScheduler::new(&config),
            started: false,
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn moths(&self) -> &[Moth] {
        self.population.moths()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn phase(&self) -> CyclePhase {
        self.scheduler.phase()
    }

    pub fn time_left(&self) -> u32 {
        self.scheduler.time_left()
    }

    pub fn is_stopped(&self) -> bool {
        self.scheduler.is_stopped()
    }

    /// Begin the cycle, or resume it where [`Simulation::stop`] left off.
    /// Only the first start populates the area.
    pub fn start(&mut self, rng: &mut impl Rng) {
        if !self.started {
            self.population = Population::generate(&self.area, self.config.population_size, rng);
            self.started = true;
        }
        self.scheduler.start();
        info!(
            "Simulation started with {} moths, {}s until evaluation",
            self.population.len(),
            self.time_left()
        );
    }

    /// Freeze the cycle without losing any state
    pub fn stop(&mut self) {
        self.scheduler.stop();
        info!("Simulation stopped");
    }

    /// Clear history, regenerate the population and restart the countdown
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.scheduler.reset();
        self.started = true;
        self.history.clear();
        self.population = Population::generate(&self.area, self.config.population_size, rng);
        info!("Simulation reset");
    }

    /// Advance the cycle by `delta`, scattering, counting down and evaluating
    /// against `background` as the timers fall due.
    pub fn advance(&mut self, delta: Duration, background: i32, rng: &mut impl Rng) -> CycleReport {
        let tick = self.scheduler.tick(delta);
        let mut report = CycleReport {
            countdown_changed: tick.countdown_ticks > 0,
            resumed: tick.resumed,
            ..default()
        };

        for _ in 0..tick.repositions {
            self.population.reposition(&self.area, rng);
            report.repositioned = true;
        }

        if tick.evaluate {
            report.evaluation = Some(self.evaluate(background, rng));
        }

        if tick.resumed {
            debug!("Pause over, next generation on display");
        }

        report
    }

    /// Remove the first moth within [`PICK_RADIUS`] of `point`
    pub fn predate(&mut self, point: Vec2) -> Option<Moth> {
        let eaten = self.population.remove_near(point, PICK_RADIUS);
        if let Some(moth) = eaten {
            debug!(
                "Predator ate a {:?} moth at ({:.1}, {:.1}), {} left",
                moth.coloration,
                moth.position.x,
                moth.position.y,
                self.population.len()
            );
        }
        eaten
    }

    /// Countdown/status line for the presentation surface
    pub fn status_text(&self) -> String {
        if self.is_stopped() {
            return "Stopped".to_string();
        }
        match self.phase() {
            CyclePhase::Running { time_left } => format!("Time Left: {}s", time_left),
            CyclePhase::Evaluating | CyclePhase::Paused => "Time’s up! Evaluating...".to_string(),
        }
    }

    fn evaluate(&mut self, background: i32, rng: &mut impl Rng) -> Evaluation {
        let survivors = select_survivors(self.population.moths(), background);
        let (population, counts) =
            reproduce(&survivors, self.config.population_size, &self.area, rng);

        self.population = population;
        self.history.push(counts);
        self.scheduler.finish_evaluation();

        info!(
            "Generation evaluated on background {}: {} survived, next generation {} light / {} dark",
            background,
            survivors.len(),
            counts.light,
            counts.dark
        );

        Evaluation {
            survivors: survivors.len(),
            counts,
        }
    }
}

/// Core simulation: resources, input events and the cycle systems. Runs
/// headless; pair with the presentation plugin for a window.
pub struct SimulationPlugin {
    simulation: Simulation,
}

impl SimulationPlugin {
    pub fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.simulation.clone())
            .init_resource::<Background>()
            .init_resource::<PredatorMode>()
            .add_event::<ResetRequested>()
            .add_event::<PredatorModeToggled>()
            .add_event::<PredatorClick>()
            .add_systems(Startup, start_simulation)
            .add_systems(
                Update,
                (
                    handle_reset_requests,
                    toggle_predator_mode,
                    handle_predator_clicks,
                    advance_simulation,
                )
                    .chain(),
            );
    }
}

/// System to populate the area and start the countdown
pub fn start_simulation(mut simulation: ResMut<Simulation>) {
    simulation.start(&mut rand::thread_rng());
}

/// System to reset the simulation on request
pub fn handle_reset_requests(
    mut resets: EventReader<ResetRequested>,
    mut simulation: ResMut<Simulation>,
) {
    // Several requests in one frame still mean a single reset
    if resets.read().count() > 0 {
        simulation.reset(&mut rand::thread_rng());
    }
}

/// System to flip predator mode
pub fn toggle_predator_mode(
    mut toggles: EventReader<PredatorModeToggled>,
    mut predator_mode: ResMut<PredatorMode>,
) {
    for _ in toggles.read() {
        predator_mode.0 = !predator_mode.0;
        debug!("Predator mode {}", if predator_mode.0 { "on" } else { "off" });
    }
}

/// System to remove clicked moths while predator mode is on
pub fn handle_predator_clicks(
    mut clicks: EventReader<PredatorClick>,
    predator_mode: Res<PredatorMode>,
    mut simulation: ResMut<Simulation>,
) {
    for click in clicks.read() {
        if !predator_mode.0 {
            continue;
        }
        if simulation.bypass_change_detection().predate(click.position).is_some() {
            simulation.set_changed();
        }
    }
}

/// System to drive the generation cycle from frame time
pub fn advance_simulation(
    time: Res<Time>,
    background: Res<Background>,
    mut simulation: ResMut<Simulation>,
) {
    let report = simulation.bypass_change_detection().advance(
        time.delta(),
        background.brightness,
        &mut rand::thread_rng(),
    );
    if report.needs_redraw() {
        simulation.set_changed();
    }
}
