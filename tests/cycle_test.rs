use bevy::prelude::*;
use peppered_moths::config::*;
use peppered_moths::cycle::{CyclePhase, CycleScheduler, CycleTick};
use peppered_moths::{Simulation, SimulationConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

/// Seconds from the start of a countdown to the start of the next one
const CYCLE_SECONDS: usize = GENERATION_SECONDS as usize + EVALUATION_PAUSE as usize;

fn running_simulation(seed: u64) -> (Simulation, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut simulation =
        Simulation::new(SimulationConfig::default()).expect("default config is valid");
    simulation.start(&mut rng);
    (simulation, rng)
}

fn advance_seconds(simulation: &mut Simulation, rng: &mut StdRng, seconds: usize, background: i32) {
    for _ in 0..seconds {
        simulation.advance(SECOND, background, rng);
    }
}

#[test]
fn test_scheduler_starts_stopped() {
    let mut scheduler = CycleScheduler::new(&SimulationConfig::default());

    assert!(scheduler.is_stopped());
    assert_eq!(scheduler.phase(), CyclePhase::Running { time_left: 10 });
    assert_eq!(scheduler.tick(Duration::from_secs(30)), CycleTick::default());
}

#[test]
fn test_scheduler_waits_for_evaluation_ack() {
    let mut scheduler = CycleScheduler::new(&SimulationConfig::default());
    scheduler.start();

    let mut evaluations = 0;
    for _ in 0..10 {
        if scheduler.tick(SECOND).evaluate {
            evaluations += 1;
        }
    }
    assert_eq!(evaluations, 1);
    assert_eq!(scheduler.phase(), CyclePhase::Evaluating);

    // Still due until acknowledged; the pause does not start on its own
    assert!(scheduler.tick(Duration::from_secs(5)).evaluate);
    assert_eq!(scheduler.phase(), CyclePhase::Evaluating);

    scheduler.finish_evaluation();
    assert_eq!(scheduler.phase(), CyclePhase::Paused);
    assert_eq!(scheduler.pause_remaining(), Duration::from_secs(3));
}

/// A single oversized tick cannot count below zero or evaluate twice
#[test]
fn test_large_tick_evaluates_once() {
    let mut scheduler = CycleScheduler::new(&SimulationConfig::default());
    scheduler.start();

    let tick = scheduler.tick(Duration::from_secs(25));

    assert_eq!(tick.countdown_ticks, 10);
    assert_eq!(tick.repositions, 12);
    assert!(tick.evaluate);
    assert_eq!(scheduler.time_left(), 0);
}

#[test]
fn test_countdown_and_reposition_cadence() {
    let (mut simulation, mut rng) = running_simulation(10);
    assert_eq!(simulation.time_left(), 10);
    assert_eq!(simulation.status_text(), "Time Left: 10s");

    let start = simulation.moths().to_vec();

    let report = simulation.advance(SECOND, 128, &mut rng);
    assert!(report.countdown_changed);
    assert!(!report.repositioned);
    assert_eq!(simulation.time_left(), 9);
    assert_eq!(simulation.moths(), start.as_slice());

    let report = simulation.advance(SECOND, 128, &mut rng);
    assert!(report.repositioned);
    assert_eq!(simulation.time_left(), 8);
    assert_eq!(simulation.status_text(), "Time Left: 8s");

    for (old, new) in start.iter().zip(simulation.moths()) {
        assert_eq!(old.coloration, new.coloration);
        assert_ne!(old.position, new.position);
    }

    // Sub-interval ticks accumulate
    let report = simulation.advance(Duration::from_millis(500), 128, &mut rng);
    assert!(!report.needs_redraw());
    assert_eq!(simulation.time_left(), 8);
    simulation.advance(Duration::from_millis(500), 128, &mut rng);
    assert_eq!(simulation.time_left(), 7);
}

#[test]
fn test_full_generation_cycle() {
    let (mut simulation, mut rng) = running_simulation(11);

    advance_seconds(&mut simulation, &mut rng, 9, 200);
    assert_eq!(simulation.time_left(), 1);
    assert!(simulation.history().is_empty());

    let report = simulation.advance(SECOND, 200, &mut rng);
    let evaluation = report.evaluation.expect("countdown expired");
    assert_eq!(evaluation.counts.total(), POPULATION_SIZE);
    assert_eq!(simulation.phase(), CyclePhase::Paused);
    assert_eq!(simulation.status_text(), "Time’s up! Evaluating...");
    assert_eq!(simulation.history().len(), 1);
    assert_eq!(simulation.history().latest(), Some(&evaluation.counts));
    assert_eq!(simulation.population().len(), POPULATION_SIZE);
    assert_eq!(simulation.population().counts(), evaluation.counts);

    // Nothing moves or counts down during the pause
    let paused = simulation.moths().to_vec();
    for _ in 0..2 {
        let report = simulation.advance(SECOND, 200, &mut rng);
        assert!(!report.needs_redraw());
    }
    assert_eq!(simulation.moths(), paused.as_slice());
    assert_eq!(simulation.phase(), CyclePhase::Paused);

    let report = simulation.advance(SECOND, 200, &mut rng);
    assert!(report.resumed);
    assert_eq!(simulation.phase(), CyclePhase::Running { time_left: 10 });
    assert_eq!(simulation.history().len(), 1);
}

/// Survivors are the moths hidden at evaluation time
#[test]
fn test_evaluation_uses_current_background() {
    let (mut simulation, mut rng) = running_simulation(12);
    advance_seconds(&mut simulation, &mut rng, 9, 0);

    let hidden_on_bright = simulation
        .moths()
        .iter()
        .filter(|moth| moth.is_camouflaged(200))
        .count();
    let report = simulation.advance(SECOND, 200, &mut rng);

    assert_eq!(
        report.evaluation.map(|e| e.survivors),
        Some(hidden_on_bright)
    );
}

#[test]
fn test_history_keeps_most_recent_generations() {
    let (mut simulation, mut rng) = running_simulation(13);

    let mut recorded = Vec::new();
    while recorded.len() < HISTORY_CAPACITY + 1 {
        if let Some(evaluation) = simulation.advance(SECOND, 150, &mut rng).evaluation {
            recorded.push(evaluation.counts);
        }
    }

    assert_eq!(simulation.history().len(), HISTORY_CAPACITY);
    let kept: Vec<_> = simulation.history().iter().copied().collect();
    assert_eq!(kept, recorded[1..].to_vec());
}

#[test]
fn test_extinction_never_empties_population() {
    let (mut simulation, mut rng) = running_simulation(14);

    // Nothing can hide on a background this far from both colorations
    for _ in 0..3 {
        advance_seconds(&mut simulation, &mut rng, CYCLE_SECONDS, 1000);
        assert_eq!(simulation.population().len(), POPULATION_SIZE);
    }
    assert_eq!(simulation.history().len(), 3);
}

#[test]
fn test_reset_mid_cycle() {
    let (mut simulation, mut rng) = running_simulation(15);

    advance_seconds(&mut simulation, &mut rng, CYCLE_SECONDS * 5 + 6, 150);
    assert_eq!(simulation.time_left(), 4);
    assert_eq!(simulation.history().len(), 5);

    simulation.reset(&mut rng);

    assert_eq!(simulation.time_left(), 10);
    assert!(simulation.history().is_empty());
    assert_eq!(simulation.population().len(), POPULATION_SIZE);
    assert_eq!(simulation.phase(), CyclePhase::Running { time_left: 10 });
}

/// Reset during the pause cancels it and starts a fresh countdown
#[test]
fn test_reset_during_pause() {
    let (mut simulation, mut rng) = running_simulation(16);
    advance_seconds(&mut simulation, &mut rng, 11, 150);
    assert_eq!(simulation.phase(), CyclePhase::Paused);

    simulation.reset(&mut rng);
    simulation.advance(SECOND, 150, &mut rng);
    assert_eq!(simulation.time_left(), 9);

    // No stale pause timer resumes anything later
    advance_seconds(&mut simulation, &mut rng, 8, 150);
    assert_eq!(simulation.time_left(), 1);
    assert!(simulation.history().is_empty());
}

#[test]
fn test_stop_and_resume() {
    let (mut simulation, mut rng) = running_simulation(17);
    advance_seconds(&mut simulation, &mut rng, 3, 128);
    let positions = simulation.moths().to_vec();

    simulation.stop();
    assert!(simulation.is_stopped());
    assert_eq!(simulation.status_text(), "Stopped");
    let report = simulation.advance(Duration::from_secs(60), 128, &mut rng);
    assert!(!report.needs_redraw());
    assert_eq!(simulation.time_left(), 7);
    assert_eq!(simulation.moths(), positions.as_slice());

    simulation.start(&mut rng);
    assert_eq!(simulation.moths(), positions.as_slice());
    simulation.advance(SECOND, 128, &mut rng);
    assert_eq!(simulation.time_left(), 6);
}

#[test]
fn test_reset_restarts_stopped_simulation() {
    let (mut simulation, mut rng) = running_simulation(18);
    simulation.stop();

    simulation.reset(&mut rng);

    assert!(!simulation.is_stopped());
    simulation.advance(SECOND, 128, &mut rng);
    assert_eq!(simulation.time_left(), 9);
}

#[test]
fn test_predation_removes_one_moth() {
    let (mut simulation, _rng) = running_simulation(19);
    let before = simulation.moths().to_vec();

    let eaten = simulation.predate(before[0].position);

    assert_eq!(eaten, Some(before[0]));
    assert_eq!(simulation.moths(), &before[1..]);
}

#[test]
fn test_predation_miss() {
    let (mut simulation, _rng) = running_simulation(20);

    assert!(simulation.predate(Vec2::new(-100.0, -100.0)).is_none());
    assert_eq!(simulation.population().len(), POPULATION_SIZE);
}

/// A thinned population still breeds a full generation
#[test]
fn test_predation_then_reproduction_refills() {
    let (mut simulation, mut rng) = running_simulation(21);
    for _ in 0..5 {
        let target = simulation.moths()[0].position;
        simulation.predate(target);
    }
    assert_eq!(simulation.population().len(), POPULATION_SIZE - 5);

    advance_seconds(&mut simulation, &mut rng, 10, 150);

    assert_eq!(simulation.population().len(), POPULATION_SIZE);
}

/// Clicks land during the post-evaluation pause too
#[test]
fn test_predation_while_paused() {
    let (mut simulation, mut rng) = running_simulation(22);
    advance_seconds(&mut simulation, &mut rng, 10, 150);
    assert_eq!(simulation.phase(), CyclePhase::Paused);
    let before = simulation.moths().to_vec();

    let eaten = simulation.predate(before[3].position);

    assert!(eaten.is_some());
    assert_eq!(simulation.population().len(), POPULATION_SIZE - 1);
    assert_eq!(simulation.phase(), CyclePhase::Paused);
}

/// Resuming after every moth was eaten keeps the empty population until evaluation
#[test]
fn test_resume_does_not_repopulate() {
    let (mut simulation, mut rng) = running_simulation(23);
    advance_seconds(&mut simulation, &mut rng, 3, 150);
    while let Some(moth) = simulation.moths().first().copied() {
        simulation.predate(moth.position);
    }

    simulation.stop();
    simulation.start(&mut rng);

    assert!(simulation.population().is_empty());
    assert_eq!(simulation.time_left(), 7);

    // Extinction fallback refills it at the next evaluation
    advance_seconds(&mut simulation, &mut rng, 7, 150);
    assert_eq!(simulation.population().len(), POPULATION_SIZE);
}
