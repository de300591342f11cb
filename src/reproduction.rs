use crate::config::MUTATION_CHANCE;
use crate::moth::{Area, Moth};
use crate::population::{HistoryEntry, Population};
use bevy::log::warn;
use rand::Rng;

/// Breed the next generation from the survivors of an evaluation.
///
/// Each offspring picks a parent uniformly (with replacement), inherits its
/// coloration, flips it with [`MUTATION_CHANCE`], and lands at a fresh random
/// position. With no survivors the population is regenerated from scratch so
/// it never goes extinct. Either way the result holds exactly
/// `population_size` moths.
pub fn reproduce(
    survivors: &[Moth],
    population_size: usize,
    area: &Area,
    rng: &mut impl Rng,
) -> (Population, HistoryEntry) {
    let population = if survivors.is_empty() {
        warn!("No moths survived, regenerating a random population");
        Population::generate(area, population_size, rng)
    } else {
        let offspring = (0..population_size)
            .map(|_| {
                let parent = survivors[rng.gen_range(0..survivors.len())];
                let mut coloration = parent.coloration;
                if rng.gen_bool(MUTATION_CHANCE) {
                    coloration = coloration.flipped();
                }
                Moth::new(area.random_point(rng), coloration)
            })
            .collect();
        Population::from_moths(offspring)
    };

    let counts = population.counts();
    (population, counts)
}
