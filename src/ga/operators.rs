//! Population operators: selection, crossover, mutation.
//!
//! All operators are free functions generic over `R: Rng`, so runs are
//! deterministic under a seeded generator. None of them mutate a parent:
//! crossover returns a fresh child and mutation operates on a child the
//! caller owns.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use super::chromosome::ScheduleChromosome;
use crate::models::Catalog;

/// Selects two parents by softmax roulette over cached fitness values.
///
/// Weights are `exp(f − f_max)`; subtracting the maximum keeps the
/// exponentials bounded in (0, 1] no matter how large fitness grows.
/// Parents are drawn independently with replacement, so the same
/// chromosome may be returned twice.
///
/// The population must be non-empty with evaluated (finite) fitness.
pub fn select_parents<'a, R: Rng>(
    population: &'a [ScheduleChromosome],
    rng: &mut R,
) -> (&'a ScheduleChromosome, &'a ScheduleChromosome) {
    let f_max = population
        .iter()
        .map(|c| c.fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    let weights: Vec<f64> = population.iter().map(|c| (c.fitness - f_max).exp()).collect();

    // The maximum-fitness member always weighs exp(0) = 1, so the total
    // weight is positive and the distribution is well-formed.
    let dist = WeightedIndex::new(&weights).expect("non-empty evaluated population");
    (&population[dist.sample(rng)], &population[dist.sample(rng)])
}

/// Single-point crossover: the child takes `parent1`'s genes before a
/// uniformly drawn cut in `[1, len−1]` and `parent2`'s genes from the cut
/// onward. With fewer than two genes there is no valid cut and the child
/// is a copy of `parent1`.
pub fn single_point_crossover<R: Rng>(
    parent1: &ScheduleChromosome,
    parent2: &ScheduleChromosome,
    rng: &mut R,
) -> ScheduleChromosome {
    let len = parent1.genes.len();
    let genes = if len < 2 {
        parent1.genes.clone()
    } else {
        let cut = rng.random_range(1..len);
        let mut genes = Vec::with_capacity(len);
        genes.extend_from_slice(&parent1.genes[..cut]);
        genes.extend_from_slice(&parent2.genes[cut..]);
        genes
    };
    ScheduleChromosome {
        genes,
        fitness: f64::NEG_INFINITY,
    }
}

/// Mutates each gene independently with probability `rate`: one of
/// {room, time slot, facilitator} is chosen uniformly and redrawn
/// uniformly from its catalog pool. The redraw may repeat the current
/// value; the other two fields are untouched.
pub fn mutate<R: Rng>(
    chromosome: &mut ScheduleChromosome,
    catalog: &Catalog,
    rate: f64,
    rng: &mut R,
) {
    for gene in &mut chromosome.genes {
        if rng.random::<f64>() < rate {
            match rng.random_range(0..3u8) {
                0 => gene.room = rng.random_range(0..catalog.rooms.len()),
                1 => gene.time_slot = rng.random_range(0..catalog.times.len()),
                _ => gene.facilitator = rng.random_range(0..catalog.facilitators.len()),
            }
        }
    }
}
