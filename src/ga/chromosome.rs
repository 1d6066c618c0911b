//! Index-gene chromosome for timetabling.
//!
//! # Encoding
//!
//! A chromosome carries one [`Gene`] per catalog activity, in catalog
//! order. Each gene holds three pool indices (room, time slot,
//! facilitator), so crossover is positional and fitness evaluation is
//! pure slice lookups.
//!
//! Double-booking a room, slot, or facilitator is representable and
//! allowed; the fitness model scores assignments independently.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fitness::schedule_fitness;
use crate::models::{Assignment, Catalog, Schedule};

/// One activity's placement: indices into the catalog pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    /// Index into `catalog.rooms`.
    pub room: usize,
    /// Index into `catalog.times`.
    pub time_slot: usize,
    /// Index into `catalog.facilitators`.
    pub facilitator: usize,
}

/// A candidate timetable in GA encoding.
///
/// Higher fitness = better schedule (maximization convention).
/// Unevaluated chromosomes carry `f64::NEG_INFINITY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleChromosome {
    /// One gene per catalog activity, in catalog order.
    pub genes: Vec<Gene>,
    /// Cached fitness value (higher = better).
    pub fitness: f64,
}

impl ScheduleChromosome {
    /// Creates a random chromosome: each activity gets an independently
    /// uniform room, time slot, and facilitator.
    ///
    /// The catalog's room, time, and facilitator pools must be non-empty
    /// (see [`crate::validation::validate_catalog`]).
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let genes = catalog
            .activities
            .iter()
            .map(|_| Gene {
                room: rng.random_range(0..catalog.rooms.len()),
                time_slot: rng.random_range(0..catalog.times.len()),
                facilitator: rng.random_range(0..catalog.facilitators.len()),
            })
            .collect();
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Computes and caches this chromosome's fitness.
    pub fn evaluate(&mut self, catalog: &Catalog) -> f64 {
        self.fitness = schedule_fitness(catalog, &self.genes);
        self.fitness
    }

    /// Resolves the chromosome into a named [`Schedule`].
    pub fn decode(&self, catalog: &Catalog) -> Schedule {
        let mut schedule = Schedule::new();
        for (activity, gene) in catalog.activities.iter().zip(&self.genes) {
            schedule.add_assignment(Assignment::new(
                &activity.code,
                &catalog.rooms[gene.room].name,
                &catalog.times[gene.time_slot].label,
                &catalog.facilitators[gene.facilitator].name,
            ));
        }
        schedule
    }

    /// Validates the chromosome against a catalog: one gene per activity,
    /// all pool indices in range.
    pub fn is_valid(&self, catalog: &Catalog) -> bool {
        self.genes.len() == catalog.activities.len()
            && self.genes.iter().all(|g| {
                g.room < catalog.rooms.len()
                    && g.time_slot < catalog.times.len()
                    && g.facilitator < catalog.facilitators.len()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_chromosome() {
        let catalog = Catalog::sample();
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = ScheduleChromosome::random(&catalog, &mut rng);

        assert_eq!(ch.genes.len(), 11);
        assert!(ch.is_valid(&catalog));
        assert_eq!(ch.fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluate_caches_fitness() {
        let catalog = Catalog::sample();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = ScheduleChromosome::random(&catalog, &mut rng);

        let f = ch.evaluate(&catalog);
        assert!(f.is_finite());
        assert_eq!(f, ch.fitness);
        // 11 activities, per-assignment score in [-0.6, 0.8]
        assert!(f >= -6.6 && f <= 8.8);
    }

    #[test]
    fn test_decode_preserves_catalog_order() {
        let catalog = Catalog::sample();
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = ScheduleChromosome::random(&catalog, &mut rng);

        let schedule = ch.decode(&catalog);
        assert_eq!(schedule.len(), 11);
        for (assignment, activity) in schedule.assignments.iter().zip(&catalog.activities) {
            assert_eq!(assignment.activity, activity.code);
        }
        // Decoded names come from catalog pools
        let first = &schedule.assignments[0];
        assert!(catalog.rooms.iter().any(|r| r.name == first.room));
        assert!(catalog
            .facilitators
            .iter()
            .any(|f| f.name == first.facilitator));
    }

    #[test]
    fn test_invalid_chromosome() {
        let catalog = Catalog::sample();
        let ch = ScheduleChromosome {
            genes: vec![Gene {
                room: 999,
                time_slot: 0,
                facilitator: 0,
            }],
            fitness: 0.0,
        };
        assert!(!ch.is_valid(&catalog)); // wrong length and room out of range
    }

    #[test]
    fn test_random_population_fitness_spread() {
        // Smoke check: random sampling yields a sane, finite spread.
        let catalog = Catalog::sample();
        let mut rng = SmallRng::seed_from_u64(7);

        let fitnesses: Vec<f64> = (0..200)
            .map(|_| ScheduleChromosome::random(&catalog, &mut rng).evaluate(&catalog))
            .collect();

        let min = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;

        assert!(min.is_finite() && max.is_finite());
        assert!(min <= mean && mean <= max);
        assert!(max > min, "200 random schedules should not all score equally");
    }
}
