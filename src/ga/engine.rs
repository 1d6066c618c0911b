//! Generational loop with elitism and windowed early stopping.
//!
//! [`evolve_once`] runs a single GA pass at a fixed mutation rate:
//! random initialization, then per generation — sort by fitness, carry
//! the elite unchanged, fill the rest with selected/crossed/mutated
//! children, and stop early once the mean fitness stalls over the
//! configured window.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::ScheduleChromosome;
use super::observer::ProgressObserver;
use super::operators::{mutate, select_parents, single_point_crossover};
use crate::models::{Catalog, Schedule};

/// Tuning knobs for one generational run.
///
/// `Default` carries the reference parameters: 500 schedules per
/// generation, 5 elites, up to 1000 generations, 1% improvement
/// threshold over a 100-generation window, progress reported every 10
/// generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Schedules per generation.
    pub population_size: usize,
    /// Top schedules carried unchanged into the next generation.
    pub elite_size: usize,
    /// Hard generation cap.
    pub max_generations: usize,
    /// Minimum relative mean-fitness improvement over `stall_window`
    /// generations; below this the run stops early.
    pub improvement_threshold: f64,
    /// Number of generations the early-stop comparison looks back.
    pub stall_window: usize,
    /// Observer reporting cadence (generation 1 is always reported).
    pub report_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            elite_size: 5,
            max_generations: 1000,
            improvement_threshold: 0.01,
            stall_window: 100,
            report_interval: 10,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, max: usize) -> Self {
        self.max_generations = max;
        self
    }

    /// Sets the early-stop window length.
    pub fn with_stall_window(mut self, window: usize) -> Self {
        self.stall_window = window;
        self
    }
}

/// Mean and best fitness of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Mean fitness over the population.
    pub mean: f64,
    /// Best fitness in the population.
    pub best: f64,
}

/// Result of one generational run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolveOutcome {
    /// The best schedule in the final population, resolved to names.
    pub schedule: Schedule,
    /// Fitness of that schedule.
    pub best_fitness: f64,
    /// Per-generation (mean, best) series, entry 0 being the random
    /// initial population. Length = generations run + 1.
    pub history: Vec<GenerationStats>,
}

fn population_stats(population: &[ScheduleChromosome]) -> GenerationStats {
    let best = population
        .iter()
        .map(|c| c.fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    let mean = population.iter().map(|c| c.fitness).sum::<f64>() / population.len() as f64;
    GenerationStats { mean, best }
}

/// Whether the early-stop rule fires: relative improvement of `mean`
/// over `previous_mean` is below `threshold`.
///
/// A previous mean of exactly zero makes the relative measure undefined;
/// it is treated as "no improvement" and the run stops.
fn stalled(mean: f64, previous_mean: f64, threshold: f64) -> bool {
    if previous_mean == 0.0 {
        return true;
    }
    (mean - previous_mean) / previous_mean.abs() < threshold
}

/// Runs the GA once at a fixed `mutation_rate`.
///
/// The catalog's pools must be non-empty and `config.population_size`
/// at least 1 (see [`crate::validation::validate_catalog`]).
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use timetable_ga::ga::{evolve_once, GaConfig, NullObserver};
/// use timetable_ga::models::Catalog;
///
/// let catalog = Catalog::sample();
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(20)
///     .with_stall_window(100);
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let outcome = evolve_once(&catalog, &config, 0.01, &mut rng, &mut NullObserver);
/// assert_eq!(outcome.schedule.len(), catalog.activities.len());
/// assert_eq!(outcome.history.len(), 21);
/// ```
pub fn evolve_once<R: Rng, O: ProgressObserver>(
    catalog: &Catalog,
    config: &GaConfig,
    mutation_rate: f64,
    rng: &mut R,
    observer: &mut O,
) -> EvolveOutcome {
    let mut population: Vec<ScheduleChromosome> = (0..config.population_size)
        .map(|_| {
            let mut c = ScheduleChromosome::random(catalog, rng);
            c.evaluate(catalog);
            c
        })
        .collect();

    let mut history = vec![population_stats(&population)];

    for generation in 1..=config.max_generations {
        population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        let elite = config.elite_size.min(population.len());
        let mut next: Vec<ScheduleChromosome> = population[..elite].to_vec();

        while next.len() < config.population_size {
            let (p1, p2) = select_parents(&population, rng);
            let mut child = single_point_crossover(p1, p2, rng);
            mutate(&mut child, catalog, mutation_rate, rng);
            child.evaluate(catalog);
            next.push(child);
        }
        population = next;

        let stats = population_stats(&population);
        history.push(stats);

        if generation == 1 || generation % config.report_interval.max(1) == 0 {
            observer.on_generation(generation, stats.mean, stats.best);
        }

        if generation >= config.stall_window {
            let previous = history[generation - config.stall_window].mean;
            if stalled(stats.mean, previous, config.improvement_threshold) {
                observer.on_early_stop(generation);
                break;
            }
        }
    }

    let best = population
        .iter()
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
        .expect("population_size >= 1");

    EvolveOutcome {
        schedule: best.decode(catalog),
        best_fitness: best.fitness,
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::NullObserver;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Records which generations were reported.
    #[derive(Default)]
    struct RecordingObserver {
        generations: Vec<usize>,
        early_stop_at: Option<usize>,
    }

    impl ProgressObserver for RecordingObserver {
        fn on_generation(&mut self, generation: usize, _mean: f64, _best: f64) {
            self.generations.push(generation);
        }

        fn on_early_stop(&mut self, generation: usize) {
            self.early_stop_at = Some(generation);
        }
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(40)
            .with_max_generations(25)
            .with_stall_window(100) // never fires within 25 generations
    }

    #[test]
    fn test_history_length_without_early_stop() {
        let catalog = Catalog::sample();
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = evolve_once(&catalog, &config, 0.01, &mut rng, &mut NullObserver);
        assert_eq!(outcome.history.len(), config.max_generations + 1);
        assert_eq!(outcome.schedule.len(), catalog.activities.len());
    }

    #[test]
    fn test_elitism_keeps_best_non_decreasing() {
        let catalog = Catalog::sample();
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = evolve_once(&catalog, &config, 0.05, &mut rng, &mut NullObserver);
        for pair in outcome.history.windows(2) {
            assert!(
                pair[1].best >= pair[0].best,
                "best fitness regressed: {} -> {}",
                pair[0].best,
                pair[1].best
            );
        }
        let last = outcome.history.last().unwrap();
        assert_eq!(outcome.best_fitness, last.best);
    }

    #[test]
    fn test_early_stop_fires_at_window() {
        let catalog = Catalog::sample();
        // An infinite threshold means any finite improvement counts as a
        // stall, so the run stops at exactly the window boundary.
        let mut config = small_config().with_stall_window(5).with_max_generations(50);
        config.improvement_threshold = f64::INFINITY;
        let mut rng = SmallRng::seed_from_u64(42);
        let mut observer = RecordingObserver::default();

        let outcome = evolve_once(&catalog, &config, 0.01, &mut rng, &mut observer);
        assert_eq!(observer.early_stop_at, Some(5));
        assert_eq!(outcome.history.len(), 6);
    }

    #[test]
    fn test_zero_previous_mean_stops() {
        assert!(stalled(1.0, 0.0, 0.01));
    }

    #[test]
    fn test_stall_check_relative() {
        // 2% improvement over a 1% threshold: keep going
        assert!(!stalled(1.02, 1.0, 0.01));
        // 0.5% improvement: stop
        assert!(stalled(1.005, 1.0, 0.01));
        // Negative baseline uses |previous|
        assert!(!stalled(-0.9, -1.0, 0.01));
        assert!(stalled(-0.995, -1.0, 0.01));
    }

    #[test]
    fn test_observer_cadence() {
        let catalog = Catalog::sample();
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut observer = RecordingObserver::default();

        let _ = evolve_once(&catalog, &config, 0.01, &mut rng, &mut observer);
        assert_eq!(observer.generations, vec![1, 10, 20]);
        assert_eq!(observer.early_stop_at, None);
    }

    #[test]
    fn test_single_member_population() {
        let catalog = Catalog::sample();
        let config = GaConfig::default()
            .with_population_size(1)
            .with_max_generations(3)
            .with_stall_window(100);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = evolve_once(&catalog, &config, 0.5, &mut rng, &mut NullObserver);
        assert_eq!(outcome.history.len(), 4);
        assert!(outcome.best_fitness.is_finite());
    }

    #[test]
    fn test_search_beats_random_start() {
        let catalog = Catalog::sample();
        let config = GaConfig::default()
            .with_population_size(100)
            .with_max_generations(40)
            .with_stall_window(1000);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = evolve_once(&catalog, &config, 0.02, &mut rng, &mut NullObserver);
        let start = outcome.history[0];
        let end = outcome.history.last().unwrap();
        assert!(end.best >= start.best);
        assert!(
            end.mean > start.mean,
            "mean fitness should improve: {} -> {}",
            start.mean,
            end.mean
        );
    }
}
