//! Progress reporting seam.
//!
//! The engine never prints; it reports through a [`ProgressObserver`]
//! injected by the caller. [`NullObserver`] discards everything,
//! [`LogObserver`] forwards to `tracing`.

/// Receives progress events from the generational loop and the adaptive
/// controller.
///
/// All methods have empty default bodies, so an implementation only
/// overrides the events it cares about.
pub trait ProgressObserver {
    /// A generation finished. Called at generation 1 and at the engine's
    /// reporting interval thereafter.
    fn on_generation(&mut self, generation: usize, mean: f64, best: f64) {
        let _ = (generation, mean, best);
    }

    /// The generational loop stopped early: relative mean-fitness
    /// improvement over the stall window fell below threshold.
    fn on_early_stop(&mut self, generation: usize) {
        let _ = generation;
    }

    /// The adaptive controller is starting a run at the given mutation rate.
    fn on_round(&mut self, mutation_rate: f64) {
        let _ = mutation_rate;
    }

    /// The adaptive controller saw no improvement at the given mutation
    /// rate and is stopping.
    fn on_adaptation_stop(&mut self, mutation_rate: f64) {
        let _ = mutation_rate;
    }
}

/// Discards all progress events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {}

/// Emits progress events as `tracing` records at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_generation(&mut self, generation: usize, mean: f64, best: f64) {
        tracing::info!(generation, mean, best, "generation complete");
    }

    fn on_early_stop(&mut self, generation: usize) {
        tracing::info!(generation, "early stop: mean fitness stalled");
    }

    fn on_round(&mut self, mutation_rate: f64) {
        tracing::info!(mutation_rate, "starting GA run");
    }

    fn on_adaptation_stop(&mut self, mutation_rate: f64) {
        tracing::info!(mutation_rate, "no improvement; stopping adaptation");
    }
}
