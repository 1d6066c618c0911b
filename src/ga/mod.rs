//! Genetic algorithm engine for timetabling.
//!
//! # Structure
//!
//! - [`Gene`] / [`ScheduleChromosome`]: positional index encoding, one
//!   gene per catalog activity
//! - [`operators`]: softmax roulette selection, single-point crossover,
//!   per-gene field mutation
//! - [`evolve_once`]: generational loop with elitism and windowed early
//!   stopping
//! - [`adaptive_evolve`]: outer controller that halves the mutation rate
//!   while runs keep improving
//! - [`ProgressObserver`]: injected progress-reporting seam
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

mod adaptive;
mod chromosome;
mod engine;
mod observer;
pub mod operators;

pub use adaptive::{adaptive_evolve, AdaptiveConfig, AdaptiveOutcome};
pub use chromosome::{Gene, ScheduleChromosome};
pub use engine::{evolve_once, EvolveOutcome, GaConfig, GenerationStats};
pub use observer::{LogObserver, NullObserver, ProgressObserver};
