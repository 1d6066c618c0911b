//! Genetic-algorithm timetabling.
//!
//! Searches for a near-optimal assignment of academic activities to
//! rooms, time slots, and facilitators. The problem data is a fixed
//! [`models::Catalog`]; candidate timetables are scored by a pure
//! fitness function and evolved by a generational GA with elitism,
//! windowed early stopping, and an outer adaptive-mutation-rate
//! controller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Room`, `Facilitator`, `TimeSlot`,
//!   `Activity`, `Catalog`, `Assignment`, `Schedule`
//! - **`fitness`**: Per-assignment and whole-schedule scoring
//! - **`ga`**: Chromosome encoding, population operators, generational
//!   loop, adaptive controller, progress observer
//! - **`validation`**: Catalog integrity checks (duplicate IDs, unknown
//!   facilitator references, empty pools)
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use timetable_ga::ga::{adaptive_evolve, AdaptiveConfig, GaConfig, NullObserver};
//! use timetable_ga::models::Catalog;
//! use timetable_ga::validation::validate_catalog;
//!
//! let catalog = Catalog::sample();
//! validate_catalog(&catalog).expect("sample data is well-formed");
//!
//! let ga = GaConfig::default()
//!     .with_population_size(60)
//!     .with_max_generations(15)
//!     .with_stall_window(100);
//! let adaptive = AdaptiveConfig::default().with_max_rounds(3);
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let outcome = adaptive_evolve(&catalog, &ga, &adaptive, &mut rng, &mut NullObserver);
//! for assignment in &outcome.schedule.assignments {
//!     println!(
//!         "{} | {} @ {} | {}",
//!         assignment.activity, assignment.room, assignment.time_slot, assignment.facilitator
//!     );
//! }
//! ```
//!
//! # Scope
//!
//! The fitness model scores each assignment in isolation; double-booked
//! rooms, slots, and facilitators are not penalized. There is no
//! optimality guarantee and no persistence — a run takes a catalog and
//! returns a schedule plus its convergence history.

pub mod fitness;
pub mod ga;
pub mod models;
pub mod validation;
