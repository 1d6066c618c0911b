//! Timetabling domain models.
//!
//! Provides the immutable input types (rooms, time slots, facilitators,
//! activities, bundled into a [`Catalog`]) and the resolved output types
//! ([`Assignment`], [`Schedule`]).
//!
//! Input types are loaded once per run and never mutated; schedules are
//! produced fresh by decoding GA chromosomes.

mod catalog;
mod schedule;

pub use catalog::{Activity, Catalog, Facilitator, Room, TimeSlot};
pub use schedule::{Assignment, Schedule};
