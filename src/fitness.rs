//! Fitness evaluation for candidate timetables.
//!
//! Each assignment is scored independently; a schedule's fitness is the
//! sum over its assignments. Higher is better.
//!
//! # Scoring terms
//!
//! | Room size (cap vs expected) | Score |
//! |-----------------------------|-------|
//! | cap < exp                   | −0.5  |
//! | cap > 6·exp                 | −0.4  |
//! | cap > 3·exp (and ≤ 6·exp)   | −0.2  |
//! | exp ≤ cap ≤ 3·exp           | +0.3  |
//!
//! | Facilitator fit | Score |
//! |-----------------|-------|
//! | preferred       | +0.5  |
//! | other           | +0.2  |
//! | neither         | −0.1  |
//!
//! Scheduling conflicts (double-booked rooms, slots, or facilitators) are
//! intentionally not penalized; the model scores each assignment in
//! isolation.
//!
//! This is the hot path: one call per assignment per population member per
//! generation. Everything here is index and slice lookups, no allocation.

use crate::ga::Gene;
use crate::models::{Activity, Catalog};

/// Scores room capacity against expected enrollment.
///
/// Boundary behavior: `cap == 3·exp` is still a good fit (+0.3);
/// `cap == 6·exp` is oversized (−0.2) but not yet grossly so.
pub fn room_size_score(capacity: u32, expected_enroll: u32) -> f64 {
    let cap = u64::from(capacity);
    let exp = u64::from(expected_enroll);
    if cap < exp {
        -0.5
    } else if cap > 6 * exp {
        -0.4
    } else if cap > 3 * exp {
        -0.2
    } else {
        0.3
    }
}

/// Scores how well a facilitator fits an activity.
///
/// Preferred membership takes priority: if a name appears in both lists,
/// the preferred score (+0.5) wins.
pub fn facilitator_score(activity: &Activity, facilitator: &str) -> f64 {
    if activity.preferred.iter().any(|n| n == facilitator) {
        0.5
    } else if activity.other.iter().any(|n| n == facilitator) {
        0.2
    } else {
        -0.1
    }
}

/// Combined score for one gene: room-size term + facilitator term.
///
/// `activity_index` and the gene's pool indices must be in range for
/// `catalog`; chromosomes built against the same catalog always are.
pub fn assignment_score(catalog: &Catalog, activity_index: usize, gene: &Gene) -> f64 {
    let activity = &catalog.activities[activity_index];
    let room = &catalog.rooms[gene.room];
    let facilitator = &catalog.facilitators[gene.facilitator];

    room_size_score(room.capacity, activity.expected_enroll)
        + facilitator_score(activity, &facilitator.name)
}

/// Fitness of a whole candidate: sum of per-gene scores.
pub fn schedule_fitness(catalog: &Catalog, genes: &[Gene]) -> f64 {
    genes
        .iter()
        .enumerate()
        .map(|(i, gene)| assignment_score(catalog, i, gene))
        .sum()
}
