//! Schedule (solution) model.
//!
//! A [`Schedule`] is the resolved, human-readable form of a GA solution:
//! one [`Assignment`] row per activity, in catalog order, with names
//! instead of pool indices. This is the shape handed to reporting and
//! charting collaborators.

use serde::{Deserialize, Serialize};

/// One activity bound to a room, time slot, and facilitator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Activity code.
    pub activity: String,
    /// Assigned room name.
    pub room: String,
    /// Assigned time slot label.
    pub time_slot: String,
    /// Assigned facilitator name.
    pub facilitator: String,
}

/// A complete timetable: exactly one assignment per catalog activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in catalog order.
    pub assignments: Vec<Assignment>,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        activity: impl Into<String>,
        room: impl Into<String>,
        time_slot: impl Into<String>,
        facilitator: impl Into<String>,
    ) -> Self {
        Self {
            activity: activity.into(),
            room: room.into(),
            time_slot: time_slot.into(),
            facilitator: facilitator.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Looks up the assignment for an activity code.
    pub fn assignment_for(&self, activity: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.activity == activity)
    }
}
