//! Problem catalog: the immutable input data for a timetabling run.
//!
//! A [`Catalog`] bundles the four fixed pools a run draws from: rooms,
//! time slots, facilitators, and the activities to be placed. It is built
//! once before a run and never mutated; the GA only ever reads it.
//!
//! Genes index into the pools by position, so pool order is fixed for the
//! lifetime of a catalog.

use serde::{Deserialize, Serialize};

/// A room that activities can be held in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
}

/// A facilitator who can be assigned to run activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facilitator {
    /// Display name, unique within the catalog.
    pub name: String,
}

/// A time slot activities can be placed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Ordering index (0 = earliest).
    pub index: u32,
    /// Display label, e.g. `"10:00"`.
    pub label: String,
}

/// An activity to be scheduled.
///
/// `preferred` and `other` hold facilitator names; any facilitator may be
/// assigned regardless — the lists only steer the fitness function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity code, e.g. `"SLA100A"`.
    pub code: String,
    /// Expected enrollment, used against room capacity.
    pub expected_enroll: u32,
    /// Facilitators best suited to this activity.
    pub preferred: Vec<String>,
    /// Acceptable but not preferred facilitators.
    pub other: Vec<String>,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

impl Facilitator {
    /// Creates a facilitator.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(index: u32, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

impl Activity {
    /// Creates an activity with empty preference lists.
    pub fn new(code: impl Into<String>, expected_enroll: u32) -> Self {
        Self {
            code: code.into(),
            expected_enroll,
            preferred: Vec::new(),
            other: Vec::new(),
        }
    }

    /// Sets the preferred facilitator names.
    pub fn with_preferred<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the acceptable (non-preferred) facilitator names.
    pub fn with_other<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other = names.into_iter().map(Into::into).collect();
        self
    }
}

/// The complete, immutable input for one timetabling problem.
///
/// # Example
///
/// ```
/// use timetable_ga::models::Catalog;
///
/// let catalog = Catalog::sample();
/// assert_eq!(catalog.activities.len(), 11);
/// assert!(!catalog.has_empty_pool());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Available time slots.
    pub times: Vec<TimeSlot>,
    /// Available facilitators.
    pub facilitators: Vec<Facilitator>,
    /// Activities to place, in chromosome order.
    pub activities: Vec<Activity>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a time slot.
    pub fn with_time(mut self, time: TimeSlot) -> Self {
        self.times.push(time);
        self
    }

    /// Adds a facilitator.
    pub fn with_facilitator(mut self, facilitator: Facilitator) -> Self {
        self.facilitators.push(facilitator);
        self
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Whether any pool a gene draws from is empty.
    ///
    /// A catalog with an empty room, time, or facilitator pool cannot
    /// seed a population.
    pub fn has_empty_pool(&self) -> bool {
        self.rooms.is_empty() || self.times.is_empty() || self.facilitators.is_empty()
    }

    /// The SLA department sample problem: 9 rooms, 6 hourly slots,
    /// 10 facilitators, 11 activities.
    pub fn sample() -> Self {
        let mut catalog = Self::new()
            .with_room(Room::new("Slater 003", 45))
            .with_room(Room::new("Roman 216", 30))
            .with_room(Room::new("Loft 206", 75))
            .with_room(Room::new("Roman 201", 50))
            .with_room(Room::new("Loft 310", 108))
            .with_room(Room::new("Beach 201", 60))
            .with_room(Room::new("Beach 301", 75))
            .with_room(Room::new("Logos 325", 450))
            .with_room(Room::new("Frank 119", 60));

        for i in 0..6 {
            catalog = catalog.with_time(TimeSlot::new(i, format!("{}:00", 10 + i)));
        }

        for name in [
            "Lock", "Glen", "Banks", "Richards", "Shaw", "Singer", "Uther", "Tyler", "Numen",
            "Zeldin",
        ] {
            catalog = catalog.with_facilitator(Facilitator::new(name));
        }

        catalog
            .with_activity(
                Activity::new("SLA100A", 50)
                    .with_preferred(["Glen", "Lock", "Banks", "Zeldin"])
                    .with_other(["Numen", "Richards"]),
            )
            .with_activity(
                Activity::new("SLA100B", 50)
                    .with_preferred(["Glen", "Lock", "Banks", "Zeldin"])
                    .with_other(["Numen", "Richards"]),
            )
            .with_activity(
                Activity::new("SLA191A", 50)
                    .with_preferred(["Glen", "Lock", "Banks", "Zeldin"])
                    .with_other(["Numen", "Richards"]),
            )
            .with_activity(
                Activity::new("SLA191B", 50)
                    .with_preferred(["Glen", "Lock", "Banks", "Zeldin"])
                    .with_other(["Numen", "Richards"]),
            )
            .with_activity(
                Activity::new("SLA201", 50)
                    .with_preferred(["Glen", "Banks", "Zeldin", "Shaw"])
                    .with_other(["Numen", "Richards", "Singer"]),
            )
            .with_activity(
                Activity::new("SLA291", 50)
                    .with_preferred(["Lock", "Banks", "Zeldin", "Singer"])
                    .with_other(["Numen", "Richards", "Shaw", "Tyler"]),
            )
            .with_activity(
                Activity::new("SLA303", 60)
                    .with_preferred(["Glen", "Zeldin", "Banks"])
                    .with_other(["Numen", "Singer", "Shaw"]),
            )
            .with_activity(
                Activity::new("SLA304", 25)
                    .with_preferred(["Glen", "Banks", "Tyler"])
                    .with_other(["Numen", "Singer", "Shaw", "Richards", "Uther", "Zeldin"]),
            )
            .with_activity(
                Activity::new("SLA394", 20)
                    .with_preferred(["Tyler", "Singer"])
                    .with_other(["Richards", "Zeldin"]),
            )
            .with_activity(
                Activity::new("SLA449", 60)
                    .with_preferred(["Tyler", "Singer", "Shaw"])
                    .with_other(["Zeldin", "Uther"]),
            )
            .with_activity(
                Activity::new("SLA451", 100)
                    .with_preferred(["Tyler", "Singer", "Shaw"])
                    .with_other(["Zeldin", "Uther", "Richards", "Banks"]),
            )
    }
}
