//! Fixed booking sequences with expected outcomes, replayed against a fresh
//! allocator.

use crate::{Outcome, RoomAllocator};
use tracing::{debug, warn};

use Outcome::{Accept as A, Decline as D};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub rooms: usize,
    pub bookings: Vec<(i64, i64, Outcome)>,
}

/// One replayed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub start: i64,
    pub end: i64,
    pub expected: Outcome,
    pub actual: Outcome,
}

impl Booking {
    pub fn matches(&self) -> bool {
        self.expected == self.actual
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub results: Vec<Booking>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.results.iter().all(Booking::matches)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Booking> {
        self.results.iter().filter(|b| !b.matches())
    }
}

impl Scenario {
    pub fn new(name: impl Into<String>, rooms: usize, bookings: Vec<(i64, i64, Outcome)>) -> Self {
        Scenario {
            name: name.into(),
            rooms,
            bookings,
        }
    }

    pub fn run<R: RoomAllocator>(&self) -> Report {
        let mut allocator = R::new(self.rooms);
        let mut results = Vec::with_capacity(self.bookings.len());
        for (n, &(start, end, expected)) in self.bookings.iter().enumerate() {
            let actual = allocator.reserve(start, end);
            debug!(scenario = %self.name, booking = n + 1, start, end, ?actual, "booking replayed");
            if actual != expected {
                warn!(scenario = %self.name, booking = n + 1, start, end, ?expected, ?actual, "unexpected outcome");
            }
            results.push(Booking {
                start,
                end,
                expected,
                actual,
            });
        }
        Report {
            name: self.name.clone(),
            results,
        }
    }

    /// The hotel reference bookings.
    pub fn reference_suite() -> Vec<Scenario> {
        vec![
            Scenario::new("Test 1a", 1, vec![(-4, 2, D)]),
            Scenario::new("Test 1b", 1, vec![(200, 400, D)]),
            Scenario::new(
                "Test 2",
                3,
                vec![(0, 5, A), (7, 13, A), (3, 9, A), (5, 7, A), (6, 6, A), (0, 4, A)],
            ),
            Scenario::new("Test 3", 3, vec![(1, 3, A), (2, 5, A), (1, 9, A), (0, 15, D)]),
            Scenario::new("Test 4", 3, vec![(1, 3, A), (0, 15, A), (1, 9, A), (2, 5, D), (4, 9, A)]),
            Scenario::new(
                "Test 5",
                2,
                vec![
                    (1, 3, A),
                    (0, 4, A),
                    (2, 3, D),
                    (5, 5, A),
                    (4, 10, A),
                    (10, 10, A),
                    (6, 7, A),
                    (8, 10, D),
                    (8, 9, A),
                ],
            ),
        ]
    }
}
