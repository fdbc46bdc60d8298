//! Hotel room allocation over a fixed one-year horizon.
//!
//! Every allocator accepts or declines `(start, end)` stays one at a time and
//! puts an accepted stay on the free room with the most booked days, lowest
//! room number first on ties. Three interchangeable implementations exist:
//!
//! - [`DenseAllocator`]: a `bool` per room and day, linear max-scan.
//! - [`HeapAllocator`]: the same table, selection through a max-heap.
//! - [`BitmapAllocator`]: a packed bitmap per room plus cached utilization.

mod bitalloc;
mod bytealloc;
mod heapalloc;
mod rank;
pub mod scenario;

pub use bitalloc::{BitmapAllocator, DayBits};
pub use bytealloc::{DayTable, DenseAllocator};
pub use heapalloc::HeapAllocator;
pub use rank::Rank;

use core::ops::RangeInclusive;
use spin::Mutex;
use thiserror::Error;
use tracing::trace;

/// Number of plannable days, 0 to 365.
pub const HORIZON_DAYS: usize = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Accept,
    Decline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    #[error("stay {start}..={end} is not a valid range within {days} days", days = HORIZON_DAYS)]
    InvalidRange { start: i64, end: i64 },
    #[error("no room is free for the whole stay {start}..={end}")]
    NoCapacity { start: i64, end: i64 },
}

/// An inclusive, validated range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stay {
    first: usize,
    last: usize,
}

impl Stay {
    pub fn new(start: i64, end: i64) -> Result<Self, ReserveError> {
        if start < 0 || end >= HORIZON_DAYS as i64 || start > end {
            trace!(start, end, "rejecting stay outside the horizon");
            return Err(ReserveError::InvalidRange { start, end });
        }
        Ok(Stay {
            first: start as usize,
            last: end as usize,
        })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of days covered, never zero.
    pub fn nights(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn days(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    fn no_capacity(&self) -> ReserveError {
        ReserveError::NoCapacity {
            start: self.first as i64,
            end: self.last as i64,
        }
    }
}

pub trait RoomAllocator {
    /// Create an allocator with `rooms` rooms, all free on every day.
    fn new(rooms: usize) -> Self
    where
        Self: Sized;

    fn rooms(&self) -> usize;

    fn is_occupied(&self, room: usize, day: usize) -> bool;

    /// Booked days of `room` over the whole horizon.
    fn utilization(&self, room: usize) -> usize;

    /// Book `start..=end` on one room and return it. On error nothing changes.
    fn assign(&mut self, start: i64, end: i64) -> Result<usize, ReserveError>;

    fn reserve(&mut self, start: i64, end: i64) -> Outcome {
        match self.assign(start, end) {
            Ok(_) => Outcome::Accept,
            Err(_) => Outcome::Decline,
        }
    }
}

/// An allocator shared between callers. Each booking runs as one critical
/// section, so the free-room search always sees the state it commits to.
pub struct Locked<A> {
    inner: Mutex<A>,
}

impl<A: RoomAllocator> Locked<A> {
    pub fn new(rooms: usize) -> Self {
        Self::from_allocator(A::new(rooms))
    }

    pub fn from_allocator(allocator: A) -> Self {
        Locked {
            inner: Mutex::new(allocator),
        }
    }

    pub fn reserve(&self, start: i64, end: i64) -> Outcome {
        self.inner.lock().reserve(start, end)
    }

    pub fn assign(&self, start: i64, end: i64) -> Result<usize, ReserveError> {
        self.inner.lock().assign(start, end)
    }

    /// Inspect the allocator while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn into_inner(self) -> A {
        self.inner.into_inner()
    }
}
