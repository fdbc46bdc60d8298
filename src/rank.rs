use core::cmp::Ordering;

/// Selection key for a free room.
///
/// Orders by utilization, then by room number reversed, so the greatest
/// `Rank` is the busiest room and among equally busy rooms the lowest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub utilization: usize,
    pub room: usize,
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.utilization
            .cmp(&other.utilization)
            .then_with(|| other.room.cmp(&self.room))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
