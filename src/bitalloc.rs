use crate::{Rank, ReserveError, RoomAllocator, Stay, HORIZON_DAYS};
use tracing::debug;

const ELEM_WIDTH: usize = 64;
const ELEM_CNT: usize = (HORIZON_DAYS + ELEM_WIDTH - 1) / ELEM_WIDTH;

#[derive(PartialOrd, PartialEq, Debug, Copy, Clone)]
struct RawIndex(usize, usize); // word, bit

impl RawIndex {
    fn from_int(x: usize) -> Self {
        RawIndex(x / ELEM_WIDTH, x % ELEM_WIDTH)
    }
}

/// Bits `lo..=hi` of one word.
fn range_mask(lo: usize, hi: usize) -> u64 {
    debug_assert!(lo <= hi && hi < ELEM_WIDTH);
    (!0u64 >> (ELEM_WIDTH - 1 - hi)) & (!0u64 << lo)
}

/// Packed occupancy of one room, one bit per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayBits([u64; ELEM_CNT]);

impl DayBits {
    pub fn new() -> Self {
        DayBits([0; ELEM_CNT])
    }

    pub fn get(&self, day: usize) -> bool {
        assert!(day < HORIZON_DAYS);
        let i = RawIndex::from_int(day);
        (self.0[i.0] >> i.1) & 1 == 1
    }

    /// `(word, mask)` pairs covering the stay, at most one per word.
    fn masks(stay: Stay) -> impl Iterator<Item = (usize, u64)> {
        let begin = RawIndex::from_int(stay.first());
        let end = RawIndex::from_int(stay.last());
        (begin.0..=end.0).map(move |w| {
            let lo = if w == begin.0 { begin.1 } else { 0 };
            let hi = if w == end.0 { end.1 } else { ELEM_WIDTH - 1 };
            (w, range_mask(lo, hi))
        })
    }

    /// Whether any day of the stay is booked.
    pub fn any_in(&self, stay: Stay) -> bool {
        Self::masks(stay).any(|(w, mask)| self.0[w] & mask != 0)
    }

    pub fn set_range(&mut self, stay: Stay) {
        for (w, mask) in Self::masks(stay) {
            self.0[w] |= mask;
        }
    }

    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Bitmap allocator with a per-room count of booked days.
///
/// `utilization[room]` is only ever bumped by the length of a committed stay
/// and always equals `occupied[room].count_ones()`.
pub struct BitmapAllocator {
    occupied: Vec<DayBits>,
    utilization: Vec<usize>,
}

impl RoomAllocator for BitmapAllocator {
    fn new(rooms: usize) -> Self {
        assert!(rooms > 0);
        BitmapAllocator {
            occupied: vec![DayBits::new(); rooms],
            utilization: vec![0; rooms],
        }
    }

    fn rooms(&self) -> usize {
        self.occupied.len()
    }

    fn is_occupied(&self, room: usize, day: usize) -> bool {
        assert!(room < self.rooms());
        self.occupied[room].get(day)
    }

    fn utilization(&self, room: usize) -> usize {
        assert!(room < self.rooms());
        self.utilization[room]
    }

    fn assign(&mut self, start: i64, end: i64) -> Result<usize, ReserveError> {
        let stay = Stay::new(start, end)?;
        let best = (0..self.rooms())
            .filter(|&room| !self.occupied[room].any_in(stay))
            .map(|room| Rank {
                utilization: self.utilization[room],
                room,
            })
            .max();
        let room = match best {
            Some(best) => best.room,
            None => {
                debug!(start, end, "no free room");
                return Err(stay.no_capacity());
            }
        };
        self.occupied[room].set_range(stay);
        self.utilization[room] += stay.nights();
        debug!(room, start, end, utilization = self.utilization[room], "stay accepted");
        Ok(room)
    }
}
