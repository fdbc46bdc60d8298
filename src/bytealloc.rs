use crate::{Rank, ReserveError, RoomAllocator, Stay, HORIZON_DAYS};
use tracing::debug;

/// One `bool` per room and day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTable {
    occupied: Vec<[bool; HORIZON_DAYS]>,
}

impl DayTable {
    pub fn new(rooms: usize) -> Self {
        assert!(rooms > 0);
        DayTable {
            occupied: vec![[false; HORIZON_DAYS]; rooms],
        }
    }

    pub fn rooms(&self) -> usize {
        self.occupied.len()
    }

    pub fn get(&self, room: usize, day: usize) -> bool {
        assert!(room < self.rooms());
        assert!(day < HORIZON_DAYS);
        self.occupied[room][day]
    }

    pub fn is_free(&self, room: usize, stay: Stay) -> bool {
        let days = &self.occupied[room];
        for d in stay.days() {
            if days[d] {
                return false;
            }
        }
        true
    }

    /// Recount booked days over the whole horizon.
    pub fn count(&self, room: usize) -> usize {
        self.occupied[room].iter().filter(|&&b| b).count()
    }

    pub fn mark(&mut self, room: usize, stay: Stay) {
        let days = &mut self.occupied[room];
        for d in stay.days() {
            days[d] = true;
        }
    }

    pub fn free_rooms(&self, stay: Stay) -> Vec<usize> {
        (0..self.rooms()).filter(|&r| self.is_free(r, stay)).collect()
    }
}

/// Brute-force allocator: rescans every day of every room on each booking.
pub struct DenseAllocator {
    table: DayTable,
}

impl RoomAllocator for DenseAllocator {
    fn new(rooms: usize) -> Self {
        DenseAllocator {
            table: DayTable::new(rooms),
        }
    }

    fn rooms(&self) -> usize {
        self.table.rooms()
    }

    fn is_occupied(&self, room: usize, day: usize) -> bool {
        self.table.get(room, day)
    }

    fn utilization(&self, room: usize) -> usize {
        assert!(room < self.rooms());
        self.table.count(room)
    }

    fn assign(&mut self, start: i64, end: i64) -> Result<usize, ReserveError> {
        let stay = Stay::new(start, end)?;
        let mut best: Option<Rank> = None;
        for room in self.table.free_rooms(stay) {
            let rank = Rank {
                utilization: self.table.count(room),
                room,
            };
            if best.map_or(true, |b| rank > b) {
                best = Some(rank);
            }
        }
        let best = match best {
            Some(best) => best,
            None => {
                debug!(start, end, "no free room");
                return Err(stay.no_capacity());
            }
        };
        self.table.mark(best.room, stay);
        debug!(room = best.room, start, end, utilization = best.utilization + stay.nights(), "stay accepted");
        Ok(best.room)
    }
}
