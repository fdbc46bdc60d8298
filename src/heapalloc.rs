use crate::{DayTable, Rank, ReserveError, RoomAllocator, Stay};
use std::collections::BinaryHeap;
use tracing::debug;

/// Day table allocator that ranks free rooms through a max-heap.
pub struct HeapAllocator {
    table: DayTable,
}

impl RoomAllocator for HeapAllocator {
    fn new(rooms: usize) -> Self {
        HeapAllocator {
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
        let heap: BinaryHeap<Rank> = self
            .table
            .free_rooms(stay)
            .into_iter()
            .map(|room| Rank {
                utilization: self.table.count(room),
                room,
            })
            .collect();
        let top = match heap.peek() {
            Some(&top) => top,
            None => {
                debug!(start, end, "no free room");
                return Err(stay.no_capacity());
            }
        };
        self.table.mark(top.room, stay);
        debug!(
            room = top.room,
            start,
            end,
            candidates = heap.len(),
            utilization = top.utilization + stay.nights(),
            "stay accepted"
        );
        Ok(top.room)
    }
}
