use std::collections::BTreeMap;

use crate::model::{Room, RoomId, RoomStatus, RoomType, Stay};

/// Ordered room collection keyed by room id.
///
/// The search contract is ascending-id traversal with lowest-id-wins
/// tie-breaking. Rooms are created in ascending id order, which would
/// degenerate an unbalanced search tree into a chain, so storage is a
/// `BTreeMap`: same traversal order, O(log n) lookup.
#[derive(Debug, Default)]
pub struct RoomIndex {
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomIndex {
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, room: Room) {
        debug_assert!(!self.rooms.contains_key(&room.id), "duplicate room id");
        self.rooms.insert(room.id, room);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    /// First `Ready` room in ascending-id order matching floor and type whose
    /// calendar is free for the whole stay. Linear scan — the inventory is
    /// small and bounded, and there is no pruning by floor or type.
    pub fn find_available(&self, room_type: RoomType, floor: usize, stay: &Stay) -> Option<&Room> {
        self.rooms.values().find(|room| {
            room.floor == floor
                && room.room_type == room_type
                && room.status == RoomStatus::Ready
                && room.calendar.is_available(stay)
        })
    }

    /// Same search, but yields the room mutably for the commit path.
    pub fn find_available_mut(
        &mut self,
        room_type: RoomType,
        floor: usize,
        stay: &Stay,
    ) -> Option<&mut Room> {
        self.rooms.values_mut().find(|room| {
            room.floor == floor
                && room.room_type == room_type
                && room.status == RoomStatus::Ready
                && room.calendar.is_available(stay)
        })
    }

    /// All rooms, ascending id.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Rooms on one floor, ascending id.
    pub fn iter_floor(&self, floor: usize) -> impl Iterator<Item = &Room> {
        self.rooms.values().filter(move |room| room.floor == floor)
    }
}
