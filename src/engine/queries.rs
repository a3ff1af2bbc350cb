use crate::model::*;

use super::Engine;

/// Read-only reporting hooks for the presentation layer. All are pure
/// traversals — calling one twice with no intervening mutation returns
/// identical sequences.
impl Engine {
    /// Every room, ascending id.
    pub fn list_rooms_in_order(&self) -> Vec<RoomInfo> {
        self.rooms.iter().map(room_info).collect()
    }

    /// Rooms on one floor, ascending id.
    pub fn list_rooms_on_floor(&self, floor: usize) -> Vec<RoomInfo> {
        self.rooms.iter_floor(floor).map(room_info).collect()
    }

    /// Pending requests, FIFO order within each tier.
    pub fn list_queued(&self) -> QueuedRequests {
        QueuedRequests {
            priority: self.priority.iter().cloned().collect(),
            regular: self.regular.iter().cloned().collect(),
        }
    }

    /// Active commits, most recent first.
    pub fn list_history(&self) -> Vec<HistoryEntry> {
        self.history.iter_top_down().cloned().collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rooms: self.list_rooms_in_order(),
            queued: self.list_queued(),
            history: self.list_history(),
        }
    }
}

fn room_info(room: &Room) -> RoomInfo {
    RoomInfo {
        id: room.id,
        room_type: room.room_type,
        floor: room.floor,
        status: room.status,
    }
}
