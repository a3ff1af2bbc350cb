use crate::model::{RoomId, RoomType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed intent — rejected at submission, never queued.
    InvalidRequest(&'static str),
    /// No qualifying room at submission time; the intent is discarded.
    NoRoomAvailable { room_type: RoomType, floor: usize },
    /// No history entry matches the customer name.
    CheckInNotFound(String),
    /// The matched booking's room is already occupied.
    AlreadyOccupied(RoomId),
    /// A history entry names a room the index does not hold.
    RoomMissing(RoomId),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidRequest(reason) => write!(f, "invalid request: {reason}"),
            EngineError::NoRoomAvailable { room_type, floor } => {
                write!(f, "no available {room_type} room on floor {floor}")
            }
            EngineError::CheckInNotFound(customer) => {
                write!(f, "no booking found for customer: {customer}")
            }
            EngineError::AlreadyOccupied(id) => write!(f, "room {id} is already occupied"),
            EngineError::RoomMissing(id) => write!(f, "room {id} missing from index"),
        }
    }
}

impl std::error::Error for EngineError {}
