use serde::Serialize;

/// Day offset within the booking horizon — the only time type.
pub type Day = usize;

/// Room identifier. Dense, assigned `1..=N` in ascending order at
/// construction, never reused.
pub type RoomId = u32;

/// Half-open stay `[check_in, check_in + nights)`, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stay {
    pub check_in: Day,
    pub nights: usize,
}

impl Stay {
    pub fn new(check_in: Day, nights: usize) -> Self {
        Self { check_in, nights }
    }

    /// First day after the stay.
    pub fn end(&self) -> Day {
        self.check_in + self.nights
    }

    pub fn days(&self) -> std::ops::Range<Day> {
        self.check_in..self.end()
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.end() && other.check_in < self.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Engine-owned room lifecycle: `Ready → Booked → Occupied`, with
/// `Booked → Ready` on undo. `Unavailable` marks an administratively
/// withdrawn room; no operation here enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomStatus {
    Ready,
    Booked,
    Occupied,
    Unavailable,
}

impl RoomStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Ready => "Ready",
            RoomStatus::Booked => "Booked",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Unavailable => "Unavailable",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-room occupancy over the horizon. A slot is free exactly when no
/// active booking covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// `true` = free.
    slots: Vec<bool>,
}

impl Calendar {
    pub fn new(horizon_days: usize) -> Self {
        Self {
            slots: vec![true; horizon_days],
        }
    }

    pub fn horizon(&self) -> usize {
        self.slots.len()
    }

    /// True iff every slot the stay covers is free. Fails closed when the
    /// stay runs past the horizon. No side effects.
    pub fn is_available(&self, stay: &Stay) -> bool {
        if stay.end() > self.slots.len() {
            return false;
        }
        self.slots[stay.days()].iter().all(|&free| free)
    }

    /// Mark the stay's range held. The caller has already verified
    /// `is_available`; there is no re-check here — the engine is the sole
    /// synchronization point.
    pub fn hold(&mut self, stay: &Stay) {
        debug_assert!(stay.end() <= self.slots.len(), "hold past horizon");
        for day in stay.days() {
            self.slots[day] = false;
        }
    }

    /// Free exactly the stay's range. Used only by undo, with the stay taken
    /// from the history entry that recorded the original hold.
    pub fn release(&mut self, stay: &Stay) {
        debug_assert!(stay.end() <= self.slots.len(), "release past horizon");
        for day in stay.days() {
            self.slots[day] = true;
        }
    }

    pub fn is_free(&self, day: Day) -> bool {
        self.slots.get(day).copied().unwrap_or(false)
    }

    /// Number of held slots.
    pub fn held_days(&self) -> usize {
        self.slots.iter().filter(|&&free| !free).count()
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub room_type: RoomType,
    pub floor: usize,
    pub status: RoomStatus,
    pub calendar: Calendar,
}

impl Room {
    pub fn new(id: RoomId, room_type: RoomType, floor: usize, horizon_days: usize) -> Self {
        Self {
            id,
            room_type,
            floor,
            status: RoomStatus::Ready,
            calendar: Calendar::new(horizon_days),
        }
    }
}

/// What a caller asks for. Validated and either queued or discarded by
/// `submit`; the queue owns the accepted copy until processing consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingIntent {
    pub customer: String,
    pub room_type: RoomType,
    pub floor: usize,
    pub stay: Stay,
    pub priority: bool,
}

/// One committed booking, retained for LIFO undo. The full stay is kept so
/// undo can release exactly the range that was held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub customer: String,
    pub room_id: RoomId,
    pub room_type: RoomType,
    pub stay: Stay,
}

// ── Operation outcomes ───────────────────────────────────────────

/// A queued submission. The room id is advisory — availability is
/// re-searched at processing time, so the commit may land on a different
/// room (or fail) if intervening commits consumed this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accepted {
    pub room_id: RoomId,
    pub floor: usize,
    pub room_type: RoomType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BatchOutcome {
    Confirmed {
        customer: String,
        room_id: RoomId,
        floor: usize,
        stay: Stay,
    },
    /// The request no longer had a qualifying room at processing time. It is
    /// dropped, not re-queued.
    Failed { customer: String, floor: usize },
}

/// Result of one `process_batch` pass, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// True when both queues were already empty.
    pub fn nothing_to_process(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reverted {
    pub customer: String,
    pub room_id: RoomId,
    pub nights: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedIn {
    pub room_id: RoomId,
    pub floor: usize,
    pub room_type: RoomType,
    pub nights: usize,
}

// ── Reporting snapshots ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomInfo {
    pub id: RoomId,
    pub room_type: RoomType,
    pub floor: usize,
    pub status: RoomStatus,
}

/// Pending requests, FIFO order within each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueuedRequests {
    pub priority: Vec<BookingIntent>,
    pub regular: Vec<BookingIntent>,
}

/// Full read-only view of engine state for external tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub rooms: Vec<RoomInfo>,
    pub queued: QueuedRequests,
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stay_basics() {
        let s = Stay::new(5, 2);
        assert_eq!(s.end(), 7);
        assert_eq!(s.days().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn zero_night_stay_constructs_and_covers_nothing() {
        // Validation lives in the engine; construction must not reject.
        let s = Stay::new(5, 0);
        assert_eq!(s.end(), 5);
        assert_eq!(s.days().count(), 0);
    }

    #[test]
    fn stay_overlap() {
        let a = Stay::new(5, 2);
        let b = Stay::new(6, 3);
        let c = Stay::new(7, 1);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // adjacent, not overlapping
    }

    #[test]
    fn calendar_starts_free() {
        let cal = Calendar::new(30);
        assert_eq!(cal.horizon(), 30);
        assert_eq!(cal.held_days(), 0);
        assert!(cal.is_available(&Stay::new(0, 30)));
    }

    #[test]
    fn calendar_fails_closed_past_horizon() {
        let cal = Calendar::new(30);
        assert!(!cal.is_available(&Stay::new(29, 2)));
        assert!(!cal.is_available(&Stay::new(30, 1)));
    }

    #[test]
    fn calendar_hold_blocks_overlap_only() {
        let mut cal = Calendar::new(30);
        cal.hold(&Stay::new(5, 2));
        assert!(!cal.is_free(5));
        assert!(!cal.is_free(6));
        assert!(cal.is_free(7));
        assert!(!cal.is_available(&Stay::new(6, 1)));
        assert!(cal.is_available(&Stay::new(7, 3)));
        assert!(cal.is_available(&Stay::new(0, 5)));
    }

    #[test]
    fn calendar_release_frees_exact_range() {
        let mut cal = Calendar::new(30);
        let early = Stay::new(1, 2);
        let late = Stay::new(5, 2);
        cal.hold(&early);
        cal.hold(&late);
        cal.release(&late);
        // The early hold is untouched; only [5, 7) came back.
        assert!(!cal.is_free(1));
        assert!(!cal.is_free(2));
        assert!(cal.is_free(5));
        assert!(cal.is_free(6));
        assert_eq!(cal.held_days(), 2);
    }

    #[test]
    fn is_free_out_of_range() {
        let cal = Calendar::new(5);
        assert!(!cal.is_free(5));
    }

    #[test]
    fn room_starts_ready() {
        let room = Room::new(7, RoomType::Suite, 2, 30);
        assert_eq!(room.status, RoomStatus::Ready);
        assert_eq!(room.calendar.horizon(), 30);
        assert_eq!(room.floor, 2);
    }

    #[test]
    fn labels() {
        assert_eq!(RoomType::Double.to_string(), "Double");
        assert_eq!(RoomStatus::Unavailable.to_string(), "Unavailable");
    }

    #[test]
    fn snapshot_serializes() {
        let snap = Snapshot {
            rooms: vec![RoomInfo {
                id: 1,
                room_type: RoomType::Single,
                floor: 1,
                status: RoomStatus::Ready,
            }],
            queued: QueuedRequests {
                priority: vec![],
                regular: vec![],
            },
            history: vec![],
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["rooms"][0]["id"], 1);
        assert_eq!(json["rooms"][0]["status"], "Ready");
    }
}
