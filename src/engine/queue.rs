use std::collections::VecDeque;

use crate::model::{BookingIntent, HistoryEntry};

/// Strict FIFO queue of pending requests. Priority is expressed by which of
/// the engine's two instances a request lands in, never by ordering within
/// one. Each request is owned here from enqueue until the single dequeue
/// that processes it.
#[derive(Debug, Default)]
pub struct RequestQueue {
    requests: VecDeque<BookingIntent>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self {
            requests: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, request: BookingIntent) {
        self.requests.push_back(request);
    }

    pub fn dequeue(&mut self) -> Option<BookingIntent> {
        self.requests.pop_front()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Head-to-tail, for reporting only.
    pub fn iter(&self) -> impl Iterator<Item = &BookingIntent> {
        self.requests.iter()
    }
}

/// Strict LIFO record of committed bookings. Undo always targets the top —
/// there is no selective cancellation by id or name.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent first, for reporting and check-in lookup.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoomType, Stay};

    fn intent(customer: &str) -> BookingIntent {
        BookingIntent {
            customer: customer.into(),
            room_type: RoomType::Single,
            floor: 1,
            stay: Stay::new(0, 1),
            priority: false,
        }
    }

    fn entry(customer: &str, room_id: u32) -> HistoryEntry {
        HistoryEntry {
            customer: customer.into(),
            room_id,
            room_type: RoomType::Single,
            stay: Stay::new(0, 1),
        }
    }

    #[test]
    fn queue_is_fifo() {
        let mut q = RequestQueue::new();
        q.enqueue(intent("a"));
        q.enqueue(intent("b"));
        q.enqueue(intent("c"));
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue().unwrap().customer, "a");
        assert_eq!(q.dequeue().unwrap().customer, "b");
        assert_eq!(q.dequeue().unwrap().customer, "c");
        assert!(q.dequeue().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn ledger_is_lifo() {
        let mut ledger = HistoryLedger::new();
        ledger.push(entry("a", 1));
        ledger.push(entry("b", 2));
        let top_down: Vec<_> = ledger.iter_top_down().map(|e| e.room_id).collect();
        assert_eq!(top_down, vec![2, 1]);
        assert_eq!(ledger.pop().unwrap().customer, "b");
        assert_eq!(ledger.pop().unwrap().customer, "a");
        assert!(ledger.pop().is_none());
    }
}
