use tracing::{debug, info, warn};

use crate::limits::*;
use crate::model::*;
use crate::observability;

use super::{Engine, EngineError};

impl Engine {
    /// Validate a booking intent and, if some room could serve it today,
    /// queue it for a later processing pass. The room reported back is
    /// advisory: availability is re-searched at processing time, because
    /// commits between submission and processing may consume it.
    pub fn submit(&mut self, intent: BookingIntent) -> Result<Accepted, EngineError> {
        self.validate(&intent)?;

        let Some(room) = self
            .rooms
            .find_available(intent.room_type, intent.floor, &intent.stay)
        else {
            metrics::counter!(observability::SUBMITS_REJECTED_TOTAL).increment(1);
            return Err(EngineError::NoRoomAvailable {
                room_type: intent.room_type,
                floor: intent.floor,
            });
        };
        let accepted = Accepted {
            room_id: room.id,
            floor: intent.floor,
            room_type: intent.room_type,
        };

        debug!(
            customer = %intent.customer,
            room = accepted.room_id,
            priority = intent.priority,
            "request queued"
        );
        if intent.priority {
            self.priority.enqueue(intent);
        } else {
            self.regular.enqueue(intent);
        }
        metrics::counter!(observability::SUBMITS_TOTAL).increment(1);
        metrics::gauge!(observability::QUEUE_DEPTH).set(self.pending() as f64);

        Ok(accepted)
    }

    /// One bounded processing pass: drain the priority queue first, then the
    /// regular queue, committing up to `limit` requests total. Each request
    /// is single-pass — a miss drops it permanently.
    pub fn process_batch(&mut self, limit: usize) -> BatchReport {
        let limit = limit.min(MAX_BATCH_LIMIT);
        let mut outcomes = Vec::new();

        while outcomes.len() < limit {
            let Some(request) = self.priority.dequeue().or_else(|| self.regular.dequeue())
            else {
                break;
            };
            outcomes.push(self.commit_request(request));
        }

        if outcomes.is_empty() {
            debug!("no requests to process");
        }
        metrics::gauge!(observability::QUEUE_DEPTH).set(self.pending() as f64);

        BatchReport { outcomes }
    }

    /// Commit a dequeued request, or drop it if no room qualifies anymore.
    /// A commit is all-or-nothing: calendar hold, status change, and ledger
    /// push happen together or not at all.
    fn commit_request(&mut self, request: BookingIntent) -> BatchOutcome {
        let Some(room) =
            self.rooms
                .find_available_mut(request.room_type, request.floor, &request.stay)
        else {
            warn!(
                customer = %request.customer,
                floor = request.floor,
                "request dropped: no room available at processing time"
            );
            metrics::counter!(observability::PROCESSING_MISSES_TOTAL).increment(1);
            return BatchOutcome::Failed {
                customer: request.customer,
                floor: request.floor,
            };
        };

        room.calendar.hold(&request.stay);
        room.status = RoomStatus::Booked;
        let room_id = room.id;
        let floor = room.floor;
        let room_type = room.room_type;

        self.history.push(HistoryEntry {
            customer: request.customer.clone(),
            room_id,
            room_type,
            stay: request.stay,
        });

        info!(
            customer = %request.customer,
            room = room_id,
            check_in = request.stay.check_in,
            nights = request.stay.nights,
            "booking confirmed"
        );
        metrics::counter!(observability::COMMITS_TOTAL).increment(1);

        BatchOutcome::Confirmed {
            customer: request.customer,
            room_id,
            floor,
            stay: request.stay,
        }
    }

    /// Revert the most recent still-active commit: free exactly the range
    /// the history entry recorded and set the room back to `Ready`. Returns
    /// `None` when there is nothing to undo.
    pub fn undo_last(&mut self) -> Option<Reverted> {
        let entry = self.history.pop()?;

        match self.rooms.get_mut(entry.room_id) {
            Some(room) => {
                room.calendar.release(&entry.stay);
                room.status = RoomStatus::Ready;
                info!(
                    customer = %entry.customer,
                    room = entry.room_id,
                    nights = entry.stay.nights,
                    "booking reverted"
                );
            }
            // Should not happen given the construction invariants; the entry
            // is consumed either way so the ledger cannot wedge.
            None => warn!(room = entry.room_id, "undo target room missing from index"),
        }
        metrics::counter!(observability::UNDOS_TOTAL).increment(1);

        Some(Reverted {
            customer: entry.customer,
            room_id: entry.room_id,
            nights: entry.stay.nights,
        })
    }

    /// Move the room of the customer's most recent booking to `Occupied`.
    /// A status transition only: the history entry stays on the ledger, and
    /// no check is made that the stay has actually begun.
    pub fn check_in(&mut self, customer: &str) -> Result<CheckedIn, EngineError> {
        let entry = self
            .history
            .iter_top_down()
            .find(|entry| entry.customer == customer)
            .ok_or_else(|| EngineError::CheckInNotFound(customer.to_string()))?;
        let room_id = entry.room_id;
        let nights = entry.stay.nights;

        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or(EngineError::RoomMissing(room_id))?;
        if room.status == RoomStatus::Occupied {
            return Err(EngineError::AlreadyOccupied(room_id));
        }
        room.status = RoomStatus::Occupied;

        info!(customer = %customer, room = room_id, "checked in");
        metrics::counter!(observability::CHECKINS_TOTAL).increment(1);

        Ok(CheckedIn {
            room_id,
            floor: room.floor,
            room_type: room.room_type,
            nights,
        })
    }

    fn validate(&self, intent: &BookingIntent) -> Result<(), EngineError> {
        if intent.customer.is_empty() {
            return Err(EngineError::InvalidRequest("customer name is empty"));
        }
        if intent.customer.len() > MAX_CUSTOMER_NAME_LEN {
            return Err(EngineError::InvalidRequest("customer name too long"));
        }
        if intent.floor < 1 || intent.floor > self.config.floors {
            return Err(EngineError::InvalidRequest("floor out of range"));
        }
        if intent.stay.nights == 0 {
            return Err(EngineError::InvalidRequest("stay must be at least one night"));
        }
        if intent.stay.check_in >= self.config.horizon_days {
            return Err(EngineError::InvalidRequest("check-in day beyond horizon"));
        }
        if intent.stay.end() > self.config.horizon_days {
            return Err(EngineError::InvalidRequest("stay runs past horizon"));
        }
        Ok(())
    }
}
