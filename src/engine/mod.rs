mod error;
mod index;
mod mutations;
mod queries;
mod queue;

pub use error::EngineError;
pub use index::RoomIndex;
pub use queue::{HistoryLedger, RequestQueue};

use tracing::info;

use crate::config::HotelConfig;
use crate::model::{Room, RoomId, RoomType};

/// The reservation engine: ordered room index, two-tier request queue, and
/// undo-capable history ledger, mutated only through the methods in
/// `mutations.rs`. One logical caller at a time — methods take `&mut self`
/// and run to completion, so the engine boundary is the sole lock domain.
pub struct Engine {
    config: HotelConfig,
    rooms: RoomIndex,
    priority: RequestQueue,
    regular: RequestQueue,
    history: HistoryLedger,
}

impl Engine {
    /// Build the fixed inventory: for each floor, a third Singles, a third
    /// Doubles, and the remainder Suites, ids assigned from one ascending
    /// counter starting at 1. Every room starts `Ready` with a free calendar.
    pub fn new(config: HotelConfig) -> Self {
        let mut rooms = RoomIndex::new();
        let mut next_id: RoomId = 1;

        for floor in 1..=config.floors {
            let singles = config.rooms_per_floor / 3;
            let doubles = config.rooms_per_floor / 3;
            let suites = config.rooms_per_floor - singles - doubles;

            for (count, room_type) in [
                (singles, RoomType::Single),
                (doubles, RoomType::Double),
                (suites, RoomType::Suite),
            ] {
                for _ in 0..count {
                    rooms.insert(Room::new(next_id, room_type, floor, config.horizon_days));
                    next_id += 1;
                }
            }
        }

        info!(
            rooms = rooms.len(),
            floors = config.floors,
            horizon_days = config.horizon_days,
            "inventory ready"
        );

        Self {
            config,
            rooms,
            priority: RequestQueue::new(),
            regular: RequestQueue::new(),
            history: HistoryLedger::new(),
        }
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Pending requests across both tiers.
    pub fn pending(&self) -> usize {
        self.priority.len() + self.regular.len()
    }
}
