/// Booking horizon when none is configured, in days.
pub const DEFAULT_HORIZON_DAYS: usize = 30;

/// Floor count when none is configured.
pub const DEFAULT_FLOORS: usize = 5;

/// Rooms per floor when none is configured.
pub const DEFAULT_ROOMS_PER_FLOOR: usize = 10;

/// Requests drained per processing pass when none is configured.
pub const DEFAULT_BATCH_LIMIT: usize = 10;

/// Construction-time knobs for the engine. Fixed for the life of an `Engine`;
/// kept as data rather than literals so the engine is testable at small scale
/// (one floor, one room, a five-day horizon).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelConfig {
    /// Days of availability tracked per room.
    pub horizon_days: usize,
    /// Floors numbered `1..=floors`.
    pub floors: usize,
    /// Rooms created per floor, split 1/3 Singles, 1/3 Doubles, remainder
    /// Suites.
    pub rooms_per_floor: usize,
    /// Default cap on requests committed per `process_batch` pass.
    pub batch_limit: usize,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            floors: DEFAULT_FLOORS,
            rooms_per_floor: DEFAULT_ROOMS_PER_FLOOR,
            batch_limit: DEFAULT_BATCH_LIMIT,
        }
    }
}
