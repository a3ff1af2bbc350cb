//! Hard caps on inputs. Validation rejects anything past these before it
//! touches engine state.

/// Longest accepted customer name, in bytes.
pub const MAX_CUSTOMER_NAME_LEN: usize = 64;

/// Widest calendar a room will carry.
pub const MAX_HORIZON_DAYS: usize = 366;

/// Most requests a single processing pass may drain.
pub const MAX_BATCH_LIMIT: usize = 1_000;
