//! End-to-end exercises through the public API only — what the presentation
//! layer actually sees.

use frontdesk::config::HotelConfig;
use frontdesk::model::{BatchOutcome, BookingIntent, RoomStatus, RoomType, Stay};
use frontdesk::{Engine, EngineError};

fn intent(customer: &str, room_type: RoomType, floor: usize, check_in: usize, nights: usize, priority: bool) -> BookingIntent {
    BookingIntent {
        customer: customer.into(),
        room_type,
        floor,
        stay: Stay::new(check_in, nights),
        priority,
    }
}

#[test]
fn booking_lifecycle_over_public_api() {
    let mut engine = Engine::new(HotelConfig {
        horizon_days: 30,
        floors: 1,
        rooms_per_floor: 3,
        batch_limit: 10,
    });

    // Alice books the only Single for days 5-6.
    let accepted = engine
        .submit(intent("Alice", RoomType::Single, 1, 5, 2, false))
        .unwrap();
    assert_eq!(accepted.room_id, 1);

    let report = engine.process_batch(1);
    assert!(matches!(
        report.outcomes[0],
        BatchOutcome::Confirmed { room_id: 1, floor: 1, .. }
    ));
    assert_eq!(
        engine.list_rooms_in_order()[0].status,
        RoomStatus::Booked
    );

    // Bob overlaps day 5 — no room, discarded.
    assert!(matches!(
        engine.submit(intent("Bob", RoomType::Single, 1, 5, 1, false)),
        Err(EngineError::NoRoomAvailable { .. })
    ));

    // Undo frees the room; Bob can now book and commit it.
    let reverted = engine.undo_last().unwrap();
    assert_eq!(reverted.customer, "Alice");
    assert_eq!(engine.list_rooms_in_order()[0].status, RoomStatus::Ready);

    engine
        .submit(intent("Bob", RoomType::Single, 1, 5, 1, false))
        .unwrap();
    let report = engine.process_batch(10);
    assert!(matches!(
        report.outcomes[0],
        BatchOutcome::Confirmed { room_id: 1, .. }
    ));

    // Bob arrives.
    let checked = engine.check_in("Bob").unwrap();
    assert_eq!(checked.room_id, 1);
    assert_eq!(engine.list_rooms_in_order()[0].status, RoomStatus::Occupied);
    assert!(matches!(
        engine.check_in("Bob"),
        Err(EngineError::AlreadyOccupied(1))
    ));
}

#[test]
fn priority_tier_wins_contended_room() {
    let mut engine = Engine::new(HotelConfig {
        horizon_days: 10,
        floors: 1,
        rooms_per_floor: 3,
        batch_limit: 10,
    });

    // Two requests for the one Single, same dates; the regular one arrived
    // first but the priority one must get the room.
    engine
        .submit(intent("walk-in", RoomType::Single, 1, 2, 3, false))
        .unwrap();
    engine
        .submit(intent("member", RoomType::Single, 1, 2, 3, true))
        .unwrap();

    let report = engine.process_batch(10);
    assert_eq!(report.outcomes.len(), 2);
    assert!(matches!(
        &report.outcomes[0],
        BatchOutcome::Confirmed { customer, .. } if customer == "member"
    ));
    assert!(matches!(
        &report.outcomes[1],
        BatchOutcome::Failed { customer, .. } if customer == "walk-in"
    ));
}
