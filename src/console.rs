//! Line-oriented console over the engine's public operations. Holds the only
//! engine reference; everything it knows it reads through the reporting
//! hooks.

use std::io::{self, BufRead, Write};

use crate::engine::Engine;
use crate::model::{
    BatchOutcome, BookingIntent, HistoryEntry, QueuedRequests, RoomInfo, RoomType, Stay,
};

const HELP: &str = "\
commands:
  book <name> <single|double|suite> <floor> <check-in-day> <nights> [priority]
  process [limit]      drain queued requests (priority first)
  undo                 revert the most recent booking
  checkin <name>       mark the customer's room occupied
  rooms                room status, ascending id
  floor <n>            rooms on one floor
  queue                pending requests
  history              committed bookings, most recent first
  snapshot             full state as JSON
  quit
customer names are single tokens (no spaces)";

/// Read commands from stdin until EOF or `quit`.
pub fn run(engine: &mut Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "frontdesk — type `help` for commands")?;

    loop {
        write!(stdout, "frontdesk> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match dispatch(engine, line) {
            Ok(output) => writeln!(stdout, "{output}")?,
            Err(message) => writeln!(stdout, "error: {message}")?,
        }
    }
    Ok(())
}

fn dispatch(engine: &mut Engine, line: &str) -> Result<String, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[0] {
        "help" => Ok(HELP.to_string()),
        "rooms" => Ok(render_rooms(&engine.list_rooms_in_order())),
        "floor" => {
            let floor = parse_arg(&tokens, 1, "floor number")?;
            Ok(render_rooms(&engine.list_rooms_on_floor(floor)))
        }
        "queue" => Ok(render_queue(&engine.list_queued())),
        "history" => Ok(render_history(&engine.list_history())),
        "book" => book(engine, &tokens),
        "process" => {
            let limit = match tokens.get(1) {
                Some(_) => parse_arg(&tokens, 1, "limit")?,
                None => engine.config().batch_limit,
            };
            Ok(render_batch(engine.process_batch(limit)))
        }
        "undo" => match engine.undo_last() {
            Some(reverted) => Ok(format!(
                "reverted booking for {}: room {}, {} night(s)",
                reverted.customer, reverted.room_id, reverted.nights
            )),
            None => Ok("no bookings to cancel".to_string()),
        },
        "checkin" => {
            let name = tokens.get(1).copied().ok_or("usage: checkin <name>")?;
            let checked = engine.check_in(name).map_err(|e| e.to_string())?;
            Ok(format!(
                "checked in {name}: room {}, floor {}, {} for {} night(s)",
                checked.room_id, checked.floor, checked.room_type, checked.nights
            ))
        }
        "snapshot" => serde_json::to_string_pretty(&engine.snapshot()).map_err(|e| e.to_string()),
        other => Err(format!("unknown command `{other}` — try `help`")),
    }
}

fn book(engine: &mut Engine, tokens: &[&str]) -> Result<String, String> {
    if tokens.len() < 6 {
        return Err("usage: book <name> <single|double|suite> <floor> <check-in-day> <nights> [priority]".into());
    }
    let intent = BookingIntent {
        customer: tokens[1].to_string(),
        room_type: parse_room_type(tokens[2])?,
        floor: parse_arg(tokens, 3, "floor number")?,
        stay: Stay {
            check_in: parse_arg(tokens, 4, "check-in day")?,
            nights: parse_arg(tokens, 5, "nights")?,
        },
        priority: tokens.get(6) == Some(&"priority"),
    };
    let accepted = engine.submit(intent).map_err(|e| e.to_string())?;
    Ok(format!(
        "request queued — candidate room {}, floor {}, {}",
        accepted.room_id, accepted.floor, accepted.room_type
    ))
}

fn parse_room_type(token: &str) -> Result<RoomType, String> {
    match token.to_ascii_lowercase().as_str() {
        "single" => Ok(RoomType::Single),
        "double" => Ok(RoomType::Double),
        "suite" => Ok(RoomType::Suite),
        other => Err(format!("unknown room type `{other}`")),
    }
}

fn parse_arg<T: std::str::FromStr>(tokens: &[&str], pos: usize, what: &str) -> Result<T, String> {
    tokens
        .get(pos)
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| format!("expected {what} at position {pos}"))
}

// ── Table rendering ──────────────────────────────────────────────

fn render_rooms(rooms: &[RoomInfo]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}{:<12}{:<8}{:<12}\n",
        "Room ID", "Type", "Floor", "Status"
    ));
    out.push_str(&"-".repeat(42));
    for room in rooms {
        out.push_str(&format!(
            "\n{:<10}{:<12}{:<8}{:<12}",
            room.id,
            room.room_type.label(),
            room.floor,
            room.status.label()
        ));
    }
    if rooms.is_empty() {
        out.push_str("\n(no rooms)");
    }
    out
}

fn render_queue(queued: &QueuedRequests) -> String {
    let mut out = String::new();
    out.push_str("high-priority requests:\n");
    out.push_str(&render_requests(&queued.priority));
    out.push_str("\nregular requests:\n");
    out.push_str(&render_requests(&queued.regular));
    out
}

fn render_requests(requests: &[BookingIntent]) -> String {
    if requests.is_empty() {
        return "  (none)".to_string();
    }
    requests
        .iter()
        .map(|r| {
            format!(
                "  {:<20}{:<12}floor {:<4}day {:<4}{} night(s)",
                r.customer,
                r.room_type.label(),
                r.floor,
                r.stay.check_in,
                r.stay.nights
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "no bookings in the history".to_string();
    }
    let mut out = format!(
        "{:<20}{:<10}{:<12}{:<10}{:<8}\n",
        "Customer", "Room ID", "Type", "Check-in", "Nights"
    );
    out.push_str(&"-".repeat(60));
    for entry in entries {
        out.push_str(&format!(
            "\n{:<20}{:<10}{:<12}{:<10}{:<8}",
            entry.customer,
            entry.room_id,
            entry.room_type.label(),
            entry.stay.check_in,
            entry.stay.nights
        ));
    }
    out
}

fn render_batch(report: crate::model::BatchReport) -> String {
    if report.nothing_to_process() {
        return "no requests to process".to_string();
    }
    report
        .outcomes
        .into_iter()
        .map(|outcome| match outcome {
            BatchOutcome::Confirmed {
                customer,
                room_id,
                floor,
                stay,
            } => format!(
                "confirmed {customer}: room {room_id}, floor {floor}, day {}, {} night(s)",
                stay.check_in, stay.nights
            ),
            BatchOutcome::Failed { customer, floor } => {
                format!("no available room for {customer} on floor {floor}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
