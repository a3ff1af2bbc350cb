use frontdesk::config::{
    DEFAULT_BATCH_LIMIT, DEFAULT_FLOORS, DEFAULT_HORIZON_DAYS, DEFAULT_ROOMS_PER_FLOOR,
    HotelConfig,
};
use frontdesk::limits::MAX_HORIZON_DAYS;
use frontdesk::{Engine, console, observability};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("FRONTDESK_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    observability::init(metrics_port);

    let config = HotelConfig {
        horizon_days: env_or("FRONTDESK_HORIZON_DAYS", DEFAULT_HORIZON_DAYS)
            .min(MAX_HORIZON_DAYS),
        floors: env_or("FRONTDESK_FLOORS", DEFAULT_FLOORS),
        rooms_per_floor: env_or("FRONTDESK_ROOMS_PER_FLOOR", DEFAULT_ROOMS_PER_FLOOR),
        batch_limit: env_or("FRONTDESK_BATCH_LIMIT", DEFAULT_BATCH_LIMIT),
    };
    info!(
        floors = config.floors,
        rooms_per_floor = config.rooms_per_floor,
        horizon_days = config.horizon_days,
        batch_limit = config.batch_limit,
        "starting frontdesk"
    );

    let mut engine = Engine::new(config);
    console::run(&mut engine)?;
    Ok(())
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
