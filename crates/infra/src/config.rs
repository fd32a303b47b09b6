use chrono_tz::Tz;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Timezone of the agency. Decides which calendar date "today" is
    /// when the caller does not give a reference date.
    pub timezone: Tz,
    /// Optional JSON file holding the snapshot to serve at startup
    pub snapshot_path: Option<String>,
    /// Documents and trips due within this many days count as expiring soon
    /// on the dashboard
    pub expiring_soon_days: i64,
}

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };

        let timezone = match std::env::var("TRAVEL_DESK_TIMEZONE") {
            Ok(timezone) => match timezone.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given TRAVEL_DESK_TIMEZONE: {} is not a known timezone, falling back to UTC.",
                        timezone
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };

        let snapshot_path = std::env::var("TRAVEL_DESK_SNAPSHOT_PATH").ok();
        if snapshot_path.is_none() {
            info!("Did not find TRAVEL_DESK_SNAPSHOT_PATH environment variable. Starting with an empty snapshot.");
        }

        Self {
            port,
            timezone,
            snapshot_path,
            expiring_soon_days: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
