use serde::Deserialize;
use std::env;
use voyago_booking::BookingPolicy;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingRules,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BookingRules {
    /// Cap on seats per booking, unset means unlimited
    #[serde(default)]
    pub max_seats_per_booking: Option<u32>,
}

impl BookingRules {
    pub fn policy(&self) -> BookingPolicy {
        BookingPolicy {
            max_seats_per_booking: self.max_seats_per_booking,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Layered files, all optional so an unconfigured process still
            // starts with the defaults
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `VOYAGO__BOOKING__MAX_SEATS_PER_BOOKING=8`
            .add_source(config::Environment::with_prefix("VOYAGO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
