use log::LevelFilter;
use std::time::Duration;

use crate::poll::DEFAULT_INTERVAL;

pub const DEFAULT_SERVER: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub server: String,
	pub poll_interval: Duration,
	pub log_level: LevelFilter,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			server: DEFAULT_SERVER.to_string(),
			poll_interval: DEFAULT_INTERVAL,
			log_level: LevelFilter::Info,
		}
	}
}

impl Config {
	/** Reads `COUP_SERVER`, `COUP_POLL_MS` and `COUP_LOG`, falling back to defaults for anything unset or unparseable. */
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenvy::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let default = Self::default();

		Self {
			server: lookup("COUP_SERVER").unwrap_or(default.server),
			poll_interval: lookup("COUP_POLL_MS")
				.and_then(|ms| ms.parse().ok())
				.map(Duration::from_millis)
				.unwrap_or(default.poll_interval),
			log_level: lookup("COUP_LOG").and_then(|level| level.parse().ok()).unwrap_or(default.log_level),
		}
	}
}
