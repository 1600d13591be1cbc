//! Driver configuration structures and loaders.
use std::env;
use std::time::Duration;

use game_core::Expedition;
use runtime::RuntimeConfig;

/// How the periodic status refresh is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusFormat {
    /// One labelled line per field.
    #[default]
    Text,
    /// One JSON object per refresh.
    Json,
}

/// Expedition the driver sends the hero on every round.
#[derive(Clone, Debug)]
pub struct ExpeditionConfig {
    pub name: String,
    pub duration: Duration,
    pub experience_reward: f64,
}

impl ExpeditionConfig {
    pub fn build(&self) -> Expedition {
        Expedition::new(self.name.clone(), self.duration, self.experience_reward)
    }
}

impl Default for ExpeditionConfig {
    fn default() -> Self {
        Self {
            name: "Tutorial".to_owned(),
            duration: Duration::from_secs(5),
            experience_reward: 100.0,
        }
    }
}

/// Configuration required to drive a hero from the command line.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub hero_name: String,
    pub expedition: ExpeditionConfig,
    pub training_interval: Duration,
    /// Number of expeditions to send before exiting; `None` runs until Ctrl-C.
    pub training_rounds: Option<u32>,
    pub status_refresh: Duration,
    pub status_format: StatusFormat,
    pub log_to_file: bool,
    pub runtime: RuntimeConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hero_name: "Adventurer X".to_owned(),
            expedition: ExpeditionConfig::default(),
            training_interval: Duration::from_secs(10),
            training_rounds: None,
            status_refresh: Duration::from_secs(1),
            status_format: StatusFormat::default(),
            log_to_file: false,
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HERO_NAME` - Hero to create (default: Adventurer X)
    /// - `EXPEDITION_NAME` - Expedition sent every round (default: Tutorial)
    /// - `EXPEDITION_DURATION_SECS` - Expedition length (default: 5)
    /// - `EXPEDITION_REWARD` - Experience granted per expedition (default: 100)
    /// - `TRAINING_INTERVAL_SECS` - Seconds between rounds (default: 10)
    /// - `TRAINING_ROUNDS` - Rounds before exiting (default: unlimited)
    /// - `STATUS_REFRESH_MS` - Status print interval (default: 1000)
    /// - `STATUS_FORMAT` - `text` or `json` (default: text)
    /// - `LOG_TO_FILE` - Also write logs to the platform cache dir (default: false)
    /// - `RUNTIME_COMMAND_BUFFER` - Worker command queue size (default: 32)
    /// - `RUNTIME_EVENT_BUFFER` - Event channel capacity (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reading values through `lookup`.
    ///
    /// Malformed values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let parse = |key: &str| read(key).and_then(|value| value.parse::<u64>().ok());

        let mut config = Self::default();

        if let Some(name) = read("HERO_NAME").filter(|name| !name.is_empty()) {
            config.hero_name = name;
        }

        // Expedition
        if let Some(name) = read("EXPEDITION_NAME").filter(|name| !name.is_empty()) {
            config.expedition.name = name;
        }
        if let Some(secs) = parse("EXPEDITION_DURATION_SECS") {
            config.expedition.duration = Duration::from_secs(secs);
        }
        if let Some(reward) = read("EXPEDITION_REWARD").and_then(|v| v.parse::<f64>().ok()) {
            config.expedition.experience_reward = reward;
        }

        // Scheduling
        if let Some(secs) = parse("TRAINING_INTERVAL_SECS") {
            config.training_interval = Duration::from_secs(secs.max(1));
        }
        config.training_rounds = read("TRAINING_ROUNDS").and_then(|v| v.parse::<u32>().ok());
        if let Some(millis) = parse("STATUS_REFRESH_MS") {
            config.status_refresh = Duration::from_millis(millis.max(1));
        }

        // Output
        if let Some(format) = read("STATUS_FORMAT").and_then(|v| v.parse().ok()) {
            config.status_format = format;
        }
        if let Some(enable) = read("LOG_TO_FILE").and_then(|v| v.parse::<bool>().ok()) {
            config.log_to_file = enable;
        }

        // Runtime channels
        if let Some(capacity) = parse("RUNTIME_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = (capacity as usize).max(1);
        }
        if let Some(capacity) = parse("RUNTIME_EVENT_BUFFER") {
            config.runtime.event_buffer_size = (capacity as usize).max(1);
        }

        config
    }
}
