use serde::{Deserialize, Serialize};
use std::fs;

use twocard_engine::rules::{validate_game_setup, validate_shuffle_times};

pub const CONFIG_ENV: &str = "TWOCARD_CONFIG";
pub const SEED_ENV: &str = "TWOCARD_SEED";
pub const ROUNDS_ENV: &str = "TWOCARD_ROUNDS";
pub const PLAYERS_ENV: &str = "TWOCARD_PLAYERS";
pub const MAX_SHUFFLES_ENV: &str = "TWOCARD_MAX_SHUFFLES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub rounds: u32,
    pub players: u32,
    pub seed: Option<u64>,
    /// Upper bound for the per-round shuffle count drawn by `play`
    pub max_shuffles: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub rounds: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
    pub max_shuffles: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            rounds: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
            max_shuffles: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: 3,
            players: 5,
            seed: None,
            max_shuffles: 9,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_shuffles {
            cfg.max_shuffles = v;
            sources.max_shuffles = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV, "seed")? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(rounds) = env_value(ROUNDS_ENV, "rounds")? {
        cfg.rounds = rounds;
        sources.rounds = ValueSource::Env;
    }
    if let Some(players) = env_value(PLAYERS_ENV, "players")? {
        cfg.players = players;
        sources.players = ValueSource::Env;
    }
    if let Some(max) = env_value(MAX_SHUFFLES_ENV, "max_shuffles")? {
        cfg.max_shuffles = max;
        sources.max_shuffles = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(key: &str, name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}", name))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    players: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_shuffles: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_game_setup(cfg.rounds, cfg.players)
        .and_then(|_| validate_shuffle_times(cfg.max_shuffles))
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
