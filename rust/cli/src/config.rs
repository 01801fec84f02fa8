use serde::{Deserialize, Serialize};
use std::fs;

use sevenpoker_ai::{AI_NAMES, DEFAULT_AI};
use sevenpoker_engine::rules::{AI_STARTING_CHIPS, ANTE};

/// Ledger file used when nothing else is configured.
pub const DEFAULT_LEDGER_PATH: &str = "sevenpoker_coins.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub ai: String,
    pub ledger: String,
    pub ai_chips: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub ledger: ValueSource,
    pub ai_chips: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            ledger: ValueSource::Default,
            ai_chips: ValueSource::Default,
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
            seed: None,
            ai: DEFAULT_AI.into(),
            ledger: DEFAULT_LEDGER_PATH.into(),
            ai_chips: AI_STARTING_CHIPS,
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

/// Resolves the configuration: defaults, then the TOML file named by
/// `SEVENPOKER_CONFIG`, then `SEVENPOKER_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SEVENPOKER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.ledger {
            cfg.ledger = v;
            sources.ledger = ValueSource::File;
        }
        if let Some(v) = f.ai_chips {
            cfg.ai_chips = v;
            sources.ai_chips = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("SEVENPOKER_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("SEVENPOKER_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(ledger) = std::env::var("SEVENPOKER_LEDGER")
        && !ledger.is_empty()
    {
        cfg.ledger = ledger;
        sources.ledger = ValueSource::Env;
    }
    if let Ok(chips) = std::env::var("SEVENPOKER_AI_CHIPS")
        && !chips.is_empty()
    {
        cfg.ai_chips = chips
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid ai_chips: {}", chips)))?;
        sources.ai_chips = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    ledger: Option<String>,
    #[serde(default)]
    ai_chips: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.ai_chips < ANTE {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: ai_chips must be >= {}",
            ANTE
        )));
    }
    let ai = cfg.ai.trim().to_ascii_lowercase();
    if !AI_NAMES.contains(&ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}'",
            cfg.ai
        )));
    }
    if cfg.ledger.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: ledger path is empty".into(),
        ));
    }
    Ok(())
}
