use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";
pub const SEED_ENV: &str = "BLACKJACK_SEED";
pub const ROUNDS_ENV: &str = "BLACKJACK_ROUNDS";
pub const STAND_ON_ENV: &str = "BLACKJACK_STAND_ON";
pub const GLYPHS_ENV: &str = "BLACKJACK_GLYPHS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rounds: u32,
    /// Automated player in `sim` hits while below this total
    pub stand_on: u8,
    /// Render cards with Unicode playing-card glyphs
    pub glyphs: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub rounds: ValueSource,
    pub stand_on: ValueSource,
    pub glyphs: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
            stand_on: ValueSource::Default,
            glyphs: ValueSource::Default,
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
            rounds: 1,
            stand_on: 17,
            glyphs: false,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.stand_on {
            cfg.stand_on = v;
            sources.stand_on = ValueSource::File;
        }
        if let Some(v) = f.glyphs {
            cfg.glyphs = v;
            sources.glyphs = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(stand_on) = std::env::var(STAND_ON_ENV)
        && !stand_on.is_empty()
    {
        cfg.stand_on = stand_on
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid stand_on".into()))?;
        sources.stand_on = ValueSource::Env;
    }
    if let Ok(glyphs) = std::env::var(GLYPHS_ENV)
        && !glyphs.is_empty()
    {
        cfg.glyphs =
            parse_bool(&glyphs).ok_or_else(|| ConfigError::Invalid("Invalid glyphs".into()))?;
        sources.glyphs = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    stand_on: Option<u8>,
    #[serde(default)]
    glyphs: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    crate::validation::validate_rounds(cfg.rounds)
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    crate::validation::validate_stand_on(cfg.stand_on)
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
