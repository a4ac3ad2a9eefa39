use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recommend::{BlendPolicy, DEFAULT_CANDIDATE_MULTIPLIER, DEFAULT_TOP_N};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Result size used when a command does not override it.
    pub top_n: usize,
    /// Which sub-engine wins deduplication priority in the hybrid path.
    pub blend: BlendPolicy,
    /// Oversampling factor for hybrid sub-engine gathering.
    pub candidate_multiplier: usize,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub top_n: Option<usize>,
    pub blend: Option<BlendPolicy>,
    pub candidate_multiplier: Option<usize>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                top_n: DEFAULT_TOP_N,
                blend: BlendPolicy::ContentFirst,
                candidate_multiplier: DEFAULT_CANDIDATE_MULTIPLIER,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    engine: Option<EnginePatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct EnginePatch {
    top_n: Option<usize>,
    blend: Option<BlendPolicy>,
    candidate_multiplier: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    /// Layered load: defaults, then an optional `aisle.toml`, then `AISLE_*`
    /// environment variables, then programmatic overrides, then validation.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("aisle.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(engine) = patch.engine {
            if let Some(top_n) = engine.top_n {
                self.engine.top_n = top_n;
            }
            if let Some(blend) = engine.blend {
                self.engine.blend = blend;
            }
            if let Some(multiplier) = engine.candidate_multiplier {
                self.engine.candidate_multiplier = multiplier;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("AISLE_ENGINE_TOP_N") {
            self.engine.top_n = parse_usize("AISLE_ENGINE_TOP_N", &value)?;
        }
        if let Some(value) = read_env("AISLE_ENGINE_BLEND") {
            self.engine.blend = value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "AISLE_ENGINE_BLEND".to_string(),
                value,
            })?;
        }
        if let Some(value) = read_env("AISLE_ENGINE_CANDIDATE_MULTIPLIER") {
            self.engine.candidate_multiplier =
                parse_usize("AISLE_ENGINE_CANDIDATE_MULTIPLIER", &value)?;
        }
        if let Some(value) = read_env("AISLE_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = read_env("AISLE_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(top_n) = overrides.top_n {
            self.engine.top_n = top_n;
        }
        if let Some(blend) = overrides.blend {
            self.engine.blend = blend;
        }
        if let Some(multiplier) = overrides.candidate_multiplier {
            self.engine.candidate_multiplier = multiplier;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.top_n == 0 {
            return Err(ConfigError::Validation("engine.top_n must be at least 1".to_string()));
        }
        if self.engine.candidate_multiplier == 0 {
            return Err(ConfigError::Validation(
                "engine.candidate_multiplier must be at least 1".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigError::Validation(format!(
                "unsupported log level `{}` (expected trace|debug|info|warn|error)",
                self.logging.level
            )));
        }

        Ok(())
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.exists().then(|| path.to_path_buf());
    }

    if let Some(value) = read_env("AISLE_CONFIG") {
        let path = PathBuf::from(value);
        return path.exists().then_some(path);
    }

    let default = PathBuf::from("aisle.toml");
    default.exists().then_some(default)
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.to_string() })
}
