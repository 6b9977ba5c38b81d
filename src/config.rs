use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::SalaryWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub stop_words: StopWordSettings,
    #[serde(default)]
    pub salary: SalarySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub keyword_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopWordSettings {
    /// Newline-separated file of words to ignore in addition to the English corpus
    pub extra_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalarySettings {
    #[serde(default = "default_salary_base")]
    pub base: f64,
    #[serde(default = "default_salary_per_year")]
    pub per_year: f64,
    #[serde(default = "default_salary_per_skill")]
    pub per_skill: f64,
    #[serde(default = "default_salary_per_education_level")]
    pub per_education_level: f64,
}

impl Default for SalarySettings {
    fn default() -> Self {
        Self {
            base: default_salary_base(),
            per_year: default_salary_per_year(),
            per_skill: default_salary_per_skill(),
            per_education_level: default_salary_per_education_level(),
        }
    }
}

impl From<&SalarySettings> for SalaryWeights {
    fn from(settings: &SalarySettings) -> Self {
        Self {
            base: settings.base,
            per_year: settings.per_year,
            per_skill: settings.per_skill,
            per_education_level: settings.per_education_level,
        }
    }
}

fn default_salary_base() -> f64 { 30000.0 }
fn default_salary_per_year() -> f64 { 5000.0 }
fn default_salary_per_skill() -> f64 { 1000.0 }
fn default_salary_per_education_level() -> f64 { 10000.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Text,
}

impl LoggingSettings {
    /// Parse the configured format, falling back to plain text
    pub fn log_format(&self) -> LogFormat {
        match self.format.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Text,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESUME_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESUME_MATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RESUME_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
