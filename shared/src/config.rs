use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SUCCESS_MESSAGE_MS: u32 = 3000;

/// Minimum level written by the frontend logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct UnknownLogLevel(String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(UnknownLogLevel(other.to_string())),
        }
    }
}

/// Settings the client needs to talk to the resource API
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the resource API; empty means same-origin
    pub base_url: String,
    /// Anti-forgery token sent on state-changing requests
    pub csrf_token: String,
    /// How long the form keeps its success message
    pub success_message_ms: u32,
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            csrf_token: String::new(),
            success_message_ms: DEFAULT_SUCCESS_MESSAGE_MS,
            log_level: LogLevel::default(),
        }
    }
}

/// Optional overrides published by the hosting page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub success_message_ms: Option<u32>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl ClientConfig {
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Apply page overrides; unknown log levels keep the current level
    pub fn merge(mut self, page: PageConfig) -> Self {
        if let Some(base_url) = page.base_url {
            self = self.with_base_url(base_url);
        }
        if let Some(ms) = page.success_message_ms {
            self.success_message_ms = ms;
        }
        if let Some(level) = page.log_level.and_then(|l| l.parse().ok()) {
            self.log_level = level;
        }
        self
    }

    pub fn has_csrf_token(&self) -> bool {
        !self.csrf_token.trim().is_empty()
    }
}
