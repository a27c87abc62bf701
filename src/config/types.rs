use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// Settings for the conversion service (standalone or embedded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the conversion server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Connection timeout for outbound page fetches in seconds.
    #[serde(default = "default_fetch_connect_timeout")]
    pub fetch_connect_timeout_seconds: u32,
    /// Total timeout for outbound page fetches in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u32,
}

/// Settings for the TUI's transport to the conversion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of a remote conversion server. When unset, the TUI embeds
    /// one in-process on loopback.
    #[serde(default)]
    pub server_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Thresholds for the extractive summarizer: inputs under
/// `short_text_words` pass through unchanged, the summary budget depends
/// on whether the input exceeds `long_text_words`, and long inputs are
/// summarized in `chunk_chars`-character chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_short_text_words")]
    pub short_text_words: usize,
    #[serde(default = "default_long_text_words")]
    pub long_text_words: usize,
    #[serde(default = "default_budget_words_short")]
    pub budget_words_short: usize,
    #[serde(default = "default_budget_words_long")]
    pub budget_words_long: usize,
    #[serde(default = "default_min_summary_words")]
    pub min_summary_words: usize,
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8077".to_string()
}

fn default_fetch_connect_timeout() -> u32 {
    5
}

fn default_fetch_timeout() -> u32 {
    30
}

fn default_request_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_short_text_words() -> usize {
    30
}

fn default_long_text_words() -> usize {
    100
}

fn default_budget_words_short() -> usize {
    50
}

fn default_budget_words_long() -> usize {
    250
}

fn default_min_summary_words() -> usize {
    30
}

fn default_chunk_chars() -> usize {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            fetch_connect_timeout_seconds: default_fetch_connect_timeout(),
            fetch_timeout_seconds: default_fetch_timeout(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            short_text_words: default_short_text_words(),
            long_text_words: default_long_text_words(),
            budget_words_short: default_budget_words_short(),
            budget_words_long: default_budget_words_long(),
            min_summary_words: default_min_summary_words(),
            chunk_chars: default_chunk_chars(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}
