use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the recommendation artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,

    /// Directory holding the landing and quiz pages
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Seconds before a stored session result expires
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_artifact_path() -> String {
    "data/game_artifact.json".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_session_ttl_secs() -> u64 {
    1800
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
