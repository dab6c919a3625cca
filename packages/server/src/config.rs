use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JudgeConfig {
    /// Per-test-case wall-clock limit in milliseconds.
    pub time_limit_ms: u64,
    /// Per-run address-space ceiling in kilobytes.
    pub memory_limit_kb: u64,
    /// Maximum accepted submission source size in bytes.
    pub max_code_bytes: usize,
    pub node_bin: String,
    pub python_bin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Points awarded per accepted submission.
    pub accepted_award: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub judge: JudgeConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("judge.time_limit_ms", 2000)?
            .set_default("judge.memory_limit_kb", 1_048_576)?
            .set_default("judge.max_code_bytes", 65_536)?
            .set_default("judge.node_bin", "node")?
            .set_default("judge.python_bin", "python3")?
            .set_default("scoring.accepted_award", 10)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., ALGOQUEST__SERVER__PORT)
            .add_source(Environment::with_prefix("ALGOQUEST").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
