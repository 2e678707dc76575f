// src/config/mod.rs
// Load all values from the environment (and .env), with defaults for everything but the API key

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FunConfig {
    // ── Provider Configuration
    pub provider_base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub provider_timeout: u64,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,

    // ── Wheel Configuration
    pub spin_duration_ms: u64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for FunConfig {
    fn default() -> Self {
        Self {
            provider_base_url: "https://api.moonshot.cn/v1".to_string(),
            model: "kimi-k2-turbo-preview".to_string(),
            api_key: None,
            provider_timeout: 30,
            database_url: "sqlite:./eleme-fun.db".to_string(),
            sqlite_max_connections: 5,
            spin_duration_ms: 3000,
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origin: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FunConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        let defaults = Self::default();
        Self {
            provider_base_url: env_var_or("MOONSHOT_BASE_URL", defaults.provider_base_url),
            model: env_var_or("ELEME_FUN_MODEL", defaults.model),
            api_key: env_var_opt("MOONSHOT_API_KEY"),
            provider_timeout: env_var_or("ELEME_FUN_PROVIDER_TIMEOUT", defaults.provider_timeout),
            database_url: env_var_or("DATABASE_URL", defaults.database_url),
            sqlite_max_connections: env_var_or(
                "SQLITE_MAX_CONNECTIONS",
                defaults.sqlite_max_connections,
            ),
            spin_duration_ms: env_var_or("ELEME_FUN_SPIN_DURATION_MS", defaults.spin_duration_ms),
            host: env_var_or("ELEME_FUN_HOST", defaults.host),
            port: env_var_or("ELEME_FUN_PORT", defaults.port),
            cors_origin: env_var_or("ELEME_FUN_CORS_ORIGIN", defaults.cors_origin),
            log_level: env_var_or("ELEME_FUN_LOG_LEVEL", defaults.log_level),
        }
    }

    // --- Convenience Methods ---

    /// Full URL of the chat completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.provider_base_url.trim_end_matches('/')
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout)
    }

    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<FunConfig> = Lazy::new(FunConfig::from_env);
