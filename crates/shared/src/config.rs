use std::env;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_HISTORY_LOG_PATH: &str = "history.csv";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub history_log_path: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            history_log_path: env::var("HISTORY_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_LOG_PATH)),
        }
    }
}
