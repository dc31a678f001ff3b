use std::env;

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub data_dir: String,
    pub retention_days: i64,
}

impl LedgerConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("POS_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let retention_days = env::var("POS_RETENTION_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(2);
        Self {
            data_dir,
            retention_days,
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            retention_days: 2,
        }
    }
}
