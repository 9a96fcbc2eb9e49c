use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::types::Points;

use crate::utils::logger::init_logger_with_file;

/// What a confirmed purchase does to a limited item's stock counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Stock is a display value; purchases leave it untouched
    #[default]
    Static,
    /// Each confirmed purchase takes one unit off a limited item
    DecrementOnPurchase,
}

/// Portal session configuration
///
/// # Environment variables
///
/// [`Config::from_env`] reads optional overrides (a `.env` file is loaded first):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HRIS_INITIAL_POINTS | 450 | Balance at session start |
/// | HRIS_UPLOAD_REWARD_MIN | 10 | Smallest document upload reward |
/// | HRIS_UPLOAD_REWARD_MAX | 29 | Largest document upload reward |
/// | HRIS_DOWNLOAD_REWARD | 5 | Points per document download |
/// | HRIS_CURRENT_USER | John Doe | Name stamped on uploads and new projects |
/// | HRIS_NOTIFICATION_CAPACITY | 50 | Notifications kept in the feed |
/// | HRIS_STOCK_POLICY | static | `static` or `decrement_on_purchase` |
/// | HRIS_LOG_LEVEL | info | Logger level |
/// | HRIS_LOG_DIR | (unset) | Directory for rotating log files |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_points: Points,
    pub upload_reward_min: Points,
    pub upload_reward_max: Points,
    pub download_reward: Points,
    pub current_user: String,
    pub notification_capacity: usize,
    pub stock_policy: StockPolicy,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_points: 450,
            upload_reward_min: 10,
            upload_reward_max: 29,
            download_reward: 5,
            current_user: "John Doe".to_string(),
            notification_capacity: 50,
            stock_policy: StockPolicy::Static,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to [`Config::default`].
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any `HRIS_*` key source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            initial_points: parse_var(&lookup, "HRIS_INITIAL_POINTS")
                .unwrap_or(defaults.initial_points),
            upload_reward_min: parse_var(&lookup, "HRIS_UPLOAD_REWARD_MIN")
                .unwrap_or(defaults.upload_reward_min),
            upload_reward_max: parse_var(&lookup, "HRIS_UPLOAD_REWARD_MAX")
                .unwrap_or(defaults.upload_reward_max),
            download_reward: parse_var(&lookup, "HRIS_DOWNLOAD_REWARD")
                .unwrap_or(defaults.download_reward),
            current_user: lookup("HRIS_CURRENT_USER")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.current_user),
            notification_capacity: parse_var(&lookup, "HRIS_NOTIFICATION_CAPACITY")
                .unwrap_or(defaults.notification_capacity),
            stock_policy: match lookup("HRIS_STOCK_POLICY").as_deref().map(str::trim) {
                Some("decrement_on_purchase") => StockPolicy::DecrementOnPurchase,
                _ => defaults.stock_policy,
            },
            log_level: lookup("HRIS_LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: lookup("HRIS_LOG_DIR").or(defaults.log_dir),
        }
    }

    /// Install the global logger at `log_level`, writing files under `log_dir` when set
    pub fn init_logging(&self) -> anyhow::Result<()> {
        init_logger_with_file(&self.log_level, false, self.log_dir.as_deref())
    }

    /// Reject combinations a session cannot run with
    pub fn validate(&self) -> AppResult<()> {
        if self.upload_reward_min > self.upload_reward_max {
            return Err(AppError::config(format!(
                "upload reward range is empty ({}..={})",
                self.upload_reward_min, self.upload_reward_max
            )));
        }
        if self.notification_capacity == 0 {
            return Err(AppError::config("notification capacity must be at least 1"));
        }
        if self.current_user.trim().is_empty() {
            return Err(AppError::config("current user name must not be empty"));
        }
        Ok(())
    }
}
