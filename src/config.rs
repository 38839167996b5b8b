use serde::{Deserialize, Serialize};

use crate::journal::TimeFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal
    pub journal_path: String,
    pub user_id: u64,
    pub time_filter: TimeFilter,

    // Analysis
    pub min_sample: usize,
    pub max_patterns: usize,
    pub recent_limit: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let time_filter = std::env::var("TIME_FILTER").ok();

        Config {
            journal_path: env("JOURNAL_PATH", "data/journal.json"),
            user_id: env("JOURNAL_USER", "1").parse().unwrap_or(1),
            time_filter: TimeFilter::parse(time_filter.as_deref()),
            min_sample: env("MIN_SAMPLE", "3").parse().unwrap_or(3),
            max_patterns: env("MAX_PATTERNS", "5").parse().unwrap_or(5),
            recent_limit: env("RECENT_LIMIT", "30").parse().unwrap_or(30),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_path: "data/journal.json".to_string(),
            user_id: 1,
            time_filter: TimeFilter::All,
            min_sample: 3,
            max_patterns: 5,
            recent_limit: 30,
            log_level: "INFO".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalyzerSettings;

    #[test]
    fn default_settings_match_analyzer_defaults() {
        let cfg = Config::default();
        assert_eq!(AnalyzerSettings::from(&cfg), AnalyzerSettings::default());
    }
}
