use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info};

use crate::analysis::detectors::DETECTORS;
use crate::analysis::finding::{chart_data, AnalysisResult, Finding};
use crate::config::Config;
use crate::journal::{RecordStore, TimeFilter, TradeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerSettings {
    /// Smallest bucket a detector will draw a conclusion from.
    pub min_sample: usize,
    /// Findings kept in the result after ranking.
    pub max_patterns: usize,
    /// Entries per collection under `TimeFilter::Recent`.
    pub recent_limit: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            min_sample: 3,
            max_patterns: 5,
            recent_limit: 30,
        }
    }
}

impl From<&Config> for AnalyzerSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            min_sample: cfg.min_sample,
            max_patterns: cfg.max_patterns,
            recent_limit: cfg.recent_limit,
        }
    }
}

pub struct PatternAnalyzer {
    pub settings: AnalyzerSettings,
}

impl PatternAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    /// Fetch the user's journal and rank the error patterns in it. A store
    /// failure fails the whole analysis.
    pub async fn analyze(
        &self,
        store: &dyn RecordStore,
        user_id: u64,
        time_filter: TimeFilter,
    ) -> Result<AnalysisResult> {
        let limit = time_filter.limit(self.settings.recent_limit);

        let after_trades = store
            .fetch_after_trade_records(user_id, limit)
            .await
            .with_context(|| format!("fetching after-trade records for user {}", user_id))?;
        let pre_trades = store
            .count_pre_trade_records(user_id, limit)
            .await
            .with_context(|| format!("counting pre-trade records for user {}", user_id))?;
        let backtests = store
            .count_backtest_records(user_id, limit)
            .await
            .with_context(|| format!("counting backtest records for user {}", user_id))?;

        let total_analyzed = after_trades.len() + pre_trades + backtests;
        let result = self.analyze_records(&after_trades, total_analyzed);

        info!(
            "Analyzed {} entries for user {} ({}): {} pattern(s)",
            total_analyzed,
            user_id,
            time_filter.describe(self.settings.recent_limit),
            result.patterns.len()
        );
        Ok(result)
    }

    /// Run every detector over an already-fetched snapshot.
    pub fn analyze_records(&self, records: &[TradeRecord], total_analyzed: usize) -> AnalysisResult {
        let findings = self.detect(records);
        let chart = chart_data(&findings);

        let mut patterns = findings;
        patterns.truncate(self.settings.max_patterns);

        AnalysisResult {
            patterns,
            chart_data: chart,
            total_analyzed,
            generated_at: Utc::now(),
        }
    }

    /// Every finding, most severe first. Equal severities keep detector order.
    pub fn detect(&self, records: &[TradeRecord]) -> Vec<Finding> {
        let mut findings: Vec<Finding> = DETECTORS
            .iter()
            .filter_map(|(kind, detect)| {
                let found = detect(records, self.settings.min_sample);
                if let Some(f) = &found {
                    debug!("{} pattern: {} (severity {})", kind, f.title, f.severity_score);
                }
                found
            })
            .collect();
        findings.sort_by(|a, b| b.severity_score.cmp(&a.severity_score));
        findings
    }
}
