use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::journal::FilterParams;

/// Which detector produced a finding. Declaration order is the order the
/// detectors run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    MarketCondition,
    Discipline,
    Bias,
    EntryTiming,
    Poi,
    Session,
    Behavior,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::MarketCondition => "market_condition",
            PatternType::Discipline => "discipline",
            PatternType::Bias => "bias",
            PatternType::EntryTiming => "entry_timing",
            PatternType::Poi => "poi",
            PatternType::Session => "session",
            PatternType::Behavior => "behavior",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub title: String,
    /// 0-100, ranking only. Higher surfaces first.
    pub severity_score: u8,
    pub description: String,
    pub statistics: String,
    pub suggestion: String,
    pub filter_params: FilterParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub patterns: Vec<Finding>,
    /// Findings per type, counted before truncation.
    pub chart_data: BTreeMap<PatternType, usize>,
    pub total_analyzed: usize,
    pub generated_at: DateTime<Utc>,
}

pub fn chart_data(findings: &[Finding]) -> BTreeMap<PatternType, usize> {
    let mut counts = BTreeMap::new();
    for f in findings {
        *counts.entry(f.pattern_type).or_insert(0) += 1;
    }
    counts
}
