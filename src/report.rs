use std::fmt;

use crate::analysis::AnalysisResult;
use crate::journal::TimeFilter;

/// Plain-text rendering of an analysis, for the terminal.
pub struct InsightsReport<'a> {
    pub result: &'a AnalysisResult,
    pub user_id: u64,
    pub time_filter: TimeFilter,
    /// Entries per collection when `time_filter` is `Recent`.
    pub recent_limit: usize,
}

impl<'a> InsightsReport<'a> {
    pub fn new(
        result: &'a AnalysisResult,
        user_id: u64,
        time_filter: TimeFilter,
        recent_limit: usize,
    ) -> Self {
        Self {
            result,
            user_id,
            time_filter,
            recent_limit,
        }
    }

    pub fn print_summary(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for InsightsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);

        writeln!(f, "{}", rule)?;
        writeln!(f, "  ERROR PATTERN INSIGHTS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "  User:        {}", self.user_id)?;
        writeln!(f, "  Window:      {}", self.time_filter.describe(self.recent_limit))?;
        writeln!(f, "  Analyzed:    {} entries", self.result.total_analyzed)?;
        writeln!(
            f,
            "  Generated:   {}",
            self.result.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;

        if self.result.patterns.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "  No recurring error patterns found. Keep journaling to build more history."
            )?;
            return writeln!(f, "{}", rule);
        }

        for (i, p) in self.result.patterns.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "  {}. {} [severity {}]", i + 1, p.title, p.severity_score)?;
            writeln!(f, "  ───────────────────────────────────")?;
            writeln!(f, "  {}", p.description)?;
            writeln!(f, "  Stats:       {}", p.statistics)?;
            writeln!(f, "  Suggestion:  {}", p.suggestion)?;
            if !p.filter_params.is_empty() {
                writeln!(f, "  Trades:      ?{}", p.filter_params.to_query_string())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "  BY TYPE")?;
        writeln!(f, "  ───────────────────────────────────")?;
        for (kind, count) in &self.result.chart_data {
            writeln!(f, "  {:>16}: {}", kind.as_str(), count)?;
        }
        writeln!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalyzerSettings, PatternAnalyzer};
    use crate::test_helpers::trades;

    #[test]
    fn renders_empty_result() {
        let result = PatternAnalyzer::new(AnalyzerSettings::default()).analyze_records(&[], 0);
        let text = InsightsReport::new(&result, 1, TimeFilter::All, 30).to_string();
        assert!(text.contains("No recurring error patterns found"));
        assert!(text.contains("Analyzed:    0 entries"));
        assert!(text.contains("Window:      all entries"));
    }

    #[test]
    fn renders_patterns_with_drill_down() {
        let records = trades(0, 5, |r| r.market_condition = "Consolidating".into());
        let result =
            PatternAnalyzer::new(AnalyzerSettings::default()).analyze_records(&records, 5);
        let text = InsightsReport::new(&result, 4, TimeFilter::Recent, 30).to_string();
        assert!(text.contains("1. Struggling in Consolidating Markets [severity 100]"));
        assert!(text.contains("Trades:      ?market_condition=Consolidating&outcome=loss"));
        assert!(text.contains("Window:      last 30 entries"));
        assert!(text.contains("market_condition: 1"));
    }

    #[test]
    fn window_shows_configured_recent_limit() {
        let result = PatternAnalyzer::new(AnalyzerSettings::default()).analyze_records(&[], 0);
        let text = InsightsReport::new(&result, 1, TimeFilter::Recent, 50).to_string();
        assert!(text.contains("Window:      last 50 entries"));
        assert!(!text.contains("last_30"));
    }
}
