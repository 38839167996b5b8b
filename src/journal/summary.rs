use crate::journal::trade_record::TradeRecord;
use crate::models::Vocabulary;

/// Short markdown digest of a single trade review.
pub struct TradeSummary;

impl TradeSummary {
    pub fn generate(record: &TradeRecord) -> String {
        let mut parts = Vec::new();

        let marker = if record.is_win() { "✅" } else { "❌" };
        let session = record
            .session()
            .map(|s| s.title().to_string())
            .unwrap_or_else(|| record.session.clone());
        parts.push(format!(
            "{} **{}** | {} | {} | {} Session",
            marker,
            record.outcome.as_str().to_uppercase(),
            record.pair,
            record.date.format("%B %d, %Y"),
            session
        ));

        if let Some(score) = record.poi_quality_score.filter(|s| *s > 0) {
            let score = score.min(5);
            parts.push(format!(
                "\n**POI Quality:** {} ({}/5)",
                "⭐".repeat(score as usize),
                score
            ));
        }

        if let Some(rr) = record.rr_ratio() {
            parts.push(format!("\n**Risk:Reward:** {:.2}:1", rr));
        }

        parts.join("\n")
    }
}
