use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal_insights::analysis::{AnalyzerSettings, PatternAnalyzer};
use trade_journal_insights::config::Config;
use trade_journal_insights::journal::{InMemoryJournal, TimeFilter};
use trade_journal_insights::report::InsightsReport;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // journal-insights [JOURNAL_PATH] [USER_ID] [last_30|all] [--json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    if let Some(path) = positional.first() {
        cfg.journal_path = path.to_string();
    }
    if let Some(user) = positional.get(1) {
        cfg.user_id = user
            .parse()
            .with_context(|| format!("invalid user id '{}'", user))?;
    }
    if let Some(window) = positional.get(2) {
        cfg.time_filter = TimeFilter::parse(Some(window.as_str()));
    }

    info!("Loading journal from {}", cfg.journal_path);
    let journal = InMemoryJournal::load(&cfg.journal_path)
        .with_context(|| format!("loading journal {}", cfg.journal_path))?;

    let analyzer = PatternAnalyzer::new(AnalyzerSettings::from(&cfg));
    let result = analyzer
        .analyze(&journal, cfg.user_id, cfg.time_filter)
        .await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        InsightsReport::new(&result, cfg.user_id, cfg.time_filter, cfg.recent_limit)
            .print_summary();
    }

    Ok(())
}
