use chrono::{Duration, NaiveDate};
use trade_journal_insights::journal::{BacktestRecord, PreTradeRecord, TradeRecord};
use trade_journal_insights::models::{BacktestOutcome, Outcome};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// A blank trade for `user_id`, `days` after 2024-01-15.
pub fn trade(user_id: u64, outcome: Outcome, days: i64) -> TradeRecord {
    TradeRecord {
        id: 0,
        user_id,
        pair: "EURUSD".to_string(),
        date: base_date() + Duration::days(days),
        outcome,
        market_condition: String::new(),
        discipline_score: String::new(),
        bias: String::new(),
        predicted_directional_bias: String::new(),
        entry_quality: String::new(),
        poi_performance: String::new(),
        session: String::new(),
        market_behaviour: String::new(),
        poi_quality_score: None,
        risk_pips: None,
        reward_pips: None,
        observations: String::new(),
    }
}

/// `wins` winners then `losses` losers for user 1, dated one day apart.
pub fn batch<F>(wins: usize, losses: usize, setup: F) -> Vec<TradeRecord>
where
    F: Fn(&mut TradeRecord),
{
    (0..wins + losses)
        .map(|i| {
            let outcome = if i < wins { Outcome::Win } else { Outcome::Loss };
            let mut r = trade(1, outcome, i as i64);
            setup(&mut r);
            r
        })
        .collect()
}

pub fn pre_trade(user_id: u64, days: i64) -> PreTradeRecord {
    PreTradeRecord {
        id: 0,
        user_id,
        pair: "EURUSD".to_string(),
        date: base_date() + Duration::days(days),
        bias: "bullish".to_string(),
        trade_taken: false,
    }
}

pub fn backtest(user_id: u64, days: i64) -> BacktestRecord {
    BacktestRecord {
        id: 0,
        user_id,
        pair: "EURUSD".to_string(),
        date: base_date() + Duration::days(days),
        outcome: BacktestOutcome::NoSetup,
    }
}
