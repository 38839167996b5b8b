use chrono::NaiveDate;

use crate::journal::TradeRecord;
use crate::models::Outcome;

/// A trade for user 1 on 2024-01-15 with every categorical field blank, so
/// it stays out of every detector until a test fills a field in.
pub fn make_trade(outcome: Outcome) -> TradeRecord {
    make_trade_on(outcome, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
}

pub fn make_trade_on(outcome: Outcome, date: NaiveDate) -> TradeRecord {
    TradeRecord {
        id: 0,
        user_id: 1,
        pair: String::new(),
        date,
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

/// `wins` winning then `losses` losing trades, each passed through `setup`.
pub fn trades<F>(wins: usize, losses: usize, setup: F) -> Vec<TradeRecord>
where
    F: Fn(&mut TradeRecord),
{
    (0..wins + losses)
        .map(|i| {
            let outcome = if i < wins { Outcome::Win } else { Outcome::Loss };
            let mut r = make_trade(outcome);
            r.id = i as u64 + 1;
            setup(&mut r);
            r
        })
        .collect()
}
