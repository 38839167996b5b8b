use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    BacktestOutcome, Bias, BiasPrediction, DisciplineScore, EntryQuality, MarketBehaviour,
    MarketCondition, Outcome, PoiPerformance, Session, Vocabulary,
};

/// A post-trade review. Categorical fields keep the label exactly as it was
/// journaled; the typed accessors return `None` for labels outside the
/// known choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(default)]
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub pair: String,
    pub date: NaiveDate,
    pub outcome: Outcome,
    #[serde(default)]
    pub market_condition: String,
    #[serde(default)]
    pub discipline_score: String,
    #[serde(default)]
    pub bias: String,
    #[serde(default)]
    pub predicted_directional_bias: String,
    #[serde(default)]
    pub entry_quality: String,
    #[serde(default)]
    pub poi_performance: String,
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub market_behaviour: String,
    #[serde(default)]
    pub poi_quality_score: Option<u8>,
    #[serde(default)]
    pub risk_pips: Option<f64>,
    #[serde(default)]
    pub reward_pips: Option<f64>,
    #[serde(default)]
    pub observations: String,
}

impl TradeRecord {
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }

    pub fn market_condition(&self) -> Option<MarketCondition> {
        MarketCondition::from_label(&self.market_condition)
    }

    pub fn discipline_score(&self) -> Option<DisciplineScore> {
        DisciplineScore::from_label(&self.discipline_score)
    }

    pub fn bias(&self) -> Option<Bias> {
        Bias::from_label(&self.bias)
    }

    pub fn predicted_directional_bias(&self) -> Option<BiasPrediction> {
        BiasPrediction::from_label(&self.predicted_directional_bias)
    }

    pub fn entry_quality(&self) -> Option<EntryQuality> {
        EntryQuality::from_label(&self.entry_quality)
    }

    pub fn poi_performance(&self) -> Option<PoiPerformance> {
        PoiPerformance::from_label(&self.poi_performance)
    }

    pub fn session(&self) -> Option<Session> {
        Session::from_label(&self.session)
    }

    pub fn market_behaviour(&self) -> Option<MarketBehaviour> {
        MarketBehaviour::from_label(&self.market_behaviour)
    }

    /// Reward over risk, when both legs were journaled and risk is positive.
    pub fn rr_ratio(&self) -> Option<f64> {
        match (self.risk_pips, self.reward_pips) {
            (Some(risk), Some(reward)) if risk > 0.0 => Some(reward / risk),
            _ => None,
        }
    }

    /// Raw value of a filterable field, looked up by its journal name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "outcome" => Some(self.outcome.as_str()),
            "market_condition" => Some(&self.market_condition),
            "discipline_score" => Some(&self.discipline_score),
            "bias" => Some(&self.bias),
            "predicted_directional_bias" => Some(&self.predicted_directional_bias),
            "entry_quality" => Some(&self.entry_quality),
            "poi_performance" => Some(&self.poi_performance),
            "session" => Some(&self.session),
            "market_behaviour" => Some(&self.market_behaviour),
            "pair" => Some(&self.pair),
            _ => None,
        }
    }
}

/// A pre-trade plan. Only counted by the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreTradeRecord {
    #[serde(default)]
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub pair: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub bias: String,
    #[serde(default)]
    pub trade_taken: bool,
}

/// A backtest entry. Only counted by the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestRecord {
    #[serde(default)]
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub pair: String,
    pub date: NaiveDate,
    pub outcome: BacktestOutcome,
}

/// Anything with a journal date, for recency windows.
pub trait Dated {
    fn user_id(&self) -> u64;
    fn date(&self) -> NaiveDate;
    fn id(&self) -> u64;
}

impl Dated for TradeRecord {
    fn user_id(&self) -> u64 {
        self.user_id
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn id(&self) -> u64 {
        self.id
    }
}

impl Dated for PreTradeRecord {
    fn user_id(&self) -> u64 {
        self.user_id
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn id(&self) -> u64 {
        self.id
    }
}

impl Dated for BacktestRecord {
    fn user_id(&self) -> u64 {
        self.user_id
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn id(&self) -> u64 {
        self.id
    }
}
