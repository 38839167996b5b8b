//! The seven error-pattern detectors. Each one buckets the same after-trade
//! records by a single attribute, drops buckets below the sample floor, and
//! reports the worst remaining bucket only if it is bad enough.

use std::collections::BTreeMap;

use crate::analysis::finding::{Finding, PatternType};
use crate::analysis::suggestions;
use crate::analysis::tally::{
    pct, severity, tally_by, worst_bucket, PredictionTally, Tally, Worse,
};
use crate::journal::{FilterParams, TradeRecord};
use crate::models::{
    Bias, BiasPrediction, DisciplineScore, EntryQuality, MarketBehaviour, PoiPerformance,
    Vocabulary,
};

/// Win rate (%) a market condition must fall below to be reported.
pub const MARKET_CONDITION_MAX_WIN_RATE: f64 = 50.0;
/// Share (%) of all trades with poor-tier discipline that triggers a finding.
pub const DISCIPLINE_MAX_POOR_SHARE: f64 = 30.0;
pub const BIAS_MIN_ACCURACY: f64 = 60.0;
pub const ENTRY_TIMING_MAX_LOSS_RATE: f64 = 60.0;
pub const POI_MAX_LOSS_RATE: f64 = 50.0;
pub const SESSION_MAX_WIN_RATE: f64 = 45.0;
pub const BEHAVIOUR_MAX_LOSS_RATE: f64 = 60.0;

pub type Detector = fn(&[TradeRecord], usize) -> Option<Finding>;

/// All detectors, in run order.
pub const DETECTORS: [(PatternType, Detector); 7] = [
    (PatternType::MarketCondition, market_condition),
    (PatternType::Discipline, discipline),
    (PatternType::Bias, bias_accuracy),
    (PatternType::EntryTiming, entry_timing),
    (PatternType::Poi, poi_performance),
    (PatternType::Session, session),
    (PatternType::Behavior, market_behaviour),
];

fn loss_filter(field: &str, value: &str) -> FilterParams {
    FilterParams::new().with(field, value).with("outcome", "loss")
}

pub fn market_condition(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let buckets = tally_by(records, TradeRecord::market_condition);
    let worst = worst_bucket(
        &buckets,
        min_sample,
        Tally::total,
        Tally::win_rate,
        Worse::Lower,
    )?;
    if worst.metric >= MARKET_CONDITION_MAX_WIN_RATE {
        return None;
    }

    let condition = worst.key;
    let t = worst.tally;
    Some(Finding {
        pattern_type: PatternType::MarketCondition,
        title: format!("Struggling in {} Markets", condition.title()),
        severity_score: severity(100.0 - worst.metric),
        description: format!(
            "Your win rate in {} market conditions is {:.1}%, significantly below average.",
            condition, worst.metric
        ),
        statistics: format!(
            "{} out of {} {} trades ended in a loss ({:.0}% loss rate)",
            t.losses,
            t.total(),
            condition,
            t.loss_rate().unwrap_or(0.0)
        ),
        suggestion: suggestions::market_condition(condition).to_string(),
        filter_params: loss_filter("market_condition", condition.as_str()),
    })
}

/// Flags a journal where too many trades carry a poor-tier discipline score.
/// The share is taken over every analyzed trade, not just scored ones.
pub fn discipline(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let buckets: BTreeMap<DisciplineScore, Tally> = tally_by(records, |r| {
        r.discipline_score().filter(DisciplineScore::is_poor_tier)
    });

    let total_poor: usize = buckets.values().map(Tally::total).sum();
    if total_poor < min_sample.max(1) {
        return None;
    }
    let poor_share = pct(total_poor, records.len())?;
    if poor_share <= DISCIPLINE_MAX_POOR_SHARE {
        return None;
    }

    let rates: Vec<f64> = buckets.values().filter_map(Tally::win_rate).collect();
    let avg_win_rate = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    let tier: Vec<&str> = DisciplineScore::POOR_TIER.iter().map(|d| d.as_str()).collect();
    Some(Finding {
        pattern_type: PatternType::Discipline,
        title: "Discipline Score Issues Detected".to_string(),
        severity_score: severity(poor_share),
        description: format!(
            "{:.0}% of your trades have average or poor discipline scores.",
            poor_share
        ),
        statistics: format!(
            "Average win rate with poor discipline: {:.1}% ({} trades analyzed)",
            avg_win_rate, total_poor
        ),
        suggestion: suggestions::DISCIPLINE.to_string(),
        filter_params: FilterParams::new().with_any("discipline_score", &tier),
    })
}

/// Compares each bias by how often its directional call was right. Trades
/// missing either the bias or the verdict are left out.
pub fn bias_accuracy(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let mut buckets: BTreeMap<Bias, PredictionTally> = BTreeMap::new();
    for r in records {
        let (Some(bias), Some(verdict)) = (r.bias(), r.predicted_directional_bias()) else {
            continue;
        };
        let entry = buckets.entry(bias).or_default();
        match verdict {
            BiasPrediction::Correct => entry.correct += 1,
            BiasPrediction::Incorrect => entry.incorrect += 1,
            BiasPrediction::Partial => entry.partial += 1,
        }
    }

    let worst = worst_bucket(
        &buckets,
        min_sample,
        PredictionTally::total,
        PredictionTally::accuracy,
        Worse::Lower,
    )?;
    if worst.metric >= BIAS_MIN_ACCURACY {
        return None;
    }

    let bias = worst.key;
    let t = worst.tally;
    Some(Finding {
        pattern_type: PatternType::Bias,
        title: format!("{} Bias Accuracy Low", bias.title()),
        severity_score: severity(100.0 - worst.metric),
        description: format!(
            "Your {} bias predictions are only {:.1}% accurate.",
            bias, worst.metric
        ),
        statistics: format!(
            "{} incorrect predictions out of {} {} trades ({:.0}% accuracy)",
            t.incorrect,
            t.total(),
            bias,
            worst.metric
        ),
        suggestion: suggestions::bias(bias),
        filter_params: FilterParams::new()
            .with("bias", bias.as_str())
            .with("predicted_directional_bias", BiasPrediction::Incorrect.as_str()),
    })
}

/// Ties on loss rate go to the most frequent entry problem.
pub fn entry_timing(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let buckets = tally_by(records, |r| {
        r.entry_quality()
            .filter(|q| EntryQuality::PROBLEMATIC.contains(q))
    });
    let worst = worst_bucket(
        &buckets,
        min_sample,
        Tally::total,
        Tally::loss_rate,
        Worse::Higher,
    )?;
    if worst.metric <= ENTRY_TIMING_MAX_LOSS_RATE {
        return None;
    }

    let quality = worst.key;
    let t = worst.tally;
    Some(Finding {
        pattern_type: PatternType::EntryTiming,
        title: format!("{} Reduce Accuracy", quality.title()),
        severity_score: severity(worst.metric),
        description: format!(
            "Your {} entries have a {:.0}% loss rate, significantly higher than ideal.",
            quality, worst.metric
        ),
        statistics: format!(
            "{} losses out of {} {} entries ({:.0}% loss rate)",
            t.losses,
            t.total(),
            quality,
            worst.metric
        ),
        suggestion: suggestions::entry_timing(quality).to_string(),
        filter_params: loss_filter("entry_quality", quality.as_str()),
    })
}

pub fn poi_performance(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let buckets = tally_by(records, |r| {
        r.poi_performance()
            .filter(|p| PoiPerformance::PROBLEMATIC.contains(p))
    });
    let worst = worst_bucket(
        &buckets,
        min_sample,
        Tally::total,
        Tally::loss_rate,
        Worse::Higher,
    )?;
    if worst.metric <= POI_MAX_LOSS_RATE {
        return None;
    }

    let poi = worst.key;
    let t = worst.tally;
    Some(Finding {
        pattern_type: PatternType::Poi,
        title: format!("POI {} Leads to Losses", poi.title()),
        severity_score: severity(worst.metric),
        description: format!(
            "Trades where POI {} have a {:.0}% loss rate.",
            poi, worst.metric
        ),
        statistics: format!(
            "{} losses out of {} trades when POI {} ({:.0}% loss rate)",
            t.losses,
            t.total(),
            poi,
            worst.metric
        ),
        suggestion: suggestions::poi(poi),
        filter_params: loss_filter("poi_performance", poi.as_str()),
    })
}

pub fn session(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let buckets = tally_by(records, TradeRecord::session);
    let worst = worst_bucket(
        &buckets,
        min_sample,
        Tally::total,
        Tally::win_rate,
        Worse::Lower,
    )?;
    if worst.metric >= SESSION_MAX_WIN_RATE {
        return None;
    }

    let session = worst.key;
    let t = worst.tally;
    Some(Finding {
        pattern_type: PatternType::Session,
        title: format!("Weak Performance in {} Session", session.title()),
        severity_score: severity(100.0 - worst.metric),
        description: format!(
            "Your win rate during {} session is {:.1}%, significantly below average.",
            session.title(),
            worst.metric
        ),
        statistics: format!(
            "{} losses out of {} trades during {} session ({:.0}% win rate)",
            t.losses,
            t.total(),
            session.title(),
            worst.metric
        ),
        suggestion: suggestions::session(session),
        filter_params: loss_filter("session", session.as_str()),
    })
}

pub fn market_behaviour(records: &[TradeRecord], min_sample: usize) -> Option<Finding> {
    let buckets = tally_by(records, |r| {
        r.market_behaviour()
            .filter(|b| MarketBehaviour::PROBLEMATIC.contains(b))
    });
    let worst = worst_bucket(
        &buckets,
        min_sample,
        Tally::total,
        Tally::loss_rate,
        Worse::Higher,
    )?;
    if worst.metric <= BEHAVIOUR_MAX_LOSS_RATE {
        return None;
    }

    let behaviour = worst.key;
    let t = worst.tally;
    Some(Finding {
        pattern_type: PatternType::Behavior,
        title: format!("Market {} Causes Losses", behaviour.title()),
        severity_score: severity(worst.metric),
        description: format!(
            "When market behaves {}, your loss rate is {:.0}%.",
            behaviour, worst.metric
        ),
        statistics: format!(
            "{} losses out of {} trades when market {} ({:.0}% loss rate)",
            t.losses,
            t.total(),
            behaviour,
            worst.metric
        ),
        suggestion: suggestions::behaviour(behaviour).to_string(),
        filter_params: loss_filter("market_behaviour", behaviour.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::trades;

    const MIN: usize = 3;

    #[test]
    fn empty_input_finds_nothing() {
        for (_, detect) in DETECTORS {
            assert!(detect(&[], MIN).is_none());
        }
    }

    #[test]
    fn market_condition_below_floor_is_ignored() {
        let records = trades(0, 2, |r| r.market_condition = "Consolidating".into());
        assert!(market_condition(&records, MIN).is_none());
    }

    #[test]
    fn market_condition_threshold_is_strict() {
        let records = trades(2, 2, |r| r.market_condition = "Consolidating".into());
        assert!(market_condition(&records, MIN).is_none());

        let records = trades(2, 3, |r| r.market_condition = "Consolidating".into());
        let f = market_condition(&records, MIN).unwrap();
        assert_eq!(f.severity_score, 60);
        assert_eq!(f.title, "Struggling in Consolidating Markets");
        assert!(f.description.contains("40.0%"));
    }

    #[test]
    fn market_condition_picks_worst_condition() {
        let mut records = trades(1, 3, |r| r.market_condition = "Trending Up".into());
        records.extend(trades(0, 4, |r| r.market_condition = "Trending Down".into()));
        let f = market_condition(&records, MIN).unwrap();
        assert_eq!(f.title, "Struggling in Trending Down Markets");
        assert_eq!(f.severity_score, 100);
        assert_eq!(
            f.filter_params.to_query_string(),
            "market_condition=Trending+Down&outcome=loss"
        );
    }

    #[test]
    fn unknown_market_condition_is_excluded() {
        let records = trades(0, 5, |r| r.market_condition = "Sideways".into());
        assert!(market_condition(&records, MIN).is_none());
    }

    #[test]
    fn discipline_share_over_threshold() {
        let mut records = trades(1, 3, |r| r.discipline_score = "poor".into());
        records.extend(trades(6, 0, |r| r.discipline_score = "excellent".into()));
        let f = discipline(&records, MIN).unwrap();
        assert_eq!(f.severity_score, 40);
        assert!(f.description.starts_with("40%"));
        assert!(f.statistics.contains("25.0%"));
        assert!(f.statistics.contains("4 trades analyzed"));
    }

    #[test]
    fn discipline_exactly_thirty_percent_is_not_reported() {
        let mut records = trades(0, 3, |r| r.discipline_score = "very poor".into());
        records.extend(trades(7, 0, |r| r.discipline_score = "good".into()));
        assert!(discipline(&records, MIN).is_none());
    }

    #[test]
    fn discipline_needs_three_poor_trades() {
        let mut records = trades(0, 2, |r| r.discipline_score = "poor".into());
        records.extend(trades(1, 0, |r| r.discipline_score = "good".into()));
        assert!(discipline(&records, MIN).is_none());
    }

    #[test]
    fn discipline_counts_average_as_poor_tier() {
        let records = trades(3, 0, |r| r.discipline_score = "average".into());
        let f = discipline(&records, MIN).unwrap();
        assert_eq!(f.severity_score, 100);
        assert!(f.filter_params.matches(&records[0]));
    }

    #[test]
    fn bias_accuracy_low() {
        let mut records = trades(3, 0, |r| {
            r.bias = "bearish".into();
            r.predicted_directional_bias = "incorrect".into();
        });
        records.extend(trades(1, 0, |r| {
            r.bias = "bearish".into();
            r.predicted_directional_bias = "correct".into();
        }));
        let f = bias_accuracy(&records, MIN).unwrap();
        assert_eq!(f.title, "Bearish Bias Accuracy Low");
        assert_eq!(f.severity_score, 75);
        assert!(f.statistics.starts_with("3 incorrect predictions out of 4 bearish trades"));
        assert_eq!(
            f.filter_params.to_query_string(),
            "bias=bearish&predicted_directional_bias=incorrect"
        );
    }

    #[test]
    fn bias_accuracy_at_sixty_is_fine() {
        let mut records = trades(3, 0, |r| {
            r.bias = "bullish".into();
            r.predicted_directional_bias = "correct".into();
        });
        records.extend(trades(2, 0, |r| {
            r.bias = "bullish".into();
            r.predicted_directional_bias = "partial".into();
        }));
        assert!(bias_accuracy(&records, MIN).is_none());
    }

    #[test]
    fn entry_timing_tie_goes_to_most_frequent() {
        let mut records = trades(1, 3, |r| r.entry_quality = "early".into());
        records.extend(trades(2, 6, |r| r.entry_quality = "late".into()));
        let f = entry_timing(&records, MIN).unwrap();
        assert_eq!(f.title, "Late Entries Reduce Accuracy");
        assert_eq!(f.severity_score, 75);
        assert!(f.statistics.starts_with("6 losses out of 8 late entries"));
    }

    #[test]
    fn entry_timing_ignores_perfect_entries() {
        let records = trades(0, 10, |r| r.entry_quality = "perfect".into());
        assert!(entry_timing(&records, MIN).is_none());
    }

    #[test]
    fn entry_timing_accepts_hyphenated_labels() {
        let records = trades(0, 3, |r| r.entry_quality = "stop-loss-issue".into());
        let f = entry_timing(&records, MIN).unwrap();
        assert_eq!(f.title, "Stop Loss Placement Reduce Accuracy");
        assert!(f.suggestion.starts_with("Review your stop loss placement"));
        assert_eq!(f.filter_params.apply(&records).len(), 3);
    }

    #[test]
    fn poi_loss_rate_threshold() {
        let records = trades(2, 2, |r| r.poi_performance = "rejected".into());
        assert!(poi_performance(&records, MIN).is_none());

        let records = trades(1, 2, |r| r.poi_performance = "no htf poi".into());
        let f = poi_performance(&records, MIN).unwrap();
        assert_eq!(f.title, "POI No HTF POI Leads to Losses");
        assert_eq!(f.severity_score, 67);
    }

    #[test]
    fn poi_ignores_respected_perfectly() {
        let records = trades(0, 5, |r| r.poi_performance = "respected perfectly".into());
        assert!(poi_performance(&records, MIN).is_none());
    }

    #[test]
    fn session_below_forty_five() {
        let mut records = trades(2, 3, |r| r.session = "NewYork".into());
        records.extend(trades(4, 1, |r| r.session = "London".into()));
        let f = session(&records, MIN).unwrap();
        assert_eq!(f.title, "Weak Performance in New York Session");
        assert_eq!(f.severity_score, 60);
        assert_eq!(
            f.filter_params.to_query_string(),
            "outcome=loss&session=NewYork"
        );
    }

    #[test]
    fn session_at_fifty_is_fine() {
        let records = trades(2, 2, |r| r.session = "Asian".into());
        assert!(session(&records, MIN).is_none());
    }

    #[test]
    fn market_behaviour_worst_loss_rate() {
        let mut records = trades(1, 3, |r| r.market_behaviour = "choppy".into());
        records.extend(trades(0, 3, |r| {
            r.market_behaviour = "hit stop then reversed".into()
        }));
        let f = market_behaviour(&records, MIN).unwrap();
        assert_eq!(f.title, "Market Hit Stop Then Reversed Causes Losses");
        assert_eq!(f.severity_score, 100);
        assert!(f
            .suggestion
            .starts_with("Your stop losses may be too tight"));
    }

    #[test]
    fn market_behaviour_sixty_percent_is_not_reported() {
        let records = trades(2, 3, |r| r.market_behaviour = "surprise".into());
        assert!(market_behaviour(&records, MIN).is_none());
    }

    #[test]
    fn thin_poi_bucket_does_not_mask_qualifying_one() {
        let mut records = trades(0, 2, |r| r.poi_performance = "rejected".into());
        records.extend(trades(1, 2, |r| r.poi_performance = "overshot".into()));
        let f = poi_performance(&records, MIN).unwrap();
        assert_eq!(f.title, "POI Overshot Leads to Losses");
        assert_eq!(f.severity_score, 67);
    }

    #[test]
    fn thin_behaviour_bucket_does_not_mask_qualifying_one() {
        let mut records = trades(0, 2, |r| r.market_behaviour = "opposite".into());
        records.extend(trades(1, 3, |r| r.market_behaviour = "choppy".into()));
        let f = market_behaviour(&records, MIN).unwrap();
        assert_eq!(f.title, "Market Choppy Causes Losses");
        assert_eq!(f.severity_score, 75);
    }

    #[test]
    fn bias_without_verdict_is_excluded() {
        let records = trades(0, 5, |r| r.bias = "bullish".into());
        assert!(bias_accuracy(&records, MIN).is_none());

        let records = trades(0, 5, |r| {
            r.bias = "bullish".into();
            r.predicted_directional_bias = "maybe".into();
        });
        assert!(bias_accuracy(&records, MIN).is_none());
    }

    #[test]
    fn detectors_are_deterministic() {
        let mut records = trades(1, 4, |r| {
            r.market_condition = "Consolidating".into();
            r.session = "Asian".into();
            r.entry_quality = "chased".into();
        });
        records.extend(trades(2, 3, |r| {
            r.market_condition = "Trending Up".into();
            r.entry_quality = "late".into();
        }));
        for (kind, detect) in DETECTORS {
            let first = detect(&records, MIN);
            assert_eq!(first, detect(&records, MIN));
            if let Some(f) = first {
                assert_eq!(f.pattern_type, kind);
            }
        }
    }
}
