use crate::models::{Bias, EntryQuality, MarketBehaviour, MarketCondition, PoiPerformance, Session};

const MARKET_CONDITION: &[(MarketCondition, &str)] = &[
    (
        MarketCondition::Consolidating,
        "Avoid trading during consolidation unless you have clear range boundaries. Wait for breakout confirmation or trade the range edges.",
    ),
    (
        MarketCondition::TrendingUp,
        "Focus on pullback entries rather than chasing. Wait for retests of support levels.",
    ),
    (
        MarketCondition::TrendingDown,
        "Look for retracements to resistance levels. Avoid buying dips in strong downtrends.",
    ),
];
const MARKET_CONDITION_FALLBACK: &str = "Review your strategy for this market condition.";

const ENTRY_TIMING: &[(EntryQuality, &str)] = &[
    (
        EntryQuality::Chased,
        "Avoid chasing price moves. Wait for proper retests and confirmations before entering.",
    ),
    (
        EntryQuality::Early,
        "Be more patient. Wait for full confirmation signals before entering trades.",
    ),
    (
        EntryQuality::Late,
        "Your entries are too late. Consider entering on initial setup confirmation rather than waiting.",
    ),
    (
        EntryQuality::StopLossIssue,
        "Review your stop loss placement. Ensure stops are placed beyond significant support/resistance levels.",
    ),
];
const ENTRY_TIMING_FALLBACK: &str = "Review your entry timing and methodology.";

const BEHAVIOUR: &[(MarketBehaviour, &str)] = &[
    (
        MarketBehaviour::Opposite,
        "Market moved against your bias. Strengthen your bias confirmation process and wait for clearer signals.",
    ),
    (
        MarketBehaviour::Surprise,
        "Unexpected market moves indicate you may be missing key information. Review news, economic events, and market context before trading.",
    ),
    (
        MarketBehaviour::HitStopThenReversed,
        "Your stop losses may be too tight or placed incorrectly. Review stop placement strategy.",
    ),
    (
        MarketBehaviour::Choppy,
        "Avoid trading in choppy markets. Wait for clearer trends and better liquidity conditions.",
    ),
];
const BEHAVIOUR_FALLBACK: &str = "Review your trading strategy for this market behavior.";

pub const DISCIPLINE: &str = "Review your trading rules and stick to your plan. Consider using checklists before each trade. Avoid emotional trading and wait for clear setups.";

fn lookup<K: PartialEq>(table: &[(K, &'static str)], key: K, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(fallback, |&(_, text)| text)
}

pub fn market_condition(condition: MarketCondition) -> &'static str {
    lookup(MARKET_CONDITION, condition, MARKET_CONDITION_FALLBACK)
}

pub fn entry_timing(quality: EntryQuality) -> &'static str {
    lookup(ENTRY_TIMING, quality, ENTRY_TIMING_FALLBACK)
}

pub fn behaviour(behaviour: MarketBehaviour) -> &'static str {
    lookup(BEHAVIOUR, behaviour, BEHAVIOUR_FALLBACK)
}

pub fn bias(bias: Bias) -> String {
    format!(
        "Review your {b} bias analysis methodology. Consider waiting for stronger confirmation signals before entering {b} positions. Study successful {b} trades to identify patterns.",
        b = bias
    )
}

pub fn poi(poi: PoiPerformance) -> String {
    format!(
        "Avoid trading when POI {}. Wait for POI to be respected perfectly or look for better setups. Review your POI identification process.",
        poi
    )
}

pub fn session(session: Session) -> String {
    format!(
        "Consider avoiding {} session trades or focus on improving your setup identification during this time. Analyze what makes other sessions more successful.",
        session
    )
}
