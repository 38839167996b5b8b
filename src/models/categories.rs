use std::fmt;

/// Reduce a journal label to lowercase alphanumerics so that
/// `stop-loss-issue`, `stop_loss_issue` and `Stop Loss Issue` compare equal.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// A closed set of journal choices. Records store the raw label; anything
/// outside the set parses to `None` and is left out of the statistics.
pub trait Vocabulary: Sized + Copy + Ord + fmt::Display + 'static {
    const ALL: &'static [Self];

    /// The label as stored in the journal.
    fn as_str(&self) -> &'static str;

    /// Human-readable label used in titles.
    fn title(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        let key = normalize_label(label);
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_label(v.as_str()) == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarketCondition {
    TrendingUp,
    TrendingDown,
    Consolidating,
}

impl Vocabulary for MarketCondition {
    const ALL: &'static [Self] = &[
        MarketCondition::TrendingUp,
        MarketCondition::TrendingDown,
        MarketCondition::Consolidating,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            MarketCondition::TrendingUp => "Trending Up",
            MarketCondition::TrendingDown => "Trending Down",
            MarketCondition::Consolidating => "Consolidating",
        }
    }

    fn title(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisciplineScore {
    Excellent,
    Good,
    Average,
    Poor,
    VeryPoor,
}

impl DisciplineScore {
    /// Scores flagged by the discipline detector. `Average` is part of the
    /// flagged tier.
    pub const POOR_TIER: &'static [DisciplineScore] = &[
        DisciplineScore::Poor,
        DisciplineScore::VeryPoor,
        DisciplineScore::Average,
    ];

    pub fn is_poor_tier(&self) -> bool {
        Self::POOR_TIER.contains(self)
    }
}

impl Vocabulary for DisciplineScore {
    const ALL: &'static [Self] = &[
        DisciplineScore::Excellent,
        DisciplineScore::Good,
        DisciplineScore::Average,
        DisciplineScore::Poor,
        DisciplineScore::VeryPoor,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DisciplineScore::Excellent => "excellent",
            DisciplineScore::Good => "good",
            DisciplineScore::Average => "average",
            DisciplineScore::Poor => "poor",
            DisciplineScore::VeryPoor => "very poor",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            DisciplineScore::Excellent => "Excellent",
            DisciplineScore::Good => "Good",
            DisciplineScore::Average => "Average",
            DisciplineScore::Poor => "Poor",
            DisciplineScore::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for DisciplineScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bias {
    Bullish,
    Bearish,
}

impl Vocabulary for Bias {
    const ALL: &'static [Self] = &[Bias::Bullish, Bias::Bearish];

    fn as_str(&self) -> &'static str {
        match self {
            Bias::Bullish => "bullish",
            Bias::Bearish => "bearish",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Bias::Bullish => "Bullish",
            Bias::Bearish => "Bearish",
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the pre-trade directional call held up once the trade played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BiasPrediction {
    Correct,
    Incorrect,
    Partial,
}

impl Vocabulary for BiasPrediction {
    const ALL: &'static [Self] = &[
        BiasPrediction::Correct,
        BiasPrediction::Incorrect,
        BiasPrediction::Partial,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            BiasPrediction::Correct => "correct",
            BiasPrediction::Incorrect => "incorrect",
            BiasPrediction::Partial => "partial",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            BiasPrediction::Correct => "Correct",
            BiasPrediction::Incorrect => "Incorrect",
            BiasPrediction::Partial => "Partial",
        }
    }
}

impl fmt::Display for BiasPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryQuality {
    Perfect,
    Chased,
    Early,
    Late,
    StopLossIssue,
}

impl EntryQuality {
    pub const PROBLEMATIC: &'static [EntryQuality] = &[
        EntryQuality::Chased,
        EntryQuality::Early,
        EntryQuality::Late,
        EntryQuality::StopLossIssue,
    ];
}

impl Vocabulary for EntryQuality {
    const ALL: &'static [Self] = &[
        EntryQuality::Perfect,
        EntryQuality::Chased,
        EntryQuality::Early,
        EntryQuality::Late,
        EntryQuality::StopLossIssue,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            EntryQuality::Perfect => "perfect",
            EntryQuality::Chased => "chased",
            EntryQuality::Early => "early",
            EntryQuality::Late => "late",
            EntryQuality::StopLossIssue => "stop loss issue",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            EntryQuality::Perfect => "Perfect Entries",
            EntryQuality::Chased => "Chased Entries",
            EntryQuality::Early => "Early Entries",
            EntryQuality::Late => "Late Entries",
            EntryQuality::StopLossIssue => "Stop Loss Placement",
        }
    }
}

impl fmt::Display for EntryQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoiPerformance {
    RespectedPerfectly,
    Overshot,
    PartialFill,
    NoHtfPoi,
    Rejected,
}

impl PoiPerformance {
    pub const PROBLEMATIC: &'static [PoiPerformance] = &[
        PoiPerformance::Rejected,
        PoiPerformance::Overshot,
        PoiPerformance::NoHtfPoi,
    ];
}

impl Vocabulary for PoiPerformance {
    const ALL: &'static [Self] = &[
        PoiPerformance::RespectedPerfectly,
        PoiPerformance::Overshot,
        PoiPerformance::PartialFill,
        PoiPerformance::NoHtfPoi,
        PoiPerformance::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PoiPerformance::RespectedPerfectly => "respected perfectly",
            PoiPerformance::Overshot => "overshot",
            PoiPerformance::PartialFill => "partial fill",
            PoiPerformance::NoHtfPoi => "no htf poi",
            PoiPerformance::Rejected => "rejected",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            PoiPerformance::RespectedPerfectly => "Respected Perfectly",
            PoiPerformance::Overshot => "Overshot",
            PoiPerformance::PartialFill => "Partial Fill",
            PoiPerformance::NoHtfPoi => "No HTF POI",
            PoiPerformance::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for PoiPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Session {
    Asian,
    London,
    NewYork,
}

impl Vocabulary for Session {
    const ALL: &'static [Self] = &[Session::Asian, Session::London, Session::NewYork];

    fn as_str(&self) -> &'static str {
        match self {
            Session::Asian => "Asian",
            Session::London => "London",
            Session::NewYork => "NewYork",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Session::Asian => "Asian",
            Session::London => "London",
            Session::NewYork => "New York",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarketBehaviour {
    AsExpected,
    Choppy,
    Surprise,
    Opposite,
    HitStopThenReversed,
}

impl MarketBehaviour {
    pub const PROBLEMATIC: &'static [MarketBehaviour] = &[
        MarketBehaviour::Opposite,
        MarketBehaviour::Surprise,
        MarketBehaviour::HitStopThenReversed,
        MarketBehaviour::Choppy,
    ];
}

impl Vocabulary for MarketBehaviour {
    const ALL: &'static [Self] = &[
        MarketBehaviour::AsExpected,
        MarketBehaviour::Choppy,
        MarketBehaviour::Surprise,
        MarketBehaviour::Opposite,
        MarketBehaviour::HitStopThenReversed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            MarketBehaviour::AsExpected => "as expected",
            MarketBehaviour::Choppy => "choppy",
            MarketBehaviour::Surprise => "surprise",
            MarketBehaviour::Opposite => "opposite",
            MarketBehaviour::HitStopThenReversed => "hit stop then reversed",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            MarketBehaviour::AsExpected => "As Expected",
            MarketBehaviour::Choppy => "Choppy",
            MarketBehaviour::Surprise => "Surprise",
            MarketBehaviour::Opposite => "Opposite",
            MarketBehaviour::HitStopThenReversed => "Hit Stop Then Reversed",
        }
    }
}

impl fmt::Display for MarketBehaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
