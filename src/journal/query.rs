use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::journal::trade_record::TradeRecord;
use crate::models::normalize_label;

/// Recency window applied to every journal collection before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    #[default]
    All,
    /// The most recent N entries of each collection, by date.
    #[serde(rename = "last_30")]
    Recent,
}

impl TimeFilter {
    /// `last_30` selects the recent window; anything else means all records.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("last_30") => TimeFilter::Recent,
            None | Some("") | Some("all") => TimeFilter::All,
            Some(other) => {
                warn!("Unknown time filter '{}', analyzing all records", other);
                TimeFilter::All
            }
        }
    }

    pub fn limit(&self, recent_limit: usize) -> Option<usize> {
        match self {
            TimeFilter::All => None,
            TimeFilter::Recent => Some(recent_limit),
        }
    }

    /// Human-readable window, with the limit actually applied.
    pub fn describe(&self, recent_limit: usize) -> String {
        match self.limit(recent_limit) {
            None => "all entries".to_string(),
            Some(n) => format!("last {} entries", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    fn accepts(&self, raw: &str) -> bool {
        let key = normalize_label(raw);
        if key.is_empty() {
            return false;
        }
        match self {
            FilterValue::One(v) => normalize_label(v) == key,
            FilterValue::Many(vs) => vs.iter().any(|v| normalize_label(v) == key),
        }
    }
}

/// Field name to value(s) selecting the trades a finding is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterParams(BTreeMap<String, FilterValue>);

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.0
            .insert(field.to_string(), FilterValue::One(value.to_string()));
        self
    }

    pub fn with_any(mut self, field: &str, values: &[&str]) -> Self {
        self.0.insert(
            field.to_string(),
            FilterValue::Many(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A field the record does not expose never matches.
    pub fn matches(&self, record: &TradeRecord) -> bool {
        self.0.iter().all(|(field, value)| {
            record
                .field(field)
                .map_or(false, |raw| value.accepts(raw))
        })
    }

    pub fn apply<'a>(&self, records: &'a [TradeRecord]) -> Vec<&'a TradeRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// URL query for the trade list, repeating the key for multi-value fields.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (field, value) in &self.0 {
            match value {
                FilterValue::One(v) => {
                    serializer.append_pair(field, v);
                }
                FilterValue::Many(vs) => {
                    for v in vs {
                        serializer.append_pair(field, v);
                    }
                }
            }
        }
        serializer.finish()
    }
}
