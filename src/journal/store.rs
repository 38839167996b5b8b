use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::JournalError;
use crate::journal::trade_record::{BacktestRecord, Dated, PreTradeRecord, TradeRecord};

/// Read access to a user's journal. `limit` keeps only the most recent
/// entries by date.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_after_trade_records(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<Vec<TradeRecord>, JournalError>;

    async fn count_pre_trade_records(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<usize, JournalError>;

    async fn count_backtest_records(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<usize, JournalError>;
}

/// On-disk journal export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalSnapshot {
    #[serde(default)]
    pub after_trades: Vec<TradeRecord>,
    #[serde(default)]
    pub pre_trades: Vec<PreTradeRecord>,
    #[serde(default)]
    pub backtests: Vec<BacktestRecord>,
}

/// A journal held entirely in memory, for any number of users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournal {
    snapshot: JournalSnapshot,
}

impl InMemoryJournal {
    pub fn new(snapshot: JournalSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| JournalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: JournalSnapshot =
            serde_json::from_str(&content).map_err(|source| JournalError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "Loaded journal {}: {} after-trade, {} pre-trade, {} backtest entries",
            path.display(),
            snapshot.after_trades.len(),
            snapshot.pre_trades.len(),
            snapshot.backtests.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn push_after_trade(&mut self, record: TradeRecord) {
        self.snapshot.after_trades.push(record);
    }

    pub fn push_pre_trade(&mut self, record: PreTradeRecord) {
        self.snapshot.pre_trades.push(record);
    }

    pub fn push_backtest(&mut self, record: BacktestRecord) {
        self.snapshot.backtests.push(record);
    }

    pub fn snapshot(&self) -> &JournalSnapshot {
        &self.snapshot
    }
}

/// The user's entries, newest first and capped at `limit` when one is given.
/// Entries sharing a date keep the higher id first.
fn select_for_user<T: Dated + Clone>(entries: &[T], user_id: u64, limit: Option<usize>) -> Vec<T> {
    let mut selected: Vec<T> = entries
        .iter()
        .filter(|e| e.user_id() == user_id)
        .cloned()
        .collect();
    if let Some(limit) = limit {
        selected.sort_by(|a, b| b.date().cmp(&a.date()).then(b.id().cmp(&a.id())));
        selected.truncate(limit);
    }
    selected
}

#[async_trait]
impl RecordStore for InMemoryJournal {
    async fn fetch_after_trade_records(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<Vec<TradeRecord>, JournalError> {
        Ok(select_for_user(&self.snapshot.after_trades, user_id, limit))
    }

    async fn count_pre_trade_records(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<usize, JournalError> {
        Ok(select_for_user(&self.snapshot.pre_trades, user_id, limit).len())
    }

    async fn count_backtest_records(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<usize, JournalError> {
        Ok(select_for_user(&self.snapshot.backtests, user_id, limit).len())
    }
}
