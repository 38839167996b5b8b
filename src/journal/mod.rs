pub mod query;
pub mod store;
pub mod summary;
pub mod trade_record;

pub use query::{FilterParams, FilterValue, TimeFilter};
pub use store::{InMemoryJournal, JournalSnapshot, RecordStore};
pub use summary::TradeSummary;
pub use trade_record::{BacktestRecord, PreTradeRecord, TradeRecord};
