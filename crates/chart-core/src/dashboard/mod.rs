// File: crates/chart-core/src/dashboard/mod.rs
// Summary: Dashboard view state owned by the host: named actions, stock search, history table, level/sentiment tables.

pub mod levels;
pub mod search;
pub mod state;
pub mod table;

pub use levels::{score_ring_offset, Icon, RiskLevel, ScoreBand, Sentiment};
pub use search::{name_of, symbol_of, SearchAction, SearchState, INDIAN_STOCKS};
pub use state::{Action, DashboardState};
pub use table::{HistoryRow, SortDirection, SortField, TablePage, TableState, ROWS_PER_PAGE};
