// File: crates/chart-core/src/dashboard/state.rs
// Summary: Host-owned dashboard view state and its named transitions.

use super::search::{SearchAction, SearchState};
use super::table::{HistoryRow, SortField, TableState};
use crate::provider::Timeframe;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectSymbol(String),
    ToggleSidebar,
    CloseSidebar,
    SetTimeframe(Timeframe),
    OpenScoreModal,
    CloseScoreModal,
    /// Expand risk row `i`, or collapse it if it is the one already open.
    ToggleRisk(usize),
    SetSort(SortField),
    SetPage(usize),
    NextPage,
    PreviousPage,
    SetFilter(String),
    /// Search box event; a selection continues as `SelectSymbol`.
    Search(SearchAction),
}

impl Action {
    /// Whether the price chart may need a re-render after this action.
    /// Search submissions count because they can select a symbol.
    pub fn redraws_price_chart(&self) -> bool {
        matches!(
            self,
            Action::SetTimeframe(_)
                | Action::SelectSymbol(_)
                | Action::Search(SearchAction::Submit | SearchAction::Choose(_))
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub symbol: String,
    pub sidebar_open: bool,
    pub timeframe: Timeframe,
    pub score_modal_open: bool,
    pub expanded_risk: Option<usize>,
    pub search: SearchState,
    pub table: TableState,
    pub history: Vec<HistoryRow>,
}

impl DashboardState {
    pub fn new(symbol: impl Into<String>, history: Vec<HistoryRow>) -> Self {
        Self {
            symbol: symbol.into(),
            sidebar_open: false,
            timeframe: Timeframe::default(),
            score_modal_open: false,
            expanded_risk: None,
            search: SearchState::default(),
            table: TableState::default(),
            history,
        }
    }

    /// Next state after `action`. Never mutates anything else.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SelectSymbol(symbol) => {
                self.symbol = symbol;
                self.sidebar_open = false;
            }
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::CloseSidebar => self.sidebar_open = false,
            Action::SetTimeframe(tf) => self.timeframe = tf,
            Action::OpenScoreModal => self.score_modal_open = true,
            Action::CloseScoreModal => self.score_modal_open = false,
            Action::ToggleRisk(i) => {
                self.expanded_risk = if self.expanded_risk == Some(i) { None } else { Some(i) };
            }
            Action::SetSort(field) => self.table.set_sort(field),
            Action::SetPage(page) => self.table.set_page(page, &self.history),
            Action::NextPage => {
                let next = self.table.page + 1;
                self.table.set_page(next, &self.history);
            }
            Action::PreviousPage => {
                let prev = self.table.page.saturating_sub(1);
                self.table.set_page(prev, &self.history);
            }
            Action::SetFilter(text) => self.table.set_filter(text),
            Action::Search(event) => {
                if let Some(next) = self.search.update(event) {
                    return self.apply(next);
                }
            }
        }
        self
    }

    pub fn is_risk_expanded(&self, i: usize) -> bool {
        self.expanded_risk == Some(i)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new("RELIANCE", HistoryRow::sample())
    }
}
