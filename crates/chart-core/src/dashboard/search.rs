// File: crates/chart-core/src/dashboard/search.rs
// Summary: Stock search box: substring suggestions, keyboard focus and symbol selection.

use super::state::Action;

/// Listed stocks as `"SYMBOL - Company name"`.
pub const INDIAN_STOCKS: [&str; 20] = [
    "RELIANCE - Reliance Industries Ltd",
    "TCS - Tata Consultancy Services",
    "HDFCBANK - HDFC Bank Ltd",
    "INFY - Infosys Ltd",
    "ICICIBANK - ICICI Bank Ltd",
    "HINDUNILVR - Hindustan Unilever Ltd",
    "BHARTIARTL - Bharti Airtel Ltd",
    "ITC - ITC Ltd",
    "SBIN - State Bank of India",
    "BAJFINANCE - Bajaj Finance Ltd",
    "ASIANPAINT - Asian Paints Ltd",
    "MARUTI - Maruti Suzuki India Ltd",
    "TITAN - Titan Company Ltd",
    "WIPRO - Wipro Ltd",
    "AXISBANK - Axis Bank Ltd",
    "ULTRACEMCO - UltraTech Cement Ltd",
    "NESTLEIND - Nestle India Ltd",
    "TATASTEEL - Tata Steel Ltd",
    "HCLTECH - HCL Technologies Ltd",
    "SUNPHARMA - Sun Pharmaceutical Industries",
];

const SEPARATOR: &str = " - ";

/// Ticker part of a `"SYMBOL - Name"` entry; the whole entry when there is no separator.
pub fn symbol_of(entry: &str) -> &str {
    entry.split_once(SEPARATOR).map_or(entry, |(symbol, _)| symbol)
}

/// Company-name part of an entry, if present.
pub fn name_of(entry: &str) -> Option<&str> {
    entry.split_once(SEPARATOR).map(|(_, name)| name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// Input text changed. Recomputes suggestions and clears focus.
    SetQuery(String),
    /// ArrowDown; stops at the last suggestion.
    FocusNext,
    /// ArrowUp; past the first suggestion focus returns to the input.
    FocusPrevious,
    /// Pointer over suggestion `i`.
    Hover(usize),
    /// Click on suggestion `i`.
    Choose(usize),
    /// Enter: the focused suggestion, else the first one.
    Submit,
    /// Escape.
    Dismiss,
    /// Input regained focus; reopens the list for a non-empty query.
    InputFocused,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    universe: Vec<String>,
    pub query: String,
    pub suggestions: Vec<String>,
    pub open: bool,
    /// `None` while the caret is in the input.
    pub focused: Option<usize>,
}

impl SearchState {
    pub fn new(universe: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            universe: universe.into_iter().map(Into::into).collect(),
            query: String::new(),
            suggestions: Vec::new(),
            open: false,
            focused: None,
        }
    }

    /// Whether the suggestion list is rendered.
    pub fn is_listing(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    pub fn is_focused(&self, i: usize) -> bool {
        self.focused == Some(i)
    }

    fn refresh(&mut self) {
        if self.query.trim().is_empty() {
            self.suggestions.clear();
            self.open = false;
        } else {
            let needle = self.query.to_lowercase();
            self.suggestions = self.universe.iter().filter(|s| s.to_lowercase().contains(&needle)).cloned().collect();
            self.open = true;
        }
        self.focused = None;
    }

    /// Put the chosen entry in the input, close the list and emit the symbol selection.
    fn select(&mut self, i: usize) -> Option<Action> {
        let entry = self.suggestions.get(i)?.clone();
        let symbol = symbol_of(&entry).to_string();
        self.query = entry;
        self.refresh();
        self.open = false;
        Some(Action::SelectSymbol(symbol))
    }

    /// Apply one input event. Returns the dashboard action a selection produces.
    pub fn update(&mut self, action: SearchAction) -> Option<Action> {
        match action {
            SearchAction::SetQuery(query) => {
                self.query = query;
                self.refresh();
            }
            SearchAction::FocusNext => {
                let last = self.suggestions.len().checked_sub(1)?;
                self.focused = Some(self.focused.map_or(0, |i| (i + 1).min(last)));
            }
            SearchAction::FocusPrevious => {
                self.focused = self.focused.and_then(|i| i.checked_sub(1));
            }
            SearchAction::Hover(i) if i < self.suggestions.len() => self.focused = Some(i),
            SearchAction::Hover(_) => {}
            SearchAction::Choose(i) => return self.select(i),
            SearchAction::Submit => return self.select(self.focused.unwrap_or(0)),
            SearchAction::Dismiss => self.open = false,
            SearchAction::InputFocused => self.open = !self.query.is_empty(),
        }
        None
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(INDIAN_STOCKS)
    }
}
