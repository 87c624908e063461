// File: crates/chart-core/src/dashboard/table.rs
// Summary: Historical financials table: year filter, column sort and fixed-size pagination.

use std::cmp::Ordering;

use crate::format::NumberFormat;

/// Rows per table page.
pub const ROWS_PER_PAGE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub year: String,
    /// ₹ crore
    pub revenue: f64,
    /// ₹ crore
    pub net_profit: f64,
    pub eps: f64,
    pub pe: f64,
    /// percent
    pub roe: f64,
    /// debt to equity
    pub debt: f64,
}

impl HistoryRow {
    /// Cells in column order, formatted for display.
    pub fn cells(&self) -> [String; 7] {
        let grouped = NumberFormat::grouped();
        let one = NumberFormat::fixed(1);
        [
            self.year.clone(),
            grouped.format(self.revenue),
            grouped.format(self.net_profit),
            one.format(self.eps),
            one.format(self.pe),
            one.clone().with_suffix("%").format(self.roe),
            NumberFormat::fixed(2).format(self.debt),
        ]
    }

    /// Eight fiscal years of the reference company, newest first.
    pub fn sample() -> Vec<HistoryRow> {
        let row = |year: &str, revenue, net_profit, eps, pe, roe, debt| HistoryRow {
            year: year.to_string(),
            revenue,
            net_profit,
            eps,
            pe,
            roe,
            debt,
        };
        vec![
            row("FY 2024", 84_000.0, 10_080.0, 125.3, 22.7, 14.2, 0.45),
            row("FY 2023", 73_000.0, 8_760.0, 108.9, 24.1, 13.8, 0.52),
            row("FY 2022", 61_000.0, 7_320.0, 91.0, 26.3, 13.1, 0.58),
            row("FY 2021", 52_000.0, 6_240.0, 77.6, 28.9, 12.4, 0.63),
            row("FY 2020", 45_000.0, 5_400.0, 67.1, 31.2, 11.8, 0.68),
            row("FY 2019", 39_000.0, 4_680.0, 58.2, 29.8, 11.2, 0.72),
            row("FY 2018", 34_000.0, 4_080.0, 50.7, 27.5, 10.8, 0.75),
            row("FY 2017", 30_000.0, 3_600.0, 44.8, 25.9, 10.3, 0.78),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Year,
    Revenue,
    NetProfit,
    Eps,
    Pe,
    Roe,
    Debt,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Year,
        SortField::Revenue,
        SortField::NetProfit,
        SortField::Eps,
        SortField::Pe,
        SortField::Roe,
        SortField::Debt,
    ];

    pub const fn header(self) -> &'static str {
        match self {
            SortField::Year => "Year",
            SortField::Revenue => "Revenue (\u{20b9}Cr)",
            SortField::NetProfit => "Net Profit (\u{20b9}Cr)",
            SortField::Eps => "EPS (\u{20b9})",
            SortField::Pe => "P/E",
            SortField::Roe => "ROE (%)",
            SortField::Debt => "D/E",
        }
    }

    fn compare(self, a: &HistoryRow, b: &HistoryRow) -> Ordering {
        let num = |f: fn(&HistoryRow) -> f64| f(a).total_cmp(&f(b));
        match self {
            SortField::Year => a.year.cmp(&b.year),
            SortField::Revenue => num(|r| r.revenue),
            SortField::NetProfit => num(|r| r.net_profit),
            SortField::Eps => num(|r| r.eps),
            SortField::Pe => num(|r| r.pe),
            SortField::Roe => num(|r| r.roe),
            SortField::Debt => num(|r| r.debt),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// `aria-sort` value.
    pub const fn aria(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub sort_field: SortField,
    pub direction: SortDirection,
    /// 1-based.
    pub page: usize,
    pub filter: String,
}

impl Default for TableState {
    fn default() -> Self {
        Self { sort_field: SortField::Year, direction: SortDirection::Descending, page: 1, filter: String::new() }
    }
}

/// One page of the filtered, sorted table.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePage {
    pub rows: Vec<HistoryRow>,
    pub page: usize,
    pub total_pages: usize,
    /// Rows matching the filter across all pages.
    pub matching: usize,
    /// 0-based index of the first row of this page within the matching rows.
    pub offset: usize,
}

impl TablePage {
    pub fn summary(&self) -> String {
        if self.rows.is_empty() {
            return format!("Showing 0 of {}", self.matching);
        }
        format!("Showing {} to {} of {}", self.offset + 1, self.offset + self.rows.len(), self.matching)
    }
}

impl TableState {
    /// Same column flips the direction; a new column starts descending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Descending;
        }
    }

    /// New filter text always returns to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize, rows: &[HistoryRow]) {
        self.page = page.clamp(1, self.total_pages(rows).max(1));
    }

    /// `aria-sort` for a column header.
    pub fn aria_sort(&self, field: SortField) -> &'static str {
        if self.sort_field == field { self.direction.aria() } else { "none" }
    }

    fn matching<'r>(&self, rows: &'r [HistoryRow]) -> Vec<&'r HistoryRow> {
        let needle = self.filter.to_lowercase();
        rows.iter().filter(|r| r.year.to_lowercase().contains(&needle)).collect()
    }

    pub fn total_pages(&self, rows: &[HistoryRow]) -> usize {
        self.matching(rows).len().div_ceil(ROWS_PER_PAGE)
    }

    pub fn view(&self, rows: &[HistoryRow]) -> TablePage {
        let mut matching = self.matching(rows);
        matching.sort_by(|a, b| {
            let ord = self.sort_field.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        let total_pages = matching.len().div_ceil(ROWS_PER_PAGE);
        let offset = (self.page.max(1) - 1) * ROWS_PER_PAGE;
        let rows = matching.iter().skip(offset).take(ROWS_PER_PAGE).map(|r| (*r).clone()).collect();
        TablePage { rows, page: self.page, total_pages, matching: matching.len(), offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_newest_first() {
        let rows = HistoryRow::sample();
        let page = TableState::default().view(&rows);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0].year, "FY 2024");
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.summary(), "Showing 1 to 5 of 8");
    }

    #[test]
    fn cells_format_like_the_table() {
        let cells = HistoryRow::sample()[0].cells();
        assert_eq!(cells[1], "84,000");
        assert_eq!(cells[5], "14.2%");
        assert_eq!(cells[6], "0.45");
    }
}
