// File: crates/chart-core/src/format.rs
// Summary: Caller-supplied number formatting policies for axis and value labels.

/// Digit grouping of the integer part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    None,
    /// 1,234,567
    Thousands,
    /// Lakh/crore style: 12,34,567
    Indian,
}

/// Turns a value into label text. Implemented by [`NumberFormat`] and any `Fn(f64) -> String`.
pub trait LabelFormatter {
    fn format_label(&self, value: f64) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format_label(&self, value: f64) -> String {
        self(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberFormat {
    pub decimals: usize,
    pub grouping: Grouping,
    pub prefix: String,
    pub suffix: String,
}

impl NumberFormat {
    /// Fixed precision, no grouping. Ratios and percentages.
    pub fn fixed(decimals: usize) -> Self {
        Self { decimals, grouping: Grouping::None, prefix: String::new(), suffix: String::new() }
    }

    /// Integers with thousands separators. Large-magnitude series such as revenue.
    pub fn grouped() -> Self {
        Self { grouping: Grouping::Thousands, ..Self::fixed(0) }
    }

    /// Whole rupees with lakh grouping, for price axes.
    pub fn rupees() -> Self {
        Self { grouping: Grouping::Indian, prefix: "\u{20b9}".to_string(), ..Self::fixed(0) }
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let factor = 10f64.powi(self.decimals as i32);
        // f64::round is half-away-from-zero.
        let rounded = (value.abs() * factor).round() / factor;
        let negative = value < 0.0 && rounded != 0.0;

        let digits = format!("{:.*}", self.decimals, rounded);
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.prefix);
        out.push_str(&group_digits(int_part, self.grouping));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out.push_str(&self.suffix);
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::grouped()
    }
}

impl LabelFormatter for NumberFormat {
    fn format_label(&self, value: f64) -> String {
        self.format(value)
    }
}

fn group_digits(int_part: &str, grouping: Grouping) -> String {
    let len = int_part.len();
    let breaks: Vec<usize> = match grouping {
        Grouping::None => Vec::new(),
        Grouping::Thousands => (1..).map(|k| 3 * k).take_while(|&p| p < len).collect(),
        Grouping::Indian => (0..).map(|k| 3 + 2 * k).take_while(|&p| p < len).collect(),
    };
    if breaks.is_empty() {
        return int_part.to_string();
    }
    // `breaks` are counted from the right.
    let mut out = String::with_capacity(len + breaks.len());
    for (i, ch) in int_part.chars().enumerate() {
        let from_right = len - i;
        if i > 0 && breaks.contains(&from_right) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
