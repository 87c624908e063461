// File: crates/chart-core/src/dashboard/levels.rs
// Summary: Closed enums for news sentiment, risk level and score band with exhaustive colour/icon/label tables.

use skia_safe as skia;

const GREEN: skia::Color = skia::Color::new(0xff22_c55e);
const YELLOW: skia::Color = skia::Color::new(0xffea_b308);
const RED: skia::Color = skia::Color::new(0xffef_4444);

/// Glyph shown next to a sentiment tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    TrendingUp,
    TrendingDown,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const fn color(self) -> skia::Color {
        match self {
            Sentiment::Positive => GREEN,
            Sentiment::Neutral => YELLOW,
            Sentiment::Negative => RED,
        }
    }

    pub const fn icon(self) -> Icon {
        match self {
            Sentiment::Positive => Icon::TrendingUp,
            Sentiment::Neutral => Icon::Flat,
            Sentiment::Negative => Icon::TrendingDown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Legend order, most severe first.
    pub const LEGEND_ORDER: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Indicator dot and card border.
    pub const fn color(self) -> skia::Color {
        match self {
            RiskLevel::Low => GREEN,
            RiskLevel::Medium => YELLOW,
            RiskLevel::High => RED,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// Legend text without the "Risk" suffix.
    pub const fn short_label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Bucket of the 0-100 multibagger score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// 75 and above
    High,
    /// 50..75
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => ScoreBand::High,
            50..=74 => ScoreBand::Moderate,
            _ => ScoreBand::Low,
        }
    }

    pub const fn color(self) -> skia::Color {
        match self {
            ScoreBand::High => GREEN,
            ScoreBand::Moderate => YELLOW,
            ScoreBand::Low => RED,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::High => "High Potential",
            ScoreBand::Moderate => "Moderate Potential",
            ScoreBand::Low => "Low Potential",
        }
    }
}

/// Stroke-dash offset of a score ring of `radius`: the unfilled share of the circumference.
pub fn score_ring_offset(score: u8, radius: f32) -> f32 {
    let circumference = 2.0 * std::f32::consts::PI * radius;
    circumference - (score.min(100) as f32 / 100.0) * circumference
}
