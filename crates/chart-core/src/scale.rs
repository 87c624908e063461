// File: crates/chart-core/src/scale.rs
// Summary: Linear value→pixel mapping plus index and band layouts for category axes.

/// Data value (price, revenue, ratio).
pub type Value = f64;

/// Linear mapping from a value domain onto a pixel range.
///
/// Inverted mappings put `domain_max` at `range_min`, which is what a screen
/// y axis needs (higher values drawn closer to the top). A degenerate domain
/// maps every value to `range_min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapping {
    pub domain_min: Value,
    pub domain_max: Value,
    pub range_min: f32,
    pub range_max: f32,
    pub inverted: bool,
}

impl ScaleMapping {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
            inverted: false,
        }
    }

    /// Y-axis convention: `domain_max → range_min`, `domain_min → range_max`.
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    #[inline]
    fn span(&self) -> Option<f64> {
        let span = self.domain_max - self.domain_min;
        (span.is_finite() && span != 0.0).then_some(span)
    }

    /// Value → pixel.
    #[inline]
    pub fn map(&self, value: Value) -> f32 {
        let Some(span) = self.span() else { return self.range_min };
        let frac = if self.inverted {
            (self.domain_max - value) / span
        } else {
            (value - self.domain_min) / span
        };
        self.range_min + (frac * (self.range_max - self.range_min) as f64) as f32
    }

    /// Pixel → value.
    #[inline]
    pub fn invert(&self, px: f32) -> Value {
        let Some(span) = self.span() else { return self.domain_min };
        let extent = (self.range_max - self.range_min) as f64;
        if extent == 0.0 {
            return self.domain_min;
        }
        let frac = (px - self.range_min) as f64 / extent;
        if self.inverted {
            self.domain_max - frac * span
        } else {
            self.domain_min + frac * span
        }
    }
}

/// Min/max over the finite members of `values`.
pub fn extent<I>(values: I) -> Option<(Value, Value)>
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Evenly spaced positions for `n` indexed points across `range`, first and last on the ends.
/// A single point sits at `range.0`.
pub fn index_positions(n: usize, range: (f32, f32)) -> Vec<f32> {
    let last = n.saturating_sub(1) as f64;
    let mapping = ScaleMapping::new((0.0, last), range);
    (0..n).map(|i| mapping.map(i as f64)).collect()
}

/// Equal-width category slots across a pixel span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandLayout {
    pub start: f32,
    pub slot: f32,
}

impl BandLayout {
    /// `None` for zero categories.
    pub fn new(start: f32, end: f32, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { start, slot: (end - start) / count as f32 })
    }

    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.start + self.slot * i as f32 + self.slot * 0.5
    }

    /// Left edge of a mark of `fraction` slot width centred in slot `i`.
    #[inline]
    pub fn mark_left(&self, i: usize, fraction: f32) -> f32 {
        self.center(i) - self.slot * fraction * 0.5
    }
}
