use serde::{Deserialize, Serialize};

/// Inclusive payload mass window `[lo, hi]` in kilograms, as held by the
/// range control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// True if `kg` lies within the window, both ends included.
    ///
    /// A reversed window (`lo > hi`) contains nothing.
    pub fn contains(&self, kg: f64) -> bool {
        self.lo <= kg && kg <= self.hi
    }

    pub fn is_reversed(&self) -> bool {
        self.lo > self.hi
    }
}

/// Payload extremes over the whole dataset, computed once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// The range covering every record, used as the control's initial value.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }

    /// Build a range from optional ends, defaulting each missing end to
    /// the matching bound.
    pub fn range_or_full(&self, lo: Option<f64>, hi: Option<f64>) -> PayloadRange {
        PayloadRange::new(lo.unwrap_or(self.min), hi.unwrap_or(self.max))
    }
}
