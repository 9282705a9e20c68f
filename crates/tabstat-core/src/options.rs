/// Number of most frequent values kept per categorical column by default.
pub const DEFAULT_TOP_K: usize = 5;

/// Tuning knobs for a summarization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// How many most-frequent values to keep in categorical value counts.
    pub top_k: usize,
    /// Compute 25/50/75 percentiles for numeric columns.
    pub quartiles: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            quartiles: false,
        }
    }
}

impl SummaryOptions {
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn with_quartiles(mut self, enable: bool) -> Self {
        self.quartiles = enable;
        self
    }
}
