//! Parser configuration.

/// Default limit on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for a single [`Parser`](super::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum expression nesting (parentheses, NOT chains, signs) before
    /// parsing fails instead of recursing further.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Sets the maximum expression nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
