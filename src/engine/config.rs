// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

/// Options for one generator run.
///
/// # Example
///
/// ```
/// use bracelet_search::engine::SearchConfig;
///
/// let config = SearchConfig::default().with_aperiodic_only(true);
/// assert!(config.aperiodic_only);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Emit only bracelets that are not a repetition of a shorter string.
    pub aperiodic_only: bool,
}

impl SearchConfig {
    pub fn with_aperiodic_only(mut self, aperiodic_only: bool) -> Self {
        self.aperiodic_only = aperiodic_only;
        self
    }
}
