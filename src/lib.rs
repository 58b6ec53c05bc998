// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of bracelet generation with fixed content.
//!
//! A bracelet is an equivalence class of strings under rotation and
//! reflection; it is represented by its lexicographically smallest member.
//! Given the exact number of occurrences of each color, this crate lists
//! every bracelet with that content exactly once, in constant amortized
//! time per bracelet.
//!
//! # Architecture
//!
//! All search state belongs to a single [`Generator`], created per call and
//! consumed by the run:
//!
//! - [`avail::AvailabilitySet`] - descending linked list of colors that still
//!   have occurrences, with O(1) remove and exact reinsertion
//! - [`runlength::SuffixRunLength`] - run-length blocks of the partial word,
//!   used to compare it with its reversal without rescanning
//! - [`engine::Generator`] - the recursive search, which extends prenecklaces
//!   and prunes any prefix whose reversal is already smaller
//! - [`output::BraceletSink`] - receiver of accepted bracelets
//!
//! Every change made on the way down the recursion is undone on the way
//! back, so the structures are restored exactly when a run ends.
//!
//! # Example
//!
//! ```
//! let bracelets = bracelet_search::bracelets_fc(4, 2, &[2, 2]).unwrap();
//! assert_eq!(bracelets, vec![vec![0, 1, 0, 1], vec![0, 0, 1, 1]]);
//! ```
//!
//! # References
//!
//! - Karim, S., J. Sawada, Z. Alamgir, and S. M. Husnine (2013). "Generating
//!   bracelets with fixed content." Theoretical Computer Science 475: 103-112.
//!   <https://doi.org/10.1016/j.tcs.2012.11.024>

pub mod avail;
pub mod content;
pub mod engine;
pub mod output;
pub mod runlength;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use content::{Content, ContentError};
pub use engine::{Generator, SearchConfig};
pub use output::{BraceletCollector, BraceletSink};
pub use state::{Counters, Statistics};

/// Collect every bracelet with the given content.
pub fn generate(content: &Content, config: SearchConfig) -> BraceletCollector {
    let mut collector = BraceletCollector::new();
    Generator::new(content, config).run(&mut collector);
    collector
}

/// Collect every bracelet of length `n` over `k` colors in which color `c`
/// occurs exactly `counts[c]` times.
///
/// Fails without doing any work when the arguments do not describe a valid
/// content.
pub fn bracelets_fc(n: usize, k: usize, counts: &[usize]) -> Result<Vec<Vec<usize>>, ContentError> {
    let content = Content::new(n, k, counts)?;
    Ok(generate(&content, SearchConfig::default()).into_bracelets())
}
