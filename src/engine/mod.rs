// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constant amortized time generation of bracelets with fixed content.
//!
//! The generator enumerates prenecklaces with the given content in the usual
//! fixed-content order, and prunes every prefix whose reversal is already
//! known to be smaller. What survives to length `n` is exactly one canonical
//! bracelet per class.
//!
//! # State
//!
//! Internally colors are the symbols `1..=k` so that 0 can act as a sentinel.
//! One extension step fixes position `t` of the word (positions are 1-based)
//! and threads the following values down the recursion:
//!
//! - `t`: the position being filled; `word[1..t]` is fixed.
//! - `p`: length of the longest Lyndon prefix of `word[1..t]`.
//! - `r`: position at which the current mirror comparison window opened.
//!   The window compares `word[r+1..=n]` with its reversal.
//! - `z`: start of the trailing run of the largest symbol, recorded into
//!   `run` so that the final run can be measured against earlier ones.
//! - `b`: number of run-length blocks when the window opened.
//! - `rs`: running comparison of the window with its reversal.
//!
//! Every mutation made before descending into a child (run-length push,
//! count decrement, availability removal, word position) is undone when
//! the child returns, whether it was explored, pruned or emitted.
//!
//! # References
//!
//! - Karim, S., J. Sawada, Z. Alamgir, and S. M. Husnine (2013). "Generating
//!   bracelets with fixed content." Theoretical Computer Science 475: 103-112.
//!   <https://doi.org/10.1016/j.tcs.2012.11.024>
//! - Sawada, J. (2003). "A fast algorithm to generate necklaces with fixed
//!   content." Theoretical Computer Science 301: 477-489.

pub mod config;

pub use config::SearchConfig;

use std::cmp::Ordering;

use tracing::debug;

use crate::avail::AvailabilitySet;
use crate::content::Content;
use crate::output::BraceletSink;
use crate::runlength::SuffixRunLength;
use crate::state::{Counters, Statistics};

/// Space left on the stack below which a recursive step grows it.
const STACK_RED_ZONE: usize = 32 * 1024;

/// Size of each additional stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Running comparison of a window of the word with its reversal.
///
/// Only the most recently compared pair that differed matters, since each
/// new pair sits closer to the front of the window than the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorState {
    /// Every compared pair was equal.
    Undetermined,
    /// The reversal is larger: the window is fine so far.
    ReversalLarger,
    /// The reversal is smaller: the word cannot be a canonical bracelet.
    ReversalSmaller,
}

/// One fixed-content bracelet enumeration.
///
/// A generator owns all of its working storage and is consumed by
/// [`Generator::run`], so no state survives from one enumeration to the
/// next.
#[derive(Debug)]
pub struct Generator {
    n: usize,
    k: usize,
    config: SearchConfig,

    /// `word[1..=n]`, positions past the current one hold `k`.
    word: Vec<usize>,

    /// `run[i]` is the length of the run of `k`s that starts at position `i`.
    run: Vec<usize>,

    /// Occurrences of each symbol still to be placed, indexed `1..=k`.
    remaining: Vec<usize>,

    avail: AvailabilitySet,
    blocks: SuffixRunLength,

    /// Zero-based copy of the word handed to the sink.
    emitted: Vec<usize>,

    statistics: Statistics,
}

impl Generator {
    /// Allocate the working storage for `content`.
    pub fn new(content: &Content, config: SearchConfig) -> Self {
        let n = content.len();
        let k = content.colors();

        let mut remaining = Vec::with_capacity(k + 1);
        remaining.push(0);
        remaining.extend((0..k).map(|color| content.count(color)));

        Self {
            n,
            k,
            config,
            word: vec![k; n + 1],
            run: vec![0; n + 2],
            remaining,
            avail: AvailabilitySet::new(content.counts()),
            blocks: SuffixRunLength::new(n),
            emitted: vec![0; n],
            statistics: Statistics::new(),
        }
    }

    /// Enumerate every canonical bracelet, handing each to `sink`.
    pub fn run<S>(mut self, sink: &mut S) -> Statistics
    where
        S: BraceletSink + ?Sized,
    {
        debug!(
            n = self.n,
            k = self.k,
            aperiodic_only = self.config.aperiodic_only,
            "Generating bracelets with fixed content {:?}",
            &self.remaining[1..=self.k]
        );

        // Every necklace starts with the smallest symbol.
        self.word[1] = 1;
        self.remaining[1] -= 1;
        if self.remaining[1] == 0 {
            self.avail.remove(1);
        }
        self.blocks.push(1);

        self.extend(2, 1, 1, 2, 1, MirrorState::Undetermined, sink);

        debug!("Generation complete: {}", self.statistics);
        self.statistics
    }

    #[allow(clippy::too_many_arguments)]
    fn extend<S>(
        &mut self,
        t: usize,
        mut p: usize,
        r: usize,
        z: usize,
        b: usize,
        mut rs: MirrorState,
        sink: &mut S,
    ) where
        S: BraceletSink + ?Sized,
    {
        self.statistics.increment_counter(Counters::Nodes);
        let n = self.n;
        let k = self.k;

        // Compare the newest position of the window with its mirror, once
        // the window's second half has been reached.
        if t - 1 > (n - r) / 2 + r {
            let mirror = n + 2 + r - t;
            match self.word[t - 1].cmp(&self.word[mirror]) {
                Ordering::Greater => rs = MirrorState::ReversalLarger,
                Ordering::Less => rs = MirrorState::ReversalSmaller,
                Ordering::Equal => {}
            }
        }

        let tail = self.remaining[k];
        if tail == n + 1 - t {
            // Only the largest symbol is left: the word is determined.
            if tail > self.run[t - p] {
                p = n;
            }
            if tail > 0 && t != r + 1 {
                let first = self.blocks.block(b + 1);
                if first.symbol == k && first.length > tail {
                    rs = MirrorState::ReversalSmaller;
                }
                if first.symbol != k || first.length < tail {
                    rs = MirrorState::ReversalLarger;
                }
            }
            self.accept(p, rs, sink);
        } else if self.remaining[1] != n + 1 - t {
            // A word ending in a run of the smallest symbol is never a
            // necklace, so that case is skipped rather than extended.
            let floor = self.word[t - p];
            let mut symbol = self.avail.head();
            while symbol >= floor {
                self.run[z] = t - z;
                self.blocks.push(symbol);
                self.remaining[symbol] -= 1;
                if self.remaining[symbol] == 0 {
                    self.avail.remove(symbol);
                }
                self.word[t] = symbol;

                let z2 = if symbol != k { t + 1 } else { z };
                let p2 = if symbol != self.word[t - p] { t } else { p };

                match self.blocks.compare_mirror() {
                    Ordering::Equal => {
                        let blocks = self.blocks.len();
                        self.descend(t + 1, p2, t, z2, blocks, MirrorState::Undetermined, sink);
                    }
                    Ordering::Greater => self.descend(t + 1, p2, r, z2, b, rs, sink),
                    Ordering::Less => self.statistics.increment_counter(Counters::MirrorPruned),
                }

                if self.remaining[symbol] == 0 {
                    self.avail.reinsert(symbol);
                }
                self.remaining[symbol] += 1;
                self.blocks.pop();

                symbol = self.avail.next(symbol);
            }
            self.word[t] = k;
        }
    }

    #[allow(clippy::too_many_arguments)]
    #[inline]
    fn descend<S>(
        &mut self,
        t: usize,
        p: usize,
        r: usize,
        z: usize,
        b: usize,
        rs: MirrorState,
        sink: &mut S,
    ) where
        S: BraceletSink + ?Sized,
    {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            self.extend(t, p, r, z, b, rs, sink)
        });
    }

    /// Decide whether the completed word is emitted.
    fn accept<S>(&mut self, p: usize, rs: MirrorState, sink: &mut S)
    where
        S: BraceletSink + ?Sized,
    {
        let n = self.n;
        if rs == MirrorState::ReversalSmaller {
            self.statistics.increment_counter(Counters::ReflectionRejected);
            return;
        }
        if n % p != 0 {
            self.statistics.increment_counter(Counters::PeriodicRejected);
            return;
        }
        // A single symbol repeated more than once is periodic even though
        // its only run sets p = n.
        if self.config.aperiodic_only && (p != n || (self.k == 1 && n > 1)) {
            self.statistics.increment_counter(Counters::AperiodicFiltered);
            return;
        }
        for (slot, &symbol) in self.emitted.iter_mut().zip(&self.word[1..]) {
            *slot = symbol - 1;
        }
        self.statistics.increment_counter(Counters::Bracelets);
        sink.append(&self.emitted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BraceletCollector;

    fn bracelets(counts: &[usize], config: SearchConfig) -> (Vec<Vec<usize>>, Statistics) {
        let content = Content::from_counts(counts).unwrap();
        let mut collector = BraceletCollector::new();
        let stats = Generator::new(&content, config).run(&mut collector);
        (collector.into_bracelets(), stats)
    }

    #[test]
    fn test_three_two_one_in_search_order() {
        let (found, stats) = bracelets(&[3, 2, 1], SearchConfig::default());
        assert_eq!(
            found,
            vec![
                vec![0, 1, 0, 1, 0, 2],
                vec![0, 0, 1, 1, 0, 2],
                vec![0, 0, 1, 0, 2, 1],
                vec![0, 0, 1, 0, 1, 2],
                vec![0, 0, 0, 1, 2, 1],
                vec![0, 0, 0, 1, 1, 2],
            ]
        );
        assert_eq!(stats.get(Counters::Bracelets), 6);
    }

    #[test]
    fn test_single_color() {
        let (found, _) = bracelets(&[5], SearchConfig::default());
        assert_eq!(found, vec![vec![0; 5]]);

        let (found, _) = bracelets(&[1], SearchConfig::default());
        assert_eq!(found, vec![vec![0]]);
    }

    #[test]
    fn test_single_color_is_aperiodic_only_at_length_one() {
        let aperiodic = SearchConfig::default().with_aperiodic_only(true);

        let (found, stats) = bracelets(&[4], aperiodic);
        assert!(found.is_empty());
        assert_eq!(stats.get(Counters::AperiodicFiltered), 1);

        let (found, _) = bracelets(&[1], aperiodic);
        assert_eq!(found, vec![vec![0]]);
    }

    #[test]
    fn test_two_two_binary() {
        let (found, stats) = bracelets(&[2, 2], SearchConfig::default());
        assert_eq!(found, vec![vec![0, 1, 0, 1], vec![0, 0, 1, 1]]);
        assert_eq!(stats.get(Counters::Bracelets), 2);
    }

    #[test]
    fn test_aperiodic_filter_drops_repetitions() {
        let aperiodic = SearchConfig::default().with_aperiodic_only(true);
        let (found, stats) = bracelets(&[2, 2], aperiodic);
        assert_eq!(found, vec![vec![0, 0, 1, 1]]);
        assert_eq!(stats.get(Counters::AperiodicFiltered), 1);
    }

    #[test]
    fn test_all_distinct_colors() {
        // (k - 1)! / 2 bracelets when every color occurs once, k >= 3.
        let (found, _) = bracelets(&[1, 1, 1, 1, 1], SearchConfig::default());
        assert_eq!(found.len(), 12);
        assert!(found.iter().all(|b| b[0] == 0));
    }

    #[test]
    fn test_new_counts_symbols_from_one() {
        let content = Content::from_counts(&[3, 2, 1]).unwrap();
        let generator = Generator::new(&content, SearchConfig::default());
        assert_eq!(generator.remaining, vec![0, 3, 2, 1]);
        assert_eq!(generator.avail.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(generator.word, vec![3; 7]);
    }

    #[test]
    fn test_run_restores_every_structure() {
        let content = Content::from_counts(&[2, 3, 2]).unwrap();
        let mut generator = Generator::new(&content, SearchConfig::default());
        generator.word[1] = 1;
        generator.remaining[1] -= 1;
        generator.blocks.push(1);

        let remaining = generator.remaining.clone();
        let blocks = generator.blocks.len();
        let avail: Vec<usize> = generator.avail.iter().collect();

        let mut count = 0;
        generator.extend(
            2,
            1,
            1,
            2,
            1,
            MirrorState::Undetermined,
            &mut |_: &[usize]| count += 1,
        );

        assert!(count > 0);
        assert_eq!(generator.remaining, remaining);
        assert_eq!(generator.blocks.len(), blocks);
        assert_eq!(generator.avail.iter().collect::<Vec<_>>(), avail);
        assert!(generator.word[2..].iter().all(|&symbol| symbol == 3));
    }

    #[test]
    fn test_statistics_account_for_every_leaf() {
        let (found, stats) = bracelets(&[3, 3, 2], SearchConfig::default());
        assert_eq!(stats.get(Counters::Bracelets), found.len() as u64);
        assert!(stats.get(Counters::Nodes) >= found.len() as u64);
        assert!(stats.get(Counters::MirrorPruned) > 0);
    }
}
