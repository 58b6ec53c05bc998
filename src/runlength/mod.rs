// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-length encoding of the partial string, with an O(1)-amortized mirror
//! comparison.
//!
//! The encoding is a stack of [`Block`]s, one per maximal run of equal
//! symbols. Blocks are numbered from 1; slot 0 holds a sentinel block whose
//! symbol (0) is smaller than every real symbol, so the first `push` always
//! opens a new block.
//!
//! Storage is allocated once for the longest string of the search. Popped
//! blocks are not cleared, and [`SuffixRunLength::block`] may read slots above
//! the current top; the generator relies on this to look at the block that
//! opened a comparison window.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use bracelet_search::runlength::{Block, SuffixRunLength};
//!
//! let mut rle = SuffixRunLength::new(6);
//! for symbol in [1, 1, 2, 1] {
//!     rle.push(symbol);
//! }
//! assert_eq!(rle.len(), 3);
//! assert_eq!(rle.block(1), Block { symbol: 1, length: 2 });
//!
//! // 1121 reversed is 1211, which is larger.
//! assert_eq!(rle.compare_mirror(), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A maximal run of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    /// The repeated symbol.
    pub symbol: usize,
    /// Number of repetitions.
    pub length: usize,
}

/// Run-length stack mirroring the partial string push for push.
#[derive(Debug, Clone)]
pub struct SuffixRunLength {
    blocks: Vec<Block>,
    top: usize,
}

impl SuffixRunLength {
    /// Create an empty encoding able to hold a string of length `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            blocks: vec![Block::default(); capacity + 2],
            top: 0,
        }
    }

    /// Append one symbol to the encoded string.
    #[inline]
    pub fn push(&mut self, symbol: usize) {
        let last = &mut self.blocks[self.top];
        if last.symbol == symbol {
            last.length += 1;
        } else {
            self.top += 1;
            self.blocks[self.top] = Block { symbol, length: 1 };
        }
    }

    /// Remove the last symbol of the encoded string.
    ///
    /// Must undo the most recent `push` that has not yet been undone.
    #[inline]
    pub fn pop(&mut self) {
        debug_assert!(self.top > 0, "Popping an empty run-length encoding");
        let last = &mut self.blocks[self.top];
        if last.length == 1 {
            self.top -= 1;
        } else {
            last.length -= 1;
        }
    }

    /// Number of blocks currently encoded.
    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    /// Check if no symbol has been pushed.
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Block in slot `index` (1-based; 0 is the sentinel).
    #[inline]
    pub fn block(&self, index: usize) -> Block {
        self.blocks[index]
    }

    /// Live blocks, first to last.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks[1..=self.top]
    }

    /// Compare the encoded string's reversal with the string itself.
    ///
    /// Returns `Less` when the reversal is lexicographically smaller,
    /// `Equal` when the string is a palindrome and `Greater` when the
    /// reversal is larger.
    ///
    /// Blocks are matched inward from both ends. At the first pair that
    /// differs, a symbol mismatch decides directly. When only the run lengths
    /// differ, the outcome depends on the symbol that follows the shorter
    /// run: the next block after a short front run, or the block preceding
    /// the back run when the front run is the longer one.
    pub fn compare_mirror(&self) -> Ordering {
        let nb = self.top;
        let b = &self.blocks;
        let mut j = 1;
        while j <= nb / 2 && b[j] == b[nb - j + 1] {
            j += 1;
        }
        if j > nb / 2 {
            return Ordering::Equal;
        }
        let front = b[j];
        let back = b[nb - j + 1];
        if front.symbol < back.symbol {
            return Ordering::Greater;
        }
        if front.symbol > back.symbol {
            return Ordering::Less;
        }
        if front.length < back.length && b[j + 1].symbol < back.symbol {
            return Ordering::Greater;
        }
        if front.length > back.length && front.symbol < b[nb - j].symbol {
            return Ordering::Greater;
        }
        Ordering::Less
    }
}
