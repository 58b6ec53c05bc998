// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered set of the symbols that still have occurrences left to place.
//!
//! The generator works with symbols `1..=k` (symbol `s` is color `s - 1`).
//! The set is a doubly linked list in descending order, bounded by two
//! sentinels: `k + 1` above the largest symbol and `0` below the smallest.
//! The sentinels make `head` and `next` branch-free, and `next` of the
//! smallest present symbol is always [`AvailabilitySet::BOTTOM`].
//!
//! Removal unlinks a symbol but leaves its own links untouched, so it can be
//! spliced back into exactly the same place later. Removals and reinsertions
//! must nest like a stack, which is how the generator's recursion uses them.
//!
//! # Examples
//!
//! ```
//! use bracelet_search::avail::AvailabilitySet;
//!
//! let mut set = AvailabilitySet::new(&[1, 2, 3]);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! set.remove(3);
//! set.remove(1);
//! assert_eq!(set.head(), 2);
//! assert_eq!(set.next(2), AvailabilitySet::BOTTOM);
//!
//! set.reinsert(1);
//! set.reinsert(3);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

/// Links of one symbol in the list.
#[derive(Debug, Clone, Copy)]
struct Cell {
    /// Next smaller symbol.
    next: usize,
    /// Next larger symbol.
    prev: usize,
}

/// Descending linked list of available symbols with O(1) remove/reinsert.
#[derive(Debug, Clone)]
pub struct AvailabilitySet {
    cells: Vec<Cell>,
    head: usize,
    top: usize,
}

impl AvailabilitySet {
    /// Sentinel below every symbol.
    pub const BOTTOM: usize = 0;

    /// Build the set for `counts.len()` symbols.
    ///
    /// Symbol `s` is present when `counts[s - 1] > 0`.
    pub fn new(counts: &[usize]) -> Self {
        let k = counts.len();
        let top = k + 1;
        let cells = (0..=top)
            .map(|j| Cell {
                next: j.saturating_sub(1),
                prev: (j + 1).min(top),
            })
            .collect();
        let mut set = Self {
            cells,
            head: k,
            top,
        };
        for (color, &count) in counts.iter().enumerate() {
            if count == 0 {
                set.remove(color + 1);
            }
        }
        set
    }

    /// Largest present symbol, or `BOTTOM` when the set is empty.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Next smaller present symbol after `symbol`, or `BOTTOM`.
    #[inline]
    pub fn next(&self, symbol: usize) -> usize {
        self.cells[symbol].next
    }

    /// Unlink `symbol` from the list.
    ///
    /// The symbol's own links are kept so that `reinsert` can restore it.
    #[inline]
    pub fn remove(&mut self, symbol: usize) {
        debug_assert!(
            symbol != Self::BOTTOM && symbol < self.top,
            "Symbol {} is not removable",
            symbol
        );
        let Cell { next, prev } = self.cells[symbol];
        if symbol == self.head {
            self.head = next;
        }
        self.cells[prev].next = next;
        self.cells[next].prev = prev;
    }

    /// Splice `symbol` back between the neighbours it had when removed.
    ///
    /// Must undo the most recent `remove` that has not yet been undone.
    #[inline]
    pub fn reinsert(&mut self, symbol: usize) {
        let Cell { next, prev } = self.cells[symbol];
        debug_assert!(
            self.cells[prev].next == next && self.cells[next].prev == prev,
            "Reinserting symbol {} which is not removed",
            symbol
        );
        self.cells[next].prev = symbol;
        self.cells[prev].next = symbol;
        if prev == self.top {
            self.head = symbol;
        }
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.head == Self::BOTTOM
    }

    /// Iterate over the present symbols, largest first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.head), move |&symbol| Some(self.next(symbol)))
            .take_while(|&symbol| symbol != Self::BOTTOM)
    }
}
