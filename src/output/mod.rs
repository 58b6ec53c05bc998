// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Destinations for the bracelets found by a search.
//!
//! The generator calls [`BraceletSink::append`] once per accepted bracelet,
//! passing a borrowed slice of color indices that is only valid for the call.
//! [`BraceletCollector`] keeps copies; any `FnMut(&[usize])` closure can be
//! used to visit bracelets without storing them.
//!
//! Bracelets arrive in the search's natural order, which is deterministic
//! but not sorted.
//!
//! # Example
//!
//! ```
//! use bracelet_search::content::Content;
//! use bracelet_search::engine::{Generator, SearchConfig};
//!
//! let content = Content::from_counts(&[2, 2]).unwrap();
//! let mut longest_run = 0;
//! Generator::new(&content, SearchConfig::default()).run(&mut |bracelet: &[usize]| {
//!     let run = bracelet.iter().take_while(|&&c| c == 0).count();
//!     longest_run = longest_run.max(run);
//! });
//! assert_eq!(longest_run, 2);
//! ```

use serde::Serialize;

/// Receiver of accepted bracelets.
pub trait BraceletSink {
    /// Receive one complete bracelet of color indices.
    fn append(&mut self, bracelet: &[usize]);
}

impl<F> BraceletSink for F
where
    F: FnMut(&[usize]),
{
    fn append(&mut self, bracelet: &[usize]) {
        self(bracelet)
    }
}

/// Sink that stores a copy of every bracelet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BraceletCollector {
    bracelets: Vec<Vec<usize>>,
}

impl BraceletCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bracelets collected.
    pub fn len(&self) -> usize {
        self.bracelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bracelets.is_empty()
    }

    /// Collected bracelets in arrival order.
    pub fn bracelets(&self) -> &[Vec<usize>] {
        &self.bracelets
    }

    /// Take ownership of the collected bracelets.
    pub fn into_bracelets(mut self) -> Vec<Vec<usize>> {
        self.bracelets.shrink_to_fit();
        self.bracelets
    }
}

impl BraceletSink for BraceletCollector {
    fn append(&mut self, bracelet: &[usize]) {
        self.bracelets.push(bracelet.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_copies_in_order() {
        let mut collector = BraceletCollector::new();
        assert!(collector.is_empty());

        let mut buffer = vec![0, 1, 1];
        collector.append(&buffer);
        buffer[2] = 2;
        collector.append(&buffer);

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.bracelets(), &[vec![0, 1, 1], vec![0, 1, 2]]);
        assert_eq!(collector.into_bracelets(), vec![vec![0, 1, 1], vec![0, 1, 2]]);
    }

    #[test]
    fn test_closure_sink() {
        let mut total = 0;
        {
            let mut sink = |bracelet: &[usize]| total += bracelet.iter().sum::<usize>();
            sink.append(&[0, 1, 2]);
            sink.append(&[1, 1]);
        }
        assert_eq!(total, 5);
    }

    #[test]
    fn test_collector_serializes_as_object() {
        let mut collector = BraceletCollector::new();
        collector.append(&[0, 1]);
        assert_eq!(
            serde_json::to_string(&collector).unwrap(),
            r#"{"bracelets":[[0,1]]}"#
        );
    }
}
