// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed content: the exact number of occurrences of each color.
//!
//! A bracelet of length `n` over `k` colors has fixed content `counts` when
//! color `c` occurs exactly `counts[c]` times. Colors are the indices `0..k`.
//!
//! # Examples
//!
//! ```
//! use bracelet_search::content::{Content, ContentError};
//!
//! let content = Content::new(6, 3, &[3, 2, 1]).unwrap();
//! assert_eq!(content.len(), 6);
//! assert_eq!(content.colors(), 3);
//!
//! assert_eq!(
//!     Content::new(5, 2, &[2, 2]),
//!     Err(ContentError::LengthMismatch { length: 5, total: Some(4) })
//! );
//! ```

pub mod errors;

pub use errors::ContentError;

/// A validated fixed content.
///
/// Construction performs every argument check, so holding a `Content` means
/// `n > 0`, `k > 0`, every count is positive and the counts sum to `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Content {
    length: usize,
    counts: Vec<usize>,
}

impl Content {
    /// Validate a bracelet length `n`, color count `k` and per-color counts.
    pub fn new(n: usize, k: usize, counts: &[usize]) -> Result<Self, ContentError> {
        if n == 0 {
            return Err(ContentError::ZeroLength);
        }
        if k == 0 {
            return Err(ContentError::NoColors);
        }
        if counts.len() != k {
            return Err(ContentError::ColorCountMismatch {
                expected: k,
                actual: counts.len(),
            });
        }
        if let Some(color) = counts.iter().position(|&count| count == 0) {
            return Err(ContentError::EmptyColor { color });
        }
        let total = counts
            .iter()
            .try_fold(0usize, |acc, &count| acc.checked_add(count));
        if total != Some(n) {
            return Err(ContentError::LengthMismatch { length: n, total });
        }
        Ok(Self {
            length: n,
            counts: counts.to_vec(),
        })
    }

    /// Validate counts alone, taking `n` as their sum and `k` as their number.
    pub fn from_counts(counts: &[usize]) -> Result<Self, ContentError> {
        let total = counts
            .iter()
            .try_fold(0usize, |acc, &count| acc.checked_add(count))
            .ok_or(ContentError::LengthMismatch {
                length: 0,
                total: None,
            })?;
        Self::new(total, counts.len(), counts)
    }

    /// Bracelet length `n`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Number of colors `k`.
    pub fn colors(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count of every color, indexed by color.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Occurrence count of one color.
    ///
    /// # Panics
    ///
    /// Panics if `color >= k`.
    pub fn count(&self, color: usize) -> usize {
        self.counts[color]
    }

    /// Check that `word` is an arrangement of this content.
    pub fn matches(&self, word: &[usize]) -> bool {
        if word.len() != self.length {
            return false;
        }
        let mut seen = vec![0usize; self.counts.len()];
        for &color in word {
            match seen.get_mut(color) {
                Some(slot) => *slot += 1,
                None => return false,
            }
        }
        seen == self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content() {
        let content = Content::new(6, 3, &[3, 2, 1]).unwrap();
        assert_eq!(content.len(), 6);
        assert_eq!(content.colors(), 3);
        assert_eq!(content.counts(), &[3, 2, 1]);
        assert_eq!(content.count(1), 2);
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(Content::new(0, 1, &[0]), Err(ContentError::ZeroLength));
    }

    #[test]
    fn test_no_colors() {
        assert_eq!(Content::new(3, 0, &[]), Err(ContentError::NoColors));
    }

    #[test]
    fn test_count_slice_length_must_match_k() {
        assert_eq!(
            Content::new(4, 3, &[2, 2]),
            Err(ContentError::ColorCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_empty_color_rejected() {
        assert_eq!(
            Content::new(4, 3, &[2, 0, 2]),
            Err(ContentError::EmptyColor { color: 1 })
        );
    }

    #[test]
    fn test_sum_mismatch() {
        let err = Content::new(5, 2, &[2, 2]).unwrap_err();
        assert_eq!(
            err,
            ContentError::LengthMismatch {
                length: 5,
                total: Some(4)
            }
        );
        assert_eq!(
            err.to_string(),
            "Color counts sum to 4 but the bracelet length is 5"
        );
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(
            Content::new(3, 2, &[usize::MAX, 2]),
            Err(ContentError::LengthMismatch {
                length: 3,
                total: None
            })
        );
    }

    #[test]
    fn test_from_counts() {
        let content = Content::from_counts(&[2, 2]).unwrap();
        assert_eq!(content.len(), 4);
        assert_eq!(content.colors(), 2);

        assert_eq!(Content::from_counts(&[]), Err(ContentError::ZeroLength));
        assert_eq!(
            Content::from_counts(&[1, 0]),
            Err(ContentError::EmptyColor { color: 1 })
        );
    }

    #[test]
    fn test_matches() {
        let content = Content::new(4, 2, &[2, 2]).unwrap();
        assert!(content.matches(&[0, 1, 0, 1]));
        assert!(!content.matches(&[0, 0, 0, 1]));
        assert!(!content.matches(&[0, 1, 0]));
        assert!(!content.matches(&[0, 1, 2, 1]));
    }
}
