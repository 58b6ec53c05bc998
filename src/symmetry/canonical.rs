// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonicality checking for words under the dihedral group D_n.
//!
//! These checks apply every rotation and reflection explicitly, costing
//! O(n^2) per word. They serve as an independent oracle for the generator
//! and for the `--verify` mode of the command line tool.

use std::cmp::Ordering;

/// Result of symmetry checking for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Word is the unique lexicographic minimum of its dihedral images.
    Canonical,
    /// Word is the minimum, but some non-identity rotation or reflection
    /// maps it to itself.
    Equivocal,
    /// Some rotation or reflection is smaller (reject - not canonical).
    NonCanonical,
}

/// Iterate over all `2n` images of `word` under D_n.
///
/// The first `n` images are the rotations (rotation by 0 first), the next
/// `n` are the rotations of the reversal.
pub fn dihedral_images(word: &[usize]) -> impl Iterator<Item = Vec<usize>> + '_ {
    let n = word.len();
    let rotations = (0..n).map(move |shift| rotate(word, shift));
    let reflections = (0..n).map(move |shift| {
        (0..n)
            .map(|i| word[(n + n - 1 - i - shift) % n])
            .collect::<Vec<_>>()
    });
    rotations.chain(reflections)
}

fn rotate(word: &[usize], shift: usize) -> Vec<usize> {
    let mut rotated = word[shift..].to_vec();
    rotated.extend_from_slice(&word[..shift]);
    rotated
}

/// Check whether `word` is the canonical bracelet of its class.
///
/// Algorithm:
/// 1. Apply all 2n permutations from the dihedral group
/// 2. Track the lexicographic minimum and how often it occurs
/// 3. Compare input with the minimum:
///    - If input != min → NonCanonical (reject)
///    - If input == min and min occurs more than once → Equivocal
///    - Otherwise → Canonical
///
/// # Examples
///
/// - `[0,0,1,0,1,2]` → Canonical
/// - `[0,1,0,1,0,2]` → Equivocal (it is its own reflection)
/// - `[0,0,1,2,1,0]` → NonCanonical (rotating gives `[0,0,0,1,2,1]`)
pub fn check_symmetry(word: &[usize]) -> SymmetryType {
    if word.is_empty() {
        return SymmetryType::Equivocal;
    }

    let mut min_image: Option<Vec<usize>> = None;
    let mut min_count = 0;

    for image in dihedral_images(word) {
        match min_image.as_ref().map(|min| image.cmp(min)) {
            None | Some(Ordering::Less) => {
                min_image = Some(image);
                min_count = 1;
            }
            Some(Ordering::Equal) => {
                min_count += 1;
            }
            Some(Ordering::Greater) => {}
        }
    }

    if min_image.as_deref() != Some(word) {
        return SymmetryType::NonCanonical;
    }
    if min_count > 1 {
        return SymmetryType::Equivocal;
    }
    SymmetryType::Canonical
}

/// Smallest image of `word` under rotation and reflection.
pub fn canonical_bracelet(word: &[usize]) -> Vec<usize> {
    dihedral_images(word).min().unwrap_or_default()
}

/// Check whether `word` is lexicographically minimal among its rotations.
pub fn is_necklace(word: &[usize]) -> bool {
    let n = word.len();
    (1..n).all(|shift| rotate(word, shift).as_slice() >= word)
}

/// Check whether no non-trivial rotation maps `word` to itself.
pub fn is_aperiodic(word: &[usize]) -> bool {
    let n = word.len();
    (1..n).all(|shift| rotate(word, shift).as_slice() != word)
}
