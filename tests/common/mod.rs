// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use bracelet_search::symmetry::{check_symmetry, is_aperiodic, SymmetryType};

/// Every arrangement of the content, in lexicographic order.
pub fn arrangements(counts: &[usize]) -> Vec<Vec<usize>> {
    fn fill(remaining: &mut [usize], word: &mut Vec<usize>, n: usize, out: &mut Vec<Vec<usize>>) {
        if word.len() == n {
            out.push(word.clone());
            return;
        }
        for color in 0..remaining.len() {
            if remaining[color] > 0 {
                remaining[color] -= 1;
                word.push(color);
                fill(remaining, word, n, out);
                word.pop();
                remaining[color] += 1;
            }
        }
    }

    let n = counts.iter().sum();
    let mut out = Vec::new();
    fill(&mut counts.to_vec(), &mut Vec::with_capacity(n), n, &mut out);
    out
}

/// Canonical bracelets found by checking every arrangement.
pub fn brute_force_bracelets(counts: &[usize], aperiodic_only: bool) -> BTreeSet<Vec<usize>> {
    arrangements(counts)
        .into_iter()
        .filter(|word| check_symmetry(word) != SymmetryType::NonCanonical)
        .filter(|word| !aperiodic_only || is_aperiodic(word))
        .collect()
}

/// All contents with at most `max_colors` colors and total length at most
/// `max_length`.
pub fn small_contents(max_colors: usize, max_length: usize) -> Vec<Vec<usize>> {
    fn extend(
        prefix: &mut Vec<usize>,
        budget: usize,
        max_colors: usize,
        out: &mut Vec<Vec<usize>>,
    ) {
        if !prefix.is_empty() {
            out.push(prefix.clone());
        }
        if prefix.len() == max_colors {
            return;
        }
        for count in 1..=budget {
            prefix.push(count);
            extend(prefix, budget - count, max_colors, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), max_length, max_colors, &mut out);
    out
}
