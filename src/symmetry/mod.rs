// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry checking for words using dihedral groups.
//!
//! This module provides brute-force functionality to check whether a word is
//! canonical under the symmetry group of rotations and reflections. The
//! generator never calls it; it is the reference the generator is tested
//! against.
//!
//! ## Module Structure
//!
//! - `canonical`: Canonicality checking under dihedral symmetry
//! - `mod`: Public API and re-exports

pub mod canonical;

// Re-export main types and functions
pub use canonical::{
    canonical_bracelet, check_symmetry, dihedral_images, is_aperiodic, is_necklace,
    SymmetryType,
};
