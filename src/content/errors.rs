// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for fixed-content validation.

use std::fmt;

/// Reasons a `(n, k, counts)` triple cannot describe a fixed content.
///
/// Every variant is an invalid argument: it is reported before any search
/// state is built, so a failed call never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The requested bracelet length is zero.
    ZeroLength,

    /// The requested number of colors is zero.
    NoColors,

    /// `counts` does not have one entry per color.
    ColorCountMismatch { expected: usize, actual: usize },

    /// A color is listed with no occurrences.
    EmptyColor { color: usize },

    /// The occurrence counts do not add up to the bracelet length.
    /// `total` is `None` when the sum overflows `usize`.
    LengthMismatch { length: usize, total: Option<usize> },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::ZeroLength => write!(f, "Bracelet length must be positive"),
            ContentError::NoColors => write!(f, "Number of colors must be positive"),
            ContentError::ColorCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected {} color counts but {} were given",
                    expected, actual
                )
            }
            ContentError::EmptyColor { color } => {
                write!(f, "Color {} must occur at least once", color)
            }
            ContentError::LengthMismatch {
                length,
                total: Some(total),
            } => {
                write!(
                    f,
                    "Color counts sum to {} but the bracelet length is {}",
                    total, length
                )
            }
            ContentError::LengthMismatch {
                length,
                total: None,
            } => {
                write!(
                    f,
                    "Color counts overflow but the bracelet length is {}",
                    length
                )
            }
        }
    }
}

impl std::error::Error for ContentError {}
