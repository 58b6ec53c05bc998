// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run bookkeeping that outlives the search itself.

pub mod statistics;

pub use statistics::{Counters, Statistics};
