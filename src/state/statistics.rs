// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are owned by one generator run and returned when it finishes.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Calls of the recursive extension step.
    Nodes,
    /// Candidate symbols whose partial string has a smaller reversal.
    MirrorPruned,
    /// Complete strings whose period does not divide the length.
    PeriodicRejected,
    /// Complete strings whose reversal is smaller.
    ReflectionRejected,
    /// Complete bracelets dropped because they are not aperiodic.
    AperiodicFiltered,
    /// Bracelets handed to the sink.
    Bracelets,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}
