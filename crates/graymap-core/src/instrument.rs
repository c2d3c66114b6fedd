/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Access counters
//!
//! Images and decoders can be given a shared [`AccessCounter`], they then report
//! how many pixel samples each operation read or wrote.
//! Nothing is counted when no counter is attached, and counting never
//! changes the result of an operation.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use graymap_core::instrument::{AccessCounter, Counter, Instrumentation};
//!
//! let instr = Arc::new(Instrumentation::new());
//! instr.record(Counter::PixelMemory, 10);
//! assert_eq!(instr.get(Counter::PixelMemory), 10);
//! instr.reset();
//! assert_eq!(instr.get(Counter::PixelMemory), 0);
//! ```
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const NUM_COUNTERS: usize = 1;

/// Named counters known to the library
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Counter {
    /// Pixel memory accesses, one per sample read or written
    PixelMemory
}

impl Counter {
    /// Every counter, in report order
    pub const ALL: [Counter; NUM_COUNTERS] = [Counter::PixelMemory];

    /// Short name used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Counter::PixelMemory => "pixmem"
        }
    }

    const fn index(self) -> usize {
        match self {
            Counter::PixelMemory => 0
        }
    }
}

/// A sink for access counts
pub trait AccessCounter: Send + Sync {
    /// Add `amount` to `counter`
    fn record(&self, counter: Counter, amount: u64);
}

/// A counter shared between the images and decoders that report to it
pub type SharedCounter = Arc<dyn AccessCounter>;

/// The default [`AccessCounter`], one atomic count per [`Counter`]
#[derive(Default)]
pub struct Instrumentation {
    counts: [AtomicU64; NUM_COUNTERS]
}

impl Instrumentation {
    pub fn new() -> Instrumentation {
        Instrumentation::default()
    }
    /// Current value of `counter`
    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter.index()].load(Ordering::Relaxed)
    }
    /// Set all counters back to zero
    pub fn reset(&self) {
        for count in &self.counts {
            count.store(0, Ordering::Relaxed);
        }
    }
    /// Copy out the current counts
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            counts: Counter::ALL.map(|c| (c.name(), self.get(c))).to_vec()
        }
    }
}

impl AccessCounter for Instrumentation {
    fn record(&self, counter: Counter, amount: u64) {
        self.counts[counter.index()].fetch_add(amount, Ordering::Relaxed);
    }
}

impl Display for Instrumentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.snapshot(), f)
    }
}

/// Counter values at one point in time
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub counts: Vec<(&'static str, u64)>
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (name, _) in &self.counts {
            write!(f, "{name:>15}")?;
        }
        writeln!(f)?;
        for (_, count) in &self.counts {
            write!(f, "{count:>15}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::instrument::{AccessCounter, Counter, Instrumentation, SharedCounter};

    #[test]
    fn shared_counter_accumulates() {
        let instr = Arc::new(Instrumentation::new());
        let shared: SharedCounter = instr.clone();

        shared.record(Counter::PixelMemory, 3);
        shared.record(Counter::PixelMemory, 4);

        assert_eq!(instr.get(Counter::PixelMemory), 7);
    }

    #[test]
    fn report_lists_counter_names() {
        let instr = Instrumentation::new();
        instr.record(Counter::PixelMemory, 42);

        let report = instr.to_string();

        assert!(report.contains("pixmem"));
        assert!(report.contains("42"));
    }
}
