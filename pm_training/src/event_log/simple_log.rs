use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Activity label inside a trace.
///
/// Labels are opaque atomic values. Single-character names are a convenience
/// of the textual log notation, not an assumption of the model.
pub type Activity = String;

/// One recorded process execution: an ordered sequence of activities.
pub type Trace = Vec<Activity>;

/// A simple event log: a multiset of trace variants with occurrence counts.
///
/// Only the set of distinct variants and their counts matter; insertion
/// order is irrelevant. Every stored count is at least 1 — a variant is
/// dropped entirely, never kept with count 0.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimpleEventLog {
    /// Trace variants with their occurrence counts
    #[serde_as(as = "Vec<(_, _)>")]
    pub variants: HashMap<Trace, u64>,
}

impl SimpleEventLog {
    /// Create an empty event log.
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// Add `count` occurrences of a trace variant.
    ///
    /// Counts of repeated insertions accumulate. A zero count is a no-op, so
    /// the count-≥-1 invariant holds for everything stored.
    pub fn add_variant(&mut self, trace: Trace, count: u64) {
        if count > 0 {
            *self.variants.entry(trace).or_default() += count;
        }
    }

    /// Number of distinct trace variants.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Total number of trace instances (variants weighted by their counts).
    pub fn total_traces(&self) -> u64 {
        self.variants.values().sum()
    }

    /// Variants sorted by descending count, ties broken by lexical trace order.
    pub fn variants_sorted(&self) -> Vec<(&Trace, u64)> {
        self.variants
            .iter()
            .map(|(trace, &count)| (trace, count))
            .sorted_by(|(t1, c1), (t2, c2)| c2.cmp(c1).then_with(|| t1.cmp(t2)))
            .collect()
    }

    /// Prepend `start` and append `end` to every variant.
    ///
    /// Not idempotent: apply exactly once per discovery pass, re-applying
    /// duplicates the boundary symbols.
    pub fn augment(&self, start: &str, end: &str) -> SimpleEventLog {
        let mut log = SimpleEventLog::new();
        for (trace, &count) in &self.variants {
            let mut augmented: Trace = Vec::with_capacity(trace.len() + 2);
            augmented.push(start.to_string());
            augmented.extend(trace.iter().cloned());
            augmented.push(end.to_string());
            log.add_variant(augmented, count);
        }
        log
    }

    /// Project every variant onto the given activity subset.
    ///
    /// Relative order and duplicates are preserved. Variants whose
    /// projections coincide merge their counts; a variant whose projection
    /// is empty stays in the log as the empty trace.
    pub fn project(&self, keep: &HashSet<Activity>) -> SimpleEventLog {
        let mut log = SimpleEventLog::new();
        for (trace, &count) in &self.variants {
            log.add_variant(project_trace(trace, keep), count);
        }
        log
    }

    /// Sub-multiset of the variants whose count satisfies the predicate.
    ///
    /// Variants failing the predicate are dropped, not zeroed.
    pub fn restrict_by_count(&self, pred: impl Fn(u64) -> bool) -> SimpleEventLog {
        SimpleEventLog {
            variants: self
                .variants
                .iter()
                .filter(|(_, &count)| pred(count))
                .map(|(trace, &count)| (trace.clone(), count))
                .collect(),
        }
    }
}

/// Filter a trace down to the symbols contained in `keep`, preserving
/// relative order and duplicates.
pub fn project_trace(trace: &[Activity], keep: &HashSet<Activity>) -> Trace {
    trace
        .iter()
        .filter(|act| keep.contains(*act))
        .cloned()
        .collect()
}
