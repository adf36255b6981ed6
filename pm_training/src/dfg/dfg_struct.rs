use std::collections::HashMap;

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::event_log::simple_log::{Activity, SimpleEventLog};

/// A directly-follows graph of [`Activity`]s.
///
/// Both the activities and the directly-follows arcs between them are
/// annotated with their total frequency in the underlying log. No
/// conservation law holds between the two multisets: the outgoing arc
/// frequencies of an activity need not sum to its node frequency.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectlyFollowsGraph {
    /// Activities with their frequencies
    pub activities: HashMap<Activity, u64>,
    /// Directly-follows arcs with their frequencies
    #[serde_as(as = "Vec<(_, _)>")]
    pub arcs: HashMap<(Activity, Activity), u64>,
}

impl DirectlyFollowsGraph {
    /// Create a new [`DirectlyFollowsGraph`] with no activities and no arcs.
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
            arcs: HashMap::new(),
        }
    }

    /// Discover the directly-follows graph of a boundary-augmented log.
    ///
    /// Every symbol occurrence in a variant with count `c` contributes `c`
    /// to that symbol's node frequency; every pair of adjacent symbols
    /// contributes `c` to that arc's frequency (consecutive repetitions of a
    /// symbol yield self-loop arcs). Contributions are summed per key across
    /// all variants, so the result is independent of aggregation order.
    ///
    /// The log is expected to already carry its start and end symbols, see
    /// [`SimpleEventLog::augment`]. An empty log yields an empty graph.
    pub fn discover_from_log(log: &SimpleEventLog) -> Self {
        log.variants
            .par_iter()
            .fold(Self::new, |mut dfg, (trace, &count)| {
                for act in trace {
                    dfg.add_activity(act.clone(), count);
                }
                for pair in trace.windows(2) {
                    dfg.add_arc(pair[0].clone(), pair[1].clone(), count);
                }
                dfg
            })
            .reduce(Self::new, |mut merged, other| {
                for (act, frequency) in other.activities {
                    merged.add_activity(act, frequency);
                }
                for ((from, to), frequency) in other.arcs {
                    merged.add_arc(from, to, frequency);
                }
                merged
            })
    }

    /// Add an activity with a frequency.
    ///
    /// If the activity already exists, the frequency is added to the
    /// existing one.
    pub fn add_activity(&mut self, activity: Activity, frequency: u64) {
        *self.activities.entry(activity).or_default() += frequency;
    }

    /// Add a directly-follows arc with a frequency.
    ///
    /// If the arc already exists, the frequency is added to the existing one.
    pub fn add_arc(&mut self, from: Activity, to: Activity, frequency: u64) {
        *self.arcs.entry((from, to)).or_default() += frequency;
    }

    /// Checks if an activity is contained in the graph.
    pub fn contains_activity(&self, activity: &str) -> bool {
        self.activities.contains_key(activity)
    }

    /// Frequency of an activity, 0 if absent.
    pub fn activity_frequency(&self, activity: &str) -> u64 {
        self.activities.get(activity).copied().unwrap_or(0)
    }

    /// Checks if a directly-follows arc is contained in the graph.
    pub fn contains_arc(&self, from: &str, to: &str) -> bool {
        self.arcs.contains_key(&(from.to_string(), to.to_string()))
    }

    /// Frequency of a directly-follows arc, 0 if absent.
    pub fn arc_frequency(&self, from: &str, to: &str) -> u64 {
        self.arcs
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Activities sorted by descending frequency, ties broken by label.
    pub fn activities_sorted(&self) -> Vec<(&Activity, u64)> {
        self.activities
            .iter()
            .map(|(act, &frequency)| (act, frequency))
            .sorted_by(|(a1, f1), (a2, f2)| f2.cmp(f1).then_with(|| a1.cmp(a2)))
            .collect()
    }

    /// Arcs sorted by descending frequency, ties broken by pair label.
    pub fn arcs_sorted(&self) -> Vec<(&(Activity, Activity), u64)> {
        self.arcs
            .iter()
            .map(|(arc, &frequency)| (arc, frequency))
            .sorted_by(|(p1, f1), (p2, f2)| f2.cmp(f1).then_with(|| p1.cmp(p2)))
            .collect()
    }

    /// Highest activity frequency in the graph (0 for an empty graph).
    pub fn max_activity_frequency(&self) -> u64 {
        self.activities.values().copied().max().unwrap_or(0)
    }

    /// Highest arc frequency in the graph (0 for an empty graph).
    pub fn max_arc_frequency(&self) -> u64 {
        self.arcs.values().copied().max().unwrap_or(0)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    #[cfg(feature = "graphviz-export")]
    /// Export the directly-follows graph as a PNG image
    ///
    /// The PNG file is written to the specified filepath
    ///
    /// Only available with the `graphviz-export` feature.
    pub fn export_png<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        orientation: super::image_export::GraphOrientation,
        start: &str,
        end: &str,
    ) -> Result<(), std::io::Error> {
        super::image_export::export_dfg_image_png(self, path, orientation, start, end)
    }

    #[cfg(feature = "graphviz-export")]
    /// Export the directly-follows graph as an SVG image.
    ///
    /// The SVG file is written to the specified filepath.
    ///
    /// Only available with the `graphviz-export` feature.
    pub fn export_svg<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        orientation: super::image_export::GraphOrientation,
        start: &str,
        end: &str,
    ) -> Result<(), std::io::Error> {
        super::image_export::export_dfg_image_svg(self, path, orientation, start, end)
    }
}
