use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dfg::dfg_struct::DirectlyFollowsGraph;
use crate::event_log::simple_log::{Activity, SimpleEventLog};

/// Keep only the activities whose total frequency reaches `tau_act`.
///
/// Frequencies are taken from the boundary-augmented log; the boundary
/// symbols themselves never take part in the filtering. Every raw variant is
/// projected onto the surviving activities with its count unchanged —
/// variants whose projection becomes empty stay in the log. The returned log
/// is raw again: augment it once before discovering the filtered DFG.
///
/// All thresholds are inclusive, so `tau_act = 0` keeps everything.
pub fn filter_by_activity_frequency(
    log: &SimpleEventLog,
    tau_act: u64,
    start: &str,
    end: &str,
) -> SimpleEventLog {
    let dfg = DirectlyFollowsGraph::discover_from_log(&log.augment(start, end));
    let keep: HashSet<Activity> = dfg
        .activities
        .into_iter()
        .filter(|(act, frequency)| *frequency >= tau_act && act != start && act != end)
        .map(|(act, _)| act)
        .collect();
    log.project(&keep)
}

/// Keep only the trace variants whose own count reaches `tau_var`.
///
/// Independent of which activities appear in the variants.
pub fn filter_by_variant_frequency(log: &SimpleEventLog, tau_var: u64) -> SimpleEventLog {
    log.restrict_by_count(|count| count >= tau_var)
}

/// Keep only the arcs whose frequency reaches `tau_arc`.
///
/// The activity multiset passes through untouched, so the filtered graph may
/// contain activities without any surviving incident arc — the graph falling
/// apart is expected, not an error.
pub fn filter_arcs_by_frequency(dfg: &DirectlyFollowsGraph, tau_arc: u64) -> DirectlyFollowsGraph {
    DirectlyFollowsGraph {
        activities: dfg.activities.clone(),
        arcs: dfg
            .arcs
            .iter()
            .filter(|(_, &frequency)| frequency >= tau_arc)
            .map(|(arc, &frequency)| (arc.clone(), frequency))
            .collect(),
    }
}

/// The DFGs before and after one filtering operation, side by side.
///
/// Each constructor is nothing more than two baseline discovery runs: one on
/// the original input and one on the filtered one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DfgComparison {
    /// DFG discovered from the unfiltered input
    pub original: DirectlyFollowsGraph,
    /// DFG after the filter took effect
    pub filtered: DirectlyFollowsGraph,
}

impl DfgComparison {
    /// Compare the DFG of a raw log against the DFG after activity-based filtering.
    pub fn with_activity_filter(
        log: &SimpleEventLog,
        tau_act: u64,
        start: &str,
        end: &str,
    ) -> Self {
        let filtered_log = filter_by_activity_frequency(log, tau_act, start, end);
        Self {
            original: DirectlyFollowsGraph::discover_from_log(&log.augment(start, end)),
            filtered: DirectlyFollowsGraph::discover_from_log(&filtered_log.augment(start, end)),
        }
    }

    /// Compare the DFG of a raw log against the DFG after variant-based filtering.
    pub fn with_variant_filter(
        log: &SimpleEventLog,
        tau_var: u64,
        start: &str,
        end: &str,
    ) -> Self {
        let filtered_log = filter_by_variant_frequency(log, tau_var);
        Self {
            original: DirectlyFollowsGraph::discover_from_log(&log.augment(start, end)),
            filtered: DirectlyFollowsGraph::discover_from_log(&filtered_log.augment(start, end)),
        }
    }

    /// Compare a discovered DFG against its arc-filtered counterpart.
    pub fn with_arc_filter(dfg: &DirectlyFollowsGraph, tau_arc: u64) -> Self {
        Self {
            original: dfg.clone(),
            filtered: filter_arcs_by_frequency(dfg, tau_arc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::constants::{END_ACTIVITY, START_ACTIVITY};
    use crate::event_log::import_log::parse_simple_log;
    use crate::event_log::presets::preset_log;
    use crate::event_log::simple_log::Trace;

    fn trace_of(s: &str) -> Trace {
        s.chars().map(|c| c.to_string()).collect()
    }

    fn discover(log: &SimpleEventLog) -> DirectlyFollowsGraph {
        DirectlyFollowsGraph::discover_from_log(&log.augment(START_ACTIVITY, END_ACTIVITY))
    }

    #[test]
    fn activity_filter_projects_the_log() {
        // [<abce>10, <acbe>5, <ade>1]: only d falls below a threshold of 2
        let log = preset_log("L5").unwrap();
        let filtered = filter_by_activity_frequency(&log, 2, START_ACTIVITY, END_ACTIVITY);

        assert_eq!(filtered.variants.get(&trace_of("abce")), Some(&10));
        assert_eq!(filtered.variants.get(&trace_of("acbe")), Some(&5));
        assert_eq!(filtered.variants.get(&trace_of("ae")), Some(&1));
        assert_eq!(filtered.variant_count(), 3);

        let dfg = discover(&filtered);
        assert!(!dfg.contains_activity("d"));
        assert_eq!(dfg.arc_frequency("a", "e"), 1);
        assert_eq!(dfg.activity_frequency(START_ACTIVITY), 16);
    }

    #[test]
    fn activity_filter_keeps_fully_projected_variants() {
        let log = parse_simple_log("[<d>3]").unwrap();
        // d occurs 3 times; a threshold of 4 removes it
        let filtered = filter_by_activity_frequency(&log, 4, START_ACTIVITY, END_ACTIVITY);
        assert_eq!(filtered.variants.get(&Vec::new()), Some(&3));

        let dfg = discover(&filtered);
        assert_eq!(dfg.arc_frequency(START_ACTIVITY, END_ACTIVITY), 3);
    }

    #[test]
    fn variant_filter_drops_rare_variants() {
        let log = preset_log("L1").unwrap();
        let filtered = filter_by_variant_frequency(&log, 20);
        assert_eq!(filtered.variant_count(), 4);
        assert_eq!(filtered.total_traces(), 140);
        assert!(!filtered.variants.contains_key(&trace_of("abcdcbe")));
    }

    #[test]
    fn arc_filter_leaves_activities_untouched() {
        // d is reachable only via arcs of frequency 1
        let log = preset_log("L5").unwrap();
        let dfg = discover(&log);
        let filtered = filter_arcs_by_frequency(&dfg, 2);

        assert!(!filtered.contains_arc("a", "d"));
        assert!(!filtered.contains_arc("d", "e"));
        assert_eq!(filtered.activity_frequency("d"), 1);
        assert_eq!(filtered.activities, dfg.activities);
    }

    #[test]
    fn zero_threshold_is_a_no_op() {
        let log = preset_log("L2").unwrap();
        assert_eq!(
            filter_by_activity_frequency(&log, 0, START_ACTIVITY, END_ACTIVITY),
            log
        );
        assert_eq!(filter_by_variant_frequency(&log, 0), log);

        let dfg = discover(&log);
        assert_eq!(filter_arcs_by_frequency(&dfg, 0), dfg);
    }

    #[test]
    fn thresholds_above_every_frequency_empty_the_result() {
        let log = preset_log("L3").unwrap();
        let dfg = discover(&log);
        let tau = dfg.max_activity_frequency() + 1;

        let filtered_log = filter_by_activity_frequency(&log, tau, START_ACTIVITY, END_ACTIVITY);
        // all variants collapse onto the empty trace
        assert_eq!(filtered_log.variants.get(&Vec::new()), Some(&87));

        assert_eq!(filter_by_variant_frequency(&log, tau).variant_count(), 0);

        let arcless = filter_arcs_by_frequency(&dfg, dfg.max_arc_frequency() + 1);
        assert!(arcless.arcs.is_empty());
        assert_eq!(arcless.activities, dfg.activities);

        // downstream stages accept the empty results
        let empty_dfg = discover(&filter_by_variant_frequency(&log, tau));
        assert!(empty_dfg.activities.is_empty());
        let (footprint, _) = arcless.footprint_matrix(START_ACTIVITY, END_ACTIVITY);
        assert_eq!(footprint.axis, vec!["I", "O"]);
    }

    #[test]
    fn growing_thresholds_shrink_the_result() {
        let log = preset_log("L1").unwrap();
        let dfg = discover(&log);

        let mut last_activities = usize::MAX;
        let mut last_variants = usize::MAX;
        let mut last_arcs = usize::MAX;
        for tau in 0..=dfg.max_activity_frequency() + 1 {
            let activities = filter_by_activity_frequency(&log, tau, START_ACTIVITY, END_ACTIVITY)
                .variants
                .keys()
                .flatten()
                .collect::<HashSet<_>>()
                .len();
            let variants = filter_by_variant_frequency(&log, tau).variant_count();
            let arcs = filter_arcs_by_frequency(&dfg, tau).arcs.len();

            assert!(activities <= last_activities);
            assert!(variants <= last_variants);
            assert!(arcs <= last_arcs);
            last_activities = activities;
            last_variants = variants;
            last_arcs = arcs;
        }
    }

    #[test]
    fn comparison_runs_discovery_on_both_sides() {
        let log = preset_log("L5").unwrap();
        let comparison =
            DfgComparison::with_activity_filter(&log, 2, START_ACTIVITY, END_ACTIVITY);
        assert!(comparison.original.contains_activity("d"));
        assert!(!comparison.filtered.contains_activity("d"));
        // activity frequencies of survivors are unchanged by the projection
        assert_eq!(comparison.filtered.activity_frequency("a"), 16);

        let arc_comparison = DfgComparison::with_arc_filter(&comparison.original, 2);
        assert_eq!(
            arc_comparison.original.activities,
            arc_comparison.filtered.activities
        );
        assert!(arc_comparison.filtered.arcs.len() < arc_comparison.original.arcs.len());
    }
}
