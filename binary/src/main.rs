use std::time::Instant;

use pm_training::{
    dfg::filtering::{filter_arcs_by_frequency, DfgComparison},
    event_log::constants::{END_ACTIVITY, START_ACTIVITY},
    DfgMatrix, DirectlyFollowsGraph, Footprint,
};

fn main() {
    let log = pm_training::preset_log("L1").unwrap();
    println!(
        "Preset L1: {} variants, {} traces",
        log.variant_count(),
        log.total_traces()
    );
    for (trace, count) in log.variants_sorted() {
        println!("  <{}> x{}", trace.join(","), count);
    }

    // Baseline discovery
    let now = Instant::now();
    let dfg = DirectlyFollowsGraph::discover_from_log(&log.augment(START_ACTIVITY, END_ACTIVITY));
    println!(
        "\nDiscovered DFG with {} activities and {} arcs in {:#?}",
        dfg.activities.len(),
        dfg.arcs.len(),
        now.elapsed()
    );
    for (act, frequency) in dfg.activities_sorted() {
        println!("  {} x{}", act, frequency);
    }
    for ((from, to), frequency) in dfg.arcs_sorted() {
        println!("  {} -> {} x{}", from, to, frequency);
    }

    // Matrix & footprint
    let (footprint, matrix) = dfg.footprint_matrix(START_ACTIVITY, END_ACTIVITY);
    println!("\nDFG matrix:");
    print_matrix(&matrix);
    println!("\nDFG footprint:");
    print_footprint(&footprint);

    // The three filters, each at 3/4 of the relevant maximum frequency
    let tau_act = dfg.max_activity_frequency() * 3 / 4;
    let comparison =
        DfgComparison::with_activity_filter(&log, tau_act, START_ACTIVITY, END_ACTIVITY);
    println!(
        "\nActivity-based filtering (tau = {}): {} -> {} activities, {} -> {} arcs",
        tau_act,
        comparison.original.activities.len(),
        comparison.filtered.activities.len(),
        comparison.original.arcs.len(),
        comparison.filtered.arcs.len()
    );

    let tau_var = log
        .variants_sorted()
        .first()
        .map(|(_, count)| *count)
        .unwrap_or(0)
        * 3
        / 4;
    let comparison = DfgComparison::with_variant_filter(&log, tau_var, START_ACTIVITY, END_ACTIVITY);
    println!(
        "Variant-based filtering (tau = {}): {} -> {} arcs",
        tau_var,
        comparison.original.arcs.len(),
        comparison.filtered.arcs.len()
    );

    let tau_arc = dfg.max_arc_frequency() * 3 / 4;
    let filtered = filter_arcs_by_frequency(&dfg, tau_arc);
    println!(
        "Arc-based filtering (tau = {}): {} -> {} arcs, activities untouched",
        tau_arc,
        dfg.arcs.len(),
        filtered.arcs.len()
    );

    println!("\nFiltered DFG as JSON:");
    println!("{}", serde_json::to_string_pretty(&filtered).unwrap());
}

fn print_matrix(matrix: &DfgMatrix) {
    print!("{:>4}", "");
    for act in &matrix.axis {
        print!("{:>4}", act);
    }
    println!();
    for (i, act) in matrix.axis.iter().enumerate() {
        print!("{:>4}", act);
        for cell in &matrix.cells[i] {
            print!("{:>4}", cell);
        }
        println!();
    }
}

fn print_footprint(footprint: &Footprint) {
    print!("{:>4}", "");
    for act in &footprint.axis {
        print!("{:>4}", act);
    }
    println!();
    for (i, act) in footprint.axis.iter().enumerate() {
        print!("{:>4}", act);
        for relation in &footprint.relations[i] {
            print!("{:>4}", relation.symbol());
        }
        println!();
    }
}
