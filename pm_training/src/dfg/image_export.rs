use std::{fs::File, io::Write};

use graphviz_rust::{
    cmd::Format,
    dot_generator::{attr, edge, graph, id, node, node_id, stmt},
    dot_structures::*,
    printer::{DotPrinter, PrinterContext},
};
use uuid::Uuid;

use crate::dfg::dfg_struct::DirectlyFollowsGraph;

/// Reading direction of the rendered graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphOrientation {
    /// Left to right (`rankdir=LR`)
    #[default]
    LeftRight,
    /// Top to bottom (`rankdir=TB`)
    TopBottom,
}

impl GraphOrientation {
    fn rankdir(&self) -> &'static str {
        match self {
            GraphOrientation::LeftRight => "LR",
            GraphOrientation::TopBottom => "TB",
        }
    }
}

///
/// Export a [`DirectlyFollowsGraph`] to a DOT graph (used in Graphviz)
///
/// The boundary activities get a double-circle shape, all others a plain
/// circle; every arc becomes one directed edge labeled with its frequency.
///
/// Also see [`export_dfg_image`], as well as [`export_dfg_image_svg`] and [`export_dfg_image_png`]
///
pub fn export_dfg_to_dot_graph(
    dfg: &DirectlyFollowsGraph,
    orientation: GraphOrientation,
    start: &str,
    end: &str,
) -> Graph {
    let activity_nodes: Vec<Stmt> = dfg
        .activities_sorted()
        .into_iter()
        .map(|(act, _)| {
            let shape = if act == start || act == end {
                "doublecircle"
            } else {
                "circle"
            };
            stmt!(node!(esc act; attr!("label", esc act), attr!("shape", shape)))
        })
        .collect();

    let arcs: Vec<Stmt> = dfg
        .arcs_sorted()
        .into_iter()
        .map(|((from, to), frequency)| {
            stmt!(edge!(
                node_id!(esc from) => node_id!(esc to),
                vec![attr!("label", (format!("{}", frequency)))]
            ))
        })
        .collect();

    let rankdir = orientation.rankdir();
    let global_graph_options = vec![stmt!(attr!("rankdir", rankdir))];

    graph!(
        strict di id!(esc Uuid::new_v4()),
        vec![global_graph_options, activity_nodes, arcs]
            .into_iter()
            .flatten()
            .collect()
    )
}

///
/// Convert a DOT graph to a String containing the DOT source
///
pub fn graph_to_dot(g: &Graph) -> String {
    g.print(&mut PrinterContext::default())
}

///
/// Render a [`DirectlyFollowsGraph`] to image bytes in the given format
///
/// Requires an active graphviz installation in the PATH.
///
pub fn export_dfg_image_bytes(
    dfg: &DirectlyFollowsGraph,
    orientation: GraphOrientation,
    start: &str,
    end: &str,
    format: Format,
) -> Result<Vec<u8>, std::io::Error> {
    let g = export_dfg_to_dot_graph(dfg, orientation, start, end);
    graphviz_rust::exec(g, &mut PrinterContext::default(), vec![format.into()])
}

///
/// Export the image of a [`DirectlyFollowsGraph`] to the specified filepath
///
/// Also see [`export_dfg_image_svg`] and [`export_dfg_image_png`]
///
pub fn export_dfg_image<P: AsRef<std::path::Path>>(
    dfg: &DirectlyFollowsGraph,
    path: P,
    orientation: GraphOrientation,
    start: &str,
    end: &str,
    format: Format,
) -> Result<(), std::io::Error> {
    let out = export_dfg_image_bytes(dfg, orientation, start, end, format)?;
    let mut f = File::create(path)?;
    f.write_all(&out)?;
    Ok(())
}

///
/// Export the image of a [`DirectlyFollowsGraph`] as a PNG file
///
/// Also consider using [`DirectlyFollowsGraph::export_png`] for convenience.
pub fn export_dfg_image_png<P: AsRef<std::path::Path>>(
    dfg: &DirectlyFollowsGraph,
    path: P,
    orientation: GraphOrientation,
    start: &str,
    end: &str,
) -> Result<(), std::io::Error> {
    export_dfg_image(dfg, path, orientation, start, end, Format::Png)
}

///
/// Export the image of a [`DirectlyFollowsGraph`] as a SVG file
///
/// Also consider using [`DirectlyFollowsGraph::export_svg`] for convenience.
pub fn export_dfg_image_svg<P: AsRef<std::path::Path>>(
    dfg: &DirectlyFollowsGraph,
    path: P,
    orientation: GraphOrientation,
    start: &str,
    end: &str,
) -> Result<(), std::io::Error> {
    export_dfg_image(dfg, path, orientation, start, end, Format::Svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::constants::{END_ACTIVITY, START_ACTIVITY};
    use crate::event_log::import_log::parse_simple_log;

    fn sample_dfg() -> DirectlyFollowsGraph {
        let log = parse_simple_log("[<acd>45, <bce>42]").unwrap();
        DirectlyFollowsGraph::discover_from_log(&log.augment(START_ACTIVITY, END_ACTIVITY))
    }

    #[test]
    fn dot_graph_shapes_and_orientation() {
        let dfg = sample_dfg();
        let dot = graph_to_dot(&export_dfg_to_dot_graph(
            &dfg,
            GraphOrientation::LeftRight,
            START_ACTIVITY,
            END_ACTIVITY,
        ));

        assert!(dot.contains("rankdir=LR"));
        assert_eq!(dot.matches("doublecircle").count(), 2);
        assert!(dot.contains("45"));

        let dot_tb = graph_to_dot(&export_dfg_to_dot_graph(
            &dfg,
            GraphOrientation::TopBottom,
            START_ACTIVITY,
            END_ACTIVITY,
        ));
        assert!(dot_tb.contains("rankdir=TB"));
    }

    #[test]
    fn every_arc_becomes_one_edge() {
        let dfg = sample_dfg();
        let g = export_dfg_to_dot_graph(
            &dfg,
            GraphOrientation::default(),
            START_ACTIVITY,
            END_ACTIVITY,
        );
        let edges = graph_to_dot(&g).matches("->").count();
        assert_eq!(edges, dfg.arcs.len());
    }
}
