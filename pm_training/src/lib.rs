#![warn(
    clippy::doc_markdown,
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs
)]

#![doc = include_str!("../README.md")]

///
/// Simple event logs: trace multisets, their textual notation and presets
///
pub mod event_log {
    /// Boundary activity symbols
    pub mod constants;
    /// Parser for the simple event log text notation
    pub mod import_log;
    /// Catalog of named sample logs
    pub mod presets;
    /// [`SimpleEventLog`] struct and trace operations
    pub mod simple_log;

    pub use simple_log::{Activity, SimpleEventLog, Trace};
}

///
/// Directly-follows graphs: discovery, footprint/matrix views and filtering
///
pub mod dfg {
    /// [`DirectlyFollowsGraph`] struct and baseline discovery
    pub mod dfg_struct;
    /// Activity-, variant- and arc-based filtering
    pub mod filtering;
    /// Footprint and matrix representations
    pub mod footprint;
    #[cfg(feature = "graphviz-export")]
    /// Export [`DirectlyFollowsGraph`] to images (SVG, PNG, ...)
    ///
    /// __Requires the `graphviz-export` feature to be enabled__
    ///
    /// Also requires an active graphviz installation in the PATH.
    /// See also <https://graphviz.org/download/>
    pub mod image_export;

    #[doc(inline)]
    pub use crate::dfg::dfg_struct::DirectlyFollowsGraph;
}

#[doc(inline)]
pub use dfg::dfg_struct::DirectlyFollowsGraph;

#[doc(inline)]
pub use dfg::footprint::build_footprint_matrix;

#[doc(inline)]
pub use dfg::footprint::DfRelation;

#[doc(inline)]
pub use dfg::footprint::DfgMatrix;

#[doc(inline)]
pub use dfg::footprint::Footprint;

#[doc(inline)]
pub use dfg::filtering::filter_arcs_by_frequency;

#[doc(inline)]
pub use dfg::filtering::filter_by_activity_frequency;

#[doc(inline)]
pub use dfg::filtering::filter_by_variant_frequency;

#[doc(inline)]
pub use dfg::filtering::DfgComparison;

#[doc(inline)]
pub use event_log::import_log::parse_simple_log;

#[doc(inline)]
pub use event_log::import_log::LogParseError;

#[doc(inline)]
pub use event_log::presets::preset_log;

#[doc(inline)]
pub use event_log::presets::preset_log_text;

#[doc(inline)]
pub use event_log::simple_log::SimpleEventLog;

#[cfg(feature = "graphviz-export")]
#[doc(inline)]
pub use dfg::image_export::export_dfg_image_png;

#[cfg(feature = "graphviz-export")]
#[doc(inline)]
pub use dfg::image_export::export_dfg_image_svg;

#[cfg(feature = "graphviz-export")]
#[doc(inline)]
pub use dfg::image_export::GraphOrientation;
