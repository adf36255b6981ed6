use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::dfg::dfg_struct::DirectlyFollowsGraph;
use crate::event_log::simple_log::Activity;

/// Relation between an ordered pair of activities in a DFG footprint.
///
/// Exactly one relation holds per ordered pair, and the relations of
/// `(a1, a2)` and `(a2, a1)` always form a consistent mirror pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DfRelation {
    /// `a1` is sometimes directly followed by `a2`, never the reverse
    #[serde(rename = "→")]
    Follows,
    /// `a2` is sometimes directly followed by `a1`, never the reverse
    #[serde(rename = "←")]
    Precedes,
    /// Both directions are observed
    #[serde(rename = "∥")]
    Parallel,
    /// Neither direction is observed
    #[serde(rename = "#")]
    Unrelated,
}

impl DfRelation {
    /// Textual symbol of the relation (`→`, `←`, `∥` or `#`).
    pub fn symbol(&self) -> &'static str {
        match self {
            DfRelation::Follows => "→",
            DfRelation::Precedes => "←",
            DfRelation::Parallel => "∥",
            DfRelation::Unrelated => "#",
        }
    }

    /// The relation seen from the mirrored pair `(a2, a1)`.
    pub fn mirrored(&self) -> DfRelation {
        match self {
            DfRelation::Follows => DfRelation::Precedes,
            DfRelation::Precedes => DfRelation::Follows,
            other => *other,
        }
    }
}

impl std::fmt::Display for DfRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Complete footprint table of a DFG over its ordered activity axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Footprint {
    /// Ordered axis: start symbol, lexically sorted activities, end symbol
    pub axis: Vec<Activity>,
    /// `relations[i][j]` relates `axis[i]` to `axis[j]`
    pub relations: Vec<Vec<DfRelation>>,
}

impl Footprint {
    /// Relation between two activities, if both lie on the axis.
    pub fn relation(&self, a1: &str, a2: &str) -> Option<DfRelation> {
        let i = self.axis.iter().position(|act| act == a1)?;
        let j = self.axis.iter().position(|act| act == a2)?;
        Some(self.relations[i][j])
    }

    /// Sparse view: all ordered pairs whose relation is not `#`.
    pub fn to_sparse(&self) -> HashMap<(Activity, Activity), DfRelation> {
        let mut sparse = HashMap::new();
        for (i, a1) in self.axis.iter().enumerate() {
            for (j, a2) in self.axis.iter().enumerate() {
                if self.relations[i][j] != DfRelation::Unrelated {
                    sparse.insert((a1.clone(), a2.clone()), self.relations[i][j]);
                }
            }
        }
        sparse
    }
}

/// Complete matrix representation of a DFG over its ordered activity axis.
///
/// Cells hold the raw arc frequencies; a pair never observed as an arc is 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DfgMatrix {
    /// Ordered axis: start symbol, lexically sorted activities, end symbol
    pub axis: Vec<Activity>,
    /// `cells[i][j]` is the frequency of the arc from `axis[i]` to `axis[j]`
    pub cells: Vec<Vec<u64>>,
}

impl DfgMatrix {
    /// Frequency of the arc between two activities, if both lie on the axis.
    pub fn cell(&self, a1: &str, a2: &str) -> Option<u64> {
        let i = self.axis.iter().position(|act| act == a1)?;
        let j = self.axis.iter().position(|act| act == a2)?;
        Some(self.cells[i][j])
    }

    /// Sparse view: all ordered pairs with a nonzero frequency.
    pub fn to_sparse(&self) -> HashMap<(Activity, Activity), u64> {
        let mut sparse = HashMap::new();
        for (i, a1) in self.axis.iter().enumerate() {
            for (j, a2) in self.axis.iter().enumerate() {
                if self.cells[i][j] > 0 {
                    sparse.insert((a1.clone(), a2.clone()), self.cells[i][j]);
                }
            }
        }
        sparse
    }
}

///
/// Derive the footprint and matrix representation of a DFG arc multiset
///
/// The shared axis contains the `start` symbol, the lexically sorted
/// activities appearing in any arc, and the `end` symbol; the boundary
/// symbols are always part of the axis, even for an empty arc multiset.
/// Activities are compared as whole values, so multi-character labels are
/// handled like any other.
///
/// Relations come from presence tests only (the arc frequencies are
/// irrelevant for the footprint): both directions present means `∥` — a
/// self-loop degenerates to `∥` on the diagonal — one direction `→`/`←`,
/// neither `#`. Both tables are complete: every cell is populated, starting
/// from an all-`#`/all-0 default and overwriting the cells of present arcs
/// in a single pass.
///
pub fn build_footprint_matrix(
    arcs: &HashMap<(Activity, Activity), u64>,
    start: &str,
    end: &str,
) -> (Footprint, DfgMatrix) {
    let universe: BTreeSet<&str> = arcs
        .keys()
        .flat_map(|(from, to)| [from.as_str(), to.as_str()])
        .filter(|act| *act != start && *act != end)
        .collect();
    let axis: Vec<Activity> = std::iter::once(start)
        .chain(universe)
        .chain(std::iter::once(end))
        .map(str::to_string)
        .collect();
    let index: HashMap<&str, usize> = axis
        .iter()
        .enumerate()
        .map(|(i, act)| (act.as_str(), i))
        .collect();

    let n = axis.len();
    let mut relations = vec![vec![DfRelation::Unrelated; n]; n];
    let mut cells = vec![vec![0u64; n]; n];
    for ((from, to), &frequency) in arcs {
        let (i, j) = (index[from.as_str()], index[to.as_str()]);
        cells[i][j] = frequency;
        if arcs.contains_key(&(to.clone(), from.clone())) {
            relations[i][j] = DfRelation::Parallel;
        } else {
            relations[i][j] = DfRelation::Follows;
            relations[j][i] = DfRelation::Precedes;
        }
    }

    (
        Footprint {
            axis: axis.clone(),
            relations,
        },
        DfgMatrix { axis, cells },
    )
}

impl DirectlyFollowsGraph {
    /// Footprint and matrix representation of this graph's arcs.
    pub fn footprint_matrix(&self, start: &str, end: &str) -> (Footprint, DfgMatrix) {
        build_footprint_matrix(&self.arcs, start, end)
    }
}
