//! [GraphMapping], the correspondence type produced by the matcher and
//! consumed by the applier (and, as `K→L`/`K→R`, stored on every
//! [Rule][crate::rule::Rule]).

use serde::{Deserialize, Serialize};

/// A correspondence between a source graph and a destination graph.
///
/// Both fields are indexed by *source* position-index, mirroring the
/// translation-table discipline used throughout this crate: no sparse
/// maps, just `Vec`s kept in lockstep with the source graph's own
/// indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphMapping {
    /// `node_mapping[source_node] == destination_node`.
    pub node_mapping: Vec<usize>,
    /// `edge_mapping[source_edge]` lists every destination edge this
    /// source edge corresponds to. Empty for edges with no counterpart,
    /// multi-valued when several parallel destination edges match.
    pub edge_mapping: Vec<Vec<usize>>,
}

impl GraphMapping {
    /// An empty mapping, to be filled in as a source graph is walked.
    pub fn new() -> Self {
        Self::default()
    }
}
