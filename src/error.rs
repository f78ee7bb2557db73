//! Error types returned to callers.
//!
//! Only [compile_rule][crate::rule::compile_rule] returns a `Result`:
//! its input is user-authored and can be malformed. The matcher and
//! applier instead `assert!`/`panic!` on bad input, since by the time a
//! caller has a [Rule][crate::rule::Rule] and a
//! [GraphMapping][crate::mapping::GraphMapping] in hand, both are
//! expected to have come from this crate's own functions.

use thiserror::Error;

/// A structural problem with an annotated graph passed to
/// [compile_rule][crate::rule::compile_rule].
///
/// Every variant carries enough of the offending element (its index, or
/// its label) to build an actionable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The annotated graph is missing the `"L"` or `"R"` subgraph.
    #[error("annotated graph is missing the \"{0}\" subgraph")]
    MissingSubgraph(&'static str),
    /// Node `.0` belongs to neither `"L"` nor `"R"`.
    #[error("node {0} belongs to neither \"L\" nor \"R\"")]
    NodeNotInEitherSide(usize),
    /// Edge `.0` belongs to neither `"L"` nor `"R"`.
    #[error("edge {0} belongs to neither \"L\" nor \"R\"")]
    EdgeNotInEitherSide(usize),
    /// Edge `.0` belongs to both `"L"` and `"R"`; the author must use two
    /// edges with the same label instead, one per side.
    #[error("edge {0} belongs to both \"L\" and \"R\"; use two edges with the same label instead")]
    EdgeInBothSides(usize),
    /// Edge `.0` was assigned to one side, but one of its endpoint nodes
    /// was not: e.g. an edge annotated `"L"`-only whose head or tail node
    /// is in `"R"` only.
    #[error("edge {0} has an endpoint node that is not on the same side as the edge itself")]
    EdgeEndpointNotInSide(usize),
    /// Label `.0` appears more than once on the same side.
    #[error("edge label \"{0}\" is used more than once on the same side")]
    DuplicateEdgeLabel(String),
}
