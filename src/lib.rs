//! A double-pushout (DPO) graph rewriting engine over labeled directed
//! multigraphs.
//!
//! Three pure functions form the public surface, each built on the
//! shared [graph] data model:
//!
//! - [rule::compile_rule] splits a user-authored annotated graph into a
//!   DPO rule `L ← K → R`.
//! - [matching::find_matches] enumerates every embedding of a pattern
//!   graph inside a target graph.
//! - [applier::apply_rule] takes a rule, a target graph, and one
//!   embedding, and builds the rewritten graph.
//!
//! None of the three holds any state across calls, and none mutates its
//! inputs — every call is a pure function of its arguments, so
//! `Graph`/`Rule` values can be shared freely across threads by
//! concurrent readers.
//!
//! Graph serialization/parsing, rendering, the evaluation loop that
//! drives sequences of rewrites, and CLI/config plumbing are all
//! deliberately out of scope for this crate; they are external
//! collaborators that consume the three functions above.

pub mod applier;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod matching;
pub mod rule;

pub use applier::apply_rule;
pub use error::CompileError;
pub use graph::{Edge, Graph, Node, Subgraph};
pub use mapping::GraphMapping;
pub use matching::find_matches;
pub use rule::{compile_rule, Rule};
