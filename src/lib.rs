//! Greedy heuristics for the Graph Coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// color assignments and the solution checker
pub mod color;

/// graph storage (bitset adjacency rows) and its validating constructors
pub mod graph;

/// per-vertex degrees and degree-sorted vertex orderings
pub mod degree;

/// the six greedy coloring heuristics
pub mod greedy;

/// color refinement over incidence matrices (isomorphism pre-check)
pub mod refinement;

/// read DIMACS coloring instances
pub mod dimacs;

/// helper and utility methods for executables
pub mod util;
