//! Incremental code grafting for generated project sources.
//!
//! The crate reads whole wiring and route-registration artifacts, locates
//! insertion slots with positional text heuristics, and splices per-entity
//! fragments in so that a grafted file is indistinguishable from one
//! rendered whole. Re-running a graft with the same entities changes
//! nothing.
//!
//! Entry point is [`pipeline::generate_builder`]; the lower modules are
//! exposed for targeted use and testing.

pub mod artifact;
pub mod builder_graft;
pub mod builder_scan;
pub mod error;
pub mod fragments;
pub mod pipeline;
pub mod routes_graft;
pub mod routes_scan;
pub mod side_artifacts;
pub mod splice;

pub use artifact::{SourceArtifact, WriteResult};
pub use error::{Diagnostic, GraftError, SlotKind};
pub use pipeline::{generate_builder, FileDiff, GraftReport};
