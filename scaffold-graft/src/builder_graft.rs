//! Incremental graft of new entities into an existing wiring artifact.

use scaffold_core::EntityName;
use tracing::debug;

use crate::builder_scan::BuilderAnalysis;
use crate::error::{Diagnostic, SlotKind};
use crate::fragments;
use crate::splice;

/// Outcome of grafting new entities into a wiring artifact.
#[derive(Debug)]
pub struct BuilderGraft {
    /// The rewritten artifact content.
    pub content: String,
    /// Entities actually added, in request order.
    pub added: Vec<EntityName>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Splice wiring and handler-call fragments for every requested entity not
/// already present. All insertion points come from the one up-front
/// analysis; insertions are applied in a single descending pass so no slot
/// is invalidated by an earlier splice.
pub fn graft_builder(analysis: &BuilderAnalysis, requested: &[EntityName]) -> BuilderGraft {
    let added = crate::pipeline::filter_new_tables(requested, &analysis.existing_entities);

    if added.is_empty() {
        return BuilderGraft {
            content: analysis.artifact.content.clone(),
            added,
            diagnostics: Vec::new(),
        };
    }
    debug!(
        "grafting {} entities into {}",
        added.len(),
        analysis.artifact.path.display()
    );

    let mut insertions = vec![(analysis.wiring_line, fragments::wiring_fragment(&added))];
    let mut diagnostics = Vec::new();

    match handler_args_slot(analysis) {
        Some(line) => insertions.push((line, fragments::handler_call_args(&added))),
        None => diagnostics.push(Diagnostic::MissingMarker {
            path: analysis.artifact.path.clone(),
            slot: SlotKind::HandlerCallArgs,
            method: None,
        }),
    }

    BuilderGraft {
        content: splice::apply_insertions(&analysis.artifact.content, insertions),
        added,
        diagnostics,
    }
}

/// Slot for new use-case arguments: the trailing-argument anchor inside the
/// handler-constructor call, scanned forward from the call line.
fn handler_args_slot(analysis: &BuilderAnalysis) -> Option<usize> {
    let start = analysis.handler_call_line?;
    analysis.artifact.content.split('\n').enumerate().skip(start).find_map(|(i, line)| {
        (line.contains("// Cloud Storage") || line.trim() == "cache,").then_some(i)
    })
}
