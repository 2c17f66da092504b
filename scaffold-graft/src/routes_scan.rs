//! Anchor scanner for the route-registration artifact (`<module>_routes.go`).
//!
//! Recovers the four per-method handler registration blocks and the set of
//! entities already registered, all as line indices into the untouched
//! source. Like the builder scanner this is positional text analysis over
//! the generated convention, not a parse of the target language.

use std::collections::BTreeMap;

use scaffold_core::{Config, MethodKind};

use crate::artifact::SourceArtifact;
use crate::builder_scan::entity_token;
use crate::error::GraftError;

const HANDLER_SUFFIXES: &[&str] = &[
    "FinderHandler",
    "CreatorHandler",
    "UpdaterHandler",
    "DeleterHandler",
    "(",
];

/// One `func (h *…HTTPHandler) …HTTPHandler() { … }` registration block.
#[derive(Debug, Clone)]
pub struct MethodBlock {
    /// Line of the `func` signature.
    pub start_line: usize,
    /// Line of the closing `}` at column zero.
    pub end_line: usize,
}

/// Analysis of an existing routes artifact.
#[derive(Debug, Clone)]
pub struct RoutesAnalysis {
    pub artifact: SourceArtifact,
    /// Scan keys of entities with at least one handler declaration.
    pub existing_entities: Vec<String>,
    /// Registration blocks found, keyed by method kind. A kind absent from
    /// the map has no block in the file.
    pub method_blocks: BTreeMap<MethodKind, MethodBlock>,
}

/// Read and analyze `<app_root>/<module>_routes.go`.
pub fn analyze_routes(config: &Config, module: &str) -> Result<RoutesAnalysis, GraftError> {
    let path = config.routes_path(module);
    let artifact = SourceArtifact::load(&path)?;
    Ok(analyze_routes_content(artifact))
}

pub(crate) fn analyze_routes_content(artifact: SourceArtifact) -> RoutesAnalysis {
    let lines: Vec<&str> = artifact.content.split('\n').collect();

    let mut existing_entities = Vec::new();
    for line in &lines {
        let trimmed = line.trim();
        if !(trimmed.contains("Hnd :=") && trimmed.contains("handlerv1.New")) {
            continue;
        }
        if let Some(entity) = entity_token(trimmed, "handlerv1.New", HANDLER_SUFFIXES) {
            if !existing_entities.contains(&entity) {
                existing_entities.push(entity);
            }
        }
    }

    let method_blocks = find_method_blocks(&lines);

    RoutesAnalysis {
        artifact,
        existing_entities,
        method_blocks,
    }
}

/// Locate each per-method block by its signature line, then walk to the
/// closing brace: a lone `}` followed by nothing, a blank line, or the next
/// method signature.
fn find_method_blocks(lines: &[&str]) -> BTreeMap<MethodKind, MethodBlock> {
    let mut blocks = BTreeMap::new();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if !(trimmed.starts_with("func (h *") && trimmed.contains("HTTPHandler() {")) {
            continue;
        }
        let Some(kind) = MethodKind::all()
            .iter()
            .copied()
            .find(|k| trimmed.contains(&format!("{}HTTPHandler", k.tag())))
        else {
            continue;
        };

        let mut end_line = None;
        for (j, candidate) in lines.iter().enumerate().skip(i + 1) {
            if candidate.trim() != "}" || !candidate.starts_with('}') {
                continue;
            }
            let next = lines.get(j + 1).map(|l| l.trim());
            if matches!(next, None | Some("")) || next.is_some_and(|n| n.starts_with("func (h *")) {
                end_line = Some(j);
                break;
            }
        }

        if let Some(end_line) = end_line {
            blocks.entry(kind).or_insert(MethodBlock {
                start_line: i,
                end_line,
            });
        }
    }

    blocks
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
