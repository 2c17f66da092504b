//! Anchor scanner for the dependency-wiring artifact (`builder.go`).
//!
//! Works on positional text-structure heuristics, not a Go parser: the file
//! is assumed to follow the generated convention (a `func Build…` body that
//! constructs repositories and services, then a handler). The scanner runs
//! once per invocation and produces line-indexed anchors; later splices never
//! re-scan mutated content.

use std::path::Path;

use scaffold_core::Config;

use crate::artifact::SourceArtifact;
use crate::error::GraftError;

/// Repository-construction suffixes an entity token is truncated at.
const REPO_SUFFIXES: &[&str] = &[
    "FinderRepository",
    "CreatorRepository",
    "UpdaterRepository",
    "DeleterRepository",
    "(",
];

/// Analysis of an existing wiring artifact.
#[derive(Debug, Clone)]
pub struct BuilderAnalysis {
    pub artifact: SourceArtifact,
    /// Scan keys (lower-cased display forms) of entities already wired,
    /// deduplicated in first-seen order.
    pub existing_entities: Vec<String>,
    /// Line the wiring fragment is inserted before: just after the last
    /// repository/service construction in the build function.
    pub wiring_line: usize,
    /// Line of the handler-constructor call (`app.New…HTTPHandler(`), if any.
    pub handler_call_line: Option<usize>,
}

/// Read and analyze `<modules_root>/<module>/builder.go`.
///
/// Fails with [`GraftError::NotFound`] if the artifact is absent, `Io` on
/// read failure, and `MarkerNotFound` when the build-function signature is
/// missing entirely.
pub fn analyze_builder(config: &Config, module: &str) -> Result<BuilderAnalysis, GraftError> {
    let path = config.builder_path(module);
    let artifact = SourceArtifact::load(&path)?;
    analyze_builder_content(artifact)
}

fn analyze_builder_content(artifact: SourceArtifact) -> Result<BuilderAnalysis, GraftError> {
    let lines: Vec<&str> = artifact.content.split('\n').collect();

    let existing_entities = extract_existing_entities(&lines);
    let wiring_line = find_wiring_line(&lines, &artifact.path)?;
    let handler_call_line = lines
        .iter()
        .position(|l| l.contains("app.New") && l.contains("HTTPHandler("));

    Ok(BuilderAnalysis {
        artifact,
        existing_entities,
        wiring_line,
        handler_call_line,
    })
}

/// Scan for `<entity>…Repo :=` repository constructions and recover the
/// entity token between `repository.New` and the first known suffix.
fn extract_existing_entities(lines: &[&str]) -> Vec<String> {
    let mut entities = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if !(trimmed.contains("Repo :=") && trimmed.contains("repository.New")) {
            continue;
        }
        if let Some(entity) = entity_token(trimmed, "repository.New", REPO_SUFFIXES) {
            if !entities.contains(&entity) {
                entities.push(entity);
            }
        }
    }
    entities
}

/// Text after `prefix`, truncated at the first occurrence of any suffix,
/// lower-cased. `None` when the token is empty.
pub(crate) fn entity_token(line: &str, prefix: &str, suffixes: &[&str]) -> Option<String> {
    let (_, rest) = line.split_once(prefix)?;
    let mut token = rest;
    for suffix in suffixes {
        if let Some(pos) = token.find(suffix) {
            token = &token[..pos];
        }
    }
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Locate the insertion slot for new entity wiring inside the build function.
///
/// Scans forward from the function's opening brace, tracking the end of the
/// last repository/service construction line, and stops at the first handler
/// marker. Fallback order when no handler marker exists: the first
/// `handler.` invocation line, the artifact's final closing brace, the line
/// after the opening brace.
fn find_wiring_line(lines: &[&str], path: &Path) -> Result<usize, GraftError> {
    let func_line = lines
        .iter()
        .position(|l| l.contains("func Build"))
        .ok_or(GraftError::MarkerNotFound {
            path: path.to_path_buf(),
            marker: "func Build",
        })?;
    let brace_line = lines[func_line..]
        .iter()
        .position(|l| l.contains('{'))
        .map(|off| func_line + off)
        .ok_or(GraftError::MarkerNotFound {
            path: path.to_path_buf(),
            marker: "{",
        })?;

    let body_start = brace_line + 1;
    let mut last_entity_end = body_start;

    for (i, line) in lines.iter().enumerate().skip(body_start) {
        let trimmed = line.trim();

        // Stop at the first handler-construction marker.
        if (trimmed.starts_with("//") && trimmed.contains("Handler"))
            || trimmed.contains("handler :=")
            || trimmed.contains("app.New")
        {
            return Ok(last_entity_end);
        }

        if trimmed.contains("Repo :=")
            || trimmed.contains("Svc :=")
            || (trimmed.starts_with("//")
                && (trimmed.contains("Repository") || trimmed.contains("Service")))
        {
            last_entity_end = i + 1;
        }
    }

    // No handler marker in the body: fall back.
    if let Some(i) = lines.iter().position(|l| l.contains("handler.")) {
        return Ok(i);
    }
    if let Some(i) = lines.iter().rposition(|l| l.trim() == "}") {
        return Ok(i);
    }
    Ok(body_start)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
