//! The graft pipeline — one `builder` invocation end to end.
//!
//! Decides between whole-file scaffolding and incremental grafting, runs the
//! per-artifact passes, writes results atomically, and degrades side-artifact
//! failures to diagnostics. In dry-run mode nothing is written and each
//! changed artifact yields a unified diff instead.

use std::path::PathBuf;

use similar::TextDiff;
use tracing::{info, warn};

use scaffold_core::{Config, EntityName};
use scaffold_renderer::{ModuleContext, Renderer, TemplateKind};

use crate::artifact::{write_artifact, WriteResult};
use crate::builder_graft::graft_builder;
use crate::builder_scan::analyze_builder;
use crate::error::{Diagnostic, GraftError};
use crate::routes_graft::graft_routes;
use crate::routes_scan::analyze_routes;
use crate::side_artifacts;

/// Unified diff of one artifact, produced in dry-run mode.
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub path: PathBuf,
    pub diff: String,
}

/// Everything one pipeline run did (or would do, under dry-run).
#[derive(Debug, Default)]
pub struct GraftReport {
    pub module: String,
    pub writes: Vec<WriteResult>,
    pub diagnostics: Vec<Diagnostic>,
    /// Entities newly wired into the builder artifact.
    pub builder_added: Vec<EntityName>,
    /// Entities newly registered in the routes artifact.
    pub routes_added: Vec<EntityName>,
    pub diffs: Vec<FileDiff>,
}

impl GraftReport {
    /// True when no artifact changed and no entity was added.
    pub fn is_noop(&self) -> bool {
        self.builder_added.is_empty()
            && self.routes_added.is_empty()
            && self
                .writes
                .iter()
                .all(|w| matches!(w, WriteResult::Unchanged { .. }))
    }
}

/// Run the pipeline for one module.
///
/// With `new_module` set, or when the wiring artifact does not yet exist,
/// both primary artifacts are rendered whole from templates. Otherwise each
/// existing artifact is analyzed once and new entities are grafted in;
/// entities already present are skipped per artifact, independently.
pub fn generate_builder(
    config: &Config,
    module: &str,
    version: &str,
    tables: &[String],
    new_module: bool,
    dry_run: bool,
) -> Result<GraftReport, GraftError> {
    let rules = config.plural_rules();
    let entities: Vec<EntityName> = tables.iter().map(|t| EntityName::new(t, &rules)).collect();

    let mut report = GraftReport {
        module: module.to_string(),
        ..GraftReport::default()
    };

    let scaffold_whole = new_module || !config.builder_path(module).exists();
    if scaffold_whole {
        info!("scaffolding module `{module}` from templates");
        render_whole(config, module, version, &entities, dry_run, &mut report)?;
        report.builder_added = entities.clone();
        report.routes_added = entities.clone();
    } else {
        info!("grafting into existing module `{module}`");
        graft_existing(config, module, &entities, dry_run, &mut report)?;
    }

    // Side artifacts are best effort: a missing shared file is reported,
    // never fatal.
    if !report.routes_added.is_empty() {
        let module_display = scaffold_core::casing::to_pascal_case(module);
        match side_artifacts::update_permissions(config, &module_display, &report.routes_added, dry_run)
        {
            Ok(w) => report.writes.push(w),
            Err(e) => downgrade(&mut report, config.permissions_path.clone(), e),
        }
    }
    if !report.builder_added.is_empty() {
        match side_artifacts::update_cache_keys(config, module, &report.builder_added, dry_run) {
            Ok(w) => report.writes.push(w),
            Err(e) => downgrade(&mut report, config.cache_keys_path.clone(), e),
        }
    }

    Ok(report)
}

fn render_whole(
    config: &Config,
    module: &str,
    version: &str,
    entities: &[EntityName],
    dry_run: bool,
    report: &mut GraftReport,
) -> Result<(), GraftError> {
    let renderer = Renderer::new(config.template_dir.as_deref())?;
    let ctx = ModuleContext::new(config, module, version, entities);

    for &kind in TemplateKind::all() {
        let path = match kind {
            TemplateKind::Builder => config.builder_path(module),
            TemplateKind::Routes => config.routes_path(module),
        };
        let rendered = renderer.render(kind, &ctx)?;
        record_write(report, &path, None, &rendered, dry_run)?;
    }
    Ok(())
}

fn graft_existing(
    config: &Config,
    module: &str,
    entities: &[EntityName],
    dry_run: bool,
    report: &mut GraftReport,
) -> Result<(), GraftError> {
    let builder = analyze_builder(config, module)?;
    let routes = analyze_routes(config, module)?;

    let builder_graft = graft_builder(&builder, entities);
    report.builder_added = builder_graft.added;
    report.diagnostics.extend(builder_graft.diagnostics);
    record_write(
        report,
        &builder.artifact.path,
        Some(&builder.artifact.content),
        &builder_graft.content,
        dry_run,
    )?;

    let routes_graft = graft_routes(&routes, module, entities);
    report.routes_added = routes_graft.added;
    report.diagnostics.extend(routes_graft.diagnostics);
    record_write(
        report,
        &routes.artifact.path,
        Some(&routes.artifact.content),
        &routes_graft.content,
        dry_run,
    )?;

    Ok(())
}

/// Write one artifact, collecting a unified diff in dry-run mode.
fn record_write(
    report: &mut GraftReport,
    path: &std::path::Path,
    before: Option<&str>,
    after: &str,
    dry_run: bool,
) -> Result<(), GraftError> {
    let result = write_artifact(path, after, dry_run)?;
    if matches!(result, WriteResult::WouldWrite { .. }) {
        let before = before.unwrap_or("");
        let name = path.display().to_string();
        let diff = TextDiff::from_lines(before, after)
            .unified_diff()
            .header(&format!("a/{name}"), &format!("b/{name}"))
            .context_radius(3)
            .to_string();
        report.diffs.push(FileDiff {
            path: path.to_path_buf(),
            diff,
        });
    }
    report.writes.push(result);
    Ok(())
}

fn downgrade(report: &mut GraftReport, path: PathBuf, err: GraftError) {
    warn!("side artifact skipped: {err}");
    report.diagnostics.push(Diagnostic::SideArtifact {
        path,
        message: err.to_string(),
    });
}

/// Drop requested tables whose scan key is already present.
pub fn filter_new_tables(requested: &[EntityName], existing: &[String]) -> Vec<EntityName> {
    requested
        .iter()
        .filter(|e| !existing.contains(&e.scan_key()))
        .cloned()
        .collect()
}
