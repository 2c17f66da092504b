//! Tera rendering engine — [`TemplateKind`] enum and [`Renderer`].
//!
//! Two whole-file templates are embedded at compile time:
//!
//! | Kind    | Template          | Output (relative to target project)  |
//! |---------|-------------------|--------------------------------------|
//! | Builder | `builder.go.tera` | `<modules_root>/<module>/builder.go` |
//! | Routes  | `routes.go.tera`  | `<app_root>/<module>_routes.go`      |
//!
//! A user template directory may override either file by name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::ModuleContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("builder.go.tera", include_str!("templates/builder.go.tera")),
    ("routes.go.tera", include_str!("templates/routes.go.tera")),
];

/// The embedded template set, exposed so `scaffold init` can copy it out
/// for customization.
pub fn embedded_templates() -> &'static [(&'static str, &'static str)] {
    TPLS
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// The two whole-file artifacts rendered for a new module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Builder,
    Routes,
}

impl TemplateKind {
    /// Both kinds in generation order (wiring first, then routes).
    pub fn all() -> &'static [TemplateKind] {
        &[TemplateKind::Builder, TemplateKind::Routes]
    }

    /// Template name to render for this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Builder => "builder.go.tera",
            TemplateKind::Routes => "routes.go.tera",
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults by file name. Create once and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a [`Renderer`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(Renderer { tera })
    }

    /// Render the whole-file artifact of `kind` for the supplied module
    /// context. Line endings are normalised to LF.
    pub fn render(&self, kind: TemplateKind, ctx: &ModuleContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(kind.template_name(), &tera_ctx)?;
        Ok(content.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
