//! Error types and non-fatal diagnostics for scaffold-graft.

use std::path::PathBuf;

use thiserror::Error;

use scaffold_core::{ConfigError, MethodKind};
use scaffold_renderer::RenderError;

/// All errors that can abort a graft command.
///
/// Missing per-block routes markers are NOT errors; they surface as
/// [`Diagnostic`] entries on the graft report instead.
#[derive(Debug, Error)]
pub enum GraftError {
    /// A primary artifact is absent; the whole command aborts.
    #[error("artifact not found: {path}")]
    NotFound { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required structural anchor is missing from an artifact.
    #[error("marker `{marker}` not found in {path}")]
    MarkerNotFound { path: PathBuf, marker: &'static str },

    /// An error from the template engine (whole-file generation).
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error loading project configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience constructor for [`GraftError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GraftError {
    GraftError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Insertion slot categories within the routes artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A whole operation-method block is missing.
    MethodBlock,
    /// The grouping-call line (`v1 := …Group(`) inside a method block.
    Declarations,
    /// The one-tab closing delimiter of a method's group region.
    RouteGroup,
    /// The trailing field anchor of the handler record type.
    RecordFields,
    /// The trailing parameter anchor of the handler constructor.
    ConstructorParams,
    /// The trailing assignment anchor of the constructor body.
    ConstructorBody,
    /// The argument anchor of the builder's handler-constructor call.
    HandlerCallArgs,
}

/// Non-fatal degradations recorded during a graft run.
///
/// Whether missing markers should fail loudly or degrade silently used to be
/// ambiguous; here every skipped insertion is recorded and surfaced, and the
/// affected region is left byte-identical to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A routes insertion slot could not be located; the fragment for that
    /// slot was skipped.
    MissingMarker {
        path: PathBuf,
        slot: SlotKind,
        method: Option<MethodKind>,
    },
    /// A best-effort side artifact could not be updated.
    SideArtifact { path: PathBuf, message: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingMarker { path, slot, method } => match method {
                Some(m) => write!(
                    f,
                    "{}: missing {slot:?} marker in {m} block; fragment skipped",
                    path.display()
                ),
                None => write!(
                    f,
                    "{}: missing {slot:?} marker; fragment skipped",
                    path.display()
                ),
            },
            Diagnostic::SideArtifact { path, message } => {
                write!(f, "{}: side artifact skipped: {message}", path.display())
            }
        }
    }
}
