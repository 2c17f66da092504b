//! # scaffold-renderer
//!
//! Tera-based template engine that renders complete wiring (`builder.go`) and
//! route-registration (`<module>_routes.go`) files for a brand-new module.
//!
//! Templates are embedded in the binary; a user template directory may
//! override them file-by-file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scaffold_core::{Config, EntityName};
//! use scaffold_renderer::{ModuleContext, Renderer, TemplateKind};
//!
//! fn render_new_module(cfg: &Config) {
//!     let rules = cfg.plural_rules();
//!     let entities = vec![EntityName::new("users", &rules)];
//!     let ctx = ModuleContext::new(cfg, "auth", "v1", &entities);
//!     if let Ok(renderer) = Renderer::new(None) {
//!         if let Ok(code) = renderer.render(TemplateKind::Builder, &ctx) {
//!             println!("{} bytes", code.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::ModuleContext;
pub use engine::{Renderer, TemplateKind};
pub use error::RenderError;
