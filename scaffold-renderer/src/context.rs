//! Template context — serializable rendering payload for one module.

use serde::Serialize;

use scaffold_core::{casing::to_pascal_case, Config, EntityName};

use crate::error::RenderError;

/// Everything the whole-file templates need to emit a module.
///
/// Entity entries carry their pre-computed casings (`var`, `display`,
/// `path_plural`, `method_plural`), so templates never derive names
/// themselves.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleContext {
    /// Module name as given: `auth`.
    pub module: String,
    /// PascalCase module name used in type and function names: `Auth`.
    pub module_display: String,
    /// API version segment: `v1`.
    pub version: String,
    /// Route prefix for the module group: `/auth/v1`.
    pub route_prefix: String,
    /// Import path of the module package: `gin-starter/modules/auth/v1`.
    pub import_path: String,
    /// Import path root of the target project: `gin-starter`.
    pub import_root: String,
    /// Entities to generate, in request order.
    pub entities: Vec<EntityName>,
}

impl ModuleContext {
    /// Build a [`ModuleContext`] for `module`/`version` over `entities`.
    pub fn new(config: &Config, module: &str, version: &str, entities: &[EntityName]) -> Self {
        ModuleContext {
            module: module.to_string(),
            module_display: to_pascal_case(module),
            version: version.to_string(),
            route_prefix: format!("/{module}/{version}"),
            import_path: format!("{}/modules/{module}/{version}", config.import_root),
            import_root: config.import_root.clone(),
            entities: entities.to_vec(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_fields_populated() {
        let cfg = Config::default();
        let rules = cfg.plural_rules();
        let entities = vec![
            EntityName::new("users", &rules),
            EntityName::new("category", &rules),
        ];
        let ctx = ModuleContext::new(&cfg, "auth", "v1", &entities);

        assert_eq!(ctx.module_display, "Auth");
        assert_eq!(ctx.route_prefix, "/auth/v1");
        assert_eq!(ctx.import_path, "gin-starter/modules/auth/v1");
        assert_eq!(ctx.entities[0].name(), "user");
        assert_eq!(ctx.entities[1].path_plural(), "categories");
    }

    #[test]
    fn to_tera_context_succeeds() {
        let cfg = Config::default();
        let rules = cfg.plural_rules();
        let ctx = ModuleContext::new(&cfg, "inventory", "v1", &[EntityName::new("box", &rules)]);
        ctx.to_tera_context().expect("context conversion");
    }
}
