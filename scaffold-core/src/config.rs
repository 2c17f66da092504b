//! Project configuration — optional `scaffold.yaml` at the target project root.
//!
//! Every field has a default matching the generated project's layout, so a
//! project with no config file works out of the box:
//!
//! ```yaml
//! modules_root: modules
//! app_root: app
//! permissions_path: common/constant/permission.go
//! cache_keys_path: common/cache/redis.go
//! template_dir: ./templates
//! plural_overrides:
//!   cactus: cacti
//! method_plural_overrides:
//!   staff: Staff
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::plural::PluralRules;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "scaffold.yaml";

/// Paths and naming rules for one target project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of per-module directories; the wiring artifact lives at
    /// `<modules_root>/<module>/builder.go`.
    pub modules_root: PathBuf,

    /// Root of the application wiring; the routes artifact lives at
    /// `<app_root>/<module>_routes.go`.
    pub app_root: PathBuf,

    /// Permission-constants side artifact.
    pub permissions_path: PathBuf,

    /// Cache-key-constants side artifact.
    pub cache_keys_path: PathBuf,

    /// Go import path root of the target project, used in generated imports.
    pub import_root: String,

    /// Directory of user `.tera` templates overriding the embedded ones.
    pub template_dir: Option<PathBuf>,

    /// Irregular route-path plurals merged over the built-in table.
    pub plural_overrides: HashMap<String, String>,

    /// Irregular method-name plurals merged over the built-in table.
    pub method_plural_overrides: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            modules_root: PathBuf::from("modules"),
            app_root: PathBuf::from("app"),
            permissions_path: PathBuf::from("common/constant/permission.go"),
            cache_keys_path: PathBuf::from("common/cache/redis.go"),
            import_root: String::from("gin-starter"),
            template_dir: None,
            plural_overrides: HashMap::new(),
            method_plural_overrides: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist and parse. With `None`,
    /// `scaffold.yaml` is used if present in the current directory and
    /// defaults are returned otherwise.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Self::load_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_file(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Pluralization rules: built-in irregulars extended by this config.
    pub fn plural_rules(&self) -> PluralRules {
        PluralRules::with_overrides(&self.plural_overrides, &self.method_plural_overrides)
    }

    /// `<modules_root>/<module>/builder.go`
    pub fn builder_path(&self, module: &str) -> PathBuf {
        self.modules_root.join(module).join("builder.go")
    }

    /// `<app_root>/<module>_routes.go`
    pub fn routes_path(&self, module: &str) -> PathBuf {
        self.app_root.join(format!("{module}_routes.go"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
