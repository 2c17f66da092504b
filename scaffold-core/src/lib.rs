//! Scaffold core library — domain types, casing utilities, configuration.
//!
//! Public API surface:
//! - [`types`] — [`EntityName`] value object and [`MethodKind`]
//! - [`casing`] — snake_case → camelCase / PascalCase, singularization
//! - [`plural`] — injectable [`PluralRules`]
//! - [`config`] — optional `scaffold.yaml` project configuration
//! - [`error`] — [`ConfigError`]

pub mod casing;
pub mod config;
pub mod error;
pub mod plural;
pub mod types;

pub use config::Config;
pub use error::ConfigError;
pub use plural::PluralRules;
pub use types::{EntityName, MethodKind};
