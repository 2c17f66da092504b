//! Domain types shared by the renderer and the graft engine.

use std::fmt;

use serde::Serialize;

use crate::casing::{singularize, to_camel_case, to_pascal_case};
use crate::plural::PluralRules;

// ---------------------------------------------------------------------------
// EntityName
// ---------------------------------------------------------------------------

/// Canonical identity of a generated domain entity, with every derived
/// casing computed once at construction.
///
/// Raw table names are lower-cased and singularized (`Users` → `user`,
/// `companies` → `company`), so the same entity always produces the same
/// fragments regardless of how the table was spelled on the command line.
///
/// Serializes into template context as
/// `{name, var, display, path_plural, method_plural}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityName {
    /// Canonical lower-case singular form: `user_profile`.
    name: String,
    /// camelCase variable stem used in generated code: `userProfile`.
    var: String,
    /// PascalCase display form: `UserProfile`.
    display: String,
    /// Plural route path segment: `user_profiles`.
    path_plural: String,
    /// Plural display segment for list-method names: `UserProfiles`.
    method_plural: String,
}

impl EntityName {
    pub fn new(raw: &str, rules: &PluralRules) -> Self {
        let name = singularize(raw.trim());
        let display = to_pascal_case(&name);
        EntityName {
            var: to_camel_case(&name),
            path_plural: rules.path_plural(&name),
            method_plural: rules.method_plural(&name),
            name,
            display,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn path_plural(&self) -> &str {
        &self.path_plural
    }

    pub fn method_plural(&self) -> &str {
        &self.method_plural
    }

    /// Token the anchor scanners recover from generated code: the display
    /// form lower-cased. For single-word entities this equals [`name`];
    /// for snake_case entities it is the underscore-free form
    /// (`user_profile` → `userprofile`), because scanners extract it from
    /// PascalCase constructor names.
    ///
    /// [`name`]: EntityName::name
    pub fn scan_key(&self) -> String {
        self.display.to_lowercase()
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// MethodKind
// ---------------------------------------------------------------------------

/// The four fixed CRUD-style operation categories every module is built
/// around. Each routes artifact has at most one source region per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MethodKind {
    Finder,
    Creator,
    Updater,
    Deleter,
}

impl MethodKind {
    /// All kinds in their fixed generation order.
    pub fn all() -> &'static [MethodKind] {
        &[
            MethodKind::Finder,
            MethodKind::Creator,
            MethodKind::Updater,
            MethodKind::Deleter,
        ]
    }

    /// The tag that appears in operation-function names (`FinderHTTPHandler`).
    pub fn tag(&self) -> &'static str {
        match self {
            MethodKind::Finder => "Finder",
            MethodKind::Creator => "Creator",
            MethodKind::Updater => "Updater",
            MethodKind::Deleter => "Deleter",
        }
    }

    /// Permission action enforced by this kind's route groups.
    pub fn permission_action(&self) -> &'static str {
        match self {
            MethodKind::Finder => "View",
            MethodKind::Creator => "Create",
            MethodKind::Updater => "Update",
            MethodKind::Deleter => "Delete",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(raw: &str) -> EntityName {
        EntityName::new(raw, &PluralRules::default())
    }

    #[test]
    fn canonicalizes_raw_table_names() {
        let e = entity("Users");
        assert_eq!(e.name(), "user");
        assert_eq!(e.display(), "User");
        assert_eq!(e.path_plural(), "users");
        assert_eq!(e.method_plural(), "Users");
    }

    #[test]
    fn caches_all_derived_casings() {
        let e = entity("company");
        assert_eq!(e.var(), "company");
        assert_eq!(e.display(), "Company");
        assert_eq!(e.path_plural(), "companies");
        assert_eq!(e.method_plural(), "Companies");
    }

    #[test]
    fn snake_case_entity_casings() {
        let e = entity("user_profile");
        assert_eq!(e.name(), "user_profile");
        assert_eq!(e.var(), "userProfile");
        assert_eq!(e.display(), "UserProfile");
        assert_eq!(e.path_plural(), "user_profiles");
        assert_eq!(e.scan_key(), "userprofile");
    }

    #[test]
    fn method_kind_order_is_stable() {
        let tags: Vec<_> = MethodKind::all().iter().map(|k| k.tag()).collect();
        assert_eq!(tags, ["Finder", "Creator", "Updater", "Deleter"]);
    }

    #[test]
    fn permission_actions() {
        assert_eq!(MethodKind::Finder.permission_action(), "View");
        assert_eq!(MethodKind::Deleter.permission_action(), "Delete");
    }
}
