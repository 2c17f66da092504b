//! Pluralization rules for route paths and list-method names.
//!
//! The rule set is a value passed in from configuration rather than a fixed
//! table baked into the synthesizers: projects with domain vocabulary outside
//! the built-in irregulars extend it via `plural_overrides` in `scaffold.yaml`.

use std::collections::HashMap;

use crate::casing::to_pascal_case;

/// Irregular plurals every generated project gets out of the box.
const DEFAULT_IRREGULARS: &[(&str, &str)] = &[
    ("category", "categories"),
    ("product", "products"),
    ("user", "users"),
    ("role", "roles"),
    ("permission", "permissions"),
    ("organization", "organizations"),
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
];

/// Pluralization rule set: built-in irregulars plus per-project overrides.
///
/// Two lookups because route paths and method names pluralize independently:
/// the path form is lower-case (`/people`), the method form is the display
/// segment of a generated method name (`GetAllPeople`). When only a path
/// override exists the method form is derived from it by Pascal-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRules {
    path_overrides: HashMap<String, String>,
    method_overrides: HashMap<String, String>,
}

impl Default for PluralRules {
    fn default() -> Self {
        let path_overrides = DEFAULT_IRREGULARS
            .iter()
            .map(|(s, p)| (s.to_string(), p.to_string()))
            .collect();
        PluralRules {
            path_overrides,
            method_overrides: HashMap::new(),
        }
    }
}

impl PluralRules {
    /// Built-in irregulars extended with per-project overrides.
    /// Overrides win on key collision.
    pub fn with_overrides(
        path_overrides: &HashMap<String, String>,
        method_overrides: &HashMap<String, String>,
    ) -> Self {
        let mut rules = PluralRules::default();
        for (k, v) in path_overrides {
            rules.path_overrides.insert(k.clone(), v.clone());
        }
        for (k, v) in method_overrides {
            rules.method_overrides.insert(k.clone(), v.clone());
        }
        rules
    }

    /// Plural form used in route paths: `category` → `categories`.
    ///
    /// Falls back to suffix rules: trailing `y` → `ies`; trailing
    /// `s`/`x`/`z`/`ch`/`sh` → append `es`; otherwise append `s`.
    pub fn path_plural(&self, singular: &str) -> String {
        if let Some(p) = self.path_overrides.get(singular) {
            return p.clone();
        }
        apply_suffix_rules(singular)
    }

    /// Plural display segment used in method names: `category` → `Categories`.
    ///
    /// An explicit method override wins; otherwise the path plural is
    /// Pascal-cased, so the two forms cannot drift apart.
    pub fn method_plural(&self, singular: &str) -> String {
        if let Some(p) = self.method_overrides.get(singular) {
            return p.clone();
        }
        to_pascal_case(&self.path_plural(singular))
    }
}

fn apply_suffix_rules(singular: &str) -> String {
    if let Some(stem) = singular.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if singular.ends_with('s')
        || singular.ends_with('x')
        || singular.ends_with('z')
        || singular.ends_with("ch")
        || singular.ends_with("sh")
    {
        return format!("{singular}es");
    }
    format!("{singular}s")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("category", "categories")]
    #[case("person", "people")]
    #[case("child", "children")]
    #[case("order", "orders")]
    #[case("box", "boxes")]
    #[case("quiz", "quizes")]
    #[case("branch", "branches")]
    #[case("company", "companies")]
    fn path_plurals(#[case] singular: &str, #[case] expected: &str) {
        assert_eq!(PluralRules::default().path_plural(singular), expected);
    }

    #[rstest]
    #[case("category", "Categories")]
    #[case("person", "People")]
    #[case("company", "Companies")]
    #[case("order", "Orders")]
    fn method_plurals(#[case] singular: &str, #[case] expected: &str) {
        assert_eq!(PluralRules::default().method_plural(singular), expected);
    }

    #[test]
    fn irregular_override_beats_suffix_rule() {
        // Without the override this would be "categorys".
        assert_ne!(PluralRules::default().path_plural("category"), "categorys");
    }

    #[test]
    fn project_overrides_extend_defaults() {
        let mut paths = HashMap::new();
        paths.insert("cactus".to_string(), "cacti".to_string());
        let rules = PluralRules::with_overrides(&paths, &HashMap::new());
        assert_eq!(rules.path_plural("cactus"), "cacti");
        assert_eq!(rules.method_plural("cactus"), "Cacti");
        // Defaults still apply.
        assert_eq!(rules.path_plural("person"), "people");
    }

    #[test]
    fn method_override_is_independent_of_path() {
        let mut methods = HashMap::new();
        methods.insert("staff".to_string(), "Staff".to_string());
        let rules = PluralRules::with_overrides(&HashMap::new(), &methods);
        assert_eq!(rules.method_plural("staff"), "Staff");
        assert_eq!(rules.path_plural("staff"), "staffs");
    }
}
