//! Name-casing utilities for generated identifiers.
//!
//! Table names arrive as lower snake_case (`user_profile`, `categories`).
//! Generated code needs camelCase variable names and PascalCase type names,
//! with the usual Go initialisms (`ID`, `URL`, `API`, …) kept upper-case.

/// Convert `snake_case` to `camelCase`.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, part) in s.split('_').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&part.to_lowercase());
        } else {
            out.push_str(&capitalize(part));
        }
    }
    out
}

/// Convert `snake_case` to `PascalCase`, upper-casing common initialisms so
/// `user_id` becomes `UserID` rather than `UserId`.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for part in s.split('_').filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "id" => out.push_str("ID"),
            "ip" => out.push_str("IP"),
            "url" => out.push_str("URL"),
            "api" => out.push_str("API"),
            "http" => out.push_str("HTTP"),
            "html" => out.push_str("HTML"),
            "json" => out.push_str("JSON"),
            "xml" => out.push_str("XML"),
            _ => out.push_str(&capitalize(part)),
        }
    }
    out
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reduce a plural table name to its singular form.
///
/// Not an inflection library; covers the irregulars and suffix patterns that
/// show up in real database schemas. Already-singular names pass through.
pub fn singularize(word: &str) -> String {
    let word = word.to_lowercase();

    let irregular = match word.as_str() {
        "people" => Some("person"),
        "men" => Some("man"),
        "women" => Some("woman"),
        "children" => Some("child"),
        "teeth" => Some("tooth"),
        "feet" => Some("foot"),
        "geese" => Some("goose"),
        "mice" => Some("mouse"),
        "data" => Some("datum"),
        "indices" => Some("index"),
        "matrices" => Some("matrix"),
        "vertices" => Some("vertex"),
        "statuses" => Some("status"),
        "courses" => Some("course"),
        "quizzes" => Some("quiz"),
        _ => None,
    };
    if let Some(s) = irregular {
        return s.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        // companies -> company
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ves") {
        // wolves -> wolf, shelves -> shelf; knives -> knife, wives -> wife
        if stem.ends_with('l') || stem.ends_with('r') {
            return format!("{stem}f");
        }
        return format!("{stem}fe");
    }
    if word.ends_with("xes") || word.ends_with("ches") || word.ends_with("shes") {
        // boxes -> box, branches -> branch
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("zes") {
        return word[..word.len() - 3].to_string();
    }
    if word.ends_with("oes") {
        // tomatoes -> tomato
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with('s') && word.len() > 1 {
        // users -> user
        return word[..word.len() - 1].to_string();
    }

    word
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
