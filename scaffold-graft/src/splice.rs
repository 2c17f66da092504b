//! The splice primitive — line-addressed text insertion.
//!
//! A graft never edits, reorders, or deletes existing lines; it only inserts
//! fragment lines at a slot. Callers that apply several fragments to one
//! artifact collect all slots from a single analysis pass and apply them in
//! descending line order, so no insertion shifts a slot that has not been
//! applied yet.

/// Insert `fragment` immediately before `line_index` (0-based).
///
/// Every line outside the inserted span is byte-identical to the input.
/// `fragment` must not carry a trailing newline; its lines are inserted
/// as-is. A `line_index` past the end appends.
pub fn insert_before_line(content: &str, line_index: usize, fragment: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let at = line_index.min(lines.len());

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 8);
    out.extend_from_slice(&lines[..at]);
    out.extend(fragment.split('\n'));
    out.extend_from_slice(&lines[at..]);
    out.join("\n")
}

/// Apply `(line_index, fragment)` insertions computed against the same
/// original `content`.
///
/// Slots are applied highest-line first; indices computed once stay valid
/// for the whole pass.
pub fn apply_insertions(content: &str, mut insertions: Vec<(usize, String)>) -> String {
    insertions.sort_by(|a, b| b.0.cmp(&a.0));
    let mut out = content.to_string();
    for (line, fragment) in insertions {
        out = insert_before_line(&out, line, &fragment);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
