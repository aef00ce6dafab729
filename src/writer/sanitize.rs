//! Identifier sanitization for fact atoms

/// Characters replaced with an underscore
const REPLACED: [char; 3] = [' ', '-', ':'];

/// Characters dropped outright
const OMITTED: [char; 4] = ['(', ')', '+', '.'];

/// Normalize free text into a fact atom.
///
/// Spaces, hyphens and colons become `_`; parentheses, `+` and `.` are
/// removed; the result is lowercased. Idempotent: sanitizing twice gives
/// the same result as sanitizing once.
pub fn sanitize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .filter(|c| !OMITTED.contains(c))
        .map(|c| if REPLACED.contains(&c) { '_' } else { c })
        .collect();
    replaced.to_lowercase()
}
