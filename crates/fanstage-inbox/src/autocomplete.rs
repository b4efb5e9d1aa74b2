//! Name suggestions for the inbox name filter

use std::collections::HashSet;

use fanstage_core::Letter;

/// Suggest sender/recipient names containing `query`.
///
/// Matching is case-insensitive. Names that start with the query come before
/// names that merely contain it; within each group names keep the order they
/// were first seen. Case-insensitive duplicates keep the first spelling.
pub fn suggest_names(letters: &[Letter], query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut prefix = Vec::new();
    let mut infix = Vec::new();

    for name in letters.iter().flat_map(|letter| letter.display_names()) {
        let lowered = name.to_lowercase();
        let Some(pos) = lowered.find(&query) else {
            continue;
        };
        if !seen.insert(lowered) {
            continue;
        }
        if pos == 0 {
            prefix.push(name.to_string());
        } else {
            infix.push(name.to_string());
        }
    }

    prefix.into_iter().chain(infix).take(limit).collect()
}
