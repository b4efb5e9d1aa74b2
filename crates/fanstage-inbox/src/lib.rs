//! Letter collection processing for the FAN:STAGE inbox
//!
//! Turns a raw letter collection into the list a view renders:
//! - [`filter`]: AND-combined name / track title / date range criteria
//! - [`sort`]: stable ordering by date, track count or play count
//! - [`process`]: filter then sort
//! - [`pagination`] and [`autocomplete`] helpers for the inbox page
//!
//! Every function takes the collection by shared reference and returns a new
//! `Vec`; caller-owned letters are never reordered or modified.

pub mod autocomplete;
pub mod filter;
pub mod pagination;
pub mod sort;

use fanstage_core::{FilterCriteria, Letter, SortOption};
use tracing::debug;

pub use autocomplete::suggest_names;
pub use filter::filter;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use sort::sort;

/// Filter `letters` by `criteria`, then sort the survivors by `option`.
pub fn process(letters: &[Letter], criteria: &FilterCriteria, option: SortOption) -> Vec<Letter> {
    let filtered = filter(letters, criteria);
    debug!(
        input = letters.len(),
        kept = filtered.len(),
        sort = %option,
        "processed letter collection"
    );
    sort(&filtered, option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_filters_before_sorting() {
        let letters = vec![
            Letter::new("a").with_sender("Kim").with_play_count(1),
            Letter::new("b").with_sender("Lee").with_play_count(50),
            Letter::new("c").with_recipient("kim").with_play_count(7),
        ];
        let result = process(
            &letters,
            &FilterCriteria::new().with_name("KIM"),
            SortOption::PlaysDesc,
        );
        let ids: Vec<_> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }
}
