//! Letter sorting

use std::cmp::Reverse;

use fanstage_core::{Letter, SortOption};

/// Return a sorted copy of `letters`.
///
/// Every option uses a stable sort, so letters with equal keys keep their
/// input order in both directions. Letters without a usable date sort as the
/// oldest possible value.
pub fn sort(letters: &[Letter], option: SortOption) -> Vec<Letter> {
    let mut sorted = letters.to_vec();
    match option {
        SortOption::DateDesc => sorted.sort_by_cached_key(|l| Reverse(l.timestamp())),
        SortOption::DateAsc => sorted.sort_by_cached_key(|l| l.timestamp()),
        SortOption::TracksDesc => sorted.sort_by_key(|l| Reverse(l.track_count())),
        SortOption::TracksAsc => sorted.sort_by_key(|l| l.track_count()),
        SortOption::PlaysDesc => sorted.sort_by_key(|l| Reverse(l.play_count())),
        SortOption::PlaysAsc => sorted.sort_by_key(|l| l.play_count()),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(letters: &[Letter]) -> Vec<&str> {
        letters.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_date_sort_both_directions() {
        let letters = vec![
            Letter::new("jan1").with_created_at("2024-01-01"),
            Letter::new("jan3").with_created_at("2024-01-03"),
            Letter::new("jan2").with_created_at("2024-01-02"),
        ];
        assert_eq!(
            ids(&sort(&letters, SortOption::DateDesc)),
            vec!["jan3", "jan2", "jan1"]
        );
        assert_eq!(
            ids(&sort(&letters, SortOption::DateAsc)),
            vec!["jan1", "jan2", "jan3"]
        );
    }

    #[test]
    fn test_unparsable_dates_are_oldest() {
        let letters = vec![
            Letter::new("bad").with_created_at("??"),
            Letter::new("new").with_created_at("2024-05-01T10:00:00Z"),
            Letter::new("none"),
            Letter::new("display").with_date("2020.02.02"),
        ];
        assert_eq!(
            ids(&sort(&letters, SortOption::DateDesc)),
            vec!["new", "display", "bad", "none"]
        );
        assert_eq!(
            ids(&sort(&letters, SortOption::DateAsc)),
            vec!["bad", "none", "display", "new"]
        );
    }

    #[test]
    fn test_track_count_sort_uses_fallback_count() {
        let letters = vec![
            Letter::new("three").with_track_count(3),
            Letter::new("none"),
            Letter::new("ten").with_track_count(10),
        ];
        assert_eq!(
            ids(&sort(&letters, SortOption::TracksDesc)),
            vec!["ten", "three", "none"]
        );
        assert_eq!(
            ids(&sort(&letters, SortOption::TracksAsc)),
            vec!["none", "three", "ten"]
        );
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let letters = vec![
            Letter::new("a").with_play_count(5),
            Letter::new("b").with_play_count(9),
            Letter::new("c").with_play_count(5),
            Letter::new("d").with_play_count(9),
            Letter::new("e").with_play_count(5),
        ];
        assert_eq!(
            ids(&sort(&letters, SortOption::PlaysDesc)),
            vec!["b", "d", "a", "c", "e"]
        );
        assert_eq!(
            ids(&sort(&letters, SortOption::PlaysAsc)),
            vec!["a", "c", "e", "b", "d"]
        );
    }

    #[test]
    fn test_sort_empty() {
        for option in SortOption::ALL {
            assert!(sort(&[], option).is_empty());
        }
    }
}
