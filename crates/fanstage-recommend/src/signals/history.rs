//! History signal - which platform the user has picked most often

use fanstage_core::{PlatformHistoryEntry, PlatformId};

/// Pick the most used platform from the user's history.
///
/// An empty history returns `fallback` unchanged (which may be `None`).
/// Equal counts resolve to the entry that comes first in `history`.
pub fn recommend_from_history(
    history: &[PlatformHistoryEntry],
    fallback: Option<PlatformId>,
) -> Option<PlatformId> {
    let mut best: Option<&PlatformHistoryEntry> = None;
    for entry in history {
        if best.is_none_or(|current| entry.count > current.count) {
            best = Some(entry);
        }
    }

    match best {
        Some(entry) => Some(entry.platform.clone()),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(platform: PlatformId, count: u64) -> PlatformHistoryEntry {
        PlatformHistoryEntry::new(platform, count)
    }

    #[test]
    fn test_empty_history_returns_fallback() {
        assert_eq!(recommend_from_history(&[], None), None);
        assert_eq!(
            recommend_from_history(&[], Some(PlatformId::Melon)),
            Some(PlatformId::Melon)
        );
    }

    #[test]
    fn test_highest_count_wins() {
        let history = vec![
            entry(PlatformId::Spotify, 2),
            entry(PlatformId::Apple, 9),
            entry(PlatformId::Youtube, 4),
        ];
        assert_eq!(
            recommend_from_history(&history, Some(PlatformId::Melon)),
            Some(PlatformId::Apple)
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let history = vec![
            entry(PlatformId::Youtube, 3),
            entry(PlatformId::Spotify, 3),
        ];
        assert_eq!(
            recommend_from_history(&history, None),
            Some(PlatformId::Youtube)
        );
    }

    #[test]
    fn test_zero_counts_still_count_as_history() {
        let history = vec![entry(PlatformId::Apple, 0)];
        assert_eq!(
            recommend_from_history(&history, Some(PlatformId::Spotify)),
            Some(PlatformId::Apple)
        );
    }
}
