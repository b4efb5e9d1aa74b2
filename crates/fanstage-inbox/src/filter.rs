//! Letter filtering

use fanstage_core::{FilterCriteria, Letter};
use time::Date;

/// Keep the letters that satisfy every present criterion.
///
/// Matching rules:
/// - `name`: case-insensitive substring of the sender or recipient name;
///   a letter with neither name fails
/// - `track_title`: case-insensitive substring of at least one track title;
///   a letter without track detail fails
/// - `date_from` / `date_to`: inclusive calendar-date bounds on the letter's
///   timestamp; a letter without a usable date fails
///
/// Text criteria are trimmed before matching, so `" Kim "` searches for
/// `"Kim"`; a criterion that is empty after trimming is treated as absent.
/// The input is not modified.
pub fn filter(letters: &[Letter], criteria: &FilterCriteria) -> Vec<Letter> {
    let name = criteria.name_query().map(str::to_lowercase);
    let title = criteria.track_title_query().map(str::to_lowercase);

    letters
        .iter()
        .filter(|letter| {
            name.as_deref().is_none_or(|q| matches_name(letter, q))
                && title.as_deref().is_none_or(|q| matches_track_title(letter, q))
                && (!criteria.has_date_bounds()
                    || matches_date_range(letter, criteria.date_from, criteria.date_to))
        })
        .cloned()
        .collect()
}

/// `query` must already be lower-cased
fn matches_name(letter: &Letter, query: &str) -> bool {
    letter
        .display_names()
        .any(|name| name.to_lowercase().contains(query))
}

/// `query` must already be lower-cased
fn matches_track_title(letter: &Letter, query: &str) -> bool {
    match &letter.tracks {
        Some(tracks) => tracks
            .iter()
            .any(|track| track.title.to_lowercase().contains(query)),
        None => false,
    }
}

fn matches_date_range(letter: &Letter, from: Option<Date>, to: Option<Date>) -> bool {
    let Some(timestamp) = letter.timestamp() else {
        return false;
    };
    let day = timestamp.to_offset(time::UtcOffset::UTC).date();

    from.is_none_or(|from| day >= from) && to.is_none_or(|to| day <= to)
}
