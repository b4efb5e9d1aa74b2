//! Streaming platform recommendation for FAN:STAGE
//!
//! Picks the platform "play all" should open for a letter by combining:
//! - The letter's own tracks (a letter curated entirely on one platform)
//! - The listener's platform history (how often they picked each platform)
//! - A caller fallback, then a fixed baseline, so there is always an answer

pub mod signals;

use fanstage_core::{Letter, PlatformHistoryEntry, PlatformId};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use signals::history::recommend_from_history;
pub use signals::tracks::{is_unanimous, recommend_from_tracks};

/// Platform used when no signal and no caller fallback have an opinion
pub const BASELINE_PLATFORM: PlatformId = PlatformId::Spotify;

/// Which step of the smart recommendation produced the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    /// Every track in the letter is on the chosen platform
    UnanimousTracks,
    /// The listener's most used platform
    History,
    /// History was empty; the caller's fallback was used
    CallerFallback,
    /// Nothing else applied
    Baseline,
}

/// A smart recommendation together with the opinions that fed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub platform: PlatformId,
    pub source: DecisionSource,
    /// Plurality platform of the letter's tracks, if it has any
    pub track_opinion: Option<PlatformId>,
    /// Whether every track shares `track_opinion`
    pub unanimous: bool,
    /// Most used platform in the listener's history, ignoring any fallback
    pub history_opinion: Option<PlatformId>,
}

/// Resolve the platform for "play all" and report how it was chosen.
///
/// 1. A letter whose tracks are all on one platform opens that platform.
///    A plurality is not enough; a mixed letter falls through.
/// 2. Otherwise the listener's history decides, or `fallback` when the
///    history is empty.
/// 3. Otherwise [`BASELINE_PLATFORM`].
pub fn explain_smart(
    letter: &Letter,
    history: &[PlatformHistoryEntry],
    fallback: Option<PlatformId>,
) -> Recommendation {
    let tracks = letter.tracks();
    let track_opinion = recommend_from_tracks(tracks);
    let unanimous = track_opinion
        .as_ref()
        .is_some_and(|platform| is_unanimous(tracks, platform));

    let history_opinion = recommend_from_history(history, None);

    let (platform, source) = match (&track_opinion, unanimous) {
        (Some(platform), true) => (platform.clone(), DecisionSource::UnanimousTracks),
        _ => match (&history_opinion, fallback) {
            (Some(platform), _) => (platform.clone(), DecisionSource::History),
            (None, Some(platform)) => (platform, DecisionSource::CallerFallback),
            (None, None) => (BASELINE_PLATFORM, DecisionSource::Baseline),
        },
    };

    debug!(
        letter = %letter.id,
        tracks = tracks.len(),
        history = history.len(),
        %platform,
        ?source,
        "recommended platform"
    );

    Recommendation {
        platform,
        source,
        track_opinion,
        unanimous,
        history_opinion,
    }
}

/// Resolve the platform for "play all". Never fails to produce a platform.
pub fn recommend_smart(
    letter: &Letter,
    history: &[PlatformHistoryEntry],
    fallback: Option<PlatformId>,
) -> PlatformId {
    explain_smart(letter, history, fallback).platform
}
