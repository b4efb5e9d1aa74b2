//! Track majority signal - which platform the letter's own tracks live on

use std::collections::HashMap;

use fanstage_core::{PlatformId, Track};
use tracing::trace;

/// Pick the platform carrying the most tracks.
///
/// Counts are accumulated in input order and the leader only changes when a
/// platform's running count strictly exceeds the current maximum, so the
/// platform that reached a tied maximum first keeps the lead. Returns `None`
/// for an empty track list.
pub fn recommend_from_tracks(tracks: &[Track]) -> Option<PlatformId> {
    let mut counts: HashMap<&PlatformId, usize> = HashMap::new();
    let mut best: Option<&PlatformId> = None;
    let mut max = 0;

    for track in tracks {
        let count = counts.entry(&track.platform).or_default();
        *count += 1;
        if *count > max {
            max = *count;
            best = Some(&track.platform);
        }
    }

    trace!(tracks = tracks.len(), leader = ?best, max, "tallied track platforms");
    best.cloned()
}

/// True when the letter has tracks and every one of them is on `platform`
pub fn is_unanimous(tracks: &[Track], platform: &PlatformId) -> bool {
    !tracks.is_empty() && tracks.iter().all(|track| &track.platform == platform)
}
