//! Letter and track domain models

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::date::parse_timestamp;
use crate::platform::PlatformId;

/// A track attached to a letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub platform: PlatformId,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        platform: PlatformId,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            platform,
        }
    }
}

/// A music letter: an ordered track list plus a message.
///
/// Letters are read-only snapshots supplied by the storage layer. Any field
/// the supplier may omit is optional here, and the accessor methods resolve
/// the fallbacks (`track_count` from `tracks`, `created_at` before `date`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub id: String,
    /// Track detail; absent when the supplier only sent aggregate counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Display date, consulted only when `created_at` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

impl Letter {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_track_count(mut self, track_count: u32) -> Self {
        self.track_count = Some(track_count);
        self
    }

    pub fn with_play_count(mut self, play_count: u32) -> Self {
        self.play_count = Some(play_count);
        self
    }

    pub fn with_sender(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    pub fn with_recipient(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = Some(name.into());
        self
    }

    /// Track detail, or an empty slice when only counts were supplied
    pub fn tracks(&self) -> &[Track] {
        self.tracks.as_deref().unwrap_or(&[])
    }

    /// Track count: the explicit field wins, then the length of `tracks`, then 0
    pub fn track_count(&self) -> u32 {
        self.track_count
            .or_else(|| {
                self.tracks
                    .as_ref()
                    .map(|tracks| u32::try_from(tracks.len()).unwrap_or(u32::MAX))
            })
            .unwrap_or(0)
    }

    pub fn play_count(&self) -> u32 {
        self.play_count.unwrap_or(0)
    }

    /// The letter's timestamp.
    ///
    /// `created_at` is authoritative when present, even if it fails to parse;
    /// `date` is only consulted when `created_at` is missing entirely.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        match &self.created_at {
            Some(raw) => parse_timestamp(raw),
            None => self.date.as_deref().and_then(parse_timestamp),
        }
    }

    /// Populated sender/recipient display names, sender first
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.sender_name
            .as_deref()
            .into_iter()
            .chain(self.recipient_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn track(id: &str, platform: PlatformId) -> Track {
        Track::new(id, format!("Song {id}"), "Artist", platform)
    }

    #[test]
    fn test_track_count_fallbacks() {
        let explicit = Letter::new("a").with_track_count(12);
        assert_eq!(explicit.track_count(), 12);

        let derived = Letter::new("b").with_tracks(vec![
            track("1", PlatformId::Spotify),
            track("2", PlatformId::Melon),
        ]);
        assert_eq!(derived.track_count(), 2);

        // Explicit count wins over track detail
        let both = Letter::new("c")
            .with_tracks(vec![track("1", PlatformId::Apple)])
            .with_track_count(4);
        assert_eq!(both.track_count(), 4);

        assert_eq!(Letter::new("d").track_count(), 0);
        assert_eq!(Letter::new("d").play_count(), 0);
    }

    #[test]
    fn test_timestamp_prefers_created_at() {
        let letter = Letter::new("a")
            .with_created_at("2024-01-03")
            .with_date("2024.01.01");
        assert_eq!(letter.timestamp(), Some(datetime!(2024-01-03 00:00:00 UTC)));

        let display_only = Letter::new("b").with_date("2024.01.01");
        assert_eq!(
            display_only.timestamp(),
            Some(datetime!(2024-01-01 00:00:00 UTC))
        );

        // A broken created_at does not fall back to the display date
        let broken = Letter::new("c")
            .with_created_at("not a date")
            .with_date("2024.01.01");
        assert_eq!(broken.timestamp(), None);
    }

    #[test]
    fn test_display_names() {
        let letter = Letter::new("a").with_recipient("Kim");
        assert_eq!(letter.display_names().collect::<Vec<_>>(), vec!["Kim"]);

        let both = Letter::new("b").with_sender("Lee").with_recipient("Kim");
        assert_eq!(both.display_names().collect::<Vec<_>>(), vec!["Lee", "Kim"]);

        assert_eq!(Letter::new("c").display_names().count(), 0);
    }

    #[test]
    fn test_letter_json_shape() {
        let json = r#"{
            "id": "l1",
            "message": "for you",
            "createdAt": "2024-01-15T10:00:00Z",
            "playCount": 3,
            "senderName": "Kim",
            "tracks": [
                {"id": "t1", "title": "Winter", "artist": "A", "platform": "spotify"},
                {"id": "t2", "title": "Spring", "artist": "B", "platform": "tidal"}
            ]
        }"#;
        let letter: Letter = serde_json::from_str(json).unwrap();
        assert_eq!(letter.track_count(), 2);
        assert_eq!(letter.play_count(), 3);
        assert_eq!(letter.tracks()[1].platform, PlatformId::Other("tidal".into()));
        assert_eq!(letter.recipient_name, None);

        let counts_only: Letter =
            serde_json::from_str(r#"{"id":"l2","trackCount":5}"#).unwrap();
        assert!(counts_only.tracks.is_none());
        assert_eq!(counts_only.track_count(), 5);
    }
}
