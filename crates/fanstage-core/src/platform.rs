//! Streaming platform identifiers

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A streaming platform a track can be played on.
///
/// Unrecognised identifiers are kept verbatim in [`PlatformId::Other`] so they
/// still take part in tallies; deciding whether to reject them is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformId {
    Spotify,
    Apple,
    Youtube,
    Melon,
    Other(String),
}

impl PlatformId {
    /// Platforms the player knows how to open
    pub const KNOWN: [PlatformId; 4] = [
        PlatformId::Spotify,
        PlatformId::Apple,
        PlatformId::Youtube,
        PlatformId::Melon,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PlatformId::Spotify => "spotify",
            PlatformId::Apple => "apple",
            PlatformId::Youtube => "youtube",
            PlatformId::Melon => "melon",
            PlatformId::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PlatformId::Other(_))
    }
}

impl From<&str> for PlatformId {
    fn from(raw: &str) -> Self {
        match raw {
            "spotify" => PlatformId::Spotify,
            "apple" => PlatformId::Apple,
            "youtube" => PlatformId::Youtube,
            "melon" => PlatformId::Melon,
            other => PlatformId::Other(other.to_string()),
        }
    }
}

impl From<String> for PlatformId {
    fn from(raw: String) -> Self {
        match PlatformId::from(raw.as_str()) {
            PlatformId::Other(_) => PlatformId::Other(raw),
            known => known,
        }
    }
}

impl From<PlatformId> for String {
    fn from(platform: PlatformId) -> Self {
        match platform {
            PlatformId::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PlatformId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlatformId::from(s))
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many times a user has picked a platform in the past
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformHistoryEntry {
    pub platform: PlatformId,
    #[serde(default)]
    pub count: u64,
}

impl PlatformHistoryEntry {
    pub fn new(platform: PlatformId, count: u64) -> Self {
        Self { platform, count }
    }
}
