//! Core data models for music metadata rendered by the `SoundKit` components.
//!
//! This crate provides the fundamental data structures for representing albums,
//! tracks, and their playable audio sources. Records are plain values owned by
//! the page that constructs them; components receive them by reference for
//! read-only rendering.
//!
//! # Main Types
//!
//! * [`Album`] - Represents a music album with its track list
//! * [`Track`] - Represents a music track with its playable sources
//! * [`AudioSource`] - A single playable rendition of a track
//! * [`AudioFormat`] - Codec tag for an audio source
//! * [`AudioQuality`] - Quality tier for an audio source

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Audio codec tag for a playable source.
#[derive(
    Copy, Debug, Clone, Serialize, Deserialize, EnumString, Default, AsRefStr, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 audio format
    #[default]
    Mp3,
    /// AAC audio format
    Aac,
    /// FLAC audio format
    Flac,
    /// Opus audio format
    Opus,
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Quality tier for a playable source.
#[derive(
    Copy, Debug, Clone, Serialize, Deserialize, EnumString, Default, AsRefStr, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioQuality {
    /// Reduced bitrate rendition
    Low,
    /// Standard rendition
    #[default]
    High,
    /// Lossless rendition
    Lossless,
}

impl std::fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A single playable rendition of a track.
///
/// No invariant is enforced beyond the URL being well-formed enough for the
/// host runtime to fetch.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AudioSource {
    /// URL the audio can be fetched from
    pub url: String,
    /// Codec tag for this rendition
    pub format: AudioFormat,
    /// Quality tier for this rendition
    pub quality: AudioQuality,
}

/// Represents a music track with its metadata and playable sources.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique identifier for the track
    pub id: u64,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Track duration in whole seconds
    pub duration: u32,
    /// Playable sources, ordered by descending preference (caller convention)
    pub audio_sources: Vec<AudioSource>,
}

impl Track {
    /// Returns the most preferred playable source, if any.
    ///
    /// Sources are ordered by descending preference by the caller; this is
    /// simply the first entry.
    #[must_use]
    pub fn preferred_source(&self) -> Option<&AudioSource> {
        self.audio_sources.first()
    }
}

/// Represents a music album with its track list.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Unique identifier for the album within its list
    pub id: u64,
    /// Album title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Year the album was released
    pub release_year: u16,
    /// Artwork URL, if the album has one
    pub album_art: Option<String>,
    /// Tracks in album order
    pub tracks: Vec<Track>,
}

impl Album {
    /// Returns the number of tracks on the album.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Returns the total duration of the album in whole seconds.
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.tracks.iter().map(|track| track.duration).sum()
    }
}

impl std::fmt::Display for Album {
    /// # Panics
    ///
    /// * Panics if the album cannot be serialized to JSON
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_json::to_string(self).unwrap())
    }
}

impl<'a> TryFrom<&'a str> for Album {
    type Error = serde_json::Error;

    /// # Errors
    ///
    /// * Returns an error if the string is not valid JSON or does not match
    ///   the `Album` schema
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        serde_json::from_str(value)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn track(id: u64, duration: u32) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            duration,
            audio_sources: vec![
                AudioSource {
                    url: format!("https://cdn.example.com/{id}.flac"),
                    format: AudioFormat::Flac,
                    quality: AudioQuality::Lossless,
                },
                AudioSource {
                    url: format!("https://cdn.example.com/{id}.mp3"),
                    format: AudioFormat::Mp3,
                    quality: AudioQuality::Low,
                },
            ],
        }
    }

    mod album_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test_log::test]
        fn total_duration_sums_track_durations() {
            let album = Album {
                tracks: vec![track(1, 120), track(2, 45), track(3, 300)],
                ..Album::default()
            };

            assert_eq!(album.total_duration(), 465);
            assert_eq!(album.track_count(), 3);
        }

        #[test_log::test]
        fn total_duration_is_zero_for_empty_track_list() {
            assert_eq!(Album::default().total_duration(), 0);
        }

        #[test_log::test]
        fn serializes_with_camel_case_field_names() {
            let album = Album {
                id: 1,
                title: "Midnight Dreams".to_string(),
                artist: "Luna Eclipse".to_string(),
                release_year: 2024,
                album_art: Some("https://cdn.example.com/art.jpg".to_string()),
                tracks: vec![],
            };

            let json: serde_json::Value = serde_json::from_str(&album.to_string()).unwrap();

            assert_eq!(json["releaseYear"], 2024);
            assert_eq!(json["albumArt"], "https://cdn.example.com/art.jpg");
            assert_eq!(json["tracks"], serde_json::json!([]));
        }

        #[test_log::test]
        fn round_trips_through_json() {
            let album = Album {
                id: 7,
                title: "Echoes".to_string(),
                artist: "Various".to_string(),
                release_year: 1999,
                album_art: None,
                tracks: vec![track(1, 200)],
            };

            let parsed = Album::try_from(album.to_string().as_str()).unwrap();

            assert_eq!(parsed, album);
        }
    }

    mod track_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test_log::test]
        fn preferred_source_is_the_first_entry() {
            let track = track(5, 100);

            assert_eq!(
                track.preferred_source().map(|x| x.format),
                Some(AudioFormat::Flac)
            );
        }

        #[test_log::test]
        fn preferred_source_is_none_without_sources() {
            assert_eq!(Track::default().preferred_source(), None);
        }

        #[test_log::test]
        fn audio_sources_serialize_under_camel_case_key() {
            let json = serde_json::to_value(track(2, 60)).unwrap();

            assert_eq!(json["audioSources"][0]["format"], "flac");
            assert_eq!(json["audioSources"][1]["quality"], "low");
        }
    }

    mod audio_format_tests {
        use std::str::FromStr as _;

        use super::*;
        use pretty_assertions::assert_eq;

        #[test_log::test]
        fn displays_lowercase_codec_tags() {
            assert_eq!(AudioFormat::Mp3.to_string(), "mp3");
            assert_eq!(AudioFormat::Flac.to_string(), "flac");
            assert_eq!(AudioQuality::Lossless.to_string(), "lossless");
        }

        #[test_log::test]
        fn parses_lowercase_codec_tags() {
            assert_eq!(AudioFormat::from_str("opus").unwrap(), AudioFormat::Opus);
            assert_eq!(AudioQuality::from_str("high").unwrap(), AudioQuality::High);
        }

        #[test_log::test]
        fn rejects_unknown_codec_tags() {
            assert!(AudioFormat::from_str("wav").is_err());
        }
    }
}
