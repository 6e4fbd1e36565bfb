//! Lecture model and DTOs.

use examcat_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A document in the `lectures` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    /// Document id; not stored inside the document itself.
    #[serde(skip)]
    pub id: String,
    /// Bundle id of the owning app (trust-based reference).
    pub app_id: String,
    #[serde(default)]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Hosted audio file URL; empty when the lecture is YouTube-only.
    #[serde(default)]
    pub audio_url: String,
    /// YouTube video id; wins over `audio_url` when both are set.
    #[serde(default)]
    pub youtube_video_id: String,
    #[serde(default)]
    pub duration_seconds: i64,
    #[serde(default)]
    pub transcript: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Where a lecture's media plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSource<'a> {
    Youtube(&'a str),
    Audio(&'a str),
}

impl Lecture {
    /// Resolve the playback source. YouTube takes precedence when both
    /// an audio URL and a video id are present.
    pub fn playback_source(&self) -> Option<PlaybackSource<'_>> {
        if !self.youtube_video_id.is_empty() {
            Some(PlaybackSource::Youtube(&self.youtube_video_id))
        } else if !self.audio_url.is_empty() {
            Some(PlaybackSource::Audio(&self.audio_url))
        } else {
            None
        }
    }
}

/// DTO for creating a lecture.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLecture {
    pub app_id: String,
    #[serde(default)]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub youtube_video_id: String,
    #[serde(default)]
    pub duration_seconds: i64,
    #[serde(default)]
    pub transcript: String,
}

/// DTO for updating a lecture. The app binding is fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLecture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}
