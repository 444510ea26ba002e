use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Id")]
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsPage {
    #[serde(rename = "Items")]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaStream {
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Type")]
    pub stream_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSource {
    #[serde(rename = "MediaStreams")]
    pub media_streams: Vec<MediaStream>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackInfo {
    #[serde(rename = "MediaSources")]
    pub media_sources: Vec<MediaSource>,
}

impl PlaybackInfo {
    /// True if any media source carries an audio stream in the given language.
    ///
    /// The language is compared verbatim against the stream's tag (Jellyfin
    /// reports ISO 639-2 codes such as `pol`). An item without media sources
    /// never matches.
    pub fn has_audio_language(&self, language: &str) -> bool {
        self.media_sources.iter().any(|source| {
            source
                .media_streams
                .iter()
                .any(|stream| stream.stream_type == "Audio" && stream.language == language)
        })
    }
}

#[derive(Tabled)]
pub struct ItemTableRow {
    pub name: String,
    pub id: String,
}
