//! Song model.

use serde::{Deserialize, Serialize};

/// A song by an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Song {
    /// Echo Nest song ID, e.g. "SOCZMFK12AC468668F".
    pub id: String,

    /// Song title.
    pub title: String,

    /// ID of the performing artist, when returned alongside the song.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,

    /// Name of the performing artist, when returned alongside the song.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_minimal_payload() {
        let song: Song =
            serde_json::from_str(r#"{"id": "SOCZMFK12AC468668F", "title": "El Scorcho"}"#)
                .unwrap();
        assert_eq!(song.title, "El Scorcho");
        assert!(song.artist_name.is_none());
    }
}
