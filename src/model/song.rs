use std::fmt;

use serde::{Deserialize, Deserializer};

/// Identifier of a song as handed out by the search service.
///
/// The service has used both numeric and string ids, so either is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum SongId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SongId::Number(id) => write!(f, "{}", id),
            SongId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    #[serde(default, deserialize_with = "nested_lyrics")]
    pub lyrics: String,
}

/// Decoded body of a successful search, songs in server order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResults {
    pub songs: Vec<Song>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }
}

#[derive(Deserialize)]
struct LyricsBody {
    #[serde(default)]
    lyrics: Option<String>,
}

// The wire format nests the text as `"lyrics": { "lyrics": "..." }`.
fn nested_lyrics<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let body = Option::<LyricsBody>::deserialize(deserializer)?;
    Ok(body.and_then(|b| b.lyrics).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_lyrics() {
        let json = r#"{
            "songs": [
                { "id": 1, "title": "Song A", "artist": "Artist A", "lyrics": { "lyrics": "la la" } }
            ]
        }"#;
        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.songs[0].id, SongId::Number(1));
        assert_eq!(results.songs[0].lyrics, "la la");
    }

    #[test]
    fn missing_or_null_lyrics_become_empty() {
        let json = r#"{
            "songs": [
                { "id": "a", "title": "T", "artist": "A" },
                { "id": "b", "title": "T", "artist": "A", "lyrics": null },
                { "id": "c", "title": "T", "artist": "A", "lyrics": {} }
            ]
        }"#;
        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert!(results.songs.iter().all(|s| s.lyrics.is_empty()));
        assert_eq!(results.songs[0].id.to_string(), "a");
    }

    #[test]
    fn preserves_server_order() {
        let json = r#"{ "songs": [
            { "id": 3, "title": "C", "artist": "x" },
            { "id": 1, "title": "A", "artist": "x" },
            { "id": 2, "title": "B", "artist": "x" }
        ] }"#;
        let results: SearchResults = serde_json::from_str(json).unwrap();
        let titles: Vec<_> = results.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn rejects_body_without_songs() {
        assert!(serde_json::from_str::<SearchResults>(r#"{ "hits": [] }"#).is_err());
    }
}
