use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One normalized setlist line. Positions are contiguous starting at 1,
/// assigned in source-line order; numbers present in the input are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistEntry {
    pub position: u32,
    pub artist: String,
    pub track: String,
}

/// A playlist to be created, living only for the duration of one request.
#[derive(Debug, Clone)]
pub struct PlaylistRequest {
    pub name: String,
    pub entries: Vec<SetlistEntry>,
}

#[derive(Tabled)]
pub struct SetlistTableRow {
    pub position: u32,
    pub artist: String,
    pub track: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TrackItems,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItems {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

/// Response body of the image-extraction provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    pub extracted_text: String,
}
