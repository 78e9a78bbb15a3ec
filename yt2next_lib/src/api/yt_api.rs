/// Structs for the Youtube Data API v3 responses.

use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Thumbnail {
    pub url: String,
    pub width: i32,
    pub height: i32
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>
}

impl Thumbnails {

    /// The thumbnail the watch page itself shows: medium, falling back to
    /// high and then default.
    pub fn best(&self) -> Option<&Thumbnail> {
        self.medium.as_ref()
            .or(self.high.as_ref())
            .or(self.default.as_ref())
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub channel_title: String
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VideoListResponse {
    pub items: Vec<VideoItem>
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RelatedPlaylists {
    pub uploads: String
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub related_playlists: RelatedPlaylists
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub id: String,
    pub content_details: ContentDetails
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChannelListResponse {
    pub items: Vec<ChannelItem>
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    pub video_id: String
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub channel_title: String,
    pub playlist_id: String,
    pub position: i32,
    pub resource_id: ResourceId
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlaylistItem {
    pub id: String,
    pub snippet: PlaylistItemSnippet
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub code: Option<i32>,
    pub message: String
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorBody
}
