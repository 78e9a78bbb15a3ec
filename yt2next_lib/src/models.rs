use crate::api::yt_api;

/// A single video as returned by the video lookup endpoint.
#[derive(Debug, Clone)]
pub struct VideoDetails {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: String
}

impl From<yt_api::VideoItem> for VideoDetails {

    fn from(item: yt_api::VideoItem) -> Self {
        Self {
            id: item.id,
            channel_id: item.snippet.channel_id,
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at
        }
    }
}

/// A channel together with the id of its uploads playlist, the playlist
/// that holds everything the channel has published, newest first.
#[derive(Debug, Clone)]
pub struct ChannelUploads {
    pub channel_id: String,
    pub uploads_playlist_id: String
}

/// One entry of a channel's uploads playlist.
#[derive(Debug, Clone)]
pub struct PlaylistVideo {
    pub playlist_item_id: String,
    pub position: i32,
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
    pub thumbnail_url: Option<String>
}

impl PlaylistVideo {

    /// Link back to the watch page for this entry.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

impl From<yt_api::PlaylistItem> for PlaylistVideo {

    fn from(item: yt_api::PlaylistItem) -> Self {

        let thumbnail_url = item.snippet.thumbnails.best().map(|t| t.url.clone());
        Self {
            playlist_item_id: item.id,
            position: item.snippet.position,
            video_id: item.snippet.resource_id.video_id,
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            thumbnail_url
        }
    }
}

/// What the pipeline hands back: the video the user linked and, unless it
/// is the channel's most recent upload, the one published right after it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub current: PlaylistVideo,
    pub next: Option<PlaylistVideo>
}

impl Resolution {

    /// True when the linked video occupies the newest slot of the uploads
    /// playlist, so no successor exists yet.
    pub fn is_latest(&self) -> bool {
        self.next.is_none()
    }
}
