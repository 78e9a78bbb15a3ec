/// Client for the three read-only Youtube Data API calls the resolver
/// needs: video lookup, channel lookup and playlist paging.

pub mod yt_api;

use reqwest::{self, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::{ChannelUploads, PlaylistVideo, VideoDetails};

const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

// Pages carry up to 50 items, so this admits channels with a quarter
// million uploads before a continuation chain is treated as runaway.
const MAX_PAGES: usize = 5000;

#[derive(Debug, Clone)]
pub enum ApiError {

    Upstream(String),
    DecodingError,
    ParsingError,
    TooManyPages,
    Unknown(String)
}

impl std::error::Error for ApiError {}
impl std::fmt::Display for ApiError {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Upstream(msg) => write!(f, "{msg}"),
            ApiError::DecodingError | ApiError::ParsingError => write!(f, "Failed to parse api response."),
            ApiError::TooManyPages => write!(f, "Uploads playlist did not end after {MAX_PAGES} pages, giving up."),
            ApiError::Unknown(msg) => write!(f, "{msg}")
        }
    }
}

pub type ApiProgressCallback = Box<dyn Fn(String) + Send + Sync>;

/// A `reqwest::Client` wrapper around the Youtube Data API v3.
///
/// Because walking a large uploads playlist can take a while, the caller
/// can provide a callback that will be called after every fetched page
/// with a `String` describing the progress.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    callback: Option<ApiProgressCallback>
}

impl ApiClient {

    pub fn new(api_key: String, callback: Option<ApiProgressCallback>) -> Self {

        Self {
            client: reqwest::Client::new(),
            base_url: String::from(YOUTUBE_API_URL),
            api_key,
            callback
        }
    }

    /// Points the client at a different host serving the same response
    /// shapes, such as a proxy that holds the key server-side.
    pub fn with_base_url(mut self, base_url: String) -> Self {

        self.base_url = base_url;
        self
    }

    /// Looks up a single video. `Ok(None)` means the API answered with
    /// zero items (deleted, private or nonexistent video), which is a
    /// normal outcome rather than a failure.
    pub async fn fetch_video(&self, video_id: &str) -> Result<Option<VideoDetails>, ApiError> {

        let response = self.client.get(format!("{}/videos?part=snippet&id={}&key={}", self.base_url, video_id, self.api_key))
            .send().await
            .map_err(convert_reqwest_err)?;

        let mut content: yt_api::VideoListResponse = parse_response(response).await?;
        if content.items.is_empty() { Ok(None) }
        else { Ok(Some(content.items.remove(0).into())) }
    }

    /// Looks up a channel and extracts its uploads playlist id. Same
    /// absence semantics as `fetch_video`.
    pub async fn fetch_channel(&self, channel_id: &str) -> Result<Option<ChannelUploads>, ApiError> {

        let response = self.client.get(format!("{}/channels?part=contentDetails&id={}&key={}", self.base_url, channel_id, self.api_key))
            .send().await
            .map_err(convert_reqwest_err)?;

        let mut content: yt_api::ChannelListResponse = parse_response(response).await?;
        if content.items.is_empty() { Ok(None) }
        else {

            let channel = content.items.remove(0);
            Ok(Some(ChannelUploads {
                channel_id: channel.id,
                uploads_playlist_id: channel.content_details.related_playlists.uploads
            }))
        }
    }

    /// Fetches one page of a playlist, 50 items at most. `page_token` is
    /// `None` for the first page.
    pub async fn fetch_playlist_page(&self, playlist_id: &str, page_token: Option<&str>) -> Result<yt_api::PlaylistItemListResponse, ApiError> {

        let mut url = format!("{}/playlistItems?part=snippet&maxResults=50&playlistId={}&key={}",
            self.base_url,
            playlist_id,
            self.api_key
        );

        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={token}"));
        }

        let response = self.client.get(url)
            .send().await
            .map_err(convert_reqwest_err)?;

        parse_response(response).await
    }

    /// Walks an uploads playlist to the end, keeping every item in the
    /// order the API returned it: newest first, nothing skipped, nothing
    /// deduplicated.
    pub async fn fetch_all_uploads(&self, playlist_id: &str) -> Result<Vec<PlaylistVideo>, ApiError> {

        accumulate(
            |token| async move { self.fetch_playlist_page(playlist_id, token.as_deref()).await },
            |fetched| self.send_callback(format!("Fetched {fetched} videos."))
        ).await
    }

    fn send_callback(&self, progress: String) {

        log::info!("{progress}");
        if let Some(callback) = &self.callback {
            callback(progress);
        }
    }
}

// Drives the continuation loop: fetches pages, handing each call the token
// the previous page returned, until a page comes back without one. Stops
// with an error once MAX_PAGES pages did not reach the end.
async fn accumulate<F, Fut>(mut fetch_page: F, mut on_page: impl FnMut(usize)) -> Result<Vec<PlaylistVideo>, ApiError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<yt_api::PlaylistItemListResponse, ApiError>>
{
    let mut videos: Vec<PlaylistVideo> = Vec::new();
    let mut next_page_token: Option<String> = None;
    let mut pages: usize = 0;
    loop {

        let page = fetch_page(next_page_token.take()).await?;
        next_page_token = append_page(&mut videos, page);

        on_page(videos.len());

        if next_page_token.is_none() { break; }

        pages += 1;
        if pages >= MAX_PAGES { return Err(ApiError::TooManyPages); }
    }

    Ok(videos)
}

// Appends one page worth of items to the accumulator and hands back the
// continuation token, if the page carried one.
fn append_page(videos: &mut Vec<PlaylistVideo>, page: yt_api::PlaylistItemListResponse) -> Option<String> {

    videos.extend(page.items.into_iter().map(PlaylistVideo::from));
    page.next_page_token
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {

    let status = response.status();
    let text = response.text_with_charset("utf-8").await
        .map_err(|_| ApiError::DecodingError)?;

    if !status.is_success() {
        return Err(ApiError::Upstream(upstream_message(status, &text)));
    }

    serde_json::from_str::<T>(&text).map_err(|_| ApiError::ParsingError)
}

// Non-2xx answers usually carry a structured body with a human-readable
// message. Surface that message verbatim when it decodes, otherwise fall
// back to the status line.
fn upstream_message(status: StatusCode, body: &str) -> String {

    match serde_json::from_str::<yt_api::ErrorResponse>(body) {
        Ok(decoded) => format!("YouTube API error: {}", decoded.error.message),
        Err(_) => format!("Request failed with status {} {}.", status.as_u16(), status.canonical_reason().unwrap_or("Unknown"))
    }
}

fn convert_reqwest_err(err: reqwest::Error) -> ApiError {

    match err.status() {
        Some(status) => ApiError::Upstream(status.to_string()),
        None => ApiError::Unknown(err.to_string())
    }
}
