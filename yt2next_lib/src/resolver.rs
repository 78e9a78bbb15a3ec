/// The resolution pipeline: a raw video URL in, that video plus the one
/// its channel uploaded right after it out.

use thiserror::Error;

use crate::api::{ApiClient, ApiError, ApiProgressCallback};
use crate::models::{PlaylistVideo, Resolution};
use crate::url::extract_video_id;

/// Everything the pipeline needs from its caller. The key is handed over
/// explicitly so the core never reads ambient state itself; where it comes
/// from (flag, environment, config file) is the caller's business.
pub struct Settings {
    pub api_key: String,
    /// Alternate API host serving the same response shapes, for
    /// deployments that route through a key-holding proxy.
    pub api_base_url: Option<String>
}

impl Settings {

    pub fn new(api_key: String) -> Self {
        Self { api_key, api_base_url: None }
    }
}

/// The lookup that came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    VideoDetails,
    UploadsPlaylist,
    VideoInUploads
}

impl std::fmt::Display for Step {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::VideoDetails => write!(f, "the video details"),
            Step::UploadsPlaylist => write!(f, "the channel's uploads playlist"),
            Step::VideoInUploads => write!(f, "the video in the channel's public uploads (it may be unlisted or private)")
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {

    #[error("That is not a valid YouTube video link.")]
    InvalidUrl,
    #[error("No API key available.")]
    MissingApiKey,
    #[error("Couldn't find {0}.")]
    NotFound(Step),
    #[error(transparent)]
    Api(#[from] ApiError)
}

/// Resolves the chronologically next upload of the channel that published
/// the linked video.
///
/// The four remote lookups are strictly sequential: each one needs the
/// previous one's answer, and every playlist page needs the token from the
/// page before it. The first failure aborts the whole chain.
pub async fn resolve_next(raw_url: &str, settings: &Settings) -> Result<Resolution, ResolveError> {
    resolve_next_with(raw_url, settings, None).await
}

/// Same as [`resolve_next`], with a progress callback that is invoked
/// after every fetched playlist page.
pub async fn resolve_next_with(raw_url: &str, settings: &Settings, callback: Option<ApiProgressCallback>) -> Result<Resolution, ResolveError> {

    // Input validation comes first: a bad URL is reported even when no
    // key is available either.
    let video_id = extract_video_id(raw_url.trim()).ok_or(ResolveError::InvalidUrl)?;

    if settings.api_key.trim().is_empty() {
        return Err(ResolveError::MissingApiKey);
    }

    let mut client = ApiClient::new(settings.api_key.clone(), callback);
    if let Some(base_url) = &settings.api_base_url {
        client = client.with_base_url(base_url.clone());
    }

    let video = client.fetch_video(&video_id).await?
        .ok_or(ResolveError::NotFound(Step::VideoDetails))?;

    let channel = client.fetch_channel(&video.channel_id).await?
        .ok_or(ResolveError::NotFound(Step::UploadsPlaylist))?;

    let uploads = client.fetch_all_uploads(&channel.uploads_playlist_id).await?;
    find_next(&uploads, &video_id)
}

// The uploads playlist is newest first, so the chronological successor of
// the item at `idx` sits at `idx - 1`. Index 0 is the latest upload and
// has no successor.
fn find_next(uploads: &[PlaylistVideo], video_id: &str) -> Result<Resolution, ResolveError> {

    let idx = uploads.iter()
        .position(|v| v.video_id == video_id)
        .ok_or(ResolveError::NotFound(Step::VideoInUploads))?;

    Ok(Resolution {
        current: uploads[idx].clone(),
        next: if idx > 0 { Some(uploads[idx - 1].clone()) } else { None }
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    fn uploads(ids: &[&str]) -> Vec<PlaylistVideo> {

        ids.iter().enumerate().map(|(position, id)| PlaylistVideo {
            playlist_item_id: format!("item-{position}"),
            position: position as i32,
            video_id: String::from(*id),
            title: format!("Video {id}"),
            channel_title: String::from("Channel"),
            published_at: String::from("2024-01-01T00:00:00Z"),
            thumbnail_url: None
        }).collect()
    }

    #[test]
    fn next_is_one_slot_toward_the_newest_end() {

        let items = uploads(&["BBBBBBBBBBB", "AAAAAAAAAAA", "CCCCCCCCCCC"]);
        let resolution = find_next(&items, "AAAAAAAAAAA").unwrap();

        assert_eq!(resolution.current.video_id, "AAAAAAAAAAA");
        assert_eq!(resolution.next.as_ref().unwrap().video_id, "BBBBBBBBBBB");
        assert!(!resolution.is_latest());
    }

    #[test]
    fn oldest_video_resolves_to_the_second_oldest() {

        let items = uploads(&["BBBBBBBBBBB", "AAAAAAAAAAA", "CCCCCCCCCCC"]);
        let resolution = find_next(&items, "CCCCCCCCCCC").unwrap();

        assert_eq!(resolution.current.video_id, "CCCCCCCCCCC");
        assert_eq!(resolution.next.as_ref().unwrap().video_id, "AAAAAAAAAAA");
    }

    #[test]
    fn newest_video_has_no_successor() {

        let items = uploads(&["BBBBBBBBBBB", "AAAAAAAAAAA", "CCCCCCCCCCC"]);
        let resolution = find_next(&items, "BBBBBBBBBBB").unwrap();

        assert_eq!(resolution.current.video_id, "BBBBBBBBBBB");
        assert!(resolution.next.is_none());
        assert!(resolution.is_latest());
    }

    #[test]
    fn absent_video_is_not_found() {

        let items = uploads(&["BBBBBBBBBBB", "AAAAAAAAAAA"]);
        let err = find_next(&items, "ZZZZZZZZZZZ").unwrap_err();

        assert!(matches!(err, ResolveError::NotFound(Step::VideoInUploads)));
        assert!(err.to_string().contains("public uploads"));
    }

    #[test]
    fn duplicate_ids_match_the_first_occurrence() {

        let items = uploads(&["BBBBBBBBBBB", "AAAAAAAAAAA", "AAAAAAAAAAA"]);
        let resolution = find_next(&items, "AAAAAAAAAAA").unwrap();

        assert_eq!(resolution.current.position, 1);
        assert_eq!(resolution.next.as_ref().unwrap().video_id, "BBBBBBBBBBB");
    }

    #[tokio::test]
    async fn blank_key_short_circuits() {

        let settings = Settings::new(String::from("  "));
        let err = resolve_next("https://youtu.be/dQw4w9WgXcQ", &settings).await.unwrap_err();
        assert!(matches!(err, ResolveError::MissingApiKey));
    }

    #[tokio::test]
    async fn blank_url_is_reported_before_blank_key() {

        let settings = Settings::new(String::new());
        let err = resolve_next("", &settings).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl));
    }

    #[tokio::test]
    async fn bad_url_short_circuits() {

        let settings = Settings::new(String::from("some-key"));
        let err = resolve_next("https://example.com/watch?v=nope", &settings).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl));

        let err = resolve_next("   ", &settings).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl));
    }

    #[test]
    fn not_found_messages_name_the_step() {

        assert_eq!(ResolveError::NotFound(Step::VideoDetails).to_string(), "Couldn't find the video details.");
        assert_eq!(ResolveError::NotFound(Step::UploadsPlaylist).to_string(), "Couldn't find the channel's uploads playlist.");
    }
}
