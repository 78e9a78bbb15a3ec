/// Video id extraction from the URL shapes YouTube hands out.

use regex::Regex;

// A video id is exactly 11 characters of [A-Za-z0-9_-]. Every pattern is
// anchored on both sides of the token so that trailing query parameters or
// path segments can neither extend it nor fake a match. The youtube.com
// host may carry any subdomain (www., m., music.), but lookalike hosts
// that merely end in "youtube.com" do not match.
static URL_PATTERNS: [&str; 4] = [
    r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*youtube\.com/watch\?(?:[^#&]+&)*v=([A-Za-z0-9_-]{11})(?:[&#].*)?$",
    r"^(?:https?://)?(?:www\.)?youtu\.be/([A-Za-z0-9_-]{11})(?:[?&#/].*)?$",
    r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*youtube\.com/embed/([A-Za-z0-9_-]{11})(?:[?&#/].*)?$",
    r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*youtube\.com/v/([A-Za-z0-9_-]{11})(?:[?&#/].*)?$"
];

/// Extracts the video id from a watch page link, a youtu.be short link, or
/// an embed/v player link. Returns `None` if the input matches none of them.
pub fn extract_video_id(url: &str) -> Option<String> {

    URL_PATTERNS.iter()
        .filter_map(|pattern| Regex::new(pattern).expect("Failed to compile regex.").captures(url))
        .find_map(|captures| captures.get(1).map(|m| String::from(m.as_str())))
}
