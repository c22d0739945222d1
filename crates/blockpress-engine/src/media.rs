//! Conditional media: image, embedded video or direct video file.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("valid youtube pattern")
});

/// The kind of media a section shows next to (or behind) its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    #[default]
    #[serde(other)]
    None,
}

/// Where a video plays from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// YouTube video identifier.
    YouTube(String),
    /// Direct file URL, played with a native video element.
    File(String),
}

/// Extract the 11-character YouTube identifier from a video URL.
pub fn youtube_id(url: &str) -> Option<String> {
    let captures = YOUTUBE.captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.len() == 11).then(|| id.to_string())
}

/// Classify a video URL. Empty input renders nothing.
pub fn video_source(url: Option<&str>) -> Option<VideoSource> {
    let url = url.map(str::trim).filter(|url| !url.is_empty())?;
    Some(match youtube_id(url) {
        Some(id) => VideoSource::YouTube(id),
        None => VideoSource::File(url.to_string()),
    })
}

/// Plain embed URL used for inline players.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

/// Background embed: autoplaying, muted, looping and chromeless.
pub fn background_embed_url(id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}&controls=0&showinfo=0&rel=0&modestbranding=1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ?start=10")]
    #[case("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/v/dQw4w9WgXcQ#t=30")]
    fn test_youtube_id_recognized(#[case] url: &str) {
        assert_eq!(youtube_id(url).as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=short")]
    #[case("https://cdn.example.com/videos/intro.mp4")]
    #[case("")]
    fn test_youtube_id_rejected(#[case] url: &str) {
        assert_eq!(youtube_id(url), None);
    }

    #[test]
    fn test_video_source_classification() {
        assert_eq!(
            video_source(Some("https://youtu.be/dQw4w9WgXcQ")),
            Some(VideoSource::YouTube("dQw4w9WgXcQ".to_string()))
        );
        assert_eq!(
            video_source(Some("https://cdn.example.com/intro.mp4")),
            Some(VideoSource::File("https://cdn.example.com/intro.mp4".to_string()))
        );
        assert_eq!(video_source(Some("  ")), None);
        assert_eq!(video_source(None), None);
    }

    #[test]
    fn test_background_embed_loops_its_own_playlist() {
        let url = background_embed_url("dQw4w9WgXcQ");
        assert!(
            url.starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&mute=1&loop=1")
        );
        assert!(url.contains("playlist=dQw4w9WgXcQ"));
    }

    #[rstest]
    #[case("\"image\"", MediaKind::Image)]
    #[case("\"video\"", MediaKind::Video)]
    #[case("\"none\"", MediaKind::None)]
    #[case("\"gallery\"", MediaKind::None)]
    fn test_media_kind_tokens(#[case] json: &str, #[case] expected: MediaKind) {
        let kind: MediaKind = serde_json::from_str(json).unwrap();
        assert_eq!(kind, expected);
    }
}
