use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a media reference by its file extension.
    ///
    /// A reference is a video when it ends in `.mp4` or has `.mp4` right
    /// before a query string. The comparison is ASCII case-insensitive.
    pub fn classify(url: &str) -> Self {
        let lower = url.trim().to_ascii_lowercase();
        if lower.ends_with(".mp4") || lower.contains(".mp4?") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A gallery entry with its resolved kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::classify(&url);
        MediaItem { url, kind }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp4_is_video() {
        assert_eq!(MediaKind::classify("clips/demo.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("clips/DEMO.MP4"), MediaKind::Video);
        assert_eq!(
            MediaKind::classify("https://cdn.test/a.mp4?t=3&q=hd"),
            MediaKind::Video
        );
    }

    #[test]
    fn mp4_inside_a_query_is_video() {
        assert_eq!(MediaKind::classify("player?file=clip.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("cover?src=x.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("embed?v=a.MP4?autoplay=1"), MediaKind::Video);
    }

    #[test]
    fn everything_else_is_image() {
        for url in [
            "a.jpg",
            "a.png?v=2",
            "a.mp4.jpg",
            "a.webm",
            "mp4",
            "",
            "a.mp4#t=10",
        ] {
            assert_eq!(MediaKind::classify(url), MediaKind::Image, "{url}");
        }
    }
}
