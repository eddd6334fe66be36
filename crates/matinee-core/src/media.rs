//! Media file classification.
//!
//! Everything here works on bare file names, not paths: which extensions
//! count as playable media, what MIME type a name maps to, and how the
//! display title and thumbnail companion name are derived.

use std::fmt;
use std::path::Path;

/// File extensions catalogued as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "avi", "mov", "m4v"];

/// File extensions catalogued as audio.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "flac", "ogg", "wav"];

/// Playback element class for the web player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Audio => write!(f, "audio"),
        }
    }
}

fn extension(file_name: &str) -> Option<&str> {
    Path::new(file_name).extension().and_then(|e| e.to_str())
}

/// True when `file_name` carries a recognized video or audio extension
/// (case-insensitive).
pub fn is_media_file(file_name: &str) -> bool {
    match extension(file_name) {
        Some(ext) => VIDEO_EXTENSIONS
            .iter()
            .chain(AUDIO_EXTENSIONS)
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// MIME type for a file name.
///
/// `.mp4` always maps to `video/mp4`; MIME tables disagree on that extension
/// (`application/mp4` vs `video/mp4`) and only the video type plays in
/// browsers. Everything else goes through the generic lookup, defaulting to
/// `application/octet-stream`.
pub fn content_type(file_name: &str) -> String {
    if extension(file_name).is_some_and(|e| e.eq_ignore_ascii_case("mp4")) {
        return "video/mp4".to_string();
    }
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Classify a file for player element selection.
///
/// Video when the MIME type's top level is `video` (which `.mp4` always is,
/// via the override) or the literal `application/mp4`; audio otherwise.
pub fn kind(file_name: &str) -> MediaKind {
    let mime = content_type(file_name);
    if mime.starts_with("video/") || mime == "application/mp4" {
        MediaKind::Video
    } else {
        MediaKind::Audio
    }
}

/// Display title: the file name with its final extension stripped. Given a
/// path, only the final component is considered.
pub fn title(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Thumbnail companion name: the base name with `thumbnail.png` appended
/// directly, no separator.
pub fn thumbnail_name(file_name: &str) -> String {
    format!("{}thumbnail.png", title(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp4_is_forced_to_video_mp4() {
        assert_eq!(content_type("movie.mp4"), "video/mp4");
        assert_eq!(content_type("MOVIE.MP4"), "video/mp4");
    }

    #[test]
    fn known_extensions_resolve() {
        assert_eq!(content_type("song.mp3"), "audio/mpeg");
        assert_eq!(content_type("clip.webm"), "video/webm");
        assert_eq!(content_type("poster.png"), "image/png");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(content_type("file.zzz"), "application/octet-stream");
        assert_eq!(content_type("noext"), "application/octet-stream");
    }

    #[test]
    fn video_kinds() {
        assert_eq!(kind("movie.mp4"), MediaKind::Video);
        assert_eq!(kind("MOVIE.MP4"), MediaKind::Video);
        assert_eq!(kind("movie.mkv"), MediaKind::Video);
        assert_eq!(kind("movie.webm"), MediaKind::Video);
        assert_eq!(kind("movie.mov"), MediaKind::Video);
    }

    #[test]
    fn audio_kinds() {
        assert_eq!(kind("song.mp3"), MediaKind::Audio);
        assert_eq!(kind("song.flac"), MediaKind::Audio);
        assert_eq!(kind("song.wav"), MediaKind::Audio);
    }

    #[test]
    fn unclassifiable_defaults_to_audio() {
        assert_eq!(kind("file.zzz"), MediaKind::Audio);
        assert_eq!(kind("notes.txt"), MediaKind::Audio);
    }

    #[test]
    fn title_strips_final_extension() {
        assert_eq!(title("movie.mp4"), "movie");
        assert_eq!(title("My.Movie.2024.mp4"), "My.Movie.2024");
        assert_eq!(title("noext"), "noext");
        assert_eq!(title("a/b.mp4"), "b");
    }

    #[test]
    fn thumbnail_name_has_no_separator() {
        assert_eq!(thumbnail_name("movie.mp4"), "moviethumbnail.png");
        assert_eq!(thumbnail_name("My Movie.mp4"), "My Moviethumbnail.png");
    }

    #[test]
    fn media_file_predicate() {
        assert!(is_media_file("a.mp4"));
        assert!(is_media_file("a.MP4"));
        assert!(is_media_file("a.mp3"));
        assert!(is_media_file("a.mkv"));
        assert!(!is_media_file("a.txt"));
        assert!(!is_media_file("a.png"));
        assert!(!is_media_file("noext"));
    }

    #[test]
    fn kind_display() {
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!(MediaKind::Audio.to_string(), "audio");
    }
}
