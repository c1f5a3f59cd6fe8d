// src/extract/media.rs
use tracing::debug;

use crate::config::options::ExtractionConfig;
use crate::core::Document;
use super::types::MediaResult;

/// `src` of <img>, <video> and <audio> elements that have one.
/// Empty values are kept; sources nested in <source> children are not followed.
pub fn extract_media(doc: &Document, config: &ExtractionConfig) -> MediaResult {
    if !config.scrape_media {
        return MediaResult::default();
    }
    let srcs = |tag: &str| -> Vec<String> { doc.attr_values(tag, "src").map(|v| s!(v)).collect() };

    let media = MediaResult {
        images: srcs("img"),
        videos: srcs("video"),
        audios: srcs("audio"),
    };
    debug!(
        images = media.images.len(),
        videos = media.videos.len(),
        audios = media.audios.len(),
        "media extracted"
    );
    media
}
