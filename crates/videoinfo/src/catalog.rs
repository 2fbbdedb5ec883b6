//! Static tables mapping stream identifiers to quality tiers and metadata.
//!
//! The tables are fixed at compile time and read-only, so they are shared
//! freely across threads without synchronization.

use media_types::{Container, Resolution, VideoQuality};

/// Numeric identifier naming one stream variant's encoding/resolution
/// combination. Identifiers carry no arithmetic meaning; they are only
/// compared and looked up.
pub type Itag = u32;

/// SD identifiers, ascending quality.
pub static SD_ITAGS: [Itag; 8] = [160, 278, 133, 242, 243, 134, 244, 135];

/// HD identifiers, ascending quality.
pub static HD_ITAGS: [Itag; 4] = [247, 136, 248, 137];

/// 1440p and 4K identifiers, ascending quality.
pub static UHD4K_ITAGS: [Itag; 5] = [271, 264, 266, 138, 313];

/// Every video identifier in a single fixed ascending-quality order.
/// Quality ceilings are expressed as positions in this table.
pub static ALL_VIDEO_ITAGS: [Itag; 17] = [
    160, 278, 133, 242, 243, 134, 244, 135, 247, 136, 248, 137, 271, 264, 266, 138, 313,
];

/// Quality tier of `itag`, or `None` for audio-only and unrecognized
/// identifiers.
pub fn classify(itag: Itag) -> Option<VideoQuality> {
    if SD_ITAGS.contains(&itag) {
        Some(VideoQuality::Sd)
    } else if HD_ITAGS.contains(&itag) {
        Some(VideoQuality::Hd)
    } else if UHD4K_ITAGS.contains(&itag) {
        Some(VideoQuality::Uhd4k)
    } else {
        None
    }
}

/// Position of `itag` in [`ALL_VIDEO_ITAGS`].
pub fn rank(itag: Itag) -> Option<usize> {
    ALL_VIDEO_ITAGS.iter().position(|&i| i == itag)
}

/// Static metadata for one video identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatInfo {
    pub itag: Itag,
    pub quality: VideoQuality,
    pub container: Container,
    pub resolution: Resolution,
}

impl FormatInfo {
    pub fn from_itag(itag: Itag) -> Option<&'static FormatInfo> {
        FORMATS.iter().find(|f| f.itag == itag)
    }
}

impl std::fmt::Display for FormatInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.itag,
            self.container.as_str(),
            self.resolution
        )
    }
}

const fn entry(
    itag: Itag,
    quality: VideoQuality,
    container: Container,
    width: u32,
    height: u32,
) -> FormatInfo {
    FormatInfo {
        itag,
        quality,
        container,
        resolution: Resolution::new(width, height),
    }
}

/// Metadata for every known video identifier, in the same ascending-quality
/// order as [`ALL_VIDEO_ITAGS`].
pub static FORMATS: [FormatInfo; 17] = [
    entry(160, VideoQuality::Sd, Container::Mp4, 256, 144),
    entry(278, VideoQuality::Sd, Container::Webm, 256, 144),
    entry(133, VideoQuality::Sd, Container::Mp4, 426, 240),
    entry(242, VideoQuality::Sd, Container::Webm, 426, 240),
    entry(243, VideoQuality::Sd, Container::Webm, 640, 360),
    entry(134, VideoQuality::Sd, Container::Mp4, 640, 360),
    entry(244, VideoQuality::Sd, Container::Webm, 854, 480),
    entry(135, VideoQuality::Sd, Container::Mp4, 854, 480),
    entry(247, VideoQuality::Hd, Container::Webm, 1280, 720),
    entry(136, VideoQuality::Hd, Container::Mp4, 1280, 720),
    entry(248, VideoQuality::Hd, Container::Webm, 1920, 1080),
    entry(137, VideoQuality::Hd, Container::Mp4, 1920, 1080),
    entry(271, VideoQuality::Uhd4k, Container::Webm, 2560, 1440),
    entry(264, VideoQuality::Uhd4k, Container::Mp4, 2560, 1440),
    entry(266, VideoQuality::Uhd4k, Container::Mp4, 3840, 2160),
    entry(138, VideoQuality::Uhd4k, Container::Mp4, 3840, 2160),
    entry(313, VideoQuality::Uhd4k, Container::Webm, 3840, 2160),
];
