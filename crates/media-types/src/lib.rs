use serde::{Deserialize, Serialize};

/// Video quality tier of an adaptive stream variant.
///
/// Ordered by ascending quality, so tiers can be compared directly.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VideoQuality {
    Sd,
    Hd,
    Uhd4k,
}

impl VideoQuality {
    pub fn as_str(&self) -> &str {
        match self {
            VideoQuality::Sd => "sd",
            VideoQuality::Hd => "hd",
            VideoQuality::Uhd4k => "4k",
        }
    }

    pub fn from_str(quality: &str) -> Option<Self> {
        match quality.to_lowercase().as_str() {
            "sd" => Some(VideoQuality::Sd),
            "hd" => Some(VideoQuality::Hd),
            "4k" | "uhd" => Some(VideoQuality::Uhd4k),
            _ => None,
        }
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Container holding an adaptive stream variant.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Mp4,
    Webm,
}

impl Container {
    pub fn as_str(&self) -> &str {
        match self {
            Container::Mp4 => "mp4",
            Container::Webm => "webm",
        }
    }

    pub fn from_str(container: &str) -> Option<Self> {
        match container.to_lowercase().as_str() {
            "mp4" => Some(Container::Mp4),
            "webm" => Some(Container::Webm),
            _ => None,
        }
    }
}

/// Video resolution information.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count, usable as a coarse quality measure.
    #[inline]
    pub fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_display() {
        let r = Resolution::new(1920, 1080);
        assert_eq!(r.to_string(), "1920x1080");
    }

    #[test]
    fn test_resolution_pixels() {
        assert_eq!(Resolution::new(256, 144).pixels(), 36864);
    }

    #[test]
    fn test_quality_ordering() {
        assert!(VideoQuality::Sd < VideoQuality::Hd);
        assert!(VideoQuality::Hd < VideoQuality::Uhd4k);
    }

    #[test]
    fn test_quality_round_trip() {
        for q in [VideoQuality::Sd, VideoQuality::Hd, VideoQuality::Uhd4k] {
            assert_eq!(VideoQuality::from_str(q.as_str()), Some(q));
        }
        assert_eq!(VideoQuality::from_str("8k"), None);
    }

    #[test]
    fn test_container_from_str() {
        assert_eq!(Container::from_str("MP4"), Some(Container::Mp4));
        assert_eq!(Container::from_str("webm"), Some(Container::Webm));
        assert_eq!(Container::from_str("3gp"), None);
    }

    #[test]
    fn test_quality_serde() {
        let json = serde_json::to_string(&VideoQuality::Uhd4k).unwrap();
        assert_eq!(serde_json::from_str::<VideoQuality>(&json).unwrap(), VideoQuality::Uhd4k);
    }
}
