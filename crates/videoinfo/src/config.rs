//! Caller-facing selection preferences.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Itag;
use crate::error::VideoInfoError;
use crate::selection::FormatSelector;

/// Format selection preferences, typically deserialized from a caller's
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormatPreferences {
    /// Highest allowed identifier in the ascending-quality order; everything
    /// ranked above it is dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_itag: Option<Itag>,
    /// Comma-separated identifiers to keep, dropping all other video formats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_itags: Option<String>,
    /// Identifiers to drop outright
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_itags: Vec<Itag>,
}

impl FormatPreferences {
    /// Queues every preference on `selector`: explicit removals first, then
    /// the quality ceiling, then the retain-list. A malformed retain-list
    /// fails the call after the other rules have been queued, matching the
    /// per-rule behavior of the selector itself.
    pub fn apply(&self, selector: &mut FormatSelector) -> Result<(), VideoInfoError> {
        for &itag in &self.remove_itags {
            selector.remove_format(itag);
        }
        selector.set_max_format(self.max_itag);
        selector.switch_to_format(self.retain_itags.as_deref())?;
        debug!("applied format preferences: {self:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;

    fn doc_with(itags: &[Itag]) -> String {
        let records: Vec<String> = itags
            .iter()
            .map(|&i| format!("itag%3D{i}%26type%3Dvideo"))
            .collect();
        format!("adaptive_fmts={}", records.join(","))
    }

    fn surviving_itags(doc: &str) -> Vec<Itag> {
        document::adaptive_formats(doc)
            .unwrap()
            .iter()
            .filter_map(|r| document::record_itag(r))
            .collect()
    }

    #[test]
    fn test_preferences_deserialize_from_json() {
        let prefs: FormatPreferences =
            serde_json::from_str(r#"{"max_itag": 134, "remove_itags": [160]}"#).unwrap();
        assert_eq!(prefs.max_itag, Some(134));
        assert_eq!(prefs.retain_itags, None);
        assert_eq!(prefs.remove_itags, vec![160]);
    }

    #[test]
    fn test_preferences_skip_empty_fields_on_serialize() {
        let json = serde_json::to_string(&FormatPreferences::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_apply_ceiling_and_removals() {
        let mut selector = FormatSelector::new(doc_with(&[160, 278, 133, 134, 244, 247]));
        let prefs = FormatPreferences {
            max_itag: Some(134),
            retain_itags: None,
            remove_itags: vec![278],
        };
        prefs.apply(&mut selector).unwrap();
        let out = String::from_utf8(selector.filtered().unwrap().to_vec()).unwrap();
        assert_eq!(surviving_itags(&out), vec![160, 133, 134]);
    }

    #[test]
    fn test_apply_retain_list_wins_last() {
        let mut selector = FormatSelector::new(doc_with(&[160, 247, 137]));
        let prefs = FormatPreferences {
            max_itag: None,
            retain_itags: Some("160,137".to_string()),
            remove_itags: vec![137],
        };
        prefs.apply(&mut selector).unwrap();
        let out = String::from_utf8(selector.filtered().unwrap().to_vec()).unwrap();
        assert_eq!(surviving_itags(&out), vec![160, 137]);
    }

    #[test]
    fn test_apply_malformed_retain_list_is_error() {
        let mut selector = FormatSelector::new(doc_with(&[160]));
        let prefs = FormatPreferences {
            retain_itags: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            prefs.apply(&mut selector).unwrap_err(),
            VideoInfoError::InvalidItag(_)
        ));
    }
}
