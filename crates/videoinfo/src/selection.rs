//! Accumulation and application of format removal rules.

use std::collections::BTreeSet;

use bytes::Bytes;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::catalog::{ALL_VIDEO_ITAGS, FormatInfo, Itag};
use crate::document;
use crate::error::VideoInfoError;

/// Set of identifiers scheduled for removal from a document.
///
/// A plan is an immutable value: each `with_*` constructor consumes the plan
/// and returns a new one, so a finished plan can be replayed against any
/// number of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    removed: BTreeSet<Itag>,
}

impl RemovalPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a single identifier. Scheduling an identifier absent from
    /// the document is a no-op when the plan is applied.
    #[must_use]
    pub fn with_removed(mut self, itag: Itag) -> Self {
        self.removed.insert(itag);
        self
    }

    /// Schedules every identifier ranked above `boundary` in the fixed
    /// ascending-quality order. The boundary itself and everything below it
    /// is kept. A boundary outside the known video identifiers schedules
    /// nothing.
    #[must_use]
    pub fn with_max_itag(mut self, boundary: Itag) -> Self {
        let mut met_boundary = false;
        let mut scheduled = 0usize;
        for &itag in ALL_VIDEO_ITAGS.iter() {
            if met_boundary && self.removed.insert(itag) {
                scheduled += 1;
            }
            if itag == boundary {
                met_boundary = true;
            }
        }
        debug!("ceiling at itag {boundary}: {scheduled} identifiers scheduled");
        self
    }

    /// Keeps only the identifiers named in the comma-separated `retained`
    /// list: the whole video identifier universe is scheduled, then the
    /// listed entries are taken back out, un-queueing them even if an
    /// earlier rule scheduled them. Entries are trimmed; an entry that is
    /// not a valid identifier fails the whole call before the plan is
    /// touched. Listed identifiers outside the universe are ignored.
    pub fn with_retained(mut self, retained: &str) -> Result<Self, VideoInfoError> {
        let itags = retained
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                entry
                    .parse::<Itag>()
                    .map_err(|_| VideoInfoError::InvalidItag(entry.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.removed.extend(ALL_VIDEO_ITAGS);
        for itag in &itags {
            self.removed.remove(itag);
        }
        debug!("retain-list {itags:?}: {} identifiers scheduled", self.removed.len());
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Scheduled identifiers in ascending order.
    pub fn removed(&self) -> impl Iterator<Item = Itag> + '_ {
        self.removed.iter().copied()
    }
}

/// Applies `plan` to `video_info`, returning the reduced document.
///
/// Every scheduled sub-record is deleted from the working text together with
/// one neighboring comma: the record's singly-decoded text is re-encoded
/// with the document's percent-encoding scheme and removed both as
/// `<record>,` and as `,<record>`. Interior removals therefore close the gap
/// between their neighbors, and edge removals drop the right delimiter,
/// without reserializing any untouched region of the document.
pub fn apply_removals(video_info: &str, plan: &RemovalPlan) -> Result<String, VideoInfoError> {
    let mut result = video_info.to_owned();
    for itag in plan.removed() {
        let marker = format!("itag={itag}");
        for record in document::adaptive_formats(&result)? {
            if record.contains(&marker) {
                let encoded = urlencoding::encode(&record);
                debug!("removing sub-record for itag {itag}");
                result = result
                    .replace(&format!("{encoded},"), "")
                    .replace(&format!(",{encoded}"), "");
            }
        }
    }
    Ok(result)
}

/// Format selector over one encoded `video_info` document.
///
/// The original document is held unchanged for the selector's lifetime;
/// removal rules only accumulate in a [`RemovalPlan`] until
/// [`filtered`](Self::filtered) materializes the reduced document. A selector
/// is single-owner state: share it across threads only behind external
/// synchronization.
#[derive(Debug, Clone)]
pub struct FormatSelector {
    video_info: String,
    plan: RemovalPlan,
}

impl FormatSelector {
    pub fn new(video_info: impl Into<String>) -> Self {
        Self {
            video_info: video_info.into(),
            plan: RemovalPlan::new(),
        }
    }

    /// Schedules one identifier for removal.
    pub fn remove_format(&mut self, itag: Itag) {
        self.plan = std::mem::take(&mut self.plan).with_removed(itag);
    }

    /// Caps quality at `boundary`; `None` leaves the plan untouched.
    pub fn set_max_format(&mut self, boundary: Option<Itag>) {
        let Some(boundary) = boundary else {
            return;
        };
        self.plan = std::mem::take(&mut self.plan).with_max_itag(boundary);
    }

    /// Keeps only the identifiers in the comma-separated `retained` list;
    /// `None` leaves the plan untouched. On a parse failure the plan is left
    /// exactly as it was.
    pub fn switch_to_format(&mut self, retained: Option<&str>) -> Result<(), VideoInfoError> {
        let Some(retained) = retained else {
            return Ok(());
        };
        self.plan = self.plan.clone().with_retained(retained)?;
        Ok(())
    }

    /// The accumulated removal plan.
    pub fn plan(&self) -> &RemovalPlan {
        &self.plan
    }

    /// Materializes the reduced document as UTF-8 bytes. Calling this again
    /// without scheduling further removals returns byte-identical output.
    pub fn filtered(&self) -> Result<Bytes, VideoInfoError> {
        apply_removals(&self.video_info, &self.plan).map(Bytes::from)
    }

    /// Classified formats advertised by the original, unfiltered document.
    ///
    /// Sub-records are scanned in document order; the scan ends at the first
    /// record whose identifier is not a known video format, so audio records
    /// and anything after them are not collected.
    pub fn supported_formats(
        &self,
    ) -> Result<FxHashSet<&'static FormatInfo>, VideoInfoError> {
        let mut formats = FxHashSet::default();
        for record in document::adaptive_formats(&self.video_info)? {
            let Some(info) = document::record_itag(&record).and_then(FormatInfo::from_itag)
            else {
                break;
            };
            formats.insert(info);
        }
        Ok(formats)
    }
}
