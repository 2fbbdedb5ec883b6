//! Helpers for reading the encoded `video_info` key-value document.
//!
//! The document is `&`-separated with `=`-keyed pairs; values are
//! percent-encoded. The `adaptive_fmts` value is itself a comma-separated
//! list of sub-records, each an encoded key-value group of its own.

use crate::catalog::Itag;
use crate::error::VideoInfoError;

pub const ADAPTIVE_FMTS: &str = "adaptive_fmts";
const ITAG_KEY: &str = "itag";

/// Decoded value of the first `name` pair in `document`, or `None` if the
/// key is absent or its value does not decode.
pub fn query_param(document: &str, name: &str) -> Option<String> {
    for pair in document.split('&') {
        if let Some((key, value)) = pair.split_once('=')
            && key == name
        {
            return urlencoding::decode(value).ok().map(|v| v.into_owned());
        }
    }
    None
}

/// Raw sub-records of the `adaptive_fmts` field, one per stream variant.
///
/// Each entry is the sub-record's singly-decoded text, e.g.
/// `itag=160&type=video`. The field being absent is an error: it means the
/// upstream document shape changed, not that there are no formats.
pub fn adaptive_formats(document: &str) -> Result<Vec<String>, VideoInfoError> {
    let value = query_param(document, ADAPTIVE_FMTS)
        .ok_or(VideoInfoError::MissingField(ADAPTIVE_FMTS))?;
    Ok(value.split(',').map(str::to_owned).collect())
}

/// Identifier of one sub-record, or `None` if the `itag` key is missing or
/// not numeric.
pub fn record_itag(record: &str) -> Option<Itag> {
    query_param(record, ITAG_KEY)?.parse().ok()
}
