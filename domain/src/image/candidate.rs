//! Image candidates parsed from search results.

use serde::{Deserialize, Serialize};
use url::Url;

/// One result item exactly as the search API returned it.
///
/// Every field is optional: APIs occasionally return items without a link,
/// and those are skipped rather than treated as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImageItem {
    pub link: Option<String>,
    pub mime: Option<String>,
}

impl RawImageItem {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// A downloadable image: URL, file extension and search rank (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCandidate {
    pub url: String,
    /// Lower-case extension without the dot, e.g. `png`
    pub extension: String,
    pub rank: usize,
}

impl ImageCandidate {
    /// Parse a raw item at position `rank`.
    ///
    /// Returns `None` when the link is missing, is not an absolute http(s)
    /// URL, or no extension can be derived from either the URL path or the
    /// MIME type.
    pub fn parse(rank: usize, item: &RawImageItem) -> Option<Self> {
        let link = item.link.as_deref()?.trim();
        let url = Url::parse(link).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let extension = extension_from_url(&url)
            .or_else(|| item.mime.as_deref().and_then(extension_from_mime))?;
        Some(Self {
            url: url.to_string(),
            extension,
            rank,
        })
    }

    /// Extension with a leading dot, e.g. `.png`.
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// Substring after the last `.` of the final path segment, ignoring the
/// query string and fragment.
fn extension_from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let (_, ext) = segment.rsplit_once('.')?;
    normalize_extension(ext)
}

fn extension_from_mime(mime: &str) -> Option<String> {
    let subtype = mime.trim().strip_prefix("image/")?;
    let subtype = subtype.split(';').next().unwrap_or_default();
    match subtype {
        "jpeg" | "pjpeg" => Some("jpg".to_string()),
        other => normalize_extension(other),
    }
}

fn normalize_extension(ext: &str) -> Option<String> {
    if ext.is_empty() || ext.len() > 5 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
