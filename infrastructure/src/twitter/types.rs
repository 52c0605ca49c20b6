//! Request and response bodies for the media upload and tweet endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct MediaUploadResponse {
    pub media_id_string: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TweetRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<TweetMedia>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TweetMedia {
    pub media_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TweetResponse {
    pub data: TweetData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TweetData {
    pub id: String,
}

/// Error bodies come in two shapes: v2 problem details and v1.1 error lists.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorItem {
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    pub fn message(body: &str) -> String {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        parsed
            .detail
            .or_else(|| parsed.errors.into_iter().next().map(|e| e.message))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.chars().take(200).collect())
    }
}
