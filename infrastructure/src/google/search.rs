//! `GET customsearch/v1?searchType=image`

use super::types::{ErrorResponse, SearchResponse};
use async_trait::async_trait;
use fakebuzz_application::{ImageSearch, SearchError};
use fakebuzz_domain::{ImageSearchQuery, RawImageItem};
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Image search backed by a Programmable Search Engine.
pub struct GoogleImageSearch {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    cse_id: String,
}

impl GoogleImageSearch {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, cse_id: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            cse_id: cse_id.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn params(&self, query: &ImageSearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("cx", self.cse_id.clone()),
            ("q", query.text().to_string()),
            ("searchType", "image".to_string()),
            ("fileType", query.file_types_param()),
            ("num", query.count().to_string()),
            (
                "safe",
                if query.safe_search { "active" } else { "off" }.to_string(),
            ),
        ];
        if let Some(rights) = query.rights {
            params.push(("rights", rights.as_str().to_string()));
        }
        if let Some(size) = query.size {
            params.push(("imgSize", size.as_str().to_string()));
        }
        params
    }
}

/// Parse a successful response body.
pub(crate) fn parse_items(body: &str) -> Result<Vec<RawImageItem>, SearchError> {
    serde_json::from_str::<SearchResponse>(body)
        .map(|r| r.items)
        .map_err(|e| SearchError::Parse(e.to_string()))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|r| r.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

#[async_trait]
impl ImageSearch for GoogleImageSearch {
    async fn search(&self, query: &ImageSearchQuery) -> Result<Vec<RawImageItem>, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.params(query))
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let items = parse_items(&body)?;
        debug!("Image search for {:?} returned {} items", query.text(), items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response, serve};
    use fakebuzz_domain::{ImageSize, UsageRights};
    use std::time::Duration;

    fn search(base: &str) -> GoogleImageSearch {
        let client = crate::http::build_client(Duration::from_secs(5), "test").unwrap();
        GoogleImageSearch::new(client, "KEY", "CX").with_endpoint(format!("{}/customsearch/v1", base))
    }

    #[test]
    fn test_parse_items() {
        let body = r#"{
            "kind": "customsearch#search",
            "items": [
                {"link": "https://e.com/a.png", "mime": "image/png", "title": "A"},
                {"title": "no link"}
            ]
        }"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].link.as_deref(), Some("https://e.com/a.png"));
        assert_eq!(items[0].mime.as_deref(), Some("image/png"));
        assert_eq!(items[1].link, None);
    }

    #[test]
    fn test_missing_items_means_no_results() {
        assert!(parse_items(r#"{"kind": "customsearch#search"}"#).unwrap().is_empty());
        assert!(matches!(parse_items("not json"), Err(SearchError::Parse(_))));
    }

    #[test]
    fn test_query_parameters() {
        let query = ImageSearchQuery::new("dog pizza")
            .unwrap()
            .with_count(5)
            .with_safe_search(false)
            .with_rights(Some(UsageRights::PublicDomain))
            .with_size(Some(ImageSize::Large));
        let params = search("http://localhost").params(&query);
        let get = |k: &str| params.iter().find(|(n, _)| *n == k).map(|(_, v)| v.as_str());

        assert_eq!(get("q"), Some("dog pizza"));
        assert_eq!(get("searchType"), Some("image"));
        assert_eq!(get("fileType"), Some("gif,png,jpg"));
        assert_eq!(get("num"), Some("5"));
        assert_eq!(get("safe"), Some("off"));
        assert_eq!(get("rights"), Some(UsageRights::PublicDomain.as_str()));
        assert_eq!(get("imgSize"), Some("large"));
    }

    #[tokio::test]
    async fn test_search_round_trip() {
        let body = br#"{"items": [{"link": "https://e.com/dog.jpg", "mime": "image/jpeg"}]}"#;
        let (base, requests) = serve(vec![response("200 OK", "application/json", body)]).await;

        let query = ImageSearchQuery::new("dog").unwrap();
        let items = search(&base).search(&query).await.unwrap();

        assert_eq!(items, vec![RawImageItem::new("https://e.com/dog.jpg").with_mime("image/jpeg")]);
        let request = requests.lock().unwrap()[0].clone();
        assert!(request.starts_with("GET /customsearch/v1?key=KEY&cx=CX&q=dog&searchType=image"));
        assert!(request.contains("safe=active"));
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_message() {
        let body = br#"{"error": {"code": 403, "message": "Daily limit exceeded"}}"#;
        let (base, _) = serve(vec![response("403 Forbidden", "application/json", body)]).await;

        let query = ImageSearchQuery::new("dog").unwrap();
        let err = search(&base).search(&query).await.unwrap_err();

        match err {
            SearchError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Daily limit exceeded");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
