//! Acquire Image use case.
//!
//! Searches for images matching a headline and downloads the first candidate
//! that succeeds:
//!
//! 1. Blank query → [`ImageResult::NotFound`] without any request
//! 2. One search request; a failed search is logged and yields `NotFound`
//! 3. Candidates are tried in the order returned by the engine
//! 4. Unparseable items, network errors and non-200 responses are skipped
//! 5. The first 200 response is written to a temp artifact and returned;
//!    later candidates are never fetched

use crate::config::ImageParams;
use crate::ports::image::{ImageArtifact, ImageResult};
use crate::ports::image_fetcher::ImageFetcher;
use crate::ports::image_search::ImageSearch;
use crate::ports::progress::BotProgressNotifier;
use fakebuzz_domain::ImageCandidate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for image acquisition with per-candidate fallback.
#[derive(Clone)]
pub struct AcquireImageUseCase {
    search: Arc<dyn ImageSearch>,
    fetcher: Arc<dyn ImageFetcher>,
    params: ImageParams,
}

impl AcquireImageUseCase {
    pub fn new(
        search: Arc<dyn ImageSearch>,
        fetcher: Arc<dyn ImageFetcher>,
        params: ImageParams,
    ) -> Self {
        Self {
            search,
            fetcher,
            params,
        }
    }

    pub async fn execute(&self, query: &str, progress: &dyn BotProgressNotifier) -> ImageResult {
        let search_query = match self.params.query(query) {
            Ok(q) => q,
            Err(e) => {
                debug!("Skipping image search: {}", e);
                progress.on_no_image();
                return ImageResult::NotFound;
            }
        };

        info!("Searching image for '{}'", search_query.text());
        progress.on_image_search(search_query.text());

        let items = match self.search.search(&search_query).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Image search failed: {}", e);
                progress.on_no_image();
                return ImageResult::NotFound;
            }
        };

        if items.is_empty() {
            info!("No image found for '{}'", search_query.text());
            progress.on_no_image();
            return ImageResult::NotFound;
        }

        for (rank, item) in items.iter().enumerate() {
            let Some(candidate) = ImageCandidate::parse(rank, item) else {
                warn!("Image {} has no usable link in search response", rank);
                progress.on_image_skipped(rank, "no usable link");
                continue;
            };

            debug!("Image {}: {}", rank, candidate.url);
            progress.on_image_candidate(&candidate);

            match self.try_download(&candidate).await {
                Ok(artifact) => {
                    info!(
                        "Downloaded image {} ({} bytes) to {}",
                        candidate.url,
                        artifact.size(),
                        artifact.path().display()
                    );
                    return ImageResult::Found(artifact);
                }
                Err(reason) => {
                    warn!("Failed to download image {}: {}", candidate.url, reason);
                    progress.on_image_skipped(rank, &reason);
                }
            }
        }

        info!("No image found after {} candidates", items.len());
        progress.on_no_image();
        ImageResult::NotFound
    }

    async fn try_download(&self, candidate: &ImageCandidate) -> Result<ImageArtifact, String> {
        let body = self
            .fetcher
            .fetch(&candidate.url)
            .await
            .map_err(|e| e.to_string())?;

        if !body.is_ok() {
            return Err(format!("HTTP status {}", body.status));
        }

        ImageArtifact::write(self.params.temp_dir.as_deref(), candidate, &body.bytes)
            .map_err(|e| format!("could not write artifact: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::image_fetcher::{FetchError, FetchedBody};
    use crate::ports::image_search::SearchError;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use fakebuzz_domain::{ImageSearchQuery, RawImageItem};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // === Mock implementations ===

    struct MockSearch {
        result: Mutex<Option<Result<Vec<RawImageItem>, SearchError>>>,
        queries: Mutex<Vec<ImageSearchQuery>>,
    }

    impl MockSearch {
        fn returning(items: Vec<RawImageItem>) -> Self {
            Self {
                result: Mutex::new(Some(Ok(items))),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: SearchError) -> Self {
            Self {
                result: Mutex::new(Some(Err(error))),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ImageSearch for MockSearch {
        async fn search(
            &self,
            query: &ImageSearchQuery,
        ) -> Result<Vec<RawImageItem>, SearchError> {
            self.queries.lock().unwrap().push(query.clone());
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Serves canned responses per URL and records every fetched URL.
    struct MockFetcher {
        responses: HashMap<String, Result<FetchedBody, ()>>,
        fetched: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        fn new(responses: Vec<(&str, Result<FetchedBody, ()>)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(url, r)| (url.to_string(), r))
                    .collect(),
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedBody, FetchError> {
            self.fetched.lock().unwrap().push(url.to_string());
            match self.responses.get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(())) => Err(FetchError::Network("connection reset".to_string())),
                None => Ok(FetchedBody::status(404)),
            }
        }
    }

    fn use_case(
        search: Arc<MockSearch>,
        fetcher: Arc<MockFetcher>,
        dir: &std::path::Path,
    ) -> AcquireImageUseCase {
        AcquireImageUseCase::new(search, fetcher, ImageParams::default().with_temp_dir(dir))
    }

    #[tokio::test]
    async fn test_zero_results_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::returning(vec![]));
        let fetcher = Arc::new(MockFetcher::new(vec![]));
        let uc = use_case(search.clone(), fetcher.clone(), dir.path());

        let result = uc.execute("xyzzy-no-such-thing", &NoProgress).await;

        assert!(matches!(result, ImageResult::NotFound));
        assert_eq!(search.queries.lock().unwrap().len(), 1);
        assert!(fetcher.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_first_successful_download_wins() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::returning(vec![
            RawImageItem::new("https://a.example/one.png"),
            RawImageItem::new("https://b.example/two.png"),
            RawImageItem::new("https://c.example/three.png"),
        ]));
        let fetcher = Arc::new(MockFetcher::new(vec![
            ("https://a.example/one.png", Ok(FetchedBody::status(404))),
            (
                "https://b.example/two.png",
                Ok(FetchedBody::ok(b"\x89PNG\r\n\x1a\n".to_vec())),
            ),
            ("https://c.example/three.png", Ok(FetchedBody::ok(b"nope".to_vec()))),
        ]));
        let uc = use_case(search, fetcher.clone(), dir.path());

        let result = uc.execute("cute puppies", &NoProgress).await;

        let ImageResult::Found(artifact) = result else {
            panic!("expected an image");
        };
        assert_eq!(artifact.dotted_extension(), ".png");
        assert_eq!(artifact.source_url(), "https://b.example/two.png");
        assert_eq!(std::fs::read(artifact.path()).unwrap(), b"\x89PNG\r\n\x1a\n");
        assert_eq!(
            fetcher.fetched(),
            vec!["https://a.example/one.png", "https://b.example/two.png"]
        );
    }

    #[tokio::test]
    async fn test_malformed_items_and_network_errors_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::returning(vec![
            RawImageItem::default(),
            RawImageItem::new("https://a.example/broken.jpg"),
            RawImageItem::new("https://b.example/ok.gif"),
        ]));
        let fetcher = Arc::new(MockFetcher::new(vec![
            ("https://a.example/broken.jpg", Err(())),
            ("https://b.example/ok.gif", Ok(FetchedBody::ok(b"GIF89a".to_vec()))),
        ]));
        let uc = use_case(search, fetcher.clone(), dir.path());

        let result = uc.execute("broken things", &NoProgress).await;

        assert_eq!(result.artifact().unwrap().extension(), "gif");
        assert_eq!(fetcher.fetched().len(), 2);
    }

    #[tokio::test]
    async fn test_all_candidates_fail_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::returning(vec![
            RawImageItem::new("https://a.example/1.png"),
            RawImageItem::new("https://a.example/2.png"),
        ]));
        let fetcher = Arc::new(MockFetcher::new(vec![]));
        let uc = use_case(search, fetcher.clone(), dir.path());

        let result = uc.execute("nothing works", &NoProgress).await;

        assert!(matches!(result, ImageResult::NotFound));
        assert_eq!(fetcher.fetched().len(), 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_search_error_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::failing(SearchError::Api {
            status: 403,
            message: "quota exceeded".to_string(),
        }));
        let fetcher = Arc::new(MockFetcher::new(vec![]));
        let uc = use_case(search, fetcher.clone(), dir.path());

        let result = uc.execute("anything", &NoProgress).await;

        assert!(matches!(result, ImageResult::NotFound));
        assert!(fetcher.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_skips_search() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::returning(vec![RawImageItem::new(
            "https://a.example/1.png",
        )]));
        let fetcher = Arc::new(MockFetcher::new(vec![]));
        let uc = use_case(search.clone(), fetcher, dir.path());

        let result = uc.execute("   ", &NoProgress).await;

        assert!(matches!(result, ImageResult::NotFound));
        assert!(search.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_carries_filters() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(MockSearch::returning(vec![]));
        let fetcher = Arc::new(MockFetcher::new(vec![]));
        let params = ImageParams {
            result_count: 5,
            temp_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let uc = AcquireImageUseCase::new(search.clone(), fetcher, params);

        uc.execute("famous actor", &NoProgress).await;

        let queries = search.queries.lock().unwrap();
        assert_eq!(queries[0].text(), "famous actor");
        assert_eq!(queries[0].count(), 5);
        assert!(queries[0].safe_search);
    }
}
