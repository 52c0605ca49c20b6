//! Stand-ins for remote services when running with `--dry-run`.

use async_trait::async_trait;
use fakebuzz_application::{
    ImageArtifact, ImageSearch, PostReceipt, PublishError, Publisher, SearchError,
};
use fakebuzz_domain::{ImageSearchQuery, RawImageItem};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Logs each message and returns a synthetic receipt (`dry-run-1`, ...).
#[derive(Debug, Default)]
pub struct DryRunPublisher {
    posted: AtomicU64,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Publisher for DryRunPublisher {
    async fn publish(
        &self,
        text: &str,
        image: Option<&ImageArtifact>,
    ) -> Result<PostReceipt, PublishError> {
        let n = self.posted.fetch_add(1, Ordering::Relaxed) + 1;
        match image {
            Some(image) => info!(
                "[dry run] would post {:?} with {} ({} bytes from {})",
                text,
                image.path().display(),
                image.size(),
                image.source_url()
            ),
            None => info!("[dry run] would post {:?}", text),
        }
        Ok(PostReceipt {
            id: format!("dry-run-{}", n),
            with_image: image.is_some(),
        })
    }
}

/// Image search that never finds anything, for dry runs without Google
/// credentials.
#[derive(Debug, Default)]
pub struct NoImageSearch;

#[async_trait]
impl ImageSearch for NoImageSearch {
    async fn search(&self, query: &ImageSearchQuery) -> Result<Vec<RawImageItem>, SearchError> {
        debug!("[dry run] image search disabled, skipping {:?}", query.text());
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakebuzz_domain::ImageCandidate;

    #[tokio::test]
    async fn test_no_image_search_is_empty() {
        let query = ImageSearchQuery::new("dog").unwrap();
        assert!(NoImageSearch.search(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_receipts_are_numbered() {
        let publisher = DryRunPublisher::new();
        let dir = tempfile::tempdir().unwrap();
        let candidate =
            ImageCandidate::parse(0, &RawImageItem::new("https://e.com/cat.gif")).unwrap();
        let image = ImageArtifact::write(Some(dir.path()), &candidate, b"GIF89a").unwrap();

        let first = publisher.publish("one", None).await.unwrap();
        let second = publisher.publish("two", Some(&image)).await.unwrap();

        assert_eq!(first.id, "dry-run-1");
        assert!(!first.with_image);
        assert_eq!(second.id, "dry-run-2");
        assert!(second.with_image);
        // the publisher never deletes the artifact itself
        assert!(image.path().exists());
    }
}
