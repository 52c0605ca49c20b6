//! Publish Headline use case.
//!
//! Posts a message with the acquired image, if any, and releases the image
//! artifact whatever the outcome of the post.

use crate::ports::image::ImageResult;
use crate::ports::progress::BotProgressNotifier;
use crate::ports::publisher::{PostReceipt, PublishError, Publisher};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for publishing a message.
#[derive(Clone)]
pub struct PublishHeadlineUseCase {
    publisher: Arc<dyn Publisher>,
}

impl PublishHeadlineUseCase {
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }

    /// Publish `text` with `image`.
    ///
    /// Takes ownership of the image so the artifact is released on every
    /// path before this returns.
    pub async fn execute(
        &self,
        text: &str,
        image: ImageResult,
        progress: &dyn BotProgressNotifier,
    ) -> Result<PostReceipt, PublishError> {
        let outcome = self.publisher.publish(text, image.artifact()).await;

        if let ImageResult::Found(artifact) = image {
            let path = artifact.path().display().to_string();
            if let Err(e) = artifact.release() {
                warn!("Could not delete image file {}: {}", path, e);
            }
        }

        match &outcome {
            Ok(receipt) => {
                info!("Tweet success (id {})", receipt.id);
                progress.on_published(receipt);
            }
            Err(e) => {
                warn!("Publish failed: {}", e);
                progress.on_publish_failed(&e.to_string());
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::image::ImageArtifact;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use fakebuzz_domain::{ImageCandidate, RawImageItem};
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Records what it was asked to post and whether the artifact existed
    /// at that moment.
    struct MockPublisher {
        fail: bool,
        calls: Mutex<Vec<(String, Option<PathBuf>, bool)>>,
    }

    impl MockPublisher {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Publisher for MockPublisher {
        async fn publish(
            &self,
            text: &str,
            image: Option<&ImageArtifact>,
        ) -> Result<PostReceipt, PublishError> {
            let path = image.map(|a| a.path().to_path_buf());
            let existed = path.as_ref().is_some_and(|p| p.exists());
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), path, existed));
            if self.fail {
                return Err(PublishError::Api {
                    status: 403,
                    message: "duplicate content".to_string(),
                });
            }
            Ok(PostReceipt {
                id: "1".to_string(),
                with_image: image.is_some(),
            })
        }
    }

    fn artifact(dir: &std::path::Path) -> ImageArtifact {
        let candidate =
            ImageCandidate::parse(0, &RawImageItem::new("https://e.com/cat.png")).unwrap();
        ImageArtifact::write(Some(dir), &candidate, b"\x89PNG").unwrap()
    }

    #[tokio::test]
    async fn test_text_only_publish() {
        let publisher = Arc::new(MockPublisher::new(false));
        let uc = PublishHeadlineUseCase::new(publisher.clone());

        let receipt = uc
            .execute("Hello #world", ImageResult::NotFound, &NoProgress)
            .await
            .unwrap();

        assert!(!receipt.with_image);
        let calls = publisher.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Hello #world");
        assert!(calls[0].1.is_none());
    }

    #[tokio::test]
    async fn test_artifact_deleted_after_successful_publish() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = Arc::new(MockPublisher::new(false));
        let uc = PublishHeadlineUseCase::new(publisher.clone());

        let receipt = uc
            .execute("Cats #cats", ImageResult::Found(artifact(dir.path())), &NoProgress)
            .await
            .unwrap();

        assert!(receipt.with_image);
        let calls = publisher.calls.lock().unwrap();
        let path = calls[0].1.clone().unwrap();
        assert!(calls[0].2, "artifact must exist while publishing");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_artifact_deleted_after_failed_publish() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = Arc::new(MockPublisher::new(true));
        let uc = PublishHeadlineUseCase::new(publisher.clone());

        let result = uc
            .execute("Cats #cats", ImageResult::Found(artifact(dir.path())), &NoProgress)
            .await;

        assert!(matches!(result, Err(PublishError::Api { status: 403, .. })));
        let path = publisher.calls.lock().unwrap()[0].1.clone().unwrap();
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
