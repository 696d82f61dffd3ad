use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use spool_platform::{PlatformClient, PlatformError, ThreadPublisher};

#[derive(Debug, Clone, PartialEq)]
struct RecordedPost {
    text: String,
    in_reply_to: Option<String>,
    media_ids: Vec<String>,
}

/// Mock platform assigning sequential ids from 100, with optional failure
/// injection by post index.
struct MockPlatform {
    posts: Mutex<Vec<RecordedPost>>,
    uploads: Mutex<Vec<PathBuf>>,
    fail_at: Option<usize>,
    fail_upload_at: Option<usize>,
}

impl MockPlatform {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            fail_at: None,
            fail_upload_at: None,
        })
    }

    fn failing_at(index: usize) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            fail_at: Some(index),
            fail_upload_at: None,
        })
    }

    fn failing_upload_at(index: usize) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            fail_at: None,
            fail_upload_at: Some(index),
        })
    }

    fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn create_post(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
        media_ids: &[String],
    ) -> Result<String, PlatformError> {
        let index = self.posts.lock().unwrap().len();
        if self.fail_at == Some(index) {
            return Err(PlatformError::Api {
                status: 403,
                message: "duplicate content".to_string(),
            });
        }

        self.posts.lock().unwrap().push(RecordedPost {
            text: text.to_string(),
            in_reply_to: in_reply_to.map(|id| id.to_string()),
            media_ids: media_ids.to_vec(),
        });

        Ok((100 + index).to_string())
    }

    async fn upload_media(&self, path: &Path) -> Result<String, PlatformError> {
        let index = self.uploads.lock().unwrap().len();
        if self.fail_upload_at == Some(index) {
            return Err(PlatformError::Api {
                status: 400,
                message: "unsupported media".to_string(),
            });
        }

        self.uploads.lock().unwrap().push(path.to_path_buf());
        Ok(format!("media-{}", index))
    }
}

fn posts(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[tokio::test]
async fn test_publish_links_reply_chain_in_order() {
    let platform = MockPlatform::new();
    let publisher = ThreadPublisher::new(platform.clone());

    let ids = publisher
        .publish(&posts(&["first", "second", "third"]), None)
        .await
        .unwrap();

    assert_eq!(ids, vec!["100", "101", "102"]);

    let recorded = platform.posts();
    assert_eq!(recorded[0].in_reply_to, None);
    assert_eq!(recorded[1].in_reply_to, Some("100".to_string()));
    assert_eq!(recorded[2].in_reply_to, Some("101".to_string()));
}

#[tokio::test]
async fn test_publish_two_posts_scenario() {
    let platform = MockPlatform::new();
    let publisher = ThreadPublisher::new(platform.clone());

    let ids = publisher
        .publish(
            &posts(&["Tweet 1 about quantum", "Tweet 2 #quantum"]),
            None,
        )
        .await
        .unwrap();

    assert_eq!(ids, vec!["100", "101"]);
    assert_eq!(platform.posts()[1].in_reply_to, Some("100".to_string()));
}

#[tokio::test]
async fn test_failure_mid_chain_reports_partial_result() {
    let platform = MockPlatform::failing_at(2);
    let publisher = ThreadPublisher::new(platform.clone());

    let err = publisher
        .publish(&posts(&["a", "b", "c", "d"]), None)
        .await
        .unwrap_err();

    assert_eq!(err.completed_ids, vec!["100", "101"]);
    assert_eq!(err.failed_index, 2);
    // Nothing past the failing index was attempted.
    assert_eq!(platform.posts().len(), 2);
}

#[tokio::test]
async fn test_failure_on_first_post_completes_nothing() {
    let platform = MockPlatform::failing_at(0);
    let publisher = ThreadPublisher::new(platform.clone());

    let err = publisher.publish(&posts(&["a", "b"]), None).await.unwrap_err();

    assert!(err.completed_ids.is_empty());
    assert_eq!(err.failed_index, 0);
    assert!(platform.posts().is_empty());
}

#[tokio::test]
async fn test_media_is_uploaded_and_attached_per_index() {
    let platform = MockPlatform::new();
    let publisher = ThreadPublisher::new(platform.clone());

    let media = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
    let ids = publisher
        .publish(&posts(&["a", "b", "c"]), Some(&media))
        .await
        .unwrap();

    assert_eq!(ids.len(), 3);

    let recorded = platform.posts();
    assert_eq!(recorded[0].media_ids, vec!["media-0"]);
    assert_eq!(recorded[1].media_ids, vec!["media-1"]);
    // More posts than media files: the rest go out bare.
    assert!(recorded[2].media_ids.is_empty());
}

#[tokio::test]
async fn test_upload_failure_counts_as_that_posts_failure() {
    let platform = MockPlatform::failing_upload_at(1);
    let publisher = ThreadPublisher::new(platform.clone());

    let media = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
    let err = publisher
        .publish(&posts(&["a", "b"]), Some(&media))
        .await
        .unwrap_err();

    assert_eq!(err.completed_ids, vec!["100"]);
    assert_eq!(err.failed_index, 1);
    // The failing post was never submitted.
    assert_eq!(platform.posts().len(), 1);
}

#[tokio::test]
async fn test_publish_empty_sequence_is_empty_success() {
    let publisher = ThreadPublisher::new(MockPlatform::new());
    let ids = publisher.publish(&[], None).await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_partial_failure_display_names_index_and_cause() {
    let platform = MockPlatform::failing_at(1);
    let publisher = ThreadPublisher::new(platform);

    let err = publisher.publish(&posts(&["a", "b"]), None).await.unwrap_err();
    let message = err.to_string();

    assert!(message.contains("post 1"));
    assert!(message.contains("1 posts already published"));
}
