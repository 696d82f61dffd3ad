use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use spool_cli::{Depth, GeneratorError, ThreadGenerator};
use spool_llm::{GenerateClient, GenerationConfig, ResearchClient, ThreadComposer};
use spool_persist::ThreadStore;
use spool_platform::{PlatformClient, PlatformError, ThreadPublisher};
use spool_types::ThreadConfig;
use tempfile::TempDir;

const RESEARCH_JSON: &str =
    r#"{"analysis": "...", "key_findings": ["a", "b"], "citations": ["c1"]}"#;
const COMPOSE_JSON: &str = r#"["Tweet 1 about quantum", "Tweet 2 #quantum"]"#;

struct CannedBackend {
    replies: Mutex<VecDeque<String>>,
}

impl CannedBackend {
    fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
        })
    }
}

#[async_trait]
impl GenerateClient for CannedBackend {
    async fn generate(&self, _prompt: &str, _config: &GenerationConfig) -> anyhow::Result<String> {
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned reply left"))
    }
}

#[derive(Debug, Clone)]
struct RecordedPost {
    in_reply_to: Option<String>,
}

struct MockPlatform {
    posts: Mutex<Vec<RecordedPost>>,
    fail_at: Option<usize>,
}

impl MockPlatform {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            fail_at: None,
        })
    }

    fn failing_at(index: usize) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            fail_at: Some(index),
        })
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn create_post(
        &self,
        _text: &str,
        in_reply_to: Option<&str>,
        _media_ids: &[String],
    ) -> Result<String, PlatformError> {
        let index = self.posts.lock().unwrap().len();
        if self.fail_at == Some(index) {
            return Err(PlatformError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }

        self.posts.lock().unwrap().push(RecordedPost {
            in_reply_to: in_reply_to.map(|id| id.to_string()),
        });
        Ok((100 + index).to_string())
    }

    async fn upload_media(&self, _path: &Path) -> Result<String, PlatformError> {
        Ok("media-0".to_string())
    }
}

fn generator(
    backend: Arc<CannedBackend>,
    platform: Arc<MockPlatform>,
    dir: &TempDir,
) -> ThreadGenerator {
    ThreadGenerator::new(
        ResearchClient::new(backend.clone()),
        ThreadComposer::new(backend),
        ThreadPublisher::new(platform),
        ThreadStore::new(dir.path().join("history.json")),
        ThreadConfig::default(),
    )
}

#[tokio::test]
async fn test_research_and_generate_produces_a_draft() {
    let dir = TempDir::new().unwrap();
    let gen = generator(
        CannedBackend::new(&[RESEARCH_JSON, COMPOSE_JSON]),
        MockPlatform::new(),
        &dir,
    );

    let thread = gen
        .research_and_generate("quantum computing", Depth::Comprehensive)
        .await
        .unwrap();

    assert_eq!(thread.topic, "quantum computing");
    assert_eq!(thread.tweets.len(), 2);
    assert_eq!(
        thread.research_data.report().unwrap().key_findings,
        vec!["a", "b"]
    );
    assert!(thread.tweet_ids.is_none());
}

#[tokio::test]
async fn test_post_thread_assigns_ids_and_links_chain() {
    let dir = TempDir::new().unwrap();
    let platform = MockPlatform::new();
    let gen = generator(
        CannedBackend::new(&[RESEARCH_JSON, COMPOSE_JSON]),
        platform.clone(),
        &dir,
    );

    let thread = gen
        .research_and_generate("quantum computing", Depth::Comprehensive)
        .await
        .unwrap();
    let posted = gen.post_thread(thread, None).await.unwrap();

    assert_eq!(
        posted.tweet_ids,
        Some(vec!["100".to_string(), "101".to_string()])
    );

    let recorded = platform.posts.lock().unwrap().clone();
    assert_eq!(recorded[0].in_reply_to, None);
    assert_eq!(recorded[1].in_reply_to, Some("100".to_string()));
}

#[tokio::test]
async fn test_publish_updates_saved_entry_without_duplicating() {
    let dir = TempDir::new().unwrap();
    let gen = generator(
        CannedBackend::new(&[RESEARCH_JSON, COMPOSE_JSON]),
        MockPlatform::new(),
        &dir,
    );

    let thread = gen
        .research_and_generate("quantum computing", Depth::Comprehensive)
        .await
        .unwrap();
    gen.save_thread(&thread).unwrap();

    gen.post_thread(thread, None).await.unwrap();

    let saved = gen.load_threads().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].is_posted());
}

#[tokio::test]
async fn test_partial_failure_keeps_draft_and_payload() {
    let dir = TempDir::new().unwrap();
    let gen = generator(
        CannedBackend::new(&[RESEARCH_JSON, COMPOSE_JSON]),
        MockPlatform::failing_at(1),
        &dir,
    );

    let thread = gen
        .research_and_generate("quantum computing", Depth::Comprehensive)
        .await
        .unwrap();
    gen.save_thread(&thread).unwrap();

    match gen.post_thread(thread, None).await {
        Err(GeneratorError::Publish(partial)) => {
            assert_eq!(partial.completed_ids, vec!["100"]);
            assert_eq!(partial.failed_index, 1);
        }
        other => panic!("expected publish failure, got {:?}", other.map(|_| ())),
    }

    // The stored entry is still the draft.
    let saved = gen.load_threads().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(!saved[0].is_posted());
}

#[tokio::test]
async fn test_oversized_composed_posts_are_truncated() {
    let dir = TempDir::new().unwrap();
    let long_post = "x".repeat(400);
    let compose = format!(r#"["{}"]"#, long_post);
    let gen = generator(
        CannedBackend::new(&[RESEARCH_JSON, &compose]),
        MockPlatform::new(),
        &dir,
    );

    let thread = gen
        .research_and_generate("topic", Depth::Comprehensive)
        .await
        .unwrap();

    assert_eq!(thread.tweets[0].chars().count(), 280);
    assert!(thread.tweets[0].ends_with("..."));
}

#[tokio::test]
async fn test_quick_depth_researches_without_grounding() {
    let dir = TempDir::new().unwrap();
    // No citations in the reply; quick mode never asks for them.
    let gen = generator(
        CannedBackend::new(&[
            r#"{"analysis": "a", "key_findings": ["f"]}"#,
            r#"["one post"]"#,
        ]),
        MockPlatform::new(),
        &dir,
    );

    let thread = gen
        .research_and_generate("topic", Depth::Quick)
        .await
        .unwrap();

    assert!(thread
        .research_data
        .report()
        .unwrap()
        .citations
        .is_empty());
}

#[tokio::test]
async fn test_save_thread_to_explicit_path() {
    let dir = TempDir::new().unwrap();
    let gen = generator(
        CannedBackend::new(&[RESEARCH_JSON, COMPOSE_JSON]),
        MockPlatform::new(),
        &dir,
    );

    let thread = gen
        .research_and_generate("topic", Depth::Comprehensive)
        .await
        .unwrap();

    let alt: PathBuf = dir.path().join("alt.json");
    gen.save_thread_to(&thread, &alt).unwrap();

    assert!(gen.load_threads().unwrap().is_empty());
    assert_eq!(gen.load_threads_from(&alt).unwrap().len(), 1);
}
