use std::path::PathBuf;

use spool_llm::{ResearchClient, ThreadComposer};
use spool_persist::ThreadStore;
use spool_platform::ThreadPublisher;
use spool_types::{text, Thread, ThreadConfig};

use crate::error::GeneratorError;

/// Research depth for thread generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Depth {
    /// Model knowledge only, no grounded search.
    Quick,
    /// Grounded search with citations.
    Comprehensive,
}

impl std::str::FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(format!(
                "unknown research depth '{}', expected 'quick' or 'comprehensive'",
                other
            )),
        }
    }
}

/// High-level facade tying research, composition, publishing and storage
/// together. Every collaborator is injected; the facade holds no ambient
/// state.
pub struct ThreadGenerator {
    research: ResearchClient,
    composer: ThreadComposer,
    publisher: ThreadPublisher,
    store: ThreadStore,
    thread_config: ThreadConfig,
}

impl ThreadGenerator {
    pub fn new(
        research: ResearchClient,
        composer: ThreadComposer,
        publisher: ThreadPublisher,
        store: ThreadStore,
        thread_config: ThreadConfig,
    ) -> Self {
        Self {
            research,
            composer,
            publisher,
            store,
            thread_config,
        }
    }

    /// Researches a topic and composes a draft thread.
    ///
    /// The composer is only asked, never trusted, to respect the length
    /// budget: any post that comes back over it is hard-truncated here.
    pub async fn research_and_generate(
        &self,
        topic: &str,
        depth: Depth,
    ) -> Result<Thread, GeneratorError> {
        tracing::info!(topic, ?depth, "researching topic");

        let research = match depth {
            Depth::Comprehensive => self.research.research_with_search(topic).await?,
            Depth::Quick => self.research.research_without_search(topic).await?,
        };

        let mut posts = self.composer.compose(&research, &self.thread_config).await?;

        let limit = self.thread_config.max_post_length;
        for (index, post) in posts.iter_mut().enumerate() {
            if post.chars().count() > limit {
                tracing::warn!(index, limit, "composed post over length budget, truncating");
                *post = text::truncate_post(post, limit);
            }
        }

        tracing::info!(posts = posts.len(), "draft thread generated");
        Ok(Thread::new(topic, posts, research))
    }

    /// Publishes a thread as a reply chain and records the assigned ids.
    ///
    /// On success the updated thread is re-saved, moving the stored entry
    /// from Draft to Posted. A partial failure leaves the stored entry
    /// untouched and surfaces the completed ids to the caller.
    pub async fn post_thread(
        &self,
        mut thread: Thread,
        media_paths: Option<Vec<PathBuf>>,
    ) -> Result<Thread, GeneratorError> {
        let ids = self
            .publisher
            .publish(&thread.tweets, media_paths.as_deref())
            .await?;

        thread.mark_posted(ids)?;
        self.store.save(&thread)?;

        tracing::info!(thread = %thread.id, posts = thread.tweets.len(), "thread published");
        Ok(thread)
    }

    /// Saves a thread to the configured history file.
    pub fn save_thread(&self, thread: &Thread) -> Result<(), GeneratorError> {
        Ok(self.store.save(thread)?)
    }

    /// Saves a thread to an explicit history file.
    pub fn save_thread_to(
        &self,
        thread: &Thread,
        path: impl Into<PathBuf>,
    ) -> Result<(), GeneratorError> {
        Ok(ThreadStore::new(path).save(thread)?)
    }

    /// Loads all threads from the configured history file.
    pub fn load_threads(&self) -> Result<Vec<Thread>, GeneratorError> {
        Ok(self.store.load()?)
    }

    /// Loads all threads from an explicit history file.
    pub fn load_threads_from(&self, path: impl Into<PathBuf>) -> Result<Vec<Thread>, GeneratorError> {
        Ok(ThreadStore::new(path).load()?)
    }
}
