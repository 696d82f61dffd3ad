use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::research::ResearchRecord;

/// A generated post thread with its originating research and publishing
/// state.
///
/// Threads are value-like: the store owns the durable copy and loads hand
/// back independent snapshots. `topic` and `research_data` never change
/// after construction; only `tweet_ids` moves, once, from `None` to `Some`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    /// Store identity. Entries written before this field existed get a
    /// fresh id when loaded.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub topic: String,
    pub tweets: Vec<String>,
    pub research_data: ResearchRecord,
    pub created_at: DateTime<Utc>,
    pub tweet_ids: Option<Vec<String>>,
}

/// Draft until published, Posted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadStatus {
    Draft,
    Posted,
}

impl std::fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Posted => write!(f, "Posted"),
        }
    }
}

/// A publish result handed to [`Thread::mark_posted`] did not line up with
/// the thread's posts.
#[derive(Debug, Error)]
#[error("expected {expected} post ids, got {got}")]
pub struct PostIdCountMismatch {
    pub expected: usize,
    pub got: usize,
}

impl Thread {
    /// Creates a draft thread. `created_at` is set now; `tweet_ids` starts
    /// absent.
    pub fn new(
        topic: impl Into<String>,
        tweets: Vec<String>,
        research_data: ResearchRecord,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: topic.into(),
            tweets,
            research_data,
            created_at: Utc::now(),
            tweet_ids: None,
        }
    }

    pub fn is_posted(&self) -> bool {
        self.tweet_ids.is_some()
    }

    pub fn status(&self) -> ThreadStatus {
        if self.is_posted() {
            ThreadStatus::Posted
        } else {
            ThreadStatus::Draft
        }
    }

    /// Records the platform-assigned ids after a successful publish.
    ///
    /// The id list must match the posts one-to-one.
    pub fn mark_posted(&mut self, ids: Vec<String>) -> Result<(), PostIdCountMismatch> {
        if ids.len() != self.tweets.len() {
            return Err(PostIdCountMismatch {
                expected: self.tweets.len(),
                got: ids.len(),
            });
        }
        self.tweet_ids = Some(ids);
        Ok(())
    }
}
