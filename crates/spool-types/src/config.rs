use serde::{Deserialize, Serialize};

use crate::text::POST_CHAR_LIMIT;

/// Composition budgets for a thread.
///
/// Both values are instructions embedded in the composer prompt, not
/// mechanical limits on the parsed result; callers that need a hard
/// guarantee validate the composed posts themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadConfig {
    pub max_posts: usize,
    pub max_post_length: usize,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            max_posts: 10,
            max_post_length: POST_CHAR_LIMIT,
        }
    }
}

impl ThreadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_posts(mut self, max: usize) -> Self {
        self.max_posts = max;
        self
    }

    pub fn with_max_post_length(mut self, len: usize) -> Self {
        self.max_post_length = len;
        self
    }
}
