use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{PartialFailure, PlatformError};
use crate::traits::PlatformClient;

/// Publishes an ordered post sequence as a reply chain.
pub struct ThreadPublisher {
    client: Arc<dyn PlatformClient>,
}

impl ThreadPublisher {
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self { client }
    }

    /// Posts each text in order, linking every post after the first to the
    /// previous one's assigned id. `media[i]`, when present, is uploaded
    /// first and attached to post `i`.
    ///
    /// The first failure, upload or post, aborts the chain immediately: no
    /// retry, no skip-ahead. The error carries the ids assigned so far and
    /// the failing index; the chain is never resumed from the middle.
    pub async fn publish(
        &self,
        posts: &[String],
        media: Option<&[PathBuf]>,
    ) -> Result<Vec<String>, PartialFailure> {
        let mut ids: Vec<String> = Vec::with_capacity(posts.len());

        for (index, post) in posts.iter().enumerate() {
            let media_path = media.and_then(|paths| paths.get(index));
            let in_reply_to = ids.last().map(String::as_str);

            match self.publish_one(post, in_reply_to, media_path).await {
                Ok(id) => {
                    tracing::debug!(index, id = %id, "post published");
                    ids.push(id);
                }
                Err(source) => {
                    tracing::warn!(index, error = %source, "publishing aborted");
                    return Err(PartialFailure {
                        completed_ids: ids,
                        failed_index: index,
                        source,
                    });
                }
            }
        }

        Ok(ids)
    }

    async fn publish_one(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
        media_path: Option<&PathBuf>,
    ) -> Result<String, PlatformError> {
        let mut media_ids = Vec::new();
        if let Some(path) = media_path {
            media_ids.push(self.client.upload_media(path).await?);
        }

        self.client.create_post(text, in_reply_to, &media_ids).await
    }
}
