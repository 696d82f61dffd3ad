use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the social-platform API.
///
/// The platform assigns every post an id; a reply chain is built by
/// passing the previous post's id as `in_reply_to`.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Submits one post, optionally as a reply and with attached media.
    /// Returns the platform-assigned post id.
    async fn create_post(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
        media_ids: &[String],
    ) -> Result<String>;

    /// Uploads a media file and returns its platform media id.
    async fn upload_media(&self, path: &Path) -> Result<String>;
}
