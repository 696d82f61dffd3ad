use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    /// The model returned no content at all. Checked before any parsing.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The model returned text that does not parse into the expected JSON.
    /// The offending text is retained for diagnosis.
    #[error("model response is not valid JSON: {raw}")]
    InvalidResponseFormat { raw: String },

    /// The backend call itself failed (network, auth, quota). The original
    /// message is retained.
    #[error("backend request failed: {0}")]
    Backend(String),

    /// The composer got a parseable response that is not a usable post
    /// list (empty, not an array, or not an array of strings).
    #[error("model did not produce a usable post list")]
    GenerationFailed,
}

pub type Result<T> = std::result::Result<T, LlmError>;
