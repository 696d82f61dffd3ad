//! Convenience re-exports for the common path: research, compose,
//! publish, persist.

pub use spool_llm::{
    extract_json, GeminiClient, GenerateClient, GenerationConfig, LlmError, ResearchClient,
    ThreadComposer,
};
pub use spool_persist::{StorageError, ThreadStore};
pub use spool_platform::{
    PartialFailure, PlatformClient, PlatformError, ThreadPublisher, XApiClient,
};
pub use spool_types::{
    ResearchFailure, ResearchRecord, ResearchReport, Thread, ThreadConfig, ThreadStatus,
    POST_CHAR_LIMIT,
};
