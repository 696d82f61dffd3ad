pub mod compose;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod prompts;
pub mod research;
pub mod traits;

pub use compose::ThreadComposer;
pub use error::LlmError;
pub use extract::extract_json;
pub use gemini::{GeminiClient, DEFAULT_GEMINI_MODEL};
pub use research::ResearchClient;
pub use traits::{GenerateClient, GenerationConfig};
