pub mod config;
pub mod research;
pub mod text;
pub mod thread;

pub use config::ThreadConfig;
pub use research::{ResearchFailure, ResearchRecord, ResearchReport};
pub use text::{
    format_post, split_into_posts, truncate_post, validate_post, POST_CHAR_LIMIT,
};
pub use thread::{PostIdCountMismatch, Thread, ThreadStatus};
