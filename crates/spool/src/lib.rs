//! # Spool - research-driven thread generation for Rust
//!
//! Spool turns a free-text topic into a published social-media thread:
//! - 🔎 **Grounded research** (Gemini, citations included)
//! - 🧵 **Thread composition** (post texts within the platform limit)
//! - 🔗 **Reply-chain publishing** (X API v2, partial-failure aware)
//! - 💾 **JSON history** (draft and posted threads in one file)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use spool::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let llm: Arc<dyn GenerateClient> =
//!         Arc::new(GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?);
//!
//!     // Research a topic, then compose the thread.
//!     let research = ResearchClient::new(llm.clone());
//!     let record = research.research_with_search("quantum computing").await?;
//!
//!     let composer = ThreadComposer::new(llm);
//!     let posts = composer.compose(&record, &ThreadConfig::default()).await?;
//!
//!     let thread = Thread::new("quantum computing", posts, record);
//!     ThreadStore::default_location().save(&thread)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Spool consists of several composable crates:
//!
//! - **spool-types**: Core data model (Thread, ResearchRecord, budgets)
//! - **spool-llm**: Gemini client, JSON extraction, research + composition
//! - **spool-platform**: X API client and the reply-chain publisher
//! - **spool-persist**: JSON-file thread history
//!
//! The `spool-cli` application crate wires them together behind a small
//! command-line surface.

pub use spool_llm as llm;
pub use spool_persist as persist;
pub use spool_platform as platform;
pub use spool_types as types;

pub mod prelude;
