use thiserror::Error;

use spool_llm::LlmError;
use spool_persist::StorageError;
use spool_platform::PartialFailure;
use spool_types::PostIdCountMismatch;

/// Failures surfaced by the [`ThreadGenerator`](crate::ThreadGenerator)
/// facade. Each variant keeps the typed error from the component below so
/// its diagnostic payload stays reachable.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Research(#[from] LlmError),

    #[error(transparent)]
    Publish(#[from] PartialFailure),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Thread(#[from] PostIdCountMismatch),
}
