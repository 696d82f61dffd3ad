pub mod error;
pub mod publisher;
pub mod traits;
pub mod x;

pub use error::{PartialFailure, PlatformError};
pub use publisher::ThreadPublisher;
pub use traits::PlatformClient;
pub use x::XApiClient;
