pub mod retry_util;
pub mod youtube;

pub use retry_util::{RetryConfig, RetryUtil};
pub use youtube::YoutubeClient;
