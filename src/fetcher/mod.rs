pub mod client;
pub mod errors;
pub mod pipeline;
pub mod source;
pub mod types;

pub use client::PageRetriever;
pub use errors::FetchError;
pub use source::PageSource;
pub use types::{Charset, PageResponse};

#[cfg(test)]
pub use source::MockPageSource;
