pub mod classifier;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod reference;
pub mod telemetry;

pub use classifier::{ClassificationResult, Confidence, SiteClassifier};
pub use config::Config;
pub use reference::ReferenceData;
