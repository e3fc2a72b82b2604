pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use source::Dataset;
pub use stats::{summarize, DatasetSummary};
