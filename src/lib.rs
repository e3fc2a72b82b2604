//! Ingest-side conversion of the Online Retail II dataset.
//!
//! Loads the raw CSV as-is (ELT: cleaning happens downstream in the
//! warehouse), prints descriptive statistics, and writes a compressed
//! Parquet file for upload.

pub mod constants;
pub mod convert;
pub mod data;
pub mod error;

pub use convert::{convert, Compression, ConversionReport};
pub use error::{ConvertError, Result};
