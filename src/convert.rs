//! One-shot CSV to Parquet conversion.
//!
//! Linear sequence: verify source, load, summarize, ensure the destination
//! directory, write, report sizes. Any failure aborts the conversion; a
//! partially written destination file is left as-is.

use clap::ValueEnum;
use log::debug;
use polars::prelude::ParquetCompression;
use std::fs;
use std::path::Path;

use crate::constants::{console::RULE_WIDTH, size::BYTES_PER_MB};
use crate::data::{self, Dataset};
use crate::data::stats::group_thousands;
use crate::error::{ConvertError, Result};

/// Parquet codec selection. Snappy is the default used by the ingest
/// pipeline; Zstd trades speed for a smaller file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Compression {
    Snappy,
    Zstd,
}

impl Compression {
    fn to_parquet(self) -> ParquetCompression {
        match self {
            Compression::Snappy => ParquetCompression::Snappy,
            Compression::Zstd => ParquetCompression::Zstd(None),
        }
    }
}

/// Outcome of a successful conversion, computed from the actual file sizes
#[derive(Debug, Clone, Copy)]
pub struct ConversionReport {
    pub rows: usize,
    pub csv_size_mb: f64,
    pub parquet_size_mb: f64,
    /// Relative size reduction, as a percentage
    pub compression_ratio: f64,
}

/// File size in megabytes (bytes / 1,048,576)
pub fn file_size_mb(path: &Path) -> Result<f64> {
    Ok(fs::metadata(path)?.len() as f64 / BYTES_PER_MB)
}

/// Convert a CSV file to compressed Parquet, printing progress, dataset
/// statistics, and a size/compression summary along the way.
///
/// The destination's parent directories are created on demand, but only
/// after the source has been verified and loaded: a missing source never
/// leaves a destination tree behind.
pub fn convert(
    csv_path: &Path,
    parquet_path: &Path,
    compression: Compression,
) -> Result<ConversionReport> {
    if !csv_path.exists() {
        return Err(ConvertError::SourceNotFound {
            path: csv_path.to_path_buf(),
        });
    }

    println!("Reading CSV file: {}", csv_path.display());
    println!("File size: {:.2} MB\n", file_size_mb(csv_path)?);

    // Raw load, no cleaning: data quality issues are handled downstream
    // in the warehouse staging layer.
    debug!("loading {}", csv_path.display());
    let mut ds = Dataset::load(csv_path)?;

    let summary = data::summarize(&ds)?;
    summary.print();

    if let Some(parent) = parquet_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("\nConverting to Parquet format...");
    debug!("writing {} ({:?})", parquet_path.display(), compression);
    ds.write_parquet(parquet_path, compression.to_parquet())?;

    println!("Parquet file created: {}", parquet_path.display());
    println!("File size: {:.2} MB", file_size_mb(parquet_path)?);

    let csv_size_mb = file_size_mb(csv_path)?;
    let parquet_size_mb = file_size_mb(parquet_path)?;
    let report = ConversionReport {
        rows: summary.rows,
        csv_size_mb,
        parquet_size_mb,
        compression_ratio: (1.0 - parquet_size_mb / csv_size_mb) * 100.0,
    };
    report.print();

    Ok(report)
}

impl ConversionReport {
    /// Print the conversion summary block
    pub fn print(&self) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule);
        println!("CONVERSION SUMMARY");
        println!("{}", rule);
        println!("CSV size:          {:>10.2} MB", self.csv_size_mb);
        println!("Parquet size:      {:>10.2} MB", self.parquet_size_mb);
        println!("Compression ratio: {:>10.1}%", self.compression_ratio);
        println!("Rows processed:    {:>10}", group_thousands(self.rows));
        println!("{}", rule);
    }
}
