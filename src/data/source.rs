use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use std::path::{Path, PathBuf};

use crate::constants::csv::INFER_SCHEMA_ROWS;
use crate::error::{ConvertError, Result};

/// In-memory table loaded from the source CSV.
///
/// Wraps a fully materialized Polars DataFrame. The frame is never mutated
/// between load and write; the statistics step only reads from it.
#[derive(Debug)]
pub struct Dataset {
    df: DataFrame,
    path: PathBuf,
}

impl Dataset {
    /// Load the full CSV into memory, decoding date-like columns
    /// (notably `InvoiceDate`) as datetimes.
    ///
    /// The path is checked for existence up front so a missing source is
    /// reported as `SourceNotFound` before anything touches the filesystem.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConvertError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_try_parse_dates(true)
            .finish()
            .map_err(ConvertError::Decode)?
            .collect()
            .map_err(ConvertError::Decode)?;

        Ok(Self {
            df,
            path: path.to_path_buf(),
        })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.df.width()
    }

    /// All column names, in file order
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Source file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn column(&self, name: &str) -> Result<&Series> {
        self.df
            .column(name)
            .map(|c| c.as_materialized_series())
            .map_err(|_| ConvertError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Distinct-value cardinality of a named column, ignoring nulls.
    pub fn distinct_count(&self, name: &str) -> Result<usize> {
        self.column(name)?
            .drop_nulls()
            .n_unique()
            .map_err(ConvertError::Decode)
    }

    /// (min, max) of a datetime or date column.
    pub fn timestamp_range(&self, name: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let series = self.column(name)?;

        match series.dtype() {
            DataType::Datetime(time_unit, _) => {
                let ca = series.datetime().map_err(ConvertError::Decode)?;
                let min = ca
                    .min()
                    .and_then(|v| epoch_to_naive(v, *time_unit))
                    .ok_or(ConvertError::EmptyDataset)?;
                let max = ca
                    .max()
                    .and_then(|v| epoch_to_naive(v, *time_unit))
                    .ok_or(ConvertError::EmptyDataset)?;
                Ok((min, max))
            }
            DataType::Date => {
                let ca = series.date().map_err(ConvertError::Decode)?;
                let min = ca
                    .min()
                    .and_then(days_to_naive)
                    .ok_or(ConvertError::EmptyDataset)?;
                let max = ca
                    .max()
                    .and_then(days_to_naive)
                    .ok_or(ConvertError::EmptyDataset)?;
                Ok((min, max))
            }
            other => Err(ConvertError::NotTemporal {
                column: name.to_string(),
                dtype: other.to_string(),
            }),
        }
    }

    /// Serialize the table to a compressed Parquet file. Polars never emits
    /// a row-index column, so the output carries exactly the CSV's columns.
    ///
    /// Returns the number of bytes written.
    pub fn write_parquet(&mut self, path: &Path, compression: ParquetCompression) -> Result<u64> {
        let file = std::fs::File::create(path)?;
        ParquetWriter::new(file)
            .with_compression(compression)
            .finish(&mut self.df)
            .map_err(ConvertError::Write)
    }
}

/// Convert an epoch value in the column's time unit to a naive UTC datetime
fn epoch_to_naive(value: i64, time_unit: TimeUnit) -> Option<NaiveDateTime> {
    let dt = match time_unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
    };
    dt.map(|dt| dt.naive_utc())
}

/// Convert days-since-epoch (Date dtype) to a naive UTC datetime at midnight
fn days_to_naive(days: i32) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(i64::from(days) * 86_400, 0).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn retail_csv() -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Invoice,StockCode,InvoiceDate,Customer ID").unwrap();
        writeln!(file, "489434,85048,2009-12-01 07:45:00,13085").unwrap();
        writeln!(file, "489434,79323P,2009-12-01 07:45:00,13085").unwrap();
        writeln!(file, "489435,22350,2009-12-01 07:46:00,13085").unwrap();
        writeln!(file, "489436,48173C,2009-12-02 09:06:00,13078").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_dimensions_and_names() {
        let file = retail_csv();
        let ds = Dataset::load(file.path()).unwrap();

        assert_eq!(ds.height(), 4);
        assert_eq!(ds.width(), 4);
        assert_eq!(
            ds.column_names(),
            vec!["Invoice", "StockCode", "InvoiceDate", "Customer ID"]
        );
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let err = Dataset::load(Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::SourceNotFound { .. }));
    }

    #[test]
    fn test_distinct_counts_with_duplicates() {
        let file = retail_csv();
        let ds = Dataset::load(file.path()).unwrap();

        assert_eq!(ds.distinct_count("Invoice").unwrap(), 3);
        assert_eq!(ds.distinct_count("StockCode").unwrap(), 4);
        assert_eq!(ds.distinct_count("Customer ID").unwrap(), 2);
    }

    #[test]
    fn test_distinct_count_ignores_nulls() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Invoice,Customer ID").unwrap();
        writeln!(file, "1,13085").unwrap();
        writeln!(file, "2,").unwrap();
        writeln!(file, "3,13085").unwrap();
        file.flush().unwrap();

        let ds = Dataset::load(file.path()).unwrap();
        assert_eq!(ds.distinct_count("Customer ID").unwrap(), 1);
    }

    #[test]
    fn test_distinct_count_unknown_column() {
        let file = retail_csv();
        let ds = Dataset::load(file.path()).unwrap();

        let err = ds.distinct_count("Country").unwrap_err();
        assert!(matches!(err, ConvertError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_timestamp_range() {
        let file = retail_csv();
        let ds = Dataset::load(file.path()).unwrap();

        let (min, max) = ds.timestamp_range("InvoiceDate").unwrap();
        assert_eq!(min.to_string(), "2009-12-01 07:45:00");
        assert_eq!(max.to_string(), "2009-12-02 09:06:00");
    }

    #[test]
    fn test_timestamp_range_on_date_column() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "day,value").unwrap();
        writeln!(file, "2024-01-03,1").unwrap();
        writeln!(file, "2024-01-01,2").unwrap();
        file.flush().unwrap();

        let ds = Dataset::load(file.path()).unwrap();
        let (min, max) = ds.timestamp_range("day").unwrap();
        assert_eq!(min.to_string(), "2024-01-01 00:00:00");
        assert_eq!(max.to_string(), "2024-01-03 00:00:00");
    }

    #[test]
    fn test_timestamp_range_rejects_non_temporal() {
        let file = retail_csv();
        let ds = Dataset::load(file.path()).unwrap();

        let err = ds.timestamp_range("Invoice").unwrap_err();
        assert!(matches!(err, ConvertError::NotTemporal { .. }));
    }

    #[test]
    fn test_write_parquet_round_trip() {
        let file = retail_csv();
        let mut ds = Dataset::load(file.path()).unwrap();

        let out = Builder::new().suffix(".parquet").tempfile().unwrap();
        let bytes = ds
            .write_parquet(out.path(), ParquetCompression::Snappy)
            .unwrap();
        assert!(bytes > 0);

        let back = LazyFrame::scan_parquet(out.path(), Default::default())
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.height(), 4);
        assert_eq!(back.width(), 4);
        assert!(matches!(
            back.column("InvoiceDate").unwrap().dtype(),
            DataType::Datetime(_, _)
        ));
    }
}
