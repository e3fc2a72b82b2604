//! Tool-wide constants and default values

/// Default file locations, relative to the working directory
pub mod paths {
    /// Raw CSV dropped by the download step
    pub const DEFAULT_CSV: &str = "data/raw/online_retail_II.csv";

    /// Parquet file consumed by the warehouse load
    pub const DEFAULT_PARQUET: &str = "data/processed/online_retail.parquet";
}

/// Columns of the Online Retail II dataset the summary reports on
pub mod columns {
    /// Timestamp column, decoded as a datetime on load
    pub const INVOICE_DATE: &str = "InvoiceDate";

    /// Invoice number (distinct count reported)
    pub const INVOICE: &str = "Invoice";

    /// Product code (distinct count reported)
    pub const STOCK_CODE: &str = "StockCode";

    /// Customer identifier (distinct count reported)
    pub const CUSTOMER_ID: &str = "Customer ID";
}

/// CSV decoding defaults
pub mod csv {
    /// Rows scanned to infer column types
    pub const INFER_SCHEMA_ROWS: usize = 100;
}

/// Size reporting
pub mod size {
    /// Bytes per megabyte for all size reporting
    pub const BYTES_PER_MB: f64 = 1_048_576.0;
}

/// Console formatting
pub mod console {
    /// Width of the banner/summary separator lines
    pub const RULE_WIDTH: usize = 60;
}
