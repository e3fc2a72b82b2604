use chrono::NaiveDateTime;

use crate::constants::columns;
use crate::data::Dataset;
use crate::error::Result;

/// Summary statistics printed after a successful load
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub date_min: NaiveDateTime,
    pub date_max: NaiveDateTime,
    pub unique_invoices: usize,
    pub unique_products: usize,
    pub unique_customers: usize,
}

/// Compute the summary off the loaded dataset.
///
/// Reads the fixed report columns of the Online Retail II schema: the
/// `InvoiceDate` range plus distinct invoice/product/customer counts.
pub fn summarize(ds: &Dataset) -> Result<DatasetSummary> {
    let (date_min, date_max) = ds.timestamp_range(columns::INVOICE_DATE)?;

    Ok(DatasetSummary {
        rows: ds.height(),
        columns: ds.width(),
        column_names: ds.column_names(),
        date_min,
        date_max,
        unique_invoices: ds.distinct_count(columns::INVOICE)?,
        unique_products: ds.distinct_count(columns::STOCK_CODE)?,
        unique_customers: ds.distinct_count(columns::CUSTOMER_ID)?,
    })
}

impl DatasetSummary {
    /// Print the load/statistics block in the tool's console layout
    pub fn print(&self) {
        println!("Dataset loaded successfully");
        println!("Rows: {}", group_thousands(self.rows));
        println!("Columns: {}", self.columns);
        println!("\nColumn names:");
        for name in &self.column_names {
            println!("  - {}", name);
        }

        println!("\nBasic statistics:");
        println!("  Date range: {} to {}", self.date_min, self.date_max);
        println!("  Unique invoices: {}", group_thousands(self.unique_invoices));
        println!("  Unique products: {}", group_thousands(self.unique_products));
        println!("  Unique customers: {}", group_thousands(self.unique_customers));
    }
}

/// Format an integer with comma thousands separators
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
