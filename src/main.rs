use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use retail_ingest::constants::{console::RULE_WIDTH, paths};
use retail_ingest::convert::{convert, Compression};

/// Convert the Online Retail II CSV dataset to compressed Parquet
#[derive(Debug, Parser)]
#[command(name = "retail-ingest", version, about)]
struct Cli {
    /// Source CSV file
    #[arg(long, default_value = paths::DEFAULT_CSV)]
    input: PathBuf,

    /// Destination Parquet file
    #[arg(long, default_value = paths::DEFAULT_PARQUET)]
    output: PathBuf,

    /// Parquet compression codec
    #[arg(long, value_enum, default_value_t = Compression::Snappy)]
    compression: Compression,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("CSV to Parquet Conversion Tool");
    println!("Online Retail II Dataset");
    println!("{}", rule);
    println!();

    if let Err(e) = convert(&cli.input, &cli.output, cli.compression) {
        eprintln!("{}", e.user_message());
        return ExitCode::from(1);
    }

    println!("\nConversion completed successfully!");
    println!("\nNext steps:");
    println!("  1. Review the Parquet file: {}", cli.output.display());
    println!("  2. Upload both CSV and Parquet files to S3");
    println!("  3. See docs/s3-upload-instructions.md for upload commands");

    ExitCode::SUCCESS
}
