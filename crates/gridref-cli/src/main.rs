//! Gridref CLI - range address inspection and conversion tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridref::{column, RangeAddress};

#[derive(Parser)]
#[command(name = "gridref")]
#[command(
    author,
    version,
    about = "Parse, convert, and reformat spreadsheet range addresses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an address and print its components
    Parse {
        /// Address text, e.g. "[Book1.xlsx]'Sheet 1'!$A$1:$B$2"
        address: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between column letters and a 1-based column number
    Col {
        /// Column letters ("AA") or a column number ("27")
        value: String,
    },

    /// Reformat an address
    Fmt {
        /// Address text
        address: String,

        /// Use R1C1 notation instead of A1
        #[arg(long)]
        r1c1: bool,

        /// Render relative references (no $ markers / bracketed R1C1)
        #[arg(long)]
        relative: bool,

        /// Omit the sheet qualifier
        #[arg(long)]
        no_sheet: bool,

        /// Include the workbook qualifier when present
        #[arg(long)]
        workbook: bool,
    },

    /// Shift an address by row/column deltas
    Shift {
        /// Address text
        address: String,

        /// Rows to shift by (may be negative)
        #[arg(allow_hyphen_values = true)]
        rows: i64,

        /// Columns to shift by (may be negative)
        #[arg(allow_hyphen_values = true)]
        cols: i64,
    },

    /// Resize an address, keeping its start cell
    Resize {
        /// Address text
        address: String,

        /// New row count (>= 1)
        rows: u32,

        /// New column count (>= 1)
        cols: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { address, json } => cmd_parse(&address, json),
        Commands::Col { value } => cmd_col(&value),
        Commands::Fmt {
            address,
            r1c1,
            relative,
            no_sheet,
            workbook,
        } => cmd_fmt(&address, r1c1, relative, no_sheet, workbook),
        Commands::Shift {
            address,
            rows,
            cols,
        } => cmd_shift(&address, rows, cols),
        Commands::Resize {
            address,
            rows,
            cols,
        } => cmd_resize(&address, rows, cols),
    }
}

fn parse_range(address: &str) -> Result<RangeAddress> {
    RangeAddress::parse(address).with_context(|| format!("failed to parse '{}'", address))
}

fn cmd_parse(address: &str, json: bool) -> Result<()> {
    let range = parse_range(address)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&range)?);
        return Ok(());
    }

    println!("address:   {}", range);
    if let Some(wb) = range.workbook_name() {
        println!("workbook:  {}", wb);
    }
    if let Some(sheet) = range.sheet_name() {
        println!("sheet:     {}", sheet);
    }
    println!(
        "rows:      {}..={} ({})",
        range.start_row(),
        range.end_row(),
        range.row_count()
    );
    println!(
        "columns:   {}..={} ({})",
        range.start_column(),
        range.end_column(),
        range.column_count()
    );
    println!("cells:     {}", range.cell_count());
    println!("absolute:  {}", range.is_absolute());
    Ok(())
}

fn cmd_col(value: &str) -> Result<()> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        let n: u32 = value
            .parse()
            .with_context(|| format!("invalid column number '{}'", value))?;
        println!("{}", column::number_to_name(n)?);
    } else if value.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("{}", column::name_to_number(value)?);
    } else {
        bail!("'{}' is neither column letters nor a column number", value);
    }
    Ok(())
}

fn cmd_fmt(address: &str, r1c1: bool, relative: bool, no_sheet: bool, workbook: bool) -> Result<()> {
    let range = parse_range(address)?;
    let absolute = !relative;

    let formatted = if r1c1 {
        range.address_r1c1(absolute, absolute, !no_sheet, workbook)
    } else {
        range.address_a1(absolute, absolute, !no_sheet, workbook)
    };

    println!("{}", formatted);
    Ok(())
}

fn cmd_shift(address: &str, rows: i64, cols: i64) -> Result<()> {
    let range = parse_range(address)?;

    let min_row = range.start_row() as i64 + rows;
    let min_col = range.start_column() as i64 + cols;
    if min_row < 1 || min_col < 1 {
        bail!("shift by ({}, {}) would move '{}' before row/column 1", rows, cols, address);
    }

    println!("{}", range.offset(rows, cols));
    Ok(())
}

fn cmd_resize(address: &str, rows: u32, cols: u32) -> Result<()> {
    let range = parse_range(address)?;
    println!("{}", range.resize(rows, cols)?);
    Ok(())
}
