//! # gridref
//!
//! A spreadsheet cell-range address model. Parses and formats the textual
//! addresses spreadsheets use to identify rectangular cell ranges, converts
//! between column letters and column numbers, and derives new addresses via
//! offset, resize, and containment queries.
//!
//! The model operates purely on strings and integers: no live spreadsheet
//! process, no cell values or formulas. Addresses are parsed once at
//! construction into an inclusive 1-based rectangle; everything downstream
//! works on the integers.
//!
//! ## Example
//!
//! ```rust
//! use gridref::RangeAddress;
//!
//! let range: RangeAddress = "[Book1.xlsx]'Sheet 1'!$B$2:$D$10".parse()?;
//! assert_eq!(range.workbook_name(), Some("Book1.xlsx"));
//! assert_eq!(range.row_count(), 9);
//! assert!(range.contains_cell(5, 3));
//!
//! let moved = range.offset(1, 0).resize(2, 2)?;
//! assert_eq!(moved.address_a1(false, false, false, false), "B3:C4");
//! # Ok::<(), gridref::Error>(())
//! ```

pub mod column;
pub mod error;
pub mod format;
mod parse;
pub mod range;

// Re-exports for convenience
pub use error::{Error, Result};
pub use range::RangeAddress;
