//! Range address value type
//!
//! A [`RangeAddress`] is the parsed form of a textual range reference such
//! as `"$B$2:$D$10"` or `"[Book1.xlsx]'Sheet 1'!A1:B2"`: an inclusive
//! 1-based rectangle plus optional workbook/sheet qualifiers. The text is
//! parsed once at construction; geometry operations and re-formatting work
//! on the integer rectangle only.

use crate::error::{Error, Result};
use crate::format;
use crate::parse;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable rectangular cell-range address
///
/// Rows and columns are 1-based and the bounds are inclusive, so `"A1"` is
/// the rectangle (1, 1) ..= (1, 1). Deriving a new address (`offset`,
/// `resize`) returns a fresh instance; nothing mutates in place.
///
/// # Examples
/// ```
/// use gridref::RangeAddress;
///
/// let range: RangeAddress = "'Sheet 1'!A1:B2".parse().unwrap();
/// assert_eq!(range.sheet_name(), Some("Sheet 1"));
/// assert_eq!(range.row_count(), 2);
/// assert_eq!(range.to_string(), "'Sheet 1'!$A$1:$B$2");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeAddress {
    start_row: u32,
    start_col: u32,
    end_row: u32,
    end_col: u32,
    sheet_name: Option<String>,
    workbook_name: Option<String>,
    absolute: bool,
}

impl RangeAddress {
    /// Parse a textual address (`"A1"`, `"$B$2:$D$10"`, `"Sheet 1!A1:B2"`,
    /// `"[Book1.xlsx]Sheet1!A1"`)
    ///
    /// Only the first area of a comma-separated multi-area reference is
    /// kept; the remainder is dropped.
    pub fn parse(address: &str) -> Result<Self> {
        let parsed = parse::parse_address(address)?;
        let (start_row, start_col) = parsed.start;
        let (end_row, end_col) = parsed.end;
        let mut range = Self::new(start_row, start_col, end_row, end_col)?;
        range.sheet_name = parsed.sheet;
        range.workbook_name = parsed.workbook;
        range.absolute = parsed.absolute;
        Ok(range)
    }

    /// Create a range from 1-based corner coordinates
    ///
    /// Corners are normalized so that start is the top-left cell. Any
    /// coordinate below 1 is rejected.
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Result<Self> {
        if start_row == 0 || start_col == 0 || end_row == 0 || end_col == 0 {
            return Err(Error::InvalidArgument(
                "row and column numbers are 1-based".into(),
            ));
        }

        let (start_row, end_row) = if start_row <= end_row {
            (start_row, end_row)
        } else {
            (end_row, start_row)
        };
        let (start_col, end_col) = if start_col <= end_col {
            (start_col, end_col)
        } else {
            (end_col, start_col)
        };

        Ok(Self {
            start_row,
            start_col,
            end_row,
            end_col,
            sheet_name: None,
            workbook_name: None,
            absolute: false,
        })
    }

    /// Create a single-cell range from 1-based coordinates
    pub fn cell(row: u32, col: u32) -> Result<Self> {
        Self::new(row, col, row, col)
    }

    /// Return a copy carrying the given sheet name
    ///
    /// The name is stored unquoted; quoting is applied at format time when
    /// the name contains a space.
    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Return a copy carrying the given workbook name
    pub fn with_workbook(mut self, name: impl Into<String>) -> Self {
        self.workbook_name = Some(name.into());
        self
    }

    /// First row of the rectangle, 1-based
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// First column of the rectangle, 1-based
    pub fn start_column(&self) -> u32 {
        self.start_col
    }

    /// Last row of the rectangle, inclusive
    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    /// Last column of the rectangle, inclusive
    pub fn end_column(&self) -> u32 {
        self.end_col
    }

    /// Sheet name, unquoted, if the address carried one
    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    /// Workbook name, if the address was an external reference
    pub fn workbook_name(&self) -> Option<&str> {
        self.workbook_name.as_deref()
    }

    /// Whether the parsed text contained any `$` marker
    ///
    /// Not part of the equality contract.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the rectangle covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }

    /// Number of rows in the rectangle
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Number of columns in the rectangle
    pub fn column_count(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    /// Total number of cells in the rectangle
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.column_count() as u64
    }

    /// Whether the 1-based cell (row, col) lies within the rectangle,
    /// boundary included
    pub fn contains_cell(&self, row: u32, col: u32) -> bool {
        row >= self.start_row
            && row <= self.end_row
            && col >= self.start_col
            && col <= self.end_col
    }

    /// Shift both corners by the given deltas, carrying the sheet and
    /// workbook names forward
    ///
    /// No clamping is performed: shifting a corner below row or column 1
    /// is a caller error and is only checked in debug builds.
    pub fn offset(&self, row_delta: i64, col_delta: i64) -> Self {
        let mut result = self.clone();
        result.start_row = shifted(self.start_row, row_delta);
        result.end_row = shifted(self.end_row, row_delta);
        result.start_col = shifted(self.start_col, col_delta);
        result.end_col = shifted(self.end_col, col_delta);
        result
    }

    /// Keep the start cell and recompute the end cell as
    /// `start + size - 1` in each dimension
    ///
    /// Both dimensions must be at least 1.
    pub fn resize(&self, rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::SizeOutOfRange(format!(
                "resize dimensions must be >= 1, got {}x{}",
                rows, columns
            )));
        }
        let mut result = self.clone();
        result.end_row = self.start_row + rows - 1;
        result.end_col = self.start_col + columns - 1;
        Ok(result)
    }

    /// Render the address in A1 style
    ///
    /// `row_absolute`/`col_absolute` control the `$` markers on every cell
    /// of the output independently; `include_sheet`/`include_workbook`
    /// control the qualification prefix (applied only when the
    /// corresponding name is present).
    pub fn address_a1(
        &self,
        row_absolute: bool,
        col_absolute: bool,
        include_sheet: bool,
        include_workbook: bool,
    ) -> String {
        let mut body =
            format::single_cell_a1(self.start_row, self.start_col, row_absolute, col_absolute);
        if !self.is_single_cell() {
            body.push(':');
            body.push_str(&format::single_cell_a1(
                self.end_row,
                self.end_col,
                row_absolute,
                col_absolute,
            ));
        }
        format::qualify(
            body,
            self.sheet_name(),
            self.workbook_name(),
            include_sheet,
            include_workbook,
        )
    }

    /// Render the address in R1C1 style
    ///
    /// Absolute flags render literal row/column numbers (`R5C3`); relative
    /// flags render the stored numbers in brackets. True offsets relative
    /// to an active cell are not computed — callers needing them should
    /// use [`format::single_cell_r1c1`] with their own deltas.
    pub fn address_r1c1(
        &self,
        row_absolute: bool,
        col_absolute: bool,
        include_sheet: bool,
        include_workbook: bool,
    ) -> String {
        let mut body = format::single_cell_r1c1(
            self.start_row as i64,
            self.start_col as i64,
            row_absolute,
            col_absolute,
        );
        if !self.is_single_cell() {
            body.push(':');
            body.push_str(&format::single_cell_r1c1(
                self.end_row as i64,
                self.end_col as i64,
                row_absolute,
                col_absolute,
            ));
        }
        format::qualify(
            body,
            self.sheet_name(),
            self.workbook_name(),
            include_sheet,
            include_workbook,
        )
    }
}

fn shifted(value: u32, delta: i64) -> u32 {
    let shifted = value as i64 + delta;
    debug_assert!(shifted >= 1, "offset moved a corner below 1");
    shifted as u32
}

/// Default rendering: absolute A1 with the sheet qualifier, no workbook
impl fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_a1(true, true, true, false))
    }
}

impl FromStr for RangeAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Equality covers the four bounds and both names (case-sensitive); the
/// absolute flag is a formatting detail and excluded
impl PartialEq for RangeAddress {
    fn eq(&self, other: &Self) -> bool {
        self.start_row == other.start_row
            && self.start_col == other.start_col
            && self.end_row == other.end_row
            && self.end_col == other.end_col
            && self.sheet_name == other.sheet_name
            && self.workbook_name == other.workbook_name
    }
}

impl Eq for RangeAddress {}

impl Hash for RangeAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start_row.hash(state);
        self.start_col.hash(state);
        self.end_row.hash(state);
        self.end_col.hash(state);
        self.sheet_name.hash(state);
        self.workbook_name.hash(state);
    }
}
