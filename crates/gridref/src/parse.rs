//! Address string parser
//!
//! Splits an address like `[Book1.xlsx]'Sheet 1'!$A$1:$B$2` into its
//! workbook/sheet qualifiers and an integer rectangle. Runs once when a
//! [`RangeAddress`](crate::RangeAddress) is constructed from text;
//! geometry operations never re-parse.

use crate::column;
use crate::error::{Error, Result};

/// Raw parse output before [`RangeAddress`](crate::RangeAddress) construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedAddress {
    pub workbook: Option<String>,
    pub sheet: Option<String>,
    /// (row, col), 1-based
    pub start: (u32, u32),
    pub end: (u32, u32),
    pub absolute: bool,
}

/// Parse a full address string into qualifiers and a rectangle
pub(crate) fn parse_address(input: &str) -> Result<ParsedAddress> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidArgument("empty address string".into()));
    }

    let mut rest = input;

    // Workbook qualifier: [Book1.xlsx]
    let workbook = if let Some(after_bracket) = rest.strip_prefix('[') {
        let close = after_bracket.find(']').ok_or_else(|| {
            Error::InvalidAddress(format!("unterminated '[' in '{}'", input))
        })?;
        let name = &after_bracket[..close];
        rest = &after_bracket[close + 1..];
        Some(name.to_string())
    } else {
        None
    };

    // Sheet qualifier: everything before the first '!'. Sheet names
    // containing a quoted '!' are not protected against; the first '!'
    // always wins.
    let sheet = if let Some(bang) = rest.find('!') {
        let name = rest[..bang].trim_matches('\'');
        let name = name.to_string();
        rest = &rest[bang + 1..];
        Some(name)
    } else {
        None
    };

    // Must happen before cell_ref() strips the markers.
    let absolute = rest.contains('$');

    // Only the first area of a multi-area reference is represented.
    if let Some(comma) = rest.find(',') {
        rest = &rest[..comma];
    }

    let (start, end) = if let Some(colon) = rest.find(':') {
        (cell_ref(&rest[..colon])?, cell_ref(&rest[colon + 1..])?)
    } else {
        let cell = cell_ref(rest)?;
        (cell, cell)
    };

    Ok(ParsedAddress {
        workbook,
        sheet,
        start,
        end,
        absolute,
    })
}

/// Parse one `<letters><digits>` cell reference into (row, col), 1-based
fn cell_ref(text: &str) -> Result<(u32, u32)> {
    let stripped: String = text.chars().filter(|&c| c != '$').collect();

    let digit_pos = stripped
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| {
            Error::InvalidAddress(format!("no row number in '{}'", text))
        })?;

    let col = column::name_to_number(&stripped[..digit_pos])?;
    let row: u32 = stripped[digit_pos..].parse().map_err(|_| {
        Error::InvalidAddress(format!("invalid row number in '{}'", text))
    })?;

    if row == 0 {
        return Err(Error::InvalidAddress(format!(
            "row number must be >= 1 in '{}'",
            text
        )));
    }

    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell() {
        let parsed = parse_address("A1").unwrap();
        assert_eq!(parsed.start, (1, 1));
        assert_eq!(parsed.end, (1, 1));
        assert_eq!(parsed.sheet, None);
        assert_eq!(parsed.workbook, None);
        assert!(!parsed.absolute);
    }

    #[test]
    fn test_absolute_range() {
        let parsed = parse_address("$B$2:$D$10").unwrap();
        assert_eq!(parsed.start, (2, 2));
        assert_eq!(parsed.end, (10, 4));
        assert!(parsed.absolute);
    }

    #[test]
    fn test_mixed_absolute_marker() {
        // Any single '$' marks the whole reference absolute
        assert!(parse_address("A$1").unwrap().absolute);
        assert!(parse_address("$A1").unwrap().absolute);
        assert!(!parse_address("A1:B2").unwrap().absolute);
    }

    #[test]
    fn test_sheet_qualifier() {
        let parsed = parse_address("Sheet1!C3").unwrap();
        assert_eq!(parsed.sheet.as_deref(), Some("Sheet1"));
        assert_eq!(parsed.start, (3, 3));
    }

    #[test]
    fn test_quoted_sheet_qualifier() {
        let parsed = parse_address("'Sheet 1'!A1:B2").unwrap();
        assert_eq!(parsed.sheet.as_deref(), Some("Sheet 1"));
        assert_eq!(parsed.start, (1, 1));
        assert_eq!(parsed.end, (2, 2));
    }

    #[test]
    fn test_unquoted_sheet_with_space() {
        let parsed = parse_address("Sheet 1!A1:B2").unwrap();
        assert_eq!(parsed.sheet.as_deref(), Some("Sheet 1"));
    }

    #[test]
    fn test_workbook_qualifier() {
        let parsed = parse_address("[Book1.xlsx]Sheet1!A1").unwrap();
        assert_eq!(parsed.workbook.as_deref(), Some("Book1.xlsx"));
        assert_eq!(parsed.sheet.as_deref(), Some("Sheet1"));
        assert_eq!(parsed.start, (1, 1));
    }

    #[test]
    fn test_multi_area_keeps_first() {
        let parsed = parse_address("A1:B2,D4:E5").unwrap();
        assert_eq!(parsed.start, (1, 1));
        assert_eq!(parsed.end, (2, 2));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_address("").is_err());
        assert!(parse_address("   ").is_err());
        assert!(parse_address("A").is_err());
        assert!(parse_address("123").is_err());
        assert!(parse_address("A0").is_err());
        assert!(parse_address("A1B").is_err());
        assert!(parse_address("[Book1.xlsx Sheet1!A1").is_err());
        assert!(parse_address("Sheet1!").is_err());
    }
}
