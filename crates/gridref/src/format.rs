//! Address rendering
//!
//! A1 and R1C1 output plus the sheet/workbook qualification wrapper shared
//! by both styles.

use crate::column;

/// Format one cell in R1C1 style
///
/// Absolute flags render literal numbers (`R5C3`); relative flags render
/// the value in brackets (`R[0]C[-2]`). No active-cell deltas are computed
/// here — callers wanting true relative offsets pass them directly, which
/// is why the arguments are signed.
pub fn single_cell_r1c1(row: i64, col: i64, row_absolute: bool, col_absolute: bool) -> String {
    let mut result = String::new();
    result.push('R');
    if row_absolute {
        result.push_str(&row.to_string());
    } else {
        result.push_str(&format!("[{}]", row));
    }
    result.push('C');
    if col_absolute {
        result.push_str(&col.to_string());
    } else {
        result.push_str(&format!("[{}]", col));
    }
    result
}

/// Format one cell in A1 style: `[$]<letters>[$]<row>`, 1-based
pub(crate) fn single_cell_a1(row: u32, col: u32, row_absolute: bool, col_absolute: bool) -> String {
    let mut result = String::new();
    if col_absolute {
        result.push('$');
    }
    result.push_str(&column::letters(col));
    if row_absolute {
        result.push('$');
    }
    result.push_str(&row.to_string());
    result
}

/// Prefix a cell-reference body with its sheet and workbook qualifiers
///
/// The sheet name is wrapped in single quotes when it contains a space;
/// the workbook prefix goes ahead of the sheet-qualified string.
pub(crate) fn qualify(
    body: String,
    sheet: Option<&str>,
    workbook: Option<&str>,
    include_sheet: bool,
    include_workbook: bool,
) -> String {
    let mut result = String::new();
    if include_workbook {
        if let Some(wb) = workbook {
            result.push('[');
            result.push_str(wb);
            result.push(']');
        }
    }
    if include_sheet {
        if let Some(name) = sheet {
            if name.contains(' ') {
                result.push('\'');
                result.push_str(name);
                result.push('\'');
            } else {
                result.push_str(name);
            }
            result.push('!');
        }
    }
    result.push_str(&body);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_a1() {
        assert_eq!(single_cell_a1(1, 1, false, false), "A1");
        assert_eq!(single_cell_a1(2, 4, true, true), "$D$2");
        assert_eq!(single_cell_a1(100, 3, true, false), "C$100");
        assert_eq!(single_cell_a1(5, 28, false, true), "$AB5");
    }

    #[test]
    fn test_single_cell_r1c1() {
        assert_eq!(single_cell_r1c1(5, 3, true, true), "R5C3");
        assert_eq!(single_cell_r1c1(0, -2, false, false), "R[0]C[-2]");
        assert_eq!(single_cell_r1c1(2, 2, true, false), "R2C[2]");
    }

    #[test]
    fn test_qualify_sheet() {
        assert_eq!(
            qualify("A1".into(), Some("Sheet1"), None, true, false),
            "Sheet1!A1"
        );
        assert_eq!(
            qualify("A1".into(), Some("Sheet 1"), None, true, false),
            "'Sheet 1'!A1"
        );
        assert_eq!(
            qualify("A1".into(), Some("Sheet1"), None, false, false),
            "A1"
        );
    }

    #[test]
    fn test_qualify_workbook() {
        assert_eq!(
            qualify("A1".into(), Some("Sheet1"), Some("Book1.xlsx"), true, true),
            "[Book1.xlsx]Sheet1!A1"
        );
        // Workbook requested but absent: nothing to prefix
        assert_eq!(
            qualify("A1".into(), Some("Sheet1"), None, true, true),
            "Sheet1!A1"
        );
    }
}
