//! Column letter codec
//!
//! Spreadsheet columns are numbered from 1 and displayed as letter runs:
//! A=1, B=2, ..., Z=26, AA=27, ..., ZZ=702, AAA=703. This is bijective
//! base-26 with no zero digit, not ordinary base-26: a naive `n % 26`
//! without the offset produces wrong letters above column 26.

use crate::error::{Error, Result};

/// Convert a 1-based column number to its letter run (1 = "A", 27 = "AA")
///
/// # Examples
/// ```
/// use gridref::column;
///
/// assert_eq!(column::number_to_name(1).unwrap(), "A");
/// assert_eq!(column::number_to_name(703).unwrap(), "AAA");
/// ```
pub fn number_to_name(n: u32) -> Result<String> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "column number must be >= 1".into(),
        ));
    }
    Ok(letters(n))
}

/// Convert a letter run to its 1-based column number ("A" = 1, "AA" = 27)
///
/// Accepts lowercase letters; any non-letter character is an error.
pub fn name_to_number(name: &str) -> Result<u32> {
    if name.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}' in '{}'",
                c, name
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    Ok(col)
}

/// Letter run for a 1-based column number; total for n >= 1 (n == 0 gives "")
pub(crate) fn letters(mut n: u32) -> String {
    let mut result = String::new();
    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_name() {
        assert_eq!(number_to_name(1).unwrap(), "A");
        assert_eq!(number_to_name(2).unwrap(), "B");
        assert_eq!(number_to_name(26).unwrap(), "Z");
        assert_eq!(number_to_name(27).unwrap(), "AA");
        assert_eq!(number_to_name(28).unwrap(), "AB");
        assert_eq!(number_to_name(702).unwrap(), "ZZ");
        assert_eq!(number_to_name(703).unwrap(), "AAA");
        assert_eq!(number_to_name(16384).unwrap(), "XFD");
    }

    #[test]
    fn test_number_to_name_zero() {
        assert!(number_to_name(0).is_err());
    }

    #[test]
    fn test_name_to_number() {
        assert_eq!(name_to_number("A").unwrap(), 1);
        assert_eq!(name_to_number("B").unwrap(), 2);
        assert_eq!(name_to_number("Z").unwrap(), 26);
        assert_eq!(name_to_number("AA").unwrap(), 27);
        assert_eq!(name_to_number("ZZ").unwrap(), 702);
        assert_eq!(name_to_number("AAA").unwrap(), 703);
        assert_eq!(name_to_number("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(name_to_number("a").unwrap(), 1);
        assert_eq!(name_to_number("aA").unwrap(), 27);
    }

    #[test]
    fn test_name_to_number_errors() {
        assert!(name_to_number("").is_err());
        assert!(name_to_number("A1").is_err());
        assert!(name_to_number("$A").is_err());
        assert!(name_to_number("A B").is_err());
    }

    #[test]
    fn test_round_trip() {
        for n in 1..=1000 {
            let name = number_to_name(n).unwrap();
            assert_eq!(name_to_number(&name).unwrap(), n, "column {}", n);
        }
    }
}
