//! Typed coercion of raw cell text, and typed display
//!
//! The same rules apply to an in-place commit and to a paste.

use crate::date;
use crate::model::{CellValue, ColumnKind};

/// Turn raw editor/clipboard text into the value stored for a column.
///
/// - Number: blank text becomes `Empty`; numeric text becomes `Number`;
///   anything else (including `NaN`/`inf`) is kept verbatim as `Text`.
/// - Date / DateTime: parseable text is re-formatted with `date_pattern`;
///   unparseable text is kept verbatim.
/// - Text: stored unchanged.
pub fn coerce(kind: ColumnKind, raw: &str, date_pattern: &str) -> CellValue {
    match kind {
        ColumnKind::Text => CellValue::Text(raw.to_string()),
        ColumnKind::Number => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return CellValue::Empty;
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => CellValue::Number(n),
                _ => {
                    tracing::debug!(raw, "non-numeric text kept as raw text");
                    CellValue::Text(raw.to_string())
                }
            }
        }
        ColumnKind::Date | ColumnKind::DateTime => {
            match date::parse(raw, Some(date_pattern)) {
                Some(instant) if kind == ColumnKind::Date => {
                    CellValue::Text(date::format_date(&instant, date_pattern))
                }
                Some(instant) => CellValue::Text(date::format_date_time(&instant, date_pattern)),
                None => CellValue::Text(raw.to_string()),
            }
        }
    }
}

/// Display text for a stored value; dates go through the date formatter
pub fn display(kind: ColumnKind, value: Option<&CellValue>, date_pattern: &str) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match (kind, value) {
        (ColumnKind::Date | ColumnKind::DateTime, CellValue::Text(text)) => {
            match date::parse(text, Some(date_pattern)) {
                Some(instant) if kind == ColumnKind::Date => date::format_date(&instant, date_pattern),
                Some(instant) => date::format_date_time(&instant, date_pattern),
                None => text.clone(),
            }
        }
        _ => value.to_display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERN: &str = "dd.mm.yyyy";

    #[test]
    fn test_number_coercion() {
        assert_eq!(coerce(ColumnKind::Number, "15", PATTERN), CellValue::Number(15.0));
        assert_eq!(coerce(ColumnKind::Number, " 2.5 ", PATTERN), CellValue::Number(2.5));
        assert_eq!(coerce(ColumnKind::Number, "", PATTERN), CellValue::Empty);
        assert_eq!(coerce(ColumnKind::Number, "   ", PATTERN), CellValue::Empty);
    }

    #[test]
    fn test_non_numeric_kept_as_text() {
        assert_eq!(coerce(ColumnKind::Number, "abc", PATTERN), CellValue::from("abc"));
        assert_eq!(coerce(ColumnKind::Number, "NaN", PATTERN), CellValue::from("NaN"));
        assert_eq!(coerce(ColumnKind::Number, "inf", PATTERN), CellValue::from("inf"));
    }

    #[test]
    fn test_date_coercion() {
        assert_eq!(coerce(ColumnKind::Date, "05.01.2026", PATTERN), CellValue::from("05.01.2026"));
        assert_eq!(coerce(ColumnKind::Date, "2026-01-05", PATTERN), CellValue::from("05.01.2026"));
        assert_eq!(coerce(ColumnKind::Date, "next week", PATTERN), CellValue::from("next week"));
        assert_eq!(coerce(ColumnKind::Date, "31.02.2026", PATTERN), CellValue::from("31.02.2026"));
    }

    #[test]
    fn test_date_time_coercion() {
        assert_eq!(
            coerce(ColumnKind::DateTime, "2026-01-05T09:30", PATTERN),
            CellValue::from("05.01.2026 09:30")
        );
    }

    #[test]
    fn test_text_unchanged() {
        assert_eq!(coerce(ColumnKind::Text, " 12 ", PATTERN), CellValue::from(" 12 "));
    }

    #[test]
    fn test_display() {
        assert_eq!(display(ColumnKind::Number, Some(&CellValue::Number(12.0)), PATTERN), "12");
        assert_eq!(display(ColumnKind::Date, Some(&CellValue::from("2026-01-05")), PATTERN), "05.01.2026");
        assert_eq!(display(ColumnKind::Date, Some(&CellValue::from("soon")), PATTERN), "soon");
        assert_eq!(display(ColumnKind::Text, None, PATTERN), "");
    }
}
