use crate::domain::model::{Download, SortMode};
use crate::utils::error::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::cmp::Ordering;

pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Leading-integer parse with `parseInt` semantics: optional sign, then
/// digits, trailing garbage ignored. `None` when no digit leads the text.
/// Values beyond the `i64` range saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Numeric ordering: text without a leading integer sorts before every number.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (parse_leading_int(a), parse_leading_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Fallback collation for hosts without `localeCompare`: case-insensitive
/// first, then by raw code points so the order stays total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// New row order (indices into `keys`) for an ascending, stable sort.
///
/// `keys` holds the trimmed text of the sort column for each body row;
/// `collate` is only consulted in lexicographic mode.
pub fn sort_order<F>(keys: &[String], mode: SortMode, collate: F) -> Vec<usize>
where
    F: Fn(&str, &str) -> Ordering,
{
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&i, &j| match mode {
        SortMode::Numeric => compare_numeric(&keys[i], &keys[j]),
        SortMode::Lexicographic => collate(&keys[i], &keys[j]),
    });
    order
}

/// Text of `column` in a row of cell texts, trimmed; empty when the row is short.
pub fn sort_key(cells: &[String], column: usize) -> String {
    cells
        .get(column)
        .map(|cell| cell.trim().to_string())
        .unwrap_or_default()
}

/// Every field quoted, embedded quotes doubled, rows joined by `\n`.
/// A row without cells becomes an empty line.
pub fn rows_to_csv(rows: &[Vec<String>]) -> Result<String> {
    let lines = rows
        .iter()
        .map(|row| encode_row(row))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

// csv writes an empty record as `""`, which would read back as one field
fn encode_row(row: &[String]) -> Result<String> {
    if row.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(row.iter().map(|cell| cell.trim()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::utils::error::PageError::IoError(e.into_error()))?;
    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

pub fn csv_download(rows: &[Vec<String>], filename: Option<&str>) -> Result<Download> {
    let filename = filename
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_EXPORT_FILENAME);

    Ok(Download {
        filename: filename.to_string(),
        mime_type: CSV_MIME_TYPE.to_string(),
        body: rows_to_csv(rows)?,
    })
}

const PRINT_STYLES: &str = "body { font-family: Arial, sans-serif; }\
table { border-collapse: collapse; width: 100%; }\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\
th { background-color: #f5f5f5; }";

/// Standalone document wrapping a snapshot of the table markup.
pub fn print_document(table_html: &str) -> String {
    format!(
        "<html><head><title>Print Table</title><style>{}</style></head><body>{}</body></html>",
        PRINT_STYLES, table_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sorted(values: &[&str], mode: SortMode) -> Vec<String> {
        let keys = keys(values);
        sort_order(&keys, mode, compare_text)
            .into_iter()
            .map(|i| keys[i].clone())
            .collect()
    }

    #[test]
    fn test_numeric_sort() {
        assert_eq!(sorted(&["10", "2", "1"], SortMode::Numeric), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_lexicographic_sort() {
        assert_eq!(
            sorted(&["10", "2", "1"], SortMode::Lexicographic),
            vec!["1", "10", "2"]
        );
        assert_eq!(
            sorted(&["banana", "Apple", "cherry"], SortMode::Lexicographic),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_numeric_sort_puts_non_numeric_first_and_keeps_their_order() {
        assert_eq!(
            sorted(&["7", "n/a", "-3", "", "12abc", "pending"], SortMode::Numeric),
            vec!["n/a", "", "pending", "-3", "7", "12abc"]
        );
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("-8 points"), Some(-8));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_sort_key_handles_short_rows() {
        let row = keys(&["  S001 ", "Alice"]);
        assert_eq!(sort_key(&row, 0), "S001");
        assert_eq!(sort_key(&row, 5), "");
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let rows = vec![keys(&["ID", "Name"]), keys(&[" S001 ", "Alice"])];
        assert_eq!(rows_to_csv(&rows).unwrap(), "\"ID\",\"Name\"\n\"S001\",\"Alice\"");
    }

    #[test]
    fn test_csv_escapes_quotes_and_keeps_commas() {
        let rows = vec![keys(&["say \"hi\"", "Nguyen, An"])];
        let csv = rows_to_csv(&rows).unwrap();
        assert_eq!(csv, "\"say \"\"hi\"\"\",\"Nguyen, An\"");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "say \"hi\"");
        assert_eq!(&record[1], "Nguyen, An");
    }

    #[test]
    fn test_csv_allows_ragged_rows() {
        let rows = vec![keys(&["a", "b", "c"]), keys(&["only"])];
        assert_eq!(rows_to_csv(&rows).unwrap(), "\"a\",\"b\",\"c\"\n\"only\"");
    }

    #[test]
    fn test_csv_row_without_cells_is_an_empty_line() {
        let rows = vec![keys(&["a"]), Vec::new(), keys(&["b"])];
        let csv = rows_to_csv(&rows).unwrap();
        assert_eq!(csv, "\"a\"\n\n\"b\"");

        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines, vec!["\"a\"", "", "\"b\""]);
        assert_eq!(rows_to_csv(&[Vec::new()]).unwrap(), "");
    }

    #[test]
    fn test_csv_download_defaults_filename() {
        let download = csv_download(&[keys(&["x"])], None).unwrap();
        assert_eq!(download.filename, "export.csv");
        assert_eq!(download.mime_type, "text/csv");

        let named = csv_download(&[keys(&["x"])], Some("students.csv")).unwrap();
        assert_eq!(named.filename, "students.csv");
        assert_eq!(csv_download(&[], Some("  ")).unwrap().filename, "export.csv");
    }

    #[test]
    fn test_print_document_wraps_table() {
        let doc = print_document("<table class=\"table\"></table>");
        assert!(doc.starts_with("<html><head><title>Print Table</title>"));
        assert!(doc.contains("border-collapse: collapse"));
        assert!(doc.ends_with("<body><table class=\"table\"></table></body></html>"));
    }
}
