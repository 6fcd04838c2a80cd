//! Delimited-text tables with a label column and a label header row.

use serde::Serialize;

use crate::error::{FloorplanError, Result};

/// Field delimiter of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Tab when the header has tabs and no commas, comma otherwise.
    pub fn detect(header: &str) -> Self {
        if header.contains('\t') && !header.contains(',') {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        }
    }

    fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// Numeric matrix with row and column labels, exactly as read from the file.
///
/// Nothing here checks squareness; see [`crate::importer::import_matrix`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledMatrix {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl LabeledMatrix {
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Column count of the value grid (0 for an empty table).
    pub fn cols(&self) -> usize {
        self.values.first().map_or(self.col_labels.len(), Vec::len)
    }

    pub fn is_square(&self) -> bool {
        self.values.iter().all(|row| row.len() == self.rows())
    }
}

/// Parse table text. The first non-blank record is the header: its first cell
/// names the index column and is ignored, the rest are column labels. Every
/// following record is `label, v1, v2, ...`. Quoted fields may span lines.
pub fn parse_table(text: &str) -> Result<LabeledMatrix> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let header_line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| FloorplanError::parse(1, "table is empty"))?;
    let delim = Delimiter::detect(header_line);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delim.as_byte())
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = rdr.headers().map_err(csv_error)?;
    if header.iter().all(str::is_empty) {
        return Err(FloorplanError::parse(1, "table is empty"));
    }
    let col_labels: Vec<String> = header.iter().skip(1).map(str::to_string).collect();

    let mut row_labels = Vec::new();
    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_no = record_line(&record);
        let label = record.get(0).unwrap_or_default().to_string();
        let row = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(col, field)| parse_value(field, line_no, col + 2))
            .collect::<Result<Vec<f64>>>()?;
        if row.len() != col_labels.len() {
            return Err(FloorplanError::parse(
                line_no,
                format!(
                    "expected {} values after the row label, found {}",
                    col_labels.len(),
                    row.len()
                ),
            ));
        }
        row_labels.push(label);
        values.push(row);
    }

    Ok(LabeledMatrix {
        row_labels,
        col_labels,
        values,
    })
}

fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

fn csv_error(err: csv::Error) -> FloorplanError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    FloorplanError::parse(line, err.to_string())
}

fn parse_value(field: &str, line: usize, col: usize) -> Result<f64> {
    if field.is_empty() {
        return Err(FloorplanError::parse(line, format!("column {} is empty", col)));
    }
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FloorplanError::parse(
            line,
            format!("column {}: {:?} is not a number", col, field),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_labels_keep_delimiters_and_escapes() {
        let text = concat!(
            ",\"CPU, core\",\"say \"\"hi\"\"\"\n",
            "\"CPU, core\",1,0\n",
            "\"say \"\"hi\"\"\",0,2\n",
        );
        let m = parse_table(text).unwrap();
        assert_eq!(m.col_labels, vec!["CPU, core", r#"say "hi""#]);
        assert_eq!(m.row_labels, m.col_labels);
    }

    #[test]
    fn quoted_label_may_span_lines() {
        let m = parse_table(",\"CPU\ncore\",B\n\"CPU\ncore\",4,1\nB,1,9\n").unwrap();
        assert_eq!(m.col_labels, vec!["CPU\ncore", "B"]);
        assert_eq!(m.row_labels, vec!["CPU\ncore", "B"]);
        assert_eq!(m.values, vec![vec![4.0, 1.0], vec![1.0, 9.0]]);
    }

    #[test]
    fn errors_report_physical_line_after_multiline_field() {
        let err = parse_table(",\"A\nx\",B\n\"A\nx\",1,2\nB,3\n").unwrap_err();
        assert!(matches!(err, FloorplanError::Parse { line: 5, .. }), "{err:?}");
    }

    #[test]
    fn parses_labels_and_values() {
        let m = parse_table(",A,B\nA,4,1\nB,1,9\n").unwrap();
        assert_eq!(m.col_labels, vec!["A", "B"]);
        assert_eq!(m.row_labels, vec!["A", "B"]);
        assert_eq!(m.values, vec![vec![4.0, 1.0], vec![1.0, 9.0]]);
        assert!(m.is_square());
    }

    #[test]
    fn detects_tabs_and_bom() {
        let m = parse_table("\u{feff}name\tX\tY\r\nX\t1\t0\r\n\r\nY\t0\t2.5\r\n").unwrap();
        assert_eq!(m.col_labels, vec!["X", "Y"]);
        assert_eq!(m.values[1], vec![0.0, 2.5]);
    }

    #[test]
    fn ragged_row_is_parse_error() {
        let err = parse_table(",A,B\nA,1,2\nB,3\n").unwrap_err();
        assert!(matches!(err, FloorplanError::Parse { line: 3, .. }));
    }

    #[test]
    fn non_numeric_is_parse_error() {
        let err = parse_table(",A\nA,lots\n").unwrap_err();
        assert!(matches!(err, FloorplanError::Parse { line: 2, .. }));
        assert!(parse_table(",A\nA,NaN\n").is_err());
        assert!(parse_table(",A\nA,\n").is_err());
    }

    #[test]
    fn empty_table_is_parse_error() {
        assert!(matches!(parse_table("\n  \n"), Err(FloorplanError::Parse { .. })));
    }
}
