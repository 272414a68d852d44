use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset};

/// Strings read as missing, matching the usual dataframe CSV defaults.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row followed by records (the primary format)
/// * `.json`    – `[{ "review": "...", "PRODUCT": "A", ... }, ...]`
/// * `.parquet` – any flat schema of string / numeric / boolean columns
pub fn load_file(path: &Path) -> Result<Dataset> {
    match extension_of(path).as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            load_csv_reader(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            load_json_str(&text)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load a dataset from in-memory bytes, e.g. a file dropped onto the window
/// that carries no path.  `name` is only used to pick the format.
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<Dataset> {
    match extension_of(Path::new(name)).as_str() {
        "csv" => load_csv_reader(bytes),
        "json" => {
            let text = std::str::from_utf8(bytes).context("JSON upload is not valid UTF-8")?;
            load_json_str(text)
        }
        "parquet" | "pq" => bail!("Parquet files must be opened from disk (File → Open…)"),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV from any byte stream.  The first record is the header.
/// Records with a different number of fields than the header are rejected,
/// and so is input without a header record.
pub fn load_csv_reader<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        bail!("No columns to parse from file");
    }

    let mut raw: Vec<Vec<String>> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        raw.push(record.iter().map(str::to_string).collect());
    }

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|col| ColumnKind::infer(raw.iter().map(|row| row[col].as_str())))
        .collect();
    let rows = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&kinds)
                .map(|(cell, kind)| kind.convert(cell))
                .collect()
        })
        .collect();

    Ok(Dataset::new(headers, rows))
}

/// Type shared by every non-missing cell of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// The narrowest kind that fits every non-missing cell.  A column with
    /// one non-numeric cell is text throughout, so `"10"` next to a review
    /// stays a string.
    fn infer<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
        let mut kind = ColumnKind::Integer;
        for cell in cells.filter(|c| !is_missing_marker(c)) {
            let trimmed = cell.trim();
            if kind == ColumnKind::Integer && trimmed.parse::<i64>().is_ok() {
                continue;
            }
            if parse_float(trimmed).is_some() {
                kind = ColumnKind::Float;
            } else {
                return ColumnKind::Text;
            }
        }
        kind
    }

    fn convert(self, cell: String) -> CellValue {
        if is_missing_marker(&cell) {
            return CellValue::Missing;
        }
        let trimmed = cell.trim();
        match self {
            ColumnKind::Integer => trimmed
                .parse::<i64>()
                .map(CellValue::Integer)
                .unwrap_or(CellValue::Text(cell)),
            ColumnKind::Float => match parse_float(trimmed) {
                Some(f) => CellValue::Float(f),
                None => CellValue::Text(cell),
            },
            ColumnKind::Text => CellValue::Text(cell),
        }
    }
}

fn is_missing_marker(s: &str) -> bool {
    MISSING_MARKERS.contains(&s)
}

fn parse_float(s: &str) -> Option<f64> {
    // Rust accepts "inf"/"infinity" as floats; keep those as text.
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "review": "Works great", "PRODUCT": "A", "rating": 5 },
///   ...
/// ]
/// ```
fn load_json_str(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    let mut parsed: Vec<BTreeMap<String, CellValue>> = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let mut row = BTreeMap::new();
        for (key, val) in obj {
            if !column_names.contains(key) {
                column_names.push(key.clone());
            }
            row.insert(key.clone(), json_to_cell(val));
        }
        parsed.push(row);
    }
    if column_names.is_empty() {
        bail!("No columns to parse from file");
    }

    let rows = parsed
        .into_iter()
        .map(|mut row| {
            column_names
                .iter()
                .map(|col| row.remove(col).unwrap_or(CellValue::Missing))
                .collect()
        })
        .collect();

    Ok(Dataset::new(column_names, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                float_cell(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Text(b.to_string()),
        JsonValue::Null => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file.  Every top-level column becomes a dataset column.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let columns = batch.columns();
        for row in 0..batch.num_rows() {
            rows.push(columns.iter().map(|col| extract_cell(col, row)).collect());
        }
    }

    Ok(Dataset::new(column_names, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Missing;
    }
    match col.data_type() {
        DataType::Utf8 => CellValue::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => float_cell(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => float_cell(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Text(col.as_boolean().value(row).to_string()),
        other => CellValue::Text(format!("{other:?}")),
    }
}

/// NaN is a missing value, not a category.
fn float_cell(f: f64) -> CellValue {
    if f.is_nan() {
        CellValue::Missing
    } else {
        CellValue::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn csv_trims_headers_and_types_cells() {
        let data = " review , PRODUCT ,rating\ngreat product,A,5\nterrible,B,1.5\n,A,NA\n";
        let ds = load_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(ds.column_names, vec!["review", "PRODUCT", "rating"]);
        assert_eq!(ds.len(), 3);
        // One decimal in the column makes the whole column float.
        assert_eq!(ds.rows[0], vec![text("great product"), text("A"), CellValue::Float(5.0)]);
        assert_eq!(ds.rows[1][2], CellValue::Float(1.5));
        assert_eq!(ds.rows[2][0], CellValue::Missing);
        assert_eq!(ds.rows[2][2], CellValue::Missing);
        assert!(!ds.has_sentiment());
    }

    #[test]
    fn csv_missing_markers_and_words() {
        let data = "a\nNaN\nnull\ninf\nnancy\n";
        let ds = load_csv_reader(data.as_bytes()).unwrap();
        let cells: Vec<_> = ds.column("a").unwrap().cloned().collect();
        assert_eq!(
            cells,
            vec![CellValue::Missing, CellValue::Missing, text("inf"), text("nancy")]
        );
    }

    #[test]
    fn csv_columns_are_typed_as_a_whole() {
        let data = "review,score,id\n10,1, 42 \ngreat,2.5,7\nNA,,8\n";
        let ds = load_csv_reader(data.as_bytes()).unwrap();

        let reviews: Vec<_> = ds.column("review").unwrap().cloned().collect();
        assert_eq!(reviews, vec![text("10"), text("great"), CellValue::Missing]);
        let scores: Vec<_> = ds.column("score").unwrap().cloned().collect();
        assert_eq!(
            scores,
            vec![CellValue::Float(1.0), CellValue::Float(2.5), CellValue::Missing]
        );
        let ids: Vec<_> = ds.column("id").unwrap().cloned().collect();
        assert_eq!(
            ids,
            vec![CellValue::Integer(42), CellValue::Integer(7), CellValue::Integer(8)]
        );
    }

    #[test]
    fn csv_without_header_is_an_error() {
        let err = load_csv_reader(&b""[..]).unwrap_err();
        assert_eq!(err.to_string(), "No columns to parse from file");
        assert!(load_bytes("empty.csv", b"").is_err());
    }

    #[test]
    fn csv_ragged_rows_are_an_error() {
        let data = "a,b\n1,2\n3,4,5\n";
        let err = load_csv_reader(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 2"));
    }

    #[test]
    fn parquet_columns_keep_order_and_types() {
        use arrow::array::{BooleanArray, Float64Array, Int64Array, StringArray};
        use arrow::datatypes::{Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new("review", DataType::Utf8, true),
            Field::new("rating", DataType::Int64, false),
            Field::new("price", DataType::Float64, false),
            Field::new("verified", DataType::Boolean, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec![Some("good"), None])),
                Arc::new(Int64Array::from(vec![5, 1])),
                Arc::new(Float64Array::from(vec![9.5, f64::NAN])),
                Arc::new(BooleanArray::from(vec![true, false])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column_names, vec!["review", "rating", "price", "verified"]);
        assert_eq!(
            ds.rows[0],
            vec![text("good"), CellValue::Integer(5), CellValue::Float(9.5), text("true")]
        );
        assert_eq!(
            ds.rows[1],
            vec![CellValue::Missing, CellValue::Integer(1), CellValue::Missing, text("false")]
        );
    }

    #[test]
    fn csv_header_only_is_empty_dataset() {
        let ds = load_csv_reader("text,PRODUCT\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_names.len(), 2);
    }

    #[test]
    fn json_records_fill_absent_keys() {
        let ds = load_json_str(r#"[{"text": "ok", "n": 1}, {"text": null, "extra": true}]"#)
            .unwrap();
        assert_eq!(ds.column_names.len(), 3);
        assert_eq!(ds.column_names[2], "extra");

        let texts: Vec<_> = ds.column("text").unwrap().cloned().collect();
        assert_eq!(texts, vec![text("ok"), CellValue::Missing]);
        let ns: Vec<_> = ds.column("n").unwrap().cloned().collect();
        assert_eq!(ns, vec![CellValue::Integer(1), CellValue::Missing]);
        let extra: Vec<_> = ds.column("extra").unwrap().cloned().collect();
        assert_eq!(extra, vec![CellValue::Missing, text("true")]);
    }

    #[test]
    fn json_must_be_array_of_objects() {
        assert!(load_json_str(r#"{"text": "x"}"#).is_err());
        assert!(load_json_str("[]").is_err());
        assert!(load_json_str(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.CSV");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "text,PRODUCT").unwrap();
        writeln!(f, "\"nice, really\",A").unwrap();
        drop(f);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.rows[0][0], text("nice, really"));

        let bad = dir.path().join("reviews.txt");
        std::fs::write(&bad, "x").unwrap();
        let err = load_file(&bad).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file extension: .txt");
    }

    #[test]
    fn bytes_upload_rejects_parquet() {
        assert!(load_bytes("data.parquet", b"PAR1").is_err());
        let ds = load_bytes("data.csv", b"a\nx\n").unwrap();
        assert_eq!(ds.rows[0][0], text("x"));
    }
}
