//! Format conversion into normalized JSON

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::FileFormat;

/// Converter from supported input formats to an in-memory JSON value
pub struct Converter;

impl Converter {
    /// Convert a file's bytes based on its filename extension.
    ///
    /// CSV becomes an array of objects keyed by the header row, one object
    /// per data row, every value kept as text. JSON is parsed into its
    /// native structure. Any other extension is rejected.
    pub fn convert(filename: &str, data: &[u8]) -> Result<Value> {
        let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();

        let format = FileFormat::from_extension(&extension);
        if !format.is_supported() {
            return Err(Error::UnsupportedFormat(extension));
        }

        match format {
            FileFormat::Csv => Self::convert_csv(filename, data),
            FileFormat::Json => Self::convert_json(filename, data),
            FileFormat::Unknown => unreachable!("unsupported formats rejected above"),
        }
    }

    /// Parse CSV into an array of header-keyed objects
    fn convert_csv(filename: &str, data: &[u8]) -> Result<Value> {
        let mut reader = csv::Reader::from_reader(data);

        let headers = reader
            .headers()
            .map_err(|e| Error::parse(filename, e.to_string()))?
            .clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Error::parse(filename, e.to_string()))?;

            let mut row = Map::new();
            for (header, cell) in headers.iter().zip(record.iter()) {
                row.insert(header.to_string(), Value::String(cell.to_string()));
            }
            rows.push(Value::Object(row));
        }

        Ok(Value::Array(rows))
    }

    /// Parse JSON into its native structure
    fn convert_json(filename: &str, data: &[u8]) -> Result<Value> {
        serde_json::from_slice(data).map_err(|e| Error::parse(filename, e.to_string()))
    }
}

/// Serialize a value as pretty-printed JSON with 4-space indentation.
/// Non-ASCII characters are written literally, not escaped.
pub fn to_pretty_json(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
