//! Property record writers.

use std::io::Write;

use datapoint_types::PropertyRecord;

use crate::DatasetError;

/// Output format for property records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json]
    }

    /// Writes `records` to `writer` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W: Write>(
        &self,
        records: &[PropertyRecord],
        writer: W,
    ) -> Result<(), DatasetError> {
        match self {
            Self::Csv => write_csv(records, writer),
            Self::Json => write_json(records, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(DatasetError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes records as CSV; the header names the columns of [`PropertyRecord`].
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(records: &[PropertyRecord], writer: W) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if records.is_empty() {
        csv_writer.write_record(PropertyRecord::COLUMNS)?;
    }
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_json<W: Write>(records: &[PropertyRecord], mut writer: W) -> Result<(), DatasetError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PropertyRecord {
        PropertyRecord {
            date: "2023-05-01".to_string(),
            location: "Oslo".to_string(),
            property_type_description: "Leilighet".to_string(),
            price_total: 4_500_000.0,
            number_of_bedrooms: 2,
            area_range: "50-75".to_string(),
            ad_link: "https://example.com/1".to_string(),
        }
    }

    #[test]
    fn test_csv_header_uses_location() {
        let mut output = Vec::new();
        write_csv(&[record()], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, PropertyRecord::COLUMNS.join(","));
        assert!(!text.contains("location_area"));
        assert!(text.contains("Oslo,Leilighet"));
    }

    #[test]
    fn test_csv_empty_still_has_header() {
        let mut output = Vec::new();
        write_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap().trim_end(),
            PropertyRecord::COLUMNS.join(",")
        );
    }

    #[test]
    fn test_json_array() {
        let mut output = Vec::new();
        OutputFormat::Json.write(&[record()], &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["location"], "Oslo");
        assert_eq!(rows[0]["number_of_bedrooms"], 2);
        assert!(rows[0].get("location_area").is_none());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "parquet".parse::<OutputFormat>(),
            Err(DatasetError::UnknownFormat(_))
        ));
        assert_eq!(OutputFormat::default().to_string(), "csv");
    }
}
