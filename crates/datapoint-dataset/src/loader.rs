//! Property listing CSV loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use datapoint_types::PropertyRecord;
use tracing::debug;

use crate::DatasetError;

/// Columns a property export must provide, in output order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "date",
    "location_area",
    "property_type_description",
    "price_total",
    "number_of_bedrooms",
    "area_range",
    "ad_link",
];

/// Field values read as missing, matching the pandas defaults.
pub const MISSING_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if `value` counts as a missing field.
///
/// The comparison is exact; padded tokens such as `" NA "` are values.
#[must_use]
pub fn is_missing(value: &str) -> bool {
    MISSING_VALUES.contains(&value)
}

/// Loads property listings from the CSV file at `path`.
///
/// Rows missing any required value are dropped, and `location_area` is
/// exposed as `location`. With `location` set, only rows in that location
/// (ignoring case and surrounding whitespace) are kept.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened,
/// [`DatasetError::MissingColumns`] if the header lacks a required column,
/// or [`DatasetError::Csv`] for malformed CSV.
pub fn load_properties(
    path: impl AsRef<Path>,
    location: Option<&str>,
) -> Result<Vec<PropertyRecord>, DatasetError> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?location, "loading properties");
    let file = File::open(path)?;
    read_properties(BufReader::new(file), location)
}

/// Reads property listings from any CSV source.
///
/// # Errors
///
/// See [`load_properties`].
pub fn read_properties<R: Read>(
    reader: R,
    location: Option<&str>,
) -> Result<Vec<PropertyRecord>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let indices = column_indices(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for result in csv_reader.records() {
        let row = result?;
        match parse_row(&row, &indices) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }
    debug!(kept = records.len(), dropped, "dropped rows with missing or invalid values");

    if let Some(location) = location {
        records.retain(|r| r.is_in(location));
        debug!(location, kept = records.len(), "filtered by location");
    }
    Ok(records)
}

/// Position of each required column in the header; the first occurrence wins.
fn column_indices(headers: &StringRecord) -> Result<[usize; 7], DatasetError> {
    let mut indices = [0usize; 7];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h.trim() == name) {
            Some(i) => *slot = i,
            None => missing.push(name.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

/// Builds a record from one row, or `None` if a required value is missing.
///
/// A numeric column that does not hold a number counts as missing.
fn parse_row(row: &StringRecord, indices: &[usize; 7]) -> Option<PropertyRecord> {
    let mut fields = [""; 7];
    for (field, &i) in fields.iter_mut().zip(indices) {
        *field = row.get(i).filter(|value| !is_missing(value))?;
    }

    let [date, location, property_type, price, bedrooms, area_range, ad_link] = fields;
    let (Some(price_total), Some(number_of_bedrooms)) = (parse_price(price), parse_count(bedrooms))
    else {
        debug!(
            line = row.position().map_or(0, csv::Position::line),
            price, bedrooms, "dropping row with non-numeric values"
        );
        return None;
    };

    Some(PropertyRecord {
        date: date.to_string(),
        location: location.to_string(),
        property_type_description: property_type.to_string(),
        price_total,
        number_of_bedrooms,
        area_range: area_range.to_string(),
        ad_link: ad_link.to_string(),
    })
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Parses a whole, non-negative count; `3.0` is accepted as `3`.
fn parse_count(value: &str) -> Option<u32> {
    let value = value.trim();
    if let Ok(n) = value.parse::<u32>() {
        return Some(n);
    }
    let n = value.parse::<f64>().ok()?;
    (n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n <= f64::from(u32::MAX)).then(|| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,date,location_area,property_type_description,price_total,number_of_bedrooms,area_range,ad_link,broker";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_selects_and_renames() {
        let file = write_temp(&csv(&[
            "1,2023-05-01,Oslo,Leilighet,4500000,2,50-75,https://example.com/1,Acme",
            "2,2023-05-02,Bergen,Enebolig,6200000.5,4.0,100-150,https://example.com/2,",
        ]));
        let records = load_properties(file.path(), None).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location, "Oslo");
        assert_eq!(records[0].number_of_bedrooms, 2);
        assert_relative_eq!(records[1].price_total, 6_200_000.5);
        assert_eq!(records[1].number_of_bedrooms, 4);
        assert_eq!(records[1].ad_link, "https://example.com/2");
    }

    #[test]
    fn test_rows_with_missing_values_dropped() {
        let file = write_temp(&csv(&[
            "1,2023-05-01,Oslo,Leilighet,4500000,2,50-75,https://example.com/1,x",
            "2,2023-05-02,,Leilighet,3900000,1,25-50,https://example.com/2,x",
            "3,2023-05-03,Oslo,Leilighet,NaN,1,25-50,https://example.com/3,x",
            "4,2023-05-04,Oslo,Leilighet,3100000,N/A,25-50,https://example.com/4,x",
            "5,2023-05-05,Oslo,Leilighet,3100000,1,25-50",
        ]));
        let records = load_properties(file.path(), None).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ad_link, "https://example.com/1");
    }

    #[test]
    fn test_missing_only_in_extra_column_kept() {
        let data = csv(&["1,2023-05-01,Oslo,Leilighet,4500000,2,50-75,https://example.com/1,NA"]);
        let records = read_properties(data.as_bytes(), None).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_location_filter() {
        let data = csv(&[
            "1,2023-05-01,Oslo,Leilighet,4500000,2,50-75,https://example.com/1,x",
            "2,2023-05-02,Bergen,Leilighet,3900000,1,25-50,https://example.com/2,x",
            "3,2023-05-03, oslo ,Rekkehus,5100000,3,75-100,https://example.com/3,x",
        ]);
        let records = read_properties(data.as_bytes(), Some("OSLO")).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_in("oslo")));

        let none = read_properties(data.as_bytes(), Some("Tromsø")).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_missing_columns() {
        let data = "date,location_area,price_total\n2023-05-01,Oslo,1\n";
        let err = read_properties(data.as_bytes(), None).unwrap_err();
        match err {
            DatasetError::MissingColumns(columns) => assert_eq!(
                columns,
                vec![
                    "property_type_description",
                    "number_of_bedrooms",
                    "area_range",
                    "ad_link"
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_rows_dropped() {
        let data = csv(&[
            "1,2023-05-01,Oslo,Leilighet,4500000,2,50-75,https://example.com/1,x",
            "2,2023-05-02,Oslo,Leilighet,1 200 000,2,50-75,https://example.com/2,x",
            "3,2023-05-03,Oslo,Leilighet,3900000,4+,50-75,https://example.com/3,x",
            "4,2023-05-04,Oslo,Leilighet,3900000,2.5,50-75,https://example.com/4,x",
        ]);
        let records = read_properties(data.as_bytes(), None).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ad_link, "https://example.com/1");
    }

    #[test]
    fn test_padded_tokens_are_values() {
        let data = csv(&["1,2023-05-01,Oslo, NA ,4500000,2,50-75,https://example.com/1,x"]);
        let records = read_properties(data.as_bytes(), None).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].property_type_description, " NA ");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_properties(dir.path().join("absent.csv"), None).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_is_missing() {
        for token in ["", "NA", "nan", "<NA>", "#N/A N/A", "None"] {
            assert!(is_missing(token), "{token:?} should be missing");
        }
        assert!(!is_missing(" "));
        assert!(!is_missing(" NA "));
        assert!(!is_missing("0"));
        assert!(!is_missing("Nan Oslo"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("3.0"), Some(3));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("inf"), None);
    }
}
