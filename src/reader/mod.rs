//! Reading product records from delimited CSV files.
//!
//! Files are processed strictly in the order given:
//!
//! ```text
//! open file ──▶ headers ──▶ required-column check ──▶ row loop
//!                                                      │
//!                             valid row ──▶ Product ◀──┤
//!                             bad row ──▶ warn + skip ◀┘
//! ```
//!
//! Structural problems (missing file, no headers, missing columns,
//! malformed data) abort the whole read. Rows that fail validation or
//! conversion are skipped with a warning and counted; the read then
//! succeeds on the valid subset.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::convert::{normalize_text, parse_number};
use crate::error::{ReadError, ReadResult, RowError, RowResult};
use crate::models::Product;
use crate::validate::{is_empty_row, validate_rating, validate_required_fields};

/// Columns every input file must declare in its header row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "brand", "price", "rating"];

/// Read product records from one or more CSV files.
///
/// Files are read in the given order and their records concatenated.
/// Returns a [`ReadError`] on the first structural problem; row-level
/// problems only skip the offending row.
pub fn read_products<P: AsRef<Path>>(paths: &[P]) -> ReadResult<Vec<Product>> {
    let mut products = Vec::new();

    for path in paths {
        let path = path.as_ref();
        debug!(file = %path.display(), "processing file");
        products.extend(read_single_file(path)?);
    }

    debug!(total = products.len(), "finished reading product records");
    Ok(products)
}

fn read_single_file(path: &Path) -> ReadResult<Vec<Product>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // Short rows are tolerated here; their absent cells surface as
    // missing values during row processing.
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReadError::Format {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() {
        return Err(ReadError::NoHeaders {
            path: path.to_path_buf(),
        });
    }

    validate_headers(&headers, path)?;
    process_rows(&mut reader, &headers, path)
}

fn validate_headers(headers: &[String], path: &Path) -> ReadResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|&column| !headers.iter().any(|h| h == column))
        .map(String::from)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReadError::MissingColumns {
            path: path.to_path_buf(),
            missing,
            found: headers.to_vec(),
        })
    }
}

fn process_rows(
    reader: &mut csv::Reader<File>,
    headers: &[String],
    path: &Path,
) -> ReadResult<Vec<Product>> {
    let mut products = Vec::new();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for (index, record) in reader.records().enumerate() {
        // The header row occupies line 1; data rows count from 2.
        let row_number = index + 2;

        let record = record.map_err(|e| ReadError::Format {
            path: path.to_path_buf(),
            source: e,
        })?;
        let row = raw_row(headers, &record);

        if is_empty_row(&row) {
            warn!(
                file = %path.display(),
                row = row_number,
                "skipping empty row"
            );
            skipped += 1;
            continue;
        }

        match product_from_row(&row) {
            Ok(product) => {
                products.push(product);
                processed += 1;
            }
            Err(e) => {
                warn!(
                    file = %path.display(),
                    row = row_number,
                    error = %e,
                    "skipping invalid row"
                );
                skipped += 1;
            }
        }
    }

    debug!(
        file = %path.display(),
        processed,
        skipped,
        "file done"
    );
    Ok(products)
}

/// Pair each header with its cell for this record.
///
/// Cells the record does not supply become `Null`; extra cells beyond
/// the headers are ignored.
fn raw_row(headers: &[String], record: &csv::StringRecord) -> Map<String, Value> {
    let mut row = Map::new();

    for (i, header) in headers.iter().enumerate() {
        let cell = match record.get(i) {
            Some(text) => Value::String(text.to_string()),
            None => Value::Null,
        };
        row.insert(header.clone(), cell);
    }

    row
}

/// Build a [`Product`] from a raw row.
///
/// Validates required fields on the raw values first, then normalizes
/// text and converts numerics, then checks the rating range.
fn product_from_row(row: &Map<String, Value>) -> RowResult<Product> {
    validate_required_fields(row)?;

    let name = normalize_text(row.get("name").unwrap_or(&Value::Null));
    let brand = normalize_text(row.get("brand").unwrap_or(&Value::Null)).to_lowercase();
    let price = parse_number(row.get("price").unwrap_or(&Value::Null)).map_err(|e| {
        RowError::Conversion {
            field: "price",
            source: e,
        }
    })?;
    let rating = parse_number(row.get("rating").unwrap_or(&Value::Null)).map_err(|e| {
        RowError::Conversion {
            field: "rating",
            source: e,
        }
    })?;

    validate_rating(rating)?;

    Ok(Product {
        name,
        brand,
        price,
        rating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_csv(content: &str) -> NamedTempFile {
        temp_csv_bytes(content.as_bytes())
    }

    fn temp_csv_bytes(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_single_valid_file() {
        let file = temp_csv(concat!(
            "name,brand,price,rating\n",
            "iPhone 15 Pro,apple,999,4.9\n",
            "Galaxy S23 Ultra,samsung,1199,4.8\n",
            "Redmi Note 12,xiaomi,199,4.6",
        ));

        let products = read_products(&[file.path()]).unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "iPhone 15 Pro");
        assert_eq!(products[0].brand, "apple");
        assert_eq!(products[0].price, 999.0);
        assert_eq!(products[0].rating, 4.9);
        assert_eq!(products[1].brand, "samsung");
        assert_eq!(products[2].brand, "xiaomi");
    }

    #[test]
    fn test_no_files_yield_no_products() {
        let products = read_products::<&Path>(&[]).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_read_multiple_files_in_order() {
        let first = temp_csv("name,brand,price,rating\nProduct1,brand1,100,4.5");
        let second = temp_csv("name,brand,price,rating\nProduct2,brand2,200,4.0");

        let products = read_products(&[first.path(), second.path()]).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].brand, "brand1");
        assert_eq!(products[1].brand, "brand2");
    }

    #[test]
    fn test_file_not_found() {
        let err = read_products(&["nonexistent.csv"]).unwrap_err();

        assert!(matches!(err, ReadError::FileNotFound { .. }));
        assert!(err.to_string().contains("nonexistent.csv"));
        assert!(err.to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_failure_reports_io_error() {
        // A path that uses a regular file as a directory fails to open
        // with NotADirectory, not NotFound.
        let file = temp_csv("name,brand,price,rating\n");
        let path = file.path().join("products.csv");

        let err = read_products(&[path.as_path()]).unwrap_err();

        assert!(matches!(err, ReadError::Io { .. }));
        assert!(err.to_string().contains("products.csv"));
    }

    #[test]
    fn test_missing_required_columns() {
        let file = temp_csv("name,price,rating\nProduct1,100,4.5");

        let err = read_products(&[file.path()]).unwrap_err();

        match err {
            ReadError::MissingColumns { missing, found, .. } => {
                assert_eq!(missing, vec!["brand".to_string()]);
                assert!(found.contains(&"name".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_has_no_headers() {
        let file = temp_csv("");

        let err = read_products(&[file.path()]).unwrap_err();
        assert!(matches!(err, ReadError::NoHeaders { .. }));
        assert!(err.to_string().contains("no headers"));
    }

    #[test]
    fn test_invalid_utf8_cell_aborts_read() {
        // A decode failure is structural: the whole read fails, the
        // valid first row does not survive as a partial result.
        let file = temp_csv_bytes(
            b"name,brand,price,rating\nGood One,acme,100,4.5\nBad One,\xFF\xFE,100,4.5\n",
        );

        let err = read_products(&[file.path()]).unwrap_err();

        assert!(matches!(err, ReadError::Format { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_invalid_utf8_header_aborts_read() {
        let file = temp_csv_bytes(b"name,br\xFF\xFEand,price,rating\nWidget,acme,100,4.5\n");

        let err = read_products(&[file.path()]).unwrap_err();
        assert!(matches!(err, ReadError::Format { .. }));
    }

    #[test]
    fn test_header_only_file_yields_no_products() {
        let file = temp_csv("name,brand,price,rating");

        let products = read_products(&[file.path()]).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_cells_are_trimmed_and_brand_lowercased() {
        let file = temp_csv(concat!(
            "name,brand,price,rating\n",
            "  iPhone 15 Pro  ,  Apple  ,  999  ,  4.9  \n",
            "Galaxy S23 Ultra , Samsung,1199,4.8",
        ));

        let products = read_products(&[file.path()]).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "iPhone 15 Pro");
        assert_eq!(products[0].brand, "apple");
        assert_eq!(products[0].price, 999.0);
        assert_eq!(products[0].rating, 4.9);
        assert_eq!(products[1].brand, "samsung");
    }

    #[test]
    fn test_empty_rows_are_skipped() {
        let file = temp_csv(concat!(
            "name,brand,price,rating\n",
            "iPhone,apple,999,4.9\n",
            ",,,\n",
            "Galaxy,samsung,1199,4.8\n",
            "   ,   ,   ,\n",
            "Redmi,xiaomi,199,4.6",
        ));

        let products = read_products(&[file.path()]).unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].brand, "apple");
        assert_eq!(products[1].brand, "samsung");
        assert_eq!(products[2].brand, "xiaomi");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let file = temp_csv(concat!(
            "name,brand,price,rating\n",
            "iPhone,apple,999,4.9\n",
            "\n",
            "Galaxy,samsung,1199,4.8\n",
        ));

        let products = read_products(&[file.path()]).unwrap();
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_out_of_range_rating_skips_row() {
        let file = temp_csv("name,brand,price,rating\nProduct1,Brand1,100,5.1");

        let products = read_products(&[file.path()]).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_invalid_numeric_values_skip_rows() {
        let file = temp_csv(concat!(
            "name,brand,price,rating\n",
            "Product1,brand1,invalid_price,4.5\n",
            "Product2,brand2,200,invalid_rating",
        ));

        let products = read_products(&[file.path()]).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_mixed_valid_and_invalid_rows() {
        let file = temp_csv(concat!(
            "name,brand,price,rating\n",
            "Valid1,brand1,100,4.5\n",
            ",,,\n",
            "Invalid2,,200,4.0\n",
            "Valid3,brand3,300,4.8\n",
            "Invalid4,brand4,invalid,4.2",
        ));

        let products = read_products(&[file.path()]).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].brand, "brand1");
        assert_eq!(products[1].brand, "brand3");
    }

    #[test]
    fn test_blank_name_skips_row() {
        let file = temp_csv("name,brand,price,rating\n ,Apple,999,4.9");

        let products = read_products(&[file.path()]).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_short_row_misses_numeric_cells() {
        // Only two of four cells present: price and rating are absent.
        let file = temp_csv("name,brand,price,rating\nProduct1,brand1");

        let products = read_products(&[file.path()]).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = temp_csv(concat!(
            "name,brand,price,rating,color\n",
            "Galaxy S23,samsung,1199,4.8,black",
        ));

        let products = read_products(&[file.path()]).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].brand, "samsung");
        assert_eq!(products[0].rating, 4.8);
    }

    #[test]
    fn test_structural_error_aborts_after_valid_file() {
        let valid = temp_csv("name,brand,price,rating\nProduct1,brand1,100,4.5");

        let err = read_products(&[valid.path(), Path::new("nonexistent.csv")]).unwrap_err();
        assert!(matches!(err, ReadError::FileNotFound { .. }));
    }

    #[test]
    fn test_product_from_row_reports_field_in_conversion_error() {
        let mut row = Map::new();
        row.insert("name".into(), Value::String("Widget".into()));
        row.insert("brand".into(), Value::String("Acme".into()));
        row.insert("price".into(), Value::String("abc".into()));
        row.insert("rating".into(), Value::String("4.5".into()));

        let err = product_from_row(&row).unwrap_err();
        assert!(matches!(err, RowError::Conversion { field: "price", .. }));
    }

    #[test]
    fn test_scientific_notation_in_cells() {
        let file = temp_csv("name,brand,price,rating\nBulk Lot,acme,1e3,4.5");

        let products = read_products(&[file.path()]).unwrap();
        assert_eq!(products[0].price, 1000.0);
    }
}
