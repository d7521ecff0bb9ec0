//! CSV-based mortality table loader
//!
//! Reads the Indonesia 2023 mortality tables, one file per sex category.
//! The two source files share a schema (column 0 = age, column 3 = annual
//! mortality rate) but differ in where the header row sits: the male file
//! carries two preamble lines before its header, the female file one.

use crate::assumptions::MortalityTable;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default directory holding the mortality CSV files
pub const DEFAULT_MORTALITY_PATH: &str = "data/mortality";

/// Male table file name, header on line 3
pub const MALE_TABLE_FILE: &str = "Male Mortality Indonesia.csv";

/// Female table file name, header on line 2
pub const FEMALE_TABLE_FILE: &str = "Female Mortality Indonesia.csv";

/// Zero-based row index of the header line in the male file
pub const MALE_HEADER_ROW: usize = 2;

/// Zero-based row index of the header line in the female file
pub const FEMALE_HEADER_ROW: usize = 1;

/// Column index of the age field
const AGE_COLUMN: usize = 0;

/// Column index of the annual mortality rate field
const RATE_COLUMN: usize = 3;

/// Load one mortality table from a CSV file whose header sits at
/// `header_row` (zero-based); data rows start on the following line.
///
/// Rows whose age column does not parse to a finite number in [0, 120] are
/// dropped (trailing footers, blank lines). A row with a parseable age but
/// an unparseable rate keeps the row with a NaN rate; the valuation clamp
/// treats that as certain death. A header row that is missing or narrower
/// than the rate column is a load error, handled by the caller's fallback.
pub fn load_table(path: &Path, header_row: usize) -> Result<MortalityTable, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rates = HashMap::new();
    let mut header_seen = false;

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if index <= header_row {
            // A schema mismatch is a load failure, not a sparse table: the
            // header must exist and must span the rate column.
            if index == header_row {
                if record.len() <= RATE_COLUMN {
                    return Err(format!(
                        "rate column {} not found in {}",
                        RATE_COLUMN,
                        path.display()
                    )
                    .into());
                }
                header_seen = true;
            }
            continue;
        }

        let age = match record
            .get(AGE_COLUMN)
            .map(str::trim)
            .and_then(|field| field.parse::<f64>().ok())
        {
            Some(age) if age.is_finite() => age as i64,
            _ => continue,
        };
        if !(0..=120).contains(&age) {
            continue;
        }

        let qx = record
            .get(RATE_COLUMN)
            .map(str::trim)
            .and_then(|field| field.parse::<f64>().ok())
            .unwrap_or(f64::NAN);

        rates.insert(age as u8, qx);
    }

    if !header_seen {
        return Err(format!("header row {} not found in {}", header_row, path.display()).into());
    }

    Ok(MortalityTable::from_rates(rates))
}
