//! Mortality assumptions: CSV-backed tables with a synthetic fallback

mod mortality;
pub mod loader;

pub use mortality::{MortalityTable, MAX_TABLE_AGE};

use crate::plan::Gender;
use log::warn;
use std::error::Error;
use std::path::Path;

/// Longest failure reason carried in a `TableSource::Synthetic` descriptor
const MAX_REASON_LEN: usize = 50;

/// Where the mortality basis came from
///
/// The fallback path is a first-class outcome, not a caught exception:
/// callers can branch on it, display it, and test it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TableSource {
    /// Both tables parsed from the CSV sources
    Csv { name: String },
    /// Both tables generated synthetically; `reason` records why
    Synthetic { reason: String },
}

impl TableSource {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, TableSource::Synthetic { .. })
    }

    /// Human-readable descriptor for status lines
    pub fn describe(&self) -> String {
        match self {
            TableSource::Csv { name } => name.clone(),
            TableSource::Synthetic { reason } => format!("Synthetic Data ({})", reason),
        }
    }
}

/// Container for both mortality tables plus their source descriptor
///
/// Constructed once at startup and passed by reference into every
/// computation; there is no process-wide cache.
#[derive(Debug, Clone)]
pub struct MortalityBasis {
    male: MortalityTable,
    female: MortalityTable,
    source: TableSource,
}

impl MortalityBasis {
    /// Basis built entirely from the synthetic generator
    pub fn synthetic() -> Self {
        Self::synthetic_with_reason("synthetic basis requested")
    }

    fn synthetic_with_reason(reason: &str) -> Self {
        Self {
            male: MortalityTable::synthetic(Gender::Male),
            female: MortalityTable::synthetic(Gender::Female),
            source: TableSource::Synthetic {
                reason: reason.chars().take(MAX_REASON_LEN).collect(),
            },
        }
    }

    /// Load both tables from CSV files in `dir`, falling back atomically to
    /// the synthetic generator for BOTH sexes on any failure
    ///
    /// The load never mixes a real table with a synthetic one, and never
    /// surfaces a hard error; the failure reason lands in the source
    /// descriptor instead.
    pub fn load_or_synthetic(dir: &Path) -> Self {
        match Self::try_load(dir) {
            Ok(basis) => basis,
            Err(err) => {
                let reason = format!("Error loading CSV: {}", err);
                warn!("mortality table load failed, using synthetic fallback: {}", reason);
                Self::synthetic_with_reason(&reason)
            }
        }
    }

    fn try_load(dir: &Path) -> Result<Self, Box<dyn Error>> {
        let male_path = dir.join(loader::MALE_TABLE_FILE);
        let female_path = dir.join(loader::FEMALE_TABLE_FILE);

        if !male_path.exists() || !female_path.exists() {
            return Err("CSV files not found".into());
        }

        let male = loader::load_table(&male_path, loader::MALE_HEADER_ROW)?;
        let female = loader::load_table(&female_path, loader::FEMALE_HEADER_ROW)?;

        Ok(Self {
            male,
            female,
            source: TableSource::Csv {
                name: "Indonesia Mortality Table 2023 (CSV)".to_string(),
            },
        })
    }

    /// Load from the default `data/mortality` directory
    pub fn load_default() -> Self {
        Self::load_or_synthetic(Path::new(loader::DEFAULT_MORTALITY_PATH))
    }

    /// Table for the given sex category
    pub fn table(&self, gender: Gender) -> &MortalityTable {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }
}
