use crate::error::{LaunchError, Result};
use crate::outcome::Outcome;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_CLASS: &str = "class";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// One launch attempt from the dataset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    /// Launch site name (e.g. "CCAFS LC-40")
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: Option<String>,
    /// Booster family label used to color the scatter chart (e.g. "FT", "B4")
    pub booster_version_category: String,
}

/// Result of parsing a launch CSV: the usable rows, in file order, and how
/// many rows were dropped for unparseable payload or class values.
#[derive(Debug, Clone, Default)]
pub struct ParsedLaunches {
    pub records: Vec<LaunchRecord>,
    pub skipped: usize,
}

/// Header positions of the columns we read. Column order in the file is free.
struct ColumnMap {
    launch_site: usize,
    payload_mass: usize,
    class: usize,
    booster_category: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<ColumnMap> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &'static str| find(name).ok_or(LaunchError::MissingColumn(name));
        Ok(ColumnMap {
            launch_site: require(COL_LAUNCH_SITE)?,
            payload_mass: require(COL_PAYLOAD_MASS)?,
            class: require(COL_CLASS)?,
            booster_category: require(COL_BOOSTER_CATEGORY)?,
            flight_number: find(COL_FLIGHT_NUMBER),
            booster_version: find(COL_BOOSTER_VERSION),
        })
    }
}

fn parse_payload(ess: &str) -> Result<f64> {
    match ess.trim().parse::<f64>() {
        Ok(kg) if kg.is_finite() && kg >= 0.0 => Ok(kg),
        _ => Err(LaunchError::InvalidPayload(ess.trim().to_string())),
    }
}

fn optional_field(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    fn from_row(record: &StringRecord, columns: &ColumnMap) -> Result<LaunchRecord> {
        let launch_site = record.get(columns.launch_site).unwrap_or("").trim();
        if launch_site.is_empty() {
            return Err(LaunchError::MissingValue(COL_LAUNCH_SITE));
        }
        let payload_mass_kg = parse_payload(record.get(columns.payload_mass).unwrap_or(""))?;
        let outcome = Outcome::parse_class(record.get(columns.class).unwrap_or(""))?;
        let booster_version_category = record
            .get(columns.booster_category)
            .unwrap_or("")
            .trim()
            .to_string();

        Ok(LaunchRecord {
            flight_number: optional_field(record, columns.flight_number)
                .and_then(|s| s.parse::<u32>().ok()),
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            outcome,
            booster_version: optional_field(record, columns.booster_version).map(String::from),
            booster_version_category,
        })
    }

    /// Parse a launch CSV string (with headers) into records.
    ///
    /// Required columns: `Launch Site`, `Payload Mass (kg)`, `class`,
    /// `Booster Version Category`. `Flight Number` and `Booster Version` are
    /// read when present; any other column is ignored. Rows with an empty
    /// site, a non-numeric or negative payload, or a class other than 0/1
    /// are skipped and counted.
    pub fn parse_launch_csv(csv_object: &str) -> Result<ParsedLaunches> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let columns = ColumnMap::from_headers(rdr.headers()?)?;

        let mut parsed = ParsedLaunches::default();
        for row in rdr.records() {
            let record = row?;
            match LaunchRecord::from_row(&record, &columns) {
                Ok(launch) => parsed.records.push(launch),
                Err(e) => {
                    log::debug!("Skipping launch row {:?}: {}", record.position(), e);
                    parsed.skipped += 1;
                }
            }
        }
        Ok(parsed)
    }
}
