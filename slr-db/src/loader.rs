//! CSV loading for populating the in-memory launch table.
//!
//! # CSV Format
//!
//! Headers required: `Launch Site`, `Payload Mass (kg)`, `class`,
//! `Booster Version Category`. `Flight Number` and `Booster Version` are
//! stored when present.

use crate::Database;
use rusqlite::params;
use slr_core::LaunchRecord;

impl Database {
    /// Load launch records from a CSV string.
    ///
    /// Rows are appended in file order. Rows with an unparseable payload or
    /// class are skipped; a missing required column fails the whole load.
    /// Returns the number of rows inserted.
    ///
    /// # Example CSV
    /// ```text
    /// ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
    /// 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
    /// ```
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let parsed = LaunchRecord::parse_launch_csv(csv_data)?;
        let count = self.load_records(&parsed.records)?;
        log::info!(
            "[SLR Debug] loader: Loaded {} launches, skipped {} malformed",
            count,
            parsed.skipped
        );
        Ok(count)
    }

    /// Insert already-parsed launch records in order.
    pub fn load_records(&self, records: &[LaunchRecord]) -> anyhow::Result<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, payload_mass_kg, class, booster_version, booster_version_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.flight_number,
                    r.launch_site,
                    r.payload_mass_kg,
                    r.outcome.class(),
                    r.booster_version,
                    r.booster_version_category,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }
}
