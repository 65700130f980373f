//! Typed query methods for reading the launch table.
//!
//! All queries return typed structs from [`crate::models`] (or `slr-core`
//! types) that can be serialized to JSON for D3.js chart components.
//!
//! # Ordering
//!
//! Grouped results are ordered by the first row at which each group appears
//! (`ORDER BY MIN(row_id)`), which keeps dropdown options, pie slices and
//! legend entries in dataset order.

use crate::models::{OutcomeCount, PayloadOutcome, SiteCount};
use crate::Database;
use rusqlite::params;
use rusqlite::types::Type;
use slr_core::{Outcome, PayloadBounds, PayloadRange};

fn outcome_from_column(idx: usize, class: i64) -> rusqlite::Result<Outcome> {
    Outcome::from_class(class)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

impl Database {
    /// Get the distinct launch sites in order of first appearance.
    pub fn query_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_site FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[SLR Debug] query: query_sites returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the (min, max) payload mass over all launches.
    ///
    /// Returns `None` when the table is empty.
    pub fn query_payload_bounds(&self) -> anyhow::Result<Option<PayloadBounds>> {
        let conn = self.conn()?;
        let (min, max) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get::<_, Option<f64>>(0)?, row.get::<_, Option<f64>>(1)?)),
        )?;
        let bounds = match (min, max) {
            (Some(min), Some(max)) => Some(PayloadBounds { min, max }),
            _ => None,
        };
        log::info!("[SLR Debug] query: query_payload_bounds returned {:?}", bounds);
        Ok(bounds)
    }

    /// Count launches, optionally restricted to one site.
    pub fn query_launch_count(&self, site: Option<&str>) -> anyhow::Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM launches WHERE (?1 IS NULL OR launch_site = ?1)",
            params![site],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Count successful launches across every site.
    pub fn query_success_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM launches WHERE class = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Get successful launch counts per site (for the all-sites pie chart).
    ///
    /// Sites keep the order of their first row in the table, whatever its
    /// outcome, so the slices line up with [`Database::query_sites`]. A site
    /// with no successes does not appear.
    pub fn query_success_by_site(&self) -> anyhow::Result<Vec<SiteCount>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(class) AS successes FROM launches
             GROUP BY launch_site
             HAVING successes > 0
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteCount {
                    launch_site: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SLR Debug] query: query_success_by_site returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get outcome counts for a single site (for the per-site pie chart).
    pub fn query_outcomes_for_site(&self, site: &str) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*) FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map(params![site], |row| {
                Ok(OutcomeCount {
                    outcome: outcome_from_column(0, row.get(0)?)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SLR Debug] query: query_outcomes_for_site({}) returned {} records",
            site,
            rows.len()
        );
        Ok(rows)
    }

    /// Get launches whose payload lies in `range` (inclusive), optionally
    /// restricted to one site, in dataset order.
    pub fn query_payload_outcomes(
        &self,
        site: Option<&str>,
        range: PayloadRange,
    ) -> anyhow::Result<Vec<PayloadOutcome>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_site, payload_mass_kg, class, booster_version_category
             FROM launches
             WHERE payload_mass_kg >= ?1 AND payload_mass_kg <= ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY row_id",
        )?;
        let rows = stmt
            .query_map(params![range.lo, range.hi, site], |row| {
                Ok(PayloadOutcome {
                    launch_site: row.get(0)?,
                    payload_mass_kg: row.get(1)?,
                    class: row.get(2)?,
                    booster_version_category: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SLR Debug] query: query_payload_outcomes returned {} records",
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use slr_core::{Outcome, PayloadRange};

    /// Helper to create a database with a small two-site dataset.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
A,1,500,v1.0
B,0,9600,FT
A,1,2500,FT
A,0,3000,v1.1
B,1,4000,B4
A,1,6000,B4
";
        db.load_launches(csv).unwrap();
        db
    }

    #[test]
    fn query_sites_first_appearance_order() {
        let db = sample_db();
        assert_eq!(db.query_sites().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn query_payload_bounds() {
        let db = sample_db();
        let bounds = db.query_payload_bounds().unwrap().unwrap();
        assert!((bounds.min - 500.0).abs() < f64::EPSILON);
        assert!((bounds.max - 9600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn query_launch_and_success_counts() {
        let db = sample_db();
        assert_eq!(db.query_launch_count(None).unwrap(), 6);
        assert_eq!(db.query_launch_count(Some("A")).unwrap(), 4);
        assert_eq!(db.query_launch_count(Some("nowhere")).unwrap(), 0);
        assert_eq!(db.query_success_count().unwrap(), 4);
    }

    #[test]
    fn query_success_by_site() {
        let db = sample_db();
        let rows = db.query_success_by_site().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].launch_site, "A");
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[1].launch_site, "B");
        assert_eq!(rows[1].count, 1);
    }

    #[test]
    fn query_success_by_site_omits_sites_without_success() {
        let db = Database::new().unwrap();
        db.load_launches(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,0,1,FT\nB,1,2,FT\n",
        )
        .unwrap();
        let rows = db.query_success_by_site().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].launch_site, "B");
    }

    #[test]
    fn query_success_by_site_follows_first_row_of_each_site() {
        let db = Database::new().unwrap();
        db.load_launches(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,0,1,FT\nB,1,2,FT\nA,1,3,FT\n",
        )
        .unwrap();
        let rows = db.query_success_by_site().unwrap();
        let order: Vec<&str> = rows.iter().map(|r| r.launch_site.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(order, db.query_sites().unwrap());
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].count, 1);
    }

    #[test]
    fn query_outcomes_for_site() {
        let db = sample_db();
        let rows = db.query_outcomes_for_site("A").unwrap();
        assert_eq!(rows.len(), 2);
        // Success appears first for site A
        assert_eq!(rows[0].outcome, Outcome::Success);
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[1].outcome, Outcome::Failure);
        assert_eq!(rows[1].count, 1);

        let rows = db.query_outcomes_for_site("B").unwrap();
        assert_eq!(rows[0].outcome, Outcome::Failure);
        assert_eq!(rows.iter().map(|r| r.count).sum::<i64>(), 2);
    }

    #[test]
    fn query_outcomes_for_unknown_site_is_empty() {
        let db = sample_db();
        assert!(db.query_outcomes_for_site("C").unwrap().is_empty());
    }

    #[test]
    fn query_payload_outcomes_inclusive_range() {
        let db = sample_db();
        let rows = db
            .query_payload_outcomes(None, PayloadRange::new(2500.0, 4000.0))
            .unwrap();
        let payloads: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![2500.0, 3000.0, 4000.0]);
    }

    #[test]
    fn query_payload_outcomes_by_site() {
        let db = sample_db();
        let rows = db
            .query_payload_outcomes(Some("B"), PayloadRange::new(0.0, 10000.0))
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.launch_site == "B"));
        assert_eq!(rows[0].class, 0);
        assert_eq!(rows[0].booster_version_category, "FT");
        assert_eq!(rows[1].class, 1);
    }

    #[test]
    fn query_payload_outcomes_reversed_range_is_empty() {
        let db = sample_db();
        let rows = db
            .query_payload_outcomes(None, PayloadRange::new(5000.0, 1000.0))
            .unwrap();
        assert!(rows.is_empty());
    }
}
