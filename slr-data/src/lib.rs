//! Chart specifications for the launch dashboard.
//!
//! This crate turns the current widget state (site token, payload range)
//! into serializable chart specifications that the D3.js renderers draw.
//! Both builders are pure reads over the loaded launch table.

pub mod controls;
pub mod pie;
pub mod scatter;

use controls::{DropdownOption, RangeControl};
use pie::PieChart;
use scatter::ScatterChart;
use slr_core::{PayloadBounds, PayloadRange, SiteToken};
use slr_db::Database;

/// Dashboard page title.
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// The loaded dataset plus the values computed once at load time: the
/// distinct sites (dropdown options) and the payload bounds (range control
/// extremes).
#[derive(Clone)]
pub struct LaunchData {
    db: Database,
    sites: Vec<String>,
    bounds: Option<PayloadBounds>,
}

impl LaunchData {
    /// Load a launch CSV into a fresh in-memory database.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        Self::from_database(Database::from_csv(csv_data)?)
    }

    /// Wrap an already-loaded database.
    pub fn from_database(db: Database) -> anyhow::Result<Self> {
        let sites = db.query_sites()?;
        let bounds = db.query_payload_bounds()?;
        if let Some(b) = bounds {
            log::info!("min payload is: {} and max payload is: {}", b.min, b.max);
        }
        Ok(Self { db, sites, bounds })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Distinct launch sites in dataset order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Payload extremes, or None for an empty dataset.
    pub fn bounds(&self) -> Option<PayloadBounds> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Resolve a raw selector value; unknown values mean all sites.
    pub fn resolve_site(&self, raw: Option<&str>) -> SiteToken {
        SiteToken::resolve(raw, self.sites.as_slice())
    }

    pub fn dropdown_options(&self) -> Vec<DropdownOption> {
        controls::dropdown_options(&self.sites)
    }

    pub fn range_control(&self) -> Option<RangeControl> {
        self.bounds.map(RangeControl::for_bounds)
    }

    /// A payload window from optional ends. Missing ends fall back to the
    /// dataset bounds; with no data they fall back to an open window.
    pub fn payload_range_or_full(&self, lo: Option<f64>, hi: Option<f64>) -> PayloadRange {
        match self.bounds {
            Some(bounds) => bounds.range_or_full(lo, hi),
            None => PayloadRange::new(lo.unwrap_or(0.0), hi.unwrap_or(f64::MAX)),
        }
    }

    /// Pie chart for the selector value `raw`.
    pub fn success_pie(&self, raw: Option<&str>) -> anyhow::Result<PieChart> {
        pie::success_pie(&self.db, &self.resolve_site(raw))
    }

    /// Scatter chart for the selector value `raw` and payload window `range`.
    pub fn payload_scatter(
        &self,
        raw: Option<&str>,
        range: PayloadRange,
    ) -> anyhow::Result<ScatterChart> {
        scatter::payload_scatter(&self.db, &self.resolve_site(raw), range)
    }
}
