//! Query result model structs for the launch table.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend or returned from the HTTP API.

use serde::Serialize;
use slr_core::Outcome;

/// A (site, count) pair from a `GROUP BY launch_site` query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteCount {
    pub launch_site: String,
    pub count: i64,
}

/// An (outcome, count) pair for a single site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: i64,
}

/// One launch projected onto the payload/outcome plane.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayloadOutcome {
    pub launch_site: String,
    /// Payload mass in kilograms (x axis)
    pub payload_mass_kg: f64,
    /// 1 for success, 0 for failure (y axis)
    pub class: i64,
    /// Booster family, used as the point color
    pub booster_version_category: String,
}
