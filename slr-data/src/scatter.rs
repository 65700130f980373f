//! Payload mass vs. outcome scatter chart.

use serde::Serialize;
use slr_core::{PayloadRange, SiteToken};
use slr_db::models::PayloadOutcome;
use slr_db::Database;

pub const X_LABEL: &str = "Payload Mass (kg)";
pub const Y_LABEL: &str = "class";

/// Scatter chart specification handed to the renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Booster version categories in legend/color order.
    pub categories: Vec<String>,
    pub points: Vec<PayloadOutcome>,
}

impl ScatterChart {
    /// Text to show over the chart area when no launch falls in the filter.
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.points
            .is_empty()
            .then_some("No launches in the selected payload range")
    }
}

pub fn scatter_title(site: &SiteToken) -> String {
    match site.site() {
        None => "Correlation between Payload and Success for all Sites".to_string(),
        Some(name) => format!(
            "Correlation between Payload and Success for Launch Site {}",
            name
        ),
    }
}

/// Distinct booster categories in order of first appearance.
fn categories_of(points: &[PayloadOutcome]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for p in points {
        if !categories.contains(&p.booster_version_category) {
            categories.push(p.booster_version_category.clone());
        }
    }
    categories
}

/// Build the payload/outcome scatter for a site token and payload window.
///
/// Keeps launches with `range.lo <= payload <= range.hi`, further limited to
/// the selected site when there is one.
pub fn payload_scatter(
    db: &Database,
    site: &SiteToken,
    range: PayloadRange,
) -> anyhow::Result<ScatterChart> {
    if range.is_reversed() {
        log::warn!(
            "Payload range [{}, {}] is reversed; no launches selected",
            range.lo,
            range.hi
        );
    }
    let points = db.query_payload_outcomes(site.site(), range)?;
    Ok(ScatterChart {
        title: scatter_title(site),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        categories: categories_of(&points),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LaunchData;

    fn sample_data() -> LaunchData {
        LaunchData::from_csv(
            "\
Launch Site,class,Payload Mass (kg),Booster Version Category
A,1,500,v1.0
B,0,9600,FT
A,1,2500,FT
A,0,3000,v1.1
B,1,4000,B4
A,1,6000,B4
",
        )
        .unwrap()
    }

    #[test]
    fn scatter_points_lie_within_range() {
        let data = LaunchData::from_csv(slr_core::CSV_OBJECT).unwrap();
        let range = PayloadRange::new(2000.0, 5000.0);
        let chart = data.payload_scatter(Some("ALL"), range).unwrap();
        assert!(!chart.points.is_empty());
        assert!(chart.points.iter().all(|p| range.contains(p.payload_mass_kg)));
        assert_eq!(
            chart.title,
            "Correlation between Payload and Success for all Sites"
        );
    }

    #[test]
    fn empty_notice_follows_points() {
        let data = sample_data();
        let hit = data
            .payload_scatter(Some("B"), PayloadRange::new(0.0, 10000.0))
            .unwrap();
        assert_eq!(hit.empty_notice(), None);

        let miss = data
            .payload_scatter(Some("B"), PayloadRange::new(100.0, 200.0))
            .unwrap();
        assert_eq!(
            miss.empty_notice(),
            Some("No launches in the selected payload range")
        );
    }

    #[test]
    fn scatter_range_is_inclusive() {
        let data = sample_data();
        let chart = data
            .payload_scatter(None, PayloadRange::new(2500.0, 4000.0))
            .unwrap();
        let payloads: Vec<f64> = chart.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, vec![2500.0, 3000.0, 4000.0]);
    }

    #[test]
    fn scatter_site_restricts_to_that_site() {
        let data = sample_data();
        let chart = data
            .payload_scatter(Some("A"), PayloadRange::new(0.0, 10000.0))
            .unwrap();
        assert_eq!(chart.points.len(), 4);
        assert!(chart.points.iter().all(|p| p.launch_site == "A"));
        assert_eq!(
            chart.title,
            "Correlation between Payload and Success for Launch Site A"
        );
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "class");
    }

    #[test]
    fn scatter_categories_in_first_appearance_order() {
        let data = sample_data();
        let chart = data
            .payload_scatter(Some("ALL"), PayloadRange::new(0.0, 10000.0))
            .unwrap();
        assert_eq!(chart.categories, vec!["v1.0", "FT", "v1.1", "B4"]);

        let chart = data
            .payload_scatter(Some("B"), PayloadRange::new(0.0, 10000.0))
            .unwrap();
        assert_eq!(chart.categories, vec!["FT", "B4"]);
    }

    #[test]
    fn scatter_unknown_site_falls_back_to_all() {
        let data = sample_data();
        let range = PayloadRange::new(0.0, 10000.0);
        let all = data.payload_scatter(Some("ALL"), range).unwrap();
        assert_eq!(data.payload_scatter(Some("nowhere"), range).unwrap(), all);
        assert_eq!(all.points.len(), 6);
    }

    #[test]
    fn scatter_reversed_range_is_empty() {
        let data = sample_data();
        let chart = data
            .payload_scatter(None, PayloadRange::new(6000.0, 500.0))
            .unwrap();
        assert!(chart.points.is_empty());
        assert!(chart.categories.is_empty());
    }
}
