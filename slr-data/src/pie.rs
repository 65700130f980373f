//! Site-filtered success pie chart.

use serde::Serialize;
use slr_core::SiteToken;
use slr_db::Database;

/// One labeled wedge of the pie.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
}

/// Pie chart specification handed to the renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> i64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Text to show over the chart area when there is nothing to draw.
    pub fn empty_notice(&self) -> Option<&'static str> {
        (self.total() == 0).then_some("No launches to show")
    }
}

pub fn pie_title(site: &SiteToken) -> String {
    match site.site() {
        None => "Total Success Launches By Site".to_string(),
        Some(name) => format!("Total Success for site {}", name),
    }
}

/// Build the success pie for a site token.
///
/// For all sites: successful launches grouped by site. For one site: that
/// site's launches grouped by outcome. Slices follow dataset order.
pub fn success_pie(db: &Database, site: &SiteToken) -> anyhow::Result<PieChart> {
    let slices = match site.site() {
        None => db
            .query_success_by_site()?
            .into_iter()
            .map(|row| PieSlice {
                label: row.launch_site,
                value: row.count,
            })
            .collect(),
        Some(name) => db
            .query_outcomes_for_site(name)?
            .into_iter()
            .map(|row| PieSlice {
                label: row.outcome.to_string(),
                value: row.count,
            })
            .collect(),
    };
    Ok(PieChart {
        title: pie_title(site),
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LaunchData;

    /// Sites {A, B}: A has 3 successes and 1 failure, B has 1 success and
    /// 2 failures.
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
B,0,1200,B4
",
        )
        .unwrap()
    }

    #[test]
    fn all_sites_pie_counts_successes_by_site() {
        let data = sample_data();
        let pie = data.success_pie(Some("ALL")).unwrap();
        assert_eq!(pie.title, "Total Success Launches By Site");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "A".into(), value: 3 },
                PieSlice { label: "B".into(), value: 1 },
            ]
        );
        assert_eq!(pie.total(), 4);
    }

    #[test]
    fn all_sites_pie_total_matches_success_count() {
        let data = LaunchData::from_csv(slr_core::CSV_OBJECT).unwrap();
        let pie = data.success_pie(Some("ALL")).unwrap();
        assert_eq!(pie.total(), 23);
        assert_eq!(pie.slices.len(), 4);
    }

    #[test]
    fn site_pie_counts_outcomes_for_that_site() {
        let data = sample_data();
        let pie = data.success_pie(Some("A")).unwrap();
        assert_eq!(pie.title, "Total Success for site A");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "Success".into(), value: 3 },
                PieSlice { label: "Failure".into(), value: 1 },
            ]
        );
        assert_eq!(pie.total(), 4);
    }

    #[test]
    fn site_pie_total_matches_site_launch_count() {
        let data = LaunchData::from_csv(slr_core::CSV_OBJECT).unwrap();
        for site in data.sites().to_vec() {
            let pie = data.success_pie(Some(site.as_str())).unwrap();
            let expected = data.database().query_launch_count(Some(site.as_str())).unwrap();
            assert_eq!(pie.total(), expected, "site {}", site);
        }
    }

    #[test]
    fn unknown_site_falls_back_to_all_sites() {
        let data = sample_data();
        let all = data.success_pie(Some("ALL")).unwrap();
        assert_eq!(data.success_pie(Some("Boca Chica")).unwrap(), all);
        assert_eq!(data.success_pie(None).unwrap(), all);
    }

    #[test]
    fn all_sites_slices_match_dropdown_order() {
        // A's first launch fails, B succeeds before A does
        let data = LaunchData::from_csv(
            "\
Launch Site,class,Payload Mass (kg),Booster Version Category
A,0,500,v1.0
B,1,9600,FT
A,1,2500,FT
",
        )
        .unwrap();
        let pie = data.success_pie(Some("ALL")).unwrap();
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, data.sites());
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn empty_notice_only_without_slices() {
        let data = sample_data();
        assert_eq!(data.success_pie(Some("A")).unwrap().empty_notice(), None);

        let no_successes = LaunchData::from_csv(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,0,500,FT\n",
        )
        .unwrap();
        let pie = no_successes.success_pie(None).unwrap();
        assert!(pie.slices.is_empty());
        assert_eq!(pie.empty_notice(), Some("No launches to show"));
    }

    #[test]
    fn pie_serializes_for_d3() {
        let data = sample_data();
        let json = serde_json::to_value(data.success_pie(Some("B")).unwrap()).unwrap();
        assert_eq!(json["title"], "Total Success for site B");
        assert_eq!(json["slices"][0]["label"], "Failure");
        assert_eq!(json["slices"][0]["value"], 2);
    }
}
