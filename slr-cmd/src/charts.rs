//! JSON output for the `summary`, `pie` and `scatter` subcommands.

use serde::Serialize;
use slr_data::controls::{DropdownOption, RangeControl, SITE_PLACEHOLDER};
use slr_data::{LaunchData, DASHBOARD_TITLE};

/// Everything the dashboard needs to lay out its widgets.
#[derive(Debug, Serialize)]
pub struct DashboardOptions {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<DropdownOption>,
    pub payload: Option<RangeControl>,
}

impl DashboardOptions {
    pub fn from_data(data: &LaunchData) -> Self {
        Self {
            title: DASHBOARD_TITLE,
            placeholder: SITE_PLACEHOLDER,
            options: data.dropdown_options(),
            payload: data.range_control(),
        }
    }
}

pub fn summary_json(data: &LaunchData) -> anyhow::Result<String> {
    match data.bounds() {
        Some(b) => log::info!("min payload is: {} and max payload is: {}", b.min, b.max),
        None => log::warn!("launch dataset is empty"),
    }
    Ok(serde_json::to_string_pretty(&DashboardOptions::from_data(data))?)
}

pub fn pie_json(data: &LaunchData, site: &str) -> anyhow::Result<String> {
    let pie = data.success_pie(Some(site))?;
    Ok(serde_json::to_string_pretty(&pie)?)
}

pub fn scatter_json(
    data: &LaunchData,
    site: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> anyhow::Result<String> {
    let range = data.payload_range_or_full(min, max);
    let scatter = data.payload_scatter(Some(site), range)?;
    Ok(serde_json::to_string_pretty(&scatter)?)
}
