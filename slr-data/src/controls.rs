//! Static descriptors for the dashboard's input widgets.

use serde::Serialize;
use slr_core::site::{ALL_SITES, ALL_SITES_LABEL};
use slr_core::{PayloadBounds, PayloadRange};

/// Placeholder shown by the site dropdown before a choice is made.
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site";

/// Caption above the payload range control.
pub const PAYLOAD_CAPTION: &str = "Payload range (Kg):";

/// Range control granularity in kilograms.
pub const PAYLOAD_STEP_KG: f64 = 100.0;

/// A `{label, value}` dropdown entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Bounds, step and initial value of the payload range control.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RangeControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: PayloadRange,
}

impl RangeControl {
    /// A control spanning the dataset bounds, initially fully open.
    pub fn for_bounds(bounds: PayloadBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
            step: PAYLOAD_STEP_KG,
            value: bounds.full_range(),
        }
    }
}

/// "All Sites" followed by one option per site, in the order given.
pub fn dropdown_options<S: AsRef<str>>(sites: &[S]) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(sites.iter().map(|s| DropdownOption {
        label: s.as_ref().to_string(),
        value: s.as_ref().to_string(),
    }))
    .collect()
}
