//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use slr_core::site::ALL_SITES;
use slr_core::PayloadRange;
use slr_data::controls::{DropdownOption, RangeControl};
use slr_data::LaunchData;

/// Shared state for the launch dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded)
    pub data: Signal<Option<LaunchData>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current site dropdown value ("ALL" or a site name)
    pub selected_site: Signal<String>,
    /// Dropdown options ("All Sites" first)
    pub site_options: Signal<Vec<DropdownOption>>,
    /// Payload slider bounds and step (None for an empty dataset)
    pub payload_control: Signal<Option<RangeControl>>,
    /// Lower payload bound in kg
    pub payload_lo: Signal<f64>,
    /// Upper payload bound in kg
    pub payload_hi: Signal<f64>,
    /// Shown over the pie when it has no slices
    pub pie_notice: Signal<Option<&'static str>>,
    /// Shown over the scatter when no launch matches
    pub scatter_notice: Signal<Option<&'static str>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            data: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(ALL_SITES.to_string()),
            site_options: Signal::new(Vec::new()),
            payload_control: Signal::new(None),
            payload_lo: Signal::new(0.0),
            payload_hi: Signal::new(0.0),
            pie_notice: Signal::new(None),
            scatter_notice: Signal::new(None),
        }
    }

    /// Populate the widgets from a freshly loaded dataset.
    pub fn install(&mut self, data: LaunchData) {
        self.site_options.set(data.dropdown_options());
        let control = data.range_control();
        if let Some(control) = control {
            self.payload_lo.set(control.value.lo);
            self.payload_hi.set(control.value.hi);
        }
        self.payload_control.set(control);
        self.data.set(Some(data));
    }

    /// The payload window currently selected on the slider.
    pub fn payload_range(&self) -> PayloadRange {
        PayloadRange::new((self.payload_lo)(), (self.payload_hi)())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
