//! SpaceX Launch Records Dashboard
//!
//! A site dropdown and a payload range slider drive two D3.js charts: a pie
//! of launch successes and a payload vs. outcome scatter.
//!
//! Data flow:
//! 1. `build.rs` copies `spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: load the CSV into the in-memory launch table, fill the
//!    dropdown and slider bounds.
//! 4. On site change: rebuild the pie. On site or payload change: rebuild
//!    the scatter.

use dioxus::prelude::*;
use slr_chart_ui::components::{
    ChartContainer, DashboardHeader, ErrorDisplay, LoadingSpinner, PayloadRangeSlider,
    SiteSelector,
};
use slr_chart_ui::js_bridge;
use slr_chart_ui::state::AppState;
use slr_data::{LaunchData, DASHBOARD_TITLE};

const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

/// DOM ids for the D3 chart containers.
const PIE_CONTAINER_ID: &str = "success-pie-chart";
const SCATTER_CONTAINER_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the launch table once on mount ───
    use_effect(move || {
        match LaunchData::from_csv(LAUNCH_CSV) {
            Ok(data) => {
                if data.is_empty() {
                    state.error_msg.set(Some("No launch data available.".to_string()));
                }
                state.install(data);
            }
            Err(e) => {
                log::error!("Failed to load launch data: {:#}", e);
                state.error_msg.set(Some(format!("Failed to load launch data: {}", e)));
            }
        }
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Success pie, re-runs when the site changes ───
    use_effect(move || {
        let loading = (state.loading)();
        let site = (state.selected_site)();
        if loading {
            return;
        }
        let Some(data) = state.data.read().clone() else {
            return;
        };

        match data.success_pie(Some(site.as_str())) {
            Ok(pie) => {
                state.pie_notice.set(pie.empty_notice());
                let chart_json = serde_json::to_string(&pie).unwrap_or_default();
                js_bridge::render_pie_chart(PIE_CONTAINER_ID, &chart_json);
            }
            Err(e) => {
                js_bridge::destroy_chart(PIE_CONTAINER_ID);
                state.error_msg.set(Some(format!("Failed to build pie chart: {}", e)));
            }
        }
    });

    // ─── Effect 3: Payload scatter, re-runs when the site or range changes ───
    use_effect(move || {
        let loading = (state.loading)();
        let site = (state.selected_site)();
        let range = state.payload_range();
        if loading {
            return;
        }
        let Some(data) = state.data.read().clone() else {
            return;
        };

        match data.payload_scatter(Some(site.as_str()), range) {
            Ok(scatter) => {
                state.scatter_notice.set(scatter.empty_notice());
                let chart_json = serde_json::to_string(&scatter).unwrap_or_default();
                js_bridge::render_scatter_chart(SCATTER_CONTAINER_ID, &chart_json);
            }
            Err(e) => {
                js_bridge::destroy_chart(SCATTER_CONTAINER_ID);
                state.error_msg.set(Some(format!("Failed to build scatter chart: {}", e)));
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            DashboardHeader { title: DASHBOARD_TITLE.to_string() }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                SiteSelector {}
                br {}

                ChartContainer {
                    id: PIE_CONTAINER_ID.to_string(),
                    notice: (state.pie_notice)().map(String::from),
                    min_height: 420,
                }
                br {}

                PayloadRangeSlider {}

                ChartContainer {
                    id: SCATTER_CONTAINER_ID.to_string(),
                    notice: (state.scatter_notice)().map(String::from),
                    min_height: 420,
                }
            }
        }
    }
}
