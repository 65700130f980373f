//! Page title banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
    #[props(default = "#503D36".to_string())]
    pub color: String,
    /// Font size in pixels
    #[props(default = 40)]
    pub font_size: u32,
}

/// Centered `h1` heading at the top of the dashboard.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let style = format!(
        "text-align: center; color: {}; font-size: {}px; margin: 8px 0 16px 0;",
        props.color, props.font_size
    );

    rsx! {
        h1 {
            style: "{style}",
            "{props.title}"
        }
    }
}
