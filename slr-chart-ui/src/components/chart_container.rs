//! Panel that a D3 chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id that D3 selects and draws into
    pub id: String,
    /// Message laid over the panel when the chart has nothing to draw
    #[props(default)]
    pub notice: Option<String>,
    #[props(default = 400)]
    pub min_height: u32,
}

/// D3 chart panel. The notice sits on top of the drawing area so the
/// (empty) axes stay visible underneath.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            style: "min-height: {props.min_height}px; position: relative; width: 100%;",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
            if let Some(notice) = props.notice.as_ref() {
                div {
                    class: "chart-notice",
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; pointer-events: none;",
                    "{notice}"
                }
            }
        }
    }
}
