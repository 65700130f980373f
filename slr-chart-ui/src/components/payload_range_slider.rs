//! Two-handle payload range control built from a pair of range inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_data::controls::PAYLOAD_CAPTION;

/// Payload mass range slider.
///
/// The handles cannot cross: moving the lower handle past the upper one
/// pins it to the upper value, and vice versa.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let Some(control) = (state.payload_control)() else {
        return rsx! {};
    };
    let lo = (state.payload_lo)();
    let hi = (state.payload_hi)();

    let on_lo_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let hi = (state.payload_hi)();
            state.payload_lo.set(value.min(hi));
        }
    };

    let on_hi_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let lo = (state.payload_lo)();
            state.payload_hi.set(value.max(lo));
        }
    };

    rsx! {
        div {
            id: "payload-slider",
            style: "margin: 12px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "{PAYLOAD_CAPTION}"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                span { style: "font-size: 12px; color: #666;", "{control.min}" }
                input {
                    r#type: "range",
                    min: "{control.min}",
                    max: "{control.max}",
                    step: "{control.step}",
                    value: "{lo}",
                    oninput: on_lo_change,
                }
                input {
                    r#type: "range",
                    min: "{control.min}",
                    max: "{control.max}",
                    step: "{control.step}",
                    value: "{hi}",
                    oninput: on_hi_change,
                }
                span { style: "font-size: 12px; color: #666;", "{control.max}" }
            }
            p {
                style: "font-size: 12px; color: #666; margin: 4px 0 0 0;",
                "{lo} kg to {hi} kg"
            }
        }
    }
}
