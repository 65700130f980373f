use dioxus::prelude::*;

/// Placeholder shown while the launch table is being loaded.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading launch records..."
        }
    }
}
