//! Dropdown selector for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_data::controls::{DropdownOption, SITE_PLACEHOLDER};

/// The placeholder entry is selected while the value matches no option.
fn shows_placeholder(options: &[DropdownOption], selected: &str) -> bool {
    !options.iter().any(|opt| opt.value == selected)
}

/// Launch site dropdown.
/// Reads the options from AppState and updates `selected_site` on change.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.site_options.read().clone();
    let selected = (state.selected_site)();
    let placeholder_selected = shows_placeholder(&options, &selected);

    let on_change = move |evt: Event<FormData>| {
        state.selected_site.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-dropdown",
                style: "font-weight: bold; margin-right: 8px;",
                "Launch Site: "
            }
            select {
                id: "site-dropdown",
                onchange: on_change,
                option {
                    value: "",
                    disabled: true,
                    selected: placeholder_selected,
                    "{SITE_PLACEHOLDER}"
                }
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slr_data::controls::dropdown_options;

    #[test]
    fn placeholder_only_when_nothing_matches() {
        let options = dropdown_options(&["CCAFS LC-40", "KSC LC-39A"][..]);
        assert!(!shows_placeholder(&options, "ALL"));
        assert!(!shows_placeholder(&options, "KSC LC-39A"));
        assert!(shows_placeholder(&options, ""));
        assert!(shows_placeholder(&[], "ALL"));
    }
}
