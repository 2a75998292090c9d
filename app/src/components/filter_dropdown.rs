use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

/// Collapsible multi-select with All / Clear shortcuts
#[component]
pub fn FilterDropdown(
    title: &'static str,
    summary: String,
    open: bool,
    options: Vec<FilterOption>,
    /// Shown under the control when non-empty
    warning: String,
    on_toggle_open: EventHandler<()>,
    on_toggle: EventHandler<String>,
    on_select_all: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "position: relative;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem;",
                label { style: "font-weight: 600; font-size: 0.875rem; color: #374151;", "{title}" }
                div {
                    style: "display: flex; gap: 0.5rem;",
                    button {
                        style: "background: none; border: none; color: #2563eb; cursor: pointer; font-size: 0.75rem;",
                        onclick: move |_| on_select_all.call(()),
                        "All"
                    }
                    button {
                        style: "background: none; border: none; color: #6b7280; cursor: pointer; font-size: 0.75rem;",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            button {
                style: "width: 100%; display: flex; justify-content: space-between; padding: 0.5rem 0.75rem; background: white; border: 1px solid #d1d5db; border-radius: 0.375rem; cursor: pointer; text-align: left;",
                aria_expanded: if open { "true" } else { "false" },
                onclick: move |_| on_toggle_open.call(()),
                span { "{summary}" }
                span { if open { "▲" } else { "▼" } }
            }
            if open {
                div {
                    style: "position: absolute; z-index: 10; width: 100%; margin-top: 0.25rem; background: white; border: 1px solid #e5e7eb; border-radius: 0.375rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); max-height: 16rem; overflow-y: auto;",
                    for option in options {
                        {
                            let key = option.key.clone();
                            rsx! {
                                label {
                                    key: "{option.key}",
                                    style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; cursor: pointer;",
                                    input {
                                        r#type: "checkbox",
                                        checked: option.selected,
                                        onchange: move |_| on_toggle.call(key.clone()),
                                    }
                                    span { "{option.label}" }
                                }
                            }
                        }
                    }
                }
            }
            if !warning.is_empty() {
                p {
                    style: "margin: 0.5rem 0 0 0; font-size: 0.75rem; color: #d97706;",
                    "{warning}"
                }
            }
        }
    }
}
