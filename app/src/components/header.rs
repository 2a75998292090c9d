use crate::types::AppState;
use dioxus::prelude::*;

#[component]
pub fn Header(mut state: Signal<AppState>) -> Element {
    let sidebar_open = state.read().sidebar_open;

    rsx! {
        header {
            style: "height: 64px; display: flex; align-items: center; gap: 1rem; padding: 0 1.5rem; background: #1e3a8a; color: white; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
            button {
                style: "background: transparent; border: 1px solid rgba(255,255,255,0.4); color: white; border-radius: 0.375rem; padding: 0.25rem 0.6rem; font-size: 1.25rem; cursor: pointer;",
                aria_label: if sidebar_open { "Hide menu" } else { "Show menu" },
                onclick: move |_| state.with_mut(|s| s.sidebar_open = !s.sidebar_open),
                "☰"
            }
            h1 {
                style: "font-size: 1.5rem; font-weight: bold; margin: 0;",
                "Welcome to G-Scores"
            }
        }
    }
}
