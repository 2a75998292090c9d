use crate::components::{Header, Sidebar, Toaster};
use crate::types::AppState;
use crate::Route;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

/// Header, collapsible sidebar and toasts around the routed page
#[component]
pub fn Shell() -> Element {
    let state = use_context::<Signal<AppState>>();
    let sidebar_open = state.read().sidebar_open;

    rsx! {
        div {
            style: "min-height: 100vh; background: #f5f5f5; font-family: Arial, sans-serif; color: #1f2937;",
            Header { state }
            div {
                style: "display: flex;",
                if sidebar_open {
                    Sidebar {}
                }
                main {
                    style: "flex: 1; padding: 1.5rem; min-width: 0;",
                    div {
                        style: "max-width: 1200px; margin: 0 auto;",
                        Outlet::<Route> {}
                    }
                }
            }
            Toaster { state }
        }
    }
}
