use crate::types::AppState;
use dioxus::prelude::*;

#[component]
pub fn Toaster(mut state: Signal<AppState>) -> Element {
    let toasts = state.read().toasts.clone();

    rsx! {
        div {
            style: "position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 50; max-width: 360px;",
            role: "status",
            for toast in toasts {
                {
                    let (background, accent) = toast.kind.colors();
                    let id = toast.id;
                    rsx! {
                        div {
                            key: "{id}",
                            style: "display: flex; align-items: flex-start; gap: 0.75rem; padding: 0.75rem 1rem; background: {background}; border-left: 4px solid {accent}; border-radius: 0.375rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1);",
                            span { style: "flex: 1; color: #1f2937;", "{toast.message}" }
                            button {
                                style: "background: none; border: none; cursor: pointer; color: {accent}; font-weight: bold;",
                                aria_label: "Dismiss",
                                onclick: move |_| state.with_mut(|s| s.dismiss_toast(id)),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
