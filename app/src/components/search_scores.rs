use crate::components::SearchResults;
use crate::components::Searchbar;
use crate::error_utils::{toast_error, toast_success};
use crate::types::AppState;
use dioxus::prelude::*;
use gscores::search::{SearchAction, SearchState, SearchStatus};
use gscores::HttpScoresClient;

#[component]
pub fn SearchScores() -> Element {
    let app = use_context::<Signal<AppState>>();
    let client = use_context::<HttpScoresClient>();
    let mut search = use_signal(SearchState::default);

    let on_search = use_callback(move |input: String| {
        let Some(effect) = search.with_mut(|s| s.apply(SearchAction::Submit(input))) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let completion = effect.run(&client).await;
            let settled = search.with_mut(|s| {
                let was_loading = s.is_loading();
                s.apply(completion);
                was_loading && !s.is_loading()
            });
            // A superseded lookup leaves the status untouched
            if !settled {
                return;
            }

            let status = search.read().status.clone();
            match status {
                SearchStatus::Found(_) => toast_success(app, "Score found successfully!"),
                SearchStatus::Failed(e) => toast_error(app, &e),
                SearchStatus::Idle | SearchStatus::Loading => {}
            }
        });
    });

    let searching = search.read().is_loading();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2rem;",
            div {
                h2 {
                    style: "font-size: 2.25rem; font-weight: bold; margin: 0 0 0.75rem 0;",
                    "Search Your Scores"
                }
                p {
                    style: "font-size: 1.125rem; color: #4b5563; margin: 0;",
                    "Enter your registration number to find your exam results and detailed statistics"
                }
            }
            div {
                style: "background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem;",
                label {
                    style: "display: block; font-size: 0.875rem; font-weight: 600; color: #374151; margin-bottom: 1rem;",
                    "Registration Number"
                }
                Searchbar { searching, on_search }
            }
            SearchResults { search }
        }
    }
}
