use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gscores::config::GScoresConfig;
use gscores::HttpScoresClient;

mod components;
mod error_utils;
mod types;

use components::*;
use types::*;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/search")]
        SearchScores {},
}

fn load_config() -> GScoresConfig {
    GScoresConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e}");
        GScoresConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    use_context_provider(|| HttpScoresClient::from_config(&config.api));
    use_context_provider(|| config.dashboard.clone());
    use_context_provider(|| Signal::new(AppState::default()));

    rsx! {
        Router::<Route> {}
    }
}
