use crate::components::{FilterDropdown, FilterOption, StatisticsChart, TopStudentsSection};
use crate::error_utils::toast_error;
use crate::types::AppState;
use dioxus::prelude::*;
use gscores::catalog::ScoreLevel;
use gscores::config::DashboardConfig;
use gscores::dashboard::{DashboardAction, DashboardState};
use gscores::HttpScoresClient;

/// Applies an action to the page state and runs the fetches it asks for,
/// feeding each completion back in as the next action.
#[derive(Clone)]
struct DashboardDispatch {
    state: Signal<DashboardState>,
    app: Signal<AppState>,
    client: HttpScoresClient,
}

impl DashboardDispatch {
    fn send(&self, action: DashboardAction) {
        let mut state = self.state;
        if let Some(e) = action.error() {
            if state.peek().accepts(&action) {
                toast_error(self.app, e);
            }
        }

        let effects = state.with_mut(|s| s.apply(action));
        for effect in effects {
            let dispatch = self.clone();
            spawn(async move {
                let completion = effect.run(&dispatch.client).await;
                dispatch.send(completion);
            });
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let app = use_context::<Signal<AppState>>();
    let client = use_context::<HttpScoresClient>();
    let settings = use_context::<DashboardConfig>();
    let dashboard = use_signal(|| DashboardState::new(settings.default_block));

    let send = use_callback(move |action: DashboardAction| {
        DashboardDispatch {
            state: dashboard,
            app,
            client: client.clone(),
        }
        .send(action)
    });

    use_effect(move || {
        spawn(async move {
            send.call(DashboardAction::Mounted);
        });
    });

    let state = dashboard.read();
    if state.metadata.is_none() && state.metadata_error.is_none() {
        return rsx! {
            div {
                style: "display: flex; justify-content: center; align-items: center; height: 16rem; color: #6b7280;",
                "Loading statistics..."
            }
        };
    }

    let table = state.top_students_table();
    let loading_table = state.loading_top_students;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 1.5rem;",
            h2 {
                style: "font-size: 1.875rem; font-weight: bold; margin: 0;",
                "Exam Statistics"
            }
            FiltersCard { dashboard, on_action: send }
            StatisticsChart { dashboard }
            TopStudentsSection {
                table,
                loading: loading_table,
                on_block: move |block| send.call(DashboardAction::SetBlock(block))
            }
        }
    }
}

#[component]
fn FiltersCard(dashboard: Signal<DashboardState>, on_action: EventHandler<DashboardAction>) -> Element {
    let state = dashboard.read();
    let metadata = state.metadata.as_ref();

    let subject_options: Vec<FilterOption> = metadata
        .map(|m| {
            m.subjects
                .iter()
                .map(|subject| FilterOption {
                    key: subject.key.clone(),
                    label: subject.name.clone(),
                    selected: state.filters.is_subject_selected(&subject.key),
                })
                .collect()
        })
        .unwrap_or_default();

    let level_options: Vec<FilterOption> = ScoreLevel::ALL
        .into_iter()
        .map(|level| FilterOption {
            key: level.key().to_string(),
            label: level.label().to_string(),
            selected: state.filters.is_level_selected(level),
        })
        .collect();

    let subjects_summary = state.filters.subjects_summary(metadata);
    let levels_summary = state.filters.levels_summary();
    let subjects_open = state.subjects_dropdown_open;
    let levels_open = state.levels_dropdown_open;
    let subjects_warning = if state.filters.subjects().is_empty() {
        "Please select at least one subject"
    } else {
        ""
    };
    let levels_warning = if state.filters.levels().is_empty() {
        "Please select at least one level"
    } else {
        ""
    };

    rsx! {
        div {
            style: "background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem;",
            h3 { style: "font-size: 1.25rem; font-weight: bold; margin: 0 0 1rem 0;", "Filters" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1rem;",
                FilterDropdown {
                    title: "Subjects",
                    summary: subjects_summary,
                    open: subjects_open,
                    options: subject_options,
                    warning: subjects_warning,
                    on_toggle_open: move |_| on_action.call(DashboardAction::ToggleSubjectsDropdown),
                    on_toggle: move |key: String| on_action.call(DashboardAction::ToggleSubject(key)),
                    on_select_all: move |_| on_action.call(DashboardAction::SelectAllSubjects),
                    on_clear: move |_| on_action.call(DashboardAction::ClearSubjects),
                }
                FilterDropdown {
                    title: "Score Levels",
                    summary: levels_summary,
                    open: levels_open,
                    options: level_options,
                    warning: levels_warning,
                    on_toggle_open: move |_| on_action.call(DashboardAction::ToggleLevelsDropdown),
                    on_toggle: move |key: String| {
                        if let Some(level) = ScoreLevel::from_key(&key) {
                            on_action.call(DashboardAction::ToggleLevel(level));
                        }
                    },
                    on_select_all: move |_| on_action.call(DashboardAction::SelectAllLevels),
                    on_clear: move |_| on_action.call(DashboardAction::ClearLevels),
                }
            }
        }
    }
}
