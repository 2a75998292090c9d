use dioxus::prelude::*;
use gscores::search::{ScoreCard, SearchState, SearchStatus};

#[component]
pub fn SearchResults(search: Signal<SearchState>) -> Element {
    let status = search.read().status.clone();

    match status {
        SearchStatus::Idle => rsx! {},
        SearchStatus::Loading => rsx! {
            p {
                style: "text-align: center; color: #4b5563; padding: 3rem 0;",
                "Searching for your scores..."
            }
        },
        SearchStatus::Failed(error) => rsx! {
            div {
                style: "background: #fef2f2; border: 1px solid #fecaca; border-radius: 0.5rem; padding: 1.5rem;",
                h3 { style: "font-weight: 600; color: #7f1d1d; margin: 0 0 0.25rem 0;", "Search Error" }
                p { style: "color: #b91c1c; margin: 0;", "{error.user_message()}" }
            }
        },
        SearchStatus::Found(card) => rsx! {
            ScoreCardView { card }
        },
    }
}

#[component]
fn ScoreCardView(card: ScoreCard) -> Element {
    let average = card.average_display();
    let basis = card.basis_display();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 1.5rem;",
            div {
                style: "background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 0.5rem; padding: 1rem; color: #166534; font-weight: 500;",
                "Score found successfully!"
            }
            div {
                style: "background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem;",
                h2 { style: "font-size: 1.5rem; font-weight: bold; margin: 0 0 1.5rem 0;", "Your Exam Results" }

                div {
                    style: "margin-bottom: 2rem; padding-bottom: 1.5rem; border-bottom: 1px solid #e5e7eb;",
                    p { style: "font-size: 0.875rem; color: #4b5563; margin: 0 0 0.5rem 0;", "Registration Number" }
                    p { style: "font-size: 1.5rem; font-weight: bold; margin: 0;", "{card.sbd}" }
                    if let Some(code) = &card.language_code {
                        p {
                            style: "font-size: 0.875rem; color: #4b5563; margin: 0.5rem 0 0 0;",
                            "Foreign Language: "
                            span { style: "font-weight: 600;", "{code}" }
                        }
                    }
                }

                h3 { style: "font-size: 1.125rem; font-weight: 600; margin: 0 0 1rem 0;", "Subject Scores" }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; margin-bottom: 2rem;",
                    for entry in card.subjects.iter() {
                        ScoreTile {
                            key: "{entry.subject.key}",
                            label: entry.subject.name,
                            value: entry.score.to_string(),
                            color: "#2563eb"
                        }
                    }
                }

                if !card.block_totals.is_empty() {
                    h3 { style: "font-size: 1.125rem; font-weight: 600; margin: 0 0 1rem 0;", "Block Totals" }
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; margin-bottom: 2rem;",
                        for (block, total) in card.block_totals.iter() {
                            ScoreTile {
                                key: "{block}",
                                label: block.name(),
                                value: format!("{total:.2}"),
                                color: "#059669"
                            }
                        }
                    }
                }

                div {
                    style: "background: linear-gradient(to right, #3b82f6, #2563eb); border-radius: 0.5rem; padding: 1.5rem; color: white;",
                    p { style: "font-size: 0.875rem; color: #dbeafe; margin: 0 0 0.5rem 0;", "Average Score" }
                    p { style: "font-size: 2.25rem; font-weight: bold; margin: 0;", "{average}" }
                    p { style: "font-size: 0.75rem; color: #dbeafe; margin: 0.5rem 0 0 0;", "{basis}" }
                }
            }
        }
    }
}

#[component]
fn ScoreTile(label: String, value: String, color: &'static str) -> Element {
    rsx! {
        div { style: "padding: 1rem; border: 1px solid #bfdbfe; border-radius: 0.5rem; background: #eff6ff;",
            div { style: "font-size: 0.75rem; color: #4b5563; margin-bottom: 0.25rem;", "{label}" }
            div { style: "font-size: 1.5rem; font-weight: bold; color: {color};", "{value}" }
        }
    }
}
