use dioxus::prelude::*;
use gscores::top_students::TopStudentsTable;
use gscores::Block;

#[component]
pub fn TopStudentsSection(
    table: TopStudentsTable,
    loading: bool,
    on_block: EventHandler<Block>,
) -> Element {
    let selected = table.block;

    rsx! {
        div {
            style: "background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem;",
                h3 { style: "font-size: 1.25rem; font-weight: bold; margin: 0;", "Top 10 Students" }
                select {
                    style: "padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.375rem; background: white;",
                    aria_label: "Block",
                    value: "{selected.key()}",
                    onchange: move |event: FormEvent| {
                        match Block::from_key(&event.value()) {
                            Some(block) => on_block.call(block),
                            None => log::warn!("Ignoring unknown block {}", event.value()),
                        }
                    },
                    for block in Block::ALL {
                        option {
                            key: "{block.key()}",
                            value: "{block.key()}",
                            selected: block == selected,
                            "{block.name()}"
                        }
                    }
                }
            }

            if loading {
                p { style: "text-align: center; color: #6b7280; padding: 2rem 0;", "Loading top students..." }
            } else if table.is_empty() {
                p { style: "text-align: center; color: #6b7280; padding: 2rem 0;", "No data available" }
            } else {
                div {
                    style: "overflow-x: auto;",
                    table {
                        style: "width: 100%; border-collapse: collapse; font-size: 0.875rem;",
                        thead {
                            tr {
                                for header in table.headers.iter() {
                                    th {
                                        key: "{header}",
                                        style: "text-align: left; padding: 0.75rem; background: #f9fafb; border-bottom: 1px solid #e5e7eb; color: #374151;",
                                        "{header}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for row in table.rows.iter() {
                                tr {
                                    key: "{row.sbd}",
                                    style: "border-bottom: 1px solid #f3f4f6;",
                                    td { style: "padding: 0.75rem; font-weight: 600;", "{row.rank}" }
                                    td { style: "padding: 0.75rem; font-family: monospace;", "{row.sbd}" }
                                    for (i, score) in row.scores.iter().enumerate() {
                                        td { key: "{i}", style: "padding: 0.75rem;", "{score}" }
                                    }
                                    td { style: "padding: 0.75rem; font-weight: 600; color: #2563eb;", "{row.total}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
