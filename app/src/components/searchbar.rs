use dioxus::prelude::*;

#[component]
pub fn Searchbar(searching: bool, on_search: EventHandler<String>) -> Element {
    let mut value = use_signal(String::new);
    let blank = value.read().trim().is_empty();

    let submit = move || {
        let input = value.read().trim().to_string();
        if !input.is_empty() && !searching {
            on_search.call(input);
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center;",
            input {
                r#type: "text",
                placeholder: "Search your score here...",
                value: "{value}",
                disabled: searching,
                style: "flex: 1; min-width: 200px; padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font-size: 1rem;",
                oninput: move |e| value.set(e.value()),
                onkeydown: move |event: KeyboardEvent| {
                    if event.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                style: format!(
                    "padding: 0.75rem 1.5rem; border: none; border-radius: 0.5rem; color: white; font-weight: 500; {}",
                    if searching || blank {
                        "background: #9ca3af; cursor: not-allowed;"
                    } else {
                        "background: #2563eb; cursor: pointer;"
                    }
                ),
                disabled: searching || blank,
                onclick: move |_| submit(),
                if searching { "Searching..." } else { "Submit" }
            }
        }
    }
}
