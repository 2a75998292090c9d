use crate::Route;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

#[derive(Debug, Clone)]
struct NavItem {
    route: Route,
    label: &'static str,
}

impl PartialEq for NavItem {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(&self.route) == std::mem::discriminant(&other.route)
    }
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        route: Route::Dashboard {},
        label: "Dashboard",
    },
    NavItem {
        route: Route::SearchScores {},
        label: "Search Scores",
    },
];

#[component]
pub fn Sidebar() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        nav {
            class: "sidebar-nav",
            style: "width: 220px; min-height: calc(100vh - 64px); background: white; box-shadow: 2px 0 4px rgba(0,0,0,0.05); padding: 1rem;",
            role: "menu",
            aria_label: "Main navigation",
            div {
                style: "font-size: 0.75rem; font-weight: 600; text-transform: uppercase; color: #9ca3af; margin-bottom: 0.75rem;",
                "Menu"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 0.25rem;",
                for item in NAV_ITEMS.iter() {
                    SidebarItem {
                        item: item.clone(),
                        current_route: current_route.clone()
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SidebarItemProps {
    item: NavItem,
    current_route: Route,
}

#[component]
fn SidebarItem(props: SidebarItemProps) -> Element {
    let navigator = use_navigator();
    let is_active =
        std::mem::discriminant(&props.current_route) == std::mem::discriminant(&props.item.route);

    rsx! {
        button {
            class: "sidebar-item",
            role: "menuitem",
            tabindex: "0",
            style: format!(
                "padding: 0.75rem 1rem; border: none; border-radius: 0.375rem; cursor: pointer; font-weight: 500; text-align: left; transition: all 0.2s; {}",
                if is_active {
                    "background: #2563eb; color: white;"
                } else {
                    "background: transparent; color: #374151;"
                }
            ),
            onclick: {
                let route = props.item.route.clone();
                move |_| {
                    navigator.push(route.clone());
                }
            },
            onkeydown: {
                let route = props.item.route.clone();
                move |event: KeyboardEvent| {
                    let key = event.key();
                    if key == Key::Enter || key == Key::Character(" ".to_string()) {
                        navigator.push(route.clone());
                    }
                }
            },
            aria_current: if is_active { "page" } else { "false" },
            {props.item.label}
        }
    }
}
