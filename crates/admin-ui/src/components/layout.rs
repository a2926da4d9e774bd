//! Layout components for the console
//!
//! This module provides the shell every page renders inside:
//! - ConsoleLayout: sidebar plus header around the routed page
//! - Sidebar: responsive navigation between the four pages
//! - Header: page title and the mobile menu toggle

use dioxus::prelude::*;

use crate::app::Route;

pub const APP_NAME: &str = "ECA Admin Console";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Navigation item definition
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

/// Sidebar entries, in display order
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            id: "dashboard",
            label: "Dashboard",
            icon: "📊",
            route: Route::Dashboard {},
        },
        NavItem {
            id: "courses",
            label: "Courses",
            icon: "📚",
            route: Route::Courses {},
        },
        NavItem {
            id: "students",
            label: "Students",
            icon: "🎓",
            route: Route::Students {},
        },
        NavItem {
            id: "media",
            label: "Media",
            icon: "🖼️",
            route: Route::Media {},
        },
    ]
}

/// Title shown in the header for a route
pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "Dashboard",
        Route::Courses {} => "Course Management",
        Route::Students {} => "Student Management",
        Route::Media {} => "Media Management",
    }
}

/// Console layout component with sidebar and header
#[component]
pub fn ConsoleLayout() -> Element {
    let mut show_mobile_menu = use_signal(|| false);

    rsx! {
        div { class: "flex h-screen bg-gray-50 overflow-hidden",
            Sidebar {
                show_mobile: show_mobile_menu(),
                on_close: move |_| show_mobile_menu.set(false)
            }

            main { class: "flex-1 flex flex-col overflow-hidden",
                Header {
                    on_menu_toggle: move |_| show_mobile_menu.set(!show_mobile_menu())
                }

                div { class: "flex-1 overflow-auto",
                    div { class: "container mx-auto px-4 sm:px-6 lg:px-8 py-6",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

/// Responsive sidebar navigation component
#[component]
pub fn Sidebar(show_mobile: bool, on_close: EventHandler<()>) -> Element {
    let route = use_route::<Route>();

    rsx! {
        // Mobile overlay
        if show_mobile {
            div {
                class: "fixed inset-0 z-40 lg:hidden",
                onclick: move |_| on_close.call(()),
                div { class: "fixed inset-0 bg-gray-600 bg-opacity-75" }
            }
        }

        aside {
            class: format!(
                "fixed inset-y-0 left-0 z-50 w-64 bg-white shadow-lg transform transition-transform duration-300 ease-in-out lg:translate-x-0 lg:static lg:inset-0 {}",
                if show_mobile { "translate-x-0" } else { "-translate-x-full" }
            ),

            div { class: "flex flex-col h-full",
                div { class: "flex items-center justify-between px-6 py-4 border-b",
                    div { class: "flex items-center",
                        div { class: "w-10 h-10 bg-gradient-to-br from-blue-600 to-blue-700 rounded-lg flex items-center justify-center shadow-md",
                            span { class: "text-white font-bold text-lg", "E" }
                        }
                        span { class: "ml-3 text-xl font-semibold text-gray-900", "ECA Admin" }
                    }

                    button {
                        class: "lg:hidden p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                nav { class: "flex-1 px-3 py-4 space-y-1 overflow-y-auto",
                    for item in nav_items() {
                        Link {
                            key: "{item.id}",
                            to: item.route.clone(),
                            class: format!(
                                "flex items-center px-3 py-2.5 text-sm font-medium rounded-lg transition-all duration-150 {}",
                                if item.route == route {
                                    "bg-blue-50 text-blue-700 shadow-sm"
                                } else {
                                    "text-gray-700 hover:bg-gray-50 hover:text-gray-900"
                                }
                            ),
                            onclick: move |_| on_close.call(()),

                            span { class: "text-lg mr-3", "{item.icon}" }
                            span { "{item.label}" }

                            if item.route == route {
                                span { class: "ml-auto w-1.5 h-1.5 bg-blue-600 rounded-full" }
                            }
                        }
                    }
                }

                div { class: "px-4 py-4 border-t bg-gray-50 text-xs text-gray-500",
                    "v{APP_VERSION}"
                }
            }
        }
    }
}

/// Header component with the page title
#[component]
pub fn Header(on_menu_toggle: EventHandler<()>) -> Element {
    let route = use_route::<Route>();
    let title = page_title(&route);

    rsx! {
        header { class: "bg-white shadow-sm border-b",
            div { class: "px-4 sm:px-6 lg:px-8 py-4 flex items-center",
                button {
                    class: "lg:hidden p-2 mr-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100",
                    onclick: move |_| on_menu_toggle.call(()),
                    "☰"
                }
                h1 { class: "text-xl sm:text-2xl font-semibold text-gray-900 truncate", "{title}" }
            }
        }
    }
}
