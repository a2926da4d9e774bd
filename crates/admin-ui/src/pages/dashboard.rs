//! Dashboard page component

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{APP_NAME, APP_VERSION, Alert, Button, Modal};
use crate::hooks::{use_api, use_banner};
use crate::services::{DASHBOARD_LOAD_FAILED, DashboardStats, load_dashboard_stats};

/// Counts of every collection plus shortcuts to each page
#[component]
pub fn Dashboard() -> Element {
    let clients = use_api();
    let mut banner = use_banner();
    let mut stats = use_signal(|| None::<DashboardStats>);
    let mut loading = use_signal(|| true);
    let mut show_about = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            match load_dashboard_stats(&clients).await {
                Ok(loaded) => stats.set(Some(loaded)),
                Err(_) => banner.show(DASHBOARD_LOAD_FAILED),
            }
            loading.set(false);
        });
    });

    let count = move |pick: fn(&DashboardStats) -> usize| -> String {
        if loading() {
            "…".to_string()
        } else {
            stats().map(|s| pick(&s).to_string()).unwrap_or_else(|| "-".to_string())
        }
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "bg-white overflow-hidden shadow rounded-lg",
                div { class: "px-4 py-5 sm:p-6 sm:flex sm:items-center sm:justify-between",
                    div {
                        p { class: "text-xl font-bold text-gray-900 sm:text-2xl", "Welcome" }
                        p { class: "text-sm font-medium text-gray-600",
                            "Manage courses, students and media from one place"
                        }
                    }
                    Button {
                        variant: "secondary".to_string(),
                        onclick: move |_| show_about.set(true),
                        "About"
                    }
                }
            }

            if let Some(message) = banner.current() {
                Alert {
                    message,
                    ondismiss: move |_| banner.dismiss()
                }
            }

            // Quick stats
            div { class: "grid grid-cols-1 gap-5 sm:grid-cols-3",
                StatCard {
                    label: "Courses".to_string(),
                    icon: "📚".to_string(),
                    accent: "bg-blue-500".to_string(),
                    value: count(|s| s.courses),
                    to: Route::Courses {},
                }
                StatCard {
                    label: "Students".to_string(),
                    icon: "🎓".to_string(),
                    accent: "bg-green-500".to_string(),
                    value: count(|s| s.students),
                    to: Route::Students {},
                }
                StatCard {
                    label: "Media Files".to_string(),
                    icon: "🖼️".to_string(),
                    accent: "bg-purple-500".to_string(),
                    value: count(|s| s.media_files),
                    to: Route::Media {},
                }
            }

            // Quick actions
            div { class: "bg-white shadow rounded-lg",
                div { class: "px-4 py-5 sm:p-6",
                    h3 { class: "text-lg leading-6 font-medium text-gray-900 mb-4", "Quick Actions" }
                    div { class: "grid grid-cols-1 gap-4 sm:grid-cols-3",
                        QuickAction {
                            icon: "➕".to_string(),
                            title: "Add a course".to_string(),
                            detail: "Create a new course record".to_string(),
                            to: Route::Courses {},
                        }
                        QuickAction {
                            icon: "👤".to_string(),
                            title: "Register a student".to_string(),
                            detail: "Create a new student record".to_string(),
                            to: Route::Students {},
                        }
                        QuickAction {
                            icon: "📤".to_string(),
                            title: "Upload media".to_string(),
                            detail: "Images, PDFs and text files".to_string(),
                            to: Route::Media {},
                        }
                    }
                }
            }

            Modal {
                show: show_about(),
                title: "About".to_string(),
                onclose: move |_| show_about.set(false),
                footer: Some(rsx! {
                    Button {
                        onclick: move |_| show_about.set(false),
                        "Close"
                    }
                }),
                div { class: "space-y-2 text-center",
                    p { class: "text-base font-semibold text-gray-900", "{APP_NAME}" }
                    p { class: "text-sm text-gray-700",
                        "A small example application demonstrating cloud-enabled deployment of the course, student and media services."
                    }
                    div { class: "pt-3 space-y-1 text-sm text-gray-500",
                        p { span { class: "font-medium", "Version: " } "{APP_VERSION}" }
                        p { span { class: "font-medium", "Author: " } "Enterprise Cloud Architecture" }
                    }
                }
            }
        }
    }
}

/// Stat card that navigates to its page
#[component]
fn StatCard(label: String, icon: String, accent: String, value: String, to: Route) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-white overflow-hidden shadow rounded-lg hover:shadow-md transition-shadow",
            div { class: "p-5 flex items-center",
                div { class: "flex-shrink-0",
                    div { class: "w-10 h-10 {accent} rounded-md flex items-center justify-center",
                        span { class: "text-white text-lg", "{icon}" }
                    }
                }
                div { class: "ml-5 w-0 flex-1",
                    dl {
                        dt { class: "text-sm font-medium text-gray-500 truncate", "{label}" }
                        dd { class: "text-2xl font-semibold text-gray-900", "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickAction(icon: String, title: String, detail: String, to: Route) -> Element {
    rsx! {
        Link {
            to,
            class: "relative rounded-lg border border-gray-300 bg-white px-6 py-5 shadow-sm flex items-center space-x-3 hover:border-gray-400",
            div { class: "flex-shrink-0",
                span { class: "text-2xl", "{icon}" }
            }
            div { class: "flex-1 min-w-0",
                p { class: "text-sm font-medium text-gray-900", "{title}" }
                p { class: "text-sm text-gray-500", "{detail}" }
            }
        }
    }
}
