//! Modal dialog shell shared by the create forms, the media preview and
//! the About box

use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `onclose`.
#[component]
pub fn Modal(
    show: bool,
    title: String,
    onclose: EventHandler<()>,
    #[props(default = "sm:max-w-lg".to_string())] width: String,
    children: Element,
    #[props(default = None)] footer: Option<Element>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        // Modal backdrop
        div {
            class: "fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity z-40",
            onclick: move |_| onclose.call(()),
        }

        div {
            class: "fixed inset-0 z-50 overflow-y-auto pointer-events-none",
            div {
                class: "flex min-h-full items-end justify-center p-4 sm:items-center sm:p-0",
                div {
                    class: "pointer-events-auto relative w-full transform overflow-hidden rounded-lg bg-white text-left shadow-xl transition-all sm:my-8 {width}",
                    role: "dialog",
                    "aria-modal": "true",
                    onclick: move |evt| evt.stop_propagation(),

                    div { class: "flex items-center justify-between px-6 py-4 border-b border-gray-200",
                        h3 { class: "text-lg font-medium text-gray-900", "{title}" }
                        button {
                            class: "p-1 rounded-md text-gray-400 hover:text-gray-600 hover:bg-gray-100",
                            "aria-label": "Close",
                            onclick: move |_| onclose.call(()),
                            "✕"
                        }
                    }

                    div { class: "px-6 py-4", {children} }

                    if let Some(footer) = footer {
                        div { class: "px-6 py-3 bg-gray-50 flex justify-end space-x-3 rounded-b-lg",
                            {footer}
                        }
                    }
                }
            }
        }
    }
}
