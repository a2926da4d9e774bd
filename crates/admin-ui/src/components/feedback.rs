//! Feedback components for error banners, field errors and empty states

use dioxus::prelude::*;

/// Props for the ErrorMessage component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorMessageProps {
    /// Error message to display
    pub message: String,
}

/// Inline message shown under an invalid form field
#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    rsx! {
        p { class: "mt-1 text-sm text-red-600 flex items-center",
            span { class: "mr-1", "⚠" }
            span { "{props.message}" }
        }
    }
}

/// Props for the Alert component
#[derive(Props, Clone, PartialEq)]
pub struct AlertProps {
    /// Alert message
    pub message: String,
    /// Callback when alert is dismissed
    #[props(default = EventHandler::default())]
    pub ondismiss: EventHandler<()>,
}

/// Dismissible error banner. Every page shows at most one.
#[component]
pub fn Alert(props: AlertProps) -> Element {
    rsx! {
        div { class: "rounded-md border border-red-200 bg-red-50 p-4 flex items-start", role: "alert",
            p { class: "flex-1 text-sm font-medium text-red-800", "{props.message}" }
            button {
                class: "ml-3 text-lg leading-none text-red-800 hover:opacity-75",
                "aria-label": "Dismiss",
                onclick: move |_| props.ondismiss.call(()),
                "×"
            }
        }
    }
}

/// Placeholder for an empty collection
#[component]
pub fn EmptyState(message: String, #[props(default = "📭".to_string())] icon: String) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-4xl mb-2", "{icon}" }
            p { class: "text-gray-500", "{message}" }
        }
    }
}
