//! Loading indicators

use dioxus::prelude::*;

/// Props for the Spinner component
#[derive(Props, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Optional loading message
    #[props(default = None)]
    pub message: Option<String>,
}

/// Spinner loading indicator
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-8",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
            if let Some(message) = &props.message {
                p { class: "mt-2 text-sm text-gray-500", "{message}" }
            }
        }
    }
}

/// Props for the InlineLoader component
#[derive(Props, Clone, PartialEq)]
pub struct InlineLoaderProps {
    /// Whether the loader is visible
    pub visible: bool,
    /// Optional loading text
    #[props(default = None)]
    pub text: Option<String>,
}

/// Inline loading indicator for buttons or small spaces
#[component]
pub fn InlineLoader(props: InlineLoaderProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        span { class: "inline-flex items-center text-sm text-gray-600",
            span { class: "animate-spin rounded-full h-4 w-4 border-b-2 border-blue-600 mr-2" }
            if let Some(text) = &props.text {
                span { "{text}" }
            }
        }
    }
}
