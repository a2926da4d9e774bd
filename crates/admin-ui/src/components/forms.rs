//! Form components for the create dialogs

use dioxus::prelude::*;
use super::feedback::ErrorMessage;

/// Props for the Input component
#[derive(Props, Clone, PartialEq)]
pub struct InputProps {
    /// DOM id, used to focus the first invalid field
    pub id: String,
    /// Input label
    pub label: String,
    /// Input type (text, email, tel)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Current value
    pub value: String,
    /// Placeholder text
    #[props(default = String::new())]
    pub placeholder: String,
    /// Whether the input is required
    #[props(default = true)]
    pub required: bool,
    /// Error message to display
    #[props(default = None)]
    pub error: Option<String>,
    /// Callback when value changes
    pub oninput: EventHandler<String>,
}

/// Text input component with label and validation
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = if props.error.is_some() {
        "mt-1 block w-full rounded-md border border-red-400 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-red-500"
    } else {
        "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
    };

    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700", r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "text-red-500", " *" }
                }
            }
            input {
                id: "{props.id}",
                r#type: "{props.input_type}",
                class: "{input_class}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                "aria-invalid": props.error.is_some(),
                oninput: move |evt| props.oninput.call(evt.value())
            }
            if let Some(error) = &props.error {
                ErrorMessage { message: error.clone() }
            }
        }
    }
}

/// Props for the Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Button text
    pub children: Element,
    /// Button variant (primary, secondary, danger)
    #[props(default = "primary".to_string())]
    pub variant: String,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Button type (button, submit)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Click handler
    #[props(default = EventHandler::default())]
    pub onclick: EventHandler<MouseEvent>,
}

/// Button component with variants
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_class = match props.variant.as_str() {
        "danger" => "text-white bg-red-600 border-transparent hover:bg-red-700",
        "secondary" => "text-gray-700 bg-white border-gray-300 hover:bg-gray-50",
        _ => "text-white bg-blue-600 border-transparent hover:bg-blue-700",
    };
    let disabled = props.disabled;

    rsx! {
        button {
            r#type: "{props.button_type}",
            class: "inline-flex items-center px-4 py-2 text-sm font-medium border rounded-md disabled:opacity-50 disabled:cursor-not-allowed {variant_class}",
            disabled,
            onclick: move |evt| {
                if !disabled {
                    props.onclick.call(evt)
                }
            },
            {props.children}
        }
    }
}
