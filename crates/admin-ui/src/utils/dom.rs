//! Browser calls the pages need outside of rsx
//!
//! Native builds have no window; there the confirmation is always declined
//! and focus is a no-op.

/// Blocking `window.confirm`; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("No window to confirm: {}", message);
        false
    }
}

/// Focus the input with the given id and select its content
pub fn focus_and_select(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok());
        match input {
            Some(input) => {
                let _ = input.focus();
                input.select();
            }
            None => tracing::warn!("No input with id {}", element_id),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
    }
}

/// DOM id of a dialog input, e.g. `course-id` or `student-fullName`
pub fn field_id(form: &str, field: &str) -> String {
    format!("{form}-{field}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_confirm_declines() {
        assert!(!confirm("Are you sure you want to delete this course?"));
        focus_and_select("course-id");
    }

    #[test]
    fn test_field_id() {
        assert_eq!(field_id("student", "registrationNumber"), "student-registrationNumber");
    }
}
