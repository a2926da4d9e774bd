//! Student management page component

use dioxus::prelude::*;

use crate::components::{Alert, Button, EmptyState, Input, Modal, Spinner};
use crate::hooks::use_students;
use crate::models::{FormValidation, StudentForm};
use crate::services::{STUDENT_MESSAGES, SubmitOutcome};
use crate::utils::{field_id, focus_and_select};

const FORM_ID: &str = "student";

/// Student list with the "Add New Student" dialog
#[component]
pub fn StudentsPage() -> Element {
    let students = use_students();
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(StudentForm::default);
    let mut errors = use_signal(FormValidation::success);
    let mut submitting = use_signal(|| false);

    let mut reset_form = move || {
        form.set(StudentForm::default());
        errors.set(FormValidation::success());
    };
    let mut open_form = move || {
        reset_form();
        show_form.set(true);
    };
    let mut close_form = move || {
        show_form.set(false);
        reset_form();
    };

    let mut edit = move |field: &'static str, value: String| {
        form.write().set(field, value);
        errors.write().clear_field(field);
    };

    let submit = {
        let students = students.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if submitting() {
                return;
            }
            let students = students.clone();
            let values = form();
            spawn(async move {
                submitting.set(true);
                let outcome = students.create(values).await;
                submitting.set(false);
                match outcome {
                    SubmitOutcome::Invalid(validation) => {
                        if let Some(field) = validation.first_invalid_field() {
                            focus_and_select(&field_id(FORM_ID, field));
                        }
                        errors.set(validation);
                    }
                    SubmitOutcome::Saved | SubmitOutcome::Failed => close_form(),
                }
            });
        }
    };

    let state = students.state.read().clone();
    let error_for = move |field: &str| errors.read().message_for(field).map(str::to_string);

    rsx! {
        div { class: "space-y-6",
            div { class: "bg-white shadow rounded-lg",
                div { class: "px-4 py-5 sm:p-6 flex items-center justify-between",
                    div {
                        h3 { class: "text-lg leading-6 font-medium text-gray-900", "Students" }
                        p { class: "mt-1 text-sm text-gray-500", "Student records held by the student service" }
                    }
                    Button {
                        onclick: move |_| open_form(),
                        "+ Add Student"
                    }
                }
            }

            if let Some(banner) = state.banner.clone() {
                Alert {
                    message: banner,
                    ondismiss: {
                        let students = students.clone();
                        move |_| students.dismiss_banner()
                    }
                }
            }

            div { class: "bg-white shadow rounded-lg",
                if state.loading {
                    Spinner { message: Some("Loading students...".to_string()) }
                } else if state.is_empty() {
                    EmptyState { message: STUDENT_MESSAGES.empty.to_string(), icon: "🎓".to_string() }
                } else {
                    div { class: "hidden md:block overflow-x-auto",
                        table { class: "min-w-full divide-y divide-gray-200",
                            thead { class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Reg. No" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Full Name" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Email" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Contact" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Address" }
                                    th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider", "Actions" }
                                }
                            }
                            tbody { class: "bg-white divide-y divide-gray-200",
                                for student in state.items.iter().cloned() {
                                    tr { key: "{student.registration_number}",
                                        td { class: "px-6 py-4 text-sm font-medium text-gray-900", "{student.registration_number}" }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{student.full_name}" }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{student.email}" }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{student.contact}" }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{student.address}" }
                                        td { class: "px-6 py-4 text-right",
                                            Button {
                                                variant: "danger".to_string(),
                                                onclick: {
                                                    let students = students.clone();
                                                    let id = student.registration_number.clone();
                                                    move |_| students.delete(id.clone())
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "md:hidden divide-y divide-gray-200",
                        for student in state.items.iter().cloned() {
                            div { key: "{student.registration_number}", class: "p-4 flex items-start justify-between",
                                div { class: "min-w-0",
                                    p { class: "text-sm font-semibold text-gray-900", "{student.full_name}" }
                                    p { class: "text-xs text-gray-500", "{student.registration_number}" }
                                    p { class: "text-xs text-gray-500 truncate", "{student.email}" }
                                    p { class: "text-xs text-gray-500", "{student.contact}" }
                                    p { class: "text-xs text-gray-500", "{student.address}" }
                                }
                                Button {
                                    variant: "danger".to_string(),
                                    onclick: {
                                        let students = students.clone();
                                        let id = student.registration_number.clone();
                                        move |_| students.delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            Modal {
                show: show_form(),
                title: "Add New Student".to_string(),
                onclose: move |_| close_form(),
                form { onsubmit: submit, novalidate: true,
                    Input {
                        id: field_id(FORM_ID, StudentForm::REGISTRATION_NUMBER),
                        label: "Registration Number".to_string(),
                        placeholder: "S001".to_string(),
                        value: form.read().registration_number.clone(),
                        error: error_for(StudentForm::REGISTRATION_NUMBER),
                        oninput: move |value| edit(StudentForm::REGISTRATION_NUMBER, value)
                    }
                    Input {
                        id: field_id(FORM_ID, StudentForm::FULL_NAME),
                        label: "Full Name".to_string(),
                        value: form.read().full_name.clone(),
                        error: error_for(StudentForm::FULL_NAME),
                        oninput: move |value| edit(StudentForm::FULL_NAME, value)
                    }
                    Input {
                        id: field_id(FORM_ID, StudentForm::EMAIL),
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        value: form.read().email.clone(),
                        error: error_for(StudentForm::EMAIL),
                        oninput: move |value| edit(StudentForm::EMAIL, value)
                    }
                    Input {
                        id: field_id(FORM_ID, StudentForm::CONTACT),
                        label: "Contact".to_string(),
                        input_type: "tel".to_string(),
                        placeholder: "077-1234567".to_string(),
                        value: form.read().contact.clone(),
                        error: error_for(StudentForm::CONTACT),
                        oninput: move |value| edit(StudentForm::CONTACT, value)
                    }
                    Input {
                        id: field_id(FORM_ID, StudentForm::ADDRESS),
                        label: "Address".to_string(),
                        value: form.read().address.clone(),
                        error: error_for(StudentForm::ADDRESS),
                        oninput: move |value| edit(StudentForm::ADDRESS, value)
                    }
                    div { class: "flex justify-end space-x-3 pt-2",
                        Button {
                            variant: "secondary".to_string(),
                            onclick: move |_| close_form(),
                            "Cancel"
                        }
                        Button {
                            button_type: "submit".to_string(),
                            disabled: submitting(),
                            if submitting() { "Saving..." } else { "Save Student" }
                        }
                    }
                }
            }
        }
    }
}
