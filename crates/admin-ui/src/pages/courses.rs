//! Course management page component

use dioxus::prelude::*;

use crate::components::{Alert, Button, EmptyState, Input, Modal, Spinner};
use crate::hooks::use_courses;
use crate::models::{CourseForm, FormValidation};
use crate::services::{COURSE_MESSAGES, SubmitOutcome};
use crate::utils::{field_id, focus_and_select};

const FORM_ID: &str = "course";

/// Course list with the "Add New Course" dialog
#[component]
pub fn CoursesPage() -> Element {
    let courses = use_courses();
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(CourseForm::default);
    let mut errors = use_signal(FormValidation::success);
    let mut submitting = use_signal(|| false);

    let mut reset_form = move || {
        form.set(CourseForm::default());
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
        let courses = courses.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if submitting() {
                return;
            }
            let courses = courses.clone();
            let values = form();
            spawn(async move {
                submitting.set(true);
                let outcome = courses.create(values).await;
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

    let state = courses.state.read().clone();
    let error_for = move |field: &str| errors.read().message_for(field).map(str::to_string);

    rsx! {
        div { class: "space-y-6",
            div { class: "bg-white shadow rounded-lg",
                div { class: "px-4 py-5 sm:p-6 flex items-center justify-between",
                    div {
                        h3 { class: "text-lg leading-6 font-medium text-gray-900", "Courses" }
                        p { class: "mt-1 text-sm text-gray-500", "Course records held by the course service" }
                    }
                    Button {
                        onclick: move |_| open_form(),
                        "+ Add Course"
                    }
                }
            }

            if let Some(banner) = state.banner.clone() {
                Alert {
                    message: banner,
                    ondismiss: {
                        let courses = courses.clone();
                        move |_| courses.dismiss_banner()
                    }
                }
            }

            div { class: "bg-white shadow rounded-lg",
                if state.loading {
                    Spinner { message: Some("Loading courses...".to_string()) }
                } else if state.is_empty() {
                    EmptyState { message: COURSE_MESSAGES.empty.to_string(), icon: "📚".to_string() }
                } else {
                    // Wide viewports
                    div { class: "hidden md:block overflow-x-auto",
                        table { class: "min-w-full divide-y divide-gray-200",
                            thead { class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Course ID" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Name" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Duration" }
                                    th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider", "Actions" }
                                }
                            }
                            tbody { class: "bg-white divide-y divide-gray-200",
                                for course in state.items.iter().cloned() {
                                    tr { key: "{course.id}",
                                        td { class: "px-6 py-4 text-sm font-medium text-gray-900", "{course.id}" }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{course.name}" }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{course.duration}" }
                                        td { class: "px-6 py-4 text-right",
                                            Button {
                                                variant: "danger".to_string(),
                                                onclick: {
                                                    let courses = courses.clone();
                                                    let id = course.id.clone();
                                                    move |_| courses.delete(id.clone())
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // Narrow viewports
                    div { class: "md:hidden divide-y divide-gray-200",
                        for course in state.items.iter().cloned() {
                            div { key: "{course.id}", class: "p-4 flex items-start justify-between",
                                div {
                                    p { class: "text-sm font-semibold text-gray-900", "{course.name}" }
                                    p { class: "text-xs text-gray-500", "ID: {course.id}" }
                                    p { class: "text-xs text-gray-500", "Duration: {course.duration}" }
                                }
                                Button {
                                    variant: "danger".to_string(),
                                    onclick: {
                                        let courses = courses.clone();
                                        let id = course.id.clone();
                                        move |_| courses.delete(id.clone())
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
                title: "Add New Course".to_string(),
                onclose: move |_| close_form(),
                form { onsubmit: submit, novalidate: true,
                    Input {
                        id: field_id(FORM_ID, CourseForm::ID),
                        label: "Course ID".to_string(),
                        placeholder: "e.g. HDSE".to_string(),
                        value: form.read().id.clone(),
                        error: error_for(CourseForm::ID),
                        oninput: move |value| edit(CourseForm::ID, value)
                    }
                    Input {
                        id: field_id(FORM_ID, CourseForm::NAME),
                        label: "Course Name".to_string(),
                        value: form.read().name.clone(),
                        error: error_for(CourseForm::NAME),
                        oninput: move |value| edit(CourseForm::NAME, value)
                    }
                    Input {
                        id: field_id(FORM_ID, CourseForm::DURATION),
                        label: "Duration".to_string(),
                        placeholder: "e.g. 2 Years".to_string(),
                        value: form.read().duration.clone(),
                        error: error_for(CourseForm::DURATION),
                        oninput: move |value| edit(CourseForm::DURATION, value)
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
                            if submitting() { "Saving..." } else { "Save Course" }
                        }
                    }
                }
            }
        }
    }
}
