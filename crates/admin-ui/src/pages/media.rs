//! Media management page component

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use crate::components::{Alert, Button, EmptyState, InlineLoader, Modal, Spinner};
use crate::hooks::use_media;
use crate::models::MediaFile;
use crate::services::MEDIA_MESSAGES;
use crate::utils::read_pending_uploads;

/// Upload area plus the gallery of stored files
#[component]
pub fn MediaPage() -> Element {
    let media = use_media();
    let mut dragging = use_signal(|| false);
    let mut preview = use_signal(|| None::<MediaFile>);

    let upload = use_callback({
        let media = media.clone();
        move |files: Vec<FileData>| {
            let media = media.clone();
            spawn(async move {
                let pending = read_pending_uploads(files).await;
                let report = media.upload(pending).await;
                tracing::debug!(
                    "Upload batch: {} accepted, {} rejected, {} failed",
                    report.accepted,
                    report.rejected.len(),
                    report.failed
                );
            });
        }
    });

    let delete = use_callback({
        let media = media.clone();
        move |id: String| media.delete(id)
    });

    let state = media.state.read().clone();
    let accept = media.filter.html_accept();
    let dropzone_class = if dragging() {
        "border-blue-500 bg-blue-50"
    } else {
        "border-gray-300 bg-white"
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "bg-white shadow rounded-lg",
                div { class: "px-4 py-5 sm:p-6",
                    h3 { class: "text-lg leading-6 font-medium text-gray-900", "Media Files" }
                    p { class: "mt-1 text-sm text-gray-500", "Images, PDFs and text files held by the media service" }
                }
            }

            if let Some(banner) = state.banner.clone() {
                Alert {
                    message: banner,
                    ondismiss: {
                        let media = media.clone();
                        move |_| media.dismiss_banner()
                    }
                }
            }

            // Drop zone
            div {
                class: "rounded-lg border-2 border-dashed p-8 text-center transition-colors {dropzone_class}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                    upload.call(evt.files());
                },
                div { class: "text-4xl mb-2", "📤" }
                p { class: "text-sm text-gray-700", "Drag and drop files here, or" }
                label { class: "mt-3 inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 cursor-pointer",
                    "Choose Files"
                    input {
                        r#type: "file",
                        class: "hidden",
                        multiple: true,
                        accept: "{accept}",
                        onchange: move |evt| upload.call(evt.files()),
                    }
                }
                p { class: "mt-2 text-xs text-gray-500", "Images, PDF and text files" }
                div { class: "mt-3",
                    InlineLoader { visible: state.busy, text: Some("Uploading...".to_string()) }
                }
            }

            // Gallery
            div { class: "bg-white shadow rounded-lg p-4",
                if state.loading {
                    Spinner { message: Some("Loading files...".to_string()) }
                } else if state.is_empty() {
                    EmptyState { message: MEDIA_MESSAGES.empty.to_string(), icon: "🗂️".to_string() }
                } else {
                    div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                        for file in state.items.iter().cloned() {
                            MediaCard {
                                key: "{file.id}",
                                src: media.resource_url(&file.id),
                                file: file.clone(),
                                onopen: move |file| preview.set(Some(file)),
                                ondelete: move |id| delete.call(id),
                            }
                        }
                    }
                }
            }

            if let Some(file) = preview() {
                Modal {
                    show: true,
                    title: file.filename.clone(),
                    width: "sm:max-w-3xl".to_string(),
                    onclose: move |_| preview.set(None),
                    footer: Some(rsx! {
                        Button {
                            variant: "secondary".to_string(),
                            onclick: move |_| preview.set(None),
                            "Close"
                        }
                        Button {
                            variant: "danger".to_string(),
                            onclick: {
                                let id = file.id.clone();
                                move |_| {
                                    preview.set(None);
                                    delete.call(id.clone());
                                }
                            },
                            "Delete"
                        }
                    }),
                    FilePreview { src: media.resource_url(&file.id), file: file.clone() }
                }
            }
        }
    }
}

/// One gallery card: thumbnail or icon, name and type chip
#[component]
fn MediaCard(file: MediaFile, src: String, onopen: EventHandler<MediaFile>, ondelete: EventHandler<String>) -> Element {
    let category = file.category();

    rsx! {
        div { class: "group rounded-lg border border-gray-200 overflow-hidden hover:shadow-md transition-shadow",
            button {
                class: "block w-full h-36 bg-gray-50 flex items-center justify-center",
                onclick: {
                    let file = file.clone();
                    move |_| onopen.call(file.clone())
                },
                if category.is_image() {
                    img { class: "h-full w-full object-cover", src: "{src}", alt: "{file.filename}" }
                } else {
                    span { class: "text-5xl", "{category.icon()}" }
                }
            }
            div { class: "p-3 flex items-center justify-between",
                div { class: "min-w-0",
                    p { class: "text-sm font-medium text-gray-900 truncate", title: "{file.filename}", "{file.filename}" }
                    span { class: "mt-1 inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
                        "{category.chip_label()}"
                    }
                }
                button {
                    class: "ml-2 p-1 text-gray-400 hover:text-red-600",
                    title: "Delete",
                    onclick: {
                        let id = file.id.clone();
                        move |_| ondelete.call(id.clone())
                    },
                    "🗑"
                }
            }
        }
    }
}

/// Body of the preview dialog
#[component]
fn FilePreview(file: MediaFile, src: String) -> Element {
    let category = file.category();

    rsx! {
        if category.is_image() {
            img { class: "max-h-[70vh] mx-auto rounded", src: "{src}", alt: "{file.filename}" }
        } else {
            div { class: "text-center py-8",
                div { class: "text-6xl", "{category.icon()}" }
                p { class: "mt-3 text-sm text-gray-700", "{category.chip_label()} file" }
                a {
                    class: "mt-2 inline-block text-sm text-blue-600 hover:underline",
                    href: "{src}",
                    target: "_blank",
                    "Open in new tab"
                }
            }
        }
    }
}
