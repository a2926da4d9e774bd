//! Media management models

use mime::Mime;
use serde::{Deserialize, Serialize};

/// A stored file as listed by `GET /files`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MediaFile {
    pub id: String,
    pub filename: String,
    /// Link reported by the service. Rendering uses the resource URL instead.
    #[serde(default)]
    pub url: Option<String>,
}

impl MediaFile {
    pub fn category(&self) -> FileCategory {
        FileCategory::from_filename(&self.filename)
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "xml", "csv"];

fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Display category, decided by the filename extension alone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    Pdf,
    Text,
    Other,
}

impl FileCategory {
    pub fn from_filename(filename: &str) -> Self {
        match extension(filename).as_deref() {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => FileCategory::Image,
            Some("pdf") => FileCategory::Pdf,
            Some(ext) if TEXT_EXTENSIONS.contains(&ext) => FileCategory::Text,
            _ => FileCategory::Other,
        }
    }

    /// Label of the type chip shown on gallery cards
    pub fn chip_label(&self) -> &'static str {
        match self {
            FileCategory::Image => "Image",
            FileCategory::Pdf => "PDF",
            FileCategory::Text => "Text",
            FileCategory::Other => "File",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileCategory::Image => "🖼️",
            FileCategory::Pdf => "📕",
            FileCategory::Text => "📝",
            FileCategory::Other => "📄",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, FileCategory::Image)
    }
}

/// A file picked or dropped by the user, read into memory and not yet sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PendingUpload {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.filter(|t| !t.is_empty()),
            bytes,
        }
    }
}

/// One accepted kind of upload: a MIME pattern plus its known extensions
#[derive(Clone, Debug)]
pub struct AcceptRule {
    /// `image/*` style wildcard or an exact essence such as `application/pdf`
    pub mime: &'static str,
    pub extensions: &'static [&'static str],
}

impl AcceptRule {
    fn matches_mime(&self, content_type: &str) -> bool {
        let Ok(parsed) = content_type.parse::<Mime>() else {
            return false;
        };
        match self.mime.split_once('/') {
            Some((top, "*")) => parsed.type_().as_str() == top,
            _ => parsed.essence_str() == self.mime,
        }
    }

    fn matches_extension(&self, filename: &str) -> bool {
        extension(filename).is_some_and(|ext| self.extensions.contains(&ext.as_str()))
    }

    pub fn accepts(&self, file: &PendingUpload) -> bool {
        file.content_type.as_deref().is_some_and(|t| self.matches_mime(t))
            || self.matches_extension(&file.filename)
    }
}

/// Allow-list applied to dropped and picked files before any upload
#[derive(Clone, Debug)]
pub struct AcceptFilter {
    pub rules: Vec<AcceptRule>,
}

impl Default for AcceptFilter {
    fn default() -> Self {
        Self {
            rules: vec![
                AcceptRule {
                    mime: "image/*",
                    extensions: IMAGE_EXTENSIONS,
                },
                AcceptRule {
                    mime: "application/pdf",
                    extensions: &["pdf"],
                },
                AcceptRule {
                    mime: "text/*",
                    extensions: TEXT_EXTENSIONS,
                },
            ],
        }
    }
}

impl AcceptFilter {
    pub fn accepts(&self, file: &PendingUpload) -> bool {
        self.rules.iter().any(|rule| rule.accepts(file))
    }

    /// Split a batch into (accepted, rejected), preserving order
    pub fn partition(&self, files: Vec<PendingUpload>) -> (Vec<PendingUpload>, Vec<PendingUpload>) {
        files.into_iter().partition(|file| self.accepts(file))
    }

    /// Value for the `accept` attribute of the file input
    pub fn html_accept(&self) -> String {
        self.rules
            .iter()
            .flat_map(|rule| {
                std::iter::once(rule.mime.to_string())
                    .chain(rule.extensions.iter().map(|ext| format!(".{ext}")))
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
