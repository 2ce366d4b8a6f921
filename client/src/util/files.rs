//! File picking and upload validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Upload inputs hand a `PickedFile` to forms. Size and type limits are
//! checked before the file is kept; the browser `File` handle only exists in
//! the hydrate build, where it is appended to multipart bodies.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use leptos::prelude::*;

const MB: u64 = 1024 * 1024;

/// A file chosen in an `<input type="file">`.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    #[cfg(feature = "hydrate")]
    pub(crate) file: web_sys::File,
}

impl PickedFile {
    #[cfg(feature = "hydrate")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), size: file.size() as u64, mime: file.type_(), file }
    }

    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn described(name: &str, size: u64, mime: &str) -> Self {
        Self { name: name.to_owned(), size, mime: mime.to_owned() }
    }
}

/// Limits for one kind of upload.
#[derive(Clone, Copy, Debug)]
pub struct FileRule {
    pub max_bytes: u64,
    pub mime_types: &'static [&'static str],
    pub too_large: &'static str,
    pub wrong_type: &'static str,
    /// Check the type before the size.
    pub type_first: bool,
}

/// Internship requirements document.
pub const DOCUMENT: FileRule = FileRule {
    max_bytes: 10 * MB,
    mime_types: &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ],
    too_large: "File size must be less than 10MB",
    wrong_type: "Only PDF, DOC, and DOCX files are allowed",
    type_first: false,
};

/// Picture attached to an account by an administrator.
pub const ACCOUNT_PICTURE: FileRule = FileRule {
    max_bytes: 5 * MB,
    mime_types: &["image/jpeg", "image/png", "image/jpg", "image/gif"],
    too_large: "Image size must be less than 5MB",
    wrong_type: "Please select a valid image file (JPEG, PNG, GIF)",
    type_first: true,
};

/// Picture uploaded from the profile page.
pub const PROFILE_PICTURE: FileRule = FileRule {
    max_bytes: 5 * MB,
    mime_types: &["image/jpeg", "image/jpg", "image/png", "image/gif", "image/webp"],
    too_large: "Image size must be less than 5MB",
    wrong_type: "Please select a valid image file (JPEG, PNG, GIF, or WebP)",
    type_first: false,
};

impl FileRule {
    /// # Errors
    ///
    /// Returns the message to show when `file` breaks this rule.
    pub fn check(&self, file: &PickedFile) -> Result<(), &'static str> {
        let size_ok = file.size <= self.max_bytes;
        let type_ok = self.mime_types.contains(&file.mime.as_str());
        match (self.type_first, size_ok, type_ok) {
            (true, _, false) => Err(self.wrong_type),
            (_, false, _) => Err(self.too_large),
            (false, true, false) => Err(self.wrong_type),
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "hydrate")]
fn pick(ev: &leptos::ev::Event, rule: &FileRule) -> Result<Option<PickedFile>, &'static str> {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };
    let picked = PickedFile::from_file(file);
    if let Err(message) = rule.check(&picked) {
        input.set_value("");
        return Err(message);
    }
    Ok(Some(picked))
}

/// Handle a file input's change event: keep an accepted file in `target`,
/// or clear the input and report the rule's message through `error`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn pick_into(
    ev: &leptos::ev::Event,
    rule: &FileRule,
    target: RwSignal<Option<PickedFile>, LocalStorage>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        match pick(ev, rule) {
            Ok(Some(file)) => {
                target.set(Some(file));
                error.set(None);
            }
            Ok(None) => {}
            Err(message) => error.set(Some(message.to_owned())),
        }
    }
}

/// Object URL previewing `file`, to be released with [`revoke_preview`].
#[cfg(feature = "hydrate")]
pub fn preview_url(file: &PickedFile) -> Option<String> {
    match web_sys::Url::create_object_url_with_blob(&file.file) {
        Ok(url) => Some(url),
        Err(e) => {
            leptos::logging::warn!("preview failed for {}: {e:?}", file.name);
            None
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        leptos::logging::warn!("failed to revoke preview url: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn preview_url(_file: &PickedFile) -> Option<String> {
    None
}

#[cfg(not(feature = "hydrate"))]
pub fn revoke_preview(_url: &str) {}

/// Human-readable size such as `2.4 MB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    if bytes < MB {
        return format!("{:.1} KB", bytes as f64 / 1024.0);
    }
    format!("{:.1} MB", bytes as f64 / MB as f64)
}

/// Font Awesome icon for a report's file type.
#[must_use]
pub fn file_icon(file_type: Option<&str>) -> &'static str {
    let Some(kind) = file_type.map(str::to_lowercase) else {
        return "fa-file";
    };
    if kind.contains("pdf") {
        "fa-file-pdf"
    } else if kind.contains("word") || kind.contains("doc") {
        "fa-file-word"
    } else if kind.contains("excel") || kind.contains("xls") {
        "fa-file-excel"
    } else if kind.contains("image") {
        "fa-file-image"
    } else {
        "fa-file"
    }
}
