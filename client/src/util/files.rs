//! Browser file-input helpers for image uploads.
//!
//! DESIGN
//! ======
//! Browser `File` handles never leave hydrate-only code. Pages keep them in
//! local storage values and hand `ImageDraft` descriptions to validation and
//! rendering.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::util::validation::{ImageDraft, MAX_IMAGES, images_fit};

/// Keep the image files of a pick, given as `(file, mime)` pairs.
///
/// # Errors
///
/// Refuses the whole pick when it would push the listing past
/// `MAX_IMAGES`.
pub fn admit_images<T>(existing: usize, picked: Vec<(T, String)>) -> Result<Vec<T>, String> {
    let images: Vec<T> = picked
        .into_iter()
        .filter(|(_, mime)| mime.starts_with("image/"))
        .map(|(file, _)| file)
        .collect();
    if images_fit(existing, images.len()) {
        Ok(images)
    } else {
        Err(format!("You can upload at most {MAX_IMAGES} images."))
    }
}

/// Files chosen in the file input that fired `ev`. The input is reset so the
/// same file can be picked again.
#[cfg(feature = "hydrate")]
pub fn picked_files(ev: &web_sys::Event) -> Vec<web_sys::File> {
    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let files = (0..list.length()).filter_map(|i| list.item(i)).collect();
    input.set_value("");
    files
}

/// Describe `file` with an object URL for its thumbnail.
#[cfg(feature = "hydrate")]
pub fn draft_for(file: &web_sys::File) -> ImageDraft {
    let preview_url = web_sys::Url::create_object_url_with_blob(file).unwrap_or_default();
    ImageDraft { name: file.name(), mime: file.type_(), preview_url }
}

/// Object URLs held by `drafts` that still need revoking.
pub fn preview_urls(drafts: &[ImageDraft]) -> Vec<&str> {
    drafts
        .iter()
        .map(|draft| draft.preview_url.as_str())
        .filter(|url| !url.is_empty())
        .collect()
}

/// Release the object URLs created by `draft_for`.
#[cfg(feature = "hydrate")]
pub fn release_previews(drafts: &[ImageDraft]) {
    for url in preview_urls(drafts) {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
