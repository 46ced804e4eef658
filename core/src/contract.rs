//! Class names, attributes and field names shared with the store edit template.

pub const GALLERY_SELECTOR: &str = ".gallery-preview";
pub const REMOVE_CLASS: &str = "remove-image";
pub const ITEM_CLASS: &str = "gallery-item";
pub const FILENAME_ATTR: &str = "data-filename";
pub const FILE_INPUT_ID: &str = "gallery_images";

/// Hidden field appended to the form once per removed image. The backend reads it as a list.
pub const REMOVED_FIELD: &str = "removed_gallery_images";

pub const PREVIEW_CLASSES: &[&str] = &["gallery-preview", "upload-preview"];
pub const COUNT_CLASS: &str = "upload-count";
pub const PREVIEW_ALT: &str = "Preview";

pub const FADE_MS: u32 = 300;
pub const FADE_MS_MAX: u32 = 10_000;

pub const IMAGE_MIME_PREFIX: &str = "image/";
