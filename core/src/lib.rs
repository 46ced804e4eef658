pub mod config;
pub mod contract;
pub mod filename;
pub mod selection;

pub use config::{ConfigError, GalleryConfig};
pub use filename::{FilenameError, GalleryFilename};
pub use selection::{count_label, is_previewable, SelectionSummary};
