use serde::Deserialize;

use crate::contract;

/// DOM contract names and timings. Every field falls back to the template defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub gallery_selector: String,
    pub remove_class: String,
    pub item_class: String,
    pub filename_attr: String,
    pub file_input_id: String,
    pub removed_field: String,
    pub preview_classes: Vec<String>,
    pub count_class: String,
    pub preview_alt: String,
    pub fade_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            gallery_selector: contract::GALLERY_SELECTOR.to_string(),
            remove_class: contract::REMOVE_CLASS.to_string(),
            item_class: contract::ITEM_CLASS.to_string(),
            filename_attr: contract::FILENAME_ATTR.to_string(),
            file_input_id: contract::FILE_INPUT_ID.to_string(),
            removed_field: contract::REMOVED_FIELD.to_string(),
            preview_classes: contract::PREVIEW_CLASSES
                .iter()
                .map(|class| class.to_string())
                .collect(),
            count_class: contract::COUNT_CLASS.to_string(),
            preview_alt: contract::PREVIEW_ALT.to_string(),
            fade_ms: contract::FADE_MS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("fade delay {found}ms exceeds {max}ms")]
    FadeTooLong { found: u32, max: u32 },
}

impl GalleryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("gallery_selector", &self.gallery_selector),
            ("remove_class", &self.remove_class),
            ("item_class", &self.item_class),
            ("filename_attr", &self.filename_attr),
            ("file_input_id", &self.file_input_id),
            ("removed_field", &self.removed_field),
            ("count_class", &self.count_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }
        if self.preview_classes.is_empty()
            || self.preview_classes.iter().any(|class| class.trim().is_empty())
        {
            return Err(ConfigError::Empty("preview_classes"));
        }
        if self.fade_ms > contract::FADE_MS_MAX {
            return Err(ConfigError::FadeTooLong {
                found: self.fade_ms,
                max: contract::FADE_MS_MAX,
            });
        }
        Ok(())
    }

    /// Selector matching the preview container this crate creates.
    pub fn preview_selector(&self) -> String {
        self.preview_classes
            .iter()
            .map(|class| format!(".{class}"))
            .collect()
    }

    /// Selector for the count label placed before the preview container.
    pub fn count_selector(&self) -> String {
        format!(".{}", self.count_class)
    }
}
