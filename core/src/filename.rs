use std::fmt;

/// Filename of an already persisted gallery image, exactly as carried by `data-filename`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GalleryFilename(String);

impl GalleryFilename {
    /// Keeps the attribute value verbatim; the backend matches it against what it stored.
    pub fn parse(value: &str) -> Result<Self, FilenameError> {
        if value.is_empty() {
            return Err(FilenameError::Empty);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GalleryFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for GalleryFilename {
    type Err = FilenameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl AsRef<str> for GalleryFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("filename is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_value_verbatim() {
        let name = GalleryFilename::parse(" x.jpg ").expect("filename");
        assert_eq!(name.as_str(), " x.jpg ");
        assert_eq!(name.to_string(), " x.jpg ");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(GalleryFilename::parse(""), Err(FilenameError::Empty));
    }

    #[test]
    fn parse_accepts_subpaths() {
        let name: GalleryFilename = "store_12/gallery_a.jpg".parse().expect("filename");
        assert_eq!(name.as_ref(), "store_12/gallery_a.jpg");
    }

    #[test]
    fn parse_keeps_inner_dots_and_spaces() {
        let name: GalleryFilename = "store 12.v2.webp".parse().expect("filename");
        assert_eq!(name.as_ref(), "store 12.v2.webp");
    }
}
