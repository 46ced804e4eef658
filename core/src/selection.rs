use crate::contract::IMAGE_MIME_PREFIX;

/// The only content check performed before previewing: the declared MIME type.
pub fn is_previewable(mime: &str) -> bool {
    mime.starts_with(IMAGE_MIME_PREFIX)
}

/// Count label text for a selection, `None` when nothing was selected.
pub fn count_label(total: usize) -> Option<String> {
    match total {
        0 => None,
        1 => Some("1 image selected".to_string()),
        n => Some(format!("{n} images selected")),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub total: usize,
    /// Positions of previewable files in selection order.
    pub previewable: Vec<usize>,
}

impl SelectionSummary {
    pub fn from_mimes<'a, I>(mimes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut summary = Self::default();
        for (index, mime) in mimes.into_iter().enumerate() {
            summary.total += 1;
            if is_previewable(mime) {
                summary.previewable.push(index);
            }
        }
        summary
    }

    pub fn skipped(&self) -> usize {
        self.total - self.previewable.len()
    }

    pub fn label(&self) -> Option<String> {
        count_label(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_singular_for_one() {
        assert_eq!(count_label(1).as_deref(), Some("1 image selected"));
    }

    #[test]
    fn label_uses_plural_above_one() {
        assert_eq!(count_label(2).as_deref(), Some("2 images selected"));
        assert_eq!(count_label(17).as_deref(), Some("17 images selected"));
    }

    #[test]
    fn label_absent_for_empty_selection() {
        assert_eq!(count_label(0), None);
    }

    #[test]
    fn previewable_is_a_prefix_check() {
        assert!(is_previewable("image/png"));
        assert!(is_previewable("image/svg+xml"));
        assert!(!is_previewable("text/plain"));
        assert!(!is_previewable(""));
        assert!(!is_previewable("Image/png"));
        assert!(!is_previewable("application/image/png"));
    }
}
