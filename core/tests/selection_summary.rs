use store_gallery_core::SelectionSummary;

#[test]
fn mixed_selection_counts_every_file_but_previews_images_only() {
    let summary = SelectionSummary::from_mimes(["image/png", "text/plain"]);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.previewable, vec![0]);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.label().as_deref(), Some("2 images selected"));
}

#[test]
fn single_image_uses_singular_label() {
    let summary = SelectionSummary::from_mimes(["image/jpeg"]);
    assert_eq!(summary.previewable, vec![0]);
    assert_eq!(summary.label().as_deref(), Some("1 image selected"));
}

#[test]
fn empty_selection_has_no_label() {
    let summary = SelectionSummary::from_mimes(std::iter::empty::<&str>());
    assert_eq!(summary, SelectionSummary::default());
    assert_eq!(summary.label(), None);
}

#[test]
fn files_without_declared_type_are_skipped() {
    let summary = SelectionSummary::from_mimes(["", "image/gif", "application/pdf", "image/webp"]);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.previewable, vec![1, 3]);
}
