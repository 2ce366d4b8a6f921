use super::*;

const PDF: &str = "application/pdf";

#[test]
fn document_within_limits_is_accepted() {
    let file = PickedFile::described("brief.pdf", 2 * MB, PDF);
    assert_eq!(DOCUMENT.check(&file), Ok(()));
}

#[test]
fn document_exactly_at_limit_is_accepted() {
    let file = PickedFile::described("brief.pdf", 10 * MB, PDF);
    assert_eq!(DOCUMENT.check(&file), Ok(()));
}

#[test]
fn oversized_document_reports_size_before_type() {
    let file = PickedFile::described("movie.mp4", 10 * MB + 1, "video/mp4");
    assert_eq!(DOCUMENT.check(&file), Err("File size must be less than 10MB"));
}

#[test]
fn document_type_is_checked() {
    let docx = PickedFile::described(
        "brief.docx",
        MB,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    );
    assert_eq!(DOCUMENT.check(&docx), Ok(()));
    let txt = PickedFile::described("notes.txt", 10, "text/plain");
    assert_eq!(DOCUMENT.check(&txt), Err("Only PDF, DOC, and DOCX files are allowed"));
}

#[test]
fn account_picture_reports_type_before_size() {
    let file = PickedFile::described("huge.bmp", 6 * MB, "image/bmp");
    assert_eq!(ACCOUNT_PICTURE.check(&file), Err("Please select a valid image file (JPEG, PNG, GIF)"));
    let file = PickedFile::described("huge.png", 6 * MB, "image/png");
    assert_eq!(ACCOUNT_PICTURE.check(&file), Err("Image size must be less than 5MB"));
}

#[test]
fn profile_picture_accepts_webp_only_there() {
    let webp = PickedFile::described("me.webp", MB, "image/webp");
    assert_eq!(PROFILE_PICTURE.check(&webp), Ok(()));
    assert!(ACCOUNT_PICTURE.check(&webp).is_err());
}

#[test]
fn format_size_picks_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(5 * MB / 2), "2.5 MB");
}

#[test]
fn file_icon_by_type() {
    assert_eq!(file_icon(Some("application/pdf")), "fa-file-pdf");
    assert_eq!(file_icon(Some("DOCX")), "fa-file-word");
    assert_eq!(file_icon(Some("xls")), "fa-file-excel");
    assert_eq!(file_icon(Some("image/png")), "fa-file-image");
    assert_eq!(file_icon(Some("zip")), "fa-file");
    assert_eq!(file_icon(None), "fa-file");
}
