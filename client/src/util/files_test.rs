use super::*;

fn pick(entries: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    entries.iter().map(|(name, mime)| (*name, (*mime).to_owned())).collect()
}

#[test]
fn admit_images_drops_non_image_files() {
    let picked = pick(&[("a.jpg", "image/jpeg"), ("notes.pdf", "application/pdf"), ("b.png", "image/png")]);
    assert_eq!(admit_images(0, picked), Ok(vec!["a.jpg", "b.png"]));
}

#[test]
fn admit_images_refuses_overflowing_pick() {
    let picked = pick(&[("a.jpg", "image/jpeg"), ("b.jpg", "image/jpeg")]);
    assert_eq!(admit_images(9, picked), Err("You can upload at most 10 images.".to_owned()));
}

#[test]
fn admit_images_counts_only_images_toward_limit() {
    let picked = pick(&[("a.jpg", "image/jpeg"), ("c.txt", "text/plain")]);
    assert_eq!(admit_images(9, picked), Ok(vec!["a.jpg"]));
}

#[test]
fn preview_urls_skip_drafts_without_object_url() {
    let draft = |url: &str| ImageDraft { name: "p.jpg".to_owned(), mime: "image/jpeg".to_owned(), preview_url: url.to_owned() };
    let drafts = [draft("blob:a"), draft(""), draft("blob:b")];
    assert_eq!(preview_urls(&drafts), ["blob:a", "blob:b"]);
    assert!(preview_urls(&[]).is_empty());
}
