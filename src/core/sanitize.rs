// src/core/sanitize.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{DRIVE_HOST, DRIVE_THUMBNAIL_WIDTH};

static DRIVE_FILE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/d/(.*?)(?:/|$)").expect("static regex")
});

/// Drive share link (`…/file/d/<id>/view`) → direct thumbnail URL.
/// Anything else comes back unchanged.
pub fn drive_thumbnail_url(link: &str) -> String {
    if !link.contains(DRIVE_HOST) {
        return s!(link);
    }
    match DRIVE_FILE_ID.captures(link).and_then(|c| c.get(1)) {
        Some(id) if !id.as_str().is_empty() => format!(
            "https://{}/thumbnail?id={}&sz={}",
            DRIVE_HOST,
            id.as_str(),
            DRIVE_THUMBNAIL_WIDTH
        ),
        // An empty id (`/d//`) keeps the link as-is instead of producing
        // `thumbnail?id=&sz=...`.
        _ => s!(link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_share_links_become_thumbnails() {
        assert_eq!(
            drive_thumbnail_url("https://drive.google.com/file/d/1AbC-xyz_9/view?usp=sharing"),
            "https://drive.google.com/thumbnail?id=1AbC-xyz_9&sz=w1000"
        );
        assert_eq!(
            drive_thumbnail_url("https://drive.google.com/file/d/1AbC"),
            "https://drive.google.com/thumbnail?id=1AbC&sz=w1000"
        );
    }

    #[test]
    fn other_links_pass_through() {
        assert_eq!(drive_thumbnail_url("https://example.org/x.png"), "https://example.org/x.png");
        assert_eq!(
            drive_thumbnail_url("https://drive.google.com/open?id=abc"),
            "https://drive.google.com/open?id=abc"
        );
    }

    #[test]
    fn drive_link_with_empty_id_is_kept() {
        assert_eq!(
            drive_thumbnail_url("https://drive.google.com/file/d//view"),
            "https://drive.google.com/file/d//view"
        );
    }
}
