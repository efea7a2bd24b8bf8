//! Gallery projection: the flattened photo wall.

use serde::Serialize;

use crate::entry::Entry;

/// One photo in the gallery, paired with the entry it belongs to (the
/// lightbox shows the entry title over the image).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GalleryPhoto<'a> {
    /// Photo URL
    pub url: &'a str,
    /// The owning entry
    pub entry: &'a Entry,
}

/// Flatten every entry's photos into a single ordered sequence,
/// preserving entry order, then within-entry photo order. Pure read.
pub fn gallery_photos(entries: &[Entry]) -> Vec<GalleryPhoto<'_>> {
    entries
        .iter()
        .flat_map(|entry| {
            entry
                .photos
                .iter()
                .map(move |url| GalleryPhoto { url, entry })
        })
        .collect()
}
