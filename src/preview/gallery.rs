//! State for the full-screen image preview overlay.
//!
//! The overlay shows either a single image (profile pictures, upload
//! previews) or a cyclic gallery opened from a grid of thumbnails. An empty
//! item list means the overlay is closed.

use tracing::debug;

/// One displayable image in the preview overlay.
///
/// Identity is positional: items are addressed by their index in the owning
/// gallery and carry no id of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub url: String,
    pub name: Option<String>,
}

impl PreviewItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
        }
    }

    pub fn named(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: Some(name.into()),
        }
    }

    /// Trims the url and name, dropping the item when the url is blank and
    /// the name when it is blank.
    fn normalized(&self) -> Option<PreviewItem> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        Some(PreviewItem {
            url: url.to_owned(),
            name,
        })
    }
}

/// Ordered list of images under preview plus the active index.
///
/// Every operation is total: blank urls and out-of-range indices are
/// absorbed by filtering and wraparound normalization instead of being
/// reported as errors, since the item lists come straight from API
/// responses and cannot be assumed clean.
#[derive(Debug, Default)]
pub struct PreviewGallery {
    items: Vec<PreviewItem>,
    current_index: usize,
}

impl PreviewGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Previews exactly one image, discarding any prior gallery.
    ///
    /// A url that is empty after trimming leaves the current state
    /// untouched. An empty name counts as absent.
    pub fn open(&mut self, url: &str, name: Option<&str>) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        let name = name.filter(|name| !name.is_empty()).map(str::to_owned);
        self.items = vec![PreviewItem {
            url: url.to_owned(),
            name,
        }];
        self.current_index = 0;
    }

    /// Opens a multi-image gallery at `start_index`.
    ///
    /// Candidates with a blank url are dropped; when nothing survives the
    /// filter this behaves exactly like [`close`](Self::close). The start
    /// index may be any integer and is wrapped into range, so negative and
    /// oversized values both land on a valid item.
    pub fn open_gallery(&mut self, items: &[PreviewItem], start_index: i64) {
        let normalized: Vec<PreviewItem> =
            items.iter().filter_map(PreviewItem::normalized).collect();

        if normalized.is_empty() {
            self.close();
            return;
        }

        debug!(
            "preview gallery opened: {} of {} items kept, start {}",
            normalized.len(),
            items.len(),
            start_index
        );
        self.current_index = Self::normalize_index(start_index, normalized.len());
        self.items = normalized;
    }

    /// Steps to the previous image, wrapping at the front.
    /// Does nothing for a 0- or 1-item gallery.
    pub fn previous(&mut self) {
        let count = self.items.len();
        if count <= 1 {
            return;
        }
        self.current_index = (self.current_index + count - 1) % count;
    }

    /// Steps to the next image, wrapping at the back.
    /// Does nothing for a 0- or 1-item gallery.
    pub fn next(&mut self) {
        let count = self.items.len();
        if count <= 1 {
            return;
        }
        self.current_index = (self.current_index + 1) % count;
    }

    /// Closes the overlay.
    pub fn close(&mut self) {
        self.items.clear();
        self.current_index = 0;
    }

    /// Url of the active image, or `None` when the overlay is closed.
    pub fn image_url(&self) -> Option<&str> {
        self.current_item().map(|item| item.url.as_str())
    }

    /// Display name of the active image, if it has one.
    pub fn image_name(&self) -> Option<&str> {
        self.current_item()
            .and_then(|item| item.name.as_deref())
    }

    pub fn current_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.current_index
        }
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn has_multiple(&self) -> bool {
        self.items.len() > 1
    }

    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }

    fn current_item(&self) -> Option<&PreviewItem> {
        self.items.get(self.current_index)
    }

    /// Maps any integer onto `[0, len)` with true floor-modulo, so negative
    /// inputs wrap backwards from the end. Defined as 0 for an empty list.
    fn normalize_index(index: i64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        index.rem_euclid(len as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_gallery(urls: &[&str]) -> PreviewGallery {
        let items: Vec<PreviewItem> = urls.iter().map(|url| PreviewItem::new(*url)).collect();
        let mut gallery = PreviewGallery::new();
        gallery.open_gallery(&items, 0);
        gallery
    }

    #[test]
    fn test_blank_open_is_noop() {
        let mut gallery = make_gallery(&["https://x/a.png", "https://x/b.png"]);
        gallery.next();

        gallery.open("", None);
        gallery.open("   ", Some("ignored"));

        assert_eq!(gallery.total_count(), 2);
        assert_eq!(gallery.current_index(), 1);
        assert_eq!(gallery.image_url(), Some("https://x/b.png"));
    }

    #[test]
    fn test_open_replaces_state() {
        let mut gallery = make_gallery(&["https://x/old.png", "https://x/older.png"]);

        gallery.open("https://x/a.png", Some("A"));

        assert_eq!(gallery.total_count(), 1);
        assert_eq!(gallery.image_url(), Some("https://x/a.png"));
        assert_eq!(gallery.image_name(), Some("A"));
        assert!(!gallery.has_multiple());
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_open_trims_url_and_drops_blank_name() {
        let mut gallery = PreviewGallery::new();
        gallery.open("  https://x/a.png  ", Some(""));

        assert_eq!(gallery.image_url(), Some("https://x/a.png"));
        assert_eq!(gallery.image_name(), None);
    }

    #[test]
    fn test_open_gallery_filters_and_wraps_start_index() {
        let mut gallery = PreviewGallery::new();
        gallery.open_gallery(
            &[
                PreviewItem::new(" "),
                PreviewItem::named("https://x/b.png", " "),
                PreviewItem::new("https://x/c.png"),
            ],
            5,
        );

        assert_eq!(gallery.total_count(), 2);
        // 5 mod 2 == 1
        assert_eq!(gallery.current_index(), 1);
        assert_eq!(gallery.image_url(), Some("https://x/c.png"));
        assert_eq!(gallery.image_name(), None);
    }

    #[test]
    fn test_open_gallery_negative_start_index_wraps() {
        let items = [
            PreviewItem::new("https://x/a.png"),
            PreviewItem::new("https://x/b.png"),
            PreviewItem::new("https://x/c.png"),
        ];
        let mut gallery = PreviewGallery::new();
        gallery.open_gallery(&items, -1);

        assert_eq!(gallery.current_index(), 2);
        assert_eq!(gallery.image_url(), Some("https://x/c.png"));
    }

    #[test]
    fn test_all_blank_gallery_closes() {
        let mut gallery = make_gallery(&["https://x/a.png"]);
        gallery.open_gallery(&[PreviewItem::new(""), PreviewItem::new("  ")], 0);

        assert_eq!(gallery.total_count(), 0);
        assert_eq!(gallery.image_url(), None);
        assert_eq!(gallery.image_name(), None);
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_cyclic_navigation() {
        let mut gallery = make_gallery(&["https://x/a.png", "https://x/b.png", "https://x/c.png"]);

        gallery.previous();
        assert_eq!(gallery.current_index(), 2, "previous from 0 wraps to end");

        gallery.next();
        assert_eq!(gallery.current_index(), 0, "next from end wraps to 0");
    }

    #[test]
    fn test_navigation_noop_on_single_image() {
        let mut gallery = PreviewGallery::new();
        gallery.open("https://x/a.png", None);

        gallery.previous();
        assert_eq!(gallery.current_index(), 0);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_navigation_noop_when_closed() {
        let mut gallery = PreviewGallery::new();
        gallery.previous();
        gallery.next();

        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.image_url(), None);
    }

    #[test]
    fn test_gallery_preserves_order_and_duplicates() {
        let items = [
            PreviewItem::new("https://x/a.png"),
            PreviewItem::new("https://x/a.png"),
            PreviewItem::new("https://x/b.png"),
        ];
        let mut gallery = PreviewGallery::new();
        gallery.open_gallery(&items, 0);

        assert_eq!(gallery.total_count(), 3, "duplicates are kept");
        gallery.next();
        assert_eq!(gallery.image_url(), Some("https://x/a.png"));
        gallery.next();
        assert_eq!(gallery.image_url(), Some("https://x/b.png"));
    }

    #[test]
    fn test_close_resets_index() {
        let mut gallery = make_gallery(&["https://x/a.png", "https://x/b.png"]);
        gallery.next();
        gallery.close();

        assert_eq!(gallery.total_count(), 0);
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.has_multiple());
    }
}
