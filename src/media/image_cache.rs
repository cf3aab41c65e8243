// SPDX-License-Identifier: MPL-2.0
//! URL-keyed cache of card images.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used URLs are evicted first
//! - **Count-bounded**: at most [`DEFAULT_MAX_IMAGES`] entries
//! - **Negative caching**: failed downloads stay `Failed` and are not retried
//!   until evicted
//! - **In-flight tracking**: a URL marked `Loading` is not requested twice
//! - **Visibility recency**: the gallery touches the URLs of on-screen cards,
//!   so off-screen images are evicted first

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default maximum number of cached image URLs.
pub const DEFAULT_MAX_IMAGES: usize = 64;

/// State of one image URL.
#[derive(Debug, Clone)]
pub enum ImageEntry {
    /// Download or decode in progress.
    Loading,
    /// Decoded and ready to draw.
    Ready(ImageData),
    /// Download or decode failed; drawn as a placeholder.
    Failed,
}

/// LRU cache for downloaded card images.
pub struct RemoteImageCache {
    cache: LruCache<String, ImageEntry>,
}

impl std::fmt::Debug for RemoteImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}

impl Default for RemoteImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGES)
    }
}

impl RemoteImageCache {
    /// Creates a cache holding up to `capacity` URLs (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Marks a cached URL as most recently used.
    ///
    /// Returns `false` when the URL is neither cached nor in flight.
    pub fn touch(&mut self, url: &str) -> bool {
        self.cache.promote(url)
    }

    /// Returns the entry without touching recency.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&ImageEntry> {
        self.cache.peek(url)
    }

    /// Records that a download has started.
    pub fn mark_loading(&mut self, url: &str) {
        self.cache.put(url.to_string(), ImageEntry::Loading);
    }

    pub fn insert_ready(&mut self, url: String, image: ImageData) {
        self.cache.put(url, ImageEntry::Ready(image));
    }

    pub fn insert_failed(&mut self, url: String) {
        self.cache.put(url, ImageEntry::Failed);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn loading_url_is_tracked() {
        let mut cache = RemoteImageCache::default();
        assert!(!cache.touch("https://cdn.test/a.jpg"));
        cache.mark_loading("https://cdn.test/a.jpg");
        assert!(cache.touch("https://cdn.test/a.jpg"));
        assert!(matches!(
            cache.peek("https://cdn.test/a.jpg"),
            Some(ImageEntry::Loading)
        ));
    }

    #[test]
    fn ready_replaces_loading() {
        let mut cache = RemoteImageCache::default();
        cache.mark_loading("u");
        cache.insert_ready("u".to_string(), pixel());
        assert!(matches!(cache.peek("u"), Some(ImageEntry::Ready(_))));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_cached() {
        let mut cache = RemoteImageCache::default();
        cache.insert_failed("bad".to_string());
        assert!(cache.touch("bad"));
        assert!(matches!(cache.peek("bad"), Some(ImageEntry::Failed)));
    }

    #[test]
    fn touched_url_survives_eviction() {
        let mut cache = RemoteImageCache::new(2);
        cache.insert_ready("a".to_string(), pixel());
        cache.insert_ready("b".to_string(), pixel());
        assert!(cache.touch("a"));
        cache.insert_ready("c".to_string(), pixel());

        assert!(cache.peek("b").is_none());
        assert!(cache.peek("a").is_some());
        assert!(cache.peek("c").is_some());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut cache = RemoteImageCache::new(0);
        cache.mark_loading("a");
        cache.mark_loading("b");
        assert_eq!(cache.len(), 1);
    }
}
