//! Cursor-paginated image feed with a read cache that uploads invalidate.

use anyhow::Result;

use crate::model::{ImageRecord, Page};

/// Anything that can produce one page of the image list.
pub trait PageSource {
    fn fetch_page(&self, after: Option<&str>) -> Result<Page>;
}

/// A fetch handed out by [`GalleryFeed::begin_next`].
///
/// `after` is the cache key: `None` for the first page, otherwise the cursor of the
/// previous page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub after: Option<String>,
    generation: u64,
}

impl PageRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    /// Nothing fetched yet.
    Loading,
    /// A page fetch failed; the gallery shows an error instead of items.
    Error,
    Ready,
}

/// What happened to a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Appended,
    /// The same cursor was already cached.
    Duplicate,
    /// The feed was invalidated after the request was issued.
    Stale,
    Failed,
}

#[derive(Debug)]
struct CachedPage {
    after: Option<String>,
    page: Page,
}

#[derive(Debug, Default)]
pub struct GalleryFeed {
    pages: Vec<CachedPage>,
    in_flight: Option<PageRequest>,
    error: Option<String>,
    generation: u64,
}

impl GalleryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FeedStatus {
        if self.error.is_some() {
            FeedStatus::Error
        } else if self.pages.is_empty() {
            FeedStatus::Loading
        } else {
            FeedStatus::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status() == FeedStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a page is being fetched on top of already loaded pages.
    pub fn is_fetching_next(&self) -> bool {
        self.in_flight.is_some() && !self.pages.is_empty()
    }

    pub fn in_flight(&self) -> Option<&PageRequest> {
        self.in_flight.as_ref()
    }

    pub fn has_more(&self) -> bool {
        if self.error.is_some() {
            return false;
        }
        match self.pages.last() {
            Some(last) => last.page.has_next(),
            None => true,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All fetched items in fetch order.
    pub fn items(&self) -> impl Iterator<Item = &ImageRecord> {
        self.pages.iter().flat_map(|p| p.page.items.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.page.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<&ImageRecord> {
        self.items().nth(idx)
    }

    fn next_key(&self) -> Option<String> {
        self.pages.last().and_then(|p| p.page.cursor.clone())
    }

    /// Reserve the next fetch. Returns `None` when a fetch is already in flight, the
    /// list is exhausted, or the feed is in error.
    pub fn begin_next(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_more() {
            return None;
        }
        let req = PageRequest {
            after: self.next_key(),
            generation: self.generation,
        };
        tracing::debug!(after = ?req.after, generation = req.generation, "begin page fetch");
        self.in_flight = Some(req.clone());
        Some(req)
    }

    /// The read path: starts the first fetch when nothing is cached.
    pub fn ensure_loaded(&mut self) -> Option<PageRequest> {
        if self.pages.is_empty() {
            self.begin_next()
        } else {
            None
        }
    }

    pub fn complete(&mut self, req: PageRequest, result: Result<Page>) -> Completion {
        if req.generation != self.generation {
            tracing::debug!(
                after = ?req.after,
                generation = req.generation,
                current = self.generation,
                "dropping stale page"
            );
            return Completion::Stale;
        }
        if self.in_flight.as_ref() == Some(&req) {
            self.in_flight = None;
        }

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(after = ?req.after, "page fetch failed: {:#}", err);
                self.error = Some(format!("{:#}", err));
                return Completion::Failed;
            }
        };

        if self.pages.iter().any(|p| p.after == req.after) {
            return Completion::Duplicate;
        }
        self.pages.push(CachedPage {
            after: req.after,
            page,
        });
        Completion::Appended
    }

    /// Fetch the next page inline. Returns `Ok(false)` when nothing was fetched.
    pub fn fetch_next(&mut self, source: &dyn PageSource) -> Result<bool> {
        let Some(req) = self.begin_next() else {
            return Ok(false);
        };
        let result = source.fetch_page(req.after.as_deref());
        match self.complete(req, result) {
            Completion::Failed => {
                let msg = self.error.clone().unwrap_or_default();
                anyhow::bail!("fetch images: {}", msg)
            }
            c => Ok(c == Completion::Appended),
        }
    }

    /// Drop every cached page; the next read starts again from the first page.
    pub fn invalidate(&mut self) {
        tracing::info!(
            pages = self.pages.len(),
            generation = self.generation,
            "invalidating image cache"
        );
        self.pages.clear();
        self.in_flight = None;
        self.error = None;
        self.generation += 1;
    }
}

#[cfg(test)]
#[path = "tests/gallery/feed_tests.rs"]
mod tests;
