//! Lightbox state for viewing one image at full size.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    is_open: bool,
    current_url: String,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, url: &str) {
        self.current_url = url.to_string();
        self.is_open = true;
    }

    /// Close without forgetting the URL.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Open again on whatever was shown last. Does nothing if nothing was ever shown.
    pub fn reopen(&mut self) -> bool {
        if self.current_url.is_empty() {
            return false;
        }
        self.is_open = true;
        true
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }
}

#[cfg(test)]
#[path = "tests/viewer/lightbox_tests.rs"]
mod tests;
