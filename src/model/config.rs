use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Base URL of the image API (`/api/images` is appended).
    pub api_url: String,

    /// Image hosting endpoint that accepts a multipart `image` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_key: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upload_url: None,
            upload_key: None,
        }
    }
}

impl GalleryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: GalleryConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg.normalized())
    }

    /// Apply explicit overrides on top of this config. `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        upload_url: Option<String>,
        upload_key: Option<String>,
    ) -> Self {
        if let Some(u) = api_url {
            self.api_url = u;
        }
        if upload_url.is_some() {
            self.upload_url = upload_url;
        }
        if upload_key.is_some() {
            self.upload_key = upload_key;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.api_url = trim_base(&self.api_url);
        self.upload_url = self.upload_url.as_deref().map(trim_base);
        self
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
