use anyhow::{Context, Result};

use crate::model::{GalleryConfig, ImageRecord, NewImage, Page};

mod http_client;

mod types;
pub use self::types::*;
mod hosting;
pub use self::hosting::HostingClient;
mod images;

/// Client for the image API (`/api/images`).
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("gallery")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.api_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
