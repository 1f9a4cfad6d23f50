//! Upload of raw image bytes to the hosting endpoint.

use super::http_client::ensure_ok;
use super::*;
use crate::upload::{FileSelection, ImageHost};

pub struct HostingClient {
    upload_url: String,
    key: Option<String>,
    client: reqwest::blocking::Client,
}

impl HostingClient {
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        let Some(upload_url) = config.upload_url.clone() else {
            anyhow::bail!(
                "no image hosting endpoint configured (set --upload-url or GALLERY_UPLOAD_URL)"
            );
        };
        let client = reqwest::blocking::Client::builder()
            .user_agent("gallery")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            upload_url,
            key: config.upload_key.clone(),
            client,
        })
    }
}

impl ImageHost for HostingClient {
    fn host(&self, file: &FileSelection) -> Result<String> {
        let part = reqwest::blocking::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .context("build image part")?;
        let form = reqwest::blocking::multipart::Form::new().part("image", part);

        let mut req = self.client.post(&self.upload_url).multipart(form);
        if let Some(key) = &self.key {
            req = req.query(&[("key", key.as_str())]);
        }
        tracing::debug!(name = %file.name, size = file.size, "host image");

        let resp = req.send().context("host image request")?;
        let hosted: HostedImageResponse = ensure_ok(resp, "host image", "--upload-url")?
            .json()
            .context("parse hosting response")?;
        tracing::info!(url = %hosted.data.url, "image hosted");
        Ok(hosted.data.url)
    }
}
