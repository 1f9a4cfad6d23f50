//! List and create operations on `/api/images`.

use super::http_client::ensure_ok;
use super::*;
use crate::gallery::PageSource;
use crate::upload::ImageCreator;

impl RemoteClient {
    pub fn list_images(&self, after: Option<&str>) -> Result<Page> {
        let mut req = self.client.get(self.url("/api/images"));
        if let Some(after) = after {
            req = req.query(&[("after", after)]);
        }
        tracing::debug!(after = ?after, "list images");

        let resp = req.send().context("list images request")?;
        let page: Page = ensure_ok(resp, "list images", "--api-url")?
            .json()
            .context("parse image page")?;
        tracing::debug!(
            items = page.items.len(),
            next = ?page.cursor,
            "received image page"
        );
        Ok(page)
    }

    pub fn create_image(&self, image: &NewImage) -> Result<ImageRecord> {
        let resp = self
            .client
            .post(self.url("/api/images"))
            .json(image)
            .send()
            .context("create image request")?;
        let created: ImageRecord = ensure_ok(resp, "create image", "--api-url")?
            .json()
            .context("parse created image")?;
        tracing::info!(id = %created.id, title = %created.title, "image created");
        Ok(created)
    }
}

impl PageSource for RemoteClient {
    fn fetch_page(&self, after: Option<&str>) -> Result<Page> {
        self.list_images(after)
    }
}

impl ImageCreator for RemoteClient {
    fn create(&self, image: &NewImage) -> Result<ImageRecord> {
        self.create_image(image)
    }
}
