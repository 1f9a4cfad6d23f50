use super::*;

pub(super) struct StoredFile {
    pub(super) content_type: String,
    pub(super) bytes: Vec<u8>,
}

/// Cut one page out of `images` (newest first). The cursor is the id of the last
/// record on the previous page.
pub(super) fn page_after(
    images: &[ImageRecord],
    after: Option<&str>,
    page_size: usize,
) -> Result<Page> {
    let start = match after {
        None => 0,
        Some(cursor) => {
            let pos = images
                .iter()
                .position(|r| r.id.as_str() == cursor)
                .ok_or_else(|| anyhow::anyhow!("unknown cursor {}", cursor))?;
            pos + 1
        }
    };
    let end = (start + page_size).min(images.len());
    let items = images.get(start..end).unwrap_or_default().to_vec();
    let cursor = if end < images.len() {
        items.last().map(|r| r.id.0.clone())
    } else {
        None
    };
    Ok(Page { items, cursor })
}

pub(super) fn check_new_image(new: &NewImage) -> Result<()> {
    if new.title.trim().is_empty() {
        anyhow::bail!("title is required");
    }
    if new.description.trim().is_empty() {
        anyhow::bail!("description is required");
    }
    if new.url.trim().is_empty() {
        anyhow::bail!("url is required");
    }
    Ok(())
}

pub(super) fn generate_image_id() -> Result<ImageId> {
    let mut bytes = [0u8; 12];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(24);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(ImageId(out))
}

pub(super) fn now_ms() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

#[cfg(test)]
#[path = "../../tests/bin/gallery_server/store_tests.rs"]
mod tests;
