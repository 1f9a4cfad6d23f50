use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct ListQuery {
    #[serde(default)]
    after: Option<String>,
}

pub(super) async fn list_images(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Page>, Response> {
    let images = state.images.read().await;
    let page = page_after(&images, q.after.as_deref(), state.page_size).map_err(bad_request)?;
    Ok(Json(page))
}

pub(super) async fn create_image(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewImage>,
) -> Result<(StatusCode, Json<ImageRecord>), Response> {
    check_new_image(&new).map_err(bad_request)?;

    let record = ImageRecord {
        id: generate_image_id().map_err(internal_error)?,
        title: new.title,
        description: new.description,
        url: new.url,
        ts: now_ms(),
    };
    tracing::info!(id = %record.id, "created image");

    let mut images = state.images.write().await;
    images.insert(0, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

pub(super) async fn host_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, Response> {
    let mut stored: Option<StoredFile> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(anyhow::anyhow!("read multipart: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(anyhow::anyhow!("read image field: {}", e)))?;
        stored = Some(StoredFile {
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let Some(file) = stored else {
        return Err(bad_request(anyhow::anyhow!("missing image field")));
    };
    if file.bytes.is_empty() {
        return Err(bad_request(anyhow::anyhow!("empty image")));
    }

    let hash = blake3::hash(&file.bytes).to_hex().to_string();
    let url = format!("{}/files/{}", state.base_url, hash);
    tracing::info!(%hash, size = file.bytes.len(), "hosted file");
    state.files.write().await.insert(hash, file);

    Ok(Json(serde_json::json!({"data": {"url": url}})))
}

pub(super) async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Result<Response, Response> {
    let files = state.files.read().await;
    let file = files.get(&hash).ok_or_else(not_found)?;
    Ok((
        [(header::CONTENT_TYPE, file.content_type.clone())],
        file.bytes.clone(),
    )
        .into_response())
}
