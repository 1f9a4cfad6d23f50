//! DTOs for responses that are not part of the gallery model.

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Response of an imgbb-style hosting endpoint; only `data.url` is read.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HostedImageResponse {
    pub data: HostedImage,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HostedImage {
    pub url: String,
}
