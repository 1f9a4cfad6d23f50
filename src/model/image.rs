use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub String);

impl ImageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One uploaded image as the API describes it.
///
/// Records are assigned their id and timestamp by the server and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub title: String,
    pub description: String,
    pub url: String,

    /// Creation time, milliseconds since the Unix epoch.
    pub ts: i64,
}

impl ImageRecord {
    pub fn created_at(&self) -> Option<time::OffsetDateTime> {
        let nanos = i128::from(self.ts).checked_mul(1_000_000)?;
        time::OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
    }
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// One list response. `cursor == None` means there is nothing after this page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "data")]
    pub items: Vec<ImageRecord>,

    #[serde(rename = "after", default)]
    pub cursor: Option<String>,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }
}

#[cfg(test)]
#[path = "../tests/model/image_tests.rs"]
mod tests;
