mod config;
mod image;

pub use self::config::{DEFAULT_API_URL, GalleryConfig};
pub use self::image::{ImageId, ImageRecord, NewImage, Page};
