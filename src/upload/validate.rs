use super::FileSelection;

pub const TITLE_MIN: usize = 2;
pub const TITLE_MAX: usize = 20;
pub const DESCRIPTION_MAX: usize = 65;
pub const MAX_FILE_BYTES: u64 = 10_000_000;
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/gif", "image/png"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Image,
    Title,
    Description,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("File is required")]
    ImageRequired,
    #[error("Only PNG, JPEG and GIF files are accepted")]
    ImageType,
    #[error("File must be smaller than 10MB")]
    ImageTooLarge,
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at least {} characters", TITLE_MIN)]
    TitleTooShort,
    #[error("Title must be at most {} characters", TITLE_MAX)]
    TitleTooLong,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be at most {} characters", DESCRIPTION_MAX)]
    DescriptionTooLong,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::ImageRequired | FieldError::ImageType | FieldError::ImageTooLarge => {
                Field::Image
            }
            FieldError::TitleRequired | FieldError::TitleTooShort | FieldError::TitleTooLong => {
                Field::Title
            }
            FieldError::DescriptionRequired | FieldError::DescriptionTooLong => {
                Field::Description
            }
        }
    }
}

/// First failing rule per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub image: Option<FieldError>,
    pub title: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.title.is_none() && self.description.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Image => self.image.as_ref(),
            Field::Title => self.title.as_ref(),
            Field::Description => self.description.as_ref(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        [&self.image, &self.title, &self.description]
            .into_iter()
            .flatten()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msgs: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        f.write_str(&msgs.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Text fields that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidUpload {
    pub title: String,
    pub description: String,
}

pub fn validate(
    title: &str,
    description: &str,
    file: Option<&FileSelection>,
) -> Result<ValidUpload, FieldErrors> {
    let errors = FieldErrors {
        image: validate_image(file).err(),
        title: validate_title(title).err(),
        description: validate_description(description).err(),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidUpload {
        title: title.to_string(),
        description: description.to_string(),
    })
}

pub fn validate_image(file: Option<&FileSelection>) -> Result<(), FieldError> {
    let Some(file) = file else {
        return Err(FieldError::ImageRequired);
    };
    if !ACCEPTED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Err(FieldError::ImageType);
    }
    if file.size > MAX_FILE_BYTES {
        return Err(FieldError::ImageTooLarge);
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), FieldError> {
    let n = title.chars().count();
    if n == 0 {
        Err(FieldError::TitleRequired)
    } else if n < TITLE_MIN {
        Err(FieldError::TitleTooShort)
    } else if n > TITLE_MAX {
        Err(FieldError::TitleTooLong)
    } else {
        Ok(())
    }
}

fn validate_description(description: &str) -> Result<(), FieldError> {
    let n = description.chars().count();
    if n == 0 {
        Err(FieldError::DescriptionRequired)
    } else if n > DESCRIPTION_MAX {
        Err(FieldError::DescriptionTooLong)
    } else {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/upload/validate_tests.rs"]
mod tests;
