use super::*;

/// What a validated form turns into once it is taken for submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// No hosted image yet; nothing is sent.
    MissingImage,
    Create(NewImage),
}

#[derive(Clone, Debug)]
pub struct SubmitOutcome {
    pub notice: Notice,
    /// The image list cache must be dropped.
    pub invalidate: bool,
    pub created: Option<ImageRecord>,
}

impl SubmitOutcome {
    pub fn missing_image() -> Self {
        Self {
            notice: Notice::error(
                "Image not added",
                "An image must be uploaded, and the upload must finish, before submitting.",
            ),
            invalidate: false,
            created: None,
        }
    }
}

impl UploadForm {
    /// Validate and, if valid, turn the form into a submission and reset it.
    ///
    /// On validation failure the form is left untouched so the errors can be shown
    /// next to the entered values.
    pub fn take_submission(&mut self) -> Result<Submission, FieldErrors> {
        let valid = self.validate()?;
        let submission = match self.pending_url.clone() {
            None => Submission::MissingImage,
            Some(url) => Submission::Create(NewImage {
                title: valid.title,
                description: valid.description,
                url,
            }),
        };
        self.reset();
        Ok(submission)
    }
}

/// Map the result of a create request to what the user sees.
pub fn finish_submission(result: Result<ImageRecord>) -> SubmitOutcome {
    match result {
        Ok(created) => SubmitOutcome {
            notice: Notice::success(
                "Image registered",
                "Your image was registered successfully.",
            ),
            invalidate: true,
            created: Some(created),
        },
        Err(err) => {
            tracing::warn!("create image failed: {:#}", err);
            SubmitOutcome {
                notice: Notice::error(
                    "Registration failed",
                    "An error occurred while registering your image.",
                ),
                invalidate: false,
                created: None,
            }
        }
    }
}

/// Validate, then create the record and wait for the result.
pub fn submit(
    form: &mut UploadForm,
    creator: &dyn ImageCreator,
) -> Result<SubmitOutcome, FieldErrors> {
    Ok(match form.take_submission()? {
        Submission::MissingImage => SubmitOutcome::missing_image(),
        Submission::Create(image) => finish_submission(creator.create(&image)),
    })
}
