//! Upload form: file selection and hosting, validation, and record creation.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;

use crate::model::{ImageRecord, NewImage};
use crate::notice::Notice;

mod file;
pub use self::file::{FileSelection, mime_for_path};

mod validate;
pub use self::validate::{
    ACCEPTED_MIME_TYPES, DESCRIPTION_MAX, Field, FieldError, FieldErrors, MAX_FILE_BYTES,
    TITLE_MAX, TITLE_MIN, ValidUpload, validate, validate_image,
};

mod submit;
pub use self::submit::{Submission, SubmitOutcome, finish_submission, submit};

/// Stores image bytes somewhere public and returns the URL.
pub trait ImageHost {
    fn host(&self, file: &FileSelection) -> Result<String>;
}

/// Creates the image record through the API.
pub trait ImageCreator {
    fn create(&self, image: &NewImage) -> Result<ImageRecord>;
}

/// Identifies one hosting upload so a late result for a replaced file is ignored.
///
/// Tickets are unique across forms, so a result for a file picked in a discarded
/// form never matches a selection in a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostTicket(u64);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

impl HostTicket {
    fn next() -> Self {
        HostTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    file: Option<FileSelection>,
    pending_url: Option<String>,
    ticket: Option<HostTicket>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&FileSelection> {
        self.file.as_ref()
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.pending_url.as_deref()
    }

    /// Replace the selected file. Any previously hosted URL is discarded.
    ///
    /// Returns a ticket for hosting the new file, or the image field error when the file
    /// would be rejected anyway.
    pub fn select_file(&mut self, file: FileSelection) -> Result<HostTicket, FieldError> {
        let ticket = HostTicket::next();
        self.ticket = Some(ticket);
        self.pending_url = None;
        let checked = validate_image(Some(&file));
        self.file = Some(file);
        checked.map(|()| ticket)
    }

    /// Drop the selected file and any hosted URL. Hosting still in flight is ignored.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.pending_url = None;
        self.ticket = None;
    }

    /// True while `ticket` belongs to the file currently selected in this form.
    pub fn is_current(&self, ticket: HostTicket) -> bool {
        self.file.is_some() && self.ticket == Some(ticket)
    }

    /// Record the hosted URL for `ticket`. Returns false if the file was replaced meanwhile.
    pub fn finish_hosting(&mut self, ticket: HostTicket, url: String) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, current = ?self.ticket, "stale hosting result");
            return false;
        }
        self.pending_url = Some(url);
        true
    }

    /// Select a file and host it inline.
    pub fn select_and_host(&mut self, file: FileSelection, host: &dyn ImageHost) -> Result<()> {
        let ticket = self.select_file(file)?;
        let Some(selected) = self.file.as_ref() else {
            anyhow::bail!("no file selected");
        };
        let url = host.host(selected)?;
        self.finish_hosting(ticket, url);
        Ok(())
    }

    pub fn validate(&self) -> Result<ValidUpload, FieldErrors> {
        validate(&self.title, &self.description, self.file.as_ref())
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.clear_file();
    }
}

#[cfg(test)]
#[path = "tests/upload/form_tests.rs"]
mod tests;
