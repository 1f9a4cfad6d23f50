use super::*;
use crate::upload::{SubmitOutcome, finish_submission};

/// Gallery-screen commands, decoupled from the keys that trigger them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Action {
    Quit,
    Left,
    Right,
    Up,
    Down,
    Open,
    Reopen,
    LoadMore,
    NewUpload,
    Close,
}

impl Action {
    pub(super) fn from_key(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        let a = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Left | KeyCode::Char('h') => Action::Left,
            KeyCode::Right | KeyCode::Char('l') => Action::Right,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Enter => Action::Open,
            KeyCode::Char('r') => Action::Reopen,
            KeyCode::Char('m') => Action::LoadMore,
            KeyCode::Char('n') => Action::NewUpload,
            KeyCode::Esc => Action::Close,
            _ => return None,
        };
        Some(a)
    }
}

impl App {
    pub(super) fn new(can_host: bool) -> Self {
        Self {
            feed: GalleryFeed::new(),
            lightbox: Lightbox::new(),
            selected: 0,
            upload: None,
            can_host,
            notice: None,
            outbox: Vec::new(),
            quit: false,
        }
    }

    pub(super) fn take_jobs(&mut self) -> Vec<Job> {
        std::mem::take(&mut self.outbox)
    }

    pub(super) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    pub(super) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(n, _)| n)
    }

    /// Periodic housekeeping: expire the notice and (re)start the first page fetch.
    pub(super) fn tick(&mut self, now: Instant) {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|(_, at)| now.duration_since(*at) >= NOTICE_TTL);
        if expired {
            self.notice = None;
        }
        if let Some(req) = self.feed.ensure_loaded() {
            self.outbox.push(Job::FetchPage(req));
        }
    }

    pub(super) fn perform(&mut self, action: Action) {
        if self.lightbox.is_open() {
            if matches!(action, Action::Close | Action::Open) {
                self.lightbox.close();
            } else if action == Action::Quit {
                self.quit = true;
            }
            return;
        }

        match action {
            Action::Quit => self.quit = true,
            Action::Close => {}
            Action::Left => self.move_selection(-1),
            Action::Right => self.move_selection(1),
            Action::Up => self.move_selection(-(GRID_COLUMNS as isize)),
            Action::Down => self.move_selection(GRID_COLUMNS as isize),
            Action::Open => self.open_selected(),
            Action::Reopen => {
                self.lightbox.reopen();
            }
            Action::LoadMore => self.load_more(),
            Action::NewUpload => self.open_upload(),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.feed.status() != FeedStatus::Ready || self.feed.is_empty() {
            return;
        }
        let len = self.feed.len();
        let target = self.selected as isize + delta;
        if target >= len as isize {
            // Scrolling past the end asks for the next page.
            self.load_more();
        }
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub(super) fn load_more(&mut self) {
        if let Some(req) = self.feed.begin_next() {
            self.outbox.push(Job::FetchPage(req));
        }
    }

    fn open_selected(&mut self) {
        if let Some(rec) = self.feed.get(self.selected) {
            let url = rec.url.clone();
            self.lightbox.open(&url);
        }
    }

    fn open_upload(&mut self) {
        if !self.can_host {
            self.set_notice(Notice::error(
                "Uploads disabled",
                "No image hosting endpoint is configured (--upload-url).",
            ));
        }
        self.upload = Some(UploadModal::new());
    }

    pub(super) fn close_upload(&mut self) {
        self.upload = None;
    }

    /// Read the path typed into the file field and, if it changed, select and host it.
    pub(super) fn select_file_from_input(&mut self) {
        let can_host = self.can_host;
        let Some(m) = self.upload.as_mut() else {
            return;
        };
        let path = m.inputs[UploadModal::index(Field::Image)].buf.trim().to_string();
        if path.is_empty() {
            if m.selected_path.take().is_some() {
                m.form.clear_file();
                m.hosting = false;
            }
            return;
        }
        if m.selected_path.as_deref() == Some(path.as_str()) {
            return;
        }
        let file = match FileSelection::from_path(std::path::Path::new(&path)) {
            Ok(f) => f,
            Err(err) => {
                // The field no longer names the file held by the form.
                m.form.clear_file();
                m.selected_path = None;
                m.hosting = false;
                m.errors.image = Some(FieldError::ImageRequired);
                self.set_notice(Notice::error("Could not read file", &format!("{:#}", err)));
                return;
            }
        };
        m.selected_path = Some(path);

        match m.form.select_file(file) {
            Ok(ticket) => {
                m.errors.image = None;
                if !can_host {
                    return;
                }
                if let Some(file) = m.form.file().cloned() {
                    m.hosting = true;
                    self.outbox.push(Job::HostImage { ticket, file });
                }
            }
            Err(fe) => {
                m.hosting = false;
                m.errors.image = Some(fe);
            }
        }
    }

    pub(super) fn submit_upload(&mut self) {
        self.select_file_from_input();
        let Some(m) = self.upload.as_mut() else {
            return;
        };
        m.sync_text_fields();

        match m.form.take_submission() {
            Err(errors) => {
                m.errors = errors;
            }
            Ok(Submission::MissingImage) => {
                self.upload = None;
                self.set_notice(SubmitOutcome::missing_image().notice);
            }
            Ok(Submission::Create(image)) => {
                self.upload = None;
                self.outbox.push(Job::CreateImage(image));
            }
        }
    }

    pub(super) fn apply(&mut self, result: JobResult) {
        match result {
            JobResult::Page(req, page) => {
                self.feed.complete(req, page);
                if self.feed.status() == FeedStatus::Ready {
                    self.selected = self.selected.min(self.feed.len().saturating_sub(1));
                }
            }
            JobResult::Hosted(ticket, url) => {
                let Some(m) = self.upload.as_mut() else {
                    return;
                };
                if !m.form.is_current(ticket) {
                    tracing::debug!(?ticket, "dropping hosting result for a replaced file");
                    return;
                }
                m.hosting = false;
                match url {
                    Ok(url) => {
                        m.form.finish_hosting(ticket, url);
                    }
                    Err(err) => {
                        tracing::warn!("hosting failed: {:#}", err);
                        self.set_notice(Notice::error(
                            "Image upload failed",
                            "The selected file could not be uploaded.",
                        ));
                    }
                }
            }
            JobResult::Created(created) => {
                let outcome = finish_submission(created);
                if outcome.invalidate {
                    self.feed.invalidate();
                    self.selected = 0;
                    if let Some(req) = self.feed.ensure_loaded() {
                        self.outbox.push(Job::FetchPage(req));
                    }
                }
                self.set_notice(outcome.notice);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
