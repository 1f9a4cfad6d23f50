//! Runs blocking network calls off the UI thread.

use std::sync::Arc;

use super::*;
use crate::gallery::{PageRequest, PageSource};
use crate::model::{ImageRecord, NewImage, Page};
use crate::upload::{HostTicket, ImageCreator, ImageHost};

#[derive(Debug)]
pub(super) enum Job {
    FetchPage(PageRequest),
    HostImage {
        ticket: HostTicket,
        file: FileSelection,
    },
    CreateImage(NewImage),
}

#[derive(Debug)]
pub(super) enum JobResult {
    Page(PageRequest, Result<Page>),
    Hosted(HostTicket, Result<String>),
    Created(Result<ImageRecord>),
}

pub(super) struct Worker {
    remote: Arc<RemoteClient>,
    hosting: Option<Arc<HostingClient>>,
    results: mpsc::Sender<JobResult>,
}

impl Worker {
    pub(super) fn new(
        remote: RemoteClient,
        hosting: Option<HostingClient>,
        results: mpsc::Sender<JobResult>,
    ) -> Self {
        Self {
            remote: Arc::new(remote),
            hosting: hosting.map(Arc::new),
            results,
        }
    }

    pub(super) fn can_host(&self) -> bool {
        self.hosting.is_some()
    }

    /// Start `job` on its own thread. The result is sent back even on failure.
    pub(super) fn dispatch(&self, job: Job) {
        let remote = Arc::clone(&self.remote);
        let hosting = self.hosting.clone();
        let tx = self.results.clone();

        std::thread::spawn(move || {
            let result = match job {
                Job::FetchPage(req) => {
                    let page = remote.fetch_page(req.after.as_deref());
                    JobResult::Page(req, page)
                }
                Job::HostImage { ticket, file } => {
                    let url = match hosting.as_deref() {
                        Some(h) => h.host(&file),
                        None => Err(anyhow::anyhow!("no image hosting endpoint configured")),
                    };
                    JobResult::Hosted(ticket, url)
                }
                Job::CreateImage(image) => JobResult::Created(remote.create(&image)),
            };
            // The receiver is gone only when the UI has exited.
            let _ = tx.send(result);
        });
    }
}
