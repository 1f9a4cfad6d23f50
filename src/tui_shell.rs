use std::io::{self, IsTerminal};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use time::OffsetDateTime;

use crate::gallery::{FeedStatus, GalleryFeed};
use crate::logging::{self, LogTarget};
use crate::notice::{Notice, NoticeLevel};
use crate::remote::{HostingClient, RemoteClient};
use crate::tui::TuiRunOptions;
use crate::upload::{Field, FieldError, FieldErrors, FileSelection, Submission, UploadForm};
use crate::viewer::Lightbox;

mod app;
use app::Action;

mod event_loop;
use event_loop::run_loop;

mod input;
use input::Input;

mod modal;
use modal::UploadModal;

mod render;

mod time_utils;

mod worker;
use worker::{Job, JobResult, Worker};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// How long a notice stays in the status line.
const NOTICE_TTL: Duration = Duration::from_secs(5);

pub(crate) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    match &opts.log_file {
        Some(path) => logging::init(LogTarget::File(path))?,
        None => logging::init(LogTarget::Off)?,
    }

    let remote = RemoteClient::new(&opts.config)?;
    let hosting = match HostingClient::new(&opts.config) {
        Ok(h) => Some(h),
        Err(err) => {
            tracing::info!("uploads disabled: {:#}", err);
            None
        }
    };

    let (result_tx, result_rx) = mpsc::channel();
    let worker = Worker::new(remote, hosting, result_tx);
    let mut app = App::new(worker.can_host());

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app, &worker, &result_rx);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

/// Everything the gallery screen owns. Network work is queued in `outbox` and
/// dispatched by the event loop; results come back through [`App::apply`].
struct App {
    feed: GalleryFeed,
    lightbox: Lightbox,
    selected: usize,

    upload: Option<UploadModal>,
    can_host: bool,

    notice: Option<(Notice, Instant)>,
    outbox: Vec<Job>,
    quit: bool,
}
