use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &Worker,
    results: &mpsc::Receiver<JobResult>,
) -> Result<()> {
    loop {
        while let Ok(result) = results.try_recv() {
            app.apply(result);
        }
        app.tick(Instant::now());
        for job in app.take_jobs() {
            worker.dispatch(job);
        }

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.upload.is_some() {
        modal::handle_upload_key(app, key);
        return;
    }
    if let Some(action) = Action::from_key(key) {
        app.perform(action);
    }
}
