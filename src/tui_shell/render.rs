use super::time_utils::fmt_created;
use super::*;

const CARD_HEIGHT: u16 = 5;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    match app.feed.status() {
        FeedStatus::Loading => draw_centered(frame, area, "Loading...", Color::Gray),
        FeedStatus::Error => draw_error(frame, area, app),
        FeedStatus::Ready => draw_gallery(frame, area, app),
    }

    if app.lightbox.is_open() {
        super::modal::draw_lightbox(frame, app);
    }
    if let Some(m) = &app.upload {
        super::modal::draw_upload(frame, m);
    }
}

fn draw_centered(frame: &mut ratatui::Frame, area: Rect, text: &str, color: Color) {
    let y = area.y + area.height / 2;
    let line_area = Rect {
        x: area.x,
        y,
        width: area.width,
        height: area.height.min(1),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .alignment(ratatui::layout::Alignment::Center),
        line_area,
    );
}

fn draw_error(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Something went wrong while loading the gallery.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(err) = app.feed.error() {
        lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("q: quit"));

    let h = (lines.len() as u16 + 2).min(area.height);
    let box_area = Rect {
        x: area.x + 2.min(area.width),
        y: area.y + area.height.saturating_sub(h) / 2,
        width: area.width.saturating_sub(4),
        height: h,
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Error")),
        box_area,
    );
}

fn draw_gallery(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Gallery ",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} images", app.feed.len()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(
            "arrows: move  enter: view  n: new image  m: more  r: last image  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    draw_grid(frame, chunks[1], app);

    // Load-more footer, only while more pages exist.
    if app.feed.has_more() {
        let text = if app.feed.is_fetching_next() {
            "Loading..."
        } else {
            "[ Load more (m) ]"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Cyan))),
            chunks[2],
        );
    }

    if let Some(n) = app.notice() {
        let color = match n.level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    n.title.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(n.description.as_str()),
            ])),
            chunks[3],
        );
    }
}

fn draw_grid(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    if app.feed.is_empty() {
        draw_centered(
            frame,
            area,
            "No images yet. Press n to add one.",
            Color::Gray,
        );
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let now = OffsetDateTime::now_utc();

    let col_width = area.width / GRID_COLUMNS as u16;
    for (i, rec) in app.feed.items().enumerate() {
        let row = i / GRID_COLUMNS;
        if row < first_row {
            continue;
        }
        if row >= first_row + visible_rows {
            break;
        }
        let col = i % GRID_COLUMNS;
        // Short terminals get the top of the card only.
        let card = Rect {
            x: area.x + col as u16 * col_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: col_width,
            height: CARD_HEIGHT,
        }
        .intersection(area);
        if card.is_empty() {
            continue;
        }

        let border = if i == app.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let lines = vec![
            Line::from(rec.description.as_str()),
            Line::from(Span::styled(
                fmt_created(rec.ts, now),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(rec.title.as_str()),
            ),
            card,
        );
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod tests;
