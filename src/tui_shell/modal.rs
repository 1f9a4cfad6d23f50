use super::*;
use crate::upload::{DESCRIPTION_MAX, TITLE_MAX};

const FIELDS: [Field; 3] = [Field::Image, Field::Title, Field::Description];

pub(super) struct UploadModal {
    pub(super) form: UploadForm,
    pub(super) inputs: [Input; 3],
    pub(super) focus: Field,
    pub(super) errors: FieldErrors,
    /// Path of the file currently selected in `form`.
    pub(super) selected_path: Option<String>,
    pub(super) hosting: bool,
}

impl UploadModal {
    pub(super) fn new() -> Self {
        Self {
            form: UploadForm::new(),
            inputs: Default::default(),
            focus: Field::Image,
            errors: FieldErrors::default(),
            selected_path: None,
            hosting: false,
        }
    }

    pub(super) fn index(field: Field) -> usize {
        match field {
            Field::Image => 0,
            Field::Title => 1,
            Field::Description => 2,
        }
    }

    fn label(field: Field) -> &'static str {
        match field {
            Field::Image => "Image file (path)",
            Field::Title => "Title",
            Field::Description => "Description",
        }
    }

    fn focused(&mut self) -> &mut Input {
        &mut self.inputs[Self::index(self.focus)]
    }

    fn shift_focus(&mut self, forward: bool) {
        let i = Self::index(self.focus);
        let n = FIELDS.len();
        let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
        self.focus = FIELDS[next];
    }

    pub(super) fn sync_text_fields(&mut self) {
        self.form.title = self.inputs[Self::index(Field::Title)].buf.clone();
        self.form.description = self.inputs[Self::index(Field::Description)].buf.clone();
    }

    fn clear_error(&mut self, field: Field) {
        match field {
            Field::Image => self.errors.image = None,
            Field::Title => self.errors.title = None,
            Field::Description => self.errors.description = None,
        }
    }

    fn image_status(&self) -> Option<(&'static str, Color)> {
        if self.hosting {
            Some(("uploading...", Color::Yellow))
        } else if self.form.pending_url().is_some() {
            Some(("uploaded", Color::Green))
        } else {
            None
        }
    }
}

pub(super) fn handle_upload_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        Leave { forward: bool },
        Submit,
    }

    let action = {
        let Some(m) = app.upload.as_mut() else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Char('s') if ctrl => ModalAction::Submit,
            KeyCode::Tab | KeyCode::Down => ModalAction::Leave { forward: true },
            KeyCode::BackTab | KeyCode::Up => ModalAction::Leave { forward: false },
            KeyCode::Enter => {
                if m.focus == Field::Description {
                    ModalAction::Submit
                } else {
                    ModalAction::Leave { forward: true }
                }
            }
            KeyCode::Left => {
                m.focused().move_left();
                ModalAction::None
            }
            KeyCode::Right => {
                m.focused().move_right();
                ModalAction::None
            }
            KeyCode::Backspace => {
                m.focused().backspace();
                m.clear_error(m.focus);
                ModalAction::None
            }
            KeyCode::Delete => {
                m.focused().delete();
                m.clear_error(m.focus);
                ModalAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                m.focused().insert_char(c);
                m.clear_error(m.focus);
                ModalAction::None
            }
            _ => ModalAction::None,
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_upload(),
        ModalAction::Leave { forward } => {
            let leaving_image = app.upload.as_ref().map(|m| m.focus) == Some(Field::Image);
            if leaving_image {
                app.select_file_from_input();
            }
            if let Some(m) = app.upload.as_mut() {
                m.shift_focus(forward);
            }
        }
        ModalAction::Submit => app.submit_upload(),
    }
}

fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub(super) fn draw_upload(frame: &mut ratatui::Frame, m: &UploadModal) {
    let area = frame.area();
    let box_area = centered(area, area.width.saturating_sub(6).clamp(30, 80), 17);
    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New image (Tab: next field, Enter on description or Ctrl-S: send, Esc: cancel)");
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field) in FIELDS.iter().enumerate() {
        let input = &m.inputs[UploadModal::index(*field)];
        let focused = m.focus == *field;
        let border = if m.errors.get(*field).is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let mut title = UploadModal::label(*field).to_string();
        match field {
            Field::Title => title.push_str(&format!(
                " {}/{}",
                input.buf.chars().count(),
                TITLE_MAX
            )),
            Field::Description => title.push_str(&format!(
                " {}/{}",
                input.buf.chars().count(),
                DESCRIPTION_MAX
            )),
            Field::Image => {}
        }
        let mut title_spans = vec![Span::raw(title)];
        if *field == Field::Image {
            if let Some((status, color)) = m.image_status() {
                title_spans.push(Span::raw(" "));
                title_spans.push(Span::styled(status, Style::default().fg(color)));
            }
        }

        let input_area = parts[i * 2];
        frame.render_widget(
            Paragraph::new(input.buf.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(Line::from(title_spans)),
            ),
            input_area,
        );
        if focused {
            let max_x = input_area.width.saturating_sub(2);
            let x = u16::try_from(input.cursor).unwrap_or(u16::MAX).min(max_x);
            frame.set_cursor_position((input_area.x + 1 + x, input_area.y + 1));
        }

        let err_line = m
            .errors
            .get(*field)
            .map(|e| Line::from(Span::styled(e.to_string(), Style::default().fg(Color::Red))))
            .unwrap_or_default();
        frame.render_widget(Paragraph::new(err_line), parts[i * 2 + 1]);
    }
}

pub(super) fn draw_lightbox(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let box_area = centered(area, area.width.saturating_sub(6).clamp(20, 90), 9);
    frame.render_widget(ratatui::widgets::Clear, box_area);

    let url = app.lightbox.current_url();
    let record = app.feed.items().find(|r| r.url == url);
    let title = record
        .map(|r| r.title.clone())
        .unwrap_or_else(|| "Image".to_string());

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let mut lines = Vec::new();
    if let Some(r) = record {
        lines.push(Line::from(r.description.as_str()));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Open original: ", Style::default().fg(Color::Gray)),
        Span::styled(
            url,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
