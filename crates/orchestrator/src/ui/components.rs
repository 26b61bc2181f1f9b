use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::fragment_view;
use crate::types::Mode;

use super::styles::Styles;

pub struct OutputPane;

impl OutputPane {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match app.mode {
            Mode::Idle => Self::render_idle(frame, area, app),
            Mode::Interpreting => Self::render_loading(frame, area, app),
            Mode::ShowingResult => Self::render_result(frame, area, app),
            Mode::ShowingError => Self::render_error(frame, area, app),
        }
    }

    fn render_idle(frame: &mut Frame, area: &Rect, _app: &App) {
        let widget = Paragraph::new("Describe your dream below, then press Enter.")
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(widget, *area);
    }

    fn render_loading(frame: &mut Frame, area: &Rect, app: &App) {
        let line = Line::from(Span::styled(
            format!("Interpreting your dream{}", app.loading_frame()),
            Styles::loading(),
        ));
        let widget = Paragraph::new(line).alignment(Alignment::Center);
        frame.render_widget(widget, *area);
    }

    fn render_result(frame: &mut Frame, area: &Rect, app: &App) {
        let Some(view) = &app.result else { return };

        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(view.heading.clone(), Styles::banner_heading())),
            Line::from(Span::styled(
                format!("[{}]", view.image_path),
                Styles::image_path(),
            )),
            Line::default(),
        ];
        lines.extend(fragment_view::fragment_lines(&view.fragment));

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll.offset as u16, 0));
        frame.render_widget(widget, *area);
    }

    fn render_error(frame: &mut Frame, area: &Rect, app: &App) {
        let message = app.error.as_deref().unwrap_or_default();
        let line = Line::from(vec![
            Span::styled(format!("{} ", crate::constants::prefixes::ERROR), Styles::error()),
            Span::styled(message.to_string(), Styles::default()),
        ]);
        let widget = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        frame.render_widget(widget, *area);
    }
}

pub struct StatusLine;

impl StatusLine {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        const KEY_HINTS: &str = "  alt+enter: newline  ctrl+c: quit";

        let mode_display = format!("[{}]", Self::mode_text(app.mode));
        let (hint, hint_style) = Self::submit_hint(app);
        let right_len = hint.len() + KEY_HINTS.len();

        let mut spans = vec![Span::styled(mode_display.clone(), Styles::mode_indicator())];

        let log = app.last_log().unwrap_or("");
        let used = mode_display.len() + right_len + 4;
        let room = (area.width as usize).saturating_sub(used);
        let log_short: String = log.chars().take(room).collect();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(log_short.clone(), Styles::dimmed()));

        let pad = (area.width as usize)
            .saturating_sub(mode_display.len() + 2 + log_short.chars().count() + right_len);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(hint, hint_style));
        spans.push(Span::styled(KEY_HINTS, Styles::mode_indicator()));

        let widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
        frame.render_widget(widget, *area);
    }

    fn mode_text(mode: Mode) -> &'static str {
        match mode {
            Mode::Idle => "idle",
            Mode::Interpreting => "interpreting",
            Mode::ShowingResult => "result",
            Mode::ShowingError => "error",
        }
    }

    /// Advisory affordance only: the real guard is in the core.
    fn submit_hint(app: &App) -> (&'static str, ratatui::style::Style) {
        if app.input_is_empty() {
            ("enter: not allowed", Styles::hint_blocked())
        } else {
            ("enter: interpret", Styles::hint_active())
        }
    }
}

pub struct InputPane;

impl InputPane {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        // A zero-area input region is tolerated by skipping setup.
        if area.width < 3 || area.height < 3 {
            return;
        }
        let block = Block::default()
            .title(" dream ")
            .borders(Borders::ALL)
            .style(Styles::input_border());

        let text = format!("{}\u{258f}", app.input);
        let widget = Paragraph::new(text)
            .block(block)
            .style(Styles::default())
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, *area);
    }
}
