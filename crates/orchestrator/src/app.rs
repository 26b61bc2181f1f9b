use std::collections::VecDeque;

use anyhow::Result;
use tokio::sync::mpsc;

use protocol::Message;

use crate::constants;
use crate::fragment_view;
use crate::logger;
use crate::types::{Mode, ResultView, ScrollDirection, ScrollState};

/// All UI state. The DOM regions of the original web client become fields
/// here; "visibility" is whichever branch the draw code takes for `mode`.
pub struct App {
    pub input: String,
    pub mode: Mode,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub scroll: ScrollState,
    pub logs: VecDeque<String>,
    pub loading_tick: usize,
    /// Token of the submission currently owning the output region.
    current_token: Option<u64>,
    core_tx: mpsc::Sender<Message>,
}

impl App {
    pub fn new(core_tx: mpsc::Sender<Message>) -> Self {
        Self {
            input: String::new(),
            mode: Mode::Idle,
            result: None,
            error: None,
            scroll: ScrollState::default(),
            logs: VecDeque::new(),
            loading_tick: 0,
            current_token: None,
            core_tx,
        }
    }

    /// Advance the loading animation; called once per draw tick.
    pub fn tick(&mut self) {
        if self.mode == Mode::Interpreting {
            self.loading_tick = self.loading_tick.wrapping_add(1);
        }
    }

    pub fn loading_frame(&self) -> &'static str {
        constants::LOADING_FRAMES[(self.loading_tick / 4) % constants::LOADING_FRAMES.len()]
    }

    pub fn input_is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Submit whatever is in the input field. The non-empty guard lives in
    /// the core; the UI affordance is advisory only.
    pub async fn submit(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.input);
        logger::log_event("SUBMIT", &format!("{} chars", text.len()));
        self.core_tx
            .send(Message::submit_dream(text, Some("tui".to_string())))
            .await
            .map_err(|e| anyhow::anyhow!("core channel closed: {}", e))
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn insert_newline(&mut self) {
        self.input.push('\n');
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn dismiss_error(&mut self) {
        if self.mode == Mode::ShowingError {
            self.error = None;
            self.mode = Mode::Idle;
        }
    }

    pub fn handle_scroll(&mut self, direction: ScrollDirection, amount: usize) {
        self.scroll.scroll(direction, amount);
    }

    /// Reclamp the scroll window once the real viewport height is known.
    pub fn update_scroll_bounds(&mut self, output_height: u16) {
        let content_lines = self.result_line_count();
        self.scroll.update_max(content_lines, output_height as usize);
    }

    fn result_line_count(&self) -> usize {
        match &self.result {
            // banner + spacer + content
            Some(view) => fragment_view::fragment_lines(&view.fragment).len() + 3,
            None => 0,
        }
    }

    /// Apply one message from the core. Stale tokens never repaint: the
    /// core already filters, this is the UI's own check on top.
    ///
    /// Tokens are monotonic but delivery order is not: two rapid
    /// submissions run in separate tasks, so `started` messages can arrive
    /// out of order. The newest token always wins, and a settlement at or
    /// above it settles the UI, so the loading state can never be stranded
    /// by a late `started`.
    pub fn apply_message(&mut self, msg: Message) {
        match msg {
            Message::SubmissionStarted(s) => {
                if self.current_token.is_some_and(|t| s.token <= t) {
                    self.push_log(format!("ignoring out-of-order start {}", s.token));
                    return;
                }
                self.current_token = Some(s.token);
                self.result = None;
                self.error = None;
                self.scroll.reset();
                self.mode = Mode::Interpreting;
                self.push_log(format!("submission {} in flight", s.token));
            }
            Message::InterpretationReady(r) => {
                if self.current_token.map_or(true, |t| r.token < t) {
                    self.push_log(format!("ignoring stale result {}", r.token));
                    return;
                }
                self.current_token = Some(r.token);
                let interp = protocol::Interpretation {
                    archetype: r.archetype,
                    content: r.content,
                };
                self.result = Some(ResultView {
                    heading: interp.heading(),
                    image_path: interp.image_path(),
                    fragment: renderer::render(&interp.content),
                });
                self.error = None;
                self.mode = Mode::ShowingResult;
                self.push_log(format!("submission {} settled: {}", r.token, interp.archetype));
            }
            Message::SubmissionFailed(f) => {
                if self.current_token.map_or(true, |t| f.token < t) {
                    self.push_log(format!("ignoring stale failure {}", f.token));
                    return;
                }
                self.current_token = Some(f.token);
                logger::log_error("submission", &format!("{:?}: {}", f.kind, f.text));
                self.error = Some(constants::ERROR_MESSAGE.to_string());
                self.result = None;
                self.mode = Mode::ShowingError;
            }
            Message::Status(s) => {
                logger::log_event(&s.level.to_uppercase(), &s.text);
                self.push_log(s.text);
            }
            // inbound-only traffic, not for the UI
            Message::SubmitDream(_) => {}
        }
    }

    fn push_log(&mut self, line: String) {
        if self.logs.len() >= constants::MAX_LOG_LINES {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }

    pub fn last_log(&self) -> Option<&str> {
        self.logs.back().map(String::as_str)
    }
}
