pub mod components;
pub mod layout;
pub mod styles;

use ratatui::Frame;

use crate::app::App;
use components::{InputPane, OutputPane, StatusLine};
use layout::LayoutManager;

pub struct UI;

impl UI {
    pub fn draw(frame: &mut Frame, app: &App) {
        let panes = LayoutManager::split(frame.area(), &app.input);
        OutputPane::render(frame, &panes.output, app);
        StatusLine::render(frame, &panes.status, app);
        InputPane::render(frame, &panes.input, app);
    }
}
