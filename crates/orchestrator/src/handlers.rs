use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::types::{Mode, ScrollDirection};

pub struct InputHandler;

impl InputHandler {
    /// Returns Ok(true) when the application should quit.
    pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
        if !matches!(key.kind, KeyEventKind::Press) {
            return Ok(false);
        }

        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return Ok(true);
        }

        Self::process_key(app, key).await?;
        Ok(false)
    }

    async fn process_key(app: &mut App, key: KeyEvent) -> Result<()> {
        match (key.code, key.modifiers) {
            (KeyCode::Up, _) => app.handle_scroll(ScrollDirection::Up, 1),
            (KeyCode::Down, _) => app.handle_scroll(ScrollDirection::Down, 1),
            (KeyCode::PageUp, _) => app.handle_scroll(ScrollDirection::PageUp, 10),
            (KeyCode::PageDown, _) => app.handle_scroll(ScrollDirection::PageDown, 10),
            (KeyCode::Home, _) => app.handle_scroll(ScrollDirection::Top, 0),
            (KeyCode::End, _) => app.handle_scroll(ScrollDirection::Bottom, 0),
            (KeyCode::Enter, KeyModifiers::ALT) => app.insert_newline(),
            (KeyCode::Enter, _) => Self::handle_enter(app).await?,
            (KeyCode::Esc, _) => app.dismiss_error(),
            (KeyCode::Backspace, _) => app.backspace(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => app.insert_char(c),
            _ => {}
        }
        Ok(())
    }

    async fn handle_enter(app: &mut App) -> Result<()> {
        match app.mode {
            Mode::ShowingError => app.dismiss_error(),
            // Submit from any other state; overlapping submissions are
            // resolved by the core's token, not blocked here.
            _ => app.submit().await?,
        }
        Ok(())
    }
}
