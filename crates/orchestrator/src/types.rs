use renderer::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Interpreting,
    ShowingResult,
    ShowingError,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Idle
    }
}

/// A settled, displayable interpretation.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub heading: String,    // "The {archetype}"
    pub image_path: String, // "assets/{archetype}.webp"
    pub fragment: Fragment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDirection {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
}

impl ScrollState {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.max_offset = 0;
    }

    pub fn scroll(&mut self, direction: ScrollDirection, amount: usize) {
        match direction {
            ScrollDirection::Up => self.offset = self.offset.saturating_sub(amount),
            ScrollDirection::Down => self.offset = (self.offset + amount).min(self.max_offset),
            ScrollDirection::PageUp => self.offset = self.offset.saturating_sub(amount.max(10)),
            ScrollDirection::PageDown => {
                self.offset = (self.offset + amount.max(10)).min(self.max_offset)
            }
            ScrollDirection::Top => self.offset = 0,
            ScrollDirection::Bottom => self.offset = self.max_offset,
        }
    }

    /// Called at draw time once the viewport height is known.
    pub fn update_max(&mut self, content_lines: usize, viewport_height: usize) {
        self.max_offset = content_lines.saturating_sub(viewport_height);
        if self.offset > self.max_offset {
            self.offset = self.max_offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_content() {
        let mut s = ScrollState::default();
        s.update_max(30, 10);
        assert_eq!(s.max_offset, 20);
        s.scroll(ScrollDirection::Down, 50);
        assert_eq!(s.offset, 20);
        s.scroll(ScrollDirection::Up, 5);
        assert_eq!(s.offset, 15);
        s.update_max(10, 10);
        assert_eq!(s.offset, 0);
    }
}
