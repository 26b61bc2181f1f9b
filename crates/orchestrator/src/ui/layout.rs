use ratatui::layout::Rect;

pub struct LayoutManager;

pub struct Panes {
    pub output: Rect,
    pub status: Rect,
    pub input: Rect,
}

impl LayoutManager {
    /// Vertical split: output on top, one status line, input at the bottom.
    /// The input pane grows to exactly fit its wrapped content (the
    /// textarea auto-resize of the original client); the output pane
    /// absorbs whatever is left.
    pub fn split(area: Rect, input_text: &str) -> Panes {
        let input_height = Self::input_height(area, input_text);
        let status_height = 1u16.min(area.height.saturating_sub(input_height));
        let output_height = area.height.saturating_sub(input_height + status_height);

        Panes {
            output: Rect::new(area.x, area.y, area.width, output_height),
            status: Rect::new(area.x, area.y + output_height, area.width, status_height),
            input: Rect::new(
                area.x,
                area.y + output_height + status_height,
                area.width,
                input_height.min(area.height),
            ),
        }
    }

    fn input_height(area: Rect, input_text: &str) -> u16 {
        // 2 border rows around the text
        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let content = Self::wrapped_line_count(input_text, inner_width);
        let wanted = content as u16 + 2;
        // growth is unbounded by policy; the terminal frame is the only cap
        wanted.min(area.height)
    }

    /// Lines the text occupies at the given width, counting hard newlines
    /// and overflow wraps. The trailing cursor cell counts too, so typing
    /// at a full line grows the pane before the character wraps.
    pub fn wrapped_line_count(text: &str, width: usize) -> usize {
        let width = width.max(1);
        text.split('\n')
            .map(|line| (line.chars().count() + 1).div_ceil(width).max(1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_one_line() {
        assert_eq!(LayoutManager::wrapped_line_count("", 40), 1);
    }

    #[test]
    fn hard_newlines_count() {
        assert_eq!(LayoutManager::wrapped_line_count("a\nb\nc", 40), 3);
    }

    #[test]
    fn long_lines_wrap() {
        let line = "x".repeat(85);
        assert_eq!(LayoutManager::wrapped_line_count(&line, 40), 3);
    }

    #[test]
    fn input_pane_grows_with_content() {
        let area = Rect::new(0, 0, 42, 30);
        let one = LayoutManager::split(area, "short");
        let many = LayoutManager::split(area, "a\nb\nc\nd");
        assert_eq!(one.input.height, 3);
        assert_eq!(many.input.height, 6);
        assert!(many.output.height < one.output.height);
    }

    #[test]
    fn tiny_terminal_never_underflows() {
        let area = Rect::new(0, 0, 10, 2);
        let panes = LayoutManager::split(area, "a\nb\nc\nd\ne\nf");
        assert!(panes.input.height <= 2);
        assert_eq!(
            panes.output.height + panes.status.height + panes.input.height,
            2
        );
    }
}
