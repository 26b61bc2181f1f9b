use ratatui::style::{Color, Modifier, Style};

pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn heading(depth: usize) -> Style {
        if depth == 0 {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    pub fn body() -> Style {
        Self::default()
    }

    pub fn bullet() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn banner_heading() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn image_path() -> Style {
        Self::dimmed()
    }

    pub fn loading() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn mode_indicator() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn hint_active() -> Style {
        Style::default().fg(Color::Cyan)
    }

    /// The "not-allowed" affordance while the input is empty.
    pub fn hint_blocked() -> Style {
        Self::dimmed().add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn input_border() -> Style {
        Style::default().fg(Color::Gray)
    }
}
