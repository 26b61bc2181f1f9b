use ratatui::text::{Line, Span};

use renderer::{Fragment, Node};

use crate::ui::styles::Styles;

const INDENT: &str = "  ";

/// Flatten a rendered fragment into styled terminal lines. Wrapping is left
/// to the Paragraph widget; this only decides indentation and styling.
pub fn fragment_lines(fragment: &Fragment) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_fragment(&mut lines, fragment, 0);
    // drop a trailing spacer so the pane doesn't end on a blank
    while matches!(lines.last(), Some(line) if line.width() == 0) {
        lines.pop();
    }
    lines
}

fn push_fragment(lines: &mut Vec<Line<'static>>, fragment: &Fragment, depth: usize) {
    for node in &fragment.0 {
        match node {
            Node::Entry { heading, body } => {
                // Suppressed keys carry a blank heading; the slot stays, the
                // label line doesn't.
                if !heading.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("{}{}", indent(depth), heading),
                        Styles::heading(depth),
                    )));
                }
                push_fragment(lines, body, depth + 1);
                if depth == 0 {
                    lines.push(Line::default());
                }
            }
            Node::Item(inner) => match inner.0.as_slice() {
                [Node::Text(text)] => lines.push(Line::from(vec![
                    Span::styled(format!("{}- ", indent(depth)), Styles::bullet()),
                    Span::styled(text.clone(), Styles::body()),
                ])),
                _ => {
                    lines.push(Line::from(Span::styled(
                        format!("{}-", indent(depth)),
                        Styles::bullet(),
                    )));
                    push_fragment(lines, inner, depth + 1);
                }
            },
            Node::Text(text) => {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", indent(depth), text),
                    Styles::body(),
                )));
            }
        }
    }
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderer::render;
    use serde_json::json;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn suppressed_headings_leave_only_the_body() {
        let fragment = render(&json!({"title": "Summary", "text": "You soar freely."}));
        let rendered = text_of(&fragment_lines(&fragment));
        assert!(rendered.contains(&"  Summary".to_string()));
        assert!(rendered.contains(&"  You soar freely.".to_string()));
        assert!(!rendered.iter().any(|l| l.contains("Title") || l.contains("Text")));
    }

    #[test]
    fn headings_precede_their_bodies() {
        let fragment = render(&json!({"dream_state": "lucid"}));
        let rendered = text_of(&fragment_lines(&fragment));
        assert_eq!(rendered[0], "Dream State");
        assert_eq!(rendered[1], "  lucid");
    }

    #[test]
    fn flattened_sequence_items_get_bullets() {
        let fragment = render(&json!({
            "actionableNotes": [{"title": "T", "text": "Look closer."}]
        }));
        let rendered = text_of(&fragment_lines(&fragment));
        assert!(rendered.iter().any(|l| l.contains("- T. Look closer.")));
    }

    #[test]
    fn empty_fragment_renders_no_lines() {
        assert!(fragment_lines(&render(&json!({}))).is_empty());
    }
}
