//! HTML emission: the nested `div`/`h3`/`p` markup of the original web
//! client, with text escaped the way `textContent` assignment would have.

use crate::{Fragment, Node};

pub(crate) fn fragment_to_html(fragment: &Fragment) -> String {
    let mut out = String::new();
    write_fragment(&mut out, fragment);
    out
}

fn write_fragment(out: &mut String, fragment: &Fragment) {
    for node in &fragment.0 {
        write_node(out, node);
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Entry { heading, body } => {
            // One heading element per entry, blank for suppressed keys.
            out.push_str("<h3>");
            escape_into(out, heading);
            out.push_str("</h3>");
            write_body(out, body);
        }
        Node::Item(inner) => {
            out.push_str("<div class=\"item\">");
            write_fragment(out, inner);
            out.push_str("</div>");
        }
        Node::Text(text) => {
            out.push_str("<p>");
            escape_into(out, text);
            out.push_str("</p>");
        }
    }
}

fn write_body(out: &mut String, body: &Fragment) {
    match body.0.as_slice() {
        [Node::Text(text)] => {
            out.push_str("<p>");
            escape_into(out, text);
            out.push_str("</p>");
        }
        _ => {
            out.push_str("<div class=\"section\">");
            write_fragment(out, body);
            out.push_str("</div>");
        }
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::render;
    use serde_json::json;

    #[test]
    fn scalar_entry_becomes_heading_plus_paragraph() {
        let html = render(&json!({"dream_state": "lucid"})).to_html();
        assert_eq!(html, "<h3>Dream State</h3><p>lucid</p>");
    }

    #[test]
    fn suppressed_heading_is_emitted_blank() {
        let html = render(&json!({"text": "You soar freely."})).to_html();
        assert_eq!(html, "<h3></h3><p>You soar freely.</p>");
    }

    #[test]
    fn nested_mapping_wraps_in_section_div() {
        let html = render(&json!({"dream": {"description": "falling"}})).to_html();
        assert_eq!(
            html,
            "<h3>Dream</h3><div class=\"section\"><h3>Description</h3><p>falling</p></div>"
        );
    }

    #[test]
    fn sequence_elements_wrap_in_item_divs() {
        let html = render(&json!({"notes": ["a", "b"]})).to_html();
        assert!(html.starts_with("<h3>Notes</h3><div class=\"section\">"));
        assert_eq!(html.matches("<div class=\"item\">").count(), 2);
    }

    #[test]
    fn text_is_escaped() {
        let html = render(&json!({"note": "a < b & c"})).to_html();
        assert!(html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn empty_fragment_is_empty_markup() {
        assert_eq!(render(&json!({})).to_html(), "");
    }
}
