//! Pure renderer for interpretation content: walks an arbitrary JSON value
//! and produces a label/value tree the front ends can draw (terminal lines
//! or the nested HTML of the original web client).
//!
//! Totality is the contract here: any well-formed JSON value renders without
//! failing, including `null`, `{}` and `[]`. The input is never mutated.

use serde_json::Value;

mod html;
mod label;

pub use label::heading_label;

/// One rendered block. A mapping key yields exactly one `Entry` (heading +
/// body), a sequence element one `Item`, a scalar one `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Entry { heading: String, body: Fragment },
    Item(Fragment),
    Text(String),
}

/// An ordered run of sibling nodes. Empty for `{}` and `[]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment(pub Vec<Node>);

impl Fragment {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nested `div`/`h3`/`p` markup, matching the original web renderer.
    pub fn to_html(&self) -> String {
        html::fragment_to_html(self)
    }
}

/// Render a JSON value into a fragment.
///
/// - mappings: one `Entry` per key in wire order; `text`/`title` keys keep
///   their slot but get a blank heading (see [`suppressed_key`]);
/// - sequences: one `Item` per element; mapping elements are flattened to a
///   single sentence-joined text node (see [`flatten_entry_values`]);
/// - scalars: one `Text` node.
pub fn render(value: &Value) -> Fragment {
    match value {
        Value::Object(map) => Fragment(
            map.iter()
                .map(|(key, child)| Node::Entry {
                    heading: heading_for(key),
                    body: render(child),
                })
                .collect(),
        ),
        Value::Array(items) => Fragment(items.iter().map(render_element).collect()),
        scalar => Fragment(vec![Node::Text(scalar_text(scalar))]),
    }
}

/// Keys whose heading is suppressed: the value is the content, the label
/// would just repeat it. Case-insensitive.
pub fn suppressed_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("text") || key.eq_ignore_ascii_case("title")
}

fn heading_for(key: &str) -> String {
    if suppressed_key(key) {
        String::new()
    } else {
        heading_label(key)
    }
}

fn render_element(element: &Value) -> Node {
    match element {
        // A mapping inside a sequence collapses to one line of prose.
        Value::Object(map) => Node::Item(Fragment(vec![Node::Text(flatten_entry_values(
            map.values(),
        ))])),
        other => Node::Item(render(other)),
    }
}

/// Sequence-of-mapping policy: the mapping's values, in order, joined into
/// one period-separated string. Nested structure inside such an element is
/// emitted as compact JSON rather than recursed into.
pub fn flatten_entry_values<'a, I>(values: I) -> String
where
    I: Iterator<Item = &'a Value>,
{
    values
        .map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other if other.is_object() || other.is_array() => other.to_string(),
            other => scalar_text(other),
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // render() never routes containers here
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(fragment: &Fragment, idx: usize) -> (&str, &Fragment) {
        match &fragment.0[idx] {
            Node::Entry { heading, body } => (heading.as_str(), body),
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn empty_containers_render_to_nothing() {
        assert!(render(&json!({})).is_empty());
        assert!(render(&json!([])).is_empty());
    }

    #[test]
    fn scalars_render_as_single_text_nodes() {
        assert_eq!(render(&json!("hello")).0, vec![Node::Text("hello".into())]);
        assert_eq!(render(&json!(3.5)).0, vec![Node::Text("3.5".into())]);
        assert_eq!(render(&json!(true)).0, vec![Node::Text("true".into())]);
        assert_eq!(render(&json!(null)).0, vec![Node::Text(String::new())]);
    }

    #[test]
    fn mapping_keys_become_cased_headings_in_order() {
        let fragment = render(&json!({
            "dream_state": "lucid",
            "archetypeName": "Sage"
        }));
        assert_eq!(fragment.0.len(), 2);
        let (h0, b0) = entry(&fragment, 0);
        assert_eq!(h0, "Dream State");
        assert_eq!(b0.0, vec![Node::Text("lucid".into())]);
        let (h1, _) = entry(&fragment, 1);
        assert_eq!(h1, "Archetype Name");
    }

    #[test]
    fn text_and_title_keep_their_slot_with_blank_heading() {
        let fragment = render(&json!({"title": "Summary", "text": "You soar freely."}));
        assert_eq!(fragment.0.len(), 2);
        let (h0, b0) = entry(&fragment, 0);
        assert_eq!(h0, "");
        assert_eq!(b0.0, vec![Node::Text("Summary".into())]);
        let (h1, b1) = entry(&fragment, 1);
        assert_eq!(h1, "");
        assert_eq!(b1.0, vec![Node::Text("You soar freely.".into())]);
        // case-insensitive
        assert!(suppressed_key("TITLE"));
        assert!(suppressed_key("Text"));
        assert!(!suppressed_key("subtitle"));
    }

    #[test]
    fn nested_mappings_recurse() {
        let fragment = render(&json!({
            "interpretation": {"lesson1": {"title": "T", "text": "body"}}
        }));
        let (heading, body) = entry(&fragment, 0);
        assert_eq!(heading, "Interpretation");
        let (inner, lesson) = entry(body, 0);
        assert_eq!(inner, "Lesson 1");
        assert_eq!(lesson.0.len(), 2);
    }

    #[test]
    fn sequence_of_mappings_flattens_values_with_periods() {
        let fragment = render(&json!({
            "actionableNotes": [
                {"title": "What are you lacking?", "text": "Look closer."}
            ]
        }));
        let (heading, body) = entry(&fragment, 0);
        assert_eq!(heading, "Actionable Notes");
        match &body.0[0] {
            Node::Item(inner) => assert_eq!(
                inner.0,
                vec![Node::Text("What are you lacking?. Look closer.".into())]
            ),
            other => panic!("expected item, got {:?}", other),
        }
    }

    #[test]
    fn sequence_of_scalars_recurses_normally() {
        let fragment = render(&json!(["one", 2, null]));
        assert_eq!(fragment.0.len(), 3);
        match &fragment.0[1] {
            Node::Item(inner) => assert_eq!(inner.0, vec![Node::Text("2".into())]),
            other => panic!("expected item, got {:?}", other),
        }
    }

    #[test]
    fn flatten_skips_nulls_and_serializes_nested_values() {
        let map = json!({"a": "x", "b": null, "c": {"deep": 1}});
        let flat = flatten_entry_values(map.as_object().unwrap().values());
        assert_eq!(flat, r#"x. {"deep":1}"#);
    }

    #[test]
    fn render_is_total_over_deep_and_mixed_trees() {
        let gnarly = json!({
            "a": [[1, 2], [{"x": null}]],
            "b": {"c": {"d": {"e": []}}},
            "text": false
        });
        // must not panic, and every top-level key gets a node
        assert_eq!(render(&gnarly).0.len(), 3);
    }
}
