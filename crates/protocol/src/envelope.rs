use serde_json::{Map, Value};
use thiserror::Error;

/// Reserved archetype value: the server failed to decode its own model
/// output. Must surface as a failure, never as a rendered interpretation.
pub const DECODE_ERROR: &str = "DECODE_ERROR";

/// A decoded server response: the archetype tag plus the free-form
/// descriptive content tree that the renderer walks.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub archetype: String,
    pub content: Value,
}

impl Interpretation {
    /// Banner heading shown above the rendered content.
    pub fn heading(&self) -> String {
        format!("The {}", self.archetype)
    }

    /// Path of the archetype illustration. The asset directory is the
    /// collaborator responsible for shipping a matching file; the tag is
    /// used verbatim.
    pub fn image_path(&self) -> String {
        format!("assets/{}.webp", self.archetype)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("server reported a decode failure")]
    Sentinel,
    #[error("envelope missing required field `{0}`")]
    MissingField(&'static str),
    #[error("response body is not a recognized envelope shape")]
    NotAnEnvelope,
}

/// Decode the versioned collaborator envelope.
///
/// Two shapes are accepted:
/// - a flat object `{ archetype, descriptive_content }`;
/// - an array of `{ _id_, _text_ }` pairs, reduced into a mapping by `_id_`
///   before the same two keys are required.
///
/// A missing key after reduction is an error; undefined values are never
/// forwarded to the renderer.
pub fn decode_envelope(body: Value) -> Result<Interpretation, EnvelopeError> {
    let fields = match body {
        Value::Object(map) => map,
        Value::Array(items) => reduce_pairs(items),
        _ => return Err(EnvelopeError::NotAnEnvelope),
    };

    let archetype = match fields.get("archetype").and_then(Value::as_str) {
        Some(tag) => tag.to_string(),
        None => return Err(EnvelopeError::MissingField("archetype")),
    };
    if archetype == DECODE_ERROR {
        return Err(EnvelopeError::Sentinel);
    }
    let content = fields
        .get("descriptive_content")
        .cloned()
        .ok_or(EnvelopeError::MissingField("descriptive_content"))?;

    Ok(Interpretation { archetype, content })
}

/// Reduce `[{_id_, _text_}, ...]` into a mapping keyed by `_id_`.
/// Malformed elements are skipped; the required-field checks above catch
/// whatever damage that leaves. Duplicate ids keep the last value.
fn reduce_pairs(items: Vec<Value>) -> Map<String, Value> {
    let mut fields = Map::new();
    for item in items {
        let Value::Object(pair) = item else { continue };
        let Some(id) = pair.get("_id_").and_then(Value::as_str) else {
            continue;
        };
        let Some(text) = pair.get("_text_") else { continue };
        fields.insert(id.to_string(), text.clone());
    }
    fields
}
