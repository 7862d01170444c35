//! Flattening of rich-text release notes into plain entries.

use serde::Serialize;
use serde_json::Value;

/// A single plain-text release note entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    /// Plain text of the note.
    pub text: String,
}

/// Flattens a nested rich-text content structure into ordered note entries.
///
/// The input is the `content` array of a rich-text field: a sequence of
/// blocks, each holding its own `content` sequence of sub-elements. One entry
/// is emitted per sub-element, in block order then sub-element order. A
/// missing or `null` input yields an empty list, and malformed blocks are
/// skipped rather than failing the compilation.
pub fn flatten(blocks: Option<&Value>) -> Vec<NoteEntry> {
    let Some(Value::Array(blocks)) = blocks else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for block in blocks {
        let Some(Value::Array(elements)) = block.get("content") else {
            continue;
        };
        for element in elements {
            entries.push(NoteEntry {
                text: element_text(element),
            });
        }
    }
    entries
}

/// Renders one sub-element as plain text.
///
/// Raw strings pass through, rich nodes contribute their `text` field, and
/// anything else is kept as compact JSON so no entry is silently dropped.
fn element_text(element: &Value) -> String {
    match element {
        Value::String(text) => text.clone(),
        other => other
            .get("text")
            .and_then(Value::as_str)
            .map_or_else(|| other.to_string(), str::to_string),
    }
}
