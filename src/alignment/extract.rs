use serde_json::Value;

use crate::error::AlignmentError;
use crate::types::{TranscriptUnit, UnitExtraction};

/// Flattens word-level engine output (`segments[].words[]`, key names
/// configurable) into one ordered unit sequence. Every word entry must carry
/// `word`, `start`, `end` and `probability`.
pub fn extract_word_level(
    raw: &Value,
    segments_key: &str,
    words_key: &str,
) -> Result<UnitExtraction, AlignmentError> {
    let segments = array_field(raw, segments_key, "engine output")?;

    let mut units = Vec::new();
    for segment in segments {
        let words = array_field(segment, words_key, "segment")?;
        for entry in words {
            let text = str_field(entry, "word", "word entry")?;
            let start = f64_field(entry, "start", "word entry")?;
            let end = f64_field(entry, "end", "word entry")?;
            let probability = f64_field(entry, "probability", "word entry")?;
            units.push(TranscriptUnit {
                text: text.trim().to_string(),
                start,
                end,
                confidence: Some(probability),
            });
        }
    }

    let full_text = units
        .iter()
        .map(|u| u.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(UnitExtraction { full_text, units })
}

/// Flattens segment-level engine output (`segments[].text`) into one unit per
/// segment. A segment's text may span several tokens; there is no per-word
/// confidence at this granularity. Missing `start`/`end` default to 0.0, as
/// some engines omit them on empty or merged segments.
pub fn extract_segment_level(
    raw: &Value,
    segments_key: &str,
) -> Result<UnitExtraction, AlignmentError> {
    let segments = array_field(raw, segments_key, "engine output")?;

    let mut units = Vec::with_capacity(segments.len());
    let mut raw_texts = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = str_field(segment, "text", "segment")?;
        let start = segment.get("start").and_then(Value::as_f64).unwrap_or(0.0);
        let end = segment.get("end").and_then(Value::as_f64).unwrap_or(0.0);
        units.push(TranscriptUnit {
            text: text.trim().to_string(),
            start,
            end,
            confidence: None,
        });
        raw_texts.push(text);
    }

    // The tokenizer sees the segment texts as the engine produced them;
    // trimming happens only on the units used for matching.
    Ok(UnitExtraction {
        full_text: raw_texts.join(" "),
        units,
    })
}

fn array_field<'a>(
    value: &'a Value,
    key: &str,
    context: &'static str,
) -> Result<&'a Vec<Value>, AlignmentError> {
    value
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| AlignmentError::missing_key(key, context))
}

fn str_field<'a>(
    value: &'a Value,
    key: &str,
    context: &'static str,
) -> Result<&'a str, AlignmentError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AlignmentError::missing_key(key, context))
}

fn f64_field(value: &Value, key: &str, context: &'static str) -> Result<f64, AlignmentError> {
    value
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| AlignmentError::missing_key(key, context))
}
