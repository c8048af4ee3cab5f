use crate::types::{span_text, Document};

/// Sentence times come from the first/last contained token and may stay
/// `None` when those tokens were never matched.
pub fn assign_sentence_times(doc: &mut Document) {
    let Document {
        tokens, sentences, ..
    } = doc;
    for sentence in sentences.iter_mut() {
        if sentence.start >= sentence.end || sentence.end > tokens.len() {
            continue;
        }
        sentence.start_time = tokens[sentence.start].start_time;
        sentence.end_time = tokens[sentence.end - 1].end_time;
    }
}

/// Entity times come from the first and last contained token (`end` is a
/// half-open bound, so the last contained token sits at `end - 1`).
pub fn assign_entity_times(doc: &mut Document) {
    let Document {
        tokens, entities, ..
    } = doc;
    for entity in entities.iter_mut() {
        if entity.start >= entity.end || entity.end > tokens.len() {
            continue;
        }
        entity.start_time = tokens[entity.start].start_time;
        entity.end_time = tokens[entity.end - 1].end_time;
    }
}

/// Renders the sentence-grouped transcript: one `[HH:MM:SS.mmm] text` line
/// per sentence. A sentence whose start was never resolved renders at zero;
/// the stored `start_time` is left untouched.
pub fn render_transcript(doc: &Document) -> String {
    let mut out = String::new();
    for sentence in &doc.sentences {
        let seconds = sentence.start_time.unwrap_or(0.0);
        let text = span_text(&doc.tokens, sentence.start, sentence.end);
        out.push('[');
        out.push_str(&format_timestamp(seconds));
        out.push_str("] ");
        out.push_str(&text);
        out.push('\n');
    }
    out
}

/// Zero-padded `HH:MM:SS.mmm` from a second count. Hours run past 24 without
/// wrapping. Negative inputs clamp to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = total_ms / 60_000 % 60;
    let secs = total_ms / 1_000 % 60;
    let millis = total_ms % 1_000;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}
