use serde::Serialize;

/// One timestamped span of transcribed text flattened out of the engine
/// output: a single spoken word in word-level mode, or a whole segment (which
/// may cover several tokens) in segment-level mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptUnit {
    /// Whitespace-trimmed surface text of the unit.
    pub text: String,
    pub start: f64,
    pub end: f64,
    /// Per-word probability in word-level mode; `None` for segment units.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub text: String,
    /// True when the source text had whitespace after this token. Needed to
    /// reconstruct sentence/entity surface text exactly.
    pub ws: bool,
    /// Assigned at most once, by the aligner. Stays `None` for a token that
    /// matched no transcript unit.
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub confidence: Option<f64>,
    /// Marks a token that is a fragment of a transcript unit spanning
    /// multiple tokens.
    pub was_split: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, ws: bool) -> Self {
        Self {
            text: text.into(),
            ws,
            start_time: None,
            end_time: None,
            confidence: None,
            was_split: false,
        }
    }
}

/// A sentence as a half-open token index range. Times are derived from the
/// first/last contained token, never set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
}

impl Sentence {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            start_time: None,
            end_time: None,
        }
    }
}

/// A named entity as a half-open token index range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
}

impl Entity {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            start_time: None,
            end_time: None,
        }
    }
}

/// Output of the transcript unit extractor: the ordered unit sequence plus
/// the text handed to tokenization.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitExtraction {
    pub full_text: String,
    pub units: Vec<TranscriptUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
    pub entities: Vec<Entity>,
    /// Timestamped rendering, one `[HH:MM:SS.mmm] sentence` line per
    /// sentence.
    pub transcript: String,
}

impl Document {
    /// Surface text of the token range `start..end`, with the trailing
    /// whitespace of the last token dropped.
    pub fn span_text(&self, start: usize, end: usize) -> String {
        span_text(&self.tokens, start, end)
    }
}

pub(crate) fn span_text(tokens: &[Token], start: usize, end: usize) -> String {
    let end = end.min(tokens.len());
    if start >= end {
        return String::new();
    }
    let mut out = String::new();
    for (i, token) in tokens[start..end].iter().enumerate() {
        out.push_str(&token.text);
        if token.ws && start + i + 1 < end {
            out.push(' ');
        }
    }
    out
}
