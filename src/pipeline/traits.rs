use crate::types::{Entity, Token, TranscriptUnit};

/// The external linguistic pipeline: tokenization plus sentence and entity
/// segmentation. The alignment core never re-implements any of these; a
/// pretrained model wraps into this trait, and the bundled fallback is the
/// rule-based blank pipeline.
pub trait LanguagePipeline: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Half-open token index ranges covering the whole token sequence, in
    /// order.
    fn segment_sentences(&self, tokens: &[Token]) -> Vec<(usize, usize)>;

    /// Entity mentions with unresolved times. A pipeline without a
    /// recognizer returns none.
    fn extract_entities(&self, tokens: &[Token]) -> Vec<Entity>;
}

pub trait UnitAligner: Send + Sync {
    /// Assigns unit times onto the tokens in place, in document order.
    fn assign(&self, tokens: &mut [Token], units: &[TranscriptUnit]);
}
