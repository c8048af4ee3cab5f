use crate::alignment::matcher::assign_unit_timestamps;
use crate::pipeline::blank::{split_sentences, tokenize_blank};
use crate::pipeline::traits::{LanguagePipeline, UnitAligner};
use crate::types::{Entity, Token, TranscriptUnit};

/// Rule-based stand-in for a pretrained linguistic pipeline, the counterpart
/// of a blank model: real tokenization, punctuation-based sentence
/// boundaries, no entity recognizer.
pub struct BlankPipeline {
    split_clitics: bool,
}

impl BlankPipeline {
    pub fn new(lang: &str) -> Self {
        // Clitic splitting is an English tokenizer exception set.
        let base = lang.split(['-', '_']).next().unwrap_or(lang);
        Self {
            split_clitics: base.eq_ignore_ascii_case("en"),
        }
    }
}

impl LanguagePipeline for BlankPipeline {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize_blank(text, self.split_clitics)
    }

    fn segment_sentences(&self, tokens: &[Token]) -> Vec<(usize, usize)> {
        split_sentences(tokens)
    }

    fn extract_entities(&self, _tokens: &[Token]) -> Vec<Entity> {
        Vec::new()
    }
}

pub struct StreamingUnitAligner;

impl UnitAligner for StreamingUnitAligner {
    fn assign(&self, tokens: &mut [Token], units: &[TranscriptUnit]) {
        assign_unit_timestamps(tokens, units);
    }
}
