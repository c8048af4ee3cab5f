use std::path::Path;

use serde_json::Value;

use crate::alignment::extract::{extract_segment_level, extract_word_level};
use crate::alignment::propagate::{assign_entity_times, assign_sentence_times, render_transcript};
use crate::config::AlignerConfig;
use crate::error::AlignmentError;
use crate::pipeline::traits::{LanguagePipeline, UnitAligner};
use crate::types::{Document, Sentence};

pub struct WhisperAligner {
    config: AlignerConfig,
    pipeline: Box<dyn LanguagePipeline>,
    unit_aligner: Box<dyn UnitAligner>,
}

impl std::fmt::Debug for WhisperAligner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperAligner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub(crate) struct WhisperAlignerParts {
    pub config: AlignerConfig,
    pub pipeline: Box<dyn LanguagePipeline>,
    pub unit_aligner: Box<dyn UnitAligner>,
}

impl WhisperAligner {
    pub(crate) fn from_parts(parts: WhisperAlignerParts) -> Self {
        Self {
            config: parts.config,
            pipeline: parts.pipeline,
            unit_aligner: parts.unit_aligner,
        }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Runs the full chain over one engine output: flatten units, tokenize,
    /// assign unit times onto tokens, segment, propagate times upward, and
    /// render the timestamped transcript.
    pub fn create_doc(&self, raw: &Value) -> Result<Document, AlignmentError> {
        let extraction = if self.config.word_level {
            extract_word_level(raw, &self.config.segments_key, &self.config.words_key)?
        } else {
            extract_segment_level(raw, &self.config.segments_key)?
        };

        let mut tokens = self.pipeline.tokenize(&extraction.full_text);
        self.unit_aligner.assign(&mut tokens, &extraction.units);

        let sentences = self
            .pipeline
            .segment_sentences(&tokens)
            .into_iter()
            .map(|(start, end)| Sentence::new(start, end))
            .collect();
        let entities = self.pipeline.extract_entities(&tokens);

        let mut doc = Document {
            tokens,
            sentences,
            entities,
            transcript: String::new(),
        };
        assign_sentence_times(&mut doc);
        assign_entity_times(&mut doc);
        doc.transcript = render_transcript(&doc);

        tracing::debug!(
            units = extraction.units.len(),
            tokens = doc.tokens.len(),
            timed = doc.tokens.iter().filter(|t| t.start_time.is_some()).count(),
            sentences = doc.sentences.len(),
            entities = doc.entities.len(),
            "aligned transcript units onto tokens"
        );

        Ok(doc)
    }

    pub fn create_doc_from_str(&self, json: &str) -> Result<Document, AlignmentError> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|e| AlignmentError::json("parse engine output", e))?;
        self.create_doc(&raw)
    }

    pub fn create_doc_from_path(&self, path: &Path) -> Result<Document, AlignmentError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignmentError::io("read engine output", e))?;
        self.create_doc_from_str(&data)
    }
}
