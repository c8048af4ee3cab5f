use crate::config::AlignerConfig;
use crate::error::AlignmentError;
use crate::pipeline::defaults::{BlankPipeline, StreamingUnitAligner};
use crate::pipeline::runtime::{WhisperAligner, WhisperAlignerParts};
use crate::pipeline::traits::{LanguagePipeline, UnitAligner};

pub struct WhisperAlignerBuilder {
    config: AlignerConfig,
    pipeline: Option<Box<dyn LanguagePipeline>>,
    unit_aligner: Option<Box<dyn UnitAligner>>,
}

impl WhisperAlignerBuilder {
    pub fn new(config: AlignerConfig) -> Self {
        Self {
            config,
            pipeline: None,
            unit_aligner: None,
        }
    }

    pub fn with_pipeline(mut self, pipeline: Box<dyn LanguagePipeline>) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    pub fn with_unit_aligner(mut self, unit_aligner: Box<dyn UnitAligner>) -> Self {
        self.unit_aligner = Some(unit_aligner);
        self
    }

    pub fn build(self) -> Result<WhisperAligner, AlignmentError> {
        let pipeline = match self.pipeline {
            Some(pipeline) => {
                if let Some(name) = &self.config.pipeline {
                    tracing::debug!(
                        pipeline = name.as_str(),
                        "injected pipeline takes precedence over the configured name"
                    );
                }
                pipeline
            }
            None => {
                if let Some(name) = &self.config.pipeline {
                    // Pretrained models are not bundled; loading them is the
                    // caller's concern.
                    return Err(AlignmentError::invalid_config(format!(
                        "pretrained pipeline `{name}` is not bundled; supply it via with_pipeline"
                    )));
                }
                Box::new(BlankPipeline::new(&self.config.lang))
            }
        };

        Ok(WhisperAligner::from_parts(WhisperAlignerParts {
            config: self.config,
            pipeline,
            unit_aligner: self
                .unit_aligner
                .unwrap_or_else(|| Box::new(StreamingUnitAligner)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entity, Token, TranscriptUnit};

    struct NullPipeline;

    impl LanguagePipeline for NullPipeline {
        fn tokenize(&self, _text: &str) -> Vec<Token> {
            Vec::new()
        }

        fn segment_sentences(&self, _tokens: &[Token]) -> Vec<(usize, usize)> {
            Vec::new()
        }

        fn extract_entities(&self, _tokens: &[Token]) -> Vec<Entity> {
            Vec::new()
        }
    }

    struct NoopAligner;

    impl UnitAligner for NoopAligner {
        fn assign(&self, _tokens: &mut [Token], _units: &[TranscriptUnit]) {}
    }

    #[test]
    fn build_defaults_to_blank_pipeline() {
        let aligner = WhisperAlignerBuilder::new(AlignerConfig::default()).build();
        assert!(aligner.is_ok());
    }

    #[test]
    fn build_fails_on_named_pipeline_without_injection() {
        let config = AlignerConfig {
            pipeline: Some("en_core_web_sm".to_string()),
            ..AlignerConfig::default()
        };
        let err = WhisperAlignerBuilder::new(config).build().unwrap_err();
        assert!(matches!(err, AlignmentError::InvalidConfig { .. }));
        assert!(err.to_string().contains("en_core_web_sm"));
    }

    #[test]
    fn injected_pipeline_satisfies_a_named_one() {
        let config = AlignerConfig {
            pipeline: Some("en_core_web_sm".to_string()),
            ..AlignerConfig::default()
        };
        let aligner = WhisperAlignerBuilder::new(config)
            .with_pipeline(Box::new(NullPipeline))
            .build();
        assert!(aligner.is_ok());
    }

    #[test]
    fn custom_unit_aligner_is_accepted() {
        let aligner = WhisperAlignerBuilder::new(AlignerConfig::default())
            .with_unit_aligner(Box::new(NoopAligner))
            .build();
        assert!(aligner.is_ok());
    }
}
