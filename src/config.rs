#[derive(Debug, Clone)]
pub struct AlignerConfig {
    /// Language code steering the default blank pipeline (clitic splitting is
    /// English-only).
    pub lang: String,
    /// Name of a pretrained linguistic pipeline. The crate bundles none, so a
    /// set name requires the pipeline itself to be injected at build time.
    pub pipeline: Option<String>,
    /// True: engine output carries per-word entries (shape `segments[].words[]`).
    /// False: one text span per segment.
    pub word_level: bool,
    pub segments_key: String,
    pub words_key: String,
}

impl AlignerConfig {
    pub const DEFAULT_LANG: &'static str = "en";
    pub const DEFAULT_SEGMENTS_KEY: &'static str = "segments";
    pub const DEFAULT_WORDS_KEY: &'static str = "words";

    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..Self::default()
        }
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            lang: Self::DEFAULT_LANG.to_string(),
            pipeline: None,
            word_level: true,
            segments_key: Self::DEFAULT_SEGMENTS_KEY.to_string(),
            words_key: Self::DEFAULT_WORDS_KEY.to_string(),
        }
    }
}
