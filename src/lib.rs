pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::AlignerConfig;
pub use error::AlignmentError;
pub use pipeline::builder::WhisperAlignerBuilder;
pub use pipeline::defaults::{BlankPipeline, StreamingUnitAligner};
pub use pipeline::runtime::WhisperAligner;
pub use pipeline::traits::{LanguagePipeline, UnitAligner};
pub use types::{Document, Entity, Sentence, Token, TranscriptUnit, UnitExtraction};
