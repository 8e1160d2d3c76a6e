pub mod mecab;
pub mod normalize;

pub use mecab::MecabAnalyzer;
pub use normalize::{parse_tokens, token_from_line};

use anyhow::Result;

/// Text-in, text-out boundary to a morphological analyzer.
pub trait Analyzer {
    /// Analyze `text` and return the analyzer's raw line-oriented output.
    fn analyze(&self, text: &str) -> Result<String>;
}
