use serde::{Deserialize, Serialize};

/// One annotated text document, written as `<key>.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusSample {
    pub text: String,
    pub source: String,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub base: String,
    pub pos: String,
    pub reading: String,
}

impl CorpusSample {
    pub fn new(text: String, source: String, tokens: Vec<Token>) -> Self {
        Self {
            text,
            source,
            tokens,
        }
    }

    /// Surface forms joined back together, in token order.
    pub fn surface_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.surface.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}
