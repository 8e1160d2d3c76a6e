pub mod analyzer;
pub mod core;
pub mod export;
pub mod pipeline;

pub use core::model::{CorpusSample, Token};
