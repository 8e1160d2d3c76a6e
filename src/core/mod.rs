pub mod header;
pub mod model;

pub use header::resolve_source_and_text;
pub use model::{CorpusSample, Token};
