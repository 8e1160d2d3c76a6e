use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analyzer::{parse_tokens, Analyzer};
use crate::core::{resolve_source_and_text, CorpusSample};
use crate::export::{Exporter, JsonExporter};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub corpus_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dictionary_dir: PathBuf,
    pub extension: String,
}

impl PipelineConfig {
    pub fn new(corpus_dir: PathBuf, output_dir: PathBuf, dictionary_dir: PathBuf) -> Self {
        Self {
            corpus_dir,
            output_dir,
            dictionary_dir,
            extension: "txt".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from("corpus"),
            PathBuf::from("src/assets/parsed"),
            PathBuf::from("unidic-chuko-v202512"),
        )
    }
}

/// Files processed by one run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    /// Inputs whose body was empty after header resolution.
    pub skipped: Vec<PathBuf>,
}

/// List corpus files with the configured extension, sorted by file name.
pub fn discover_corpus_files(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    if !config.corpus_dir.is_dir() {
        anyhow::bail!("Corpus dir not found: {}", config.corpus_dir.display());
    }

    let entries = fs::read_dir(&config.corpus_dir)
        .with_context(|| format!("failed to list {}", config.corpus_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext == config.extension.as_str());
        if matches && path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        anyhow::bail!(
            "No corpus files found in {}/*.{}",
            config.corpus_dir.display(),
            config.extension
        );
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Key used for the artifact name and the fallback source label.
pub fn sample_key(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("corpus file has no name: {}", path.display()))?;
    Ok(stem.to_string_lossy().into_owned())
}

/// Read and annotate one corpus file. Returns `None` when the body is empty.
pub fn build_sample<A: Analyzer + ?Sized>(
    path: &Path,
    analyzer: &A,
) -> Result<Option<(String, CorpusSample)>> {
    let key = sample_key(path)?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let (source, body) = resolve_source_and_text(&raw, &key);
    if body.is_empty() {
        return Ok(None);
    }

    let output = analyzer
        .analyze(&body)
        .with_context(|| format!("failed to analyze {}", path.display()))?;
    let tokens = parse_tokens(&output);

    Ok(Some((key, CorpusSample::new(body, source, tokens))))
}

/// Annotate every corpus file in order, writing one JSON artifact each.
///
/// Stops at the first failure; artifacts written before it stay on disk.
pub fn run_pipeline<A, F>(config: &PipelineConfig, analyzer: &A, mut on_written: F) -> Result<RunSummary>
where
    A: Analyzer + ?Sized,
    F: FnMut(&Path),
{
    let files = discover_corpus_files(config)?;
    let exporter = JsonExporter::new(config.output_dir.clone());
    fs::create_dir_all(exporter.out_dir())
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let mut summary = RunSummary::default();
    for path in files {
        let Some((key, sample)) = build_sample(&path, analyzer)? else {
            summary.skipped.push(path);
            continue;
        };
        let written = exporter.export(&key, &sample)?;
        on_written(&written);
        summary.written.push(written);
    }

    Ok(summary)
}
