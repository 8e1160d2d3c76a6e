use anyhow::{Context, Result};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::analyzer::Analyzer;

/// Runs a MeCab-compatible command line analyzer, one process per call.
#[derive(Debug, Clone)]
pub struct MecabAnalyzer {
    binary: PathBuf,
    dictionary_dir: PathBuf,
}

impl MecabAnalyzer {
    pub fn new(dictionary_dir: PathBuf) -> Self {
        Self {
            binary: PathBuf::from("mecab"),
            dictionary_dir,
        }
    }

    pub fn with_binary(mut self, binary: PathBuf) -> Self {
        self.binary = binary;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn dictionary_dir(&self) -> &Path {
        &self.dictionary_dir
    }
}

impl Analyzer for MecabAnalyzer {
    fn analyze(&self, text: &str) -> Result<String> {
        let mut child = Command::new(&self.binary)
            .arg("-d")
            .arg(&self.dictionary_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to invoke analyzer {}", self.binary.display()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("analyzer stdin was not captured"))?;

        // The child may fill its stdout pipe before it has read all of its
        // input, so feed stdin from a separate thread while we drain output.
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(text.as_bytes()));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .map_err(|_| anyhow::anyhow!("analyzer stdin writer panicked"))?;
            let output = output.with_context(|| "failed to read analyzer output")?;
            Ok::<_, anyhow::Error>((output, written))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "analyzer {} failed with status {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            );
        }
        // An analyzer may exit successfully without consuming all of stdin.
        if let Err(err) = written {
            if err.kind() != ErrorKind::BrokenPipe {
                return Err(err).with_context(|| "failed to write text to analyzer stdin");
            }
        }

        String::from_utf8(output.stdout).with_context(|| "analyzer output was not valid UTF-8")
    }
}
