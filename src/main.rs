use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use corpus_annotate::analyzer::MecabAnalyzer;
use corpus_annotate::pipeline::{build_sample, run_pipeline, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "corpus-annotate")]
#[command(version, about = "Annotate corpus text files with morphological tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Annotate every corpus file and write one JSON document per file
    Build {
        /// Directory containing the corpus text files
        #[arg(long, default_value = "corpus")]
        corpus: PathBuf,

        /// Directory receiving the JSON documents
        #[arg(short, long, default_value = "src/assets/parsed")]
        output: PathBuf,

        /// Analyzer dictionary directory
        #[arg(long, default_value = "unidic-chuko-v202512")]
        dic: PathBuf,

        /// Analyzer executable
        #[arg(long, default_value = "mecab")]
        mecab: PathBuf,

        /// File extension used to discover corpus files
        #[arg(long, default_value = "txt")]
        extension: String,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Annotate a single file and print the JSON document to stdout
    Inspect {
        /// Corpus text file
        input: PathBuf,

        /// Analyzer dictionary directory
        #[arg(long, default_value = "unidic-chuko-v202512")]
        dic: PathBuf,

        /// Analyzer executable
        #[arg(long, default_value = "mecab")]
        mecab: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            corpus,
            output,
            dic,
            mecab,
            extension,
            quiet,
        } => {
            let config = PipelineConfig::new(corpus, output, dic).with_extension(extension);
            build(config, mecab, quiet)
        }
        Commands::Inspect { input, dic, mecab } => inspect(input, dic, mecab),
    }
}

fn build(config: PipelineConfig, mecab: PathBuf, quiet: bool) -> Result<()> {
    if !quiet {
        println!("[*] Corpus: {}", config.corpus_dir.display());
        println!("[*] Output: {}", config.output_dir.display());
        println!("[*] Dictionary: {}", config.dictionary_dir.display());
    }

    let analyzer = MecabAnalyzer::new(config.dictionary_dir.clone()).with_binary(mecab);

    let summary = run_pipeline(&config, &analyzer, |path| {
        if !quiet {
            println!("[+] wrote {}", path.display());
        }
    })?;

    if !quiet {
        for path in &summary.skipped {
            eprintln!("[!] Skipped {}: empty body", path.display());
        }
        println!(
            "\n[✓] Done! {} written, {} skipped",
            summary.written.len(),
            summary.skipped.len()
        );
    }

    Ok(())
}

fn inspect(input: PathBuf, dic: PathBuf, mecab: PathBuf) -> Result<()> {
    if !input.is_file() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let analyzer = MecabAnalyzer::new(dic).with_binary(mecab);

    match build_sample(&input, &analyzer)? {
        Some((_, sample)) => {
            let json = serde_json::to_string_pretty(&sample)
                .with_context(|| format!("failed to serialize {}", input.display()))?;
            println!("{json}");
        }
        None => eprintln!("[!] {} has an empty body; nothing to annotate", input.display()),
    }

    Ok(())
}
