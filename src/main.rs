//! SimText command-line interface
//!
//! Compares documents pairwise with several similarity algorithms and
//! reports per-pair scores, a confidence verdict and document statistics.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simtext::compare::compare_files;
use simtext::loader::{load_documents, load_stopwords};
use simtext::models::{Algorithm, ComparisonParams, ParamsError};
use simtext::output::{write_result, write_stats, OutputFormat};
use simtext::similarity::calculate_similarity;
use simtext::stats::analyze_document_with_top;
use simtext::tokenize::{Stopwords, TokenizerConfig};

#[derive(Parser)]
#[command(name = "simtext")]
#[command(about = "Multi-algorithm text similarity checker")]
#[command(version)]
struct Cli {
    /// Log progress information (overridden by SIMTEXT_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Similarity algorithm (CLI version, mirrors models::Algorithm)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Cosine over term frequencies
    Cosine,
    /// Cosine over IDF-weighted term frequencies
    Tfidf,
    /// Jaccard over character shingles
    JaccardChar,
    /// Jaccard over word shingles
    JaccardWord,
    /// Normalized edit distance
    Levenshtein,
    /// The four core algorithms plus a confidence verdict
    All,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(algorithm: CliAlgorithm) -> Self {
        match algorithm {
            CliAlgorithm::Cosine => Algorithm::Cosine,
            CliAlgorithm::Tfidf => Algorithm::Tfidf,
            CliAlgorithm::JaccardChar => Algorithm::JaccardChar,
            CliAlgorithm::JaccardWord => Algorithm::JaccardWord,
            CliAlgorithm::Levenshtein => Algorithm::Levenshtein,
            CliAlgorithm::All => Algorithm::All,
        }
    }
}

/// Output format for comparison results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliOutputFormat {
    /// One line per document pair
    Simple,
    /// Per-algorithm breakdown with verdict and extras
    Detailed,
    /// Full result as JSON
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Simple => OutputFormat::Simple,
            CliOutputFormat::Detailed => OutputFormat::Detailed,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every pair of the given documents
    ///
    /// Parameters default to ComparisonParams::default(); any option given
    /// explicitly overrides the default.
    Compare {
        /// Documents to compare (at least two)
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,

        /// Algorithm to use [default: cosine]
        #[arg(long, value_enum)]
        algorithm: Option<CliAlgorithm>,

        /// Drop stopwords before scoring
        #[arg(long)]
        ignore_stopwords: bool,

        /// Stopword list, one word per line
        #[arg(long)]
        stopwords_file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "simple")]
        output: CliOutputFormat,

        /// Shingle width for both Jaccard variants [default: 3]
        #[arg(long)]
        shingle_size: Option<usize>,

        /// Character shingle width (overrides --shingle-size)
        #[arg(long)]
        char_shingle_size: Option<usize>,

        /// Word shingle width (overrides --shingle-size)
        #[arg(long)]
        word_shingle_size: Option<usize>,

        /// Only report pairs whose best score reaches this value (0.0-1.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Report per-pair processing time
        #[arg(long)]
        timing: bool,

        /// Include sentence-level alignment
        #[arg(long)]
        sentences: bool,

        /// Include per-document statistics
        #[arg(long)]
        stats: bool,

        /// Number of top words in statistics [default: 5]
        #[arg(long)]
        top_words: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// Show statistics for one or more documents
    Stats {
        /// Documents to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of top words to list
        #[arg(long, default_value = "5")]
        top: usize,

        /// Drop stopwords before counting
        #[arg(long)]
        ignore_stopwords: bool,

        /// Stopword list, one word per line
        #[arg(long)]
        stopwords_file: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Benchmark similarity algorithms on synthetic documents
    Benchmark {
        /// Number of iterations per algorithm
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Words per synthetic document
        #[arg(long, default_value = "2000")]
        size: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SIMTEXT_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare {
            files,
            algorithm,
            ignore_stopwords,
            stopwords_file,
            output,
            shingle_size,
            char_shingle_size,
            word_shingle_size,
            threshold,
            timing,
            sentences,
            stats,
            top_words,
            quiet,
        } => {
            let defaults = ComparisonParams::default();

            // Overlay user-specified values onto defaults
            let params = ComparisonParams {
                algorithm: algorithm.map(Algorithm::from).unwrap_or(defaults.algorithm),
                char_shingle_size: char_shingle_size
                    .or(shingle_size)
                    .unwrap_or(defaults.char_shingle_size),
                word_shingle_size: word_shingle_size
                    .or(shingle_size)
                    .unwrap_or(defaults.word_shingle_size),
                threshold: threshold.unwrap_or(defaults.threshold),
                ignore_stopwords,
                align_sentences: sentences,
                include_stats: stats,
                top_words: top_words.unwrap_or(defaults.top_words),
                show_timings: timing,
            };

            let result = compare_files(&files, stopwords_file.as_deref(), &params, !quiet)?;
            info!(
                reported = result.summary.pairs_reported,
                compared = result.summary.pairs_compared,
                "comparison finished"
            );

            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_result(&result, output.into(), &mut handle)?;
            handle.flush()?;
        }

        Commands::Stats {
            files,
            top,
            ignore_stopwords,
            stopwords_file,
            json,
        } => {
            let stopwords = match stopwords_file {
                Some(path) => load_stopwords(&path)?,
                None => Stopwords::default(),
            };
            let tokenizer = TokenizerConfig::new(stopwords, ignore_stopwords);

            let entries: Vec<_> = load_documents(&files)?
                .into_iter()
                .map(|doc| {
                    let tokens = tokenizer.process_text(&doc.text);
                    let stats = analyze_document_with_top(&doc.text, &tokens, top);
                    (doc.name, stats)
                })
                .collect();

            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_stats(&entries, json, &mut handle)?;
            handle.flush()?;
        }

        Commands::Benchmark { iterations, size } => {
            run_benchmark(iterations, size)?;
        }
    }

    Ok(())
}

/// Build a deterministic synthetic document of `size` words.
///
/// `variation` in 0..10 controls how many words per ten differ from the base
/// document.
fn synthetic_document(size: usize, variation: usize) -> String {
    (0..size)
        .map(|i| {
            if i % 10 < variation {
                format!("variant{}", i % 503)
            } else {
                format!("word{}", (i * 7) % 211)
            }
        })
        .enumerate()
        .map(|(i, word)| if i % 12 == 11 { format!("{}.", word) } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run similarity benchmark to measure performance.
fn run_benchmark(iterations: usize, size: usize) -> Result<(), ParamsError> {
    use std::time::Instant;

    println!("=== Similarity Benchmark ===");
    println!("Iterations: {}", iterations);
    println!("Document size: {} words", size);

    let params = ComparisonParams::default();
    let tokenizer = TokenizerConfig::default();
    let doc_a = synthetic_document(size, 0);
    let doc_b = synthetic_document(size, 3);

    let algorithms = [
        Algorithm::Cosine,
        Algorithm::Tfidf,
        Algorithm::JaccardChar,
        Algorithm::JaccardWord,
        Algorithm::All,
    ];

    for algorithm in algorithms {
        println!("\n{}:", algorithm.display_name());
        let start = Instant::now();
        let mut score = 0.0;
        for _ in 0..iterations {
            score = calculate_similarity(&doc_a, &doc_b, algorithm, &params, &tokenizer)?;
        }
        let elapsed = start.elapsed();
        let per_comparison = elapsed.as_secs_f64() / iterations.max(1) as f64;
        println!("  Score: {:.4}", score);
        println!("  Total time: {:.3}s", elapsed.as_secs_f64());
        println!("  Per comparison: {:.3}ms", per_comparison * 1000.0);
        if per_comparison > 0.0 {
            println!("  Comparisons/sec: {:.0}", 1.0 / per_comparison);
        }
    }

    Ok(())
}
