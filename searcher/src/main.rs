use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ir_core::document::{Document, TermView};
use ir_core::eval::{precision_recall, GroundTruth};
use ir_core::search::{boolean_search, vector_space_search, SearchOptions};
use ir_core::stopwords::{FrequencyFilter, FrequencyMode, FrequencyThresholds, StopwordList};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Query a text corpus with Boolean or tf-idf retrieval", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Corpus directory; every .txt file becomes one document
    #[arg(long)]
    corpus: String,
    /// Stopword file, one word per line
    #[arg(long)]
    stopwords: Option<String>,
    /// Frequency below which a term is too rare to keep
    #[arg(long, requires = "common")]
    rare: Option<f64>,
    /// Frequency above which a term is too common to keep
    #[arg(long, requires = "rare")]
    common: Option<f64>,
    /// Frequency definition: "document" or "collection"
    #[arg(long, default_value = "document")]
    freq_mode: String,
    /// Search the stopword-filtered term view
    #[arg(long, default_value_t = false)]
    filter: bool,
    /// Stem query and document terms
    #[arg(long, default_value_t = false)]
    stem: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Conjunctive Boolean search
    Boolean {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Only print matching documents
        #[arg(long, default_value_t = false)]
        matches_only: bool,
        query: String,
    },
    /// Vector Space Model search with tf-idf scoring
    Vsm {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Number of results to print
        #[arg(long, default_value_t = 10)]
        top: usize,
        query: String,
    },
    /// Precision/recall of a Boolean search against ground truth
    Eval {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// JSON file mapping query terms to relevant document names
        #[arg(long)]
        ground_truth: String,
        term: String,
    },
}

#[derive(Serialize)]
struct Hit {
    score: f64,
    doc_id: u32,
    title: String,
}

#[derive(Serialize)]
struct Evaluation {
    term: String,
    precision: f64,
    recall: f64,
    retrieved: usize,
    relevant: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Boolean {
            corpus,
            matches_only,
            query,
        } => run_boolean(&corpus, matches_only, &query),
        Commands::Vsm { corpus, top, query } => run_vsm(&corpus, top, &query),
        Commands::Eval {
            corpus,
            ground_truth,
            term,
        } => run_eval(&corpus, &ground_truth, &term),
    }
}

fn run_boolean(args: &CorpusArgs, matches_only: bool, query: &str) -> Result<()> {
    let collection = prepare_collection(args)?;
    let options = SearchOptions {
        view: TermView::from_flags(args.filter, args.stem),
        matches_only,
    };
    for (score, doc) in boolean_search(query, &collection, options) {
        print_hit(score, doc)?;
    }
    Ok(())
}

fn run_vsm(args: &CorpusArgs, top: usize, query: &str) -> Result<()> {
    let collection = prepare_collection(args)?;
    let view = TermView::from_flags(args.filter, args.stem);
    let mut results = vector_space_search(query, &collection, view);
    results.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    for (score, doc) in results.into_iter().take(top) {
        print_hit(score, doc)?;
    }
    Ok(())
}

fn run_eval(args: &CorpusArgs, ground_truth: &str, term: &str) -> Result<()> {
    let collection = prepare_collection(args)?;
    let truth: GroundTruth = serde_json::from_str(
        &fs::read_to_string(ground_truth)
            .with_context(|| format!("reading ground truth {ground_truth}"))?,
    )
    .context("parsing ground truth JSON")?;

    let options = SearchOptions {
        view: TermView::from_flags(args.filter, args.stem),
        matches_only: true,
    };
    let retrieved: HashSet<u32> = boolean_search(term, &collection, options)
        .iter()
        .map(|&(_, doc)| doc.document_id)
        .collect();
    let relevant = truth.relevant_ids(term, &collection);
    let (precision, recall) = precision_recall(&retrieved, &relevant);

    let eval = Evaluation {
        term: term.to_string(),
        precision,
        recall,
        retrieved: retrieved.len(),
        relevant: relevant.len(),
    };
    println!("{}", serde_json::to_string(&eval)?);
    Ok(())
}

fn print_hit(score: f64, doc: &Document) -> Result<()> {
    let hit = Hit {
        score,
        doc_id: doc.document_id,
        title: doc.title.clone(),
    };
    println!("{}", serde_json::to_string(&hit)?);
    Ok(())
}

/// Load the corpus and materialize the term views the flags ask for.
fn prepare_collection(args: &CorpusArgs) -> Result<Vec<Document>> {
    let mut collection = load_corpus(Path::new(&args.corpus))?;

    if let Some(path) = &args.stopwords {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading stopword file {path}"))?;
        let list = StopwordList::from_text(&text);
        for doc in &mut collection {
            doc.apply_stopword_list(&list);
        }
    } else if let (Some(rare), Some(common)) = (args.rare, args.common) {
        let mode = parse_freq_mode(&args.freq_mode)?;
        let filter = FrequencyFilter::from_collection(
            &collection,
            mode,
            FrequencyThresholds { rare, common },
        );
        for doc in &mut collection {
            doc.apply_frequency_filter(&filter);
        }
    } else if args.filter {
        bail!("--filter needs --stopwords or --rare/--common thresholds");
    }

    if args.stem {
        for doc in &mut collection {
            doc.apply_stemming();
            if args.filter {
                doc.apply_stemming_filtered();
            }
        }
    }
    Ok(collection)
}

fn parse_freq_mode(mode: &str) -> Result<FrequencyMode> {
    match mode {
        "document" => Ok(FrequencyMode::DocumentFrequency),
        "collection" => Ok(FrequencyMode::CollectionFrequency),
        other => bail!("unknown frequency mode {other:?}, expected document or collection"),
    }
}

/// Read every .txt file under the corpus directory, in sorted path order,
/// assigning sequential document ids.
fn load_corpus(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        bail!("corpus {} is not a directory", dir.display());
    }
    let origin = dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus")
        .to_string();

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();

    let mut collection = Vec::with_capacity(files.len());
    for (doc_id, path) in files.iter().enumerate() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading document {}", path.display()))?;
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        collection.push(Document::from_raw_text(
            doc_id as u32,
            title,
            "unknown",
            origin.clone(),
            &text,
        ));
    }
    tracing::info!(num_docs = collection.len(), corpus = %dir.display(), "loaded corpus");
    Ok(collection)
}
