use anyhow::{Context, Result};
use boolcore::loader::load_collection;
use boolcore::{Collection, InvertedIndex, PostingsList, Query, Tokenizer};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

mod demo;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a Boolean inverted index and run queries against it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a JSON/JSONL file or directory and print it as JSON
    Build {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Tokenizer: whitespace or words
        #[arg(long, default_value = "whitespace")]
        tokenizer: Tokenizer,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Evaluate a query tree given as JSON, e.g. '{"and":[{"term":"quick"},{"term":"fox"}]}'
    Query {
        #[arg(long)]
        input: String,
        #[arg(long)]
        query: String,
        #[arg(long, default_value = "whitespace")]
        tokenizer: Tokenizer,
        /// Print the text of each matching document
        #[arg(long, default_value_t = false)]
        show_text: bool,
    },
    /// Run the sample queries over the built-in five-document collection
    Demo {
        #[arg(long, default_value = "whitespace")]
        tokenizer: Tokenizer,
    },
}

#[derive(Serialize)]
struct IndexDump<'a> {
    created_at: String,
    tokenizer: &'static str,
    num_docs: usize,
    num_terms: usize,
    #[serde(flatten)]
    index: &'a InvertedIndex,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, tokenizer, pretty } => build_index(&input, tokenizer, pretty),
        Commands::Query { input, query, tokenizer, show_text } => run_query(&input, &query, tokenizer, show_text),
        Commands::Demo { tokenizer } => demo::run(tokenizer),
    }
}

fn build_index(input: &str, tokenizer: Tokenizer, pretty: bool) -> Result<()> {
    let collection = load_collection(input)?;
    let index = InvertedIndex::build(&collection, tokenizer);
    tracing::info!(num_docs = index.num_docs(), num_terms = index.num_terms(), "index build complete");

    let dump = IndexDump {
        created_at: rfc3339(time::OffsetDateTime::now_utc())?,
        tokenizer: tokenizer.name(),
        num_docs: index.num_docs(),
        num_terms: index.num_terms(),
        index: &index,
    };
    let json = if pretty { serde_json::to_string_pretty(&dump)? } else { serde_json::to_string(&dump)? };
    println!("{json}");
    Ok(())
}

fn run_query(input: &str, query: &str, tokenizer: Tokenizer, show_text: bool) -> Result<()> {
    let query: Query = serde_json::from_str(query).context("query must be a JSON query tree")?;
    let collection = load_collection(input)?;
    let index = InvertedIndex::build(&collection, tokenizer);
    let result = index.evaluate(&query);
    print_result(&query, &result, show_text.then_some(&collection));
    Ok(())
}

fn rfc3339(at: time::OffsetDateTime) -> Result<String> {
    at.format(&time::format_description::well_known::Rfc3339)
        .context("formatting created_at")
}

pub(crate) fn print_result(query: &Query, result: &PostingsList, texts: Option<&Collection>) {
    println!("Query: {query}");
    println!("Result (Doc IDs): {:?}", result.as_slice());
    if let Some(collection) = texts {
        for &doc_id in result {
            println!("  Doc {doc_id}: {}", collection.get(doc_id).unwrap_or_default());
        }
    }
}
