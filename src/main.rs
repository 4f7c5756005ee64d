use std::process::ExitCode;

use clap::Parser;

use muisti::config::Config;
use muisti::engine::Engine;
use muisti::errors::Error;
use muisti::ingest::{Document, ingest_all};
use muisti::lexical::LexicalEngine;
use muisti::present::{RecallOutcome, recall};

/// muisti - chunked document ingestion and retrieval presentation
///
/// Runs a fixed demo: ingests the built-in sample documents into the
/// configured store, then answers two fixed queries.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

const DEMO_QUERIES: [&str; 2] = [
    "How does muisti chunk documents?",
    "Tell me about neighbor graphs.",
];

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Error> {
    let config = Config::load()?;
    let mut engine = LexicalEngine::open(&config.store_path)?;

    let policy = config.chunk_policy()?;
    let documents = sample_documents();

    let report = ingest_all(&documents, &mut engine, &policy)?;
    println!(
        "Ingested {} documents ({} chunks) into {}",
        report.documents,
        report.chunks,
        config.store_path.display()
    );

    for query in DEMO_QUERIES {
        run_query(query, &mut engine, &config)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_query(query: &str, engine: &mut dyn Engine, config: &Config) -> Result<(), Error> {
    println!("\nSearching memory for: '{}'", query);

    match recall(query, engine, &config.recall_options())? {
        RecallOutcome::NoMatches => println!("No matching memories found."),
        RecallOutcome::Matches(memories) => {
            for memory in memories {
                println!("{}", memory.display);
            }
        }
    }

    Ok(())
}

fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "Algorithm Notes",
            "Layered proximity graphs answer nearest-neighbor queries by hopping between \
             levels. Sparse upper layers cross long distances in a few steps, while dense \
             lower layers refine the final candidates.",
        ),
        Document::new(
            "Muisti Features",
            "Muisti is a thin layer over a memory engine. It splits documents into \
             overlapping character windows and tags every chunk with its source name and \
             position. Recalled chunks come back as single-line previews ready for printing.",
        ),
        Document::new(
            "Field Guide",
            "A retrieval workflow starts long before any query is answered. Source material \
             arrives as whole documents, such as meeting notes, design writeups, and \
             reference pages. Storing them as single records makes recall coarse, because \
             one hit drags in pages of unrelated text. Splitting each document into windows \
             keeps every stored record focused on a few sentences, and overlapping the \
             windows means a sentence cut in half at one boundary appears whole in the next \
             chunk. When a query arrives, the engine ranks stored chunks against it and \
             returns the closest few. The presentation layer then renders each hit as a \
             single line, with the source document in brackets followed by the first \
             hundred characters of the chunk. That preview is usually enough to decide \
             whether the original document is worth opening. And when nothing in the store \
             relates to the query at all, saying so plainly beats returning weak matches.",
        ),
    ]
}
