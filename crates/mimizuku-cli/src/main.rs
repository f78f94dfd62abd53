//! Mimizuku CLI main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use mimizuku_el::{ElError, ElReasoner, JsonOntologyLoader};
use mimizuku_model::{ConceptIri, Ontology};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mimizuku", version, about = "EL subsumption reasoner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a concept name and print every concept name subsuming it
    Classify {
        /// Path to the ontology document (JSON)
        #[arg(short, long)]
        ontology: PathBuf,

        /// Concept name to classify
        concept: String,
    },

    /// Print a summary of the loaded ontology
    Summary {
        /// Path to the ontology document (JSON)
        #[arg(short, long)]
        ontology: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Classify { ontology, concept } => {
            let ontology = load_ontology(&ontology)?;
            classify(&ontology, &concept)
        }
        Command::Summary { ontology } => {
            let ontology = load_ontology(&ontology)?;
            summarize(&ontology);
            Ok(())
        }
    }
}

fn load_ontology(path: &PathBuf) -> Result<Ontology> {
    let ontology = JsonOntologyLoader.load_from_path(path)?;
    let summary = ontology.summary();
    tracing::debug!(
        axioms = summary.axiom_count,
        concepts = summary.concept_count,
        "ontology loaded"
    );
    Ok(ontology)
}

fn classify(ontology: &Ontology, concept: &str) -> Result<()> {
    let reasoner = ElReasoner::new(ontology);
    for warning in reasoner.warnings() {
        eprintln!("warning: {}", warning);
    }

    match reasoner.classify(&ConceptIri::new(concept)) {
        Ok(subsumers) => {
            for name in subsumers {
                println!("{}", name);
            }
            Ok(())
        }
        Err(err @ ElError::UnknownConceptName(_)) => {
            eprintln!("input error: {}", err);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

fn summarize(ontology: &Ontology) {
    let summary = ontology.summary();
    println!("There are {} axioms in the TBox.", summary.axiom_count);
    println!("There are {} concepts in the ontology.", summary.concept_count);
    println!(
        "There are {} concept names in the ontology.",
        summary.concept_name_count
    );
    println!("There are {} roles in the ontology.", summary.role_count);
}
