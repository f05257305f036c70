//! Terminal shell for the Voicemart voice marketplace demo.

mod shell;

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use voicemart_catalog::{InMemoryCatalog, demo_catalog, seed_catalog};
use voicemart_embeddings::{EmbeddingProvider, OpenAiEmbeddings};
use voicemart_generation::{OpenAiGenerator, ResponseGenerator};
use voicemart_orchestrator::{Orchestrator, QueryConfig};
use voicemart_session::VoiceSession;

use crate::shell::{ConsoleNotifier, ConsoleSpeech, StdinTranscripts};

/// Voice-driven product discovery, minus the voice.
#[derive(Debug, Parser)]
#[command(name = "voicemart", version, about)]
struct Args {
    /// Minimum similarity for a product match.
    #[arg(long, default_value_t = 0.5)]
    threshold: f32,

    /// Maximum number of candidates per query.
    #[arg(long, default_value_t = 4)]
    limit: usize,

    /// Embedding model override.
    #[arg(long)]
    embedding_model: Option<String>,

    /// Chat model override.
    #[arg(long)]
    chat_model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut embeddings = OpenAiEmbeddings::new();
    if let Some(model) = args.embedding_model {
        embeddings = embeddings.with_model(model);
    }

    let mut generator = OpenAiGenerator::new();
    if let Some(model) = args.chat_model {
        generator = generator.with_model(model);
    }

    if !embeddings.is_available() || !generator.is_available() {
        bail!("OPENAI_API_KEY must be set");
    }

    let embeddings = Arc::new(embeddings);
    let catalog = Arc::new(InMemoryCatalog::new(embeddings.default_dimension()));

    let report = seed_catalog(catalog.as_ref(), embeddings.as_ref(), &demo_catalog())
        .await
        .context("seeding catalog")?;
    info!(
        "Catalog ready: {} seeded, {} failed",
        report.seeded, report.failed
    );

    let orchestrator = Orchestrator::builder(embeddings, catalog, Arc::new(generator))
        .with_config(
            QueryConfig::default()
                .with_threshold(args.threshold)
                .with_max_candidates(args.limit),
        )
        .build();

    println!("Voicemart — describe what you're looking for (Ctrl-D to quit).");

    let mut session = VoiceSession::new(
        StdinTranscripts::new(),
        ConsoleSpeech,
        ConsoleNotifier,
        orchestrator,
    );
    session.run().await?;

    Ok(())
}
