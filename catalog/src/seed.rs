//! One-shot catalog seeding.

use tracing::{info, warn};

use voicemart_embeddings::{EmbeddingProvider, EmbeddingRequest};

use crate::error::Result;
use crate::product::{Product, ProductSeed};
use crate::store::CatalogStore;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Whether seeding was skipped because the store was populated.
    pub skipped: bool,

    /// Number of products inserted.
    pub seeded: usize,

    /// Number of seeds that failed to embed or insert.
    pub failed: usize,
}

/// Populate an empty catalog store.
///
/// Seeding is idempotent only at the coarsest granularity: if the store
/// already contains at least one product, nothing is inserted. It is not
/// per-item idempotent, so a partially seeded store is left as-is rather
/// than repaired. Individual seed failures are logged and skipped; the
/// remaining seeds still run.
pub async fn seed_catalog(
    store: &dyn CatalogStore,
    provider: &dyn EmbeddingProvider,
    seeds: &[ProductSeed],
) -> Result<SeedReport> {
    if store.count().await? > 0 {
        info!("Catalog already populated, skipping seeding");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    info!("Seeding catalog with {} products", seeds.len());

    let mut report = SeedReport::default();
    for seed in seeds {
        let embedded = match provider
            .embed(EmbeddingRequest::new(seed.embedding_text()))
            .await
        {
            Ok(response) => response.embedding,
            Err(err) => {
                warn!("Failed to embed {}: {err}", seed.name);
                report.failed += 1;
                continue;
            }
        };

        match store.insert(Product::from_seed(seed, embedded)).await {
            Ok(()) => {
                info!("Seeded {}", seed.name);
                report.seeded += 1;
            }
            Err(err) => {
                warn!("Failed to insert {}: {err}", seed.name);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
