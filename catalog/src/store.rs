//! Catalog stores.
//!
//! [`CatalogStore`] is the seam a managed vector database would plug
//! into; [`InMemoryCatalog`] is the bundled implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use voicemart_embeddings::{Embedding, normalize, rank_by_similarity};

use crate::error::{CatalogError, Result};
use crate::product::{Product, ProductId};

/// Trait for product catalog stores.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Number of products currently stored.
    async fn count(&self) -> Result<usize>;

    /// Insert a product.
    ///
    /// The product must carry an embedding of the store's dimensionality;
    /// a product without one is rejected so that search can never return
    /// an unembedded record.
    async fn insert(&self, product: Product) -> Result<()>;

    /// Nearest-neighbor search by similarity to `query`.
    ///
    /// Results are ordered best-first, exclude candidates scoring below
    /// `threshold`, and are capped at `limit`. An empty result is valid
    /// and means no product cleared the threshold.
    async fn search(
        &self,
        query: &Embedding,
        threshold: f32,
        limit: usize,
    ) -> Result<Vec<Product>>;
}

/// An in-memory catalog store using cosine similarity.
///
/// Stored embeddings are normalized on insert so repeated searches skip
/// the magnitude computation for the catalog side.
pub struct InMemoryCatalog {
    /// Stored products by id.
    products: Arc<RwLock<HashMap<ProductId, Product>>>,

    /// Expected dimension of embeddings.
    dimension: usize,
}

impl InMemoryCatalog {
    /// Create a new catalog expecting embeddings of `dimension`.
    pub fn new(dimension: usize) -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            dimension,
        }
    }

    /// The dimensionality this catalog indexes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get a product by id.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.products.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn count(&self) -> Result<usize> {
        Ok(self.products.read().await.len())
    }

    async fn insert(&self, mut product: Product) -> Result<()> {
        let Some(embedding) = product.embedding.as_mut() else {
            return Err(CatalogError::MissingEmbedding(product.name));
        };

        if embedding.len() != self.dimension {
            return Err(CatalogError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }

        normalize(embedding);

        debug!("Indexed product: {}", product.name);
        self.products.write().await.insert(product.id, product);
        Ok(())
    }

    async fn search(
        &self,
        query: &Embedding,
        threshold: f32,
        limit: usize,
    ) -> Result<Vec<Product>> {
        if query.len() != self.dimension {
            return Err(CatalogError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let products = self.products.read().await;

        let candidates: Vec<(String, Embedding)> = products
            .values()
            .filter_map(|p| {
                p.embedding
                    .as_ref()
                    .map(|e| (p.id.to_string(), e.clone()))
            })
            .collect();

        let ranked = rank_by_similarity(query, &candidates, threshold, limit)?;
        debug!(
            "Search matched {} of {} products",
            ranked.len(),
            products.len()
        );

        Ok(ranked
            .iter()
            .filter_map(|r| {
                products
                    .values()
                    .find(|p| p.id.to_string() == r.id)
                    .cloned()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductSeed;
    use pretty_assertions::assert_eq;

    fn product(name: &str, embedding: Embedding) -> Product {
        let seed = ProductSeed::new(name, "img", "desc", Vec::new());
        Product::from_seed(&seed, embedding)
    }

    #[tokio::test]
    async fn test_insert_requires_embedding() {
        let store = InMemoryCatalog::new(3);
        let mut p = product("Widget", vec![1.0, 0.0, 0.0]);
        p.embedding = None;

        let err = store.insert(p).await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingEmbedding(_)));
    }

    #[tokio::test]
    async fn test_insert_rejects_wrong_dimension() {
        let store = InMemoryCatalog::new(3);
        let p = product("Widget", vec![1.0, 0.0]);

        let err = store.insert(p).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_search_orders_best_first() {
        let store = InMemoryCatalog::new(3);
        store
            .insert(product("Exact", vec![1.0, 0.0, 0.0]))
            .await
            .unwrap();
        store
            .insert(product("Close", vec![0.8, 0.6, 0.0]))
            .await
            .unwrap();
        store
            .insert(product("Far", vec![0.0, 0.0, 1.0]))
            .await
            .unwrap();

        let results = store.search(&vec![1.0, 0.0, 0.0], 0.5, 4).await.unwrap();

        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Exact", "Close"]);
    }

    #[tokio::test]
    async fn test_search_caps_results() {
        let store = InMemoryCatalog::new(2);
        for i in 0..6 {
            store
                .insert(product(&format!("p{i}"), vec![1.0, i as f32 * 0.01]))
                .await
                .unwrap();
        }

        let results = store.search(&vec![1.0, 0.0], 0.0, 4).await.unwrap();
        assert_eq!(results.len(), 4);
    }

    #[tokio::test]
    async fn test_search_empty_store_is_empty_not_error() {
        let store = InMemoryCatalog::new(2);
        let results = store.search(&vec![1.0, 0.0], 0.5, 4).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_wrong_query_dimension() {
        let store = InMemoryCatalog::new(3);
        let err = store.search(&vec![1.0, 0.0], 0.5, 4).await.unwrap_err();
        assert!(matches!(err, CatalogError::DimensionMismatch { .. }));
    }

    #[tokio::test]
    async fn test_returned_products_keep_their_embedding() {
        let store = InMemoryCatalog::new(2);
        store
            .insert(product("Widget", vec![3.0, 4.0]))
            .await
            .unwrap();

        let results = store.search(&vec![1.0, 0.0], 0.0, 1).await.unwrap();
        let embedding = results[0].embedding.as_ref().unwrap();

        // Normalized on insert
        assert!((embedding[0] - 0.6).abs() < 1e-6);
        assert!((embedding[1] - 0.8).abs() < 1e-6);
    }
}
