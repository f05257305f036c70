//! # Catalog
//!
//! This crate provides the product catalog for Voicemart:
//!
//! - **Product Model**: immutable records with precomputed embeddings
//! - **Catalog Store**: nearest-neighbor search behind [`CatalogStore`]
//! - **Seeding**: one-shot population of an empty store
//!
//! The store guarantees that every product it returns carries an
//! embedding of the store's dimensionality; candidates come back
//! best-first, filtered by a similarity threshold and capped at a
//! maximum count.

pub mod error;
pub mod product;
pub mod seed;
pub mod store;

pub use error::{CatalogError, Result};
pub use product::{Product, ProductId, ProductSeed, demo_catalog};
pub use seed::{SeedReport, seed_catalog};
pub use store::{CatalogStore, InMemoryCatalog};
