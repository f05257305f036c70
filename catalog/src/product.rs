//! Product records and the built-in demo catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicemart_embeddings::Embedding;

/// Opaque product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog product.
///
/// Products are created once during seeding and never mutated; the
/// embedding covers the description and feature text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identity.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Image reference.
    pub image: String,

    /// Free-text description.
    pub description: String,

    /// Ordered feature strings.
    pub features: Vec<String>,

    /// Precomputed embedding, present for every searchable product.
    pub embedding: Option<Embedding>,
}

impl Product {
    /// Build a product from a seed definition and its embedding.
    pub fn from_seed(seed: &ProductSeed, embedding: Embedding) -> Self {
        Self {
            id: ProductId::new(),
            name: seed.name.clone(),
            image: seed.image.clone(),
            description: seed.description.clone(),
            features: seed.features.clone(),
            embedding: Some(embedding),
        }
    }
}

/// A product definition before its embedding has been computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSeed {
    /// Display name.
    pub name: String,

    /// Image reference.
    pub image: String,

    /// Free-text description.
    pub description: String,

    /// Ordered feature strings.
    pub features: Vec<String>,
}

impl ProductSeed {
    /// Create a new seed definition.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            description: description.into(),
            features,
        }
    }

    /// The text the embedding is computed over: description followed by
    /// the feature strings, space-separated.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.description, self.features.join(" "))
    }
}

/// The built-in demo catalog.
pub fn demo_catalog() -> Vec<ProductSeed> {
    vec![
        ProductSeed::new(
            "iPhone",
            "https://i.imgur.com/pLVNsJK.png",
            "The iPhone is Apple's flagship smartphone, known for elegant design, integrated ecosystem, and powerful performance. It offers a smooth, secure, and optimized user experience.",
            vec![
                "Super Retina XDR display".to_string(),
                "A16 Bionic chip".to_string(),
                "Advanced camera system with Night Mode and 4K".to_string(),
                "Face ID".to_string(),
                "5G & Wi-Fi 6".to_string(),
                "IP68 water and dust resistance".to_string(),
                "iOS with regular updates".to_string(),
            ],
        ),
        ProductSeed::new(
            "iPad",
            "https://i.imgur.com/F0VFx7n.jpeg",
            "The iPad is Apple's versatile tablet designed for education, work, and creativity. High-resolution display and Apple Pencil support.",
            vec![
                "Liquid Retina 10.9\" display".to_string(),
                "A14 Bionic chip".to_string(),
                "Apple Pencil + keyboard support".to_string(),
                "iPadOS multitasking".to_string(),
                "Long battery life (10h)".to_string(),
            ],
        ),
        ProductSeed::new(
            "MacBook Pro",
            "https://i.imgur.com/CLR0nMw.jpeg",
            "MacBook Pro is Apple's most advanced laptop, perfect for developers and creators.",
            vec![
                "M2 Pro/Max chip".to_string(),
                "Liquid Retina XDR display".to_string(),
                "Up to 96 GB RAM & 8 TB SSD".to_string(),
                "22h battery life".to_string(),
                "Touch ID".to_string(),
                "macOS".to_string(),
            ],
        ),
        ProductSeed::new(
            "AirPods",
            "https://i.imgur.com/Dh8ntZd.jpeg",
            "Wireless smart earbuds with immersive audio and instant Apple ecosystem connection.",
            vec![
                "Spatial Audio".to_string(),
                "Noise Cancellation".to_string(),
                "Transparency mode".to_string(),
                "H1/H2 chip".to_string(),
                "Touch controls".to_string(),
                "24h battery with case".to_string(),
            ],
        ),
    ]
}
