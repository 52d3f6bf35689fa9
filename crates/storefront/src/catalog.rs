//! Catalog manifest loading.
//!
//! The product catalog is a static JSON manifest read once at startup from
//! the content directory. The manifest is the source of truth for product
//! attributes and per-size stock; it is never mutated at runtime.

use std::fs;
use std::path::Path;

use khanjar_core::{Catalog, CatalogError, Product};
use thiserror::Error;

/// File name of the product manifest inside the content directory.
pub const MANIFEST_FILE: &str = "products.json";

/// Errors that can occur when loading the product manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for the product schema.
    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The manifest violates a catalog invariant.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Load and validate the product manifest from the content directory.
///
/// # Errors
///
/// Returns a [`ManifestError`] if the file is unreadable, the JSON does not
/// match the product schema, or a catalog invariant is violated.
pub fn load(content_dir: &Path) -> Result<Catalog, ManifestError> {
    let path = content_dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&raw)
}

/// Parse and validate a manifest string.
///
/// # Errors
///
/// Returns a [`ManifestError`] on malformed JSON or invariant violations.
pub fn parse(raw: &str) -> Result<Catalog, ManifestError> {
    let products: Vec<Product> = serde_json::from_str(raw)?;
    Ok(Catalog::new(products)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn content_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content")
    }

    #[test]
    fn test_load_shipped_manifest() {
        let catalog = load(&content_dir()).unwrap();
        assert!(!catalog.is_empty());

        // The shipped manifest exercises both availability extremes
        assert!(catalog.products().iter().any(Product::is_sold_out));
        assert!(catalog.products().iter().any(|p| !p.is_sold_out()));
    }

    #[test]
    fn test_load_missing_dir() {
        let result = load(Path::new("/nonexistent/content"));
        assert!(matches!(result, Err(ManifestError::Io { .. })));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse("{ not json"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_sizes() {
        let raw = r#"[{
            "id": "tee-dup",
            "name": "Tee",
            "price": 225000,
            "rating": 5.0,
            "image": "/static/img/products/tee-dup.jpg",
            "category": "T-Shirts",
            "description": "",
            "material": "COTTON",
            "features": [],
            "inventory": [
                { "size": "M", "stock": 1 },
                { "size": "M", "stock": 2 }
            ]
        }]"#;
        assert!(matches!(parse(raw), Err(ManifestError::Invalid(_))));
    }
}
