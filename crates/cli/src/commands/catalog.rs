//! Catalog manifest tools.

use std::path::Path;

use khanjar_storefront::catalog::{self, ManifestError};

/// Validate the product manifest and log a per-category report.
///
/// # Errors
///
/// Returns a [`ManifestError`] if the manifest is unreadable, malformed, or
/// violates a catalog invariant.
pub fn validate(content_dir: &str) -> Result<(), ManifestError> {
    let loaded = catalog::load(Path::new(content_dir))?;

    tracing::info!(products = loaded.len(), "Manifest is valid");
    for (category, count) in loaded.count_by_category() {
        tracing::info!("  {category}: {count}");
    }

    let sold_out = loaded
        .products()
        .iter()
        .filter(|p| p.is_sold_out())
        .count();
    tracing::info!("{sold_out} products fully sold out");

    Ok(())
}
