use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::item::GalleryItem;
use crate::utils::BenchtopError;

/// On-disk gallery description
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    items: Vec<GalleryItem>,
}

/// Parse a TOML manifest into the gallery's item list
pub fn parse_manifest(content: &str) -> Result<Vec<GalleryItem>, BenchtopError> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| BenchtopError::ManifestError(e.to_string()))?;

    if manifest.items.is_empty() {
        return Err(BenchtopError::ManifestError(
            "manifest contains no items".to_string(),
        ));
    }

    Ok(manifest.items)
}

/// Load the gallery's item list from a TOML manifest file
pub fn load_manifest(path: &Path) -> Result<Vec<GalleryItem>, BenchtopError> {
    let content = fs::read_to_string(path)?;
    let items = parse_manifest(&content)?;
    debug!(path = %path.display(), count = items.len(), "loaded gallery manifest");
    Ok(items)
}

/// Built-in items used when no manifest is configured
pub fn sample_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new("nature", "images/forest.jpg", "Morning fog over the forest"),
        GalleryItem::new("city", "images/skyline.jpg", "Skyline at dusk"),
        GalleryItem::new("animals", "images/fox.jpg", "Red fox in the snow"),
        GalleryItem::new("nature", "images/lake.jpg", "Still mountain lake"),
        GalleryItem::new("city", "images/street.jpg", "Rainy street at night"),
        GalleryItem::new("animals", "images/owl.jpg", "Barn owl on a fence post"),
        GalleryItem::new("nature", "images/desert.jpg", "Dunes under a full moon"),
        GalleryItem::new("city", "images/bridge.jpg", "Suspension bridge in fog"),
        GalleryItem::new("animals", "images/deer.jpg", "Deer crossing a meadow"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[[items]]
category = "nature"
src = "images/forest.jpg"
caption = "Forest"

[[items]]
category = "city"
src = "images/skyline.jpg"
caption = "Skyline"
"#;

    #[test]
    fn test_parse_manifest() {
        let items = parse_manifest(MANIFEST).unwrap();
        assert_eq!(
            items,
            vec![
                GalleryItem::new("nature", "images/forest.jpg", "Forest"),
                GalleryItem::new("city", "images/skyline.jpg", "Skyline"),
            ]
        );
    }

    #[test]
    fn test_empty_manifest_rejected() {
        let err = parse_manifest("").unwrap_err();
        assert!(matches!(err, BenchtopError::ManifestError(_)));
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = parse_manifest("[[items]]\ncategory = \"city\"\nsrc = \"a.jpg\"\n").unwrap_err();
        assert!(err.to_string().contains("caption"));
    }

    #[test]
    fn test_load_manifest_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gallery.toml");
        fs::write(&path, MANIFEST).unwrap();

        let items = load_manifest(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].caption, "Skyline");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_manifest(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, BenchtopError::IoError(_)));
    }

    #[test]
    fn test_sample_items_cover_several_categories() {
        let items = sample_items();
        assert!(items.iter().any(|i| i.category == "nature"));
        assert!(items.iter().any(|i| i.category == "city"));
        assert!(items.iter().any(|i| i.category == "animals"));
    }
}
