use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::GALLERY_FILTER_ALL;

/// One picture in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Category tag used by the filter buttons
    pub category: String,
    /// Image source (path or URL)
    #[serde(rename = "src")]
    pub source: String,
    pub caption: String,
}

impl GalleryItem {
    pub fn new(
        category: impl Into<String>,
        source: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            source: source.into(),
            caption: caption.into(),
        }
    }
}

/// Stable handle for an item: its position in the full, unfiltered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(pub usize);

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter tag, treating `all` as the catch-all sentinel
    pub fn from_tag(tag: &str) -> Self {
        if tag == GALLERY_FILTER_ALL {
            Self::All
        } else {
            Self::Category(tag.to_string())
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::All => GALLERY_FILTER_ALL,
            Self::Category(tag) => tag,
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => item.category == *tag,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
