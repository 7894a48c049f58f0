//! Curated wallpaper collections
//!
//! A collection groups wallpapers by id. It never embeds wallpaper data, so
//! member and cover ids are resolved against the catalog at display time.

use serde::{Deserialize, Serialize};

/// A named, curated grouping of wallpapers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperCollection {
    pub id: String,
    /// Display name
    pub name: String,
    /// Unique URL-safe lookup key
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Wallpaper shown as the collection's thumbnail
    #[serde(default)]
    pub cover_wallpaper_id: String,
    /// Member ids in curation order
    #[serde(default)]
    pub wallpaper_ids: Vec<String>,
    /// Tags for collection-level filtering
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional archive with every member at full resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_url: Option<String>,
    #[serde(
        default,
        rename = "zipSizeMB",
        skip_serializing_if = "Option::is_none"
    )]
    pub zip_size_mb: Option<f64>,
}

impl WallpaperCollection {
    /// Whether the wallpaper id is a member of this collection
    pub fn contains(&self, wallpaper_id: &str) -> bool {
        self.wallpaper_ids.iter().any(|id| id == wallpaper_id)
    }

    /// Label for the bundle download, if the collection offers one
    pub fn download_label(&self) -> Option<String> {
        let url = self.zip_url.as_deref()?;
        Some(match self.zip_size_mb {
            Some(size) => format!("Download all ({:.0} MB): {}", size, url),
            None => format!("Download all: {}", url),
        })
    }
}
