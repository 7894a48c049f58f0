//! Read-only wallpaper catalog
//!
//! The catalog is loaded once at startup, either from the definition embedded
//! in the binary or from a user-supplied JSON/TOML file, and is never mutated
//! afterwards. Every query in the crate borrows from it.

use crate::collections::WallpaperCollection;
use crate::error::{CatalogError, GalleryError};
use crate::utils::is_url_safe_slug;
use crate::wallpaper::Wallpaper;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk shape of a catalog definition
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    wallpapers: Vec<Wallpaper>,
    #[serde(default)]
    collections: Vec<WallpaperCollection>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    wallpapers: Vec<Wallpaper>,
    collections: Vec<WallpaperCollection>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub wallpapers: usize,
    pub collections: usize,
    pub tags: usize,
    pub undated: usize,
    pub dangling: usize,
}

impl Catalog {
    /// Build a catalog from already-parsed records, validating invariants.
    pub fn from_parts(
        wallpapers: Vec<Wallpaper>,
        collections: Vec<WallpaperCollection>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            wallpapers,
            collections,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, "built-in catalog")
    }

    pub fn from_json(data: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(data).map_err(|e| CatalogError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_parts(file.wallpapers, file.collections)
    }

    pub fn from_toml(data: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(data).map_err(|e| CatalogError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        Self::from_parts(file.wallpapers, file.collections)
    }

    /// Load a catalog file; `.toml` files are read as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let catalog = if is_toml {
            Self::from_toml(&data, &origin)?
        } else {
            Self::from_json(&data, &origin)?
        };

        debug!(
            path = %path.display(),
            wallpapers = catalog.wallpapers.len(),
            collections = catalog.collections.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise fall back to the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for (idx, wp) in self.wallpapers.iter().enumerate() {
            if wp.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(idx));
            }
            if !ids.insert(wp.id.as_str()) {
                return Err(CatalogError::DuplicateWallpaperId(wp.id.clone()));
            }
            if wp.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(wp.id.clone()));
            }
        }

        let mut slugs = HashSet::new();
        for col in &self.collections {
            if !slugs.insert(col.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(col.slug.clone()));
            }
            if !is_url_safe_slug(&col.slug) {
                warn!(slug = %col.slug, "collection slug is not URL-safe");
            }
        }

        // Dangling ids degrade to placeholders and omissions at display time.
        for dangling in self.dangling_references() {
            warn!("{}", dangling);
        }

        Ok(())
    }

    pub fn wallpapers(&self) -> &[Wallpaper] {
        &self.wallpapers
    }

    pub fn collections(&self) -> &[WallpaperCollection] {
        &self.collections
    }

    pub fn wallpaper(&self, id: &str) -> Option<&Wallpaper> {
        self.wallpapers.iter().find(|wp| wp.id == id)
    }

    pub fn collection_by_slug(&self, slug: &str) -> Option<&WallpaperCollection> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    /// Like [`Catalog::wallpaper`], but reports a miss as [`GalleryError::NotFound`].
    pub fn require_wallpaper(&self, id: &str) -> Result<&Wallpaper, GalleryError> {
        self.wallpaper(id)
            .ok_or_else(|| GalleryError::not_found("wallpaper", id))
    }

    pub fn require_collection(&self, slug: &str) -> Result<&WallpaperCollection, GalleryError> {
        self.collection_by_slug(slug)
            .ok_or_else(|| GalleryError::not_found("collection", slug))
    }

    /// Resolve a collection's cover; `None` when the cover id does not exist.
    pub fn cover_for(&self, collection: &WallpaperCollection) -> Option<&Wallpaper> {
        self.wallpaper(&collection.cover_wallpaper_id)
    }

    /// Every collection member or cover id that does not resolve to a wallpaper.
    pub fn dangling_references(&self) -> Vec<GalleryError> {
        let known: HashSet<&str> = self.wallpapers.iter().map(|wp| wp.id.as_str()).collect();
        let mut dangling = Vec::new();

        for col in &self.collections {
            if !known.contains(col.cover_wallpaper_id.as_str()) {
                dangling.push(GalleryError::DanglingReference {
                    collection: col.slug.clone(),
                    wallpaper_id: col.cover_wallpaper_id.clone(),
                });
            }
            for id in &col.wallpaper_ids {
                if !known.contains(id.as_str()) {
                    dangling.push(GalleryError::DanglingReference {
                        collection: col.slug.clone(),
                        wallpaper_id: id.clone(),
                    });
                }
            }
        }

        dangling
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            wallpapers: self.wallpapers.len(),
            collections: self.collections.len(),
            tags: crate::tags::collect_all_tags(&self.wallpapers).len(),
            undated: self
                .wallpapers
                .iter()
                .filter(|wp| wp.date_added.is_none())
                .count(),
            dangling: self.dangling_references().len(),
        }
    }
}
