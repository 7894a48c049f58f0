use std::path::PathBuf;
use thiserror::Error;

/// Recoverable conditions raised by catalog lookups, queries and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    #[error("collection '{collection}' references unknown wallpaper '{wallpaper_id}'")]
    DanglingReference {
        collection: String,
        wallpaper_id: String,
    },

    #[error("nothing to navigate: the list is empty")]
    EmptySelection,

    #[error(
        "unknown sort key '{0}' (expected dateAdded_desc, dateAdded_asc, title_asc or title_desc)"
    )]
    InvalidSortKey(String),

    #[error("unknown direction '{0}' (expected prev or next)")]
    InvalidDirection(String),
}

impl GalleryError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }
}

/// Failures while loading or validating a catalog definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("wallpaper #{0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate wallpaper id '{0}'")]
    DuplicateWallpaperId(String),

    #[error("wallpaper '{0}' has an empty title")]
    EmptyTitle(String),

    #[error("duplicate collection slug '{0}'")]
    DuplicateSlug(String),
}
