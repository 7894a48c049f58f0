//! Prev/next cursor over an already filtered and sorted list.
//!
//! The cursor holds no state. Callers own the selected id and pass it in on
//! every call, so the same logic serves the home listing, a single collection
//! and a single tag.

use crate::collections::WallpaperCollection;
use crate::error::GalleryError;
use crate::wallpaper::Wallpaper;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Prev,
    #[default]
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => f.write_str("prev"),
            Direction::Next => f.write_str("next"),
        }
    }
}

impl FromStr for Direction {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prev" | "previous" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            _ => Err(GalleryError::InvalidDirection(s.to_string())),
        }
    }
}

/// Records the cursor can locate by id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Wallpaper {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for WallpaperCollection {
    fn id(&self) -> &str {
        &self.id
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Index of `current_id` in `list`, if present.
pub fn position<T: Identified>(list: &[T], current_id: &str) -> Option<usize> {
    list.iter().position(|item| item.id() == current_id)
}

/// Step a row index once within `len` rows, wrapping at both ends.
///
/// `None` when there are no rows.
pub fn step_index(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    Some(match direction {
        Direction::Next => (current + 1) % len,
        Direction::Prev => (current + len - 1) % len,
    })
}

/// Index reached by stepping once from `current_id`.
///
/// A selection that is no longer in the list falls back to index 0.
pub fn advance_index<T: Identified>(
    list: &[T],
    current_id: &str,
    direction: Direction,
) -> Result<usize, GalleryError> {
    if list.is_empty() {
        return Err(GalleryError::EmptySelection);
    }
    let Some(current) = position(list, current_id) else {
        return Ok(0);
    };
    step_index(current, list.len(), direction).ok_or(GalleryError::EmptySelection)
}

/// Item reached by stepping once from `current_id`, wrapping at both ends.
pub fn advance<'a, T: Identified>(
    list: &'a [T],
    current_id: &str,
    direction: Direction,
) -> Result<&'a T, GalleryError> {
    let idx = advance_index(list, current_id, direction)?;
    Ok(&list[idx])
}

/// Prev/next controls are only meaningful with more than one item.
pub fn can_navigate(len: usize) -> bool {
    len > 1
}

/// Uniformly random element, `None` for an empty list.
pub fn pick_random<'a, T, R: Rng>(list: &'a [T], rng: &mut R) -> Option<&'a T> {
    if list.is_empty() {
        return None;
    }
    list.get(rng.gen_range(0..list.len()))
}
