use super::{App, View};
use crate::navigation::{advance, position, step_index, Direction};
use crate::query::{collection_cards, wallpapers_by_tag, wallpapers_in_collection, CollectionCard};
use crate::tags::{collect_all_tags, group_tags_alphabetically, TagIndex};
use crate::wallpaper::Wallpaper;
use tracing::debug;

impl App {
    /// Wallpapers listed by the current view, in display order.
    pub fn visible_wallpapers(&self) -> Vec<&Wallpaper> {
        let all = self.catalog.wallpapers();
        match &self.view {
            View::Home => self.filters.query.apply(all),
            View::Collection(slug) => self
                .catalog
                .collection_by_slug(slug)
                .map(|col| wallpapers_in_collection(col, all))
                .unwrap_or_default(),
            View::Tag(tag) => wallpapers_by_tag(tag, all),
            View::Collections | View::Tags => Vec::new(),
        }
    }

    /// Collections listed by the overview, with covers resolved.
    pub fn visible_collections(&self) -> Vec<CollectionCard<'_>> {
        collection_cards(&self.catalog, self.filters.active_tags())
    }

    pub fn tag_index(&self) -> TagIndex {
        group_tags_alphabetically(&collect_all_tags(self.catalog.wallpapers()))
    }

    /// Tags in index order, flattened for row selection.
    pub fn tag_rows(&self) -> Vec<String> {
        self.tag_index()
            .groups()
            .iter()
            .flat_map(|group| group.tags.iter().cloned())
            .collect()
    }

    /// Return the currently selected wallpaper, if any.
    pub fn selected_wallpaper(&self) -> Option<&Wallpaper> {
        let id = self.selection.wallpaper_id.as_deref()?;
        self.catalog.wallpaper(id)
    }

    /// Row index of the selection within the current listing.
    pub fn selected_row(&self) -> Option<usize> {
        match &self.view {
            View::Collections => {
                let cards: Vec<_> = self.visible_collections();
                let collections: Vec<_> = cards.iter().map(|card| card.collection).collect();
                position(&collections, self.selection.collection_id.as_deref()?)
            }
            View::Tags => Some(self.selection.tag_idx),
            _ => position(
                &self.visible_wallpapers(),
                self.selection.wallpaper_id.as_deref()?,
            ),
        }
    }

    /// Point the selection at the first row of the current listing.
    pub fn reset_selection(&mut self) {
        match &self.view {
            View::Collections => {
                self.selection.collection_id = self
                    .visible_collections()
                    .first()
                    .map(|card| card.collection.id.clone());
            }
            View::Tags => self.selection.tag_idx = 0,
            _ => {
                self.selection.wallpaper_id =
                    self.visible_wallpapers().first().map(|wp| wp.id.clone());
            }
        }
    }

    /// Keep the selection valid after the listing changed underneath it.
    pub fn ensure_selection_visible(&mut self) {
        if self.selected_row().is_none() {
            self.reset_selection();
        }
    }

    /// Move the row selection, wrapping at both ends.
    pub fn step_selection(&mut self, direction: Direction) {
        match &self.view {
            View::Collections => {
                let next = {
                    let cards = self.visible_collections();
                    let collections: Vec<_> = cards.iter().map(|card| card.collection).collect();
                    let current = self.selection.collection_id.as_deref().unwrap_or_default();
                    advance(&collections, current, direction)
                        .ok()
                        .map(|col| col.id.clone())
                };
                if next.is_some() {
                    self.selection.collection_id = next;
                }
            }
            View::Tags => {
                let len = self.tag_rows().len();
                if let Some(idx) = step_index(self.selection.tag_idx, len, direction) {
                    self.selection.tag_idx = idx;
                }
            }
            _ => {
                let next = {
                    let list = self.visible_wallpapers();
                    let current = self.selection.wallpaper_id.as_deref().unwrap_or_default();
                    advance(&list, current, direction).ok().map(|wp| wp.id.clone())
                };
                if next.is_some() {
                    self.selection.wallpaper_id = next;
                }
            }
        }
    }

    /// List the preview popup steps through: the current listing, or the
    /// whole catalog when the listing is empty.
    pub fn preview_context(&self) -> Vec<&Wallpaper> {
        let visible = self.visible_wallpapers();
        if visible.is_empty() {
            self.catalog.wallpapers().iter().collect()
        } else {
            visible
        }
    }

    pub fn preview_wallpaper(&self) -> Option<&Wallpaper> {
        self.catalog.wallpaper(self.ui.preview.as_deref()?)
    }

    /// Step the preview popup to the neighbouring wallpaper.
    pub fn step_preview(&mut self, direction: Direction) {
        let Some(current) = self.ui.preview.clone() else {
            return;
        };
        let next = advance(&self.preview_context(), &current, direction)
            .ok()
            .map(|wp| wp.id.clone());
        if let Some(id) = next {
            self.selection.wallpaper_id = Some(id.clone());
            self.ui.preview = Some(id);
        }
    }

    /// Switch views. An unknown collection slug redirects home.
    pub fn go_to(&mut self, view: View) {
        let view = match view {
            View::Collection(slug) if self.catalog.collection_by_slug(&slug).is_none() => {
                self.ui.status_message = Some(format!("Collection '{}' not found", slug));
                View::Home
            }
            other => other,
        };
        debug!(view = %view.title(), "switching view");
        self.view = view;
        self.ui.preview = None;
        self.ui.show_tag_picker = false;
        self.reset_selection();
    }

    /// Go up one level: preview, then detail view, then home.
    pub fn go_back(&mut self) {
        if self.ui.preview.take().is_some() {
            return;
        }
        let parent = match &self.view {
            View::Collection(_) => View::Collections,
            View::Tag(_) => View::Tags,
            _ => View::Home,
        };
        self.go_to(parent);
    }

    /// Cycle the top-level views.
    pub fn next_view(&mut self) {
        let next = match self.view {
            View::Home => View::Collections,
            View::Collections | View::Collection(_) => View::Tags,
            View::Tags | View::Tag(_) => View::Home,
        };
        self.go_to(next);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;
    use super::*;

    #[test]
    fn test_step_selection_wraps_in_home() {
        let mut app = test_app();
        app.step_selection(Direction::Prev);
        // Oldest wallpaper is last in the newest-first listing
        assert_eq!(app.selection.wallpaper_id.as_deref(), Some("15"));
        app.step_selection(Direction::Next);
        assert_eq!(app.selection.wallpaper_id.as_deref(), Some("16"));
    }

    #[test]
    fn test_collection_view_lists_members_newest_first() {
        let mut app = test_app();
        app.go_to(View::Collection("cosmic-wonders".into()));
        let ids: Vec<&str> = app
            .visible_wallpapers()
            .iter()
            .map(|wp| wp.id.as_str())
            .collect();
        assert_eq!(ids, vec!["16", "10", "1", "7"]);
        assert_eq!(app.selected_row(), Some(0));
    }

    #[test]
    fn test_unknown_collection_redirects_home() {
        let mut app = test_app();
        app.go_to(View::Collection("no-such-slug".into()));
        assert_eq!(app.view, View::Home);
        assert!(app.ui.status_message.is_some());
    }

    #[test]
    fn test_tag_view_is_case_insensitive() {
        let mut app = test_app();
        app.go_to(View::Tag("space".into()));
        let ids: Vec<&str> = app
            .visible_wallpapers()
            .iter()
            .map(|wp| wp.id.as_str())
            .collect();
        assert_eq!(ids, vec!["16", "10", "1"]);
    }

    #[test]
    fn test_preview_steps_within_listing() {
        let mut app = test_app();
        app.go_to(View::Tag("Space".into()));
        app.ui.preview = Some("1".into());
        app.step_preview(Direction::Next);
        assert_eq!(app.ui.preview.as_deref(), Some("16"));
        app.step_preview(Direction::Prev);
        assert_eq!(app.ui.preview.as_deref(), Some("1"));
    }

    #[test]
    fn test_go_back_closes_preview_then_leaves_detail() {
        let mut app = test_app();
        app.go_to(View::Collection("enchanted-realms".into()));
        app.ui.preview = Some("5".into());
        app.go_back();
        assert!(app.ui.preview.is_none());
        assert_eq!(app.view, View::Collection("enchanted-realms".into()));
        app.go_back();
        assert_eq!(app.view, View::Collections);
    }

    #[test]
    fn test_collections_selection_wraps() {
        let mut app = test_app();
        app.go_to(View::Collections);
        assert_eq!(app.selection.collection_id.as_deref(), Some("col1"));
        app.step_selection(Direction::Prev);
        assert_eq!(app.selected_row(), Some(3));
    }

    #[test]
    fn test_tag_index_selection_wraps() {
        let mut app = test_app();
        app.go_to(View::Tags);
        app.step_selection(Direction::Prev);
        assert_eq!(app.selection.tag_idx, app.tag_rows().len() - 1);
        app.step_selection(Direction::Next);
        assert_eq!(app.selection.tag_idx, 0);
    }

    #[test]
    fn test_tag_rows_follow_index_order() {
        let app = test_app();
        let rows = app.tag_rows();
        assert_eq!(rows.first().map(String::as_str), Some("Abstract"));
        assert_eq!(rows.last().map(String::as_str), Some("80s"));
    }
}
