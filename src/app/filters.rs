use super::{App, View};
use crate::navigation::{step_index, Direction};
use crate::tags::collect_all_tags;

impl App {
    /// Cycle through sort modes.
    pub fn toggle_sort_mode(&mut self) {
        self.filters.query.sort = self.filters.query.sort.next();
        self.ui.status_message = Some(format!(
            "Sorted by {}",
            self.filters.query.sort.display_name()
        ));
        self.ensure_selection_visible();
    }

    /// Tags offered by the filter picker, locale-sorted.
    pub fn available_tags(&self) -> Vec<String> {
        collect_all_tags(self.catalog.wallpapers())
    }

    /// Select or deselect a tag and recompute the listing.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.filters.query.active_tags.toggle(tag);
        self.ensure_selection_visible();
    }

    pub fn clear_tag_filters(&mut self) {
        self.filters.query.active_tags.clear();
        self.ensure_selection_visible();
    }

    /// Open the picker on views that honour the active tags.
    pub fn toggle_tag_picker(&mut self) {
        if !matches!(self.view, View::Home | View::Collections) {
            self.ui.status_message = Some("Tag filters apply to the home and collection lists".into());
            return;
        }
        self.ui.show_tag_picker = !self.ui.show_tag_picker;
        if self.ui.show_tag_picker {
            self.ui.tag_picker_idx = 0;
        }
    }

    pub fn tag_picker_next(&mut self) {
        self.step_tag_picker(Direction::Next);
    }

    pub fn tag_picker_prev(&mut self) {
        self.step_tag_picker(Direction::Prev);
    }

    fn step_tag_picker(&mut self, direction: Direction) {
        let len = self.available_tags().len();
        if let Some(idx) = step_index(self.ui.tag_picker_idx, len, direction) {
            self.ui.tag_picker_idx = idx;
        }
    }

    /// Toggle the tag under the picker cursor.
    pub fn tag_picker_toggle(&mut self) {
        if let Some(tag) = self.available_tags().get(self.ui.tag_picker_idx).cloned() {
            self.toggle_tag(&tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;
    use super::*;
    use crate::wallpaper::SortMode;

    #[test]
    fn test_toggle_tag_filters_home_with_or_semantics() {
        let mut app = test_app();
        app.toggle_tag("Steampunk");
        app.toggle_tag("Underwater");
        let ids: Vec<&str> = app
            .visible_wallpapers()
            .iter()
            .map(|wp| wp.id.as_str())
            .collect();
        assert_eq!(ids, vec!["6", "9"]);
        assert_eq!(app.selection.wallpaper_id.as_deref(), Some("6"));
    }

    #[test]
    fn test_tags_also_filter_collections() {
        let mut app = test_app();
        app.toggle_tag("Portrait");
        app.go_to(View::Collections);
        let slugs: Vec<&str> = app
            .visible_collections()
            .iter()
            .map(|card| card.collection.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["portrait-perspectives"]);
    }

    #[test]
    fn test_selection_kept_when_still_visible() {
        let mut app = test_app();
        app.selection.wallpaper_id = Some("10".into());
        app.toggle_tag("Space");
        assert_eq!(app.selection.wallpaper_id.as_deref(), Some("10"));
        app.clear_tag_filters();
        assert_eq!(app.visible_wallpapers().len(), 16);
    }

    #[test]
    fn test_sort_cycles() {
        let mut app = test_app();
        app.toggle_sort_mode();
        assert_eq!(app.filters.query.sort, SortMode::DateAsc);
        assert_eq!(app.visible_wallpapers()[0].id, "15");
    }

    #[test]
    fn test_tag_picker_wraps_and_toggles() {
        let mut app = test_app();
        app.toggle_tag_picker();
        assert!(app.ui.show_tag_picker);
        app.tag_picker_prev();
        let last = app.available_tags().len() - 1;
        assert_eq!(app.ui.tag_picker_idx, last);
        app.tag_picker_toggle();
        assert!(app.filters.active_tags().contains("Wide"));
        app.tag_picker_next();
        assert_eq!(app.ui.tag_picker_idx, 0);
    }

    #[test]
    fn test_tag_picker_unavailable_on_tag_index() {
        let mut app = test_app();
        app.go_to(View::Tags);
        app.toggle_tag_picker();
        assert!(!app.ui.show_tag_picker);
    }
}
