use super::{App, View};
use crate::navigation::pick_random;
use tracing::{info, warn};

impl App {
    /// Enter on a row: preview a wallpaper, or drill into a collection or tag.
    pub fn open_selected(&mut self) {
        match &self.view {
            View::Collections => {
                let slug = self
                    .selection
                    .collection_id
                    .as_deref()
                    .and_then(|id| self.catalog.collections().iter().find(|c| c.id == id))
                    .map(|c| c.slug.clone());
                if let Some(slug) = slug {
                    self.go_to(View::Collection(slug));
                }
            }
            View::Tags => {
                if let Some(tag) = self.tag_rows().get(self.selection.tag_idx).cloned() {
                    self.go_to(View::Tag(tag));
                }
            }
            _ => {
                self.ui.preview = self.selection.wallpaper_id.clone();
            }
        }
    }

    /// Open the preview on a random wallpaper from the whole catalog.
    pub fn surprise_me(&mut self) {
        let mut rng = rand::thread_rng();
        let picked = pick_random(self.catalog.wallpapers(), &mut rng).map(|wp| wp.id.clone());
        match picked {
            Some(id) => {
                if !self.view.lists_wallpapers() {
                    self.go_to(View::Home);
                }
                self.selection.wallpaper_id = Some(id.clone());
                self.ui.preview = Some(id);
            }
            None => {
                self.ui.status_message = Some("The catalog is empty".into());
            }
        }
    }

    /// Flip light/dark and persist it. The palette swaps when the store
    /// publishes the change.
    pub fn toggle_theme(&mut self) {
        match self.prefs.toggle_theme() {
            Ok(mode) => info!(theme = %mode, "theme changed"),
            Err(e) => {
                warn!(error = %e, "failed to save theme preference");
                self.ui.status_message = Some(format!("Theme not saved: {}", e));
            }
        }
    }

    /// Text shown for the download action of the current view.
    pub fn download_hint(&self) -> Option<String> {
        if let Some(wp) = self.preview_wallpaper() {
            return Some(format!("{} ({})", wp.download_filename(), wp.full_url));
        }
        match &self.view {
            View::Collection(slug) => self
                .catalog
                .collection_by_slug(slug)
                .and_then(|col| col.download_label()),
            _ => None,
        }
    }

    pub fn toggle_help(&mut self) {
        self.ui.show_help = !self.ui.show_help;
    }
}
