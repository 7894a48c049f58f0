use super::{AspectCategory, Wallpaper};

impl Wallpaper {
    /// Milliseconds since the epoch, 0 when the record has no date
    pub fn timestamp(&self) -> i64 {
        self.date_added
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    }

    /// Case-insensitive exact match against this wallpaper's tags
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// First `limit` tags for compact display, and whether more were cut off
    pub fn preview_tags(&self, limit: usize) -> (&[String], bool) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() > limit)
    }

    /// Suggested file name for the full-resolution download.
    ///
    /// The title is trimmed and each inner whitespace run becomes one `_`.
    pub fn download_filename(&self) -> String {
        let title = self.title.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{}_{}.jpg", title, self.resolution)
    }

    /// Parse "WIDTHxHEIGHT" from the resolution label
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let (w, h) = self.resolution.trim().split_once(['x', 'X', '×'])?;
        let width = w.trim().parse().ok()?;
        let height = h.trim().parse().ok()?;
        Some((width, height))
    }

    pub fn aspect_category(&self) -> Option<AspectCategory> {
        self.dimensions()
            .map(|(w, h)| Self::categorize_aspect(w, h))
    }

    pub(crate) fn categorize_aspect(width: u32, height: u32) -> AspectCategory {
        if width == 0 || height == 0 {
            return AspectCategory::Square;
        }
        let ratio = width as f32 / height as f32;
        let normalized_ratio = if ratio >= 1.0 { ratio } else { 1.0 / ratio };

        if normalized_ratio >= 2.0 {
            AspectCategory::Ultrawide
        } else if normalized_ratio >= 1.2 {
            if ratio >= 1.0 {
                AspectCategory::Landscape
            } else {
                AspectCategory::Portrait
            }
        } else {
            AspectCategory::Square
        }
    }
}
