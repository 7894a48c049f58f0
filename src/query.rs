//! Derived views over the catalog: tag filtering, sorting and membership.
//!
//! Every function here is pure. Inputs are never mutated and calling a
//! function twice with the same inputs yields the same list in the same order.

use crate::catalog::Catalog;
use crate::collections::WallpaperCollection;
use crate::utils::locale_cmp;
use crate::wallpaper::{SortMode, Wallpaper};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Anything carrying a tag list that the tag filter can look at.
pub trait Tagged {
    fn tags(&self) -> &[String];
}

impl Tagged for Wallpaper {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for WallpaperCollection {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}

/// The tags the user has selected, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveTags {
    tags: Vec<String>,
}

impl ActiveTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the tag, or deselect it if it is already active.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// OR semantics: no active tags matches everything, otherwise any shared tag does.
    pub fn matches(&self, tags: &[String]) -> bool {
        self.is_empty() || tags.iter().any(|t| self.contains(t))
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut active = Self::new();
        for tag in iter {
            let tag = tag.into();
            if !active.contains(&tag) {
                active.tags.push(tag);
            }
        }
        active
    }
}

/// Keep records sharing at least one tag with `active_tags` (all of them when none are active).
pub fn filter_by_tags<I>(records: I, active_tags: &ActiveTags) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Tagged,
{
    records
        .into_iter()
        .filter(|record| active_tags.matches(record.tags()))
        .collect()
}

pub fn compare_wallpapers(a: &Wallpaper, b: &Wallpaper, sort: SortMode) -> Ordering {
    match sort {
        SortMode::DateDesc => b.timestamp().cmp(&a.timestamp()),
        SortMode::DateAsc => a.timestamp().cmp(&b.timestamp()),
        SortMode::TitleAsc => locale_cmp(&a.title, &b.title),
        SortMode::TitleDesc => locale_cmp(&b.title, &a.title),
    }
}

/// Stable sort: records with equal keys keep their relative order.
pub fn sort_wallpapers<W: Borrow<Wallpaper>>(mut records: Vec<W>, sort: SortMode) -> Vec<W> {
    records.sort_by(|a, b| compare_wallpapers(a.borrow(), b.borrow(), sort));
    records
}

pub fn sort_collections_by_name<C: Borrow<WallpaperCollection>>(mut records: Vec<C>) -> Vec<C> {
    records.sort_by(|a, b| locale_cmp(&a.borrow().name, &b.borrow().name));
    records
}

/// Members of `collection`, newest first. Ids missing from the catalog are skipped.
pub fn wallpapers_in_collection<'a>(
    collection: &WallpaperCollection,
    all_wallpapers: &'a [Wallpaper],
) -> Vec<&'a Wallpaper> {
    let members = all_wallpapers
        .iter()
        .filter(|wp| collection.contains(&wp.id))
        .collect();
    sort_wallpapers(members, SortMode::DateDesc)
}

/// Wallpapers carrying `tag_name` (case-insensitive), newest first.
pub fn wallpapers_by_tag<'a>(tag_name: &str, all_wallpapers: &'a [Wallpaper]) -> Vec<&'a Wallpaper> {
    if tag_name.is_empty() {
        return Vec::new();
    }
    let tagged = all_wallpapers
        .iter()
        .filter(|wp| wp.has_tag(tag_name))
        .collect();
    sort_wallpapers(tagged, SortMode::DateDesc)
}

/// Filter and sort state for the main wallpaper listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallpaperQuery {
    pub active_tags: ActiveTags,
    pub sort: SortMode,
}

impl WallpaperQuery {
    pub fn new(active_tags: ActiveTags, sort: SortMode) -> Self {
        Self { active_tags, sort }
    }

    pub fn apply<'a>(&self, all_wallpapers: &'a [Wallpaper]) -> Vec<&'a Wallpaper> {
        sort_wallpapers(filter_by_tags(all_wallpapers, &self.active_tags), self.sort)
    }
}

/// A collection paired with its resolved cover image
#[derive(Debug, Clone, Copy)]
pub struct CollectionCard<'a> {
    pub collection: &'a WallpaperCollection,
    /// `None` when the cover id is dangling; show a placeholder
    pub cover: Option<&'a Wallpaper>,
}

/// Collections matching the active tags, sorted by name, with covers resolved.
pub fn collection_cards<'a>(catalog: &'a Catalog, active_tags: &ActiveTags) -> Vec<CollectionCard<'a>> {
    let matching = filter_by_tags(catalog.collections(), active_tags);
    sort_collections_by_name(matching)
        .into_iter()
        .map(|collection| CollectionCard {
            collection,
            cover: catalog.cover_for(collection),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallpaper::parse_date_added;

    fn wp(id: &str, title: &str, tags: &[&str], date: Option<&str>) -> Wallpaper {
        Wallpaper {
            id: id.into(),
            title: title.into(),
            theme: String::new(),
            resolution: "1920x1080".into(),
            thumbnail_url: String::new(),
            full_url: String::new(),
            alt_text: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date_added: date.and_then(parse_date_added),
        }
    }

    fn collection(slug: &str, name: &str, ids: &[&str], tags: &[&str]) -> WallpaperCollection {
        WallpaperCollection {
            id: slug.into(),
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            cover_wallpaper_id: ids.first().map(|s| s.to_string()).unwrap_or_default(),
            wallpaper_ids: ids.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            zip_url: None,
            zip_size_mb: None,
        }
    }

    fn ids(list: &[&Wallpaper]) -> Vec<String> {
        list.iter().map(|w| w.id.clone()).collect()
    }

    fn active(tags: &[&str]) -> ActiveTags {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_filter_or_semantics() {
        let all = vec![
            wp("1", "One", &["A", "B"], None),
            wp("2", "Two", &["B", "C"], None),
            wp("3", "Three", &["D"], None),
        ];
        let filtered = filter_by_tags(&all, &active(&["A", "D"]));
        assert_eq!(ids(&filtered), vec!["1", "3"]);
    }

    #[test]
    fn test_filter_empty_active_set_returns_all() {
        let all = vec![wp("1", "One", &[], None), wp("2", "Two", &["X"], None)];
        assert_eq!(filter_by_tags(&all, &ActiveTags::new()).len(), 2);
    }

    #[test]
    fn test_filter_untagged_record_never_matches() {
        let all = vec![wp("1", "One", &[], None)];
        assert!(filter_by_tags(&all, &active(&["Space"])).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = vec![
            wp("1", "One", &["A"], None),
            wp("2", "Two", &["B"], None),
            wp("3", "Three", &["A", "C"], None),
        ];
        let tags = active(&["A", "C"]);
        let once = filter_by_tags(&all, &tags);
        let twice = filter_by_tags(once.clone(), &tags);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_applies_to_collections() {
        let cols = vec![
            collection("space", "Space", &[], &["Space"]),
            collection("plain", "Plain", &[], &[]),
        ];
        let filtered = filter_by_tags(&cols, &active(&["Space"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slug, "space");
    }

    #[test]
    fn test_sort_title_asc() {
        let all = vec![
            wp("b", "B", &[], Some("2024-01-01")),
            wp("a", "A", &[], Some("2024-01-01")),
        ];
        let sorted = sort_wallpapers(all.iter().collect(), SortMode::TitleAsc);
        assert_eq!(ids(&sorted), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_title_desc_is_locale_aware() {
        let all = vec![
            wp("1", "apple", &[], None),
            wp("2", "Banana", &[], None),
            wp("3", "cherry", &[], None),
        ];
        let sorted = sort_wallpapers(all.iter().collect(), SortMode::TitleDesc);
        assert_eq!(ids(&sorted), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_date_desc_is_stable_for_equal_dates() {
        let all = vec![
            wp("b", "B", &[], Some("2024-01-01")),
            wp("a", "A", &[], Some("2024-01-01")),
        ];
        let sorted = sort_wallpapers(all.iter().collect(), SortMode::DateDesc);
        assert_eq!(ids(&sorted), vec!["b", "a"]);
        let sorted = sort_wallpapers(all.iter().collect(), SortMode::DateAsc);
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_missing_date_sorts_as_epoch() {
        let all = vec![
            wp("undated", "Undated", &[], None),
            wp("old", "Old", &[], Some("1999-12-31")),
            wp("new", "New", &[], Some("2024-05-01T10:00:00Z")),
        ];
        let desc = sort_wallpapers(all.iter().collect(), SortMode::DateDesc);
        assert_eq!(ids(&desc), vec!["new", "old", "undated"]);
        let asc = sort_wallpapers(all.iter().collect(), SortMode::DateAsc);
        assert_eq!(ids(&asc), vec!["undated", "old", "new"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let all = vec![
            wp("1", "Gamma", &[], Some("2024-03-01")),
            wp("2", "alpha", &[], None),
            wp("3", "Beta", &[], Some("2024-03-01")),
        ];
        for mode in SortMode::ALL {
            let once = sort_wallpapers(all.iter().collect(), mode);
            let twice = sort_wallpapers(once.clone(), mode);
            assert_eq!(ids(&once), ids(&twice), "mode {}", mode);
        }
    }

    #[test]
    fn test_sort_collections_by_name() {
        let cols = vec![
            collection("p", "Portrait Perspectives", &[], &[]),
            collection("c", "cyberpunk Visions", &[], &[]),
            collection("e", "Enchanted Realms", &[], &[]),
        ];
        let sorted = sort_collections_by_name(cols.iter().collect());
        let slugs: Vec<&str> = sorted.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "e", "p"]);
    }

    #[test]
    fn test_wallpapers_in_collection_sorted_newest_first() {
        let all = vec![
            wp("1", "One", &[], Some("2024-01-01")),
            wp("2", "Two", &[], Some("2024-03-01")),
            wp("3", "Three", &[], Some("2024-02-01")),
        ];
        let col = collection("c", "C", &["1", "3", "2"], &[]);
        assert_eq!(ids(&wallpapers_in_collection(&col, &all)), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_wallpapers_in_collection_skips_dangling_ids() {
        let all = vec![wp("1", "One", &[], None), wp("2", "Two", &[], None)];
        let col = collection("c", "C", &["1", "ghost", "2"], &[]);
        let members = wallpapers_in_collection(&col, &all);
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|w| w.id != "ghost"));
    }

    #[test]
    fn test_wallpapers_by_tag_case_insensitive() {
        let all = vec![
            wp("1", "One", &["Space"], Some("2024-01-01")),
            wp("2", "Two", &["space", "Nature"], Some("2024-06-01")),
            wp("3", "Three", &["Spaceship"], Some("2024-07-01")),
        ];
        assert_eq!(ids(&wallpapers_by_tag("SPACE", &all)), vec!["2", "1"]);
        assert!(wallpapers_by_tag("", &all).is_empty());
    }

    #[test]
    fn test_filter_then_sort_scenario() {
        let all = vec![
            wp("W1", "W1", &["Space"], Some("2024-05-01")),
            wp("W2", "W2", &["Nature"], Some("2024-05-10")),
            wp("W3", "W3", &["Space", "Nature"], Some("2024-04-01")),
        ];
        let query = WallpaperQuery::new(active(&["Space"]), SortMode::DateDesc);
        assert_eq!(ids(&query.apply(&all)), vec!["W1", "W3"]);
    }

    #[test]
    fn test_active_tags_toggle_and_clear() {
        let mut tags = ActiveTags::new();
        tags.toggle("Space");
        tags.toggle("Neon");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Space", "Neon"]);
        tags.toggle("Space");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Neon"]);
        tags.clear();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_active_tags_from_iter_dedupes() {
        let tags = active(&["A", "A", "B"]);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_collection_cards_resolve_covers() {
        let json = r#"{
            "wallpapers": [{"id": "1", "title": "Cover", "tags": ["Space"]}],
            "collections": [
                {"id": "b", "name": "Broken", "slug": "broken", "coverWallpaperId": "x", "tags": ["Space"]},
                {"id": "a", "name": "Atlas", "slug": "atlas", "coverWallpaperId": "1", "tags": ["Maps"]}
            ]
        }"#;
        let catalog = Catalog::from_json(json, "test").expect("catalog");

        let cards = collection_cards(&catalog, &ActiveTags::new());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].collection.slug, "atlas");
        assert_eq!(cards[0].cover.map(|w| w.id.as_str()), Some("1"));
        assert!(cards[1].cover.is_none());

        let cards = collection_cards(&catalog, &active(&["Space"]));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].collection.slug, "broken");
    }
}
