//! Tag vocabulary: the distinct tag list and its A-Z index.

use crate::query::Tagged;
use crate::utils::locale_cmp;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Every distinct tag across `records`, sorted with locale-aware comparison.
///
/// Tags are case-sensitive: "Space" and "space" are both kept.
pub fn collect_all_tags<I>(records: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Tagged,
{
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for record in records {
        for tag in record.tags() {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort_by(|a, b| locale_cmp(a, b));
    tags
}

/// Number of records carrying each distinct tag, locale-sorted by tag.
pub fn tag_counts<I>(records: I) -> Vec<(String, usize)>
where
    I: IntoIterator,
    I::Item: Tagged,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let unique: HashSet<&String> = record.tags().iter().collect();
        for tag in unique {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| locale_cmp(&a.0, &b.0));
    counts
}

/// Index bucket: an uppercase ASCII letter, or `#` for everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagGroupKey {
    Letter(char),
    /// Digits, symbols, non-ASCII initials and empty tags
    Other,
}

impl TagGroupKey {
    /// Bucket for a tag, keyed on its first character.
    pub fn for_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => TagGroupKey::Letter(c.to_ascii_uppercase()),
            _ => TagGroupKey::Other,
        }
    }
}

impl fmt::Display for TagGroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagGroupKey::Letter(c) => write!(f, "{}", c),
            TagGroupKey::Other => f.write_str("#"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub key: TagGroupKey,
    pub tags: Vec<String>,
}

/// Tags grouped under their initial, letters A-Z first and `#` last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    groups: Vec<TagGroup>,
}

impl TagIndex {
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    pub fn get(&self, key: TagGroupKey) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.tags.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of tags across all groups
    pub fn tag_count(&self) -> usize {
        self.groups.iter().map(|g| g.tags.len()).sum()
    }
}

/// Bucket tags by uppercased first character. Each bucket is locale-sorted.
pub fn group_tags_alphabetically<S: AsRef<str>>(tags: &[S]) -> TagIndex {
    let mut buckets: BTreeMap<TagGroupKey, Vec<String>> = BTreeMap::new();
    for tag in tags {
        let tag = tag.as_ref();
        buckets
            .entry(TagGroupKey::for_tag(tag))
            .or_default()
            .push(tag.to_string());
    }

    let groups = buckets
        .into_iter()
        .map(|(key, mut tags)| {
            tags.sort_by(|a, b| locale_cmp(a, b));
            TagGroup { key, tags }
        })
        .collect();

    TagIndex { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallpaper::Wallpaper;

    fn tagged(id: &str, tags: &[&str]) -> Wallpaper {
        Wallpaper {
            id: id.into(),
            title: id.into(),
            theme: String::new(),
            resolution: String::new(),
            thumbnail_url: String::new(),
            full_url: String::new(),
            alt_text: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date_added: None,
        }
    }

    #[test]
    fn test_collect_all_tags_dedupes_and_sorts() {
        let all = vec![
            tagged("1", &["Space", "Nebula"]),
            tagged("2", &["Nature", "Space"]),
            tagged("3", &[]),
        ];
        assert_eq!(collect_all_tags(&all), vec!["Nature", "Nebula", "Space"]);
    }

    #[test]
    fn test_collect_all_tags_is_case_sensitive() {
        let all = vec![tagged("1", &["Space"]), tagged("2", &["space"])];
        assert_eq!(collect_all_tags(&all), vec!["space", "Space"]);
    }

    #[test]
    fn test_collect_all_tags_empty_catalog() {
        let all: Vec<Wallpaper> = Vec::new();
        assert!(collect_all_tags(&all).is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let all = vec![
            tagged("1", &["Space", "Nebula"]),
            tagged("2", &["Space", "Space"]),
        ];
        assert_eq!(
            tag_counts(&all),
            vec![("Nebula".to_string(), 1), ("Space".to_string(), 2)]
        );
    }

    #[test]
    fn test_group_tags_alphabetically() {
        let index = group_tags_alphabetically(&["Zebra", "apple", "123xyz", "Apple"]);
        let keys: Vec<String> = index.groups().iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["A", "Z", "#"]);
        assert_eq!(
            index.get(TagGroupKey::Letter('A')),
            Some(&["apple".to_string(), "Apple".to_string()][..])
        );
        assert_eq!(
            index.get(TagGroupKey::Letter('Z')),
            Some(&["Zebra".to_string()][..])
        );
        assert_eq!(
            index.get(TagGroupKey::Other),
            Some(&["123xyz".to_string()][..])
        );
    }

    #[test]
    fn test_group_empty_tag_goes_to_other() {
        let index = group_tags_alphabetically(&["", "Neon"]);
        assert_eq!(index.get(TagGroupKey::Other), Some(&[String::new()][..]));
        assert_eq!(index.tag_count(), 2);
    }

    #[test]
    fn test_group_preserves_every_tag_once() {
        let tags = ["Retro", "rain", "#hash", "Ocean", "8bit", "Éclair"];
        let index = group_tags_alphabetically(&tags);
        assert_eq!(index.tag_count(), tags.len());
        for tag in tags {
            let key = TagGroupKey::for_tag(tag);
            assert!(index.get(key).is_some_and(|g| g.iter().any(|t| t == tag)));
        }
    }

    #[test]
    fn test_group_non_ascii_initial_goes_to_other() {
        assert_eq!(TagGroupKey::for_tag("Éclair"), TagGroupKey::Other);
        assert_eq!(TagGroupKey::for_tag("neon"), TagGroupKey::Letter('N'));
    }

    #[test]
    fn test_group_empty_input() {
        let tags: [&str; 0] = [];
        assert!(group_tags_alphabetically(&tags).is_empty());
    }
}
