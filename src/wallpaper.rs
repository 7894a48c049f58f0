use crate::error::GalleryError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod model;

/// Rough orientation bucket derived from a wallpaper's resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectCategory {
    Ultrawide,
    Landscape,
    Portrait,
    Square,
}

impl AspectCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            AspectCategory::Ultrawide => "Ultrawide",
            AspectCategory::Landscape => "Landscape",
            AspectCategory::Portrait => "Portrait",
            AspectCategory::Square => "Square",
        }
    }
}

/// Sort order for wallpaper listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Newest first (missing dates sort last)
    #[default]
    #[serde(rename = "dateAdded_desc")]
    DateDesc,
    /// Oldest first
    #[serde(rename = "dateAdded_asc")]
    DateAsc,
    /// Title A-Z
    #[serde(rename = "title_asc")]
    TitleAsc,
    /// Title Z-A
    #[serde(rename = "title_desc")]
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::DateDesc,
        SortMode::DateAsc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    /// Return human-readable display name for this sort mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::DateDesc => "Newest",
            SortMode::DateAsc => "Oldest",
            SortMode::TitleAsc => "Title A-Z",
            SortMode::TitleDesc => "Title Z-A",
        }
    }

    /// Canonical key, as stored in config files and accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SortMode::DateDesc => "dateAdded_desc",
            SortMode::DateAsc => "dateAdded_asc",
            SortMode::TitleAsc => "title_asc",
            SortMode::TitleDesc => "title_desc",
        }
    }

    /// Cycle to the next sort mode.
    pub fn next(&self) -> Self {
        match self {
            SortMode::DateDesc => SortMode::DateAsc,
            SortMode::DateAsc => SortMode::TitleAsc,
            SortMode::TitleAsc => SortMode::TitleDesc,
            SortMode::TitleDesc => SortMode::DateDesc,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortMode {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dateAdded_desc" | "date-desc" => Ok(SortMode::DateDesc),
            "dateAdded_asc" | "date-asc" => Ok(SortMode::DateAsc),
            "title_asc" | "title-asc" => Ok(SortMode::TitleAsc),
            "title_desc" | "title-desc" => Ok(SortMode::TitleDesc),
            other => Err(GalleryError::InvalidSortKey(other.to_string())),
        }
    }
}

/// A single image asset with its display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    pub id: String,
    pub title: String,
    /// Free-text primary theme label
    #[serde(default)]
    pub theme: String,
    /// Display string such as "3840x2160"
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub full_url: String,
    #[serde(default)]
    pub alt_text: String,
    /// Labels in their original order (the first few are shown on cards)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Absent dates sort as the epoch
    #[serde(
        default,
        with = "date_added_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<DateTime<Utc>>,
}

/// Parse a `dateAdded` value: RFC 3339 timestamps or plain `YYYY-MM-DD` dates.
pub fn parse_date_added(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

mod date_added_format {
    use super::parse_date_added;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date_added(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid dateAdded '{}'", raw))),
        }
    }
}
