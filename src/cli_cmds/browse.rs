use crate::catalog::Catalog;
use crate::error::GalleryError;
use crate::navigation::{advance, can_navigate, pick_random, position, Direction};
use crate::query::{wallpapers_by_tag, wallpapers_in_collection, ActiveTags, WallpaperQuery};
use crate::wallpaper::{SortMode, Wallpaper};
use tracing::debug;

/// One listing line: id, title, date and the first tags.
pub(super) fn format_row(wp: &Wallpaper) -> String {
    let date = wp
        .date_added
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string());
    let (shown, more) = wp.preview_tags(3);
    let mut tags = shown.join(", ");
    if more {
        tags.push_str(&format!(" +{}", wp.tags.len() - shown.len()));
    }
    format!("{:>4}  {:<24} {}  {}", wp.id, wp.title, date, tags)
}

pub(super) fn print_rows(wallpapers: &[&Wallpaper]) {
    for wp in wallpapers {
        println!("{}", format_row(wp));
    }
}

pub fn cmd_list(catalog: &Catalog, tags: &[String], sort: SortMode) {
    let query = WallpaperQuery::new(tags.iter().cloned().collect(), sort);
    let wallpapers = query.apply(catalog.wallpapers());

    if !query.active_tags.is_empty() {
        let active: Vec<&str> = query.active_tags.iter().collect();
        println!("Tags (any): {}", active.join(", "));
    }
    println!("Sort: {}", sort.display_name());
    println!();

    if wallpapers.is_empty() {
        println!("No wallpapers match the selected tags.");
        return;
    }
    print_rows(&wallpapers);
    println!();
    println!("{} wallpaper(s)", wallpapers.len());
}

pub fn cmd_show(catalog: &Catalog, id: &str) {
    match catalog.require_wallpaper(id) {
        Ok(wp) => print_details(wp),
        Err(e) => {
            debug!(error = %e, "show lookup failed");
            println!("Wallpaper '{}' not found. Showing all wallpapers instead.", id);
            println!();
            cmd_list(catalog, &[], SortMode::default());
        }
    }
}

fn print_details(wp: &Wallpaper) {
    println!("{}", wp.title);
    println!("  Id:          {}", wp.id);
    println!("  Theme:       {}", wp.theme);
    match wp.aspect_category() {
        Some(aspect) => println!("  Resolution:  {} ({})", wp.resolution, aspect.display_name()),
        None => println!("  Resolution:  {}", wp.resolution),
    }
    if let Some(date) = wp.date_added {
        println!("  Added:       {}", date.format("%Y-%m-%d"));
    }
    if !wp.tags.is_empty() {
        println!("  Tags:        {}", wp.tags.join(", "));
    }
    if !wp.alt_text.is_empty() {
        println!("  Description: {}", wp.alt_text);
    }
    println!("  Thumbnail:   {}", wp.thumbnail_url);
    println!("  Full size:   {}", wp.full_url);
    println!("  Save as:     {}", wp.download_filename());
}

/// Listing the navigation cursor steps through
pub enum NavigateScope {
    Home { tags: Vec<String>, sort: SortMode },
    Collection(String),
    Tag(String),
}

fn scope_listing<'a>(
    catalog: &'a Catalog,
    scope: &NavigateScope,
) -> Result<Vec<&'a Wallpaper>, GalleryError> {
    match scope {
        NavigateScope::Home { tags, sort } => {
            let active: ActiveTags = tags.iter().cloned().collect();
            Ok(WallpaperQuery::new(active, *sort).apply(catalog.wallpapers()))
        }
        NavigateScope::Collection(slug) => {
            let col = catalog.require_collection(slug)?;
            Ok(wallpapers_in_collection(col, catalog.wallpapers()))
        }
        NavigateScope::Tag(tag) => Ok(wallpapers_by_tag(tag, catalog.wallpapers())),
    }
}

pub fn cmd_navigate(catalog: &Catalog, id: &str, direction: Direction, scope: NavigateScope) {
    let listing = match scope_listing(catalog, &scope) {
        Ok(listing) => listing,
        Err(GalleryError::NotFound { kind, key }) => {
            println!("{} '{}' not found. Navigating all wallpapers instead.", capitalize(kind), key);
            scope_listing(
                catalog,
                &NavigateScope::Home {
                    tags: Vec::new(),
                    sort: SortMode::default(),
                },
            )
            .unwrap_or_default()
        }
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    if position(&listing, id).is_none() && !listing.is_empty() {
        println!("'{}' is not in this listing; starting from the first wallpaper.", id);
    }

    match advance(&listing, id, direction) {
        Ok(wp) => {
            let idx = position(&listing, &wp.id).unwrap_or(0);
            println!("{}", format_row(wp));
            if can_navigate(listing.len()) {
                println!("({}/{})", idx + 1, listing.len());
            } else {
                println!("(only wallpaper in this listing)");
            }
        }
        Err(GalleryError::EmptySelection) => {
            println!("Nothing to navigate: the listing is empty.");
        }
        Err(e) => println!("{}", e),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn cmd_random(catalog: &Catalog) {
    let mut rng = rand::thread_rng();
    match pick_random(catalog.wallpapers(), &mut rng) {
        Some(wp) => print_details(wp),
        None => println!("The catalog is empty."),
    }
}

pub fn cmd_check(catalog: &Catalog) {
    let stats = catalog.stats();
    println!("Wallpapers:  {}", stats.wallpapers);
    println!("Collections: {}", stats.collections);
    println!("Tags:        {}", stats.tags);
    if stats.undated > 0 {
        println!("Undated:     {} (sorted as oldest)", stats.undated);
    }

    let dangling = catalog.dangling_references();
    if dangling.is_empty() {
        println!("✓ All collection references resolve");
    } else {
        println!("⚠ {} dangling reference(s):", dangling.len());
        for reference in dangling {
            println!("  {}", reference);
        }
    }
}
