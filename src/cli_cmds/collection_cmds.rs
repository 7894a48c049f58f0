use crate::catalog::Catalog;
use crate::query::{collection_cards, wallpapers_in_collection, ActiveTags};
use crate::CollectionAction;

use super::browse::print_rows;

pub fn cmd_collection(action: &CollectionAction, catalog: &Catalog) {
    match action {
        CollectionAction::List { tags } => {
            let active: ActiveTags = tags.iter().cloned().collect();
            list_collections(catalog, &active);
        }
        CollectionAction::Show { slug } => match catalog.require_collection(slug) {
            Ok(col) => {
                println!("{}", col.name);
                println!("  {}", col.description);
                if !col.tags.is_empty() {
                    println!("  Tags: {}", col.tags.join(", "));
                }
                if let Some(label) = col.download_label() {
                    println!("  {}", label);
                }
                println!();

                let members = wallpapers_in_collection(col, catalog.wallpapers());
                if members.is_empty() {
                    println!("This collection has no wallpapers yet.");
                } else {
                    print_rows(&members);
                }
            }
            Err(e) => {
                println!("Collection '{}' not found.", slug);
                tracing::debug!(error = %e, "collection lookup failed");
                println!();
                list_collections(catalog, &ActiveTags::new());
            }
        },
    }
}

fn list_collections(catalog: &Catalog, active: &ActiveTags) {
    let cards = collection_cards(catalog, active);
    if cards.is_empty() {
        if active.is_empty() {
            println!("No collections in the catalog.");
        } else {
            println!("No collections match the selected tags.");
        }
        return;
    }

    println!("Collections:");
    for card in cards {
        let col = card.collection;
        let cover = card
            .cover
            .map(|wp| wp.title.as_str())
            .unwrap_or("(no cover)");
        println!(
            "  {:<24} {:<24} {} wallpaper(s), cover: {}",
            col.slug,
            col.name,
            col.wallpaper_ids.len(),
            cover
        );
    }
}
