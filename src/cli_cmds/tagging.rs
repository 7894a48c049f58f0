use crate::catalog::Catalog;
use crate::query::wallpapers_by_tag;
use crate::tags::{collect_all_tags, group_tags_alphabetically, tag_counts};
use crate::TagAction;

use super::browse::print_rows;

pub fn cmd_tag(action: &TagAction, catalog: &Catalog) {
    match action {
        TagAction::List { grouped } => {
            let counts = tag_counts(catalog.wallpapers());
            if counts.is_empty() {
                println!("No tags in the catalog.");
                return;
            }

            if *grouped {
                let index = group_tags_alphabetically(&collect_all_tags(catalog.wallpapers()));
                for group in index.groups() {
                    println!("{}", group.key);
                    for tag in &group.tags {
                        println!("  {} ({})", tag, count_of(&counts, tag));
                    }
                }
            } else {
                println!("Tags:");
                for (tag, count) in &counts {
                    println!("  {} ({})", tag, count);
                }
            }
        }
        TagAction::Show { tag } => {
            let wallpapers = wallpapers_by_tag(tag, catalog.wallpapers());
            if wallpapers.is_empty() {
                println!("No wallpapers tagged '{}'", tag);
                println!("See all tags with: artscapes tag list");
            } else {
                println!("Wallpapers tagged '{}':", tag);
                print_rows(&wallpapers);
            }
        }
    }
}

fn count_of(counts: &[(String, usize)], tag: &str) -> usize {
    counts
        .iter()
        .find(|(t, _)| t == tag)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}
