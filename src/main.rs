mod app;
mod catalog;
mod cli;
mod cli_cmds;
mod collections;
mod error;
mod navigation;
mod preferences;
mod query;
mod tags;
mod ui;
mod utils;
mod wallpaper;

use anyhow::Result;

pub(crate) use cli::{CollectionAction, TagAction, ThemeAction};

fn main() -> Result<()> {
    cli::run()
}
