use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use super::{Cli, Commands};
use crate::catalog::Catalog;
use crate::cli_cmds::*;
use crate::preferences::FilePreferences;
use crate::{app, utils};

const LOG_ENV: &str = "ARTSCAPES_LOG";

/// Route logs to stderr for commands, or to a file while the browser owns the screen.
fn init_tracing(to_file: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        let dir = utils::data_dir();
        let log_file = fs::create_dir_all(&dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("artscapes.log"))
        });
        if let Ok(file) = log_file {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact()
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_catalog(cli: &Cli, config: &app::Config) -> Result<Catalog> {
    let path = cli.catalog.clone().or_else(|| config.catalog_path());
    Catalog::load_or_builtin(path.as_deref()).context("Failed to load catalog")
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    let config = app::Config::load().context("Failed to load config")?;
    let sort_default = config.display.default_sort;

    match &cli.command {
        Some(Commands::List { tags, sort }) => {
            let catalog = load_catalog(&cli, &config)?;
            cmd_list(&catalog, tags, sort.unwrap_or(sort_default));
        }
        Some(Commands::Show { id }) => {
            cmd_show(&load_catalog(&cli, &config)?, id);
        }
        Some(Commands::Navigate {
            id,
            direction,
            tags,
            sort,
            collection,
            in_tag,
        }) => {
            let scope = match (collection, in_tag) {
                (Some(slug), _) => NavigateScope::Collection(slug.clone()),
                (None, Some(tag)) => NavigateScope::Tag(tag.clone()),
                (None, None) => NavigateScope::Home {
                    tags: tags.clone(),
                    sort: sort.unwrap_or(sort_default),
                },
            };
            cmd_navigate(&load_catalog(&cli, &config)?, id, *direction, scope);
        }
        Some(Commands::Random) => {
            cmd_random(&load_catalog(&cli, &config)?);
        }
        Some(Commands::Check) => {
            cmd_check(&load_catalog(&cli, &config)?);
        }
        Some(Commands::Tag { action }) => {
            cmd_tag(action, &load_catalog(&cli, &config)?);
        }
        Some(Commands::Collection { action }) => {
            cmd_collection(action, &load_catalog(&cli, &config)?);
        }
        Some(Commands::Theme { action }) => {
            // The theme preference does not depend on the catalog.
            let mut prefs = FilePreferences::load()?;
            cmd_theme(action, &mut prefs)?;
        }
        None => {
            let catalog = load_catalog(&cli, &config)?;
            let prefs = FilePreferences::load()?;
            app::run_tui(catalog, config, Box::new(prefs))?;
        }
    }

    Ok(())
}
