mod args;
mod runner;

pub(crate) use args::{Cli, CollectionAction, Commands, TagAction, ThemeAction};
pub(crate) use runner::run;
