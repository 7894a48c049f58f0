mod browse;
mod collection_cmds;
mod tagging;
mod theme_cmds;

pub use browse::{cmd_check, cmd_list, cmd_navigate, cmd_random, cmd_show, NavigateScope};
pub use collection_cmds::cmd_collection;
pub use tagging::cmd_tag;
pub use theme_cmds::cmd_theme;
