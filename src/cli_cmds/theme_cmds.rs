use anyhow::Result;

use crate::preferences::PreferenceStore;
use crate::ThemeAction;

pub fn cmd_theme(action: &ThemeAction, prefs: &mut dyn PreferenceStore) -> Result<()> {
    match action {
        ThemeAction::Get => {
            println!("{}", prefs.theme());
        }
        ThemeAction::Set { mode } => {
            prefs.set_theme(*mode)?;
            println!("✓ Theme set to {}", mode);
        }
        ThemeAction::Toggle => {
            let mode = prefs.toggle_theme()?;
            println!("✓ Theme set to {}", mode);
        }
    }
    Ok(())
}
