//! `picup config ...` – show and edit settings. Every edit is saved immediately.

use anyhow::Result;
use picup_core::settings::{Settings, SettingsPanel};

use crate::cli::{BlacklistAction, ConfigAction};

pub fn run_config(action: ConfigAction) -> Result<()> {
    let mut settings = Settings::load_default()?;
    match action {
        ConfigAction::Path => println!("{}", settings.path().display()),
        ConfigAction::Show => println!("{}", settings.render()),
        ConfigAction::SetServer { url } => {
            settings.on_server_change(&url)?;
            println!("PicGo server set to {}", settings.config().picgo_server);
        }
        ConfigAction::Blacklist { action } => match action {
            BlacklistAction::Add { domain } => {
                settings.add_blacklisted(&domain)?;
                println!("Blacklisted {}", domain.trim());
            }
            BlacklistAction::Remove { domain } => {
                let removed = settings.remove_blacklisted(&domain)?;
                if removed == 0 {
                    println!("{} was not blacklisted.", domain.trim());
                } else {
                    println!("Removed {}", domain.trim());
                }
            }
            BlacklistAction::Set { domains } => {
                settings.on_blacklist_change(&domains.join("\n"))?;
                println!("Blacklist now has {} domain(s).", settings.config().blacklist.len());
            }
            BlacklistAction::Clear => {
                settings.on_blacklist_change("")?;
                println!("Blacklist cleared.");
            }
        },
    }
    Ok(())
}
