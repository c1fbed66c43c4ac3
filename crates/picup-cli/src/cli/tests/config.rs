//! Tests for the config subcommands.

use super::parse;
use crate::cli::{BlacklistAction, CliCommand, ConfigAction};

#[test]
fn cli_parse_config_show_and_path() {
    assert!(matches!(
        parse(&["picup", "config", "show"]),
        CliCommand::Config {
            action: ConfigAction::Show
        }
    ));
    assert!(matches!(
        parse(&["picup", "config", "path"]),
        CliCommand::Config {
            action: ConfigAction::Path
        }
    ));
}

#[test]
fn cli_parse_set_server() {
    match parse(&["picup", "config", "set-server", "http://127.0.0.1:36677/upload"]) {
        CliCommand::Config {
            action: ConfigAction::SetServer { url },
        } => assert_eq!(url, "http://127.0.0.1:36677/upload"),
        _ => panic!("expected SetServer"),
    }
}

#[test]
fn cli_parse_blacklist_add_remove() {
    match parse(&["picup", "config", "blacklist", "add", "example.com"]) {
        CliCommand::Config {
            action:
                ConfigAction::Blacklist {
                    action: BlacklistAction::Add { domain },
                },
        } => assert_eq!(domain, "example.com"),
        _ => panic!("expected Blacklist Add"),
    }
    match parse(&["picup", "config", "blacklist", "remove", "example.com"]) {
        CliCommand::Config {
            action:
                ConfigAction::Blacklist {
                    action: BlacklistAction::Remove { domain },
                },
        } => assert_eq!(domain, "example.com"),
        _ => panic!("expected Blacklist Remove"),
    }
}

#[test]
fn cli_parse_blacklist_set_and_clear() {
    match parse(&["picup", "config", "blacklist", "set", "a.com", "b.org"]) {
        CliCommand::Config {
            action:
                ConfigAction::Blacklist {
                    action: BlacklistAction::Set { domains },
                },
        } => assert_eq!(domains, vec!["a.com", "b.org"]),
        _ => panic!("expected Blacklist Set"),
    }
    assert!(matches!(
        parse(&["picup", "config", "blacklist", "clear"]),
        CliCommand::Config {
            action: ConfigAction::Blacklist {
                action: BlacklistAction::Clear
            }
        }
    ));
}
