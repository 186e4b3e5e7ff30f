// src/config.rs
use std::env;
use std::path::PathBuf;

use crate::locale::ActiveLocale;

const ENV_SEEN_PATH: &str = "BULLETIN_SEEN_PATH";
const DEFAULT_SEEN_PATH: &str = "config/bulletin/seen-messages.txt";

/// Runtime configuration for one orchestrator instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the newline-delimited seen-message file.
    pub seen_file: PathBuf,
    /// Locale records are matched against.
    pub locale: ActiveLocale,
}

impl Config {
    pub fn new(seen_file: impl Into<PathBuf>, locale: ActiveLocale) -> Self {
        Config {
            seen_file: seen_file.into(),
            locale,
        }
    }

    /// Resolve configuration from the environment:
    /// seen file from $BULLETIN_SEEN_PATH, else the default relative path;
    /// locale per [`ActiveLocale::from_env`].
    pub fn from_env() -> Self {
        let seen_file = env::var(ENV_SEEN_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEEN_PATH));
        Config {
            seen_file,
            locale: ActiveLocale::from_env(),
        }
    }
}
