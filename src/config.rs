use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::constant;

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub status: Status,
    pub watch: Watch,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Status {
    pub url: String,
    pub source_index: usize,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            url: constant::DEFAULT_STATUS_URL.to_string(),
            source_index: constant::DEFAULT_SOURCE_INDEX,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Watch {
    pub enabled: bool,
    pub interval_ms: u64,
}

impl Default for Watch {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: constant::DEFAULT_WATCH_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new(config_file: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(config_file)?;
        let mut lines = vec![];
        for l in BufReader::new(file).lines() {
            lines.push(l?);
        }
        Self::from_json_with_comments(&lines.join("\n"))
    }

    //falls back to the defaults when `config_file` doesn't exist
    pub fn new_or_default(config_file: &Path) -> Result<Self, Box<dyn Error>> {
        if (config_file.exists()) {
            Self::new(config_file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json_with_comments(s: &str) -> Result<Self, Box<dyn Error>> {
        let comment_regex = Regex::new(r#"^\s*#.*"#)?;
        let json_string = s
            .lines()
            .filter(|l| !comment_regex.is_match(l))
            .collect::<Vec<&str>>()
            .join("\n");

        let ret: Self = serde_json::from_str(&json_string)?;
        if (ret.status.url.is_empty()) {
            return Err("`status.url` is empty.".into());
        }
        if (ret.watch.interval_ms == 0) {
            return Err("`watch.interval_ms` must be positive.".into());
        }
        Ok(ret)
    }
}
