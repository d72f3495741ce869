use std::env;
use std::path::PathBuf;

/// Settings read from the environment. Command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub map_path: Option<PathBuf>,
    pub log_json: bool,
    pub relax: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let map_path = lookup("ROUTEPLANNER_MAP").filter(|s| !s.is_empty()).map(PathBuf::from);
        let log_json = lookup("ROUTEPLANNER_LOG_JSON").map(|s| parse_flag(&s)).transpose()?.unwrap_or(false);
        let relax = lookup("ROUTEPLANNER_RELAX").map(|s| parse_flag(&s)).transpose()?.unwrap_or(false);

        Ok(Self { map_path, log_json, relax })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
