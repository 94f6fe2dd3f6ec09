use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) listen_addr: SocketAddr,
    pub(crate) db_path: PathBuf,
    pub(crate) log_format: LogFormat,
}

impl Config {
    /// Read `BUDGET_*` variables, loading a `.env` file first if present.
    pub(crate) fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("BUDGET_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr
            .trim()
            .parse()
            .with_context(|| format!("Invalid BUDGET_LISTEN_ADDR: '{listen_addr}'"))?;

        let db_path = match lookup("BUDGET_DB_PATH").filter(|p| !p.trim().is_empty()) {
            Some(p) => PathBuf::from(p.trim()),
            None => default_db_path()?,
        };

        let log_format = match lookup("BUDGET_LOG_FORMAT") {
            None => LogFormat::Text,
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "" | "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => anyhow::bail!("Invalid BUDGET_LOG_FORMAT: '{other}' (expected text or json)"),
            },
        };

        Ok(Self {
            listen_addr,
            db_path,
            log_format,
        })
    }
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "monthly-budget", "MonthlyBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join("budget.db"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
