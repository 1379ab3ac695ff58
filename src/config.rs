//! Process Configuration
//!
//! Values come from `--flag value` pairs on the command line, falling back to
//! environment variables, then to defaults.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_DATA_PATH: &str = "data";
pub const DEFAULT_MAX_RADIUS: f64 = 5000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    /// Largest search radius accepted by `/search`, in meters.
    pub max_radius: f64,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Parses flags, consulting `env` for anything not given on the command line.
    pub fn parse(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut bind = env("SHOP_SEARCH_BIND");
        let mut data = env("SHOP_SEARCH_DATA");
        let mut max_radius = env("SHOP_SEARCH_MAX_RADIUS");
        let mut log_level = env("SHOP_SEARCH_LOG");

        let mut i = 0;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--bind" => &mut bind,
                "--data" => &mut data,
                "--max-radius" => &mut max_radius,
                "--log-level" => &mut log_level,
                other => anyhow::bail!("unknown argument \"{}\"", other),
            };
            let value = args
                .get(i + 1)
                .with_context(|| format!("{} requires a value", args[i]))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let bind_addr = bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND)
            .parse()
            .context("invalid --bind address")?;
        let max_radius = match max_radius {
            Some(raw) => {
                let value: f64 = raw.parse().context("invalid --max-radius")?;
                anyhow::ensure!(value > 0.0, "--max-radius must be positive, got {}", value);
                value
            }
            None => DEFAULT_MAX_RADIUS,
        };
        let log_level = match log_level {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid --log-level \"{}\"", raw))?,
            None => tracing::Level::INFO,
        };

        Ok(Self {
            bind_addr,
            data_path: PathBuf::from(data.as_deref().unwrap_or(DEFAULT_DATA_PATH)),
            max_radius,
            log_level,
        })
    }
}
