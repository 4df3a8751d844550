//! Server configuration for btcinr.
//!
//! Every option can be given as a flag or through the environment.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--host` | `BTCINR_HOST` | `0.0.0.0` |
//! | `--port` | `BTCINR_PORT` | `8000` |
//! | `--cors-origin` | `BTCINR_CORS_ORIGINS` | `http://localhost:5000,http://127.0.0.1:5000` |
//! | `--utc-offset` | `BTCINR_UTC_OFFSET` | `+00:00` |
//! | `--log-filter` | `RUST_LOG` | `btcinr_web=info,btcinr_core=info,tower_http=info` |
//!
//! # Examples
//!
//! ```bash
//! # Serve on localhost with labels in Indian Standard Time
//! btcinr --host 127.0.0.1 --utc-offset +05:30
//!
//! # Allow an extra frontend origin
//! BTCINR_CORS_ORIGINS=http://localhost:5173,http://localhost:5000 btcinr
//! ```

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::UtcOffset;

use crate::error::ConfigError;

pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5000", "http://127.0.0.1:5000"];

const OFFSET_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

/// Synthetic Bitcoin to INR price API
#[derive(Debug, Clone, Parser)]
#[command(
    name = "btcinr",
    author,
    version,
    about = "API for Bitcoin to INR price data with dummy data for demonstration"
)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "BTCINR_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "BTCINR_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origin allowed to make cross-origin requests. Repeatable.
    #[arg(
        long = "cors-origin",
        env = "BTCINR_CORS_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_CORS_ORIGINS
    )]
    pub cors_origins: Vec<String>,

    /// Offset applied to the clock, e.g. `+05:30`.
    ///
    /// Controls the offset of every returned datetime and the hour, weekday
    /// and day shown in series labels.
    #[arg(
        long,
        env = "BTCINR_UTC_OFFSET",
        default_value = "+00:00",
        value_parser = parse_utc_offset
    )]
    pub utc_offset: UtcOffset,

    /// tracing filter directive.
    #[arg(
        long,
        env = "RUST_LOG",
        default_value = "btcinr_web=info,btcinr_core=info,tower_http=info"
    )]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            cors_origins: DEFAULT_CORS_ORIGINS.map(String::from).to_vec(),
            utc_offset: UtcOffset::UTC,
            log_filter: String::from("btcinr_web=info,btcinr_core=info,tower_http=info"),
        }
    }
}

/// Parse `+HH:MM` / `-HH:MM` into an offset.
pub fn parse_utc_offset(input: &str) -> Result<UtcOffset, ConfigError> {
    UtcOffset::parse(input.trim(), OFFSET_FORMAT).map_err(|_| ConfigError::InvalidOffset {
        value: input.to_owned(),
    })
}
