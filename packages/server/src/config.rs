//! Server configuration from command line flags and environment variables.

use std::{net::SocketAddr, time::Duration};

use clap::Parser;

/// Single-room polling chat server
#[derive(Debug, Clone, Parser)]
#[command(name = "parlor-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PARLOR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds between two liveness sweeps
    #[arg(long, env = "PARLOR_SWEEP_INTERVAL_SECS", default_value_t = 15)]
    pub sweep_interval_secs: u64,

    /// Seconds without heartbeat after which a participant is evicted
    #[arg(long, env = "PARLOR_STALE_AFTER_SECS", default_value_t = 10)]
    pub stale_after_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "PARLOR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Sub-second override of the sweep interval (tests)
    #[arg(skip)]
    pub sweep_interval_override: Option<Duration>,

    /// Sub-second override of the staleness threshold (tests)
    #[arg(skip)]
    pub stale_after_override: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            sweep_interval_secs: 15,
            stale_after_secs: 10,
            log_level: "info".to_string(),
            sweep_interval_override: None,
            stale_after_override: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval_override
            .unwrap_or(Duration::from_secs(self.sweep_interval_secs))
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after_override
            .unwrap_or(Duration::from_secs(self.stale_after_secs))
    }

    /// Configuration with millisecond timings, bound to `addr`.
    pub fn with_timings(addr: SocketAddr, sweep_interval: Duration, stale_after: Duration) -> Self {
        Self {
            host: addr.ip().to_string(),
            port: addr.port(),
            sweep_interval_override: Some(sweep_interval),
            stale_after_override: Some(stale_after),
            ..Self::default()
        }
    }
}
