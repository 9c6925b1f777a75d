//! Server configuration, assembled from command-line flags and environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{bail, Context, Result};
use slot_engine::{to_minutes, to_time, WorkWindow};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub window: WorkWindow,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            window: WorkWindow::default(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a work window from `HH:MM` bounds.
///
/// The start must be strictly before the end.
pub fn parse_window(start: &str, end: &str) -> Result<WorkWindow> {
    let start_min = to_minutes(start).with_context(|| format!("Invalid work start: {}", start))?;
    let end_min = to_minutes(end).with_context(|| format!("Invalid work end: {}", end))?;

    if start_min >= end_min {
        bail!(
            "Work window start {} must be before end {}",
            to_time(start_min),
            to_time(end_min)
        );
    }

    Ok(WorkWindow::new(start_min, end_min))
}
